//! Review aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{CompanyId, ResponseId, ReviewId, UserId};

/// Which side of the recruitment process the reviewer sat on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewerType {
    Candidate,
    HiringManager,
}

/// Moderation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
    Flagged,
}

/// The four category ratings, each 1-5 stars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRatings {
    pub communication: u8,
    pub candidate_care: u8,
    pub job_quality: u8,
    pub speed: u8,
}

impl CategoryRatings {
    pub fn all_in_range(&self) -> bool {
        [
            self.communication,
            self.candidate_care,
            self.job_quality,
            self.speed,
        ]
        .iter()
        .all(|r| (1..=5).contains(r))
    }

    /// Mean of the four categories, rounded to one decimal
    pub fn overall(&self) -> f64 {
        let sum = self.communication as f64
            + self.candidate_care as f64
            + self.job_quality as f64
            + self.speed as f64;
        (sum / 4.0 * 10.0).round() / 10.0
    }
}

/// A star-rated review of a company
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub company_id: CompanyId,
    pub user_id: UserId,
    pub ratings: CategoryRatings,
    pub overall_rating: f64,
    pub pros: String,
    pub cons: String,
    pub summary: String,
    pub reviewer_type: ReviewerType,
    pub status: ReviewStatus,
    pub helpful_count: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update applied by the review's author
#[derive(Debug, Clone, Default)]
pub struct ReviewUpdate {
    pub ratings: Option<CategoryRatings>,
    pub pros: Option<String>,
    pub cons: Option<String>,
    pub summary: Option<String>,
    pub reviewer_type: Option<ReviewerType>,
}

impl Review {
    /// Creates a review, auto-approved on submission
    pub fn new(
        company_id: CompanyId,
        user_id: UserId,
        ratings: CategoryRatings,
        pros: String,
        cons: String,
        summary: String,
        reviewer_type: ReviewerType,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: ReviewId::new_v7(),
            company_id,
            user_id,
            ratings,
            overall_rating: ratings.overall(),
            pros,
            cons,
            summary,
            reviewer_type,
            status: ReviewStatus::Approved,
            helpful_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies an author edit; changed ratings refresh the overall figure
    pub fn apply(&mut self, update: ReviewUpdate) {
        if let Some(ratings) = update.ratings {
            self.ratings = ratings;
            self.overall_rating = ratings.overall();
        }
        if let Some(pros) = update.pros {
            self.pros = pros;
        }
        if let Some(cons) = update.cons {
            self.cons = cons;
        }
        if let Some(summary) = update.summary {
            self.summary = summary;
        }
        if let Some(reviewer_type) = update.reviewer_type {
            self.reviewer_type = reviewer_type;
        }
        self.updated_at = Utc::now();
    }

    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}

/// A company owner's public response to a review
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewResponse {
    pub id: ResponseId,
    pub review_id: ReviewId,
    pub user_id: UserId,
    pub response_text: String,
    pub created_at: DateTime<Utc>,
}

impl ReviewResponse {
    pub fn new(review_id: ReviewId, user_id: UserId, response_text: String) -> Self {
        Self {
            id: ResponseId::new_v7(),
            review_id,
            user_id,
            response_text,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ratings(c: u8, cc: u8, j: u8, s: u8) -> CategoryRatings {
        CategoryRatings {
            communication: c,
            candidate_care: cc,
            job_quality: j,
            speed: s,
        }
    }

    #[test]
    fn test_overall_is_mean_to_one_decimal() {
        assert_eq!(ratings(4, 4, 4, 4).overall(), 4.0);
        assert_eq!(ratings(5, 4, 4, 4).overall(), 4.3);
        assert_eq!(ratings(1, 2, 3, 4).overall(), 2.5);
    }

    #[test]
    fn test_rating_range_check() {
        assert!(ratings(1, 5, 3, 2).all_in_range());
        assert!(!ratings(0, 5, 3, 2).all_in_range());
        assert!(!ratings(1, 6, 3, 2).all_in_range());
    }

    #[test]
    fn test_new_review_is_auto_approved() {
        let review = Review::new(
            CompanyId::new(),
            UserId::new(),
            ratings(4, 4, 5, 3),
            "Responsive".to_string(),
            "Pushy".to_string(),
            "Decent overall".to_string(),
            ReviewerType::Candidate,
        );
        assert_eq!(review.status, ReviewStatus::Approved);
        assert_eq!(review.overall_rating, 4.0);
        assert_eq!(review.helpful_count, 0);
    }

    #[test]
    fn test_apply_recomputes_overall_only_on_rating_change() {
        let mut review = Review::new(
            CompanyId::new(),
            UserId::new(),
            ratings(4, 4, 4, 4),
            "a".to_string(),
            "b".to_string(),
            "c".to_string(),
            ReviewerType::HiringManager,
        );

        review.apply(ReviewUpdate {
            pros: Some("updated".to_string()),
            ..Default::default()
        });
        assert_eq!(review.overall_rating, 4.0);

        review.apply(ReviewUpdate {
            ratings: Some(ratings(5, 5, 5, 5)),
            ..Default::default()
        });
        assert_eq!(review.overall_rating, 5.0);
    }
}
