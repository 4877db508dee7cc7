//! Review DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use domain_reviews::review::{
    CategoryRatings, Review, ReviewResponse, ReviewStatus, ReviewUpdate, ReviewerType,
};

#[derive(Debug, Deserialize, Validate)]
pub struct SubmitReviewRequest {
    #[validate(range(min = 1, max = 5))]
    pub rating_communication: u8,
    #[validate(range(min = 1, max = 5))]
    pub rating_candidate_care: u8,
    #[validate(range(min = 1, max = 5))]
    pub rating_job_quality: u8,
    #[validate(range(min = 1, max = 5))]
    pub rating_speed: u8,
    pub pros: String,
    pub cons: String,
    #[validate(length(min = 1))]
    pub summary: String,
    pub reviewer_type: ReviewerType,
}

impl SubmitReviewRequest {
    pub fn ratings(&self) -> CategoryRatings {
        CategoryRatings {
            communication: self.rating_communication,
            candidate_care: self.rating_candidate_care,
            job_quality: self.rating_job_quality,
            speed: self.rating_speed,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateReviewRequest {
    pub rating_communication: Option<u8>,
    pub rating_candidate_care: Option<u8>,
    pub rating_job_quality: Option<u8>,
    pub rating_speed: Option<u8>,
    pub pros: Option<String>,
    pub cons: Option<String>,
    pub summary: Option<String>,
    pub reviewer_type: Option<ReviewerType>,
}

impl UpdateReviewRequest {
    /// Builds the domain update; partial rating edits fill the gaps from the
    /// current review so the overall figure stays a mean of four.
    pub fn into_update(self, current: &CategoryRatings) -> ReviewUpdate {
        let any_rating = self.rating_communication.is_some()
            || self.rating_candidate_care.is_some()
            || self.rating_job_quality.is_some()
            || self.rating_speed.is_some();

        let ratings = any_rating.then(|| CategoryRatings {
            communication: self.rating_communication.unwrap_or(current.communication),
            candidate_care: self.rating_candidate_care.unwrap_or(current.candidate_care),
            job_quality: self.rating_job_quality.unwrap_or(current.job_quality),
            speed: self.rating_speed.unwrap_or(current.speed),
        });

        ReviewUpdate {
            ratings,
            pros: self.pros,
            cons: self.cons,
            summary: self.summary,
            reviewer_type: self.reviewer_type,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RespondToReviewRequest {
    pub response_text: String,
}

#[derive(Debug, Deserialize)]
pub struct SetReviewStatusRequest {
    pub status: ReviewStatus,
}

#[derive(Debug, Serialize)]
pub struct ReviewDto {
    pub id: Uuid,
    pub company_id: Uuid,
    pub rating_communication: u8,
    pub rating_candidate_care: u8,
    pub rating_job_quality: u8,
    pub rating_speed: u8,
    pub overall_rating: f64,
    pub pros: String,
    pub cons: String,
    pub summary: String,
    pub reviewer_type: ReviewerType,
    pub status: ReviewStatus,
    pub helpful_count: u32,
    pub created_at: DateTime<Utc>,
}

impl From<Review> for ReviewDto {
    fn from(review: Review) -> Self {
        ReviewDto {
            id: *review.id.as_uuid(),
            company_id: *review.company_id.as_uuid(),
            rating_communication: review.ratings.communication,
            rating_candidate_care: review.ratings.candidate_care,
            rating_job_quality: review.ratings.job_quality,
            rating_speed: review.ratings.speed,
            overall_rating: review.overall_rating,
            pros: review.pros,
            cons: review.cons,
            summary: review.summary,
            reviewer_type: review.reviewer_type,
            status: review.status,
            helpful_count: review.helpful_count,
            created_at: review.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ResponseDto {
    pub id: Uuid,
    pub review_id: Uuid,
    pub response_text: String,
    pub created_at: DateTime<Utc>,
}

impl From<ReviewResponse> for ResponseDto {
    fn from(response: ReviewResponse) -> Self {
        ResponseDto {
            id: *response.id.as_uuid(),
            review_id: *response.review_id.as_uuid(),
            response_text: response.response_text,
            created_at: response.created_at,
        }
    }
}
