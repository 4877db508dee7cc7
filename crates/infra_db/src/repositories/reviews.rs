//! Review repository
//!
//! PostgreSQL implementation of [`domain_reviews::ReviewStore`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use core_kernel::{CompanyId, DomainPort, PortError, ResponseId, ReviewId, UserId};
use domain_reviews::ports::ReviewStore;
use domain_reviews::review::{
    CategoryRatings, Review, ReviewResponse, ReviewStatus, ReviewerType,
};

use crate::error::port_error;

/// Repository for reviews and owner responses
#[derive(Debug, Clone)]
pub struct PgReviewStore {
    pool: PgPool,
}

impl PgReviewStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const REVIEW_COLUMNS: &str = "id, company_id, user_id, rating_communication, rating_candidate_care, \
     rating_job_quality, rating_speed, overall_rating, pros, cons, summary, \
     reviewer_type, status, helpful_count, created_at, updated_at";

impl DomainPort for PgReviewStore {}

#[async_trait]
impl ReviewStore for PgReviewStore {
    async fn get(&self, id: ReviewId) -> Result<Option<Review>, PortError> {
        let row: Option<ReviewRow> =
            sqlx::query_as(&format!("SELECT {REVIEW_COLUMNS} FROM reviews WHERE id = $1"))
                .bind(id.as_uuid())
                .fetch_optional(&self.pool)
                .await
                .map_err(port_error)?;

        Ok(row.map(Review::from))
    }

    async fn find_by_company_and_user(
        &self,
        company_id: CompanyId,
        user_id: UserId,
    ) -> Result<Option<Review>, PortError> {
        let row: Option<ReviewRow> = sqlx::query_as(&format!(
            "SELECT {REVIEW_COLUMNS} FROM reviews WHERE company_id = $1 AND user_id = $2"
        ))
        .bind(company_id.as_uuid())
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(port_error)?;

        Ok(row.map(Review::from))
    }

    async fn insert(&self, review: Review) -> Result<(), PortError> {
        sqlx::query(
            "INSERT INTO reviews ( \
                 id, company_id, user_id, rating_communication, rating_candidate_care, \
                 rating_job_quality, rating_speed, overall_rating, pros, cons, summary, \
                 reviewer_type, status, helpful_count, created_at, updated_at \
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)",
        )
        .bind(review.id.as_uuid())
        .bind(review.company_id.as_uuid())
        .bind(review.user_id.as_uuid())
        .bind(review.ratings.communication as i16)
        .bind(review.ratings.candidate_care as i16)
        .bind(review.ratings.job_quality as i16)
        .bind(review.ratings.speed as i16)
        .bind(review.overall_rating)
        .bind(&review.pros)
        .bind(&review.cons)
        .bind(&review.summary)
        .bind(ReviewerTypeRow::from(review.reviewer_type))
        .bind(ReviewStatusRow::from(review.status))
        .bind(review.helpful_count as i32)
        .bind(review.created_at)
        .bind(review.updated_at)
        .execute(&self.pool)
        .await
        .map_err(port_error)?;

        Ok(())
    }

    async fn update(&self, review: &Review) -> Result<(), PortError> {
        let result = sqlx::query(
            "UPDATE reviews \
             SET rating_communication = $2, rating_candidate_care = $3, \
                 rating_job_quality = $4, rating_speed = $5, overall_rating = $6, \
                 pros = $7, cons = $8, summary = $9, reviewer_type = $10, updated_at = $11 \
             WHERE id = $1",
        )
        .bind(review.id.as_uuid())
        .bind(review.ratings.communication as i16)
        .bind(review.ratings.candidate_care as i16)
        .bind(review.ratings.job_quality as i16)
        .bind(review.ratings.speed as i16)
        .bind(review.overall_rating)
        .bind(&review.pros)
        .bind(&review.cons)
        .bind(&review.summary)
        .bind(ReviewerTypeRow::from(review.reviewer_type))
        .bind(review.updated_at)
        .execute(&self.pool)
        .await
        .map_err(port_error)?;

        if result.rows_affected() == 0 {
            return Err(PortError::not_found("Review", review.id));
        }
        Ok(())
    }

    async fn delete(&self, id: ReviewId) -> Result<(), PortError> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(port_error)?;

        if result.rows_affected() == 0 {
            return Err(PortError::not_found("Review", id));
        }
        Ok(())
    }

    async fn set_status(&self, id: ReviewId, status: ReviewStatus) -> Result<(), PortError> {
        let result = sqlx::query("UPDATE reviews SET status = $2, updated_at = $3 WHERE id = $1")
            .bind(id.as_uuid())
            .bind(ReviewStatusRow::from(status))
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(port_error)?;

        if result.rows_affected() == 0 {
            return Err(PortError::not_found("Review", id));
        }
        Ok(())
    }

    async fn insert_response(&self, response: ReviewResponse) -> Result<(), PortError> {
        sqlx::query(
            "INSERT INTO review_responses (id, review_id, user_id, response_text, created_at) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(response.id.as_uuid())
        .bind(response.review_id.as_uuid())
        .bind(response.user_id.as_uuid())
        .bind(&response.response_text)
        .bind(response.created_at)
        .execute(&self.pool)
        .await
        .map_err(port_error)?;

        Ok(())
    }

    async fn company_owner(&self, company_id: CompanyId) -> Result<Option<UserId>, PortError> {
        let owner: Option<Option<Uuid>> =
            sqlx::query_scalar("SELECT owner_id FROM companies WHERE id = $1")
                .bind(company_id.as_uuid())
                .fetch_optional(&self.pool)
                .await
                .map_err(port_error)?;

        Ok(owner.flatten().map(UserId::from_uuid))
    }
}

/// Reviewer type enumeration, database side
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "reviewer_type", rename_all = "snake_case")]
enum ReviewerTypeRow {
    Candidate,
    HiringManager,
}

/// Review status enumeration, database side
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "review_status", rename_all = "snake_case")]
enum ReviewStatusRow {
    Pending,
    Approved,
    Rejected,
    Flagged,
}

impl From<ReviewerType> for ReviewerTypeRow {
    fn from(rt: ReviewerType) -> Self {
        match rt {
            ReviewerType::Candidate => ReviewerTypeRow::Candidate,
            ReviewerType::HiringManager => ReviewerTypeRow::HiringManager,
        }
    }
}

impl From<ReviewerTypeRow> for ReviewerType {
    fn from(row: ReviewerTypeRow) -> Self {
        match row {
            ReviewerTypeRow::Candidate => ReviewerType::Candidate,
            ReviewerTypeRow::HiringManager => ReviewerType::HiringManager,
        }
    }
}

impl From<ReviewStatus> for ReviewStatusRow {
    fn from(status: ReviewStatus) -> Self {
        match status {
            ReviewStatus::Pending => ReviewStatusRow::Pending,
            ReviewStatus::Approved => ReviewStatusRow::Approved,
            ReviewStatus::Rejected => ReviewStatusRow::Rejected,
            ReviewStatus::Flagged => ReviewStatusRow::Flagged,
        }
    }
}

impl From<ReviewStatusRow> for ReviewStatus {
    fn from(row: ReviewStatusRow) -> Self {
        match row {
            ReviewStatusRow::Pending => ReviewStatus::Pending,
            ReviewStatusRow::Approved => ReviewStatus::Approved,
            ReviewStatusRow::Rejected => ReviewStatus::Rejected,
            ReviewStatusRow::Flagged => ReviewStatus::Flagged,
        }
    }
}

/// Database row for a review
#[derive(Debug, Clone, sqlx::FromRow)]
struct ReviewRow {
    id: Uuid,
    company_id: Uuid,
    user_id: Uuid,
    rating_communication: i16,
    rating_candidate_care: i16,
    rating_job_quality: i16,
    rating_speed: i16,
    overall_rating: f64,
    pros: String,
    cons: String,
    summary: String,
    reviewer_type: ReviewerTypeRow,
    status: ReviewStatusRow,
    helpful_count: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ReviewRow> for Review {
    fn from(row: ReviewRow) -> Self {
        Review {
            id: ReviewId::from_uuid(row.id),
            company_id: CompanyId::from_uuid(row.company_id),
            user_id: UserId::from_uuid(row.user_id),
            ratings: CategoryRatings {
                communication: row.rating_communication as u8,
                candidate_care: row.rating_candidate_care as u8,
                job_quality: row.rating_job_quality as u8,
                speed: row.rating_speed as u8,
            },
            overall_rating: row.overall_rating,
            pros: row.pros,
            cons: row.cons,
            summary: row.summary,
            reviewer_type: row.reviewer_type.into(),
            status: row.status.into(),
            helpful_count: row.helpful_count.max(0) as u32,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            ReviewStatus::Pending,
            ReviewStatus::Approved,
            ReviewStatus::Rejected,
            ReviewStatus::Flagged,
        ] {
            assert_eq!(ReviewStatus::from(ReviewStatusRow::from(status)), status);
        }
    }
}
