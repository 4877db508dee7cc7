//! Review service
//!
//! Submission, author edits, owner responses, and admin moderation. Every
//! operation takes the explicit actor; admin status is checked per call.

use std::sync::Arc;

use tracing::info;

use core_kernel::{Actor, CompanyId, ReviewId};

use crate::error::ReviewError;
use crate::ports::ReviewStore;
use crate::review::{CategoryRatings, Review, ReviewResponse, ReviewStatus, ReviewUpdate, ReviewerType};

/// Review submission input
#[derive(Debug, Clone)]
pub struct SubmitReview {
    pub company_id: CompanyId,
    pub ratings: CategoryRatings,
    pub pros: String,
    pub cons: String,
    pub summary: String,
    pub reviewer_type: ReviewerType,
}

pub struct ReviewService {
    store: Arc<dyn ReviewStore>,
}

impl ReviewService {
    pub fn new(store: Arc<dyn ReviewStore>) -> Self {
        Self { store }
    }

    /// Submits a review. One review per user per company; ratings are
    /// range-checked before anything is written.
    pub async fn submit_review(
        &self,
        actor: Option<&Actor>,
        request: SubmitReview,
    ) -> Result<Review, ReviewError> {
        let actor = actor.ok_or(ReviewError::Unauthenticated)?;

        if !request.ratings.all_in_range() {
            return Err(ReviewError::validation("Ratings must be between 1 and 5"));
        }
        if request.summary.trim().is_empty() {
            return Err(ReviewError::validation("Summary is required"));
        }

        if self
            .store
            .find_by_company_and_user(request.company_id, actor.user_id)
            .await?
            .is_some()
        {
            return Err(ReviewError::AlreadyReviewed);
        }

        let review = Review::new(
            request.company_id,
            actor.user_id,
            request.ratings,
            request.pros,
            request.cons,
            request.summary,
            request.reviewer_type,
        );

        match self.store.insert(review.clone()).await {
            Ok(()) => {}
            Err(e) if e.is_conflict() => return Err(ReviewError::AlreadyReviewed),
            Err(e) => return Err(e.into()),
        }

        info!(review = %review.id, company = %review.company_id, "review submitted");
        Ok(review)
    }

    /// Public review lookup
    pub async fn get_review(&self, review_id: ReviewId) -> Result<Review, ReviewError> {
        self.store
            .get(review_id)
            .await?
            .ok_or(ReviewError::ReviewNotFound)
    }

    /// Applies an author edit to their own review
    pub async fn update_review(
        &self,
        actor: Option<&Actor>,
        review_id: ReviewId,
        update: ReviewUpdate,
    ) -> Result<Review, ReviewError> {
        let actor = actor.ok_or(ReviewError::Unauthenticated)?;
        let mut review = self
            .store
            .get(review_id)
            .await?
            .ok_or(ReviewError::ReviewNotFound)?;

        if !review.is_authored_by(actor.user_id) {
            return Err(ReviewError::EditForbidden);
        }
        if let Some(ratings) = &update.ratings {
            if !ratings.all_in_range() {
                return Err(ReviewError::validation("Ratings must be between 1 and 5"));
            }
        }

        review.apply(update);
        self.store.update(&review).await?;
        Ok(review)
    }

    /// Deletes the caller's own review
    pub async fn delete_review(
        &self,
        actor: Option<&Actor>,
        review_id: ReviewId,
    ) -> Result<(), ReviewError> {
        let actor = actor.ok_or(ReviewError::Unauthenticated)?;
        let review = self
            .store
            .get(review_id)
            .await?
            .ok_or(ReviewError::ReviewNotFound)?;

        if !review.is_authored_by(actor.user_id) {
            return Err(ReviewError::DeleteForbidden);
        }

        self.store.delete(review_id).await?;
        info!(review = %review_id, "review deleted by author");
        Ok(())
    }

    /// Records the company owner's public response to a review
    pub async fn respond_to_review(
        &self,
        actor: Option<&Actor>,
        review_id: ReviewId,
        response_text: String,
    ) -> Result<ReviewResponse, ReviewError> {
        let actor = actor.ok_or(ReviewError::Unauthenticated)?;
        if response_text.trim().is_empty() {
            return Err(ReviewError::validation("Response text is required"));
        }

        let review = self
            .store
            .get(review_id)
            .await?
            .ok_or(ReviewError::ReviewNotFound)?;

        let owner = self.store.company_owner(review.company_id).await?;
        if owner != Some(actor.user_id) {
            return Err(ReviewError::ResponseForbidden);
        }

        let response = ReviewResponse::new(review_id, actor.user_id, response_text);
        self.store.insert_response(response.clone()).await?;

        info!(review = %review_id, "owner response recorded");
        Ok(response)
    }

    /// Moves a review to another moderation status. Admin only.
    pub async fn set_review_status(
        &self,
        actor: Option<&Actor>,
        review_id: ReviewId,
        status: ReviewStatus,
    ) -> Result<(), ReviewError> {
        self.require_admin(actor)?;

        match self.store.set_status(review_id, status).await {
            Ok(()) => Ok(()),
            Err(e) if e.is_not_found() => Err(ReviewError::ReviewNotFound),
            Err(e) => Err(e.into()),
        }
    }

    /// Removes a review on admin authority (moderation takedown)
    pub async fn delete_review_admin(
        &self,
        actor: Option<&Actor>,
        review_id: ReviewId,
    ) -> Result<(), ReviewError> {
        let admin = self.require_admin(actor)?;

        match self.store.delete(review_id).await {
            Ok(()) => {}
            Err(e) if e.is_not_found() => return Err(ReviewError::ReviewNotFound),
            Err(e) => return Err(e.into()),
        }

        info!(review = %review_id, admin = %admin.user_id, "review removed by admin");
        Ok(())
    }

    fn require_admin<'a>(&self, actor: Option<&'a Actor>) -> Result<&'a Actor, ReviewError> {
        let actor = actor.ok_or(ReviewError::Unauthenticated)?;
        if !actor.is_admin {
            return Err(ReviewError::Unauthorized);
        }
        Ok(actor)
    }
}
