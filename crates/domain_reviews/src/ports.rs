//! Review Domain Ports

use async_trait::async_trait;

use core_kernel::{CompanyId, DomainPort, PortError, ReviewId, UserId};

use crate::review::{Review, ReviewResponse, ReviewStatus};

/// Persistent-store port for reviews and responses
#[async_trait]
pub trait ReviewStore: DomainPort {
    /// Retrieves a review by ID
    async fn get(&self, id: ReviewId) -> Result<Option<Review>, PortError>;

    /// The review a user left on a company, if any
    async fn find_by_company_and_user(
        &self,
        company_id: CompanyId,
        user_id: UserId,
    ) -> Result<Option<Review>, PortError>;

    /// Inserts a new review. Returns [`PortError::Conflict`] when the user
    /// already reviewed the company.
    async fn insert(&self, review: Review) -> Result<(), PortError>;

    /// Replaces the mutable fields of a review by primary key
    async fn update(&self, review: &Review) -> Result<(), PortError>;

    /// Deletes a review
    async fn delete(&self, id: ReviewId) -> Result<(), PortError>;

    /// Sets the moderation status of a review
    async fn set_status(&self, id: ReviewId, status: ReviewStatus) -> Result<(), PortError>;

    /// Records an owner response
    async fn insert_response(&self, response: ReviewResponse) -> Result<(), PortError>;

    /// The verified owner of a company, when one exists
    async fn company_owner(&self, company_id: CompanyId) -> Result<Option<UserId>, PortError>;
}

/// Mock implementations for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// In-memory mock implementation of [`ReviewStore`]
    #[derive(Debug, Default)]
    pub struct MockReviewStore {
        reviews: Arc<RwLock<HashMap<ReviewId, Review>>>,
        responses: Arc<RwLock<Vec<ReviewResponse>>>,
        owners: Arc<RwLock<HashMap<CompanyId, UserId>>>,
    }

    impl MockReviewStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Registers a company owner for response gating
        pub async fn with_owner(self, company_id: CompanyId, owner: UserId) -> Self {
            self.owners.write().await.insert(company_id, owner);
            self
        }

        /// Seeds a review directly
        pub async fn seed(&self, review: Review) {
            self.reviews.write().await.insert(review.id, review);
        }

        /// Responses recorded so far
        pub async fn responses(&self) -> Vec<ReviewResponse> {
            self.responses.read().await.clone()
        }
    }

    impl DomainPort for MockReviewStore {}

    #[async_trait]
    impl ReviewStore for MockReviewStore {
        async fn get(&self, id: ReviewId) -> Result<Option<Review>, PortError> {
            Ok(self.reviews.read().await.get(&id).cloned())
        }

        async fn find_by_company_and_user(
            &self,
            company_id: CompanyId,
            user_id: UserId,
        ) -> Result<Option<Review>, PortError> {
            Ok(self
                .reviews
                .read()
                .await
                .values()
                .find(|r| r.company_id == company_id && r.user_id == user_id)
                .cloned())
        }

        async fn insert(&self, review: Review) -> Result<(), PortError> {
            let mut reviews = self.reviews.write().await;
            let duplicate = reviews
                .values()
                .any(|r| r.company_id == review.company_id && r.user_id == review.user_id);
            if duplicate {
                return Err(PortError::conflict("user already reviewed this company"));
            }
            reviews.insert(review.id, review);
            Ok(())
        }

        async fn update(&self, review: &Review) -> Result<(), PortError> {
            let mut reviews = self.reviews.write().await;
            if !reviews.contains_key(&review.id) {
                return Err(PortError::not_found("Review", review.id));
            }
            reviews.insert(review.id, review.clone());
            Ok(())
        }

        async fn delete(&self, id: ReviewId) -> Result<(), PortError> {
            self.reviews
                .write()
                .await
                .remove(&id)
                .map(|_| ())
                .ok_or_else(|| PortError::not_found("Review", id))
        }

        async fn set_status(&self, id: ReviewId, status: ReviewStatus) -> Result<(), PortError> {
            let mut reviews = self.reviews.write().await;
            let review = reviews
                .get_mut(&id)
                .ok_or_else(|| PortError::not_found("Review", id))?;
            review.status = status;
            Ok(())
        }

        async fn insert_response(&self, response: ReviewResponse) -> Result<(), PortError> {
            self.responses.write().await.push(response);
            Ok(())
        }

        async fn company_owner(
            &self,
            company_id: CompanyId,
        ) -> Result<Option<UserId>, PortError> {
            Ok(self.owners.read().await.get(&company_id).copied())
        }
    }
}
