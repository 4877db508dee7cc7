//! Claim Workflow Ports
//!
//! This module defines the interfaces the claim engine requires from its
//! external collaborators: the persistent store and the notification sender.
//! The identity provider is deliberately NOT a port — every operation takes
//! an explicit [`core_kernel::Actor`] resolved by the caller.
//!
//! Adapters:
//!
//! - **Internal**: PostgreSQL (infra_db)
//! - **Mock**: in-memory, for unit tests (feature `mock`)

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use core_kernel::{ClaimRequestId, CompanyId, DomainPort, PortError, UserId};

use crate::claim::ClaimRequest;

/// The claim-relevant projection of a company listing.
#[derive(Debug, Clone)]
pub struct CompanyClaimView {
    pub id: CompanyId,
    /// Routing key, returned to callers for redirects
    pub slug: String,
    /// Registered website domain used for automated matching
    pub website_domain: Option<String>,
    /// Terminal trust flag; a verified company accepts no further claims
    pub is_verified: bool,
}

/// Audit trail of an admin-mediated transition.
#[derive(Debug, Clone)]
pub struct AdminReview {
    pub admin_id: UserId,
    pub notes: Option<String>,
    pub reviewed_at: DateTime<Utc>,
}

/// Persistent-store port for the claim workflow.
///
/// One trait, one collaborator: point lookups by primary key and by token,
/// a filtered existence check, an insert, and the three status transitions.
///
/// Two storage-level guarantees the engine depends on:
///
/// - `insert_claim` must reject a second pending claim for the same
///   `(company, user)` pair with [`PortError::Conflict`], closing the
///   check-then-insert race at the storage layer.
/// - `approve_claim` must apply the claim transition and the company
///   verification fields (`is_verified`, `owner_id`, `verified_at`) in one
///   atomic boundary; there is no valid state where only one side is written.
#[async_trait]
pub trait ClaimStore: DomainPort {
    /// Retrieves the claim-relevant view of a company
    async fn get_company(&self, id: CompanyId) -> Result<Option<CompanyClaimView>, PortError>;

    /// Retrieves a claim by ID
    async fn get_claim(&self, id: ClaimRequestId) -> Result<Option<ClaimRequest>, PortError>;

    /// Point lookup by token value, filtered to `status = pending`.
    ///
    /// Tokens of resolved claims are never returned; a token is single-use
    /// by state.
    async fn find_pending_by_token(&self, token: &str) -> Result<Option<ClaimRequest>, PortError>;

    /// Whether the user already holds a pending claim on the company
    async fn has_pending_claim(
        &self,
        company_id: CompanyId,
        user_id: UserId,
    ) -> Result<bool, PortError>;

    /// Inserts a freshly created pending claim.
    ///
    /// Returns [`PortError::Conflict`] when a pending claim already exists
    /// for the same `(company, user)` pair.
    async fn insert_claim(&self, claim: ClaimRequest) -> Result<(), PortError>;

    /// Transitions a pending claim to `expired`
    async fn expire_claim(&self, id: ClaimRequestId) -> Result<(), PortError>;

    /// Transitions a pending claim to `rejected`, recording the audit fields.
    /// The company row is not touched.
    async fn reject_claim(&self, id: ClaimRequestId, review: AdminReview) -> Result<(), PortError>;

    /// Transitions a claim to `approved` and verifies the company, atomically:
    /// the claim's status (and audit fields, when an admin mediated) together
    /// with the company's `is_verified = true`, `owner_id = new_owner`, and
    /// `verified_at`.
    async fn approve_claim(
        &self,
        id: ClaimRequestId,
        company_id: CompanyId,
        new_owner: UserId,
        review: Option<AdminReview>,
        verified_at: DateTime<Utc>,
    ) -> Result<(), PortError>;
}

/// Outbound notification port.
///
/// Delivery is fire-and-forget from the engine's perspective: the engine
/// constructs the verification link, hands it off, and never folds delivery
/// failure back into claim state.
#[async_trait]
pub trait ClaimNotifier: Send + Sync + 'static {
    async fn send_verification_link(
        &self,
        recipient: &str,
        verification_url: &str,
    ) -> Result<(), PortError>;
}

/// Mock implementations for testing
///
/// In-memory store and notifier, useful for unit testing the workflow
/// without database or mail dependencies.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use tokio::sync::{Mutex, RwLock};

    use crate::claim::ClaimStatus;

    /// Full company record kept by the mock, including the verification
    /// fields tests assert on.
    #[derive(Debug, Clone)]
    pub struct MockCompany {
        pub slug: String,
        pub website_domain: Option<String>,
        pub is_verified: bool,
        pub owner_id: Option<UserId>,
        pub verified_at: Option<DateTime<Utc>>,
    }

    /// In-memory mock implementation of [`ClaimStore`]
    #[derive(Debug, Default)]
    pub struct MockClaimStore {
        companies: Arc<RwLock<HashMap<CompanyId, MockCompany>>>,
        claims: Arc<RwLock<HashMap<ClaimRequestId, ClaimRequest>>>,
    }

    impl MockClaimStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Seeds an unverified company
        pub async fn with_company(
            self,
            id: CompanyId,
            slug: impl Into<String>,
            website_domain: Option<&str>,
        ) -> Self {
            self.companies.write().await.insert(
                id,
                MockCompany {
                    slug: slug.into(),
                    website_domain: website_domain.map(str::to_string),
                    is_verified: false,
                    owner_id: None,
                    verified_at: None,
                },
            );
            self
        }

        /// Seeds a claim directly, bypassing service-level checks
        pub async fn seed_claim(&self, claim: ClaimRequest) {
            self.claims.write().await.insert(claim.id, claim);
        }

        /// Snapshot of a company record for assertions
        pub async fn company_state(&self, id: CompanyId) -> Option<MockCompany> {
            self.companies.read().await.get(&id).cloned()
        }

        /// Snapshot of a claim for assertions
        pub async fn claim_state(&self, id: ClaimRequestId) -> Option<ClaimRequest> {
            self.claims.read().await.get(&id).cloned()
        }

        /// All claims held by the given user on the given company
        pub async fn claims_for(&self, company_id: CompanyId, user_id: UserId) -> Vec<ClaimRequest> {
            self.claims
                .read()
                .await
                .values()
                .filter(|c| c.company_id == company_id && c.user_id == user_id)
                .cloned()
                .collect()
        }
    }

    impl DomainPort for MockClaimStore {}

    #[async_trait]
    impl ClaimStore for MockClaimStore {
        async fn get_company(&self, id: CompanyId) -> Result<Option<CompanyClaimView>, PortError> {
            Ok(self.companies.read().await.get(&id).map(|c| CompanyClaimView {
                id,
                slug: c.slug.clone(),
                website_domain: c.website_domain.clone(),
                is_verified: c.is_verified,
            }))
        }

        async fn get_claim(&self, id: ClaimRequestId) -> Result<Option<ClaimRequest>, PortError> {
            Ok(self.claims.read().await.get(&id).cloned())
        }

        async fn find_pending_by_token(
            &self,
            token: &str,
        ) -> Result<Option<ClaimRequest>, PortError> {
            Ok(self
                .claims
                .read()
                .await
                .values()
                .find(|c| c.status == ClaimStatus::Pending && c.token.as_deref() == Some(token))
                .cloned())
        }

        async fn has_pending_claim(
            &self,
            company_id: CompanyId,
            user_id: UserId,
        ) -> Result<bool, PortError> {
            Ok(self.claims.read().await.values().any(|c| {
                c.company_id == company_id
                    && c.user_id == user_id
                    && c.status == ClaimStatus::Pending
            }))
        }

        async fn insert_claim(&self, claim: ClaimRequest) -> Result<(), PortError> {
            let mut claims = self.claims.write().await;
            // Uniqueness is enforced here, under the write lock, the way the
            // partial unique index does it in Postgres.
            let duplicate = claims.values().any(|c| {
                c.company_id == claim.company_id
                    && c.user_id == claim.user_id
                    && c.status == ClaimStatus::Pending
            });
            if duplicate {
                return Err(PortError::conflict(
                    "pending claim already exists for this company and user",
                ));
            }
            claims.insert(claim.id, claim);
            Ok(())
        }

        async fn expire_claim(&self, id: ClaimRequestId) -> Result<(), PortError> {
            let mut claims = self.claims.write().await;
            let claim = claims
                .get_mut(&id)
                .ok_or_else(|| PortError::not_found("ClaimRequest", id))?;
            claim.status = ClaimStatus::Expired;
            Ok(())
        }

        async fn reject_claim(
            &self,
            id: ClaimRequestId,
            review: AdminReview,
        ) -> Result<(), PortError> {
            let mut claims = self.claims.write().await;
            let claim = claims
                .get_mut(&id)
                .ok_or_else(|| PortError::not_found("ClaimRequest", id))?;
            claim.status = ClaimStatus::Rejected;
            claim.admin_notes = review.notes;
            claim.reviewed_by = Some(review.admin_id);
            claim.reviewed_at = Some(review.reviewed_at);
            Ok(())
        }

        async fn approve_claim(
            &self,
            id: ClaimRequestId,
            company_id: CompanyId,
            new_owner: UserId,
            review: Option<AdminReview>,
            verified_at: DateTime<Utc>,
        ) -> Result<(), PortError> {
            // Both write locks held for the whole transition: the in-memory
            // equivalent of the single-transaction boundary.
            let mut claims = self.claims.write().await;
            let mut companies = self.companies.write().await;

            let claim = claims
                .get_mut(&id)
                .ok_or_else(|| PortError::not_found("ClaimRequest", id))?;
            let company = companies
                .get_mut(&company_id)
                .ok_or_else(|| PortError::not_found("Company", company_id))?;

            claim.status = ClaimStatus::Approved;
            if let Some(review) = review {
                claim.admin_notes = review.notes;
                claim.reviewed_by = Some(review.admin_id);
                claim.reviewed_at = Some(review.reviewed_at);
            }

            company.is_verified = true;
            company.owner_id = Some(new_owner);
            company.verified_at = Some(verified_at);
            Ok(())
        }
    }

    /// Notifier that records every delivery and can be told to fail
    #[derive(Debug, Default)]
    pub struct MockNotifier {
        sent: Mutex<Vec<(String, String)>>,
        fail: AtomicBool,
    }

    impl MockNotifier {
        pub fn new() -> Self {
            Self::default()
        }

        /// Makes every subsequent send return a connection error
        pub fn fail_next_sends(&self) {
            self.fail.store(true, Ordering::SeqCst);
        }

        /// Deliveries recorded so far, as `(recipient, url)` pairs
        pub async fn deliveries(&self) -> Vec<(String, String)> {
            self.sent.lock().await.clone()
        }
    }

    #[async_trait]
    impl ClaimNotifier for MockNotifier {
        async fn send_verification_link(
            &self,
            recipient: &str,
            verification_url: &str,
        ) -> Result<(), PortError> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(PortError::connection("mail relay unreachable"));
            }
            self.sent
                .lock()
                .await
                .push((recipient.to_string(), verification_url.to_string()));
            Ok(())
        }
    }
}
