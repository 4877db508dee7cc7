//! Company Domain Ports
//!
//! Port interfaces for the company directory, enabling swappable
//! implementations (internal database, mock). `ProfileDirectory` is the
//! narrow identity view the domain needs for ownership transfer: an email to
//! user-id lookup, nothing more.

use async_trait::async_trait;

use core_kernel::{CompanyId, DomainPort, PortError, UserId};

use crate::company::Company;

/// Persistent-store port for company listings
#[async_trait]
pub trait CompanyStore: DomainPort {
    /// Retrieves a company by ID
    async fn get(&self, id: CompanyId) -> Result<Option<Company>, PortError>;

    /// Retrieves a company by its slug
    async fn get_by_slug(&self, slug: &str) -> Result<Option<Company>, PortError>;

    /// Whether a listing already uses the slug
    async fn slug_exists(&self, slug: &str) -> Result<bool, PortError>;

    /// Inserts a new listing. Returns [`PortError::Conflict`] on a slug collision.
    async fn insert(&self, company: Company) -> Result<(), PortError>;

    /// Replaces the mutable fields of a listing by primary key
    async fn update(&self, company: &Company) -> Result<(), PortError>;

    /// Reassigns the owner of a listing
    async fn set_owner(&self, id: CompanyId, new_owner: UserId) -> Result<(), PortError>;

    /// Deletes a listing
    async fn delete(&self, id: CompanyId) -> Result<(), PortError>;
}

/// Email-to-user lookup against the identity store
#[async_trait]
pub trait ProfileDirectory: DomainPort {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserId>, PortError>;
}

/// Mock implementations for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// In-memory mock implementation of [`CompanyStore`]
    #[derive(Debug, Default)]
    pub struct MockCompanyStore {
        companies: Arc<RwLock<HashMap<CompanyId, Company>>>,
    }

    impl MockCompanyStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Seeds a listing directly
        pub async fn seed(&self, company: Company) {
            self.companies.write().await.insert(company.id, company);
        }
    }

    impl DomainPort for MockCompanyStore {}

    #[async_trait]
    impl CompanyStore for MockCompanyStore {
        async fn get(&self, id: CompanyId) -> Result<Option<Company>, PortError> {
            Ok(self.companies.read().await.get(&id).cloned())
        }

        async fn get_by_slug(&self, slug: &str) -> Result<Option<Company>, PortError> {
            Ok(self
                .companies
                .read()
                .await
                .values()
                .find(|c| c.slug == slug)
                .cloned())
        }

        async fn slug_exists(&self, slug: &str) -> Result<bool, PortError> {
            Ok(self.companies.read().await.values().any(|c| c.slug == slug))
        }

        async fn insert(&self, company: Company) -> Result<(), PortError> {
            let mut companies = self.companies.write().await;
            if companies.values().any(|c| c.slug == company.slug) {
                return Err(PortError::conflict(format!(
                    "slug '{}' already exists",
                    company.slug
                )));
            }
            companies.insert(company.id, company);
            Ok(())
        }

        async fn update(&self, company: &Company) -> Result<(), PortError> {
            let mut companies = self.companies.write().await;
            if !companies.contains_key(&company.id) {
                return Err(PortError::not_found("Company", company.id));
            }
            companies.insert(company.id, company.clone());
            Ok(())
        }

        async fn set_owner(&self, id: CompanyId, new_owner: UserId) -> Result<(), PortError> {
            let mut companies = self.companies.write().await;
            let company = companies
                .get_mut(&id)
                .ok_or_else(|| PortError::not_found("Company", id))?;
            company.owner_id = Some(new_owner);
            Ok(())
        }

        async fn delete(&self, id: CompanyId) -> Result<(), PortError> {
            self.companies
                .write()
                .await
                .remove(&id)
                .map(|_| ())
                .ok_or_else(|| PortError::not_found("Company", id))
        }
    }

    /// In-memory mock implementation of [`ProfileDirectory`]
    #[derive(Debug, Default)]
    pub struct MockProfileDirectory {
        by_email: Arc<RwLock<HashMap<String, UserId>>>,
    }

    impl MockProfileDirectory {
        pub fn new() -> Self {
            Self::default()
        }

        pub async fn with_user(self, email: impl Into<String>, user_id: UserId) -> Self {
            self.by_email.write().await.insert(email.into(), user_id);
            self
        }
    }

    impl DomainPort for MockProfileDirectory {}

    #[async_trait]
    impl ProfileDirectory for MockProfileDirectory {
        async fn find_user_by_email(&self, email: &str) -> Result<Option<UserId>, PortError> {
            Ok(self.by_email.read().await.get(email).copied())
        }
    }
}
