//! Company management service
//!
//! Owner self-service (listing edits, ownership transfer) and admin
//! administration (create, delete). Authorization is checked against the
//! explicit actor on every call.

use std::sync::Arc;

use tracing::info;

use core_kernel::{Actor, CompanyId};

use crate::company::{Company, CompanyUpdate, CreateCompany};
use crate::error::CompanyError;
use crate::ports::{CompanyStore, ProfileDirectory};
use crate::slug;

pub struct CompanyService {
    store: Arc<dyn CompanyStore>,
    profiles: Arc<dyn ProfileDirectory>,
}

impl CompanyService {
    pub fn new(store: Arc<dyn CompanyStore>, profiles: Arc<dyn ProfileDirectory>) -> Self {
        Self { store, profiles }
    }

    /// Public listing lookup by slug
    pub async fn get_by_slug(&self, slug: &str) -> Result<Company, CompanyError> {
        self.store
            .get_by_slug(slug)
            .await?
            .ok_or(CompanyError::CompanyNotFound)
    }

    /// Creates a listing. Admin only; the slug is derived from the name and
    /// must be free.
    pub async fn create_company(
        &self,
        actor: Option<&Actor>,
        data: CreateCompany,
    ) -> Result<Company, CompanyError> {
        let admin = self.require_admin(actor)?;

        if data.name.trim().is_empty() {
            return Err(CompanyError::validation("Company name is required"));
        }

        let slug = slug::generate(&data.name);
        if slug.is_empty() {
            return Err(CompanyError::validation(
                "Company name must contain letters or digits",
            ));
        }
        if self.store.slug_exists(&slug).await? {
            return Err(CompanyError::SlugTaken);
        }

        let company = Company::create(data, slug);
        match self.store.insert(company.clone()).await {
            Ok(()) => {}
            Err(e) if e.is_conflict() => return Err(CompanyError::SlugTaken),
            Err(e) => return Err(e.into()),
        }

        info!(company = %company.slug, admin = %admin.user_id, "company created");
        Ok(company)
    }

    /// Applies a partial update to a listing. Owner only.
    pub async fn update_company(
        &self,
        actor: Option<&Actor>,
        company_id: CompanyId,
        update: CompanyUpdate,
    ) -> Result<Company, CompanyError> {
        let actor = actor.ok_or(CompanyError::Unauthenticated)?;
        let mut company = self
            .store
            .get(company_id)
            .await?
            .ok_or(CompanyError::CompanyNotFound)?;

        if !company.is_owned_by(actor.user_id) {
            return Err(CompanyError::EditForbidden);
        }

        company.apply(update);
        self.store.update(&company).await?;

        info!(company = %company.slug, "company updated");
        Ok(company)
    }

    /// Hands the listing to another registered user, looked up by email.
    /// Owner only.
    pub async fn transfer_ownership(
        &self,
        actor: Option<&Actor>,
        company_id: CompanyId,
        new_owner_email: &str,
    ) -> Result<(), CompanyError> {
        let actor = actor.ok_or(CompanyError::Unauthenticated)?;
        let company = self
            .store
            .get(company_id)
            .await?
            .ok_or(CompanyError::CompanyNotFound)?;

        if !company.is_owned_by(actor.user_id) {
            return Err(CompanyError::TransferForbidden);
        }

        let new_owner = self
            .profiles
            .find_user_by_email(new_owner_email)
            .await?
            .ok_or(CompanyError::UserNotFound)?;

        self.store.set_owner(company_id, new_owner).await?;

        info!(company = %company.slug, new_owner = %new_owner, "ownership transferred");
        Ok(())
    }

    /// Removes a listing entirely. Admin only.
    pub async fn delete_company(
        &self,
        actor: Option<&Actor>,
        company_id: CompanyId,
    ) -> Result<(), CompanyError> {
        let admin = self.require_admin(actor)?;

        match self.store.delete(company_id).await {
            Ok(()) => {}
            Err(e) if e.is_not_found() => return Err(CompanyError::CompanyNotFound),
            Err(e) => return Err(e.into()),
        }

        info!(company = %company_id, admin = %admin.user_id, "company deleted");
        Ok(())
    }

    fn require_admin<'a>(&self, actor: Option<&'a Actor>) -> Result<&'a Actor, CompanyError> {
        let actor = actor.ok_or(CompanyError::Unauthenticated)?;
        if !actor.is_admin {
            return Err(CompanyError::Unauthorized);
        }
        Ok(actor)
    }
}
