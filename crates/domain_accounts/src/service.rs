//! Account settings service

use std::sync::Arc;

use core_kernel::Actor;

use crate::error::AccountError;
use crate::ports::ProfileStore;
use crate::profile::Profile;

pub struct AccountService {
    store: Arc<dyn ProfileStore>,
}

impl AccountService {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }

    /// The caller's own profile
    pub async fn my_profile(&self, actor: Option<&Actor>) -> Result<Profile, AccountError> {
        let actor = actor.ok_or(AccountError::Unauthenticated)?;
        self.store
            .get(actor.user_id)
            .await?
            .ok_or(AccountError::ProfileNotFound)
    }

    /// Updates the caller's display name
    pub async fn update_display_name(
        &self,
        actor: Option<&Actor>,
        display_name: &str,
    ) -> Result<(), AccountError> {
        let actor = actor.ok_or(AccountError::Unauthenticated)?;
        let trimmed = display_name.trim();
        if trimmed.is_empty() {
            return Err(AccountError::validation("Display name is required"));
        }

        match self.store.set_display_name(actor.user_id, trimmed).await {
            Ok(()) => Ok(()),
            Err(e) if e.is_not_found() => Err(AccountError::ProfileNotFound),
            Err(e) => Err(e.into()),
        }
    }

    /// Deletes the caller's own account
    pub async fn delete_account(&self, actor: Option<&Actor>) -> Result<(), AccountError> {
        let actor = actor.ok_or(AccountError::Unauthenticated)?;
        match self.store.delete(actor.user_id).await {
            Ok(()) => Ok(()),
            Err(e) if e.is_not_found() => Err(AccountError::ProfileNotFound),
            Err(e) => Err(e.into()),
        }
    }
}
