//! Account Domain Ports

use async_trait::async_trait;

use core_kernel::{DomainPort, PortError, UserId};

use crate::profile::Profile;

/// Persistent-store port for user profiles.
///
/// The HTTP layer also uses this port to resolve the admin flag for the
/// actor context — freshly on every call, never cached.
#[async_trait]
pub trait ProfileStore: DomainPort {
    /// Retrieves a profile by user ID
    async fn get(&self, id: UserId) -> Result<Option<Profile>, PortError>;

    /// Finds a profile by email address
    async fn find_by_email(&self, email: &str) -> Result<Option<Profile>, PortError>;

    /// Updates the display name
    async fn set_display_name(&self, id: UserId, display_name: &str) -> Result<(), PortError>;

    /// Removes the profile and everything hanging off it
    async fn delete(&self, id: UserId) -> Result<(), PortError>;
}

/// Mock implementations for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// In-memory mock implementation of [`ProfileStore`]
    #[derive(Debug, Default)]
    pub struct MockProfileStore {
        profiles: Arc<RwLock<HashMap<UserId, Profile>>>,
    }

    impl MockProfileStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub async fn with_profile(self, profile: Profile) -> Self {
            self.profiles.write().await.insert(profile.id, profile);
            self
        }

        pub async fn seed(&self, profile: Profile) {
            self.profiles.write().await.insert(profile.id, profile);
        }
    }

    impl DomainPort for MockProfileStore {}

    #[async_trait]
    impl ProfileStore for MockProfileStore {
        async fn get(&self, id: UserId) -> Result<Option<Profile>, PortError> {
            Ok(self.profiles.read().await.get(&id).cloned())
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<Profile>, PortError> {
            Ok(self
                .profiles
                .read()
                .await
                .values()
                .find(|p| p.email == email)
                .cloned())
        }

        async fn set_display_name(
            &self,
            id: UserId,
            display_name: &str,
        ) -> Result<(), PortError> {
            let mut profiles = self.profiles.write().await;
            let profile = profiles
                .get_mut(&id)
                .ok_or_else(|| PortError::not_found("Profile", id))?;
            profile.display_name = Some(display_name.to_string());
            profile.updated_at = chrono::Utc::now();
            Ok(())
        }

        async fn delete(&self, id: UserId) -> Result<(), PortError> {
            self.profiles
                .write()
                .await
                .remove(&id)
                .map(|_| ())
                .ok_or_else(|| PortError::not_found("Profile", id))
        }
    }
}
