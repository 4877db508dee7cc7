//! User profile entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::UserId;

/// A user profile. The id mirrors the identity provider's subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: UserId,
    pub display_name: Option<String>,
    pub email: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Creates a regular (non-admin) profile
    pub fn new(id: UserId, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            display_name: None,
            email: email.into(),
            is_admin: false,
            created_at: now,
            updated_at: now,
        }
    }
}
