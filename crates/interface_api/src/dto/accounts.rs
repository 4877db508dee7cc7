//! Account DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use domain_accounts::Profile;

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateDisplayNameRequest {
    #[validate(length(min = 1, max = 80))]
    pub display_name: String,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub display_name: Option<String>,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        ProfileResponse {
            id: *profile.id.as_uuid(),
            display_name: profile.display_name,
            email: profile.email,
            created_at: profile.created_at,
        }
    }
}
