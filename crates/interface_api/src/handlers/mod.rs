//! Request handlers

pub mod accounts;
pub mod claims;
pub mod companies;
pub mod health;
pub mod reviews;

use core_kernel::Actor;
use domain_accounts::ProfileStore;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::AppState;

/// Builds the actor context for a request.
///
/// The admin flag comes from a fresh profile lookup on every call — it is
/// never read from the session token or cached between requests.
pub async fn resolve_actor(
    state: &AppState,
    user: Option<AuthUser>,
) -> Result<Option<Actor>, ApiError> {
    let user = match user {
        Some(user) => user,
        None => return Ok(None),
    };

    let is_admin = state
        .profiles
        .get(user.user_id)
        .await?
        .map(|profile| profile.is_admin)
        .unwrap_or(false);

    Ok(Some(Actor {
        user_id: user.user_id,
        is_admin,
    }))
}
