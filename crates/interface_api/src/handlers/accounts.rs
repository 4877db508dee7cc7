//! Account handlers

use axum::{extract::State, Extension, Json};
use validator::Validate;

use crate::auth::AuthUser;
use crate::dto::accounts::*;
use crate::error::ApiError;
use crate::handlers::resolve_actor;
use crate::AppState;

/// The caller's own profile
pub async fn my_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let actor = resolve_actor(&state, Some(user)).await?;
    let profile = state.accounts.my_profile(actor.as_ref()).await?;
    Ok(Json(profile.into()))
}

/// Updates the caller's display name
pub async fn update_display_name(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<UpdateDisplayNameRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    request.validate()?;
    let actor = resolve_actor(&state, Some(user)).await?;

    state
        .accounts
        .update_display_name(actor.as_ref(), &request.display_name)
        .await?;

    Ok(Json(serde_json::json!({ "success": true })))
}

/// Deletes the caller's account
pub async fn delete_account(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let actor = resolve_actor(&state, Some(user)).await?;

    state.accounts.delete_account(actor.as_ref()).await?;

    Ok(Json(serde_json::json!({ "success": true })))
}
