//! Company handlers

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use uuid::Uuid;
use validator::Validate;

use core_kernel::CompanyId;

use crate::auth::AuthUser;
use crate::dto::companies::*;
use crate::error::ApiError;
use crate::handlers::resolve_actor;
use crate::AppState;

/// Public listing lookup by slug
pub async fn get_company(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<CompanyResponse>, ApiError> {
    let company = state.companies.get_by_slug(&slug).await?;
    Ok(Json(company.into()))
}

/// Creates a listing (admin)
pub async fn create_company(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<CreateCompanyRequest>,
) -> Result<Json<CompanyResponse>, ApiError> {
    request.validate()?;
    let actor = resolve_actor(&state, Some(user)).await?;

    let company = state
        .companies
        .create_company(actor.as_ref(), request.into())
        .await?;

    Ok(Json(company.into()))
}

/// Updates a listing (owner)
pub async fn update_company(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(company_id): Path<Uuid>,
    Json(request): Json<UpdateCompanyRequest>,
) -> Result<Json<CompanyResponse>, ApiError> {
    request.validate()?;
    let actor = resolve_actor(&state, Some(user)).await?;

    let company = state
        .companies
        .update_company(
            actor.as_ref(),
            CompanyId::from_uuid(company_id),
            request.into(),
        )
        .await?;

    Ok(Json(company.into()))
}

/// Transfers the listing to another registered user (owner)
pub async fn transfer_ownership(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(company_id): Path<Uuid>,
    Json(request): Json<TransferOwnershipRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    request.validate()?;
    let actor = resolve_actor(&state, Some(user)).await?;

    state
        .companies
        .transfer_ownership(
            actor.as_ref(),
            CompanyId::from_uuid(company_id),
            &request.new_owner_email,
        )
        .await?;

    Ok(Json(serde_json::json!({ "success": true })))
}

/// Deletes a listing (admin)
pub async fn delete_company(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(company_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let actor = resolve_actor(&state, Some(user)).await?;

    state
        .companies
        .delete_company(actor.as_ref(), CompanyId::from_uuid(company_id))
        .await?;

    Ok(Json(serde_json::json!({ "success": true })))
}
