//! Claim workflow handlers

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use uuid::Uuid;
use validator::Validate;

use core_kernel::{ClaimRequestId, CompanyId};
use domain_claims::service::{SubmitEmailClaim, SubmitManualClaim};

use crate::auth::AuthUser;
use crate::dto::claims::*;
use crate::error::ApiError;
use crate::handlers::resolve_actor;
use crate::AppState;

/// Submits an email-path claim for a company
pub async fn submit_email_claim(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(company_id): Path<Uuid>,
    Json(request): Json<EmailClaimRequest>,
) -> Result<Json<SubmissionResponse>, ApiError> {
    request.validate()?;
    let actor = resolve_actor(&state, Some(user)).await?;

    let ack = state
        .claims
        .submit_email_claim(
            actor.as_ref(),
            SubmitEmailClaim {
                company_id: CompanyId::from_uuid(company_id),
                company_slug: request.company_slug,
                email: request.email,
            },
        )
        .await?;

    Ok(Json(SubmissionResponse {
        message: ack.message.to_string(),
    }))
}

/// Submits a manual-path claim for a company
pub async fn submit_manual_claim(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(company_id): Path<Uuid>,
    Json(request): Json<ManualClaimRequest>,
) -> Result<Json<SubmissionResponse>, ApiError> {
    request.validate()?;
    let actor = resolve_actor(&state, Some(user)).await?;

    let ack = state
        .claims
        .submit_manual_claim(
            actor.as_ref(),
            SubmitManualClaim {
                company_id: CompanyId::from_uuid(company_id),
                company_slug: request.company_slug,
                full_name: request.full_name,
                job_title: request.job_title,
                linkedin_url: request.linkedin_url,
                proof_type: request.proof_type,
                proof_text: request.proof_text,
            },
        )
        .await?;

    Ok(Json(SubmissionResponse {
        message: ack.message.to_string(),
    }))
}

/// Resolves a verification link. Public: the token is the credential.
pub async fn verify_token(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<VerificationResponse>, ApiError> {
    let verified = state.claims.verify_token(&token).await?;

    Ok(Json(VerificationResponse {
        company_slug: verified.company_slug,
    }))
}

/// Approves a claim (admin)
pub async fn approve_claim(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(claim_id): Path<Uuid>,
    Json(request): Json<ApproveClaimRequest>,
) -> Result<Json<AdjudicationResponse>, ApiError> {
    let actor = resolve_actor(&state, Some(user)).await?;

    state
        .claims
        .approve_claim(
            actor.as_ref(),
            ClaimRequestId::from_uuid(claim_id),
            request.admin_notes,
        )
        .await?;

    Ok(Json(AdjudicationResponse {
        message: "Claim approved".to_string(),
    }))
}

/// Rejects a claim with required notes (admin)
pub async fn reject_claim(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(claim_id): Path<Uuid>,
    Json(request): Json<RejectClaimRequest>,
) -> Result<Json<AdjudicationResponse>, ApiError> {
    let actor = resolve_actor(&state, Some(user)).await?;

    state
        .claims
        .reject_claim(
            actor.as_ref(),
            ClaimRequestId::from_uuid(claim_id),
            request.admin_notes,
        )
        .await?;

    Ok(Json(AdjudicationResponse {
        message: "Claim rejected".to_string(),
    }))
}
