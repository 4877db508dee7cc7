//! Review handlers

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use uuid::Uuid;
use validator::Validate;

use core_kernel::{CompanyId, ReviewId};
use domain_reviews::service::SubmitReview;

use crate::auth::AuthUser;
use crate::dto::reviews::*;
use crate::error::ApiError;
use crate::handlers::resolve_actor;
use crate::AppState;

/// Submits a review of a company
pub async fn submit_review(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(company_id): Path<Uuid>,
    Json(request): Json<SubmitReviewRequest>,
) -> Result<Json<ReviewDto>, ApiError> {
    request.validate()?;
    let actor = resolve_actor(&state, Some(user)).await?;

    let review = state
        .reviews
        .submit_review(
            actor.as_ref(),
            SubmitReview {
                company_id: CompanyId::from_uuid(company_id),
                ratings: request.ratings(),
                pros: request.pros,
                cons: request.cons,
                summary: request.summary,
                reviewer_type: request.reviewer_type,
            },
        )
        .await?;

    Ok(Json(review.into()))
}

/// Edits the caller's own review
pub async fn update_review(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(review_id): Path<Uuid>,
    Json(request): Json<UpdateReviewRequest>,
) -> Result<Json<ReviewDto>, ApiError> {
    let actor = resolve_actor(&state, Some(user)).await?;
    let review_id = ReviewId::from_uuid(review_id);

    // Partial rating edits merge with the stored ratings before the domain
    // recomputes the overall figure.
    let current = state.reviews.get_review(review_id).await?;
    let update = request.into_update(&current.ratings);

    let review = state
        .reviews
        .update_review(actor.as_ref(), review_id, update)
        .await?;

    Ok(Json(review.into()))
}

/// Deletes the caller's own review
pub async fn delete_review(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(review_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let actor = resolve_actor(&state, Some(user)).await?;

    state
        .reviews
        .delete_review(actor.as_ref(), ReviewId::from_uuid(review_id))
        .await?;

    Ok(Json(serde_json::json!({ "success": true })))
}

/// Records the company owner's response to a review
pub async fn respond_to_review(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(review_id): Path<Uuid>,
    Json(request): Json<RespondToReviewRequest>,
) -> Result<Json<ResponseDto>, ApiError> {
    let actor = resolve_actor(&state, Some(user)).await?;

    let response = state
        .reviews
        .respond_to_review(
            actor.as_ref(),
            ReviewId::from_uuid(review_id),
            request.response_text,
        )
        .await?;

    Ok(Json(response.into()))
}

/// Moves a review to another moderation status (admin)
pub async fn set_review_status(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(review_id): Path<Uuid>,
    Json(request): Json<SetReviewStatusRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let actor = resolve_actor(&state, Some(user)).await?;

    state
        .reviews
        .set_review_status(actor.as_ref(), ReviewId::from_uuid(review_id), request.status)
        .await?;

    Ok(Json(serde_json::json!({ "success": true })))
}

/// Removes a review (admin takedown)
pub async fn delete_review_admin(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(review_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let actor = resolve_actor(&state, Some(user)).await?;

    state
        .reviews
        .delete_review_admin(actor.as_ref(), ReviewId::from_uuid(review_id))
        .await?;

    Ok(Json(serde_json::json!({ "success": true })))
}
