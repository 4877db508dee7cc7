//! API error handling
//!
//! Maps the domain error taxonomies onto HTTP statuses and a uniform JSON
//! body. The manual-verification hint of a domain mismatch travels as an
//! extra boolean field, only present on that error.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use domain_accounts::AccountError;
use domain_claims::ClaimError;
use domain_company::CompanyError;
use domain_reviews::ReviewError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Gone: {0}")]
    Gone(String),

    /// Domain mismatch on an email claim; the caller should offer the
    /// manual-verification path.
    #[error("{0}")]
    ManualVerificationRequired(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_manual_verification: Option<bool>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message, manual) = match &self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone(), None),
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "bad_request", msg.clone(), None)
            }
            ApiError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, "unauthorized", msg.clone(), None)
            }
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, "forbidden", msg.clone(), None),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg.clone(), None),
            ApiError::Gone(msg) => (StatusCode::GONE, "gone", msg.clone(), None),
            ApiError::ManualVerificationRequired(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "domain_mismatch",
                msg.clone(),
                Some(true),
            ),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                msg.clone(),
                None,
            ),
            ApiError::Validation(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                msg.clone(),
                None,
            ),
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            requires_manual_verification: manual,
        };

        (status, Json(body)).into_response()
    }
}

impl From<ClaimError> for ApiError {
    fn from(err: ClaimError) -> Self {
        let message = err.to_string();
        match err {
            ClaimError::Unauthenticated => ApiError::Unauthorized(message),
            ClaimError::Unauthorized => ApiError::Forbidden(message),
            ClaimError::CompanyNotFound | ClaimError::ClaimNotFound => ApiError::NotFound(message),
            ClaimError::AlreadyClaimed
            | ClaimError::DuplicatePending
            | ClaimError::AlreadyResolved => ApiError::Conflict(message),
            ClaimError::DomainMismatch => ApiError::ManualVerificationRequired(message),
            ClaimError::Validation(_) => ApiError::Validation(message),
            ClaimError::InvalidOrExpiredLink => ApiError::BadRequest(message),
            ClaimError::LinkExpired => ApiError::Gone(message),
            ClaimError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<CompanyError> for ApiError {
    fn from(err: CompanyError) -> Self {
        let message = err.to_string();
        match err {
            CompanyError::Unauthenticated => ApiError::Unauthorized(message),
            CompanyError::Unauthorized
            | CompanyError::EditForbidden
            | CompanyError::TransferForbidden => ApiError::Forbidden(message),
            CompanyError::CompanyNotFound | CompanyError::UserNotFound => {
                ApiError::NotFound(message)
            }
            CompanyError::SlugTaken => ApiError::Conflict(message),
            CompanyError::Validation(_) => ApiError::Validation(message),
            CompanyError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<ReviewError> for ApiError {
    fn from(err: ReviewError) -> Self {
        let message = err.to_string();
        match err {
            ReviewError::Unauthenticated => ApiError::Unauthorized(message),
            ReviewError::Unauthorized
            | ReviewError::EditForbidden
            | ReviewError::DeleteForbidden
            | ReviewError::ResponseForbidden => ApiError::Forbidden(message),
            ReviewError::ReviewNotFound => ApiError::NotFound(message),
            ReviewError::AlreadyReviewed => ApiError::Conflict(message),
            ReviewError::Validation(_) => ApiError::Validation(message),
            ReviewError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        let message = err.to_string();
        match err {
            AccountError::Unauthenticated => ApiError::Unauthorized(message),
            AccountError::ProfileNotFound => ApiError::NotFound(message),
            AccountError::Validation(_) => ApiError::Validation(message),
            AccountError::Store(e) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<core_kernel::PortError> for ApiError {
    fn from(err: core_kernel::PortError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::Validation(err.to_string())
    }
}
