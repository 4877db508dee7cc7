//! Review domain errors

use thiserror::Error;

use core_kernel::PortError;

/// Errors that can occur in the review domain
#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("You must be logged in")]
    Unauthenticated,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("You have already reviewed this company")]
    AlreadyReviewed,

    #[error("Review not found")]
    ReviewNotFound,

    #[error("You can only edit your own reviews")]
    EditForbidden,

    #[error("You can only delete your own reviews")]
    DeleteForbidden,

    #[error("Only the company owner can respond to reviews")]
    ResponseForbidden,

    #[error("{0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Store(#[from] PortError),
}

impl ReviewError {
    pub fn validation(message: impl Into<String>) -> Self {
        ReviewError::Validation(message.into())
    }
}
