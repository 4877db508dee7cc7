//! Company domain errors

use thiserror::Error;

use core_kernel::PortError;

/// Errors that can occur in company management
#[derive(Debug, Error)]
pub enum CompanyError {
    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Company not found")]
    CompanyNotFound,

    #[error("You don't have permission to edit this company")]
    EditForbidden,

    #[error("You don't have permission to transfer ownership")]
    TransferForbidden,

    #[error("User not found with that email address")]
    UserNotFound,

    #[error("A company with a similar name already exists")]
    SlugTaken,

    #[error("{0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Store(#[from] PortError),
}

impl CompanyError {
    pub fn validation(message: impl Into<String>) -> Self {
        CompanyError::Validation(message.into())
    }
}
