//! Account domain errors

use thiserror::Error;

use core_kernel::PortError;

#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Profile not found")]
    ProfileNotFound,

    #[error("{0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Store(#[from] PortError),
}

impl AccountError {
    pub fn validation(message: impl Into<String>) -> Self {
        AccountError::Validation(message.into())
    }
}
