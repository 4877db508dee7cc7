//! Claim workflow errors
//!
//! A small closed set of named conditions. The `Display` text of each variant
//! is the user-facing message; nothing below this layer is surfaced to the
//! end user. `InvalidOrExpiredLink` is deliberately returned for every token
//! miss (unknown, malformed, or belonging to an already-resolved claim) so
//! callers cannot probe which tokens exist.

use thiserror::Error;

use core_kernel::PortError;

/// Errors that can occur in the claim workflow
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("You must be logged in to claim a company")]
    Unauthenticated,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Company not found")]
    CompanyNotFound,

    #[error("This company has already been claimed")]
    AlreadyClaimed,

    #[error("You already have a pending claim for this company")]
    DuplicatePending,

    #[error("Email domain doesn't match company website")]
    DomainMismatch,

    #[error("{0}")]
    Validation(String),

    #[error("Invalid or expired verification link")]
    InvalidOrExpiredLink,

    #[error("This verification link has expired")]
    LinkExpired,

    #[error("Claim not found")]
    ClaimNotFound,

    #[error("This claim has already been resolved")]
    AlreadyResolved,

    #[error("Storage error: {0}")]
    Store(#[from] PortError),
}

impl ClaimError {
    pub fn validation(message: impl Into<String>) -> Self {
        ClaimError::Validation(message.into())
    }

    /// True when the caller should be pointed at the manual-verification
    /// fallback. A UX hint only; no claim row exists in this case.
    pub fn requires_manual_verification(&self) -> bool {
        matches!(self, ClaimError::DomainMismatch)
    }
}
