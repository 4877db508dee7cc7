//! Company-Claim Workflow Domain
//!
//! This crate implements the lifecycle of a company-ownership claim, from
//! submission through resolution. Two submission paths exist: automated
//! email-domain matching (resolved by a time-limited verification token) and
//! manual evidence review (resolved only by an admin).
//!
//! # Claim Lifecycle
//!
//! ```text
//! Pending -> Approved (token verified, or admin approval; company becomes verified)
//!         -> Rejected (admin decision, notes required)
//!         -> Expired  (token past its 24h window at verification time)
//! ```
//!
//! `Pending` is the sole non-terminal state; no transition is defined out of
//! a terminal state.

pub mod claim;
pub mod domain_match;
pub mod error;
pub mod ports;
pub mod service;
pub mod token;

pub use claim::{ClaimRequest, ClaimStatus, ManualEvidence, ProofType, VerificationType};
pub use error::ClaimError;
pub use ports::{AdminReview, ClaimNotifier, ClaimStore, CompanyClaimView};
pub use service::{ClaimService, SubmissionAck, SubmitEmailClaim, SubmitManualClaim, VerifiedClaim};
