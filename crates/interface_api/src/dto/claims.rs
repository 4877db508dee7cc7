//! Claim workflow DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

use domain_claims::claim::ProofType;

#[derive(Debug, Deserialize, Validate)]
pub struct EmailClaimRequest {
    pub company_slug: String,
    #[validate(email)]
    pub email: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ManualClaimRequest {
    pub company_slug: String,
    pub full_name: String,
    pub job_title: String,
    #[validate(url)]
    pub linkedin_url: String,
    pub proof_type: ProofType,
    pub proof_text: String,
}

#[derive(Debug, Deserialize)]
pub struct ApproveClaimRequest {
    pub admin_notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RejectClaimRequest {
    pub admin_notes: String,
}

#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct VerificationResponse {
    /// Slug of the now-verified company, for the redirect
    pub company_slug: String,
}

#[derive(Debug, Serialize)]
pub struct AdjudicationResponse {
    pub message: String,
}
