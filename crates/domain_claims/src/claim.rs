//! Claim request aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ClaimRequestId, CompanyId, UserId};

/// Claim status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClaimStatus {
    /// Awaiting resolution (token verification or admin review)
    Pending,
    /// Resolved in the claimant's favour; the company is verified
    Approved,
    /// Declined by an admin
    Rejected,
    /// Verification token was past its window when presented
    Expired,
}

impl ClaimStatus {
    /// Every status except `Pending` is terminal; no transition leads out of it.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ClaimStatus::Pending)
    }
}

/// Which verification path a claim follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationType {
    /// Automated: work-email domain matches the company's website domain
    Email,
    /// Human-reviewed: submitted identity and role evidence
    Manual,
}

/// Kind of evidence offered on the manual path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProofType {
    CompaniesHouse,
    OfficialDocumentation,
    Other,
}

/// Evidence supplied with a manual claim. All fields are required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManualEvidence {
    pub full_name: String,
    pub job_title: String,
    pub linkedin_url: String,
    pub proof_type: ProofType,
    pub proof_text: String,
}

/// One attempt by one user to establish ownership of one company
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimRequest {
    /// Unique identifier
    pub id: ClaimRequestId,
    /// The company being claimed
    pub company_id: CompanyId,
    /// The claimant
    pub user_id: UserId,
    /// Which resolution path applies
    pub verification_type: VerificationType,
    /// Email path: the work email the claimant supplied
    pub email_used: Option<String>,
    /// Email path: opaque verification token (the credential itself)
    pub token: Option<String>,
    /// Email path: absolute expiry of the token
    pub token_expires_at: Option<DateTime<Utc>>,
    /// Manual path: claimant's full name
    pub full_name: Option<String>,
    /// Manual path: claimant's role at the company
    pub job_title: Option<String>,
    /// Manual path: LinkedIn profile URL
    pub linkedin_url: Option<String>,
    /// Manual path: kind of evidence offered
    pub proof_type: Option<ProofType>,
    /// Manual path: free-text evidence description
    pub proof_text: Option<String>,
    /// Lifecycle state
    pub status: ClaimStatus,
    /// Admin decision notes
    pub admin_notes: Option<String>,
    /// Admin who resolved the claim
    pub reviewed_by: Option<UserId>,
    /// When the admin resolved the claim
    pub reviewed_at: Option<DateTime<Utc>>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl ClaimRequest {
    /// Creates a pending email-path claim carrying a freshly issued token
    pub fn new_email(
        company_id: CompanyId,
        user_id: UserId,
        email_used: String,
        token: String,
        token_expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ClaimRequestId::new_v7(),
            company_id,
            user_id,
            verification_type: VerificationType::Email,
            email_used: Some(email_used),
            token: Some(token),
            token_expires_at: Some(token_expires_at),
            full_name: None,
            job_title: None,
            linkedin_url: None,
            proof_type: None,
            proof_text: None,
            status: ClaimStatus::Pending,
            admin_notes: None,
            reviewed_by: None,
            reviewed_at: None,
            created_at: Utc::now(),
        }
    }

    /// Creates a pending manual-path claim. No token is issued; resolution is
    /// exclusively by admin adjudication.
    pub fn new_manual(company_id: CompanyId, user_id: UserId, evidence: ManualEvidence) -> Self {
        Self {
            id: ClaimRequestId::new_v7(),
            company_id,
            user_id,
            verification_type: VerificationType::Manual,
            email_used: None,
            token: None,
            token_expires_at: None,
            full_name: Some(evidence.full_name),
            job_title: Some(evidence.job_title),
            linkedin_url: Some(evidence.linkedin_url),
            proof_type: Some(evidence.proof_type),
            proof_text: Some(evidence.proof_text),
            status: ClaimStatus::Pending,
            admin_notes: None,
            reviewed_by: None,
            reviewed_at: None,
            created_at: Utc::now(),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == ClaimStatus::Pending
    }

    /// Whether the token window had closed at the given instant.
    ///
    /// A claim with no expiry on record (manual path) never expires by time.
    pub fn token_expired_at(&self, at: DateTime<Utc>) -> bool {
        match self.token_expires_at {
            Some(expires_at) => expires_at < at,
            None => false,
        }
    }
}
