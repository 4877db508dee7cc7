//! Claim workflow repository
//!
//! PostgreSQL implementation of [`domain_claims::ClaimStore`]. Two details
//! the engine relies on live here:
//!
//! - the partial unique index `claim_requests_one_pending` turns a racing
//!   second pending insert into a 23505, surfaced as `PortError::Conflict`;
//! - `approve_claim` runs the claim transition and the company verification
//!   in one transaction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use core_kernel::{ClaimRequestId, CompanyId, DomainPort, PortError, UserId};
use domain_claims::claim::{ClaimRequest, ClaimStatus, ProofType, VerificationType};
use domain_claims::ports::{AdminReview, ClaimStore, CompanyClaimView};

use crate::error::port_error;

/// Repository for claim requests and the claim-relevant company fields
#[derive(Debug, Clone)]
pub struct PgClaimStore {
    pool: PgPool,
}

impl PgClaimStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const CLAIM_COLUMNS: &str = "id, company_id, user_id, verification_type, email_used, token, \
     token_expires_at, full_name, job_title, linkedin_url, proof_type, proof_text, \
     status, admin_notes, reviewed_by, reviewed_at, created_at";

impl DomainPort for PgClaimStore {}

#[async_trait]
impl ClaimStore for PgClaimStore {
    async fn get_company(&self, id: CompanyId) -> Result<Option<CompanyClaimView>, PortError> {
        let row: Option<CompanyClaimRow> = sqlx::query_as(
            "SELECT id, slug, website_domain, is_verified FROM companies WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(port_error)?;

        Ok(row.map(CompanyClaimView::from))
    }

    async fn get_claim(&self, id: ClaimRequestId) -> Result<Option<ClaimRequest>, PortError> {
        let row: Option<ClaimRow> = sqlx::query_as(&format!(
            "SELECT {CLAIM_COLUMNS} FROM claim_requests WHERE id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(port_error)?;

        Ok(row.map(ClaimRequest::from))
    }

    async fn find_pending_by_token(&self, token: &str) -> Result<Option<ClaimRequest>, PortError> {
        let row: Option<ClaimRow> = sqlx::query_as(&format!(
            "SELECT {CLAIM_COLUMNS} FROM claim_requests WHERE token = $1 AND status = 'pending'"
        ))
        .bind(token)
        .fetch_optional(&self.pool)
        .await
        .map_err(port_error)?;

        Ok(row.map(ClaimRequest::from))
    }

    async fn has_pending_claim(
        &self,
        company_id: CompanyId,
        user_id: UserId,
    ) -> Result<bool, PortError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS( \
                 SELECT 1 FROM claim_requests \
                 WHERE company_id = $1 AND user_id = $2 AND status = 'pending')",
        )
        .bind(company_id.as_uuid())
        .bind(user_id.as_uuid())
        .fetch_one(&self.pool)
        .await
        .map_err(port_error)?;

        Ok(exists)
    }

    async fn insert_claim(&self, claim: ClaimRequest) -> Result<(), PortError> {
        sqlx::query(
            "INSERT INTO claim_requests ( \
                 id, company_id, user_id, verification_type, email_used, token, \
                 token_expires_at, full_name, job_title, linkedin_url, proof_type, \
                 proof_text, status, created_at \
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)",
        )
        .bind(claim.id.as_uuid())
        .bind(claim.company_id.as_uuid())
        .bind(claim.user_id.as_uuid())
        .bind(VerificationTypeRow::from(claim.verification_type))
        .bind(&claim.email_used)
        .bind(&claim.token)
        .bind(claim.token_expires_at)
        .bind(&claim.full_name)
        .bind(&claim.job_title)
        .bind(&claim.linkedin_url)
        .bind(claim.proof_type.map(ProofTypeRow::from))
        .bind(&claim.proof_text)
        .bind(ClaimStatusRow::from(claim.status))
        .bind(claim.created_at)
        .execute(&self.pool)
        .await
        .map_err(port_error)?;

        Ok(())
    }

    async fn expire_claim(&self, id: ClaimRequestId) -> Result<(), PortError> {
        let result = sqlx::query(
            "UPDATE claim_requests SET status = 'expired' WHERE id = $1 AND status = 'pending'",
        )
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(port_error)?;

        if result.rows_affected() == 0 {
            return Err(PortError::not_found("ClaimRequest", id));
        }
        Ok(())
    }

    async fn reject_claim(&self, id: ClaimRequestId, review: AdminReview) -> Result<(), PortError> {
        let result = sqlx::query(
            "UPDATE claim_requests \
             SET status = 'rejected', admin_notes = $2, reviewed_by = $3, reviewed_at = $4 \
             WHERE id = $1",
        )
        .bind(id.as_uuid())
        .bind(&review.notes)
        .bind(review.admin_id.as_uuid())
        .bind(review.reviewed_at)
        .execute(&self.pool)
        .await
        .map_err(port_error)?;

        if result.rows_affected() == 0 {
            return Err(PortError::not_found("ClaimRequest", id));
        }
        Ok(())
    }

    async fn approve_claim(
        &self,
        id: ClaimRequestId,
        company_id: CompanyId,
        new_owner: UserId,
        review: Option<AdminReview>,
        verified_at: DateTime<Utc>,
    ) -> Result<(), PortError> {
        let mut tx = self.pool.begin().await.map_err(port_error)?;

        match review {
            Some(review) => {
                sqlx::query(
                    "UPDATE claim_requests \
                     SET status = 'approved', admin_notes = $2, reviewed_by = $3, reviewed_at = $4 \
                     WHERE id = $1",
                )
                .bind(id.as_uuid())
                .bind(&review.notes)
                .bind(review.admin_id.as_uuid())
                .bind(review.reviewed_at)
                .execute(&mut *tx)
                .await
                .map_err(port_error)?;
            }
            None => {
                sqlx::query("UPDATE claim_requests SET status = 'approved' WHERE id = $1")
                    .bind(id.as_uuid())
                    .execute(&mut *tx)
                    .await
                    .map_err(port_error)?;
            }
        }

        sqlx::query(
            "UPDATE companies SET is_verified = TRUE, owner_id = $2, verified_at = $3 \
             WHERE id = $1",
        )
        .bind(company_id.as_uuid())
        .bind(new_owner.as_uuid())
        .bind(verified_at)
        .execute(&mut *tx)
        .await
        .map_err(port_error)?;

        tx.commit().await.map_err(port_error)?;
        Ok(())
    }
}

/// Claim status enumeration, database side
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "claim_status", rename_all = "snake_case")]
enum ClaimStatusRow {
    Pending,
    Approved,
    Rejected,
    Expired,
}

/// Verification type enumeration, database side
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "verification_type", rename_all = "snake_case")]
enum VerificationTypeRow {
    Email,
    Manual,
}

/// Proof type enumeration, database side
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "proof_type", rename_all = "snake_case")]
enum ProofTypeRow {
    CompaniesHouse,
    OfficialDocumentation,
    Other,
}

impl From<ClaimStatus> for ClaimStatusRow {
    fn from(status: ClaimStatus) -> Self {
        match status {
            ClaimStatus::Pending => ClaimStatusRow::Pending,
            ClaimStatus::Approved => ClaimStatusRow::Approved,
            ClaimStatus::Rejected => ClaimStatusRow::Rejected,
            ClaimStatus::Expired => ClaimStatusRow::Expired,
        }
    }
}

impl From<ClaimStatusRow> for ClaimStatus {
    fn from(row: ClaimStatusRow) -> Self {
        match row {
            ClaimStatusRow::Pending => ClaimStatus::Pending,
            ClaimStatusRow::Approved => ClaimStatus::Approved,
            ClaimStatusRow::Rejected => ClaimStatus::Rejected,
            ClaimStatusRow::Expired => ClaimStatus::Expired,
        }
    }
}

impl From<VerificationType> for VerificationTypeRow {
    fn from(vt: VerificationType) -> Self {
        match vt {
            VerificationType::Email => VerificationTypeRow::Email,
            VerificationType::Manual => VerificationTypeRow::Manual,
        }
    }
}

impl From<VerificationTypeRow> for VerificationType {
    fn from(row: VerificationTypeRow) -> Self {
        match row {
            VerificationTypeRow::Email => VerificationType::Email,
            VerificationTypeRow::Manual => VerificationType::Manual,
        }
    }
}

impl From<ProofType> for ProofTypeRow {
    fn from(pt: ProofType) -> Self {
        match pt {
            ProofType::CompaniesHouse => ProofTypeRow::CompaniesHouse,
            ProofType::OfficialDocumentation => ProofTypeRow::OfficialDocumentation,
            ProofType::Other => ProofTypeRow::Other,
        }
    }
}

impl From<ProofTypeRow> for ProofType {
    fn from(row: ProofTypeRow) -> Self {
        match row {
            ProofTypeRow::CompaniesHouse => ProofType::CompaniesHouse,
            ProofTypeRow::OfficialDocumentation => ProofType::OfficialDocumentation,
            ProofTypeRow::Other => ProofType::Other,
        }
    }
}

/// Database row for a claim request
#[derive(Debug, Clone, sqlx::FromRow)]
struct ClaimRow {
    id: Uuid,
    company_id: Uuid,
    user_id: Uuid,
    verification_type: VerificationTypeRow,
    email_used: Option<String>,
    token: Option<String>,
    token_expires_at: Option<DateTime<Utc>>,
    full_name: Option<String>,
    job_title: Option<String>,
    linkedin_url: Option<String>,
    proof_type: Option<ProofTypeRow>,
    proof_text: Option<String>,
    status: ClaimStatusRow,
    admin_notes: Option<String>,
    reviewed_by: Option<Uuid>,
    reviewed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl From<ClaimRow> for ClaimRequest {
    fn from(row: ClaimRow) -> Self {
        ClaimRequest {
            id: ClaimRequestId::from_uuid(row.id),
            company_id: CompanyId::from_uuid(row.company_id),
            user_id: UserId::from_uuid(row.user_id),
            verification_type: row.verification_type.into(),
            email_used: row.email_used,
            token: row.token,
            token_expires_at: row.token_expires_at,
            full_name: row.full_name,
            job_title: row.job_title,
            linkedin_url: row.linkedin_url,
            proof_type: row.proof_type.map(Into::into),
            proof_text: row.proof_text,
            status: row.status.into(),
            admin_notes: row.admin_notes,
            reviewed_by: row.reviewed_by.map(UserId::from_uuid),
            reviewed_at: row.reviewed_at,
            created_at: row.created_at,
        }
    }
}

/// Database row for the claim-relevant company projection
#[derive(Debug, Clone, sqlx::FromRow)]
struct CompanyClaimRow {
    id: Uuid,
    slug: String,
    website_domain: Option<String>,
    is_verified: bool,
}

impl From<CompanyClaimRow> for CompanyClaimView {
    fn from(row: CompanyClaimRow) -> Self {
        CompanyClaimView {
            id: CompanyId::from_uuid(row.id),
            slug: row.slug,
            website_domain: row.website_domain,
            is_verified: row.is_verified,
        }
    }
}
