//! Claim workflow service
//!
//! Owns the lifecycle of a claim request from submission through resolution.
//! Every operation runs to completion within a single request; there is no
//! background scheduler, and expiry is evaluated lazily at verification time.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use core_kernel::{Actor, ClaimRequestId, CompanyId};

use crate::claim::{ClaimRequest, ManualEvidence, ProofType};
use crate::domain_match;
use crate::error::ClaimError;
use crate::ports::{AdminReview, ClaimNotifier, ClaimStore, CompanyClaimView};
use crate::token;

/// Email-path submission input
#[derive(Debug, Clone)]
pub struct SubmitEmailClaim {
    pub company_id: CompanyId,
    pub company_slug: String,
    pub email: String,
}

/// Manual-path submission input
#[derive(Debug, Clone)]
pub struct SubmitManualClaim {
    pub company_id: CompanyId,
    pub company_slug: String,
    pub full_name: String,
    pub job_title: String,
    pub linkedin_url: String,
    pub proof_type: ProofType,
    pub proof_text: String,
}

/// Acknowledgment of an accepted submission. The token is never part of the
/// acknowledgment; it travels only through the notification channel.
#[derive(Debug, Clone)]
pub struct SubmissionAck {
    pub claim_id: ClaimRequestId,
    pub message: &'static str,
}

/// Result of a successful token verification
#[derive(Debug, Clone)]
pub struct VerifiedClaim {
    /// Routing key of the now-verified company, for the redirect
    pub company_slug: String,
}

const EMAIL_ACK: &str =
    "Verification email sent! Please check your inbox and click the link to verify ownership.";
const MANUAL_ACK: &str =
    "Your claim request has been submitted for review. We'll notify you once it's been processed.";

/// The claim workflow engine.
///
/// Composes a [`ClaimStore`] (persistence) and a [`ClaimNotifier`] (outbound
/// email); the authenticated actor is passed into every call.
pub struct ClaimService {
    store: Arc<dyn ClaimStore>,
    notifier: Arc<dyn ClaimNotifier>,
    /// Base URL the verification link is built against, e.g. `https://app.example.com`
    verification_base_url: String,
}

impl ClaimService {
    pub fn new(
        store: Arc<dyn ClaimStore>,
        notifier: Arc<dyn ClaimNotifier>,
        verification_base_url: impl Into<String>,
    ) -> Self {
        Self {
            store,
            notifier,
            verification_base_url: verification_base_url.into(),
        }
    }

    /// Submits an email-path claim.
    ///
    /// On a domain match this creates a pending claim carrying a fresh
    /// 24-hour token and triggers the notifier with the verification link.
    /// On a mismatch no claim row is created; the returned
    /// [`ClaimError::DomainMismatch`] carries the manual-fallback hint.
    pub async fn submit_email_claim(
        &self,
        actor: Option<&Actor>,
        request: SubmitEmailClaim,
    ) -> Result<SubmissionAck, ClaimError> {
        let actor = actor.ok_or(ClaimError::Unauthenticated)?;
        let company = self.claimable_company(request.company_id).await?;

        if self
            .store
            .has_pending_claim(request.company_id, actor.user_id)
            .await?
        {
            return Err(ClaimError::DuplicatePending);
        }

        if !domain_match::matches(&request.email, company.website_domain.as_deref()) {
            return Err(ClaimError::DomainMismatch);
        }

        let token = token::generate();
        let expires_at = token::expiry_from(Utc::now());
        let claim = ClaimRequest::new_email(
            request.company_id,
            actor.user_id,
            request.email.clone(),
            token.clone(),
            expires_at,
        );
        let claim_id = claim.id;

        match self.store.insert_claim(claim).await {
            Ok(()) => {}
            // The storage-level uniqueness constraint closes the window the
            // existence check above leaves open.
            Err(e) if e.is_conflict() => return Err(ClaimError::DuplicatePending),
            Err(e) => return Err(e.into()),
        }

        let url = self.verification_url(&token);
        if let Err(e) = self
            .notifier
            .send_verification_link(&request.email, &url)
            .await
        {
            // Fire-and-forget: delivery failure never reaches claim state.
            warn!(claim = %claim_id, error = %e, "verification email delivery failed");
        }

        info!(
            claim = %claim_id,
            company = %request.company_slug,
            "email claim submitted"
        );
        Ok(SubmissionAck {
            claim_id,
            message: EMAIL_ACK,
        })
    }

    /// Submits a manual-path claim for admin review.
    ///
    /// All evidence fields are required; validation happens before any
    /// persistence, so a rejected submission leaves no partial state.
    pub async fn submit_manual_claim(
        &self,
        actor: Option<&Actor>,
        request: SubmitManualClaim,
    ) -> Result<SubmissionAck, ClaimError> {
        let actor = actor.ok_or(ClaimError::Unauthenticated)?;

        let evidence = ManualEvidence {
            full_name: required(&request.full_name, "full name")?,
            job_title: required(&request.job_title, "job title")?,
            linkedin_url: required(&request.linkedin_url, "LinkedIn URL")?,
            proof_type: request.proof_type,
            proof_text: required(&request.proof_text, "proof description")?,
        };

        self.claimable_company(request.company_id).await?;

        if self
            .store
            .has_pending_claim(request.company_id, actor.user_id)
            .await?
        {
            return Err(ClaimError::DuplicatePending);
        }

        let claim = ClaimRequest::new_manual(request.company_id, actor.user_id, evidence);
        let claim_id = claim.id;

        match self.store.insert_claim(claim).await {
            Ok(()) => {}
            Err(e) if e.is_conflict() => return Err(ClaimError::DuplicatePending),
            Err(e) => return Err(e.into()),
        }

        info!(
            claim = %claim_id,
            company = %request.company_slug,
            "manual claim submitted"
        );
        Ok(SubmissionAck {
            claim_id,
            message: MANUAL_ACK,
        })
    }

    /// Resolves an email-path claim from its verification link.
    ///
    /// The token is the only credential; the caller is otherwise anonymous.
    /// Unknown, malformed, and already-resolved tokens are indistinguishable
    /// by design. This is the only place expiry is evaluated: a stale pending
    /// claim stays pending in storage until its token is presented here.
    pub async fn verify_token(&self, token: &str) -> Result<VerifiedClaim, ClaimError> {
        let claim = self
            .store
            .find_pending_by_token(token)
            .await?
            .ok_or(ClaimError::InvalidOrExpiredLink)?;

        let now = Utc::now();
        if claim.token_expired_at(now) {
            self.store.expire_claim(claim.id).await?;
            info!(claim = %claim.id, "verification link expired");
            return Err(ClaimError::LinkExpired);
        }

        let company = self
            .store
            .get_company(claim.company_id)
            .await?
            .ok_or(ClaimError::InvalidOrExpiredLink)?;

        self.store
            .approve_claim(claim.id, claim.company_id, claim.user_id, None, now)
            .await?;

        info!(claim = %claim.id, company = %company.slug, "company verified by token");
        Ok(VerifiedClaim {
            company_slug: company.slug,
        })
    }

    /// Approves a claim on an admin's authority.
    ///
    /// Exists for the manual-verification track but accepts any pending
    /// claim. Performs the same atomic company mutation as token
    /// verification, plus the audit fields.
    pub async fn approve_claim(
        &self,
        actor: Option<&Actor>,
        claim_id: ClaimRequestId,
        admin_notes: Option<String>,
    ) -> Result<(), ClaimError> {
        let admin = self.require_admin(actor)?;
        let claim = self.pending_claim(claim_id).await?;

        let now = Utc::now();
        let review = AdminReview {
            admin_id: admin.user_id,
            notes: admin_notes,
            reviewed_at: now,
        };
        self.store
            .approve_claim(claim.id, claim.company_id, claim.user_id, Some(review), now)
            .await?;

        info!(claim = %claim.id, admin = %admin.user_id, "claim approved");
        Ok(())
    }

    /// Rejects a claim on an admin's authority. Rejection must be explained:
    /// empty notes fail validation before anything is written. The company
    /// row is never touched.
    pub async fn reject_claim(
        &self,
        actor: Option<&Actor>,
        claim_id: ClaimRequestId,
        admin_notes: String,
    ) -> Result<(), ClaimError> {
        let admin = self.require_admin(actor)?;
        let notes = required(&admin_notes, "rejection notes")?;
        let claim = self.pending_claim(claim_id).await?;

        let review = AdminReview {
            admin_id: admin.user_id,
            notes: Some(notes),
            reviewed_at: Utc::now(),
        };
        self.store.reject_claim(claim.id, review).await?;

        info!(claim = %claim.id, admin = %admin.user_id, "claim rejected");
        Ok(())
    }

    /// Shared submission preconditions: the company must exist and must not
    /// already be verified.
    async fn claimable_company(
        &self,
        company_id: CompanyId,
    ) -> Result<CompanyClaimView, ClaimError> {
        let company = self
            .store
            .get_company(company_id)
            .await?
            .ok_or(ClaimError::CompanyNotFound)?;
        if company.is_verified {
            return Err(ClaimError::AlreadyClaimed);
        }
        Ok(company)
    }

    /// Admin status comes from the explicit actor, resolved freshly by the
    /// caller's identity layer on this very call.
    fn require_admin<'a>(&self, actor: Option<&'a Actor>) -> Result<&'a Actor, ClaimError> {
        let actor = actor.ok_or(ClaimError::Unauthenticated)?;
        if !actor.is_admin {
            return Err(ClaimError::Unauthorized);
        }
        Ok(actor)
    }

    /// Loads a claim for adjudication; terminal claims are not re-resolvable.
    async fn pending_claim(&self, claim_id: ClaimRequestId) -> Result<ClaimRequest, ClaimError> {
        let claim = self
            .store
            .get_claim(claim_id)
            .await?
            .ok_or(ClaimError::ClaimNotFound)?;
        if claim.status.is_terminal() {
            return Err(ClaimError::AlreadyResolved);
        }
        Ok(claim)
    }

    fn verification_url(&self, token: &str) -> String {
        format!(
            "{}/verify/{}",
            self.verification_base_url.trim_end_matches('/'),
            token
        )
    }
}

fn required(value: &str, field: &str) -> Result<String, ClaimError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ClaimError::validation(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}
