//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the fields they care about.

use chrono::{DateTime, Duration, Utc};

use core_kernel::{CompanyId, UserId};
use domain_claims::claim::{ClaimRequest, ManualEvidence, ProofType};
use domain_company::company::{Company, CompanySize, CreateCompany};

/// Builder for claim requests seeded directly into a store
pub struct ClaimRequestBuilder {
    company_id: CompanyId,
    user_id: UserId,
    email: String,
    token: String,
    expires_at: DateTime<Utc>,
}

impl ClaimRequestBuilder {
    /// Creates a builder with a fresh claimant and a 24-hour token window
    pub fn new(company_id: CompanyId) -> Self {
        Self {
            company_id,
            user_id: UserId::new(),
            email: "claimant@acme.com".to_string(),
            token: "cafebabe".to_string(),
            expires_at: Utc::now() + Duration::hours(24),
        }
    }

    /// Sets the claimant
    pub fn with_user(mut self, user_id: UserId) -> Self {
        self.user_id = user_id;
        self
    }

    /// Sets the work email on record
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the token value
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = token.into();
        self
    }

    /// Sets the absolute token expiry
    pub fn with_expiry(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = expires_at;
        self
    }

    /// Marks the token window as already closed
    pub fn expired(mut self) -> Self {
        self.expires_at = Utc::now() - Duration::seconds(5);
        self
    }

    /// Builds a pending email-path claim
    pub fn build_email(self) -> ClaimRequest {
        ClaimRequest::new_email(
            self.company_id,
            self.user_id,
            self.email,
            self.token,
            self.expires_at,
        )
    }

    /// Builds a pending manual-path claim with standard evidence
    pub fn build_manual(self) -> ClaimRequest {
        ClaimRequest::new_manual(
            self.company_id,
            self.user_id,
            ManualEvidence {
                full_name: "Carol Smith".to_string(),
                job_title: "Head of Talent".to_string(),
                linkedin_url: "https://linkedin.com/in/carolsmith".to_string(),
                proof_type: ProofType::OfficialDocumentation,
                proof_text: "Signed letter on company letterhead".to_string(),
            },
        )
    }
}

/// Builder for company listings
pub struct CompanyBuilder {
    name: String,
    slug: String,
    website: Option<String>,
    owner_id: Option<UserId>,
    verified: bool,
}

impl Default for CompanyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CompanyBuilder {
    pub fn new() -> Self {
        Self {
            name: "Acme Recruitment".to_string(),
            slug: "acme".to_string(),
            website: Some("https://www.acme.com".to_string()),
            owner_id: None,
            verified: false,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    pub fn without_website(mut self) -> Self {
        self.website = None;
        self
    }

    /// Marks the listing verified and owned
    pub fn verified_by(mut self, owner: UserId) -> Self {
        self.owner_id = Some(owner);
        self.verified = true;
        self
    }

    pub fn owned_by(mut self, owner: UserId) -> Self {
        self.owner_id = Some(owner);
        self
    }

    pub fn build(self) -> Company {
        let mut company = Company::create(
            CreateCompany {
                name: self.name,
                description: None,
                website: self.website,
                sectors: vec!["Technology".to_string()],
                locations: vec!["London".to_string()],
                size: Some(CompanySize::From11To50),
            },
            self.slug,
        );
        company.owner_id = self.owner_id;
        if self.verified {
            company.is_verified = true;
            company.verified_at = Some(Utc::now());
        }
        company
    }
}
