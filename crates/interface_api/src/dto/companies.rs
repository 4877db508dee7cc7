//! Company DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use domain_company::company::{Company, CompanySize, CompanyUpdate, CreateCompany};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCompanyRequest {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: Option<String>,
    #[validate(url)]
    pub website: Option<String>,
    #[serde(default)]
    pub sectors: Vec<String>,
    #[serde(default)]
    pub locations: Vec<String>,
    pub size: Option<CompanySize>,
}

impl From<CreateCompanyRequest> for CreateCompany {
    fn from(req: CreateCompanyRequest) -> Self {
        CreateCompany {
            name: req.name,
            description: req.description,
            website: req.website,
            sectors: req.sectors,
            locations: req.locations,
            size: req.size,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCompanyRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(url)]
    pub website: Option<String>,
    pub sectors: Option<Vec<String>>,
    pub locations: Option<Vec<String>>,
    pub size: Option<CompanySize>,
    #[validate(url)]
    pub logo_url: Option<String>,
}

impl From<UpdateCompanyRequest> for CompanyUpdate {
    fn from(req: UpdateCompanyRequest) -> Self {
        CompanyUpdate {
            name: req.name,
            description: req.description,
            website: req.website,
            sectors: req.sectors,
            locations: req.locations,
            size: req.size,
            logo_url: req.logo_url,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct TransferOwnershipRequest {
    #[validate(email)]
    pub new_owner_email: String,
}

#[derive(Debug, Serialize)]
pub struct CompanyResponse {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub website: Option<String>,
    pub website_domain: Option<String>,
    pub sectors: Vec<String>,
    pub locations: Vec<String>,
    pub size: Option<CompanySize>,
    pub is_verified: bool,
    pub verified_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Company> for CompanyResponse {
    fn from(company: Company) -> Self {
        CompanyResponse {
            id: *company.id.as_uuid(),
            name: company.name,
            slug: company.slug,
            description: company.description,
            logo_url: company.logo_url,
            website: company.website,
            website_domain: company.website_domain,
            sectors: company.sectors,
            locations: company.locations,
            size: company.size,
            is_verified: company.is_verified,
            verified_at: company.verified_at,
            created_at: company.created_at,
        }
    }
}
