//! Company aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{CompanyId, UserId};

use crate::website;

/// Headcount bracket shown on a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompanySize {
    #[serde(rename = "1-10")]
    From1To10,
    #[serde(rename = "11-50")]
    From11To50,
    #[serde(rename = "51-200")]
    From51To200,
    #[serde(rename = "201-500")]
    From201To500,
    #[serde(rename = "500+")]
    Over500,
}

/// A recruitment-company listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    /// Unique identifier
    pub id: CompanyId,
    /// Display name
    pub name: String,
    /// Routing key, unique across listings
    pub slug: String,
    /// Listing description
    pub description: Option<String>,
    /// Logo image URL
    pub logo_url: Option<String>,
    /// Registered website URL
    pub website: Option<String>,
    /// Host of the registered website, used for claim domain matching
    pub website_domain: Option<String>,
    /// Sectors the company recruits for
    pub sectors: Vec<String>,
    /// Office locations
    pub locations: Vec<String>,
    /// Headcount bracket
    pub size: Option<CompanySize>,
    /// Terminal trust flag set by the claim workflow
    pub is_verified: bool,
    /// The verified claimant, when one exists
    pub owner_id: Option<UserId>,
    /// When the listing was verified; set together with the two fields above
    pub verified_at: Option<DateTime<Utc>>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a listing
#[derive(Debug, Clone)]
pub struct CreateCompany {
    pub name: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub sectors: Vec<String>,
    pub locations: Vec<String>,
    pub size: Option<CompanySize>,
}

/// Partial update applied by the listing's owner
#[derive(Debug, Clone, Default)]
pub struct CompanyUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
    pub sectors: Option<Vec<String>>,
    pub locations: Option<Vec<String>>,
    pub size: Option<CompanySize>,
    pub logo_url: Option<String>,
}

impl Company {
    /// Creates an unverified listing with its slug and derived website domain
    pub fn create(data: CreateCompany, slug: String) -> Self {
        let now = Utc::now();
        let website_domain = data
            .website
            .as_deref()
            .and_then(website::extract_domain);

        Self {
            id: CompanyId::new_v7(),
            name: data.name,
            slug,
            description: data.description,
            logo_url: None,
            website: data.website,
            website_domain,
            sectors: data.sectors,
            locations: data.locations,
            size: data.size,
            is_verified: false,
            owner_id: None,
            verified_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies a partial update. A changed website re-derives the matching
    /// domain; everything else is a plain field replacement.
    pub fn apply(&mut self, update: CompanyUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(website) = update.website {
            self.website_domain = website::extract_domain(&website);
            self.website = Some(website);
        }
        if let Some(sectors) = update.sectors {
            self.sectors = sectors;
        }
        if let Some(locations) = update.locations {
            self.locations = locations;
        }
        if let Some(size) = update.size {
            self.size = Some(size);
        }
        if let Some(logo_url) = update.logo_url {
            self.logo_url = Some(logo_url);
        }
        self.updated_at = Utc::now();
    }

    /// Whether the given user is the verified owner of this listing
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == Some(user_id)
    }
}
