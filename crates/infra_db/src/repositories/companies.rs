//! Company repository
//!
//! PostgreSQL implementation of [`domain_company::CompanyStore`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use core_kernel::{CompanyId, DomainPort, PortError, UserId};
use domain_company::company::{Company, CompanySize};
use domain_company::ports::CompanyStore;

use crate::error::port_error;

/// Repository for company listings
#[derive(Debug, Clone)]
pub struct PgCompanyStore {
    pool: PgPool,
}

impl PgCompanyStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const COMPANY_COLUMNS: &str = "id, name, slug, description, logo_url, website, website_domain, \
     sectors, locations, size, is_verified, owner_id, verified_at, created_at, updated_at";

impl DomainPort for PgCompanyStore {}

#[async_trait]
impl CompanyStore for PgCompanyStore {
    async fn get(&self, id: CompanyId) -> Result<Option<Company>, PortError> {
        let row: Option<CompanyRow> =
            sqlx::query_as(&format!("SELECT {COMPANY_COLUMNS} FROM companies WHERE id = $1"))
                .bind(id.as_uuid())
                .fetch_optional(&self.pool)
                .await
                .map_err(port_error)?;

        Ok(row.map(Company::from))
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Option<Company>, PortError> {
        let row: Option<CompanyRow> =
            sqlx::query_as(&format!("SELECT {COMPANY_COLUMNS} FROM companies WHERE slug = $1"))
                .bind(slug)
                .fetch_optional(&self.pool)
                .await
                .map_err(port_error)?;

        Ok(row.map(Company::from))
    }

    async fn slug_exists(&self, slug: &str) -> Result<bool, PortError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM companies WHERE slug = $1)")
                .bind(slug)
                .fetch_one(&self.pool)
                .await
                .map_err(port_error)?;

        Ok(exists)
    }

    async fn insert(&self, company: Company) -> Result<(), PortError> {
        sqlx::query(
            "INSERT INTO companies ( \
                 id, name, slug, description, logo_url, website, website_domain, \
                 sectors, locations, size, is_verified, created_at, updated_at \
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)",
        )
        .bind(company.id.as_uuid())
        .bind(&company.name)
        .bind(&company.slug)
        .bind(&company.description)
        .bind(&company.logo_url)
        .bind(&company.website)
        .bind(&company.website_domain)
        .bind(&company.sectors)
        .bind(&company.locations)
        .bind(company.size.map(CompanySizeRow::from))
        .bind(company.is_verified)
        .bind(company.created_at)
        .bind(company.updated_at)
        .execute(&self.pool)
        .await
        .map_err(port_error)?;

        Ok(())
    }

    async fn update(&self, company: &Company) -> Result<(), PortError> {
        let result = sqlx::query(
            "UPDATE companies \
             SET name = $2, description = $3, logo_url = $4, website = $5, \
                 website_domain = $6, sectors = $7, locations = $8, size = $9, \
                 updated_at = $10 \
             WHERE id = $1",
        )
        .bind(company.id.as_uuid())
        .bind(&company.name)
        .bind(&company.description)
        .bind(&company.logo_url)
        .bind(&company.website)
        .bind(&company.website_domain)
        .bind(&company.sectors)
        .bind(&company.locations)
        .bind(company.size.map(CompanySizeRow::from))
        .bind(company.updated_at)
        .execute(&self.pool)
        .await
        .map_err(port_error)?;

        if result.rows_affected() == 0 {
            return Err(PortError::not_found("Company", company.id));
        }
        Ok(())
    }

    async fn set_owner(&self, id: CompanyId, new_owner: UserId) -> Result<(), PortError> {
        let result = sqlx::query("UPDATE companies SET owner_id = $2 WHERE id = $1")
            .bind(id.as_uuid())
            .bind(new_owner.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(port_error)?;

        if result.rows_affected() == 0 {
            return Err(PortError::not_found("Company", id));
        }
        Ok(())
    }

    async fn delete(&self, id: CompanyId) -> Result<(), PortError> {
        let result = sqlx::query("DELETE FROM companies WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(port_error)?;

        if result.rows_affected() == 0 {
            return Err(PortError::not_found("Company", id));
        }
        Ok(())
    }
}

/// Company size enumeration, database side. Labels mirror the UI brackets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "company_size")]
enum CompanySizeRow {
    #[sqlx(rename = "1-10")]
    From1To10,
    #[sqlx(rename = "11-50")]
    From11To50,
    #[sqlx(rename = "51-200")]
    From51To200,
    #[sqlx(rename = "201-500")]
    From201To500,
    #[sqlx(rename = "500+")]
    Over500,
}

impl From<CompanySize> for CompanySizeRow {
    fn from(size: CompanySize) -> Self {
        match size {
            CompanySize::From1To10 => CompanySizeRow::From1To10,
            CompanySize::From11To50 => CompanySizeRow::From11To50,
            CompanySize::From51To200 => CompanySizeRow::From51To200,
            CompanySize::From201To500 => CompanySizeRow::From201To500,
            CompanySize::Over500 => CompanySizeRow::Over500,
        }
    }
}

impl From<CompanySizeRow> for CompanySize {
    fn from(row: CompanySizeRow) -> Self {
        match row {
            CompanySizeRow::From1To10 => CompanySize::From1To10,
            CompanySizeRow::From11To50 => CompanySize::From11To50,
            CompanySizeRow::From51To200 => CompanySize::From51To200,
            CompanySizeRow::From201To500 => CompanySize::From201To500,
            CompanySizeRow::Over500 => CompanySize::Over500,
        }
    }
}

/// Database row for a company listing
#[derive(Debug, Clone, sqlx::FromRow)]
struct CompanyRow {
    id: Uuid,
    name: String,
    slug: String,
    description: Option<String>,
    logo_url: Option<String>,
    website: Option<String>,
    website_domain: Option<String>,
    sectors: Vec<String>,
    locations: Vec<String>,
    size: Option<CompanySizeRow>,
    is_verified: bool,
    owner_id: Option<Uuid>,
    verified_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<CompanyRow> for Company {
    fn from(row: CompanyRow) -> Self {
        Company {
            id: CompanyId::from_uuid(row.id),
            name: row.name,
            slug: row.slug,
            description: row.description,
            logo_url: row.logo_url,
            website: row.website,
            website_domain: row.website_domain,
            sectors: row.sectors,
            locations: row.locations,
            size: row.size.map(Into::into),
            is_verified: row.is_verified,
            owner_id: row.owner_id.map(UserId::from_uuid),
            verified_at: row.verified_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_round_trip() {
        for size in [
            CompanySize::From1To10,
            CompanySize::From11To50,
            CompanySize::From51To200,
            CompanySize::From201To500,
            CompanySize::Over500,
        ] {
            assert_eq!(CompanySize::from(CompanySizeRow::from(size)), size);
        }
    }
}
