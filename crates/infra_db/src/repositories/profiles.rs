//! Profile repository
//!
//! PostgreSQL implementation of [`domain_accounts::ProfileStore`] and of the
//! narrow [`domain_company::ports::ProfileDirectory`] lookup the company
//! domain uses for ownership transfer.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use core_kernel::{DomainPort, PortError, UserId};
use domain_accounts::ports::ProfileStore;
use domain_accounts::profile::Profile;
use domain_company::ports::ProfileDirectory;

use crate::error::port_error;

/// Repository for user profiles
#[derive(Debug, Clone)]
pub struct PgProfileStore {
    pool: PgPool,
}

impl PgProfileStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const PROFILE_COLUMNS: &str = "id, display_name, email, is_admin, created_at, updated_at";

impl DomainPort for PgProfileStore {}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn get(&self, id: UserId) -> Result<Option<Profile>, PortError> {
        let row: Option<ProfileRow> =
            sqlx::query_as(&format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = $1"))
                .bind(id.as_uuid())
                .fetch_optional(&self.pool)
                .await
                .map_err(port_error)?;

        Ok(row.map(Profile::from))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Profile>, PortError> {
        let row: Option<ProfileRow> =
            sqlx::query_as(&format!("SELECT {PROFILE_COLUMNS} FROM profiles WHERE email = $1"))
                .bind(email)
                .fetch_optional(&self.pool)
                .await
                .map_err(port_error)?;

        Ok(row.map(Profile::from))
    }

    async fn set_display_name(&self, id: UserId, display_name: &str) -> Result<(), PortError> {
        let result =
            sqlx::query("UPDATE profiles SET display_name = $2, updated_at = $3 WHERE id = $1")
                .bind(id.as_uuid())
                .bind(display_name)
                .bind(Utc::now())
                .execute(&self.pool)
                .await
                .map_err(port_error)?;

        if result.rows_affected() == 0 {
            return Err(PortError::not_found("Profile", id));
        }
        Ok(())
    }

    async fn delete(&self, id: UserId) -> Result<(), PortError> {
        let result = sqlx::query("DELETE FROM profiles WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(port_error)?;

        if result.rows_affected() == 0 {
            return Err(PortError::not_found("Profile", id));
        }
        Ok(())
    }
}

#[async_trait]
impl ProfileDirectory for PgProfileStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<UserId>, PortError> {
        let id: Option<Uuid> = sqlx::query_scalar("SELECT id FROM profiles WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(port_error)?;

        Ok(id.map(UserId::from_uuid))
    }
}

/// Database row for a profile
#[derive(Debug, Clone, sqlx::FromRow)]
struct ProfileRow {
    id: Uuid,
    display_name: Option<String>,
    email: String,
    is_admin: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Profile {
            id: UserId::from_uuid(row.id),
            display_name: row.display_name,
            email: row.email,
            is_admin: row.is_admin,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
