//! Infrastructure Database Layer
//!
//! This crate provides the PostgreSQL implementations of every domain port
//! using SQLx, following the repository pattern: the domain layer sees only
//! its port traits, never the database.
//!
//! Queries go through the runtime query API (`sqlx::query_as`), so the
//! workspace builds without a live database; schema lives in `migrations/`.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, DatabaseConfig, PgClaimStore};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/reviews")).await?;
//! let claims = PgClaimStore::new(pool.clone());
//! ```

pub mod error;
pub mod pool;
pub mod repositories;

pub use error::DatabaseError;
pub use pool::{create_pool, create_pool_from_url, DatabaseConfig, DatabasePool};
pub use repositories::claims::PgClaimStore;
pub use repositories::companies::PgCompanyStore;
pub use repositories::profiles::PgProfileStore;
pub use repositories::reviews::PgReviewStore;
