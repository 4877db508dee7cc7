//! Repository implementations of the domain ports
//!
//! Each repository owns a `PgPool` handle and implements one domain's port
//! trait. Row structs and database-side enums live next to the repository
//! that reads them; conversion into domain types happens at this boundary.

pub mod claims;
pub mod companies;
pub mod profiles;
pub mod reviews;
