//! Request/Response data transfer objects

pub mod accounts;
pub mod claims;
pub mod companies;
pub mod reviews;
