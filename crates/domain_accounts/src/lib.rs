//! Account Domain
//!
//! User profiles as this system sees them: display name, email, and the
//! admin flag the HTTP layer resolves on every call. Authentication itself
//! (sessions, passwords, MFA) lives with the external identity provider.

pub mod error;
pub mod ports;
pub mod profile;
pub mod service;

pub use error::AccountError;
pub use ports::ProfileStore;
pub use profile::Profile;
pub use service::AccountService;
