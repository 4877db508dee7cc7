//! Core Kernel - Foundational types and utilities for the review platform
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Strongly-typed identifiers for domain entities
//! - The authenticated-actor context passed into every domain operation
//! - Port abstractions for swappable persistence and messaging adapters

pub mod actor;
pub mod error;
pub mod identifiers;
pub mod ports;

pub use actor::Actor;
pub use error::CoreError;
pub use identifiers::{ClaimRequestId, CompanyId, ResponseId, ReviewId, UserId};
pub use ports::{DomainPort, PortError};
