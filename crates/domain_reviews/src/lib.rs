//! Review Domain
//!
//! Star-rated reviews of recruitment companies: submission (one review per
//! user per company), author edits and deletion, responses by the verified
//! company owner, and admin moderation.

pub mod error;
pub mod ports;
pub mod review;
pub mod service;

pub use error::ReviewError;
pub use ports::ReviewStore;
pub use review::{
    CategoryRatings, Review, ReviewResponse, ReviewStatus, ReviewUpdate, ReviewerType,
};
pub use service::{ReviewService, SubmitReview};
