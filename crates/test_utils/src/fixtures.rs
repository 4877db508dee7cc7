//! Pre-built test data for common entities

use core_kernel::UserId;
use domain_accounts::Profile;
use domain_reviews::review::CategoryRatings;

/// A regular user profile
pub fn user_profile(id: UserId) -> Profile {
    Profile::new(id, format!("user-{}@example.com", id.as_uuid().simple()))
}

/// An administrator profile
pub fn admin_profile(id: UserId) -> Profile {
    let mut profile = Profile::new(id, "admin@platform.test");
    profile.is_admin = true;
    profile
}

/// Four mid-range category ratings (overall 4.0)
pub fn solid_ratings() -> CategoryRatings {
    CategoryRatings {
        communication: 4,
        candidate_care: 4,
        job_quality: 4,
        speed: 4,
    }
}
