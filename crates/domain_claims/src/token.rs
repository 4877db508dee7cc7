//! Opaque verification tokens
//!
//! The token is the credential: whoever presents it proves possession of the
//! claimed inbox. It must be infeasible to guess or enumerate, so it is drawn
//! from the operating system's CSPRNG rather than a general-purpose PRNG.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::OsRng;
use rand::RngCore;

/// Absolute token lifetime, from issuance.
pub const TOKEN_TTL_HOURS: i64 = 24;

/// Raw entropy per token, in bytes. 32 bytes = 256 bits, hex-encoded to 64 chars.
const TOKEN_BYTES: usize = 32;

/// Generates a fresh opaque token.
pub fn generate() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Computes the absolute expiry for a token issued at the given instant.
pub fn expiry_from(issued_at: DateTime<Utc>) -> DateTime<Utc> {
    issued_at + Duration::hours(TOKEN_TTL_HOURS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_length_and_alphabet() {
        let token = generate();
        assert_eq!(token.len(), TOKEN_BYTES * 2);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_tokens_are_unique() {
        let a = generate();
        let b = generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_expiry_is_24_hours() {
        let issued = Utc::now();
        let expires = expiry_from(issued);
        assert_eq!(expires - issued, Duration::hours(24));
    }
}
