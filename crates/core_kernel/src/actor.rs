//! Authenticated-actor context
//!
//! Domain operations never read a "current user" from ambient state. The
//! caller (normally the HTTP layer) resolves the session and the admin flag
//! once per request and passes the result in explicitly. An absent actor
//! means the request is unauthenticated.

use serde::{Deserialize, Serialize};

use crate::identifiers::UserId;

/// The authenticated principal invoking a domain operation.
///
/// The admin flag is resolved freshly by the caller's identity layer on every
/// request, never cached across calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub user_id: UserId,
    pub is_admin: bool,
}

impl Actor {
    /// A regular authenticated user
    pub fn user(user_id: UserId) -> Self {
        Self {
            user_id,
            is_admin: false,
        }
    }

    /// An administrator
    pub fn admin(user_id: UserId) -> Self {
        Self {
            user_id,
            is_admin: true,
        }
    }
}
