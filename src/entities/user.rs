//! User entity - An application account.
//!
//! Credentials are recorded as entered. Nothing reads them to gate access.

use super::Collection;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Collection users are stored in.
pub const COLLECTION: Collection = Collection::Users;
/// Uniqueness key, compared case-sensitively.
pub const KEY_FIELD: &str = "username";

/// User record as persisted in `users.json`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub username: String,
    /// Stored in clear text
    pub password: String,
    pub role: String,
    pub full_name: String,
    pub created_at: String,
}

// Password never appears in the listing line.
impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Username: {}, Role: {}, Name: {}, Created: {}",
            self.username, self.role, self.full_name, self.created_at
        )
    }
}
