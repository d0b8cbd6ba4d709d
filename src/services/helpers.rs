//! Shared utilities used across the service layer.
//!
//! Contains row mapping helpers and token generation.

use nanoid::nanoid;

use crate::constants::TOKEN_ALPHABET;
use crate::models::{Redirect, User};

// ============================================================================
// Row Mapping Helpers
// ============================================================================

/// Map a database row to a User struct
pub(super) fn map_user_row(row: &rusqlite::Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        password_hash: row.get(2)?,
        created_at: row.get(3)?,
    })
}

/// Map a database row to a Redirect struct
pub(super) fn map_redirect_row(row: &rusqlite::Row) -> rusqlite::Result<Redirect> {
    Ok(Redirect {
        id: row.get(0)?,
        token: row.get(1)?,
        url: row.get(2)?,
        hits: row.get(3)?,
        created_at: row.get(4)?,
    })
}

/// Generate a random redirect token using nanoid
pub fn generate_token(length: usize) -> String {
    nanoid!(length, &TOKEN_ALPHABET)
}
