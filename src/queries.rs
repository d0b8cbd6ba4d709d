//! SQL query constants for the shortener application.
//!
//! Centralizes all SQL queries for better maintainability and consistency.

/// Schema-related queries for database setup and migrations.
pub struct Schema;

impl Schema {
    /// Timestamps carry millisecond precision.
    pub const CREATE_USERS_TABLE: &'static str = "
        CREATE TABLE IF NOT EXISTS users (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            name            TEXT NOT NULL UNIQUE,
            password_hash   TEXT NOT NULL,
            created_at      TEXT NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now'))
        )";

    pub const CREATE_REDIRECTS_TABLE: &'static str = "
        CREATE TABLE IF NOT EXISTS redirects (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            token           TEXT NOT NULL UNIQUE,
            url             TEXT NOT NULL,
            hits            INTEGER NOT NULL DEFAULT 0,
            created_at      TEXT NOT NULL DEFAULT (strftime('%Y-%m-%d %H:%M:%f', 'now'))
        )";

    pub const CREATE_TOKEN_INDEX: &'static str =
        "CREATE INDEX IF NOT EXISTS idx_redirects_token ON redirects (token)";

    pub const TABLE_EXISTS: &'static str =
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1";
}

/// User-related queries.
pub struct Users;

impl Users {
    pub const INSERT: &'static str =
        "INSERT INTO users (name, password_hash) VALUES (?1, ?2)";

    pub const SELECT_BY_ID: &'static str =
        "SELECT id, name, password_hash, created_at FROM users WHERE id = ?1";

    pub const SELECT_BY_NAME: &'static str =
        "SELECT id, name, password_hash, created_at FROM users WHERE name = ?1";

    pub const SELECT_ALL: &'static str =
        "SELECT id, name, password_hash, created_at FROM users";

    pub const SELECT_HASH_BY_NAME: &'static str =
        "SELECT password_hash FROM users WHERE name = ?1";

    pub const UPDATE_PASSWORD_HASH: &'static str =
        "UPDATE users SET password_hash = ?1 WHERE id = ?2";
}

/// Redirect-related queries.
pub struct Redirects;

impl Redirects {
    pub const INSERT: &'static str =
        "INSERT INTO redirects (token, url) VALUES (?1, ?2)";

    pub const SELECT_BY_TOKEN: &'static str = "
        SELECT id, token, url, hits, created_at
        FROM redirects WHERE token = ?1";

    pub const COUNT_BY_TOKEN: &'static str = "SELECT COUNT(*) FROM redirects WHERE token = ?1";

    pub const INCREMENT_HITS: &'static str =
        "UPDATE redirects SET hits = hits + 1 WHERE token = ?1";
}
