//! Test utilities and helpers.
//!
//! Provides common test infrastructure used across multiple test modules.
//! This module is only compiled when running tests.

#![cfg(test)]

use std::sync::atomic::{AtomicUsize, Ordering};

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::config::Config;
use crate::db::{init_pool, run_migrations, DbPool};

static TEST_DB_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Create an in-memory database pool for testing.
///
/// Each call creates a uniquely named in-memory SQLite database, isolated
/// from every other test, and runs all migrations. The database lives for
/// as long as the pool keeps a connection open.
pub fn setup_test_db() -> DbPool {
    let id = TEST_DB_COUNTER.fetch_add(1, Ordering::SeqCst);
    let url = format!("file:shortify_test_{}?mode=memory&cache=shared", id);

    let pool = init_pool(&url).expect("Failed to create test pool");
    run_migrations(&pool).expect("Failed to run migrations");
    pool
}

/// Alias for `setup_test_db` used by the handler tests.
pub fn setup_test_pool() -> DbPool {
    setup_test_db()
}

/// Create a default test configuration.
pub fn test_config() -> Config {
    Config::default()
}

/// Helper to create a test user.
///
/// Returns (User, one-time password) tuple.
pub fn create_test_user(pool: &DbPool, name: &str) -> (crate::models::User, String) {
    crate::services::register_user(pool, name).expect("Failed to create test user")
}

/// Helper to create a test redirect with a 7-character token.
pub fn create_test_redirect(pool: &DbPool, url: &str) -> crate::models::Redirect {
    crate::services::create_redirect(pool, url, 7).expect("Failed to create test redirect")
}

/// Build an `Authorization: Basic` header pair for the given credentials.
pub fn basic_auth_header(name: &str, password: &str) -> (&'static str, String) {
    let encoded = STANDARD.encode(format!("{}:{}", name, password));
    ("Authorization", format!("Basic {}", encoded))
}

/// Extension trait for test assertions.
pub trait TestAssertions {
    /// Assert that a result is Ok.
    fn assert_ok(&self);
    /// Assert that a result is Err.
    fn assert_err(&self);
}

impl<T, E: std::fmt::Debug> TestAssertions for Result<T, E> {
    fn assert_ok(&self) {
        assert!(
            self.is_ok(),
            "Expected Ok, got Err: {:?}",
            self.as_ref().err()
        );
    }

    fn assert_err(&self) {
        assert!(self.is_err(), "Expected Err, got Ok");
    }
}
