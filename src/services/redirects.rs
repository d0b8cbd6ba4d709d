//! Redirect creation, token resolution, and hit accounting.

use rusqlite::params;

use super::helpers::{generate_token, map_redirect_row};
use crate::constants::MAX_TOKEN_GENERATION_RETRIES;
use crate::db::{get_conn, DbPool};
use crate::errors::AppError;
use crate::models::Redirect;
use crate::queries::Redirects;

/// Create a new redirect with a generated token
pub fn create_redirect(pool: &DbPool, url: &str, token_length: usize) -> Result<Redirect, AppError> {
    let conn = get_conn(pool)?;

    // Generate a unique token with retries
    let mut token = generate_token(token_length);
    let mut attempts = 0;
    while token_exists(&conn, &token)? && attempts < MAX_TOKEN_GENERATION_RETRIES {
        token = generate_token(token_length);
        attempts += 1;
    }
    if attempts >= MAX_TOKEN_GENERATION_RETRIES {
        return Err(AppError::internal("Failed to generate unique token"));
    }

    conn.execute(Redirects::INSERT, params![token, url])?;

    let redirect = get_redirect(pool, &token)?;
    log::info!("Created redirect: {} -> {}", redirect.token, redirect.url);

    Ok(redirect)
}

/// Check if a token already exists
fn token_exists(conn: &rusqlite::Connection, token: &str) -> Result<bool, AppError> {
    let count: i32 = conn.query_row(Redirects::COUNT_BY_TOKEN, params![token], |row| row.get(0))?;
    Ok(count > 0)
}

/// Get a redirect by its token
pub fn get_redirect(pool: &DbPool, token: &str) -> Result<Redirect, AppError> {
    let conn = get_conn(pool)?;

    conn.query_row(Redirects::SELECT_BY_TOKEN, params![token], map_redirect_row)
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => AppError::redirect_not_found(token),
            _ => AppError::DatabaseError(e.to_string()),
        })
}

/// Increment the hit counter for a token
pub fn record_hit(pool: &DbPool, token: &str) -> Result<(), AppError> {
    let conn = get_conn(pool)?;

    let rows_affected = conn.execute(Redirects::INCREMENT_HITS, params![token])?;
    if rows_affected == 0 {
        return Err(AppError::redirect_not_found(token));
    }

    Ok(())
}
