//! Data models and DTOs (Data Transfer Objects) for the shortener.
//!
//! Contains structures for database entities and API request/response types.

use serde::{Deserialize, Serialize};
use validator::Validate;

// ============================================================================
// Database Models
// ============================================================================

/// Represents a persisted user account
///
/// Carries the stored password hash, so it is never serialized directly;
/// HTTP responses go through [`UserResponse`].
#[derive(Debug, Clone)]
pub struct User {
    /// Unique identifier
    pub id: i64,
    /// Unique account name
    pub name: String,
    /// Argon2 hash of the current password
    pub password_hash: String,
    /// When the user was created
    pub created_at: String,
}

/// An in-memory user that has not been persisted yet
///
/// Built by `services::new_user` with a freshly generated one-time
/// password. The plaintext lives only in this struct and in the response
/// that reports it; it is never written to the database.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Requested account name
    pub name: String,
    /// Generated one-time password
    pub password: String,
    /// Argon2 hash of the generated password
    pub password_hash: String,
}

/// Represents a token to target URL mapping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Redirect {
    /// Unique identifier
    pub id: i64,
    /// The short token (e.g., "abc123")
    pub token: String,
    /// The target URL
    pub url: String,
    /// Number of times this redirect has been resolved
    pub hits: i64,
    /// When the redirect was created
    pub created_at: String,
}

// ============================================================================
// API Request DTOs
// ============================================================================

/// Request body for creating a new redirect
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRedirectRequest {
    /// The URL to shorten (must be a valid URL)
    #[validate(url(message = "Invalid URL format"))]
    #[validate(length(max = 2048, message = "URL is too long (max 2048 characters)"))]
    pub url: String,
}

/// Request body for creating a new user
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewUserRequest {
    /// Account name (letters, numbers, underscore, hyphen)
    #[validate(length(min = 1, max = 64, message = "Name must be 1-64 characters"))]
    #[validate(custom(function = "validate_name"))]
    pub name: String,
}

/// Custom validator for account names (letters, numbers, underscore, hyphen)
fn validate_name(name: &str) -> Result<(), validator::ValidationError> {
    lazy_static::lazy_static! {
        static ref NAME_REGEX: regex::Regex = regex::Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap();
    }
    if NAME_REGEX.is_match(name) {
        Ok(())
    } else {
        Err(validator::ValidationError::new(
            "Name must be alphanumeric (letters, numbers, underscore, hyphen)",
        ))
    }
}

// ============================================================================
// API Response DTOs
// ============================================================================

/// Response for a successfully created redirect
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRedirectResponse {
    /// The short token
    pub token: String,
    /// The full short URL
    pub short_url: String,
    /// The target URL
    pub url: String,
    /// When the redirect was created
    pub created_at: String,
}

/// Response containing user details (the password hash is omitted)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// Unique identifier
    pub id: i64,
    /// Account name
    pub name: String,
    /// When the user was created
    pub created_at: String,
}

impl UserResponse {
    /// Create a UserResponse from a User entity
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            created_at: user.created_at.clone(),
        }
    }
}

/// Response for listing users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListResponse {
    /// Total count of users
    pub total: usize,
    /// List of users
    pub users: Vec<UserResponse>,
}

/// Response for user registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// User ID
    pub user_id: i64,
    /// Account name
    pub name: String,
    /// The generated password (only shown once)
    pub password: String,
}

/// Response for a password reset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordResponse {
    /// User ID
    pub user_id: i64,
    /// Account name
    pub name: String,
    /// The new generated password (only shown once)
    pub password: String,
}

/// Generic API error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code (for programmatic handling)
    pub code: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
        }
    }
}
