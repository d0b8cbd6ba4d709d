//! Custom error types for the shortener application.
//!
//! Implements proper error handling with automatic HTTP response conversion.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

use crate::models::ErrorResponse;

/// Application-level errors
#[derive(Debug)]
pub enum AppError {
    /// Record was not found
    NotFound(String),
    /// Invalid input data
    ValidationError(String),
    /// Database operation failed
    DatabaseError(String),
    /// User name already taken
    DuplicateName(String),
    /// Password hashing failed
    HashError(String),
    /// Internal server error
    InternalError(String),
    /// Unauthorized access
    Unauthorized(String),
    /// Forbidden - authenticated but not allowed
    Forbidden(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            AppError::DuplicateName(msg) => write!(f, "Duplicate name: {}", msg),
            AppError::HashError(msg) => write!(f, "Hash error: {}", msg),
            AppError::InternalError(msg) => write!(f, "Internal error: {}", msg),
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

// ============================================================================
// Constructor Methods
// ============================================================================

impl AppError {
    /// Create a NotFound error for a user
    pub fn user_not_found(name: &str) -> Self {
        AppError::NotFound(format!("User '{}' not found", name))
    }

    /// Create a NotFound error for a redirect
    pub fn redirect_not_found(token: &str) -> Self {
        AppError::NotFound(format!("Redirect with token '{}' not found", token))
    }

    /// Create a DuplicateName error
    pub fn duplicate_name(name: &str) -> Self {
        AppError::DuplicateName(format!("User '{}' already exists", name))
    }

    /// Create an Unauthorized error for failed credential verification
    pub fn invalid_credentials() -> Self {
        AppError::Unauthorized("Invalid name or password".into())
    }

    /// Create an Unauthorized error for missing credentials
    pub fn missing_credentials() -> Self {
        AppError::Unauthorized(
            "Missing credentials. Provide via 'Authorization: Basic <credentials>' header".into(),
        )
    }

    /// Create a ValidationError with a message
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::ValidationError(message.into())
    }

    /// Create an InternalError with a message
    pub fn internal(message: impl Into<String>) -> Self {
        AppError::InternalError(message.into())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::DuplicateName(_) => StatusCode::CONFLICT,
            AppError::HashError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (error_code, message) = match self {
            AppError::NotFound(msg) => ("NOT_FOUND", msg.clone()),
            AppError::ValidationError(msg) => ("VALIDATION_ERROR", msg.clone()),
            AppError::DatabaseError(msg) => ("DATABASE_ERROR", msg.clone()),
            AppError::DuplicateName(msg) => ("DUPLICATE_NAME", msg.clone()),
            AppError::HashError(msg) => ("HASH_ERROR", msg.clone()),
            AppError::InternalError(msg) => ("INTERNAL_ERROR", msg.clone()),
            AppError::Unauthorized(msg) => ("UNAUTHORIZED", msg.clone()),
            AppError::Forbidden(msg) => ("FORBIDDEN", msg.clone()),
        };

        let mut builder = HttpResponse::build(self.status_code());
        if let AppError::Unauthorized(_) = self {
            builder.insert_header(("WWW-Authenticate", "Basic realm=\"shortify\""));
        }
        builder.json(ErrorResponse::new(message, error_code))
    }
}

/// Convert rusqlite errors to AppError
impl From<rusqlite::Error> for AppError {
    fn from(err: rusqlite::Error) -> Self {
        if let rusqlite::Error::SqliteFailure(sqlite_err, _) = &err {
            if sqlite_err.code == rusqlite::ErrorCode::ConstraintViolation {
                log::warn!("Constraint violation: {:?}", err);
                return AppError::DuplicateName(
                    "A record with this value already exists".to_string(),
                );
            }
        }
        log::error!("Database error: {:?}", err);
        AppError::DatabaseError(err.to_string())
    }
}

/// Convert r2d2 pool errors to AppError
impl From<r2d2::Error> for AppError {
    fn from(err: r2d2::Error) -> Self {
        log::error!("Connection pool error: {:?}", err);
        AppError::DatabaseError(format!("Connection pool error: {}", err))
    }
}
