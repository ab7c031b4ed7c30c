//! Application error types
//!
//! Unified error handling above the domain layer. Retryable transport
//! conditions (identity timeout, database trouble) map to 5xx; everything
//! the user can act on maps to a 4xx with a specific code.

use crux_core::DomainError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Authentication errors
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token expired")]
    TokenExpired,

    #[error("Missing authentication")]
    MissingAuth,

    #[error("Insufficient role for this operation")]
    InsufficientRole,

    // Identity bridge
    #[error("Identity resolution timed out")]
    IdentityTimeout,

    // Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    // Resource errors
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    // Database errors
    #[error("Database error: {0}")]
    Database(String),

    // Internal errors
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),

    // Domain errors
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request
            Self::Validation(_) => 400,

            // 401 Unauthorized
            Self::InvalidToken | Self::TokenExpired | Self::MissingAuth => 401,

            // 403 Forbidden
            Self::InsufficientRole => 403,

            // 404 Not Found
            Self::NotFound(_) => 404,

            // 409 Conflict
            Self::Conflict(_) => 409,

            // 500 Internal Server Error
            Self::Database(_) | Self::Internal(_) | Self::Config(_) => 500,

            // 503: retryable, the client should try again
            Self::IdentityTimeout => 503,

            // Map domain errors to appropriate status codes
            Self::Domain(e) => domain_status_code(e),
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidToken => "INVALID_TOKEN",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::MissingAuth => "MISSING_AUTH",
            Self::InsufficientRole => "INSUFFICIENT_ROLE",
            Self::IdentityTimeout => "IDENTITY_TIMEOUT",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Domain(e) => e.code(),
        }
    }

    /// Check if the client may retry the same request
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::IdentityTimeout | Self::Database(_) => true,
            Self::Domain(e) => e.is_retryable(),
            _ => false,
        }
    }
}

/// Map a domain error to its HTTP status
fn domain_status_code(e: &DomainError) -> u16 {
    if e.is_not_found() {
        404
    } else if e.is_expired() {
        410
    } else if e.is_conflict() {
        409
    } else if e.is_validation() {
        400
    } else {
        500
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
