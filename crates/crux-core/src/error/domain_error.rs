//! Domain errors - error types for the domain layer
//!
//! The redemption taxonomy is the important part: the four expected
//! redemption outcomes (`CodeNotFound`, `WrongGym`, `AlreadyRedeemed`,
//! `CodeExpired`) are user-facing, terminal for that code, and must never
//! be conflated with each other or with a retryable storage failure.

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Redemption Outcomes
    // =========================================================================
    #[error("Code is empty or malformed")]
    InvalidCodeFormat,

    #[error("Code not found: {0}")]
    CodeNotFound(String),

    #[error("Code {code} belongs to a different gym")]
    WrongGym { code: String },

    #[error("Code has already been redeemed: {0}")]
    AlreadyRedeemed(String),

    #[error("Code has expired: {0}")]
    CodeExpired(String),

    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Gym not found: {0}")]
    GymNotFound(Uuid),

    #[error("Profile not found: {0}")]
    ProfileNotFound(Uuid),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Gym name already in use")]
    GymNameExists,

    #[error("Code string already minted in this scope")]
    CodeValueExists,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Infrastructure Errors (wrapped, retryable)
    // =========================================================================
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidCodeFormat => "INVALID_CODE_FORMAT",
            Self::CodeNotFound(_) => "CODE_NOT_FOUND",
            Self::WrongGym { .. } => "WRONG_GYM",
            Self::AlreadyRedeemed(_) => "CODE_ALREADY_REDEEMED",
            Self::CodeExpired(_) => "CODE_EXPIRED",
            Self::GymNotFound(_) => "UNKNOWN_GYM",
            Self::ProfileNotFound(_) => "UNKNOWN_PROFILE",
            Self::GymNameExists => "GYM_NAME_EXISTS",
            Self::CodeValueExists => "CODE_VALUE_EXISTS",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::StorageError(_) => "STORAGE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::CodeNotFound(_) | Self::GymNotFound(_) | Self::ProfileNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidCodeFormat | Self::ValidationError(_))
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::AlreadyRedeemed(_) | Self::WrongGym { .. } | Self::GymNameExists | Self::CodeValueExists
        )
    }

    /// Check if this is an expired-code error (surfaced as HTTP 410)
    pub fn is_expired(&self) -> bool {
        matches!(self, Self::CodeExpired(_))
    }

    /// Check if the caller may safely retry the same operation.
    ///
    /// Only wrapped transport/storage failures are retryable; every
    /// redemption outcome is terminal for that code.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::StorageError(_))
    }
}
