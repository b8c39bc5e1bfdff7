//! Error codes for the storefront backend API.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! that appear in HTTP responses. Add new codes here; never pass ad-hoc
//! strings as error codes.

use core::fmt;

/// Centralized error codes for the storefront backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// Missing or malformed Bearer token
    Unauthorized,
    /// Token failed verification (shape, signature, payload or expiry)
    InvalidToken,
    /// Username or password rejected at login
    InvalidCredentials,
    /// Authenticated, but not for this audience
    Forbidden,

    // Request Validation
    /// Missing or invalid request field
    ValidationError,
    /// Request body could not be parsed
    BadRequest,
    /// Request body over the size limit
    PayloadTooLarge,

    // Resource Not Found
    NotFound,

    // System Errors
    /// Credential store query failed
    DbError,
    /// Stored data did not have the expected shape
    DataCorruption,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::InvalidToken => "INVALID_TOKEN",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Forbidden => "FORBIDDEN",

            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",

            Self::NotFound => "NOT_FOUND",

            Self::DbError => "DB_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }

    /// Every code, for exhaustiveness checks in tests.
    pub const ALL: [ErrorCode; 12] = [
        Self::Unauthorized,
        Self::InvalidToken,
        Self::InvalidCredentials,
        Self::Forbidden,
        Self::ValidationError,
        Self::BadRequest,
        Self::PayloadTooLarge,
        Self::NotFound,
        Self::DbError,
        Self::DataCorruption,
        Self::Internal,
        Self::ConfigError,
    ];
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
