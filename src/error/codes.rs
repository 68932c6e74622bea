//! Standardized error codes for machine-parseable output.
//!
//! Error codes follow a numeric taxonomy:
//! - 1xx: Request errors
//! - 3xx: Config errors
//! - 5xx: Network / backend errors
//! - 6xx: Serialization errors
//! - 9xx: Internal errors

use serde::{Deserialize, Serialize};

/// Standardized error codes for JSON error output.
///
/// Each variant maps to a numeric code (e.g., `MissingParameter` -> E101).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // ========================================
    // Request errors (1xx)
    // ========================================
    /// E101: A required request parameter was missing or empty
    MissingParameter,

    // ========================================
    // Config errors (3xx)
    // ========================================
    /// E302: Config file has invalid syntax or values
    ConfigInvalid,
    /// E304: Required config value is missing
    ConfigMissingRequired,

    // ========================================
    // Network errors (5xx)
    // ========================================
    /// E501: Cannot reach the backend service
    BackendUnavailable,
    /// E502: Backend answered with a non-success status
    BackendStatus,
    /// E503: Backend body could not be understood
    BackendInvalidResponse,

    // ========================================
    // Serialization errors (6xx)
    // ========================================
    /// E605: Serialization/deserialization failed
    SerializationError,

    // ========================================
    // Internal errors (9xx)
    // ========================================
    /// E901: Unexpected internal error
    InternalError,
    /// E906: IO operation failed
    IoError,
}

impl ErrorCode {
    /// Get the numeric error code (e.g., `MissingParameter` -> 101).
    #[must_use]
    pub const fn numeric(&self) -> u16 {
        match self {
            Self::MissingParameter => 101,

            Self::ConfigInvalid => 302,
            Self::ConfigMissingRequired => 304,

            Self::BackendUnavailable => 501,
            Self::BackendStatus => 502,
            Self::BackendInvalidResponse => 503,

            Self::SerializationError => 605,

            Self::InternalError => 901,
            Self::IoError => 906,
        }
    }

    /// Get the error code as a formatted string (e.g., "E101").
    #[must_use]
    pub fn code_string(&self) -> String {
        format!("E{}", self.numeric())
    }

    /// Get the default suggestion for this error code.
    #[must_use]
    pub const fn suggestion(&self) -> &'static str {
        match self {
            Self::MissingParameter => "Pass a non-empty query, e.g. `alumni search \"who is in boston\"`",
            Self::ConfigInvalid => "Check TOML syntax in the config file and the ALUMNI_* environment variables",
            Self::ConfigMissingRequired => "Set the missing value in alumni.toml or via the matching ALUMNI_* variable",
            Self::BackendUnavailable => "Check that the directory backend is running at [backend].base_url, or use --offline",
            Self::BackendStatus => "The backend rejected the request. Check its logs; local fixture results are used meanwhile",
            Self::BackendInvalidResponse => "The backend returned an unexpected body. Check that base_url points at the directory API",
            Self::SerializationError => "The data format may be corrupted. Check input data for validity",
            Self::InternalError => "An unexpected error occurred. Please report this issue with full error output",
            Self::IoError => "File operation failed. Check path exists and permissions are correct",
        }
    }

    /// Whether the user can act to resolve the error.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        match self {
            Self::MissingParameter
            | Self::ConfigInvalid
            | Self::ConfigMissingRequired
            | Self::BackendUnavailable
            | Self::BackendStatus
            | Self::IoError => true,

            Self::BackendInvalidResponse | Self::SerializationError | Self::InternalError => false,
        }
    }

    /// Get the error category name.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self.numeric() / 100 {
            1 => "request",
            3 => "config",
            5 => "network",
            6 => "serialization",
            9 => "internal",
            _ => "unknown",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code_string())
    }
}
