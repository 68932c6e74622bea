//! Error handling for alumni-search.
//!
//! - [`AlumniError`]: the error enum for all fallible operations
//! - [`ErrorCode`]: stable codes for machine parsing
//! - [`StructuredError`]: serializable error with suggestion and context

mod codes;

use std::io;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use codes::ErrorCode;

/// Main error type.
///
/// Classification and scoring never produce one of these; they come from
/// request validation, configuration and the backend boundary.
#[derive(Error, Debug)]
pub enum AlumniError {
    #[error("Query parameter \"{0}\" is required")]
    MissingParameter(String),

    #[error("Backend not available: {0}")]
    BackendUnavailable(String),

    #[error("Backend returned HTTP {status} for {url}")]
    BackendStatus { status: u16, url: String },

    #[error("Invalid backend response: {0}")]
    InvalidResponse(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Missing required config: {0}")]
    MissingConfig(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AlumniError {
    /// Get the error code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::MissingParameter(_) => ErrorCode::MissingParameter,
            Self::BackendUnavailable(_) => ErrorCode::BackendUnavailable,
            Self::BackendStatus { .. } => ErrorCode::BackendStatus,
            Self::InvalidResponse(_) => ErrorCode::BackendInvalidResponse,
            Self::Config(_) => ErrorCode::ConfigInvalid,
            Self::MissingConfig(_) => ErrorCode::ConfigMissingRequired,
            Self::Server(_) => ErrorCode::InternalError,
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) => ErrorCode::SerializationError,
        }
    }

    /// True for errors caused by the caller rather than the system.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::MissingParameter(_))
    }

    /// Get context information for this error as JSON.
    #[must_use]
    pub fn context(&self) -> Option<Value> {
        match self {
            Self::MissingParameter(name) => Some(serde_json::json!({ "parameter": name })),
            Self::BackendStatus { status, url } => {
                Some(serde_json::json!({ "status": status, "url": url }))
            }
            Self::MissingConfig(key) => Some(serde_json::json!({ "config_key": key })),
            _ => None,
        }
    }

    /// Convert this error to a structured error.
    #[must_use]
    pub fn to_structured(&self) -> StructuredError {
        StructuredError::from_error(self)
    }
}

/// A structured error with machine-readable code, suggestion, and context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredError {
    pub code: ErrorCode,
    pub numeric_code: u16,
    pub message: String,
    pub suggestion: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
    pub recoverable: bool,
    pub category: String,
}

impl StructuredError {
    #[must_use]
    pub fn from_error(err: &AlumniError) -> Self {
        let code = err.code();
        Self {
            code,
            numeric_code: code.numeric(),
            message: err.to_string(),
            suggestion: code.suggestion().to_string(),
            context: err.context(),
            recoverable: code.is_recoverable(),
            category: code.category().to_string(),
        }
    }
}

impl std::fmt::Display for StructuredError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl From<&AlumniError> for StructuredError {
    fn from(err: &AlumniError) -> Self {
        Self::from_error(err)
    }
}

/// Result type alias using `AlumniError`.
pub type Result<T> = std::result::Result<T, AlumniError>;
