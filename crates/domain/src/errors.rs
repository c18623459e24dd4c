//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single failed field check, as reported back to API clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Wire name of the field
    pub field: String,
    /// User-facing message for the failed rule
    pub message: String,
    /// The rejected value, when one was submitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl FieldViolation {
    /// Violation without a recorded value
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into(), value: None }
    }
}

/// Main error type for ShareHub
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum ShareHubError {
    /// One or more field rules failed
    #[error("Validation failed: {} field error(s)", .0.len())]
    ValidationFailed(Vec<FieldViolation>),

    /// Request is well-formed but cannot be applied
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Missing or rejected credentials
    #[error("Authentication error: {0}")]
    Unauthorized(String),

    /// Requested record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Write would break a uniqueness rule
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Storage failure
    #[error("Database error: {0}")]
    Database(String),

    /// Invalid or missing configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Anything else that went wrong on the server
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ShareHubError {
    /// Stable label for logs and the `kind` field of error responses
    pub fn label(&self) -> &'static str {
        match self {
            Self::ValidationFailed(_) => "validation_failed",
            Self::InvalidInput(_) => "invalid_input",
            Self::Unauthorized(_) => "unauthorized",
            Self::NotFound(_) => "not_found",
            Self::Conflict(_) => "conflict",
            Self::Database(_) => "database",
            Self::Config(_) => "config",
            Self::Internal(_) => "internal",
        }
    }

    /// Whether the failure originates on the server side
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::Database(_) | Self::Config(_) | Self::Internal(_))
    }
}

/// Result type alias for ShareHub operations
pub type Result<T> = std::result::Result<T, ShareHubError>;
