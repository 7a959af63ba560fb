//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these. Only `InvalidInput` is ever
//! returned to the caller of the orchestrator; the rest are absorbed into
//! degraded results.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Gender or dress code outside the configured enumeration.
    #[error("Invalid {field}. Choose from: {}", allowed.join(", "))]
    InvalidInput {
        field: InputField,
        value: String,
        allowed: Vec<String>,
    },

    #[error("Could not load image: {0}")]
    ImageUnreadable(String),

    #[error("Oracle request failed: {0}")]
    OracleTransport(String),

    #[error("Oracle response malformed: {0}")]
    OracleMalformedResponse(String),

    #[error("Processing failed: {0}")]
    Processing(String),
}

impl DomainError {
    /// True for errors the caller must correct (no fallback applies).
    pub fn is_caller_error(&self) -> bool {
        matches!(self, DomainError::InvalidInput { .. })
    }
}

/// Which user-supplied field failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Gender,
    DressCode,
}

impl std::fmt::Display for InputField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputField::Gender => write!(f, "gender"),
            InputField::DressCode => write!(f, "dress code"),
        }
    }
}
