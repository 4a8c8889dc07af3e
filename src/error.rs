//! Error types for quote calculation.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for quote processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// General parse error (-3)
    ParseError = -3,
    /// Roll price or width not set (E100)
    RollNotPriced = 100,
    /// No printing type selected (E200)
    UnknownPrintType = 200,
    /// Unknown roll selection (E201)
    UnknownRoll = 201,
    /// Preference store failure (E300)
    Preferences = 300,
}

/// Main error type for quoting.
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Parse error: {message}")]
    ParseError { message: String },

    #[error("Invalid value for '{field}': expected {expected}, got '{value}'")]
    InvalidValue {
        field: String,
        expected: String,
        value: String,
    },

    #[error("Check the width and price of the {material} roll (cost per ft² is {cost_per_ft2})")]
    RollNotPriced { material: String, cost_per_ft2: f64 },

    #[error("Select a printing type (got '{key}')")]
    UnknownPrintType { key: String },

    #[error("Unknown {material} roll '{id}'")]
    UnknownRoll { material: String, id: String },

    #[error("Preferences error: {message}")]
    Preferences { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl QuoteError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            QuoteError::FileNotFound { .. } => ErrorCode::FileNotFound,
            QuoteError::ParseError { .. } => ErrorCode::ParseError,
            QuoteError::InvalidValue { .. } => ErrorCode::ParseError,
            QuoteError::RollNotPriced { .. } => ErrorCode::RollNotPriced,
            QuoteError::UnknownPrintType { .. } => ErrorCode::UnknownPrintType,
            QuoteError::UnknownRoll { .. } => ErrorCode::UnknownRoll,
            QuoteError::Preferences { .. } => ErrorCode::Preferences,
            QuoteError::Io(_) => ErrorCode::FileNotFound,
            QuoteError::Json(_) => ErrorCode::ParseError,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }

    /// Whether this is a user-facing advisory (misconfigured input) rather than a failure.
    pub fn is_advisory(&self) -> bool {
        matches!(
            self.code(),
            ErrorCode::RollNotPriced | ErrorCode::UnknownPrintType | ErrorCode::UnknownRoll
        )
    }
}

/// Result type alias for quote operations.
pub type Result<T> = std::result::Result<T, QuoteError>;
