//! Core error types for careerpath-core.
//!
//! Every error the assessment flow can produce is caller-correctable: there
//! are no retries and no fatal conditions. A rejected operation leaves the
//! assessment state untouched.

use std::path::PathBuf;
use thiserror::Error;

use crate::assessment::Stage;

/// Core error type for careerpath-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Assessment flow errors
    #[error("Assessment error: {0}")]
    Assessment(#[from] AssessmentError),

    /// Scoring errors
    #[error("Scoring error: {0}")]
    Scoring(#[from] ScoringError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Storage errors
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors reported by the assessment controller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssessmentError {
    /// The caller supplied input the controller cannot accept.
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// The operation is not permitted in the current stage.
    #[error("Cannot {operation} while in the '{stage}' stage")]
    InvalidTransition {
        operation: &'static str,
        stage: Stage,
    },

    /// Results could not be derived from the accumulated answers.
    #[error("{0}")]
    Scoring(#[from] ScoringError),
}

impl AssessmentError {
    pub fn is_invalid_input(&self) -> bool {
        match self {
            AssessmentError::InvalidInput(_) => true,
            AssessmentError::Scoring(err) => err.is_invalid_input(),
            AssessmentError::InvalidTransition { .. } => false,
        }
    }

    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, AssessmentError::InvalidTransition { .. })
    }
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Empty collection
    #[error("Empty collection: {0}")]
    EmptyCollection(String),

    /// Value outside its permitted range
    #[error("Value {value} for '{field}' is outside [{min}, {max}]")]
    OutOfRange {
        field: String,
        value: i64,
        min: i64,
        max: i64,
    },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    /// Question id is not of the form `<skill>-<index>`
    #[error("Malformed question id '{0}': expected '<skill>-<index>'")]
    MalformedQuestionId(String),

    /// Question id is well-formed but names no selected skill at that index
    #[error("Unknown question '{0}': no selected skill at that position")]
    UnknownQuestion(String),
}

/// Scoring errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    /// No ratings were supplied to an aggregate computation.
    #[error("Cannot compute an average over zero ratings")]
    NoRatings,
}

impl ScoringError {
    /// Scoring failures are always input problems on the caller's side.
    pub fn is_invalid_input(&self) -> bool {
        true
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
