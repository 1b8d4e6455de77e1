//! Core error types for careerfit-core.
//!
//! The assessment itself has a narrow failure surface: a response for an
//! unknown question, or an operation issued out of sequence. Catalog and
//! configuration loading add their own errors on top.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for careerfit-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Session/navigation errors
    #[error("Assessment error: {0}")]
    Assessment(#[from] AssessmentError),

    /// Catalog construction or loading errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Errors raised by an assessment session.
///
/// Both variants leave the session untouched; the caller can retry with
/// valid input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssessmentError {
    /// A response referenced a question that is not in the catalog.
    #[error("Invalid response: no question with id '{question_id}'")]
    InvalidResponse { question_id: String },

    /// An operation was issued before its precondition held.
    #[error("Operation '{operation}' out of sequence: {reason}")]
    OutOfSequence {
        operation: &'static str,
        reason: String,
    },
}

/// Errors raised while building or loading a question catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog has no sections.
    #[error("Catalog has no sections")]
    Empty,

    /// A section has no questions.
    #[error("Section '{0}' has no questions")]
    EmptySection(String),

    /// Two questions share an id.
    #[error("Duplicate question id: {0}")]
    DuplicateQuestion(String),

    /// Question type does not match the populated response domain.
    #[error("Question '{question_id}' has type {kind} but {message}")]
    DomainMismatch {
        question_id: String,
        kind: String,
        message: String,
    },

    /// Scale labels do not cover the scale range exactly.
    #[error("Question '{question_id}' scale {min}..={max} needs {expected} labels, got {actual}")]
    ScaleLabels {
        question_id: String,
        min: i32,
        max: i32,
        expected: usize,
        actual: usize,
    },

    /// Failed to parse a catalog document.
    #[error("Failed to parse catalog: {0}")]
    Parse(String),
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

    /// Key does not exist in the configuration
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

impl AssessmentError {
    pub(crate) fn out_of_sequence(operation: &'static str, reason: impl Into<String>) -> Self {
        AssessmentError::OutOfSequence {
            operation,
            reason: reason.into(),
        }
    }
}

impl From<toml::de::Error> for CatalogError {
    fn from(err: toml::de::Error) -> Self {
        CatalogError::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::Parse(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::ParseFailed(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
