//! Error types for dto-visit
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use crate::records::RecordKind;
use thiserror::Error;

/// The main error type for dto-visit
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Decode Errors
    // ============================================================================
    #[error("Missing required field '{field}' for {kind}")]
    FieldMissing { kind: RecordKind, field: String },

    #[error("Field '{field}' for {kind} expected {expected}, found {found}")]
    TypeMismatch {
        kind: RecordKind,
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Document {index}: {source}")]
    Document {
        index: usize,
        #[source]
        source: Box<Error>,
    },

    #[error("JSONPath error: {message}")]
    JsonPath { message: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a missing field error
    pub fn field_missing(kind: RecordKind, field: impl Into<String>) -> Self {
        Self::FieldMissing {
            kind,
            field: field.into(),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(
        kind: RecordKind,
        field: impl Into<String>,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            kind,
            field: field.into(),
            expected,
            found,
        }
    }

    /// Attach the position of the failing document in its input
    pub fn document(index: usize, source: Error) -> Self {
        Self::Document {
            index,
            source: Box::new(source),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a JSONPath error
    pub fn json_path(message: impl Into<String>) -> Self {
        Self::JsonPath {
            message: message.into(),
        }
    }

    /// Whether this error came from decoding a document into a record
    pub fn is_decode_error(&self) -> bool {
        match self {
            Error::FieldMissing { .. } | Error::TypeMismatch { .. } => true,
            Error::Document { source, .. } => source.is_decode_error(),
            _ => false,
        }
    }
}

/// Result type alias for dto-visit
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
