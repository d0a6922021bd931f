//! Error types for JSON file loading operations
//!
//! Copyright (c) 2025 jsonfile contributors
//! Licensed under the Apache-2.0 license

use std::path::PathBuf;
use thiserror::Error;

/// Result type for loader operations
pub type LoaderResult<T> = Result<T, LoaderError>;

/// Error types surfaced by the loader
#[derive(Error, Debug)]
pub enum LoaderError {
    /// The loader could not be configured
    #[error("Invalid loader configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// Name resolution produced an empty file name
    #[error("No file name could be resolved from the identifier '{identifier}'")]
    MissingIdentifier { identifier: String },

    /// Nothing exists at the resolved path
    #[error("File at location '{path}' does not exist")]
    NotFound { path: PathBuf },

    /// The file exists but could not be opened or read
    #[error("Failed to read file at '{path}': {source}")]
    ReadFailure {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The content is not valid JSON for the requested type
    #[error("Failed to decode JSON file '{path}': {source}")]
    DecodeFailure {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl LoaderError {
    /// Create a configuration error
    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    /// Create a missing identifier error
    pub fn missing_identifier(identifier: impl Into<String>) -> Self {
        Self::MissingIdentifier {
            identifier: identifier.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(path: PathBuf) -> Self {
        Self::NotFound { path }
    }

    /// Create a read error with path context
    pub fn read_failure(path: PathBuf, error: std::io::Error) -> Self {
        Self::ReadFailure {
            path,
            source: error,
        }
    }

    /// Create a decode error with path context
    pub fn decode_failure(path: PathBuf, error: serde_json::Error) -> Self {
        Self::DecodeFailure {
            path,
            source: error,
        }
    }

    /// Get the path associated with this error, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::NotFound { path } => Some(path),
            Self::ReadFailure { path, .. } => Some(path),
            Self::DecodeFailure { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Whether a caller can reasonably retry with a different identifier
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
