//! Error types for ladle operations.
//!
//! This module defines [`LadleError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `LadleError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `LadleError::Other`) for unexpected errors
//! - Storage errors carry the key they touched so callers can report which
//!   slot diverged from disk

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for ladle operations.
#[derive(Debug, Error)]
pub enum LadleError {
    /// A persisted value could not be read or deserialized.
    #[error("Failed to read stored value '{key}': {message}")]
    StorageRead { key: String, message: String },

    /// A persisted value could not be written.
    #[error("Failed to write stored value '{key}': {message}")]
    StorageWrite { key: String, message: String },

    /// A catalog request failed (transport error or non-success status).
    #[error("Catalog request to {url} failed: {message}")]
    Catalog { url: String, message: String },

    /// The catalog has no recipe with the given id.
    #[error("Unknown recipe: {id}")]
    UnknownRecipe { id: String },

    /// Configuration file not found at an explicitly given location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A prompt was required but the session is not interactive.
    #[error("Cannot prompt for '{prompt}' in a non-interactive session")]
    NotInteractive { prompt: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for ladle operations.
pub type Result<T> = std::result::Result<T, LadleError>;
