//! Error types for the footer builder
//!
//! Building, mounting and serializing a footer never fail. These errors
//! only cover the edges where caller input enters the crate: reading
//! override files and parsing override values.

use thiserror::Error;

/// Result type alias for fallible footer builder operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading footer configuration
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read an overrides file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Overrides were not valid JSON
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Overrides parsed but were not a JSON object
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// A `KEY=VALUE` override could not be split
    #[error("Invalid override '{0}': expected KEY=VALUE")]
    InvalidOverride(String),
}
