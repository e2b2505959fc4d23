//! Error types for configuration loading and validation

use std::path::PathBuf;
use thiserror::Error;

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors raised while locating, parsing, or validating a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File system I/O errors
    #[error("IO error reading '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed configuration content
    #[error("Parse error in '{path}': {message}")]
    Parse { path: PathBuf, message: String },

    /// File extension is not a supported configuration format
    #[error("Unsupported config format '{path}' (expected .json, .jsonc, .yaml, .yml, or .toml)")]
    UnsupportedFormat { path: PathBuf },

    /// Explicit config path missing, or auto-discovery exhausted
    #[error("Configuration not found: {message}")]
    NotFound { message: String },

    /// An `extends` chain loops back on itself
    #[error("Circular extends chain: {chain}")]
    CircularExtends { chain: String },

    /// Record-level violations collected by validation
    #[error("Validation errors: {0:?}")]
    Validation(Vec<String>),
}
