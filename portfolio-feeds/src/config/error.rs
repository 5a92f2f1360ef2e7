//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse config file '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// A configured value is out of range or malformed.
    #[error("Invalid value for '{field}': {message}")]
    ValidationError { field: &'static str, message: String },

    /// A required environment variable is unset or empty.
    #[error("Missing required environment variable: {var}")]
    MissingEnv { var: &'static str },
}
