//! Custom error types for translation operations

use std::path::PathBuf;
use thiserror::Error;

/// Translation-related errors
#[derive(Error, Debug)]
pub enum TranslationError {
    /// No config file in any of the search locations
    #[error("Config file not found (searched: {})", display_paths(.searched))]
    ConfigNotFound {
        /// Candidate paths, in search order
        searched: Vec<PathBuf>,
    },

    /// Config file exists but could not be read
    #[error("Cannot read config file {}: {source}", .path.display())]
    ConfigRead {
        /// File that failed to read
        path: PathBuf,
        /// Underlying read failure
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        /// What is wrong with the value
        message: String,
    },

    /// Missing required field
    #[error("Missing required field: {field}")]
    MissingField {
        /// Config key that is absent or empty
        field: String,
    },

    /// Network error
    #[error("Network error: {message}")]
    NetworkError {
        /// Transport error text
        message: String,
    },

    /// Invalid response from API
    #[error("Invalid response: {message}")]
    InvalidResponseError {
        /// Decoder error text
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Reqwest error
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// YAML error
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;
