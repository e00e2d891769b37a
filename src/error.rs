use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during a harvest run
#[derive(Error, Debug)]
pub enum HarvestError {
    /// Failed to fetch a listing page
    #[error("Failed to fetch URL: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Listing page answered with a non-success status
    #[error("Unexpected HTTP status {status} for {url}")]
    HttpStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    /// Page definitions file could not be read
    #[error("Failed to read page definitions from {path}: {source}")]
    SourcesRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Page definitions file is not a JSON array of definitions
    #[error("Failed to parse page definitions from {path}: {source}")]
    SourcesParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Store serialization failed
    #[error("Failed to serialize store: {0}")]
    Store(#[from] serde_json::Error),

    /// Store file could not be written
    #[error("Failed to write store: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
