// Rust guideline compliant 2026-10-12

//! Error types for the Majani core library.

use thiserror::Error;

/// Result type alias for Majani operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Majani operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid listing data.
    #[error("Invalid listing: {0}")]
    InvalidListing(String),

    /// Invalid user data.
    #[error("Invalid user: {0}")]
    InvalidUser(String),

    /// Malformed listing or user ID.
    #[error("Invalid ID: {0}")]
    InvalidId(String),

    /// Listing or user not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid status transition.
    #[error("Invalid status transition: {0}")]
    InvalidTransition(String),

    /// Ambiguous partial ID.
    #[error("Ambiguous ID: {0} matches {1:?}")]
    AmbiguousId(String, Vec<String>),

    /// Invalid configuration value or file.
    #[error("Invalid config: {0}")]
    Config(String),
}
