//! Error types for loginwall

use thiserror::Error;

/// Result type alias using the loginwall Error
pub type Result<T> = std::result::Result<T, Error>;

/// Loginwall error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Session store unavailable: {0}")]
    StoreUnavailable(String),
}
