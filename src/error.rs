//! Error types for the minuteset library.

use std::io;
use thiserror::Error;

/// Result type alias for minuteset operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while rendering minutes.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Page geometry that cannot produce a usable content area.
    #[error("Invalid page geometry: {0}")]
    InvalidGeometry(String),

    /// Error during rendering (pagination, PDF emission).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Error serializing a document to JSON.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
