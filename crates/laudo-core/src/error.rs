//! Error types for the laudo crates.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The uploaded file has an extension no converter handles.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The converter recognised the format but produced no usable text.
    #[error("Extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;
