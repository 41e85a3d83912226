//! Error types for blockfeed.

use thiserror::Error;

/// Result type alias for blockfeed operations.
pub type Result<T> = std::result::Result<T, BlockfeedError>;

/// Errors that can occur during classification ingestion.
///
/// Nothing here is treated as fatal by the recorder: the orchestration
/// loops contain failures at the page, block and source level and keep
/// going. The variants exist so that skips can be logged with enough
/// context to diagnose later.
#[derive(Error, Debug)]
pub enum BlockfeedError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// Payload could not be decoded at all.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Payload decoded but did not match the expected structure.
    #[error("Shape error: {0}")]
    Shape(String),

    /// Persistence collaborator rejected a read or write.
    #[error("Store error: {0}")]
    Store(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
