//! Output handler traits and types

use crate::scrape::ScrapeResult;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to encode results: {0}")]
    Encode(serde_json::Error),

    #[error("Failed to decode results from {path}: {source}")]
    Decode {
        path: String,
        source: serde_json::Error,
    },

    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Trait for output handlers
///
/// An output handler receives the complete, aggregated result list once every
/// task has finished. It is never handed partial results.
pub trait OutputHandler {
    /// Persists the full result list
    ///
    /// # Arguments
    ///
    /// * `results` - One entry per input URL, in completion order
    fn write_results(&self, results: &[ScrapeResult]) -> OutputResult<()>;

    /// Short human-readable description of the destination
    fn describe(&self) -> String;
}
