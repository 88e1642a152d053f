//! Per-URL result record

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Status prefix for transport-level failures
pub const FETCH_ERROR_PREFIX: &str = "Error: ";

/// Status prefix for failures while reading the response body
pub const READ_ERROR_PREFIX: &str = "Error reading body: ";

/// Outcome of scraping one input URL
///
/// Exactly one of these is produced per input URL. On failure `links` is
/// empty and `html` is the empty string, never absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeResult {
    /// The URL exactly as it appeared in the input
    pub url: String,

    /// Transport status line (`"200 OK"`) or an error description
    pub status: String,

    /// Absolute links in document order, duplicates kept
    pub links: Vec<String>,

    /// Response body decoded as text
    pub html: String,
}

impl ScrapeResult {
    /// Builds the result of a completed fetch
    pub fn success(
        url: impl Into<String>,
        status: impl Into<String>,
        links: Vec<String>,
        html: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            status: status.into(),
            links,
            html: html.into(),
        }
    }

    /// Builds the result of a request that never produced a response
    pub fn fetch_failed(url: impl Into<String>, error: impl Display) -> Self {
        Self::failed(url, format!("{}{}", FETCH_ERROR_PREFIX, error))
    }

    /// Builds the result of a response whose body could not be read
    pub fn read_failed(url: impl Into<String>, error: impl Display) -> Self {
        Self::failed(url, format!("{}{}", READ_ERROR_PREFIX, error))
    }

    fn failed(url: impl Into<String>, status: String) -> Self {
        Self {
            url: url.into(),
            status,
            links: Vec::new(),
            html: String::new(),
        }
    }

    /// Returns true if the task failed at either stage
    pub fn is_error(&self) -> bool {
        self.is_fetch_error() || self.is_read_error()
    }

    /// Returns true if the request itself failed
    pub fn is_fetch_error(&self) -> bool {
        self.status.starts_with(FETCH_ERROR_PREFIX)
    }

    /// Returns true if the body read failed
    pub fn is_read_error(&self) -> bool {
        self.status.starts_with(READ_ERROR_PREFIX)
    }
}
