//! Link-Harvest: a concurrent bulk fetcher and link harvester
//!
//! This crate fetches a fixed list of URLs in parallel (optionally tunneled
//! through a SOCKS5 proxy), extracts the absolute hyperlinks from every page
//! and collects one result record per URL into a single JSON document.

pub mod config;
pub mod input;
pub mod output;
pub mod scrape;
pub mod state;

use thiserror::Error;

/// Main error type for Link-Harvest operations
///
/// Only fatal, process-level failures are represented here. Failures of a
/// single URL are recorded in that URL's [`ScrapeResult`] instead.
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("No URLs to scrape")]
    NoUrls,
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid proxy address: {0}")]
    InvalidProxy(String),
}

/// Errors raised while reading the URL list
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read URL list {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("No URLs found in {path}")]
    Empty { path: String },
}

/// Result type alias for Link-Harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use scrape::{Dispatcher, FetchClient, ScrapeResult};
pub use state::TaskState;
