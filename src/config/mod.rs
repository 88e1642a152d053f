//! Configuration module for Link-Harvest
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file. Command-line overrides are applied by the binary and
//! re-validated with [`validate`].
//!
//! # Example
//!
//! ```no_run
//! use link_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvest.toml")).unwrap();
//! println!("Request timeout: {}s", config.fetch.timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, DispatchConfig, FetchConfig, InputConfig, OutputConfig, DEFAULT_TIMEOUT_SECS,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::{validate, validate_proxy_address};
