//! Output module for persisting and summarizing harvest results
//!
//! This module handles:
//! - Writing the aggregated results as one JSON document
//! - Reading a document back for inspection
//! - Computing and printing run statistics

mod json;
pub mod stats;
mod traits;

pub use json::{encode_results, load_results, JsonOutput};
pub use stats::{print_statistics, RunStatistics};
pub use traits::{OutputError, OutputHandler, OutputResult};
