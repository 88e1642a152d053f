//! State module for tracking per-URL task progress
//!
//! # Components
//!
//! - `TaskState`: the lifecycle of a single scrape task, from `Pending`
//!   through fetching and body reading to one of three terminal states

mod task_state;

pub use task_state::TaskState;
