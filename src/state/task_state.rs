/// Task state definitions for tracking a single URL's scrape
///
/// A task moves strictly forward through these states:
///
/// ```text
/// Pending -> Fetching -> FetchFailed
///                     -> ReadingBody -> ReadFailed
///                                    -> ExtractingLinks -> Done
/// ```
use std::fmt;

/// Represents the current state of a scrape task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskState {
    // ===== Active States =====
    /// Task has been spawned but has not issued its request
    Pending,

    /// Request is in flight (connect, proxy handshake, TLS, headers)
    Fetching,

    /// Response headers arrived; the body is being read
    ReadingBody,

    /// Body is in memory; hyperlinks are being collected
    ExtractingLinks,

    // ===== Terminal States =====
    /// Transport-level failure before a response was received
    FetchFailed,

    /// Response was received but the body could not be read
    ReadFailed,

    /// Page was fetched and its links extracted
    Done,
}

impl TaskState {
    /// Returns true if this is a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::FetchFailed | Self::ReadFailed | Self::Done)
    }

    /// Returns true if the task ended in a failure state
    pub fn is_error(&self) -> bool {
        matches!(self, Self::FetchFailed | Self::ReadFailed)
    }

    /// Returns true if moving from `self` to `next` is a legal step
    pub fn can_transition_to(&self, next: TaskState) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Fetching)
                | (Self::Fetching, Self::FetchFailed)
                | (Self::Fetching, Self::ReadingBody)
                | (Self::ReadingBody, Self::ReadFailed)
                | (Self::ReadingBody, Self::ExtractingLinks)
                | (Self::ExtractingLinks, Self::Done)
        )
    }

    /// Returns the snake_case name used in log fields
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Fetching => "fetching",
            Self::ReadingBody => "reading_body",
            Self::ExtractingLinks => "extracting_links",
            Self::FetchFailed => "fetch_failed",
            Self::ReadFailed => "read_failed",
            Self::Done => "done",
        }
    }

    /// Returns all possible task states
    pub fn all_states() -> Vec<Self> {
        vec![
            Self::Pending,
            Self::Fetching,
            Self::ReadingBody,
            Self::ExtractingLinks,
            Self::FetchFailed,
            Self::ReadFailed,
            Self::Done,
        ]
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
