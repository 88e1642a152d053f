//! URL list input
//!
//! Reads the newline-delimited list of URLs to scrape. Each line is trimmed;
//! blank lines are skipped. Order and duplicates are preserved, and no line is
//! rejected for being an invalid URL: such a URL simply fails at fetch time and
//! is reported in its own result.

use crate::InputError;
use std::path::Path;
use url::Url;

/// Reads the URL list at `path`
///
/// # Returns
///
/// * `Ok(Vec<String>)` - At least one URL, in file order
/// * `Err(InputError::Io)` - The file is missing or unreadable
///
/// Invalid UTF-8 is replaced with U+FFFD rather than rejected; the affected
/// URL then fails at fetch time like any other malformed entry.
/// * `Err(InputError::Empty)` - The file has no non-blank lines
pub fn read_urls(path: &Path) -> Result<Vec<String>, InputError> {
    let bytes = std::fs::read(path).map_err(|source| InputError::Io {
        path: path.display().to_string(),
        source,
    })?;

    // a stray non-UTF-8 byte only spoils its own line
    let urls = parse_urls(&String::from_utf8_lossy(&bytes));
    if urls.is_empty() {
        return Err(InputError::Empty {
            path: path.display().to_string(),
        });
    }

    tracing::debug!("Read {} URLs from {}", urls.len(), path.display());
    Ok(urls)
}

/// Splits `content` into trimmed, non-blank lines
pub fn parse_urls(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .inspect(|line| {
            if let Err(e) = Url::parse(line) {
                tracing::warn!("Input line {:?} is not a valid URL ({}); it will fail", line, e);
            }
        })
        .map(str::to_string)
        .collect()
}
