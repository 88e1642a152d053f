//! JSON document output
//!
//! Results are written as a single array, indented with two spaces. Markup in
//! `html` and `links` is written literally: serde_json does not escape `<`,
//! `>`, or `&`.

use crate::output::traits::{OutputError, OutputHandler, OutputResult};
use crate::scrape::ScrapeResult;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes results to a JSON file
#[derive(Debug, Clone)]
pub struct JsonOutput {
    path: PathBuf,
}

impl JsonOutput {
    /// Creates a handler that writes to `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the destination path
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> OutputError {
        OutputError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl OutputHandler for JsonOutput {
    fn write_results(&self, results: &[ScrapeResult]) -> OutputResult<()> {
        // Encode fully before touching the file so a failed encode leaves nothing behind
        let document = encode_results(results)?;

        let file = File::create(&self.path).map_err(|e| self.io_error(e))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(document.as_bytes())
            .and_then(|_| writer.flush())
            .map_err(|e| self.io_error(e))?;

        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Encodes results as a pretty-printed JSON array with a trailing newline
pub fn encode_results(results: &[ScrapeResult]) -> OutputResult<String> {
    let mut document = serde_json::to_string_pretty(results).map_err(OutputError::Encode)?;
    document.push('\n');
    Ok(document)
}

/// Loads a previously written results document
pub fn load_results(path: &Path) -> OutputResult<Vec<ScrapeResult>> {
    let content = std::fs::read_to_string(path).map_err(|source| OutputError::Io {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| OutputError::Decode {
        path: path.display().to_string(),
        source,
    })
}
