//! Run statistics
//!
//! Summarizes a result list: how many URLs succeeded, how many failed at
//! which stage, and how the transport status lines break down.

use crate::scrape::ScrapeResult;
use std::collections::BTreeMap;

/// Summary of one harvest run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStatistics {
    /// Number of results
    pub total: usize,

    /// Results with a transport status line (any HTTP code)
    pub succeeded: usize,

    /// Results whose request failed
    pub fetch_failures: usize,

    /// Results whose body could not be read
    pub read_failures: usize,

    /// Links collected across all results
    pub total_links: usize,

    /// Count of each transport status line, e.g. `"200 OK" -> 12`
    pub status_counts: BTreeMap<String, usize>,
}

impl RunStatistics {
    /// Computes statistics from a result list
    pub fn from_results(results: &[ScrapeResult]) -> Self {
        let mut stats = Self {
            total: results.len(),
            ..Self::default()
        };

        for result in results {
            if result.is_fetch_error() {
                stats.fetch_failures += 1;
            } else if result.is_read_error() {
                stats.read_failures += 1;
            } else {
                stats.succeeded += 1;
                stats.total_links += result.links.len();
                *stats.status_counts.entry(result.status.clone()).or_default() += 1;
            }
        }

        stats
    }

    /// Returns the number of failed results
    pub fn failed(&self) -> usize {
        self.fetch_failures + self.read_failures
    }

    /// Returns the share of URLs fetched without a transport failure
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.succeeded as f64 / self.total as f64) * 100.0
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &RunStatistics) {
    println!("=== Harvest Statistics ===\n");

    println!("Overview:");
    println!("  URLs: {}", stats.total);
    println!("  Fetched: {}", stats.succeeded);
    println!("  Fetch errors: {}", stats.fetch_failures);
    println!("  Body read errors: {}", stats.read_failures);
    println!("  Links collected: {}", stats.total_links);
    println!();

    if !stats.status_counts.is_empty() {
        println!("Status Lines:");
        let mut counts: Vec<_> = stats.status_counts.iter().collect();
        counts.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        for (status, count) in counts {
            println!("  {}: {}", status, count);
        }
        println!();
    }

    println!(
        "Success Rate: {:.1}% ({} / {} URLs fetched)",
        stats.success_rate(),
        stats.succeeded,
        stats.total
    );
}
