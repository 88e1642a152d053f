//! Fan-out dispatcher and result aggregator
//!
//! The dispatcher spawns one task per input URL, all at once, and collects
//! their results from a completion channel. Output order is completion order,
//! not input order.
//!
//! # Join barrier
//!
//! Every worker owns a clone of the channel's sender and the dispatcher drops
//! its own. The receive loop therefore ends exactly when the last worker has
//! reported, after which the task set is reaped. If a task dies without
//! reporting, the dispatcher fills in an error result for its URL so the
//! output still has one entry per input URL.

use crate::scrape::fetcher::FetchClient;
use crate::scrape::result::ScrapeResult;
use crate::scrape::worker::run_worker;
use crate::HarvestError;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{mpsc, Semaphore};
use tokio::task::JoinSet;

/// Status detail for a URL whose task ended without reporting
const LOST_TASK_MESSAGE: &str = "scrape task terminated before reporting a result";

/// Launches scrape tasks and aggregates their results
pub struct Dispatcher {
    /// Shared, read-only HTTP client
    client: Arc<FetchClient>,

    /// Gate on fetches in flight; `None` is unbounded
    limit: Option<Arc<Semaphore>>,

    /// Size of `limit`, 0 when unbounded
    max_concurrent: usize,
}

impl Dispatcher {
    /// Creates a dispatcher
    ///
    /// # Arguments
    ///
    /// * `client` - The fetch client every task will use
    /// * `max_concurrent` - Maximum fetches in flight; 0 means unbounded
    pub fn new(client: FetchClient, max_concurrent: usize) -> Self {
        let limit = (max_concurrent > 0).then(|| Arc::new(Semaphore::new(max_concurrent)));
        Self {
            client: Arc::new(client),
            limit,
            max_concurrent,
        }
    }

    /// Returns the concurrency cap, if any
    pub fn max_concurrent(&self) -> Option<usize> {
        (self.max_concurrent > 0).then_some(self.max_concurrent)
    }

    /// Scrapes every URL and prints a progress line per completion
    pub async fn run(&self, urls: Vec<String>) -> Result<Vec<ScrapeResult>, HarvestError> {
        self.run_with_progress(urls, |result| {
            println!("Completed scraping: {}", result.url);
        })
        .await
    }

    /// Scrapes every URL, calling `on_complete` as each result arrives
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<ScrapeResult>)` - Exactly one result per input URL, in
    ///   completion order
    /// * `Err(HarvestError::NoUrls)` - `urls` was empty; nothing was started
    pub async fn run_with_progress<F>(
        &self,
        urls: Vec<String>,
        mut on_complete: F,
    ) -> Result<Vec<ScrapeResult>, HarvestError>
    where
        F: FnMut(&ScrapeResult),
    {
        if urls.is_empty() {
            return Err(HarvestError::NoUrls);
        }

        let total = urls.len();
        tracing::info!(
            "Dispatching {} scrape tasks ({})",
            total,
            match self.max_concurrent() {
                Some(cap) => format!("at most {} in flight", cap),
                None => "unbounded".to_string(),
            }
        );

        // capacity == task count, so no worker ever waits on send
        let (tx, mut rx) = mpsc::channel(total);
        let mut workers = JoinSet::new();

        for url in &urls {
            let client = Arc::clone(&self.client);
            let limit = self.limit.clone();
            let tx = tx.clone();
            let url = url.clone();
            workers.spawn(async move {
                let _permit = match limit {
                    Some(sem) => sem.acquire_owned().await.ok(),
                    None => None,
                };
                run_worker(&client, url, tx).await;
            });
        }
        drop(tx);

        let mut results = Vec::with_capacity(total);
        while let Some(result) = rx.recv().await {
            on_complete(&result);
            results.push(result);
        }

        while let Some(joined) = workers.join_next().await {
            if let Err(e) = joined {
                tracing::error!("Scrape task failed: {}", e);
            }
        }

        for url in unreported(&urls, &results) {
            tracing::error!("No result reported for {}", url);
            let result = ScrapeResult::fetch_failed(url, LOST_TASK_MESSAGE);
            on_complete(&result);
            results.push(result);
        }

        let failed = results.iter().filter(|r| r.is_error()).count();
        tracing::info!(
            "All {} tasks finished ({} ok, {} failed)",
            results.len(),
            results.len() - failed,
            failed
        );

        Ok(results)
    }
}

/// Returns the input URLs that have no matching result
///
/// Counted as a multiset, so a URL listed twice needs two results.
fn unreported<'a>(urls: &'a [String], results: &[ScrapeResult]) -> Vec<&'a str> {
    let mut reported: HashMap<&str, usize> = HashMap::new();
    for result in results {
        *reported.entry(result.url.as_str()).or_default() += 1;
    }

    let mut missing = Vec::new();
    for url in urls {
        match reported.get_mut(url.as_str()) {
            Some(count) if *count > 0 => *count -= 1,
            _ => missing.push(url.as_str()),
        }
    }
    missing
}
