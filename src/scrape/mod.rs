//! Scrape pipeline: fetch, extract, aggregate
//!
//! This module contains the core logic:
//! - Building the direct or SOCKS5-tunneled HTTP client
//! - Per-URL scrape tasks with failure isolation
//! - Fan-out dispatch and completion-order aggregation
//! - HTML link extraction

mod dispatcher;
mod fetcher;
mod parser;
mod result;
mod worker;

pub use dispatcher::Dispatcher;
pub use fetcher::{build_http_client, describe_error, proxy_url, status_line, FetchClient};
pub use parser::{extract_links, extract_links_from_bytes, LINK_PREFIX};
pub use result::{ScrapeResult, FETCH_ERROR_PREFIX, READ_ERROR_PREFIX};
pub use worker::{run_worker, scrape_url};

use crate::config::Config;
use crate::input::read_urls;
use crate::output::{JsonOutput, OutputHandler};
use crate::HarvestError;
use std::path::Path;

/// Scrapes `urls` with a client and dispatcher built from `config`
///
/// Prints one `Completed scraping: <url>` line per finished task.
pub async fn scrape(config: &Config, urls: Vec<String>) -> Result<Vec<ScrapeResult>, HarvestError> {
    let client = FetchClient::from_config(&config.fetch)?;
    let dispatcher = Dispatcher::new(client, config.dispatch.max_concurrent);
    dispatcher.run(urls).await
}

/// Runs a complete harvest
///
/// 1. Read the URL list from `config.input.path`
/// 2. Build the fetch client (direct or proxied)
/// 3. Scrape every URL concurrently
/// 4. Write all results to `config.output.path`
///
/// Any error returned here is fatal for the run. Per-URL failures are not
/// errors; they appear in the returned results.
pub async fn harvest(config: &Config) -> Result<Vec<ScrapeResult>, HarvestError> {
    let urls = read_urls(Path::new(&config.input.path))?;
    tracing::info!("Loaded {} URLs from {}", urls.len(), config.input.path);

    let results = scrape(config, urls).await?;

    let output = JsonOutput::new(&config.output.path);
    output.write_results(&results)?;
    tracing::info!("Wrote {} results to {}", results.len(), output.describe());

    Ok(results)
}
