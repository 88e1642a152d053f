//! Per-URL scrape task
//!
//! A worker fetches one URL, reads its body, extracts links, and reports
//! exactly one [`ScrapeResult`]. Failures never escape as errors: they are
//! recorded in the result's status.

use crate::scrape::fetcher::{describe_error, status_line, FetchClient};
use crate::scrape::parser::extract_links_from_bytes;
use crate::scrape::result::ScrapeResult;
use crate::state::TaskState;
use tokio::sync::mpsc;

/// Scrapes a single URL end to end
///
/// The response is owned by this function and dropped on every return path,
/// which releases its connection back to the pool (or closes it).
pub async fn scrape_url(client: &FetchClient, url: &str) -> ScrapeResult {
    let mut state = TaskState::Pending;
    tracing::debug!("Scraping {}", url);

    advance(url, &mut state, TaskState::Fetching);
    let response = match client.get(url).await {
        Ok(response) => response,
        Err(e) => {
            advance(url, &mut state, TaskState::FetchFailed);
            let description = describe_error(&e);
            tracing::warn!("Fetch failed for {}: {}", url, description);
            return ScrapeResult::fetch_failed(url, description);
        }
    };

    let status = status_line(response.status());

    advance(url, &mut state, TaskState::ReadingBody);
    let body = match response.bytes().await {
        Ok(body) => body,
        Err(e) => {
            advance(url, &mut state, TaskState::ReadFailed);
            let description = describe_error(&e);
            tracing::warn!("Reading body failed for {}: {}", url, description);
            return ScrapeResult::read_failed(url, description);
        }
    };

    advance(url, &mut state, TaskState::ExtractingLinks);
    let links = extract_links_from_bytes(&body);
    let html = String::from_utf8_lossy(&body).into_owned();

    advance(url, &mut state, TaskState::Done);
    tracing::debug!(
        "Scraped {}: {} ({} bytes, {} links)",
        url,
        status,
        body.len(),
        links.len()
    );

    ScrapeResult::success(url, status, links, html)
}

/// Runs [`scrape_url`] and sends the result on the completion channel
///
/// The channel is sized to the number of tasks, so the send never waits. A
/// closed channel means the dispatcher is gone and the result has no reader.
pub async fn run_worker(client: &FetchClient, url: String, results: mpsc::Sender<ScrapeResult>) {
    let result = scrape_url(client, &url).await;
    if results.send(result).await.is_err() {
        tracing::error!("Completion channel closed before {} could report", url);
    }
}

fn advance(url: &str, state: &mut TaskState, next: TaskState) {
    debug_assert!(
        state.can_transition_to(next),
        "illegal task transition {} -> {}",
        state,
        next
    );
    tracing::trace!(url, from = %state, to = %next, "task state change");
    *state = next;
}
