//! HTTP fetch client
//!
//! This module builds the single HTTP client used for a run, either direct or
//! tunneled through a SOCKS5 proxy. The choice is made once, from
//! configuration, and the resulting [`FetchClient`] is immutable afterwards.
//!
//! Only transport-level failures (DNS, connect, proxy handshake, TLS, timeout)
//! are errors here. An HTTP 4xx/5xx response is a successful fetch whose status
//! line carries the signal.

use crate::config::FetchConfig;
use reqwest::{redirect::Policy, Client, Proxy, Response, StatusCode};
use std::error::Error as StdError;
use std::time::Duration;

/// Immutable HTTP client shared by every scrape task
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct FetchClient {
    client: Client,
    proxy: Option<String>,
}

impl FetchClient {
    /// Builds the client described by `config`
    ///
    /// # Returns
    ///
    /// * `Ok(FetchClient)` - Direct client, or one that tunnels every
    ///   connection through `config.proxy`
    /// * `Err(reqwest::Error)` - The proxy URL or TLS backend was rejected
    pub fn from_config(config: &FetchConfig) -> Result<Self, reqwest::Error> {
        let client = build_http_client(config)?;

        match &config.proxy {
            Some(addr) => tracing::info!(
                "Fetching through SOCKS5 proxy {} ({} DNS)",
                addr,
                if config.remote_dns { "remote" } else { "local" }
            ),
            None => tracing::info!("Fetching directly (no proxy configured)"),
        }

        Ok(Self {
            client,
            proxy: config.proxy.clone(),
        })
    }

    /// Returns the proxy address this client tunnels through, if any
    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    /// Sends a GET request and returns once response headers arrive
    ///
    /// The body is left unread so callers can distinguish fetch failures from
    /// body-read failures. Dropping the response releases the connection.
    pub async fn get(&self, url: &str) -> Result<Response, reqwest::Error> {
        self.client.get(url).send().await
    }
}

/// Builds a reqwest client with the configured proxy, timeouts, and pool
///
/// Proxied clients speak HTTP/1.1 only. Direct clients ignore proxy
/// environment variables so a direct run never silently goes through a proxy.
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    let mut builder = Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .pool_max_idle_per_host(config.max_idle_per_host)
        .pool_idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .redirect(Policy::limited(10))
        .gzip(true)
        .brotli(true);

    builder = match &config.proxy {
        Some(addr) => builder
            .proxy(Proxy::all(proxy_url(addr, config.remote_dns))?)
            .http1_only(),
        None => builder.no_proxy(),
    };

    builder.build()
}

/// Formats a `host:port` address as a SOCKS5 proxy URL
///
/// With `remote_dns` the `socks5h` scheme is used so hostnames are resolved
/// by the proxy rather than leaking to the local resolver.
pub fn proxy_url(addr: &str, remote_dns: bool) -> String {
    let scheme = if remote_dns { "socks5h" } else { "socks5" };
    format!("{}://{}", scheme, addr)
}

/// Renders a status code as an HTTP status line, e.g. `"200 OK"`
pub fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

/// Renders an error together with its chain of sources
///
/// reqwest's top-level message is generic ("error sending request"); the
/// useful detail (refused, timed out, handshake rejected) lives in the chain.
pub fn describe_error(error: &(dyn StdError + 'static)) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_message = cause.to_string();
        if !message.contains(&cause_message) {
            message.push_str(": ");
            message.push_str(&cause_message);
        }
        source = cause.source();
    }
    message
}
