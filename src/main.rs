//! Link-Harvest main entry point
//!
//! This is the command-line interface for the Link-Harvest bulk fetcher.

use anyhow::Context;
use clap::Parser;
use link_harvest::config::{load_config_with_hash, validate, Config};
use link_harvest::input::read_urls;
use link_harvest::output::{load_results, print_statistics, RunStatistics};
use link_harvest::scrape::harvest;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Link-Harvest: a concurrent bulk fetcher and link harvester
///
/// Fetches every URL in the input list at once, optionally through a SOCKS5
/// proxy, extracts absolute links from each page, and writes one JSON
/// document with a result per URL.
#[derive(Parser, Debug)]
#[command(name = "link-harvest")]
#[command(version)]
#[command(about = "Concurrent bulk fetcher and link harvester", long_about = None)]
struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Newline-delimited URL list (overrides input.path)
    #[arg(short, long, value_name = "FILE")]
    input: Option<String>,

    /// JSON document to write (overrides output.path)
    #[arg(short, long, value_name = "FILE")]
    output: Option<String>,

    /// SOCKS5 proxy as host:port (overrides fetch.proxy)
    #[arg(long, value_name = "HOST:PORT", env = "LINK_HARVEST_PROXY")]
    proxy: Option<String>,

    /// Fetch directly even if a proxy is configured or set in the environment
    #[arg(long)]
    direct: bool,

    /// Overall per-request timeout in seconds (overrides fetch.timeout-secs)
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Maximum fetches in flight, 0 for unbounded (overrides dispatch.max-concurrent)
    #[arg(long, value_name = "N")]
    max_concurrent: Option<usize>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error log output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate configuration and input, show the plan, and exit without fetching
    #[arg(long, conflicts_with = "stats")]
    dry_run: bool,

    /// Print statistics for an existing results document and exit
    #[arg(long, value_name = "DOCUMENT", conflicts_with = "dry_run")]
    stats: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    if let Some(document) = &cli.stats {
        return handle_stats(document);
    }

    let config = resolve_config(&cli)?;

    if cli.dry_run {
        handle_dry_run(&config)
    } else {
        handle_harvest(&config).await
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr; stdout is reserved for progress lines and reports.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("link_harvest=info,warn"),
            1 => EnvFilter::new("link_harvest=debug,info"),
            2 => EnvFilter::new("link_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the config file (if any) and applies command-line overrides
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    if let Some(input) = &cli.input {
        config.input.path = input.clone();
    }
    if let Some(output) = &cli.output {
        config.output.path = output.clone();
    }
    if let Some(proxy) = &cli.proxy {
        config.fetch.proxy = Some(proxy.clone());
    }
    if cli.direct {
        config.fetch.proxy = None;
    }
    if let Some(timeout) = cli.timeout {
        config.fetch.timeout_secs = timeout;
    }
    if let Some(max_concurrent) = cli.max_concurrent {
        config.dispatch.max_concurrent = max_concurrent;
    }

    validate(&config).context("invalid configuration")?;
    Ok(config)
}

/// Handles the --dry-run mode: shows what would be fetched
fn handle_dry_run(config: &Config) -> anyhow::Result<()> {
    let urls = read_urls(Path::new(&config.input.path))?;

    println!("=== Link-Harvest Dry Run ===\n");

    println!("Fetch:");
    match &config.fetch.proxy {
        Some(proxy) => println!(
            "  Proxy: socks5 {} ({} DNS)",
            proxy,
            if config.fetch.remote_dns { "remote" } else { "local" }
        ),
        None => println!("  Proxy: none (direct)"),
    }
    println!("  Timeout: {}s", config.fetch.timeout_secs);
    println!("  Connect timeout: {}s", config.fetch.connect_timeout_secs);
    println!("  User agent: {}", config.fetch.user_agent);

    println!("\nDispatch:");
    match config.dispatch.max_concurrent {
        0 => println!("  Concurrency: unbounded"),
        n => println!("  Concurrency: at most {} in flight", n),
    }

    println!("\nInput: {} ({} URLs)", config.input.path, urls.len());
    for url in &urls {
        println!("  * {}", url);
    }

    println!("\nOutput: {}", config.output.path);

    println!("\n✓ Configuration is valid");
    println!("✓ Would scrape {} URLs", urls.len());

    Ok(())
}

/// Handles the --stats mode: summarizes an existing document
fn handle_stats(document: &Path) -> anyhow::Result<()> {
    let results = load_results(document)?;
    println!("Document: {}\n", document.display());
    print_statistics(&RunStatistics::from_results(&results));
    Ok(())
}

/// Handles the main harvest operation
async fn handle_harvest(config: &Config) -> anyhow::Result<()> {
    let results = match harvest(config).await {
        Ok(results) => results,
        Err(e) => {
            tracing::error!("Harvest failed: {}", e);
            return Err(e.into());
        }
    };

    println!("Successfully scraped {} URLs", results.len());

    let stats = RunStatistics::from_results(&results);
    tracing::info!(
        "{} fetched, {} fetch errors, {} body read errors, {} links",
        stats.succeeded,
        stats.fetch_failures,
        stats.read_failures,
        stats.total_links
    );

    Ok(())
}
