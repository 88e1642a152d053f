use serde::Deserialize;

/// Default overall per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Main configuration structure for Link-Harvest
///
/// Every section is optional in the TOML file; missing sections fall back to
/// the defaults below.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub dispatch: DispatchConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FetchConfig {
    /// SOCKS5 proxy address as `host:port`; absent means direct fetching
    #[serde(default)]
    pub proxy: Option<String>,

    /// Resolve hostnames through the proxy (`socks5h`) rather than locally
    #[serde(rename = "remote-dns", default = "default_remote_dns")]
    pub remote_dns: bool,

    /// Overall timeout for a single request, including the body read
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Timeout for establishing a connection
    #[serde(rename = "connect-timeout-secs", default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Maximum idle pooled connections kept per host
    #[serde(rename = "max-idle-per-host", default = "default_max_idle_per_host")]
    pub max_idle_per_host: usize,

    /// How long an idle pooled connection is kept open
    #[serde(rename = "idle-timeout-secs", default = "default_idle_timeout_secs")]
    pub idle_timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

/// Task dispatch configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DispatchConfig {
    /// Maximum number of fetches in flight; 0 means unbounded
    #[serde(rename = "max-concurrent", default)]
    pub max_concurrent: usize,
}

/// Input configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    /// Path to the newline-delimited URL list
    #[serde(default = "default_input_path")]
    pub path: String,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Path of the JSON document to write
    #[serde(default = "default_output_path")]
    pub path: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            proxy: None,
            remote_dns: default_remote_dns(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            max_idle_per_host: default_max_idle_per_host(),
            idle_timeout_secs: default_idle_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

fn default_remote_dns() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_max_idle_per_host() -> usize {
    10
}

fn default_idle_timeout_secs() -> u64 {
    90
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

fn default_input_path() -> String {
    "url.txt".to_string()
}

fn default_output_path() -> String {
    "data.json".to_string()
}
