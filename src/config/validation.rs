use crate::config::types::{Config, FetchConfig, InputConfig, OutputConfig};
use crate::ConfigError;
use url::Url;

/// Upper bound for the idle connection pool size per host
const MAX_IDLE_PER_HOST_LIMIT: usize = 1000;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetch_config(&config.fetch)?;
    validate_input_config(&config.input)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates HTTP client configuration
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if let Some(proxy) = &config.proxy {
        validate_proxy_address(proxy)?;
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "connect_timeout_secs must be >= 1, got {}",
            config.connect_timeout_secs
        )));
    }

    if config.idle_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "idle_timeout_secs must be >= 1, got {}",
            config.idle_timeout_secs
        )));
    }

    if config.max_idle_per_host > MAX_IDLE_PER_HOST_LIMIT {
        return Err(ConfigError::Validation(format!(
            "max_idle_per_host must be <= {}, got {}",
            MAX_IDLE_PER_HOST_LIMIT, config.max_idle_per_host
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

fn validate_input_config(config: &InputConfig) -> Result<(), ConfigError> {
    if config.path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "input path cannot be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "output path cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validates a SOCKS5 proxy address of the form `host:port`
///
/// The address must name a host and a non-zero port, and nothing else: no
/// scheme, credentials, or path.
pub fn validate_proxy_address(address: &str) -> Result<(), ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidProxy(format!("'{}': {}", address, reason));

    if address.trim().is_empty() {
        return Err(invalid("address cannot be empty"));
    }

    if address.contains("://") {
        return Err(invalid("expected host:port without a scheme"));
    }

    let parsed =
        Url::parse(&format!("socks5://{}", address)).map_err(|e| invalid(&e.to_string()))?;

    if !parsed.username().is_empty() || parsed.password().is_some() {
        return Err(invalid("credentials are not supported"));
    }

    match parsed.host_str() {
        Some(host) if !host.is_empty() => {}
        _ => return Err(invalid("missing host")),
    }

    match parsed.port() {
        Some(0) => return Err(invalid("port must be non-zero")),
        Some(_) => {}
        None => return Err(invalid("missing port")),
    }

    if !parsed.path().is_empty() || parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(invalid("unexpected trailing path"));
    }

    Ok(())
}
