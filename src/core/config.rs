//! Runtime configuration from the environment (`.env` is loaded first by `main`).

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::paths;

/// Backend used when `ECAMPUS_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://ama-ecampus-181d.vercel.app";

/// Request timeout used when `ECAMPUS_TIMEOUT_SECS` is not set.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the assistant backend, without trailing slash.
    pub api_url: String,
    pub request_timeout: Duration,
    /// Where the session file lives. `None` when no home directory is known.
    pub config_dir: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("ECAMPUS_API_URL is not a valid http(s) URL: {0}")]
    InvalidApiUrl(String),
    #[error("ECAMPUS_TIMEOUT_SECS must be a positive integer, got {0:?}")]
    InvalidTimeout(String),
}

/// Load configuration from environment variables.
pub fn load() -> Result<Config, ConfigError> {
    from_values(
        env::var("ECAMPUS_API_URL").ok(),
        env::var("ECAMPUS_TIMEOUT_SECS").ok(),
        paths::config_dir(),
    )
}

fn from_values(
    api_url: Option<String>,
    timeout: Option<String>,
    config_dir: Option<PathBuf>,
) -> Result<Config, ConfigError> {
    let api_url = api_url
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let parsed =
        reqwest::Url::parse(&api_url).map_err(|_| ConfigError::InvalidApiUrl(api_url.clone()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidApiUrl(api_url));
    }

    let request_timeout = match timeout {
        None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => Duration::from_secs(secs),
            _ => return Err(ConfigError::InvalidTimeout(raw)),
        },
    };

    Ok(Config {
        api_url: api_url.trim_end_matches('/').to_string(),
        request_timeout,
        config_dir,
    })
}
