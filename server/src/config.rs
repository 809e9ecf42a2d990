//! Remote store configuration parsed from environment variables.

use std::time::Duration;

pub const DEFAULT_STORE_TABLE: &str = "facts";
pub const DEFAULT_STORE_KEY_ENV: &str = "TIL_STORE_KEY";
pub const DEFAULT_STORE_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_STORE_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The env var named by `TIL_STORE_KEY_ENV` is not set.
    #[error("missing store API key: env var {var} not set")]
    MissingApiKey { var: String },

    #[error("invalid TIL_STORE_URL: {0}")]
    InvalidUrl(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl StoreTimeouts {
    #[must_use]
    pub fn request(self) -> Duration {
        Duration::from_secs(self.request_secs)
    }

    #[must_use]
    pub fn connect(self) -> Duration {
        Duration::from_secs(self.connect_secs)
    }
}

impl Default for StoreTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_STORE_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_STORE_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub base_url: String,
    pub api_key: String,
    pub table: String,
    pub timeouts: StoreTimeouts,
}

impl StoreConfig {
    /// Build typed store config from environment variables.
    ///
    /// Returns `Ok(None)` when `TIL_STORE_URL` is unset; the server then runs
    /// against an in-process store.
    ///
    /// Optional:
    /// - `TIL_STORE_KEY_ENV`: names the env var holding the key (default `TIL_STORE_KEY`)
    /// - `TIL_STORE_TABLE`: default `facts`
    /// - `TIL_STORE_REQUEST_TIMEOUT_SECS`: default 30
    /// - `TIL_STORE_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not http(s) or the API key is missing.
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        let Some(raw_url) = std::env::var("TIL_STORE_URL").ok().filter(|v| !v.is_empty()) else {
            return Ok(None);
        };
        if !facts::is_valid_http_url(&raw_url) {
            return Err(ConfigError::InvalidUrl(raw_url));
        }
        let base_url = raw_url.trim_end_matches('/').to_owned();

        let key_var = std::env::var("TIL_STORE_KEY_ENV").unwrap_or_else(|_| DEFAULT_STORE_KEY_ENV.to_owned());
        let api_key = std::env::var(&key_var).map_err(|_| ConfigError::MissingApiKey { var: key_var.clone() })?;

        let table = std::env::var("TIL_STORE_TABLE")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_STORE_TABLE.to_owned());
        let timeouts = StoreTimeouts {
            request_secs: env_parse_u64("TIL_STORE_REQUEST_TIMEOUT_SECS", DEFAULT_STORE_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("TIL_STORE_CONNECT_TIMEOUT_SECS", DEFAULT_STORE_CONNECT_TIMEOUT_SECS),
        };

        Ok(Some(Self { base_url, api_key, table, timeouts }))
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
