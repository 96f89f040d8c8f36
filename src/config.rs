//! Host configuration parsed from environment variables.
//!
//! `main` loads an optional `.env` file first, so every value here can come
//! from either the process environment or that file.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_URL: &str = "http://localhost:5001";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid {var}: {value:?} ({reason})")]
    Invalid { var: &'static str, value: String, reason: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Upstream Flow Innovation API, without a trailing slash.
    pub api_url: String,
    /// Per-request timeout for proxied calls; `0` disables it.
    pub api_timeout_secs: u64,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `FLOW_API_URL`: default `http://localhost:5001`
    /// - `FLOW_API_TIMEOUT_SECS`: default 30
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` when a variable is set to a value that
    /// does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env`, reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// See `from_env`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match var("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw, reason: "expected a port number" })?,
            None => DEFAULT_PORT,
        };

        let api_url = var("FLOW_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_owned());
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ConfigError::Invalid { var: "FLOW_API_URL", value: api_url, reason: "expected an http(s) URL" });
        }
        let api_url = api_url.trim_end_matches('/').to_owned();

        let api_timeout_secs = match var("FLOW_API_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|_| ConfigError::Invalid {
                var: "FLOW_API_TIMEOUT_SECS",
                value: raw,
                reason: "expected whole seconds",
            })?,
            None => DEFAULT_API_TIMEOUT_SECS,
        };

        Ok(Self { port, api_url, api_timeout_secs })
    }
}
