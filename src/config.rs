//! Client configuration.

use crate::error::{GiphyError, Result};
use std::time::Duration;

/// Public beta key published by Giphy for experimentation.
pub const DEFAULT_API_KEY: &str = "dc6zaTOxFJmzC";
/// Default content rating.
pub const DEFAULT_RATING: &str = "g";
/// Default number of records for list endpoints.
pub const DEFAULT_LIMIT: u32 = 10;
/// Default URL scheme.
pub const DEFAULT_SCHEME: &str = "http";
/// Default API host.
pub const DEFAULT_HOST: &str = "api.giphy.com";
/// Default base path prepended to every endpoint.
pub const DEFAULT_BASE_PATH: &str = "/v1";
/// Default `User-Agent` header.
pub const DEFAULT_USER_AGENT: &str = "giphy.rs";
/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Immutable settings shared by every request a [`Client`](crate::Client) makes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// API key sent as the `api_key` query parameter.
    pub api_key: String,
    /// Content rating filter (`g`, `pg`, `pg-13`, `r`).
    pub rating: String,
    /// Page size for search and trending.
    pub limit: u32,
    /// URL scheme, usually `http` or `https`.
    pub scheme: String,
    /// API host, optionally with a port.
    pub host: String,
    /// Path prefix such as `/v1`.
    pub base_path: String,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
    /// Upper bound for a whole request, connect to last body byte.
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: DEFAULT_API_KEY.into(),
            rating: DEFAULT_RATING.into(),
            limit: DEFAULT_LIMIT,
            scheme: DEFAULT_SCHEME.into(),
            host: DEFAULT_HOST.into(),
            base_path: DEFAULT_BASE_PATH.into(),
            user_agent: DEFAULT_USER_AGENT.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Config {
    /// Reads the configuration from `GIPHY_*` environment variables.
    ///
    /// | Variable              | Default         |
    /// |-----------------------|-----------------|
    /// | GIPHY_API_KEY         | dc6zaTOxFJmzC   |
    /// | GIPHY_RATING          | g               |
    /// | GIPHY_LIMIT           | 10              |
    /// | GIPHY_BASE_URL_SCHEME | http            |
    /// | GIPHY_BASE_URL_HOST   | api.giphy.com   |
    /// | GIPHY_BASE_PATH       | /v1             |
    /// | GIPHY_USER_AGENT      | giphy.rs        |
    /// | GIPHY_TIMEOUT         | 30 (seconds)    |
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    ///
    /// Missing or empty values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let limit = match get("GIPHY_LIMIT") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|limit| *limit > 0)
                .ok_or_else(|| {
                    GiphyError::Config(format!(
                        "GIPHY_LIMIT must be a positive integer, got {raw:?}"
                    ))
                })?,
            None => defaults.limit,
        };

        let timeout = match get("GIPHY_TIMEOUT") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
                .ok_or_else(|| {
                    GiphyError::Config(format!(
                        "GIPHY_TIMEOUT must be a positive number of seconds, got {raw:?}"
                    ))
                })?,
            None => defaults.timeout,
        };

        Ok(Self {
            api_key: get("GIPHY_API_KEY").unwrap_or(defaults.api_key),
            rating: get("GIPHY_RATING").unwrap_or(defaults.rating),
            limit,
            scheme: get("GIPHY_BASE_URL_SCHEME").unwrap_or(defaults.scheme),
            host: get("GIPHY_BASE_URL_HOST").unwrap_or(defaults.host),
            base_path: get("GIPHY_BASE_PATH").unwrap_or(defaults.base_path),
            user_agent: get("GIPHY_USER_AGENT").unwrap_or(defaults.user_agent),
            timeout,
        })
    }

    /// Sets the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }

    /// Sets the rating filter.
    pub fn with_rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = rating.into();
        self
    }

    /// Sets the page size.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Points the configuration at a different server.
    ///
    /// Accepts `scheme://host[:port][/path]`. Used to target staging hosts and
    /// local stub servers.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        let parsed = url::Url::parse(base_url)
            .map_err(|e| GiphyError::Config(format!("invalid base URL {base_url:?}: {e}")))?;
        let host = parsed
            .host_str()
            .ok_or_else(|| GiphyError::Config(format!("base URL {base_url:?} has no host")))?;

        self.scheme = parsed.scheme().to_string();
        self.host = match parsed.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };
        self.base_path = parsed.path().trim_end_matches('/').to_string();
        Ok(self)
    }

    /// Returns `scheme://host/base_path` with no trailing slash.
    pub fn base_url(&self) -> String {
        let path = self.base_path.trim_end_matches('/');
        if path.is_empty() || path.starts_with('/') {
            format!("{}://{}{}", self.scheme, self.host, path)
        } else {
            format!("{}://{}/{}", self.scheme, self.host, path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api_key, "dc6zaTOxFJmzC");
        assert_eq!(config.rating, "g");
        assert_eq!(config.limit, 10);
        assert_eq!(config.base_url(), "http://api.giphy.com/v1");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_env_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("GIPHY_API_KEY", "secret"),
            ("GIPHY_RATING", "pg"),
            ("GIPHY_LIMIT", "3"),
            ("GIPHY_BASE_URL_SCHEME", "https"),
            ("GIPHY_BASE_URL_HOST", "example.com"),
            ("GIPHY_BASE_PATH", "/v2"),
            ("GIPHY_USER_AGENT", "test-agent"),
            ("GIPHY_TIMEOUT", "5"),
        ]))
        .unwrap();

        assert_eq!(config.api_key, "secret");
        assert_eq!(config.rating, "pg");
        assert_eq!(config.limit, 3);
        assert_eq!(config.base_url(), "https://example.com/v2");
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_empty_values_use_defaults() {
        let config = Config::from_lookup(lookup(&[("GIPHY_API_KEY", ""), ("GIPHY_LIMIT", " ")]))
            .unwrap();
        assert_eq!(config.api_key, DEFAULT_API_KEY);
        assert_eq!(config.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn test_invalid_limit() {
        let err = Config::from_lookup(lookup(&[("GIPHY_LIMIT", "ten")])).unwrap_err();
        assert!(matches!(err, GiphyError::Config(_)));
        assert!(err.to_string().contains("GIPHY_LIMIT"));
    }

    #[test]
    fn test_invalid_timeout() {
        let err = Config::from_lookup(lookup(&[("GIPHY_TIMEOUT", "-1")])).unwrap_err();
        assert!(matches!(err, GiphyError::Config(_)));
    }

    #[test]
    fn test_zero_limit_and_timeout_rejected() {
        let err = Config::from_lookup(lookup(&[("GIPHY_LIMIT", "0")])).unwrap_err();
        assert!(err.to_string().contains("GIPHY_LIMIT must be a positive integer"));

        let err = Config::from_lookup(lookup(&[("GIPHY_TIMEOUT", "0")])).unwrap_err();
        assert!(err.to_string().contains("GIPHY_TIMEOUT must be a positive number"));
    }

    #[test]
    fn test_with_base_url() {
        let config = Config::default()
            .with_base_url("http://127.0.0.1:8080/v1/")
            .unwrap();
        assert_eq!(config.scheme, "http");
        assert_eq!(config.host, "127.0.0.1:8080");
        assert_eq!(config.base_path, "/v1");
        assert_eq!(config.base_url(), "http://127.0.0.1:8080/v1");

        let bare = Config::default().with_base_url("https://localhost").unwrap();
        assert_eq!(bare.base_url(), "https://localhost");
    }

    #[test]
    fn test_with_base_url_rejects_garbage() {
        assert!(Config::default().with_base_url("not a url").is_err());
    }

    #[test]
    fn test_base_path_without_leading_slash() {
        let mut config = Config::default();
        config.base_path = "v1".into();
        assert_eq!(config.base_url(), "http://api.giphy.com/v1");
    }
}
