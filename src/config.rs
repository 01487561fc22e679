//! # Configuration
//!
//! Process-wide settings, read once at startup and immutable thereafter.
//!
//! Sources are layered: an optional `top-products.toml` file, then
//! environment variables prefixed `AGG_` with `__` separating nested keys
//! (e.g. `AGG_UPSTREAM__ACCESS_TOKEN`). A `.env` file is honored when the
//! binary loads it before calling [`AppConfig::load`].
//!
//! The bearer credential has no default; a process without one fails at
//! startup rather than at the first vendor call.

use crate::application::services::aggregation::AggregationConfig;
use serde::Deserialize;

fn default_listen_addr() -> String {
    "0.0.0.0:3001".to_string()
}

fn default_base_url() -> String {
    "http://20.244.56.144/test".to_string()
}

fn default_upstream_timeout_ms() -> u64 {
    5_000
}

/// Upstream vendor API settings.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    /// Base URL of the vendor API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer credential sent with every vendor request. Required.
    pub access_token: String,
    /// HTTP client timeout in milliseconds.
    #[serde(default = "default_upstream_timeout_ms")]
    pub timeout_ms: u64,
}

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Address the REST API listens on.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// Upstream vendor API settings.
    pub upstream: UpstreamConfig,
    /// Aggregation fan-out settings.
    #[serde(default)]
    pub aggregation: AggregationConfig,
}

impl AppConfig {
    /// Loads configuration from the layered sources.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if a source cannot be read or a required
    /// key (the access token) is missing.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("top-products").required(false))
            .add_source(config::Environment::with_prefix("AGG").separator("__"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn from_overrides(pairs: &[(&str, &str)]) -> Result<AppConfig, config::ConfigError> {
        let mut builder = config::Config::builder();
        for (key, value) in pairs {
            builder = builder.set_override(*key, *value).unwrap();
        }
        builder.build()?.try_deserialize()
    }

    #[test]
    fn defaults_fill_everything_but_the_token() {
        let cfg = from_overrides(&[("upstream.access_token", "token-123")]).unwrap();
        assert_eq!(cfg.listen_addr, "0.0.0.0:3001");
        assert_eq!(cfg.upstream.base_url, "http://20.244.56.144/test");
        assert_eq!(cfg.upstream.timeout_ms, 5_000);
        assert_eq!(cfg.aggregation.timeout_ms, 10_000);
        assert_eq!(cfg.aggregation.per_vendor_timeout_ms, 5_000);
    }

    #[test]
    fn missing_token_fails_at_load() {
        assert!(from_overrides(&[("upstream.base_url", "http://vendors.test")]).is_err());
    }

    #[test]
    fn overrides_win_over_defaults() {
        let cfg = from_overrides(&[
            ("upstream.access_token", "token-123"),
            ("listen_addr", "127.0.0.1:9999"),
            ("aggregation.timeout_ms", "2500"),
        ])
        .unwrap();
        assert_eq!(cfg.listen_addr, "127.0.0.1:9999");
        assert_eq!(cfg.aggregation.timeout_ms, 2_500);
    }
}
