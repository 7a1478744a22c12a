//! Configuration types shared across the gateway, connectors and proxy.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::provider::Upstream;

/// Names of the environment variables read by the `from_env` constructors.
pub mod env_keys {
    /// `"true"` switches every resource fetch to generated data.
    pub const USE_MOCK_DATA: &str = "DEALDESK_USE_MOCK_DATA";
    /// Bearer token for the CapIQ upstream.
    pub const CAPIQ_API_KEY: &str = "DEALDESK_CAPIQ_API_KEY";
    /// Bearer token for the AlphaSense upstream.
    pub const ALPHASENSE_API_KEY: &str = "DEALDESK_ALPHASENSE_API_KEY";
    /// `development`, `production` or `test`.
    pub const ENV: &str = "DEALDESK_ENV";
    /// Origin of the dev server that hosts the proxy routes.
    pub const API_BASE: &str = "DEALDESK_API_BASE";
    /// Listen address of the proxy binary.
    pub const PROXY_ADDR: &str = "DEALDESK_PROXY_ADDR";
    /// Override for the CapIQ forwarding target.
    pub const CAPIQ_TARGET: &str = "DEALDESK_CAPIQ_TARGET";
    /// Override for the AlphaSense forwarding target.
    pub const ALPHASENSE_TARGET: &str = "DEALDESK_ALPHASENSE_TARGET";
}

/// Default dev-server origin the gateway talks to.
pub const DEFAULT_API_BASE: &str = "http://localhost:3000";

/// What the gateway does when a live upstream call fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FallbackPolicy {
    /// Log the failure and substitute generated data.
    #[default]
    Mock,
    /// Surface the failure to the caller as an error outcome.
    Strict,
}

/// Deployment environment, used to decide whether mock latency is simulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunEnvironment {
    /// Local development: mock responses are delayed to feel like a network.
    Development,
    /// Anything deployed.
    #[default]
    Production,
    /// Automated tests.
    Test,
}

impl RunEnvironment {
    /// Parse the value of `DEALDESK_ENV`; unknown values map to `Production`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Self::Development,
            "test" => Self::Test,
            _ => Self::Production,
        }
    }
}

/// Bounds of the artificial latency applied to generated responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayConfig {
    /// Shortest simulated delay.
    pub min: Duration,
    /// Longest simulated delay.
    pub max: Duration,
}

impl Default for DelayConfig {
    fn default() -> Self {
        Self {
            min: Duration::from_millis(500),
            max: Duration::from_millis(1500),
        }
    }
}

/// Connection settings for one upstream API as seen through the dev proxy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Which upstream this configures.
    pub upstream: Upstream,
    /// Base URL including the proxy prefix, e.g. `http://localhost:3000/api/capiq`.
    pub base_url: String,
    /// Bearer token sent in the `Authorization` header, if any.
    pub api_key: Option<String>,
}

impl UpstreamConfig {
    /// Settings for `upstream` behind the proxy at `api_base`.
    #[must_use]
    pub fn new(upstream: Upstream, api_base: &str) -> Self {
        Self {
            upstream,
            base_url: format!("{}{}", api_base.trim_end_matches('/'), upstream.proxy_prefix()),
            api_key: None,
        }
    }

    /// Attach a bearer token.
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Read settings for `upstream` from the process environment.
    #[must_use]
    pub fn from_env(upstream: Upstream) -> Self {
        Self::from_lookup(upstream, |k| std::env::var(k).ok())
    }

    /// Read settings for `upstream` through an arbitrary variable lookup.
    pub fn from_lookup(upstream: Upstream, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base = lookup(env_keys::API_BASE).unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let key_var = match upstream {
            Upstream::CapIq => env_keys::CAPIQ_API_KEY,
            Upstream::AlphaSense => env_keys::ALPHASENSE_API_KEY,
        };
        let mut cfg = Self::new(upstream, &base);
        cfg.api_key = lookup(key_var).filter(|k| !k.trim().is_empty());
        cfg
    }
}

/// Global configuration for the `Desk` gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeskConfig {
    /// Skip live calls entirely and answer with generated data.
    pub mock_mode: bool,
    /// Delay generated responses by a random duration within `delay`.
    pub simulate_delay: bool,
    /// Bounds of the simulated delay.
    pub delay: DelayConfig,
    /// Behavior on live-call failure.
    pub fallback_policy: FallbackPolicy,
    /// Timeout for individual upstream requests.
    pub request_timeout: Duration,
    /// Period of the live-quote refresh timer on the details view.
    pub live_refresh_interval: Duration,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            mock_mode: false,
            simulate_delay: false,
            delay: DelayConfig::default(),
            fallback_policy: FallbackPolicy::default(),
            request_timeout: Duration::from_secs(5),
            live_refresh_interval: Duration::from_secs(15),
        }
    }
}

impl DeskConfig {
    /// Read configuration from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mock_mode = lookup(env_keys::USE_MOCK_DATA).is_some_and(|v| v.trim() == "true");
        let env = lookup(env_keys::ENV)
            .map(|v| RunEnvironment::parse(&v))
            .unwrap_or_default();
        Self {
            mock_mode,
            simulate_delay: env == RunEnvironment::Development,
            ..Self::default()
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
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn mock_mode_requires_literal_true() {
        assert!(DeskConfig::from_lookup(lookup(&[(env_keys::USE_MOCK_DATA, "true")])).mock_mode);
        assert!(!DeskConfig::from_lookup(lookup(&[(env_keys::USE_MOCK_DATA, "1")])).mock_mode);
        assert!(!DeskConfig::from_lookup(lookup(&[])).mock_mode);
    }

    #[test]
    fn development_enables_simulated_delay() {
        let cfg = DeskConfig::from_lookup(lookup(&[(env_keys::ENV, "development")]));
        assert!(cfg.simulate_delay);
        assert_eq!(cfg.live_refresh_interval, Duration::from_secs(15));
        assert_eq!(cfg.request_timeout, Duration::from_secs(5));
        assert!(!DeskConfig::from_lookup(lookup(&[(env_keys::ENV, "production")])).simulate_delay);
    }

    #[test]
    fn upstream_base_joins_proxy_prefix() {
        let cfg = UpstreamConfig::from_lookup(
            Upstream::AlphaSense,
            lookup(&[
                (env_keys::API_BASE, "http://127.0.0.1:8080/"),
                (env_keys::ALPHASENSE_API_KEY, "secret"),
            ]),
        );
        assert_eq!(cfg.base_url, "http://127.0.0.1:8080/api/alphasense");
        assert_eq!(cfg.api_key.as_deref(), Some("secret"));

        let default = UpstreamConfig::from_lookup(Upstream::CapIq, lookup(&[]));
        assert_eq!(default.base_url, "http://localhost:3000/api/capiq");
        assert_eq!(default.api_key, None);
    }
}
