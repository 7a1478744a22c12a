use std::net::SocketAddr;

use dealdesk_types::{Upstream, env_keys};
use url::Url;

use crate::ProxyError;

/// Default listen address, matching the gateway's default API base.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

/// Listen address plus one target origin per upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyConfig {
    /// Socket the dev server binds to.
    pub listen: SocketAddr,
    /// Origin that `/api/capiq/*` forwards to.
    pub capiq_target: Url,
    /// Origin that `/api/alphasense/*` forwards to.
    pub alphasense_target: Url,
}

impl ProxyConfig {
    /// Defaults: listen on `127.0.0.1:3000`, forward to the vendors' public hosts.
    ///
    /// # Errors
    /// Only fails if a built-in default does not parse.
    pub fn try_default() -> Result<Self, ProxyError> {
        Self::from_lookup(|_| None)
    }

    /// Read `DEALDESK_PROXY_ADDR`, `DEALDESK_CAPIQ_TARGET` and
    /// `DEALDESK_ALPHASENSE_TARGET`, falling back to the defaults.
    ///
    /// # Errors
    /// Returns `Config` if a variable is set but does not parse.
    pub fn from_env() -> Result<Self, ProxyError> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Same as [`ProxyConfig::from_env`] over an arbitrary lookup.
    ///
    /// # Errors
    /// Returns `Config` if a value does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ProxyError> {
        let listen_raw =
            lookup(env_keys::PROXY_ADDR).unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen = listen_raw
            .trim()
            .parse()
            .map_err(|e| ProxyError::Config(format!("listen address {listen_raw:?}: {e}")))?;

        let target = |key: &str, upstream: Upstream| -> Result<Url, ProxyError> {
            let raw = lookup(key).unwrap_or_else(|| upstream.default_target().to_string());
            Url::parse(raw.trim())
                .map_err(|e| ProxyError::Config(format!("{upstream} target {raw:?}: {e}")))
        };

        Ok(Self {
            listen,
            capiq_target: target(env_keys::CAPIQ_TARGET, Upstream::CapIq)?,
            alphasense_target: target(env_keys::ALPHASENSE_TARGET, Upstream::AlphaSense)?,
        })
    }

    /// Replace the CapIQ target.
    #[must_use]
    pub fn with_capiq_target(mut self, target: Url) -> Self {
        self.capiq_target = target;
        self
    }

    /// Replace the AlphaSense target.
    #[must_use]
    pub fn with_alphasense_target(mut self, target: Url) -> Self {
        self.alphasense_target = target;
        self
    }

    /// Target origin for `upstream`.
    #[must_use]
    pub const fn target(&self, upstream: Upstream) -> &Url {
        match upstream {
            Upstream::CapIq => &self.capiq_target,
            Upstream::AlphaSense => &self.alphasense_target,
        }
    }

    /// Map an incoming `path_and_query` under `upstream`'s prefix onto the
    /// target: the prefix is stripped and the query kept verbatim.
    ///
    /// Returns `None` if the path is not under the prefix.
    #[must_use]
    pub fn rewrite(&self, upstream: Upstream, path_and_query: &str) -> Option<Url> {
        let rest = path_and_query.strip_prefix(upstream.proxy_prefix())?;
        if !(rest.is_empty() || rest.starts_with('/') || rest.starts_with('?')) {
            return None;
        }
        let base = self.target(upstream).as_str().trim_end_matches('/');
        let joined = if rest.starts_with('?') || rest.is_empty() {
            format!("{base}/{rest}")
        } else {
            format!("{base}{rest}")
        };
        Url::parse(&joined).ok()
    }
}
