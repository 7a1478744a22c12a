//! Provider metadata types usable across crates.

use core::fmt;
use serde::{Deserialize, Serialize};

/// Typed key for identifying connectors in logs and builder configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProviderKey(pub &'static str);

impl ProviderKey {
    /// Construct a new typed provider key from a static name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the inner static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl From<ProviderKey> for &'static str {
    fn from(k: ProviderKey) -> Self {
        k.0
    }
}

/// The two third-party research APIs reached through the dev proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Upstream {
    /// S&P Capital IQ: financials, quotes, peers, ratings and news.
    CapIq,
    /// AlphaSense: expert calls and documents.
    AlphaSense,
}

impl Upstream {
    /// Both upstreams.
    pub const ALL: [Self; 2] = [Self::CapIq, Self::AlphaSense];

    /// Lowercase identifier used in paths, env vars and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CapIq => "capiq",
            Self::AlphaSense => "alphasense",
        }
    }

    /// Path prefix under which the dev proxy exposes this upstream.
    #[must_use]
    pub const fn proxy_prefix(self) -> &'static str {
        match self {
            Self::CapIq => "/api/capiq",
            Self::AlphaSense => "/api/alphasense",
        }
    }

    /// Public host the proxy forwards to unless overridden.
    #[must_use]
    pub const fn default_target(self) -> &'static str {
        match self {
            Self::CapIq => "https://api.capitaliq.com",
            Self::AlphaSense => "https://api.alphasense.com",
        }
    }
}

impl fmt::Display for Upstream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
