use core::fmt;
use serde::{Deserialize, Serialize};

use crate::provider::Upstream;

/// Per-ticker data resources served by the gateway.
///
/// These map one-to-one with gateway endpoints and give consistent labels
/// for logs, errors and fallback tagging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Resource {
    /// Multi-year financial statements and valuation ratios.
    Financials,
    /// Latest market quote.
    LiveQuote,
    /// Quotes for a handful of comparable companies.
    PeerComparison,
    /// Buy/hold/sell tally and price target.
    AnalystRatings,
    /// Recent news articles.
    News,
    /// Expert call transcripts.
    ExpertCalls,
    /// Filings, research reports and company materials.
    Documents,
}

impl Resource {
    /// Every resource, in the order a details batch fetches them.
    pub const ALL: [Self; 7] = [
        Self::Financials,
        Self::LiveQuote,
        Self::PeerComparison,
        Self::AnalystRatings,
        Self::News,
        Self::ExpertCalls,
        Self::Documents,
    ];

    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Financials => "financials",
            Self::LiveQuote => "live-quote",
            Self::PeerComparison => "peer-comparison",
            Self::AnalystRatings => "analyst-ratings",
            Self::News => "news",
            Self::ExpertCalls => "expert-calls",
            Self::Documents => "documents",
        }
    }

    /// Upstream API that serves this resource.
    #[must_use]
    pub const fn upstream(self) -> Upstream {
        match self {
            Self::ExpertCalls | Self::Documents => Upstream::AlphaSense,
            _ => Upstream::CapIq,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn research_resources_route_to_alphasense() {
        let alphasense: Vec<_> = Resource::ALL
            .into_iter()
            .filter(|r| r.upstream() == Upstream::AlphaSense)
            .collect();
        assert_eq!(alphasense, vec![Resource::ExpertCalls, Resource::Documents]);
    }

    #[test]
    fn serde_label_matches_display() {
        for r in Resource::ALL {
            let json = serde_json::to_string(&r).unwrap();
            assert_eq!(json, format!("\"{r}\""));
        }
    }
}
