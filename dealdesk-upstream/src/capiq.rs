use std::time::Duration;

use async_trait::async_trait;
use dealdesk_core::connector::{
    AnalystRatingsProvider, DeskConnector, FinancialsProvider, LiveQuoteProvider, NewsProvider,
    PeerComparisonProvider, ProviderKey,
};
use dealdesk_core::{
    AnalystRatings, DeskError, FinancialData, LiveQuote, NewsFeed, PeerComparison, Resource,
    Ticker, Upstream, UpstreamConfig,
};

use crate::client::UpstreamClient;

/// Connector for S&P Capital IQ company endpoints.
///
/// Every resource lives under `/v1/companies/{ticker}/...` relative to the
/// proxied base URL.
#[derive(Debug, Clone)]
pub struct CapIqConnector {
    client: UpstreamClient,
}

impl CapIqConnector {
    /// Static connector key used in logs and builder configuration.
    pub const KEY: ProviderKey = ProviderKey::new("dealdesk-capiq");

    /// Build from explicit settings.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `cfg` targets another upstream or its base URL
    /// does not parse.
    pub fn from_config(cfg: &UpstreamConfig, timeout: Duration) -> Result<Self, DeskError> {
        if cfg.upstream != Upstream::CapIq {
            return Err(DeskError::InvalidArg(format!(
                "expected capiq settings, got {}",
                cfg.upstream
            )));
        }
        Ok(Self {
            client: UpstreamClient::new(Self::KEY.as_str(), cfg, timeout)?,
        })
    }

    /// Build from `DEALDESK_API_BASE` and `DEALDESK_CAPIQ_API_KEY`.
    ///
    /// # Errors
    /// Same as [`CapIqConnector::from_config`].
    pub fn from_env(timeout: Duration) -> Result<Self, DeskError> {
        Self::from_config(&UpstreamConfig::from_env(Upstream::CapIq), timeout)
    }

    async fn company<T: serde::de::DeserializeOwned>(
        &self,
        resource: Resource,
        ticker: &Ticker,
        leaf: &str,
        query: &[(&str, &str)],
    ) -> Result<T, DeskError> {
        let path = format!("/v1/companies/{ticker}/{leaf}");
        self.client.get_json(resource, ticker, &path, query).await
    }
}

impl DeskConnector for CapIqConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "S&P Capital IQ"
    }

    fn as_financials_provider(&self) -> Option<&dyn FinancialsProvider> {
        Some(self as &dyn FinancialsProvider)
    }
    fn as_live_quote_provider(&self) -> Option<&dyn LiveQuoteProvider> {
        Some(self as &dyn LiveQuoteProvider)
    }
    fn as_peer_comparison_provider(&self) -> Option<&dyn PeerComparisonProvider> {
        Some(self as &dyn PeerComparisonProvider)
    }
    fn as_analyst_ratings_provider(&self) -> Option<&dyn AnalystRatingsProvider> {
        Some(self as &dyn AnalystRatingsProvider)
    }
    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        Some(self as &dyn NewsProvider)
    }
}

#[async_trait]
impl FinancialsProvider for CapIqConnector {
    async fn financials(&self, ticker: &Ticker) -> Result<FinancialData, DeskError> {
        self.company(Resource::Financials, ticker, "financials", &[])
            .await
    }
}

#[async_trait]
impl LiveQuoteProvider for CapIqConnector {
    async fn live_quote(&self, ticker: &Ticker) -> Result<LiveQuote, DeskError> {
        self.company(Resource::LiveQuote, ticker, "market-data/live", &[])
            .await
    }
}

#[async_trait]
impl PeerComparisonProvider for CapIqConnector {
    async fn peer_comparison(&self, ticker: &Ticker) -> Result<PeerComparison, DeskError> {
        self.company(Resource::PeerComparison, ticker, "peers", &[])
            .await
    }
}

#[async_trait]
impl AnalystRatingsProvider for CapIqConnector {
    async fn analyst_ratings(&self, ticker: &Ticker) -> Result<AnalystRatings, DeskError> {
        self.company(Resource::AnalystRatings, ticker, "analyst-ratings", &[])
            .await
    }
}

#[async_trait]
impl NewsProvider for CapIqConnector {
    async fn news(&self, ticker: &Ticker) -> Result<NewsFeed, DeskError> {
        self.company(
            Resource::News,
            ticker,
            "news",
            &[("limit", "10"), ("days", "30")],
        )
        .await
    }
}
