use std::time::Duration;

use async_trait::async_trait;
use dealdesk_core::connector::{
    AnalystRatingsProvider, DeskConnector, DocumentsProvider, ExpertCallsProvider,
    FinancialsProvider, LiveQuoteProvider, NewsProvider, PeerComparisonProvider,
};
use dealdesk_core::{
    AnalystRatings, DeskError, DocumentList, ExpertCallList, FinancialData, LiveQuote, NewsFeed,
    PeerComparison, Resource, Ticker,
};

mod dynamic;
pub mod generator;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior};

/// Mock connector for offline runs and tests. Serves freshly generated data
/// for every resource.
///
/// When built with [`MockConnector::scripted`], two reserved symbols script
/// failures: `FAIL` errors every call and `TIMEOUT` stalls before answering.
pub struct MockConnector {
    scripted: bool,
    stall: Duration,
}

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Plain generator-backed connector; every symbol succeeds.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scripted: false,
            stall: Duration::from_millis(200),
        }
    }

    /// Connector that honours the reserved `FAIL` and `TIMEOUT` symbols.
    #[must_use]
    pub const fn scripted() -> Self {
        Self {
            scripted: true,
            stall: Duration::from_millis(200),
        }
    }

    /// Override how long `TIMEOUT` stalls.
    #[must_use]
    pub const fn with_stall(mut self, stall: Duration) -> Self {
        self.stall = stall;
        self
    }

    async fn maybe_fail_or_timeout(
        &self,
        ticker: &Ticker,
        resource: Resource,
    ) -> Result<(), DeskError> {
        if !self.scripted {
            return Ok(());
        }
        match ticker.as_str() {
            "FAIL" => Err(DeskError::upstream(
                "dealdesk-mock",
                format!("forced failure: {resource}"),
            )),
            "TIMEOUT" => {
                tokio::time::sleep(self.stall).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl DeskConnector for MockConnector {
    fn name(&self) -> &'static str {
        "dealdesk-mock"
    }
    fn vendor(&self) -> &'static str {
        "Mock"
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
    fn as_expert_calls_provider(&self) -> Option<&dyn ExpertCallsProvider> {
        Some(self as &dyn ExpertCallsProvider)
    }
    fn as_documents_provider(&self) -> Option<&dyn DocumentsProvider> {
        Some(self as &dyn DocumentsProvider)
    }
}

#[async_trait]
impl FinancialsProvider for MockConnector {
    async fn financials(&self, ticker: &Ticker) -> Result<FinancialData, DeskError> {
        self.maybe_fail_or_timeout(ticker, Resource::Financials).await?;
        Ok(generator::generate_financial_data(ticker))
    }
}

#[async_trait]
impl LiveQuoteProvider for MockConnector {
    async fn live_quote(&self, ticker: &Ticker) -> Result<LiveQuote, DeskError> {
        self.maybe_fail_or_timeout(ticker, Resource::LiveQuote).await?;
        Ok(generator::generate_live_quote(ticker))
    }
}

#[async_trait]
impl PeerComparisonProvider for MockConnector {
    async fn peer_comparison(&self, ticker: &Ticker) -> Result<PeerComparison, DeskError> {
        self.maybe_fail_or_timeout(ticker, Resource::PeerComparison)
            .await?;
        Ok(generator::generate_peer_comparison(ticker))
    }
}

#[async_trait]
impl AnalystRatingsProvider for MockConnector {
    async fn analyst_ratings(&self, ticker: &Ticker) -> Result<AnalystRatings, DeskError> {
        self.maybe_fail_or_timeout(ticker, Resource::AnalystRatings)
            .await?;
        Ok(generator::generate_analyst_ratings(ticker))
    }
}

#[async_trait]
impl NewsProvider for MockConnector {
    async fn news(&self, ticker: &Ticker) -> Result<NewsFeed, DeskError> {
        self.maybe_fail_or_timeout(ticker, Resource::News).await?;
        Ok(generator::generate_news(ticker))
    }
}

#[async_trait]
impl ExpertCallsProvider for MockConnector {
    async fn expert_calls(&self, ticker: &Ticker) -> Result<ExpertCallList, DeskError> {
        self.maybe_fail_or_timeout(ticker, Resource::ExpertCalls).await?;
        Ok(generator::generate_expert_calls(ticker))
    }
}

#[async_trait]
impl DocumentsProvider for MockConnector {
    async fn documents(&self, ticker: &Ticker) -> Result<DocumentList, DeskError> {
        self.maybe_fail_or_timeout(ticker, Resource::Documents).await?;
        Ok(generator::generate_documents(ticker))
    }
}
