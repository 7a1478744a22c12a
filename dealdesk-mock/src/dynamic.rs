use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use dealdesk_core::connector::{
    AnalystRatingsProvider, DeskConnector, DocumentsProvider, ExpertCallsProvider,
    FinancialsProvider, LiveQuoteProvider, NewsProvider, PeerComparisonProvider,
};
use dealdesk_core::{
    AnalystRatings, DeskError, DocumentList, ExpertCallList, FinancialData, LiveQuote, NewsFeed,
    PeerComparison, Resource, Ticker,
};

use crate::generator;

/// Instruction for how a method should behave for a given input.
///
/// For rules set through [`DynamicMockController::set_behavior`] the payload is
/// `()`, and `Return(())` answers with freshly generated data.
#[derive(Clone)]
pub enum MockBehavior<T> {
    /// Return the provided value immediately.
    Return(T),
    /// Return the provided value after sleeping.
    Delayed(Duration, T),
    /// Fail immediately with the provided error.
    Fail(DeskError),
    /// Hang indefinitely (simulate a stalled upstream).
    Hang,
}

impl<T> MockBehavior<T> {
    async fn play(self) -> Result<T, DeskError> {
        match self {
            Self::Return(v) => Ok(v),
            Self::Delayed(d, v) => {
                tokio::time::sleep(d).await;
                Ok(v)
            }
            Self::Fail(e) => Err(e),
            Self::Hang => std::future::pending().await,
        }
    }
}

type RuleKey = (Resource, Ticker);

#[derive(Default)]
struct InternalState {
    quote_rules: HashMap<Ticker, MockBehavior<LiveQuote>>,
    rules: HashMap<RuleKey, MockBehavior<()>>,
    fallback_rules: HashMap<Resource, MockBehavior<()>>,
    calls: HashMap<RuleKey, usize>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
#[derive(Clone)]
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for `live_quote` calls for a specific ticker.
    pub async fn set_live_quote_behavior(&self, ticker: Ticker, behavior: MockBehavior<LiveQuote>) {
        let mut guard = self.state.lock().await;
        guard.quote_rules.insert(ticker, behavior);
    }

    /// Set the behavior for one resource of one ticker.
    pub async fn set_behavior(&self, resource: Resource, ticker: Ticker, behavior: MockBehavior<()>) {
        let mut guard = self.state.lock().await;
        guard.rules.insert((resource, ticker), behavior);
    }

    /// Set the behavior for one resource across every ticker without a specific rule.
    pub async fn set_resource_behavior(&self, resource: Resource, behavior: MockBehavior<()>) {
        let mut guard = self.state.lock().await;
        guard.fallback_rules.insert(resource, behavior);
    }

    /// Fail every resource of `ticker` with `error`.
    pub async fn fail_ticker(&self, ticker: &Ticker, error: DeskError) {
        let mut guard = self.state.lock().await;
        guard.quote_rules.remove(ticker);
        for resource in Resource::ALL {
            guard
                .rules
                .insert((resource, ticker.clone()), MockBehavior::Fail(error.clone()));
        }
    }

    /// Number of calls seen for one resource of one ticker.
    pub async fn calls(&self, resource: Resource, ticker: &Ticker) -> usize {
        let guard = self.state.lock().await;
        guard
            .calls
            .get(&(resource, ticker.clone()))
            .copied()
            .unwrap_or(0)
    }

    /// Number of calls seen for one resource across all tickers.
    pub async fn resource_calls(&self, resource: Resource) -> usize {
        let guard = self.state.lock().await;
        guard
            .calls
            .iter()
            .filter(|((r, _), _)| *r == resource)
            .map(|(_, n)| n)
            .sum()
    }

    /// Clear all configured behaviors and call counts.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.quote_rules.clear();
        guard.rules.clear();
        guard.fallback_rules.clear();
        guard.calls.clear();
    }
}

/// A connector that defers all behavior to an external controller.
///
/// Without a rule every resource answers with generated data.
pub struct DynamicMockConnector {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a new dynamic mock connector and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn DeskConnector>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn DeskConnector>, controller)
    }

    // Acquire a behavior snapshot without holding the lock across await points
    async fn take_rule(&self, resource: Resource, ticker: &Ticker) -> Option<MockBehavior<()>> {
        let key = (resource, ticker.clone());
        let mut guard = self.state.lock().await;
        *guard.calls.entry(key.clone()).or_insert(0) += 1;
        guard
            .rules
            .get(&key)
            .or_else(|| guard.fallback_rules.get(&resource))
            .cloned()
    }

    async fn run<T>(
        &self,
        resource: Resource,
        ticker: &Ticker,
        generate: impl FnOnce(&Ticker) -> T + Send,
    ) -> Result<T, DeskError> {
        if let Some(rule) = self.take_rule(resource, ticker).await {
            rule.play().await?;
        }
        Ok(generate(ticker))
    }
}

impl DeskConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
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
impl LiveQuoteProvider for DynamicMockConnector {
    async fn live_quote(&self, ticker: &Ticker) -> Result<LiveQuote, DeskError> {
        let quote_rule = {
            let guard = self.state.lock().await;
            guard.quote_rules.get(ticker).cloned()
        };
        match quote_rule {
            Some(rule) => {
                {
                    let mut guard = self.state.lock().await;
                    *guard
                        .calls
                        .entry((Resource::LiveQuote, ticker.clone()))
                        .or_insert(0) += 1;
                }
                rule.play().await
            }
            None => {
                self.run(Resource::LiveQuote, ticker, generator::generate_live_quote)
                    .await
            }
        }
    }
}

#[async_trait]
impl FinancialsProvider for DynamicMockConnector {
    async fn financials(&self, ticker: &Ticker) -> Result<FinancialData, DeskError> {
        self.run(Resource::Financials, ticker, generator::generate_financial_data)
            .await
    }
}

#[async_trait]
impl PeerComparisonProvider for DynamicMockConnector {
    async fn peer_comparison(&self, ticker: &Ticker) -> Result<PeerComparison, DeskError> {
        self.run(Resource::PeerComparison, ticker, generator::generate_peer_comparison)
            .await
    }
}

#[async_trait]
impl AnalystRatingsProvider for DynamicMockConnector {
    async fn analyst_ratings(&self, ticker: &Ticker) -> Result<AnalystRatings, DeskError> {
        self.run(Resource::AnalystRatings, ticker, generator::generate_analyst_ratings)
            .await
    }
}

#[async_trait]
impl NewsProvider for DynamicMockConnector {
    async fn news(&self, ticker: &Ticker) -> Result<NewsFeed, DeskError> {
        self.run(Resource::News, ticker, generator::generate_news)
            .await
    }
}

#[async_trait]
impl ExpertCallsProvider for DynamicMockConnector {
    async fn expert_calls(&self, ticker: &Ticker) -> Result<ExpertCallList, DeskError> {
        self.run(Resource::ExpertCalls, ticker, generator::generate_expert_calls)
            .await
    }
}

#[async_trait]
impl DocumentsProvider for DynamicMockConnector {
    async fn documents(&self, ticker: &Ticker) -> Result<DocumentList, DeskError> {
        self.run(Resource::Documents, ticker, generator::generate_documents)
            .await
    }
}
