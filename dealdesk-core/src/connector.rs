use async_trait::async_trait;

use crate::types::{
    AnalystRatings, DeskError, DocumentList, ExpertCallList, FinancialData, LiveQuote, NewsFeed,
    PeerComparison, Resource, Ticker,
};
pub use dealdesk_types::ProviderKey;

/// Focused role trait for connectors that provide financial statements.
#[async_trait]
pub trait FinancialsProvider: Send + Sync {
    /// Fetch multi-year statements and ratios for the given ticker.
    async fn financials(&self, ticker: &Ticker) -> Result<FinancialData, DeskError>;
}

/// Focused role trait for connectors that provide live quotes.
#[async_trait]
pub trait LiveQuoteProvider: Send + Sync {
    /// Fetch the latest quote for the given ticker.
    async fn live_quote(&self, ticker: &Ticker) -> Result<LiveQuote, DeskError>;
}

/// Focused role trait for connectors that provide peer comparisons.
#[async_trait]
pub trait PeerComparisonProvider: Send + Sync {
    /// Fetch quotes for companies comparable to the given ticker.
    async fn peer_comparison(&self, ticker: &Ticker) -> Result<PeerComparison, DeskError>;
}

/// Focused role trait for connectors that provide analyst ratings.
#[async_trait]
pub trait AnalystRatingsProvider: Send + Sync {
    /// Fetch the buy/hold/sell tally for the given ticker.
    async fn analyst_ratings(&self, ticker: &Ticker) -> Result<AnalystRatings, DeskError>;
}

/// Focused role trait for connectors that provide news.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Fetch recent articles for the given ticker.
    async fn news(&self, ticker: &Ticker) -> Result<NewsFeed, DeskError>;
}

/// Focused role trait for connectors that provide expert calls.
#[async_trait]
pub trait ExpertCallsProvider: Send + Sync {
    /// Fetch expert call transcripts mentioning the given ticker.
    async fn expert_calls(&self, ticker: &Ticker) -> Result<ExpertCallList, DeskError>;
}

/// Focused role trait for connectors that provide research documents.
#[async_trait]
pub trait DocumentsProvider: Send + Sync {
    /// Fetch filings and research mentioning the given ticker.
    async fn documents(&self, ticker: &Ticker) -> Result<DocumentList, DeskError>;
}

/// Main connector trait implemented by upstream crates. Exposes resource discovery.
pub trait DeskConnector: Send + Sync {
    /// A stable identifier for logs and builder configuration (e.g. "dealdesk-capiq").
    fn name(&self) -> &'static str;

    /// Canonical provider key constructed from the static name.
    fn key(&self) -> ProviderKey {
        ProviderKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "Unknown"
    }

    /// If implemented, returns a trait object for financial statements.
    fn as_financials_provider(&self) -> Option<&dyn FinancialsProvider> {
        None
    }
    /// If implemented, returns a trait object for live quotes.
    fn as_live_quote_provider(&self) -> Option<&dyn LiveQuoteProvider> {
        None
    }
    /// If implemented, returns a trait object for peer comparisons.
    fn as_peer_comparison_provider(&self) -> Option<&dyn PeerComparisonProvider> {
        None
    }
    /// If implemented, returns a trait object for analyst ratings.
    fn as_analyst_ratings_provider(&self) -> Option<&dyn AnalystRatingsProvider> {
        None
    }
    /// If implemented, returns a trait object for news.
    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        None
    }
    /// If implemented, returns a trait object for expert calls.
    fn as_expert_calls_provider(&self) -> Option<&dyn ExpertCallsProvider> {
        None
    }
    /// If implemented, returns a trait object for research documents.
    fn as_documents_provider(&self) -> Option<&dyn DocumentsProvider> {
        None
    }

    /// Whether this connector advertises the given resource.
    fn supports(&self, resource: Resource) -> bool {
        match resource {
            Resource::Financials => self.as_financials_provider().is_some(),
            Resource::LiveQuote => self.as_live_quote_provider().is_some(),
            Resource::PeerComparison => self.as_peer_comparison_provider().is_some(),
            Resource::AnalystRatings => self.as_analyst_ratings_provider().is_some(),
            Resource::News => self.as_news_provider().is_some(),
            Resource::ExpertCalls => self.as_expert_calls_provider().is_some(),
            Resource::Documents => self.as_documents_provider().is_some(),
        }
    }
}

/// Implement every provider trait for a wrapper by forwarding to an inner
/// `Arc<dyn DeskConnector>` field.
///
/// The wrapper supplies its own behavior through an inherent hook:
/// `async fn around<T, F>(&self, resource: Resource, ticker: &Ticker, fut: F) -> Result<T, DeskError>`
/// where `F: Future<Output = Result<T, DeskError>> + Send`.
#[macro_export]
macro_rules! delegate_providers {
    ($ty:ty, $inner:ident) => {
        $crate::delegate_providers!(@one $ty, $inner, FinancialsProvider, as_financials_provider,
            financials, $crate::types::FinancialData, Financials);
        $crate::delegate_providers!(@one $ty, $inner, LiveQuoteProvider, as_live_quote_provider,
            live_quote, $crate::types::LiveQuote, LiveQuote);
        $crate::delegate_providers!(@one $ty, $inner, PeerComparisonProvider,
            as_peer_comparison_provider, peer_comparison, $crate::types::PeerComparison,
            PeerComparison);
        $crate::delegate_providers!(@one $ty, $inner, AnalystRatingsProvider,
            as_analyst_ratings_provider, analyst_ratings, $crate::types::AnalystRatings,
            AnalystRatings);
        $crate::delegate_providers!(@one $ty, $inner, NewsProvider, as_news_provider, news,
            $crate::types::NewsFeed, News);
        $crate::delegate_providers!(@one $ty, $inner, ExpertCallsProvider,
            as_expert_calls_provider, expert_calls, $crate::types::ExpertCallList, ExpertCalls);
        $crate::delegate_providers!(@one $ty, $inner, DocumentsProvider, as_documents_provider,
            documents, $crate::types::DocumentList, Documents);
    };
    (@one $ty:ty, $inner:ident, $trait:ident, $accessor:ident, $method:ident, $out:ty, $res:ident) => {
        #[$crate::async_trait]
        impl $crate::connector::$trait for $ty {
            async fn $method(
                &self,
                ticker: &$crate::types::Ticker,
            ) -> Result<$out, $crate::types::DeskError> {
                let provider = self.$inner.$accessor().ok_or_else(|| {
                    $crate::types::DeskError::unsupported($crate::types::Resource::$res.as_str())
                })?;
                self.around(
                    $crate::types::Resource::$res,
                    ticker,
                    provider.$method(ticker),
                )
                .await
            }
        }
    };
}

/// Generate the `as_*_provider` accessors of a wrapper whose inner connector
/// decides support.
#[macro_export]
macro_rules! delegate_accessors {
    ($inner:ident) => {
        fn as_financials_provider(&self) -> Option<&dyn $crate::connector::FinancialsProvider> {
            self.$inner
                .as_financials_provider()
                .map(|_| self as &dyn $crate::connector::FinancialsProvider)
        }
        fn as_live_quote_provider(&self) -> Option<&dyn $crate::connector::LiveQuoteProvider> {
            self.$inner
                .as_live_quote_provider()
                .map(|_| self as &dyn $crate::connector::LiveQuoteProvider)
        }
        fn as_peer_comparison_provider(&self) -> Option<&dyn $crate::connector::PeerComparisonProvider> {
            self.$inner
                .as_peer_comparison_provider()
                .map(|_| self as &dyn $crate::connector::PeerComparisonProvider)
        }
        fn as_analyst_ratings_provider(&self) -> Option<&dyn $crate::connector::AnalystRatingsProvider> {
            self.$inner
                .as_analyst_ratings_provider()
                .map(|_| self as &dyn $crate::connector::AnalystRatingsProvider)
        }
        fn as_news_provider(&self) -> Option<&dyn $crate::connector::NewsProvider> {
            self.$inner
                .as_news_provider()
                .map(|_| self as &dyn $crate::connector::NewsProvider)
        }
        fn as_expert_calls_provider(&self) -> Option<&dyn $crate::connector::ExpertCallsProvider> {
            self.$inner
                .as_expert_calls_provider()
                .map(|_| self as &dyn $crate::connector::ExpertCallsProvider)
        }
        fn as_documents_provider(&self) -> Option<&dyn $crate::connector::DocumentsProvider> {
            self.$inner
                .as_documents_provider()
                .map(|_| self as &dyn $crate::connector::DocumentsProvider)
        }
    };
}
