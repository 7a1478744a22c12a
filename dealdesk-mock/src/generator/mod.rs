//! Randomized records shaped like the CapIQ and AlphaSense responses.
//!
//! Every generator takes the RNG explicitly so tests can pass a seeded one;
//! the `generate_*` entry points use the thread RNG and the current time.

use chrono::Utc;
use dealdesk_core::{
    AnalystRatings, DocumentList, ExpertCallList, FinancialData, LiveQuote, NewsFeed,
    PeerComparison, Sentiment, Ticker,
};
use rand::Rng;
use rust_decimal::Decimal;

mod fundamentals;
mod market;
mod research;

pub use fundamentals::financial_data;
pub use market::{analyst_ratings, live_quote, peer_comparison};
pub use research::{documents, expert_calls, news};

/// Display name used in headlines; unknown symbols fall back to the symbol itself.
#[must_use]
pub fn company_name(ticker: &Ticker) -> &str {
    match ticker.as_str() {
        "AAPL" => "Apple",
        "MSFT" => "Microsoft",
        "GOOGL" => "Google",
        "META" => "Meta",
        "AMZN" => "Amazon",
        "TSLA" => "Tesla",
        "NVDA" => "NVIDIA",
        "RIVN" => "Rivian",
        "LCID" => "Lucid Motors",
        other => other,
    }
}

pub(crate) fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

pub(crate) fn money(x: f64) -> Decimal {
    Decimal::from_f64_retain(x).unwrap_or_default().round_dp(2)
}

pub(crate) fn sentiment<R: Rng + ?Sized>(rng: &mut R) -> Sentiment {
    if rng.random::<f64>() > 0.3 {
        Sentiment::Positive
    } else if rng.random::<f64>() > 0.5 {
        Sentiment::Neutral
    } else {
        Sentiment::Negative
    }
}

/// Financial statements and ratios from the thread RNG.
#[must_use]
pub fn generate_financial_data(ticker: &Ticker) -> FinancialData {
    financial_data(&mut rand::rng(), ticker)
}

/// A live quote stamped with the current time.
#[must_use]
pub fn generate_live_quote(ticker: &Ticker) -> LiveQuote {
    live_quote(&mut rand::rng(), ticker, Utc::now())
}

/// Analyst ratings from the thread RNG.
#[must_use]
pub fn generate_analyst_ratings(ticker: &Ticker) -> AnalystRatings {
    analyst_ratings(&mut rand::rng(), ticker)
}

/// Peer comparison from the thread RNG.
#[must_use]
pub fn generate_peer_comparison(ticker: &Ticker) -> PeerComparison {
    peer_comparison(&mut rand::rng(), ticker)
}

/// Five news articles dated relative to now.
#[must_use]
pub fn generate_news(ticker: &Ticker) -> NewsFeed {
    news(&mut rand::rng(), ticker, Utc::now())
}

/// Five expert calls dated relative to now.
#[must_use]
pub fn generate_expert_calls(ticker: &Ticker) -> ExpertCallList {
    expert_calls(&mut rand::rng(), ticker, Utc::now())
}

/// Five documents dated relative to now.
#[must_use]
pub fn generate_documents(ticker: &Ticker) -> DocumentList {
    documents(&mut rand::rng(), ticker, Utc::now())
}
