//! Market and fundamentals records served by CapIQ.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Ticker;

/// Multi-year statements plus valuation ratios for one company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialData {
    /// Symbol the figures belong to.
    pub ticker: Ticker,
    /// Year-keyed statement lines.
    pub financials: FinancialStatements,
    /// Valuation ratios.
    pub ratios: Ratios,
}

/// Year-keyed statement lines, formatted for display (`"$123.45B"`, `"$1.23"`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialStatements {
    /// Revenue per fiscal year.
    pub revenue: BTreeMap<String, String>,
    /// Net income per fiscal year.
    pub net_income: BTreeMap<String, String>,
    /// Earnings per share per fiscal year.
    pub eps: BTreeMap<String, String>,
}

/// Valuation ratios, rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ratios {
    /// Price to earnings.
    pub pe: f64,
    /// Price to book.
    pub pb: f64,
    /// Debt to equity.
    pub debt_to_equity: f64,
    /// Current assets over current liabilities.
    pub current_ratio: f64,
}

/// Latest market quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveQuote {
    /// Quoted symbol.
    pub ticker: Ticker,
    /// Last traded price.
    pub last_price: Decimal,
    /// Day change in percent.
    pub change_percent: Decimal,
    /// Shares traded today.
    pub volume: u64,
    /// Market capitalization in dollars.
    pub market_cap: u64,
    /// 52-week high.
    pub high52_week: Decimal,
    /// 52-week low.
    pub low52_week: Decimal,
    /// When the quote was taken.
    pub last_updated: DateTime<Utc>,
}

/// Buy/hold/sell tally and consensus target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalystRatings {
    /// Analysts rating buy.
    pub buy: u32,
    /// Analysts rating hold.
    pub hold: u32,
    /// Analysts rating sell.
    pub sell: u32,
    /// Consensus price target.
    pub target_price: Decimal,
}

impl AnalystRatings {
    /// Total number of ratings.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.buy + self.hold + self.sell
    }
}

/// Quotes for comparable companies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeerComparison {
    /// Subject company.
    pub ticker: Ticker,
    /// Comparable companies, subject excluded.
    pub peers: Vec<Peer>,
}

/// One row of a peer comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Peer {
    /// Peer symbol.
    pub ticker: Ticker,
    /// Last traded price.
    pub last_price: Decimal,
    /// Day change in percent.
    pub change_percent: Decimal,
    /// Price to earnings.
    pub pe_ratio: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::prelude::FromPrimitive;

    #[test]
    fn live_quote_uses_dashboard_field_names() {
        let q = LiveQuote {
            ticker: Ticker::new("AAPL").unwrap(),
            last_price: Decimal::from_f64(180.25).unwrap(),
            change_percent: Decimal::from_f64(-1.1).unwrap(),
            volume: 7_000_000,
            market_cap: 2_800_000_000_000,
            high52_week: Decimal::from(227),
            low52_week: Decimal::from(122),
            last_updated: DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap(),
        };
        let v = serde_json::to_value(&q).unwrap();
        for key in ["lastPrice", "changePercent", "marketCap", "high52Week", "low52Week"] {
            assert!(v.get(key).is_some(), "missing {key}");
        }
        let back: LiveQuote = serde_json::from_value(v).unwrap();
        assert_eq!(back, q);
    }
}
