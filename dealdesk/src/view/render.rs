//! Text form of the project details panel, one function per tab.
//!
//! Renderers are pure functions of a [`DetailsSnapshot`]; callers re-render
//! after every refresh.

use dealdesk_core::{Decimal, Ticker};

use crate::details::{DetailsSnapshot, Entry, ResourceMap, Tab};

/// Body shown while a full batch is in flight.
pub const LOADING: &str = "Loading live data from CapIQ and AlphaSense...";
/// Heading of the aggregate error panel.
pub const CONNECTION_ERROR: &str = "API Connection Error";
/// Advice under the aggregate error.
pub const CONNECTION_HELP: &str = "Please check your API credentials and network connection. If the problem persists, contact your system administrator or the API provider.";
/// Retry button caption.
pub const TRY_AGAIN: &str = "Try Again";

const YEARS: [&str; 3] = ["2022", "2021", "2020"];

/// Whole panel: title, timestamp, tab bar and the active tab's body.
///
/// The body is the loading notice while a batch runs, the error panel after
/// an all-tickers failure, and the active tab otherwise.
#[must_use]
pub fn details(s: &DetailsSnapshot) -> String {
    let tabs: Vec<String> = Tab::ALL
        .iter()
        .map(|t| {
            if *t == s.active_tab {
                format!("[{}]", t.label())
            } else {
                t.label().to_string()
            }
        })
        .collect();

    let mut lines = vec![
        s.project.name.clone(),
        format!(
            "Live data - Last updated: {}",
            s.last_updated.format("%H:%M:%S")
        ),
        tabs.join(" | "),
        String::new(),
    ];
    match (&s.error, s.loading) {
        (Some(err), _) => {
            lines.push(CONNECTION_ERROR.to_string());
            lines.push(err.clone());
            lines.push(CONNECTION_HELP.to_string());
            lines.push(format!("[{TRY_AGAIN}]"));
        }
        (None, true) => lines.push(LOADING.to_string()),
        (None, false) => lines.push(tab(s, s.active_tab)),
    }
    lines.join("\n")
}

/// Body of one tab.
#[must_use]
pub fn tab(s: &DetailsSnapshot, tab: Tab) -> String {
    match tab {
        Tab::Overview => overview(s),
        Tab::Financials => financials(s),
        Tab::LiveMarketData => market(s),
        Tab::News => news(s),
        Tab::ExpertCalls => expert_calls(s),
        Tab::Documents => documents(s),
    }
}

/// Project information and summary counters.
#[must_use]
pub fn overview(s: &DetailsSnapshot) -> String {
    let p = &s.project;
    let call_total: usize = s
        .expert_calls
        .values()
        .filter_map(Entry::ready)
        .map(|c| c.expert_calls.len())
        .sum();
    [
        "Project Information".to_string(),
        format!("Created: {}", p.created_at.format("%Y-%m-%d")),
        format!("Last Updated: {}", p.last_updated),
        format!("Progress: {}% Complete", p.progress),
        format!("Tickers: {}", join_tickers(&p.tickers)),
        String::new(),
        "Summary".to_string(),
        format!("Companies: {}", p.tickers.len()),
        format!("Financial Data Points: {}+", s.financials.len() * 10),
        format!("Expert Calls: {call_total}"),
    ]
    .join("\n")
}

/// Statements table and ratios per ticker.
#[must_use]
pub fn financials(s: &DetailsSnapshot) -> String {
    let mut lines = vec!["Financial Data from CapIQ (Source: Capital IQ)".to_string()];
    for t in &s.project.tickers {
        lines.push(String::new());
        lines.push(t.to_string());
        let Some(data) = ready(&s.financials, t) else {
            lines.push(format!("No financial data available for {t}"));
            continue;
        };
        let f = &data.financials;
        lines.push(format!("Metric | {}", YEARS.join(" | ")));
        for (label, row) in [
            ("Revenue", &f.revenue),
            ("Net Income", &f.net_income),
            ("EPS", &f.eps),
        ] {
            let cells: Vec<&str> = YEARS
                .iter()
                .map(|y| row.get(*y).map_or("-", String::as_str))
                .collect();
            lines.push(format!("{label} | {}", cells.join(" | ")));
        }
        let r = &data.ratios;
        lines.push(format!(
            "P/E Ratio: {} | P/B Ratio: {} | Debt/Equity: {} | Current Ratio: {}",
            r.pe, r.pb, r.debt_to_equity, r.current_ratio
        ));
    }
    lines.join("\n")
}

/// Quotes, analyst coverage and peers per ticker.
#[must_use]
pub fn market(s: &DetailsSnapshot) -> String {
    let mut lines = vec!["Live Market Data (Live Updates)".to_string()];
    for t in &s.project.tickers {
        lines.push(String::new());
        match s.live_quotes.get(t) {
            Some(Entry::Ready(q)) => {
                lines.push(format!(
                    "{t} {} ({}%)",
                    q.last_price,
                    signed(q.change_percent)
                ));
                lines.push(format!("Volume: {}", thousands(q.volume)));
                lines.push(format!("Market Cap: {}", billions(q.market_cap)));
                lines.push(format!("52 Week High: {}", q.high52_week));
                lines.push(format!("52 Week Low: {}", q.low52_week));
                if let Some(r) = ready(&s.ratings, t) {
                    lines.push(format!(
                        "Analyst Coverage: Buy {} | Hold {} | Sell {}",
                        r.buy, r.hold, r.sell
                    ));
                }
            }
            Some(Entry::Failed { error }) => {
                lines.push(t.to_string());
                lines.push(format!("Error: {error}"));
            }
            None => {
                lines.push(t.to_string());
                lines.push(format!("No live market data available for {t}"));
            }
        }
        if let Some(peers) = ready(&s.peers, t) {
            lines.push("Peer Comparison: Ticker | Price | Change % | P/E Ratio".to_string());
            for p in &peers.peers {
                lines.push(format!(
                    "{} | {} | {}% | {}",
                    p.ticker,
                    p.last_price,
                    signed(p.change_percent),
                    p.pe_ratio
                ));
            }
        }
    }
    lines.join("\n")
}

/// CapIQ headlines per ticker.
#[must_use]
pub fn news(s: &DetailsSnapshot) -> String {
    let mut lines = vec!["CapIQ News".to_string()];
    for t in &s.project.tickers {
        lines.push(String::new());
        lines.push(format!("{t} CapIQ News"));
        match ready(&s.news, t).filter(|f| !f.news.is_empty()) {
            Some(feed) => {
                for a in &feed.news {
                    lines.push(format!(
                        "- {} ({}, {}, {})",
                        a.title,
                        a.source,
                        a.date.format("%Y-%m-%d"),
                        a.sentiment.as_str()
                    ));
                }
            }
            None => lines.push(format!("No CapIQ news available for {t}")),
        }
    }
    lines.join("\n")
}

/// AlphaSense expert calls per ticker.
#[must_use]
pub fn expert_calls(s: &DetailsSnapshot) -> String {
    let mut lines = vec!["Expert Calls from AlphaSense (Source: AlphaSense)".to_string()];
    for t in &s.project.tickers {
        lines.push(String::new());
        lines.push(format!("{t} Expert Calls"));
        match ready(&s.expert_calls, t).filter(|c| !c.expert_calls.is_empty()) {
            Some(list) => {
                for c in &list.expert_calls {
                    lines.push(format!("- {} (Date: {})", c.title, c.date));
                    lines.push(format!("  {}", c.summary));
                    lines.push(format!("  Participants: {}", c.participants.join(", ")));
                }
            }
            None => lines.push(format!("No expert calls available for {t}")),
        }
    }
    lines.join("\n")
}

/// AlphaSense documents per ticker.
#[must_use]
pub fn documents(s: &DetailsSnapshot) -> String {
    let mut lines = vec!["AlphaSense Documents".to_string()];
    for t in &s.project.tickers {
        lines.push(String::new());
        lines.push(format!("{t} AlphaSense Documents"));
        match ready(&s.documents, t).filter(|d| !d.documents.is_empty()) {
            Some(list) => {
                for d in &list.documents {
                    lines.push(format!("- {} [{}] (Date: {})", d.title, d.doc_type, d.date));
                    lines.push(format!("  {}", d.summary));
                    lines.push(format!("  Source: {}", d.source));
                }
            }
            None => lines.push(format!("No AlphaSense documents available for {t}")),
        }
    }
    lines.join("\n")
}

fn ready<'a, T>(map: &'a ResourceMap<T>, t: &Ticker) -> Option<&'a T> {
    map.get(t).and_then(Entry::ready)
}

fn join_tickers(tickers: &[Ticker]) -> String {
    tickers.iter().map(Ticker::as_str).collect::<Vec<_>>().join(", ")
}

/// Percentage with an explicit `+` for non-negative values.
#[must_use]
pub fn signed(pct: Decimal) -> String {
    if pct.is_sign_negative() {
        pct.to_string()
    } else {
        format!("+{pct}")
    }
}

/// Market cap in billions with two decimals, e.g. `$2800.00B`.
#[must_use]
pub fn billions(dollars: u64) -> String {
    let cents = u128::from(dollars) / 10_000_000;
    format!("${}.{:02}B", cents / 100, cents % 100)
}

/// Integer with comma thousands separators.
#[must_use]
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_formats() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(7_000_000), "7,000,000");
        assert_eq!(thousands(1_234_567_890), "1,234,567,890");
        assert_eq!(billions(2_800_000_000_000), "$2800.00B");
        assert_eq!(billions(1_234_567_890), "$1.23B");
        assert_eq!(signed(Decimal::new(125, 2)), "+1.25");
        assert_eq!(signed(Decimal::new(-50, 2)), "-0.50");
        assert_eq!(signed(Decimal::ZERO), "+0");
    }
}
