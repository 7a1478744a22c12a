use chrono::{DateTime, Duration, Utc};
use dealdesk_core::{
    Document, DocumentList, ExpertCall, ExpertCallList, NewsArticle, NewsFeed, Ticker,
};
use rand::Rng;

use super::{company_name, sentiment};

const NEWS_SOURCES: [&str; 5] = [
    "Wall Street Journal",
    "Bloomberg",
    "CNBC",
    "Reuters",
    "Financial Times",
];

const CALL_TYPES: [&str; 5] = [
    "Earnings Call",
    "Analyst Day",
    "Industry Conference",
    "Investor Presentation",
    "Product Launch Event",
];

const CALL_ROLES: [&str; 5] = ["CEO", "CFO", "Head of Product", "Head of IR", "CTO"];

const DOC_TYPES: [(&str, &str); 5] = [
    ("SEC Filing", "SEC EDGAR"),
    ("Research Report", "Morgan Stanley"),
    ("Company Materials", "Company Website"),
    ("Press Release", "PR Newswire"),
    ("Investor Presentation", "Investor Relations"),
];

const DOC_INSIGHTS: [&str; 3] = [
    "Revenue growth across all segments",
    "Margin improvement initiatives showing results",
    "International expansion progressing on schedule",
];

fn days_ago(now: DateTime<Utc>, days: i64) -> DateTime<Utc> {
    now - Duration::days(days)
}

/// Five headlines from five outlets, dated 1, 3, 5, 7 and 9 days ago.
pub fn news<R: Rng + ?Sized>(rng: &mut R, ticker: &Ticker, now: DateTime<Utc>) -> NewsFeed {
    let name = company_name(ticker);
    let headlines = [
        format!("{name} Reports Strong Quarterly Earnings"),
        format!("{name} Announces New Product Line"),
        format!("Analysts Upgrade {name}"),
        format!("{name} Expands into New Markets"),
        format!("{name} CEO Discusses Future Growth"),
    ];
    let news = headlines
        .into_iter()
        .zip(NEWS_SOURCES)
        .zip(0_i64..)
        .map(|((title, source), i)| NewsArticle {
            id: format!("{ticker}-news-{}", i + 1),
            title,
            source: source.to_string(),
            date: days_ago(now, i * 2 + 1),
            url: "#".to_string(),
            sentiment: sentiment(rng),
        })
        .collect();
    NewsFeed {
        ticker: ticker.clone(),
        news,
    }
}

/// Five management calls spaced 30 days apart, each with 2 to 4 participants.
pub fn expert_calls<R: Rng + ?Sized>(
    rng: &mut R,
    ticker: &Ticker,
    now: DateTime<Utc>,
) -> ExpertCallList {
    let name = company_name(ticker);
    let expert_calls = CALL_TYPES
        .iter()
        .zip(0_i64..)
        .map(|(kind, i)| {
            let participants = rng.random_range(2..=4);
            ExpertCall {
                id: format!("{ticker}-call-{}", i + 1),
                title: format!("{name} {kind}"),
                date: days_ago(now, i * 30 + 1).date_naive(),
                participants: CALL_ROLES[..participants]
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
                summary: format!(
                    "{name} {kind} discussing quarterly performance and strategic initiatives."
                ),
                transcript: format!("This is a sample transcript of the {kind} for {name}."),
                sentiment: sentiment(rng),
                key_insights: vec![
                    format!("{name} reported strong growth in key markets"),
                    "New product roadmap to be implemented in Q4".to_string(),
                    "Challenges in supply chain being addressed through strategic partnerships"
                        .to_string(),
                ],
                audio_url: "#".to_string(),
            }
        })
        .collect();
    ExpertCallList {
        ticker: ticker.clone(),
        expert_calls,
    }
}

/// Five documents of distinct types, spaced 45 days apart.
pub fn documents<R: Rng + ?Sized>(
    rng: &mut R,
    ticker: &Ticker,
    now: DateTime<Utc>,
) -> DocumentList {
    let documents = DOC_TYPES
        .iter()
        .zip(0_i64..)
        .map(|((doc_type, source), i)| Document {
            id: format!("{ticker}-doc-{}", i + 1),
            title: format!("{ticker} {doc_type}"),
            date: days_ago(now, i * 45 + 1).date_naive(),
            doc_type: (*doc_type).to_string(),
            source: (*source).to_string(),
            summary: format!(
                "{doc_type} for {ticker} covering recent business activities and financial results."
            ),
            url: "#".to_string(),
            sentiment: sentiment(rng),
            key_insights: DOC_INSIGHTS.iter().map(ToString::to_string).collect(),
        })
        .collect();
    DocumentList {
        ticker: ticker.clone(),
        documents,
    }
}
