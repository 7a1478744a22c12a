//! News, expert-call and document records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Ticker;

/// Tone attached to an article, call or document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// Favourable.
    Positive,
    /// Neither.
    Neutral,
    /// Unfavourable.
    Negative,
}

impl Sentiment {
    /// Lowercase label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }
}

/// Recent articles about one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsFeed {
    /// Subject company.
    pub ticker: Ticker,
    /// Articles, newest first.
    pub news: Vec<NewsArticle>,
}

/// A single news article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    /// Stable identifier.
    pub id: String,
    /// Headline or title.
    pub title: String,
    /// Publisher.
    pub source: String,
    /// Publication time.
    pub date: DateTime<Utc>,
    /// Link to the full text.
    pub url: String,
    /// Overall tone.
    pub sentiment: Sentiment,
}

/// Expert call transcripts for one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpertCallList {
    /// Subject company.
    pub ticker: Ticker,
    /// Calls, newest first.
    pub expert_calls: Vec<ExpertCall>,
}

/// A single expert or management call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpertCall {
    /// Stable identifier.
    pub id: String,
    /// Headline or title.
    pub title: String,
    /// Calendar date.
    pub date: NaiveDate,
    /// Roles on the call.
    pub participants: Vec<String>,
    /// Short abstract.
    pub summary: String,
    /// Transcript text.
    pub transcript: String,
    /// Overall tone.
    pub sentiment: Sentiment,
    /// Takeaways worth surfacing.
    pub key_insights: Vec<String>,
    /// Link to the recording.
    pub audio_url: String,
}

/// Filings, reports and company materials for one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentList {
    /// Subject company.
    pub ticker: Ticker,
    /// Documents, newest first.
    pub documents: Vec<Document>,
}

/// A single research document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Stable identifier.
    pub id: String,
    /// Headline or title.
    pub title: String,
    /// Calendar date.
    pub date: NaiveDate,
    /// Document category, e.g. "SEC Filing".
    #[serde(rename = "type")]
    pub doc_type: String,
    /// Publisher.
    pub source: String,
    /// Short abstract.
    pub summary: String,
    /// Link to the full text.
    pub url: String,
    /// Overall tone.
    pub sentiment: Sentiment,
    /// Takeaways worth surfacing.
    pub key_insights: Vec<String>,
}
