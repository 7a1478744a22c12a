//! Domain records plus re-exports of the foundational `dealdesk-types` items.
// Consolidated re-exports so downstream crates can depend on `dealdesk-core` only

pub use dealdesk_types::{
    DEFAULT_API_BASE, DelayConfig, DeskConfig, DeskError, FallbackPolicy, FallbackReason, Fetched,
    ProviderKey, Resource, RunEnvironment, Upstream, UpstreamConfig, env_keys,
};

pub use rust_decimal::Decimal;

mod market;
mod project;
mod research;
mod ticker;

pub use market::{
    AnalystRatings, FinancialData, FinancialStatements, LiveQuote, Peer, PeerComparison, Ratios,
};
pub use project::{
    Collaborator, CollaboratorId, NewCollaborator, NewProject, Project, ProjectId, ProjectUpdate,
};
pub use research::{
    Document, DocumentList, ExpertCall, ExpertCallList, NewsArticle, NewsFeed, Sentiment,
};
pub use ticker::{Ticker, parse_tickers};
