//! Dealdesk serves per-ticker research data to a project dashboard for deal teams.
//!
//! Overview
//! - `Desk` is the gateway: seven per-ticker resources (financials, live quote,
//!   peers, analyst ratings, news, expert calls, documents) served by the
//!   CapIQ and AlphaSense connectors from `dealdesk_upstream`.
//! - Every call returns a `Fetched<T>` carrying its provenance: `Live` data,
//!   generated `Fallback` data, or an `Error` under the strict policy.
//! - `ProjectStore` keeps the session's projects in memory.
//! - `ProjectDetails` aggregates all seven resources over a project's tickers
//!   and keeps the live quotes fresh on a timer.
//! - `view` holds headless dashboard state and plain-text renderers.
//!
//! Key behaviors and trade-offs
//! - Fallback policy:
//!   - `Mock` (default): a failed live call is logged and replaced by generated
//!     data; callers never see per-ticker errors.
//!   - `Strict`: live failures surface as `Fetched::Error`, which marks the
//!     whole ticker as failed in an aggregation batch.
//! - Mock mode skips the network entirely. With delay simulation on, generated
//!   answers arrive after a random pause so loading states stay visible.
//! - Aggregation is all-or-nothing per batch: a slow ticker stalls the commit,
//!   but the maps never show a half-populated batch.
//!
//! Examples
//! Building a gateway over scripted connectors:
//! ```rust,ignore
//! use std::sync::Arc;
//! use dealdesk::{Desk, FallbackPolicy};
//!
//! let desk = Desk::builder()
//!     .with_connector(Arc::new(capiq))
//!     .with_connector(Arc::new(alphasense))
//!     .fallback_policy(FallbackPolicy::Strict)
//!     .build()?;
//! let quote = desk.get_live_quote(&dealdesk::Ticker::new("AAPL")?).await;
//! ```
//!
//! Opening a project and stopping its refresh loop:
//! ```rust,ignore
//! let project = desk.store().get_projects().remove(0);
//! let details = dealdesk::ProjectDetails::open(Arc::new(desk), project).await;
//! let snapshot = details.snapshot().await;
//! details.close().await;
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
mod gateway;

/// Aggregated ticker data for an opened project.
pub mod details;
/// Session-scoped project list.
pub mod store;
/// Headless view state and text renderers for the dashboard screens.
pub mod view;

pub use core::{Desk, DeskBuilder};
pub use details::{DetailsSnapshot, Entry, ProjectDetails, ResourceMap, Tab};
pub use store::ProjectStore;

pub use dealdesk_middleware::{ConnectorBuilder, LatencyMiddleware, TimeoutMiddleware};

// Re-export core types for convenience
pub use dealdesk_core::{
    AnalystRatings,
    Collaborator,
    CollaboratorId,
    Decimal,
    DelayConfig,
    DeskConfig,
    DeskConnector,
    DeskError,
    Document,
    DocumentList,
    ExpertCall,
    ExpertCallList,
    FallbackPolicy,
    FallbackReason,
    Fetched,
    FinancialData,
    LiveQuote,
    NewCollaborator,
    NewProject,
    NewsArticle,
    NewsFeed,
    Peer,
    PeerComparison,
    Project,
    ProjectId,
    ProjectUpdate,
    Resource,
    Sentiment,
    Ticker,
    Upstream,
    UpstreamConfig,
};
