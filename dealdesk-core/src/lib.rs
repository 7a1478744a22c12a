//! dealdesk-core
//!
//! Core types, traits, and utilities shared across the dealdesk workspace.
//!
//! - `types`: domain records (tickers, projects, market and research data).
//! - `connector`: the `DeskConnector` trait and per-resource provider traits.
//! - `middleware`: the trait implemented by connector wrappers.
//! - `task`: owned handles for background refresh tasks.
//!
//! Async runtime (Tokio)
//! ---------------------
//! `task::TaskHandle` wraps `tokio::task::JoinHandle<()>` and cancels through a
//! `tokio_util::sync::CancellationToken`, so code that spawns refresh loops
//! must run under a Tokio 1.x runtime.
#![warn(missing_docs)]

/// Resource provider traits and the primary `DeskConnector` interface.
pub mod connector;
/// Middleware trait implemented by connector wrappers.
pub mod middleware;
/// Owned handles for spawned background tasks.
pub mod task;
pub mod types;

pub use async_trait::async_trait;
pub use connector::DeskConnector;
pub use middleware::Middleware;
pub use task::TaskHandle;
pub use types::*;
