//! dealdesk-upstream
//!
//! Connectors that implement `DeskConnector` over plain HTTP against the
//! proxied CapIQ and AlphaSense endpoints. Failures are reported as
//! `DeskError` values tagged with the connector name; falling back to
//! generated data is the gateway's job, not the connector's.
#![warn(missing_docs)]

mod alphasense;
mod capiq;
/// Shared JSON client and error normalization.
pub mod client;

pub use alphasense::AlphaSenseConnector;
pub use capiq::CapIqConnector;
pub use client::{UpstreamClient, normalize_error};
