#![doc = include_str!("../README.md")]
//! dealdesk-middleware
//!
//! Re-exports for middleware wrappers.

mod builder;
mod latency;
mod stack;
mod timeout;

pub use crate::builder::ConnectorBuilder;
pub use crate::latency::{LatencyConnector, LatencyMiddleware};
pub use crate::stack::{MiddlewareLayer, MiddlewareStack};
pub use crate::timeout::{TimeoutConnector, TimeoutMiddleware};
