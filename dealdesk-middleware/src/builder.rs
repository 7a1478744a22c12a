//! Builder for composing connectors with middleware layers.
//!
//! # Middleware Ordering Convention
//!
//! Middleware layers form an "onion" around the raw connector:
//!
//! ```text
//! Gateway call
//!     ↓
//! Outermost Middleware (e.g., Timeout - bounds everything below it)
//!     ↓
//! Inner Middleware (e.g., Latency - sleeps before delegating)
//!     ↓
//! Raw Connector (e.g., CapIQ - makes the actual HTTP call)
//! ```
//!
//! The `layers` vector stores middleware in **outermost-first** order, and
//! `build()` applies them in reverse to construct the nesting.

use std::sync::Arc;
use std::time::Duration;

use dealdesk_core::connector::DeskConnector;
use dealdesk_core::{DelayConfig, Middleware};
use serde_json::json;

use crate::latency::LatencyMiddleware;
use crate::stack::{MiddlewareLayer, MiddlewareStack};
use crate::timeout::TimeoutMiddleware;

const LATENCY: &str = "LatencyMiddleware";
const TIMEOUT: &str = "TimeoutMiddleware";

/// Generic middleware builder for composing a connector with layered wrappers.
///
/// See [module-level documentation](self) for details on middleware ordering.
pub struct ConnectorBuilder {
    raw: Arc<dyn DeskConnector>,
    /// Middleware layers in outermost-first order.
    layers: Vec<Box<dyn Middleware>>,
}

impl ConnectorBuilder {
    /// Create a new builder from a raw, unwrapped connector.
    #[must_use]
    pub fn new(raw: Arc<dyn DeskConnector>) -> Self {
        Self {
            raw,
            layers: Vec::new(),
        }
    }

    /// Add or replace simulated latency.
    ///
    /// Latency sits innermost so an enclosing timeout also bounds the sleep.
    #[must_use]
    pub fn with_latency(mut self, delay: DelayConfig) -> Self {
        self.layers.retain(|m| m.name() != LATENCY);
        self.layers.push(Box::new(LatencyMiddleware::new(delay)));
        self
    }

    /// Add or replace the per-call timeout at the outermost position.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.layers.retain(|m| m.name() != TIMEOUT);
        self.layers.insert(0, Box::new(TimeoutMiddleware::new(timeout)));
        self
    }

    /// Export the current middleware stack configuration for inspection.
    ///
    /// The raw connector is appended as the innermost "layer" for observability.
    #[must_use]
    pub fn to_stack(&self) -> MiddlewareStack {
        let mut stack = MiddlewareStack::new();
        for layer in &self.layers {
            stack.push_inner(MiddlewareLayer::new(layer.name(), layer.config_json()));
        }
        stack.push_inner(MiddlewareLayer::new(
            "RawConnector",
            json!({ "name": self.raw.name() }),
        ));
        stack
    }

    /// Build the wrapped connector according to the captured stack.
    ///
    /// With `layers = [Timeout, Latency]` the result is `Timeout(Latency(Raw))`.
    #[must_use]
    pub fn build(self) -> Arc<dyn DeskConnector> {
        let mut acc: Arc<dyn DeskConnector> = Arc::clone(&self.raw);
        for m in self.layers.into_iter().rev() {
            acc = m.apply(acc);
        }
        acc
    }
}
