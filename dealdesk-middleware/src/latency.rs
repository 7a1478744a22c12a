use std::sync::Arc;
use std::time::Duration;

use dealdesk_core::connector::DeskConnector;
use dealdesk_core::{DelayConfig, DeskError, Middleware, Resource, Ticker};
use rand::Rng;

/// Connector wrapper that sleeps for a random duration before every call.
pub struct LatencyConnector {
    inner: Arc<dyn DeskConnector>,
    delay: DelayConfig,
}

impl LatencyConnector {
    /// Wrap `inner`, delaying each call by a duration drawn from `delay`.
    #[must_use]
    pub fn new(inner: Arc<dyn DeskConnector>, delay: DelayConfig) -> Self {
        Self { inner, delay }
    }

    fn sample(&self) -> Duration {
        let min = u64::try_from(self.delay.min.as_millis()).unwrap_or(u64::MAX);
        let max = u64::try_from(self.delay.max.as_millis()).unwrap_or(u64::MAX);
        if max <= min {
            return self.delay.min;
        }
        Duration::from_millis(rand::rng().random_range(min..=max))
    }

    async fn around<T, F>(&self, resource: Resource, ticker: &Ticker, fut: F) -> Result<T, DeskError>
    where
        F: Future<Output = Result<T, DeskError>> + Send,
    {
        let pause = self.sample();
        tracing::trace!(
            connector = self.inner.name(),
            resource = resource.as_str(),
            ticker = ticker.as_str(),
            delay_ms = u64::try_from(pause.as_millis()).unwrap_or(u64::MAX),
            "simulating latency"
        );
        tokio::time::sleep(pause).await;
        fut.await
    }
}

impl DeskConnector for LatencyConnector {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn vendor(&self) -> &'static str {
        self.inner.vendor()
    }

    dealdesk_core::delegate_accessors!(inner);
}

dealdesk_core::delegate_providers!(LatencyConnector, inner);

/// Middleware config for constructing a [`LatencyConnector`].
pub struct LatencyMiddleware {
    /// Range the pause is drawn from.
    pub delay: DelayConfig,
}

impl LatencyMiddleware {
    /// Create a latency layer drawing pauses from `delay`.
    #[must_use]
    pub const fn new(delay: DelayConfig) -> Self {
        Self { delay }
    }
}

impl Middleware for LatencyMiddleware {
    fn apply(self: Box<Self>, inner: Arc<dyn DeskConnector>) -> Arc<dyn DeskConnector> {
        Arc::new(LatencyConnector::new(inner, self.delay))
    }

    fn name(&self) -> &'static str {
        "LatencyMiddleware"
    }

    fn config_json(&self) -> serde_json::Value {
        serde_json::json!({
            "min_ms": self.delay.min.as_millis(),
            "max_ms": self.delay.max.as_millis(),
        })
    }
}
