use std::sync::Arc;
use std::time::Duration;

use dealdesk_core::connector::DeskConnector;
use dealdesk_core::{DeskError, Middleware, Resource, Ticker};

/// Connector wrapper that bounds every call with a deadline.
///
/// A call that exceeds the deadline is dropped and reported as
/// `DeskError::ProviderTimeout` tagged with the inner connector's name.
pub struct TimeoutConnector {
    inner: Arc<dyn DeskConnector>,
    timeout: Duration,
}

impl TimeoutConnector {
    /// Wrap `inner` with a per-call deadline.
    #[must_use]
    pub fn new(inner: Arc<dyn DeskConnector>, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    async fn around<T, F>(&self, resource: Resource, ticker: &Ticker, fut: F) -> Result<T, DeskError>
    where
        F: Future<Output = Result<T, DeskError>> + Send,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(res) => res,
            Err(_) => {
                tracing::warn!(
                    connector = self.inner.name(),
                    resource = resource.as_str(),
                    ticker = ticker.as_str(),
                    timeout_ms = u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
                    "upstream call timed out"
                );
                Err(DeskError::provider_timeout(self.inner.name(), resource.as_str()))
            }
        }
    }
}

impl DeskConnector for TimeoutConnector {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn vendor(&self) -> &'static str {
        self.inner.vendor()
    }

    dealdesk_core::delegate_accessors!(inner);
}

dealdesk_core::delegate_providers!(TimeoutConnector, inner);

/// Middleware config for constructing a [`TimeoutConnector`].
pub struct TimeoutMiddleware {
    pub timeout: Duration,
}

impl TimeoutMiddleware {
    #[must_use]
    pub const fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Middleware for TimeoutMiddleware {
    fn apply(self: Box<Self>, inner: Arc<dyn DeskConnector>) -> Arc<dyn DeskConnector> {
        Arc::new(TimeoutConnector::new(inner, self.timeout))
    }

    fn name(&self) -> &'static str {
        "TimeoutMiddleware"
    }

    fn config_json(&self) -> serde_json::Value {
        serde_json::json!({ "timeout_ms": self.timeout.as_millis() })
    }
}
