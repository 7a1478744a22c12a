use std::sync::Arc;
use std::time::Duration;

use dealdesk_core::connector::DeskConnector;
use dealdesk_core::{
    DelayConfig, DeskConfig, DeskError, FallbackPolicy, FallbackReason, Fetched, Resource, Ticker,
    Upstream, UpstreamConfig,
};
use dealdesk_middleware::ConnectorBuilder;
use dealdesk_mock::MockConnector;
use dealdesk_upstream::{AlphaSenseConnector, CapIqConnector};
use futures::future::BoxFuture;

use crate::store::ProjectStore;

/// Gateway that serves per-ticker research data and owns the project store.
///
/// Each resource call goes to the first live connector that advertises it.
/// When mock mode is on, or the live call fails under the default policy, the
/// answer comes from the fallback connector instead and is tagged as such.
pub struct Desk {
    pub(crate) live: Vec<Arc<dyn DeskConnector>>,
    pub(crate) fallback: Arc<dyn DeskConnector>,
    pub(crate) cfg: DeskConfig,
    pub(crate) store: Arc<ProjectStore>,
}

/// Builder for constructing a [`Desk`] with custom configuration.
pub struct DeskBuilder {
    connectors: Vec<Arc<dyn DeskConnector>>,
    fallback: Option<Arc<dyn DeskConnector>>,
    store: Option<Arc<ProjectStore>>,
    cfg: DeskConfig,
}

impl Default for DeskBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DeskBuilder {
    /// Start with default configuration, no live connectors and the plain
    /// generator as fallback.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            fallback: None,
            store: None,
            cfg: DeskConfig::default(),
        }
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: DeskConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Register a live connector. Earlier registrations win when two
    /// connectors serve the same resource.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn DeskConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Source of generated data; defaults to [`MockConnector::new`].
    #[must_use]
    pub fn fallback_connector(mut self, c: Arc<dyn DeskConnector>) -> Self {
        self.fallback = Some(c);
        self
    }

    /// Share an existing project store; defaults to the demo sample data.
    #[must_use]
    pub fn store(mut self, store: Arc<ProjectStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Skip live calls and answer every request with generated data.
    #[must_use]
    pub const fn mock_mode(mut self, yes: bool) -> Self {
        self.cfg.mock_mode = yes;
        self
    }

    /// Delay generated responses to mimic network latency.
    #[must_use]
    pub const fn simulate_delay(mut self, yes: bool) -> Self {
        self.cfg.simulate_delay = yes;
        self
    }

    /// Bounds of the simulated delay.
    #[must_use]
    pub const fn delay_range(mut self, min: Duration, max: Duration) -> Self {
        self.cfg.delay = DelayConfig { min, max };
        self
    }

    /// Behavior when a live call fails.
    #[must_use]
    pub const fn fallback_policy(mut self, policy: FallbackPolicy) -> Self {
        self.cfg.fallback_policy = policy;
        self
    }

    /// Timeout applied to every live connector call.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = timeout;
        self
    }

    /// Period of the live-quote refresh on opened project details.
    #[must_use]
    pub const fn live_refresh_interval(mut self, period: Duration) -> Self {
        self.cfg.live_refresh_interval = period;
        self
    }

    /// Build the gateway.
    ///
    /// Live connectors are wrapped in a per-call timeout; the fallback gains a
    /// latency layer when delay simulation is on.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the delay bounds are inverted, a duration is
    /// zero, or no live connector is registered outside mock mode.
    pub fn build(self) -> Result<Desk, DeskError> {
        let cfg = self.cfg;
        if cfg.delay.min > cfg.delay.max {
            return Err(DeskError::InvalidArg(format!(
                "delay range is inverted: {:?} > {:?}",
                cfg.delay.min, cfg.delay.max
            )));
        }
        if cfg.request_timeout.is_zero() || cfg.live_refresh_interval.is_zero() {
            return Err(DeskError::InvalidArg(
                "request timeout and refresh interval must be non-zero".to_string(),
            ));
        }
        if self.connectors.is_empty() && !cfg.mock_mode {
            return Err(DeskError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...) or enable mock_mode"
                    .to_string(),
            ));
        }

        let live = self
            .connectors
            .into_iter()
            .map(|raw| {
                let builder = ConnectorBuilder::new(raw).with_timeout(cfg.request_timeout);
                tracing::debug!(layers = ?builder.to_stack().names(), "live connector assembled");
                builder.build()
            })
            .collect();

        let raw_fallback = self
            .fallback
            .unwrap_or_else(|| Arc::new(MockConnector::new()) as Arc<dyn DeskConnector>);
        let fallback = if cfg.simulate_delay {
            ConnectorBuilder::new(raw_fallback)
                .with_latency(cfg.delay)
                .build()
        } else {
            raw_fallback
        };

        Ok(Desk {
            live,
            fallback,
            cfg,
            store: self
                .store
                .unwrap_or_else(|| Arc::new(ProjectStore::with_sample_data())),
        })
    }
}

impl Desk {
    /// Start building a new `Desk`.
    #[must_use]
    pub fn builder() -> DeskBuilder {
        DeskBuilder::new()
    }

    /// Gateway configured from the process environment, with the CapIQ and
    /// AlphaSense connectors pointed at `DEALDESK_API_BASE`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the configured base URL does not parse.
    pub fn from_env() -> Result<Self, DeskError> {
        Self::with_upstreams(
            DeskConfig::from_env(),
            &UpstreamConfig::from_env(Upstream::CapIq),
            &UpstreamConfig::from_env(Upstream::AlphaSense),
        )
    }

    /// Gateway with the two HTTP upstreams built from explicit settings.
    ///
    /// # Errors
    /// Returns `InvalidArg` if either upstream configuration is invalid.
    pub fn with_upstreams(
        cfg: DeskConfig,
        capiq: &UpstreamConfig,
        alphasense: &UpstreamConfig,
    ) -> Result<Self, DeskError> {
        let timeout = cfg.request_timeout;
        Self::builder()
            .config(cfg)
            .with_connector(Arc::new(CapIqConnector::from_config(capiq, timeout)?))
            .with_connector(Arc::new(AlphaSenseConnector::from_config(
                alphasense, timeout,
            )?))
            .build()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &DeskConfig {
        &self.cfg
    }

    /// Shared project store.
    #[must_use]
    pub fn store(&self) -> &Arc<ProjectStore> {
        &self.store
    }

    fn live_for(&self, resource: Resource) -> Option<&Arc<dyn DeskConnector>> {
        self.live.iter().find(|c| c.supports(resource))
    }

    /// Resolve one resource for one ticker: live first, then the fallback.
    ///
    /// `call` returns `None` when the given connector lacks the resource.
    pub(crate) async fn fetch_single<T, F>(
        &self,
        resource: Resource,
        ticker: &Ticker,
        call: F,
    ) -> Fetched<T>
    where
        F: for<'a> Fn(&'a dyn DeskConnector, &'a Ticker) -> Option<BoxFuture<'a, Result<T, DeskError>>>,
    {
        if self.cfg.mock_mode {
            return match self.generated(resource, ticker, &call).await {
                Ok(data) => Fetched::Fallback {
                    data,
                    reason: FallbackReason::MockMode,
                },
                Err(e) => Fetched::Error(e),
            };
        }

        let live = match self.live_for(resource) {
            Some(c) => match call(c.as_ref(), ticker) {
                Some(fut) => fut.await,
                None => Err(DeskError::unsupported(resource.as_str())),
            },
            None => Err(DeskError::unsupported(resource.as_str())),
        };

        let error = match live {
            Ok(data) => return Fetched::Live(data),
            Err(e) => e,
        };

        match self.cfg.fallback_policy {
            FallbackPolicy::Strict => {
                tracing::warn!(
                    upstream = %resource.upstream(),
                    %resource,
                    %ticker,
                    error = %error,
                    "live fetch failed"
                );
                Fetched::Error(error)
            }
            FallbackPolicy::Mock => {
                tracing::warn!(
                    upstream = %resource.upstream(),
                    %resource,
                    %ticker,
                    error = %error,
                    "live fetch failed; serving generated data"
                );
                match self.generated(resource, ticker, &call).await {
                    Ok(data) => Fetched::Fallback {
                        data,
                        reason: FallbackReason::Upstream(error),
                    },
                    Err(_) => Fetched::Error(error),
                }
            }
        }
    }

    async fn generated<T, F>(&self, resource: Resource, ticker: &Ticker, call: &F) -> Result<T, DeskError>
    where
        F: for<'a> Fn(&'a dyn DeskConnector, &'a Ticker) -> Option<BoxFuture<'a, Result<T, DeskError>>>,
    {
        match call(self.fallback.as_ref(), ticker) {
            Some(fut) => fut.await,
            None => Err(DeskError::unsupported(resource.as_str())),
        }
    }
}
