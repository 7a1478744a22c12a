use std::time::Duration;

use async_trait::async_trait;
use dealdesk_core::connector::{
    DeskConnector, DocumentsProvider, ExpertCallsProvider, ProviderKey,
};
use dealdesk_core::{
    DeskError, DocumentList, ExpertCallList, Resource, Ticker, Upstream, UpstreamConfig,
};

use crate::client::UpstreamClient;

const RESULT_LIMIT: &str = "10";
const DOC_TYPES: &str = "FILING,RESEARCH";

/// Connector for AlphaSense search endpoints.
///
/// Both resources are keyword searches on the ticker symbol, capped at ten
/// results.
#[derive(Debug, Clone)]
pub struct AlphaSenseConnector {
    client: UpstreamClient,
}

impl AlphaSenseConnector {
    /// Static connector key used in logs and builder configuration.
    pub const KEY: ProviderKey = ProviderKey::new("dealdesk-alphasense");

    /// Build from explicit settings.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `cfg` targets another upstream or its base URL
    /// does not parse.
    pub fn from_config(cfg: &UpstreamConfig, timeout: Duration) -> Result<Self, DeskError> {
        if cfg.upstream != Upstream::AlphaSense {
            return Err(DeskError::InvalidArg(format!(
                "expected alphasense settings, got {}",
                cfg.upstream
            )));
        }
        Ok(Self {
            client: UpstreamClient::new(Self::KEY.as_str(), cfg, timeout)?,
        })
    }

    /// Build from `DEALDESK_API_BASE` and `DEALDESK_ALPHASENSE_API_KEY`.
    ///
    /// # Errors
    /// Same as [`AlphaSenseConnector::from_config`].
    pub fn from_env(timeout: Duration) -> Result<Self, DeskError> {
        Self::from_config(&UpstreamConfig::from_env(Upstream::AlphaSense), timeout)
    }
}

impl DeskConnector for AlphaSenseConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "AlphaSense"
    }

    fn as_expert_calls_provider(&self) -> Option<&dyn ExpertCallsProvider> {
        Some(self as &dyn ExpertCallsProvider)
    }
    fn as_documents_provider(&self) -> Option<&dyn DocumentsProvider> {
        Some(self as &dyn DocumentsProvider)
    }
}

#[async_trait]
impl ExpertCallsProvider for AlphaSenseConnector {
    async fn expert_calls(&self, ticker: &Ticker) -> Result<ExpertCallList, DeskError> {
        self.client
            .get_json(
                Resource::ExpertCalls,
                ticker,
                "/v1/expert-calls",
                &[("query", ticker.as_str()), ("limit", RESULT_LIMIT)],
            )
            .await
    }
}

#[async_trait]
impl DocumentsProvider for AlphaSenseConnector {
    async fn documents(&self, ticker: &Ticker) -> Result<DocumentList, DeskError> {
        self.client
            .get_json(
                Resource::Documents,
                ticker,
                "/v1/documents",
                &[
                    ("query", ticker.as_str()),
                    ("limit", RESULT_LIMIT),
                    ("docTypes", DOC_TYPES),
                ],
            )
            .await
    }
}
