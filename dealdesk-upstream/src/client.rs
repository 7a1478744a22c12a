//! Thin JSON-over-HTTP client shared by both upstream connectors.

use std::time::Duration;

use dealdesk_core::{DeskError, Resource, Ticker, Upstream, UpstreamConfig};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use url::Url;

/// HTTP client bound to one upstream's proxied base URL.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    name: &'static str,
    upstream: Upstream,
    base: Url,
    http: reqwest::Client,
}

impl UpstreamClient {
    /// Build a client for `cfg`, bounding every request by `timeout`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the base URL does not parse or the API key is
    /// not a valid header value, and `Upstream` if the HTTP client cannot be
    /// constructed.
    pub fn new(
        name: &'static str,
        cfg: &UpstreamConfig,
        timeout: Duration,
    ) -> Result<Self, DeskError> {
        let base = Url::parse(cfg.base_url.trim_end_matches('/')).map_err(|e| {
            DeskError::InvalidArg(format!("{} base url {:?}: {e}", cfg.upstream, cfg.base_url))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(key) = cfg.api_key.as_deref() {
            let mut bearer = HeaderValue::from_str(&format!("Bearer {key}"))
                .map_err(|_| DeskError::InvalidArg(format!("{} api key", cfg.upstream)))?;
            bearer.set_sensitive(true);
            headers.insert(AUTHORIZATION, bearer);
        }

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| DeskError::upstream(name, format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            name,
            upstream: cfg.upstream,
            base,
            http,
        })
    }

    /// Upstream this client talks to.
    #[must_use]
    pub const fn upstream(&self) -> Upstream {
        self.upstream
    }

    /// Base URL including the proxy prefix.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base
    }

    /// Resolve `path` (absolute, e.g. `/v1/documents`) against the base URL and
    /// append `query`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the joined URL does not parse.
    pub fn url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, DeskError> {
        let joined = format!("{}{}", self.base.as_str().trim_end_matches('/'), path);
        let mut url = Url::parse(&joined)
            .map_err(|e| DeskError::InvalidArg(format!("request url {joined:?}: {e}")))?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// GET `path` and decode the JSON body into `T`.
    ///
    /// # Errors
    /// See [`normalize_error`] for how failures are classified.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        resource: Resource,
        ticker: &Ticker,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, DeskError> {
        let url = self.url(path, query)?;
        tracing::debug!(upstream = self.name, %resource, %ticker, %url, "upstream request");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_error(&e, resource))?;

        let status = response.status();
        if !status.is_success() {
            return Err(normalize_error(
                DeskError::http(self.name, status.as_u16()),
                &format!("{resource} for {ticker}"),
            ));
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(&e, resource))?;
        serde_json::from_str(&body).map_err(|e| {
            DeskError::Data(format!("{}: undecodable {resource} body: {e}", self.name))
        })
    }

    fn transport_error(&self, e: &reqwest::Error, resource: Resource) -> DeskError {
        if e.is_timeout() {
            DeskError::provider_timeout(self.name, resource.as_str())
        } else {
            normalize_error(DeskError::upstream(self.name, e.to_string()), resource.as_str())
        }
    }
}

fn looks_like_not_found(msg: &str) -> bool {
    let m = msg.to_ascii_lowercase();
    m.contains("not found") || m.contains("no data") || m.contains("unknown symbol")
}

/// Fold upstream failures that mean "no such company" into `NotFound`.
///
/// A 404 status or an upstream message that reads like a missing record maps
/// to `NotFound { what }`; everything else passes through unchanged.
#[must_use]
pub fn normalize_error(e: DeskError, what: &str) -> DeskError {
    match e {
        DeskError::Http { status: 404, .. } => DeskError::not_found(what),
        DeskError::Upstream { upstream, msg } => {
            if looks_like_not_found(&msg) {
                DeskError::not_found(what)
            } else {
                DeskError::Upstream { upstream, msg }
            }
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> UpstreamClient {
        let cfg = UpstreamConfig {
            upstream: Upstream::AlphaSense,
            base_url: base.to_string(),
            api_key: None,
        };
        UpstreamClient::new("test", &cfg, Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn url_keeps_proxy_prefix_and_encodes_query() {
        let c = client("http://localhost:3000/api/alphasense/");
        let url = c
            .url(
                "/v1/documents",
                &[("query", "BRK.B"), ("docTypes", "FILING,RESEARCH")],
            )
            .unwrap();
        assert_eq!(url.path(), "/api/alphasense/v1/documents");
        assert_eq!(url.query(), Some("query=BRK.B&docTypes=FILING%2CRESEARCH"));
    }

    #[test]
    fn rejects_unparseable_base() {
        let cfg = UpstreamConfig {
            upstream: Upstream::CapIq,
            base_url: "not a url".into(),
            api_key: None,
        };
        let err = UpstreamClient::new("test", &cfg, Duration::from_secs(1)).unwrap_err();
        assert!(matches!(err, DeskError::InvalidArg(_)));
    }

    #[test]
    fn normalize_maps_missing_records() {
        assert!(matches!(
            normalize_error(DeskError::http("capiq", 404), "news for ZZZ"),
            DeskError::NotFound { .. }
        ));
        assert!(matches!(
            normalize_error(DeskError::upstream("capiq", "Unknown symbol ZZZ"), "quote"),
            DeskError::NotFound { .. }
        ));
        assert_eq!(
            normalize_error(DeskError::http("capiq", 500), "quote"),
            DeskError::http("capiq", 500)
        );
        assert_eq!(
            normalize_error(DeskError::upstream("capiq", "connection reset"), "quote"),
            DeskError::upstream("capiq", "connection reset")
        );
    }
}
