//! dealdesk-proxy
//!
//! Reverse proxy used by the local dev server. Requests under
//! `/api/capiq/*` and `/api/alphasense/*` are forwarded to the configured
//! target origins with the prefix stripped and the `Host` header rewritten;
//! responses gain permissive CORS headers.
#![warn(missing_docs)]

mod config;
mod cors;
mod error;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::{Body, Bytes};
use axum::extract::{Request, State};
use axum::http::header::{CONNECTION, CONTENT_LENGTH, HOST, TRANSFER_ENCODING};
use axum::http::{HeaderMap, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use dealdesk_types::Upstream;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

pub use config::{DEFAULT_LISTEN_ADDR, ProxyConfig};
pub use cors::{ALLOW_HEADERS, ALLOW_METHODS, ALLOW_ORIGIN};
pub use error::ProxyError;

/// Largest request body forwarded upstream.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Upper bound on one round trip to a target host.
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

struct ProxyState {
    config: ProxyConfig,
    http: reqwest::Client,
}

/// Build the proxy router for `config`.
///
/// # Errors
/// Returns `Config` if the outbound HTTP client cannot be constructed.
pub fn router(config: ProxyConfig) -> Result<Router, ProxyError> {
    let http = reqwest::Client::builder()
        .timeout(UPSTREAM_TIMEOUT)
        .build()
        .map_err(|e| ProxyError::Config(format!("http client: {e}")))?;
    let state = Arc::new(ProxyState { config, http });

    Ok(Router::new()
        .route("/api/capiq", any(capiq))
        .route("/api/capiq/{*rest}", any(capiq))
        .route("/api/alphasense", any(alphasense))
        .route("/api/alphasense/{*rest}", any(alphasense))
        .with_state(state))
}

/// Serve `router` on `listener` until `shutdown` is cancelled.
///
/// # Errors
/// Returns the underlying I/O error if the server fails.
pub async fn serve(
    listener: TcpListener,
    router: Router,
    shutdown: CancellationToken,
) -> std::io::Result<()> {
    axum::serve(listener, router)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await
}

async fn capiq(State(state): State<Arc<ProxyState>>, req: Request) -> Response {
    forward(&state, Upstream::CapIq, req)
        .await
        .unwrap_or_else(IntoResponse::into_response)
}

async fn alphasense(State(state): State<Arc<ProxyState>>, req: Request) -> Response {
    forward(&state, Upstream::AlphaSense, req)
        .await
        .unwrap_or_else(IntoResponse::into_response)
}

async fn forward(
    state: &ProxyState,
    upstream: Upstream,
    req: Request,
) -> Result<Response, ProxyError> {
    if req.method() == Method::OPTIONS {
        return Ok(preflight());
    }

    let path_and_query = req
        .uri()
        .path_and_query()
        .map_or_else(|| req.uri().path().to_string(), ToString::to_string);
    let target = state
        .config
        .rewrite(upstream, &path_and_query)
        .ok_or_else(|| ProxyError::BadRequest(format!("cannot route {path_and_query}")))?;

    let (parts, body) = req.into_parts();
    let body = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| ProxyError::BadRequest(format!("request body: {e}")))?;

    tracing::debug!(
        upstream = upstream.as_str(),
        method = %parts.method,
        from = %path_and_query,
        to = %target,
        "proxying request"
    );

    let mut headers = parts.headers;
    strip_hop_headers(&mut headers);
    // reqwest derives Host from the target URL once the inbound one is gone
    headers.remove(HOST);

    let upstream_response = state
        .http
        .request(parts.method, target)
        .headers(headers)
        .body(body)
        .send()
        .await
        .map_err(|e| ProxyError::BadGateway {
            upstream: upstream.as_str(),
            msg: e.to_string(),
        })?;

    let status = upstream_response.status();
    let mut headers = upstream_response.headers().clone();
    let bytes: Bytes = upstream_response
        .bytes()
        .await
        .map_err(|e| ProxyError::BadGateway {
            upstream: upstream.as_str(),
            msg: e.to_string(),
        })?;
    tracing::debug!(upstream = upstream.as_str(), status = status.as_u16(), "upstream answered");

    strip_hop_headers(&mut headers);
    cors::inject(&mut headers);

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}

fn preflight() -> Response {
    let mut response = StatusCode::NO_CONTENT.into_response();
    cors::inject(response.headers_mut());
    response
}

fn strip_hop_headers(headers: &mut HeaderMap) {
    headers.remove(CONNECTION);
    headers.remove(TRANSFER_ENCODING);
    headers.remove(CONTENT_LENGTH);
    headers.remove("keep-alive");
}
