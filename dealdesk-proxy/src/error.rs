use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

use crate::cors;

/// Failures raised while proxying a request.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// Invalid listen address or target URL.
    #[error("invalid proxy configuration: {0}")]
    Config(String),

    /// The incoming request could not be read or rewritten.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// The target host could not be reached or its answer could not be read.
    #[error("{upstream} unreachable: {msg}")]
    BadGateway {
        /// Upstream label (`capiq` or `alphasense`).
        upstream: &'static str,
        /// Transport error text.
        msg: String,
    },
}

impl ProxyError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::BadGateway { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(error = %self, status = status.as_u16(), "proxy request failed");
        }
        let mut response = (status, Json(json!({ "error": self.to_string() }))).into_response();
        cors::inject(response.headers_mut());
        response
    }
}
