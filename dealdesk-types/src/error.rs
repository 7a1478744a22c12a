use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the dealdesk workspace.
///
/// This covers resource mismatches, argument validation errors, upstream-tagged
/// failures, not-found conditions for project records, and the aggregate raised
/// when every ticker of a project failed to load.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeskError {
    /// The requested resource is not served by the target connector.
    #[error("unsupported resource: {resource}")]
    Unsupported {
        /// Resource label describing what was requested (e.g. "live-quote").
        resource: String,
    },

    /// Issues with the returned or expected data (undecodable body, missing fields).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An upstream API call failed at the transport level.
    #[error("{upstream} failed: {msg}")]
    Upstream {
        /// Upstream (or connector) name that failed.
        upstream: String,
        /// Human-readable error message.
        msg: String,
    },

    /// An upstream API answered with a non-success status code.
    #[error("{upstream} responded with HTTP {status}")]
    Http {
        /// Upstream name that answered.
        upstream: String,
        /// HTTP status code.
        status: u16,
    },

    /// An individual upstream call exceeded the configured timeout.
    #[error("provider timed out: {resource} via {upstream}")]
    ProviderTimeout {
        /// Upstream name that timed out.
        upstream: String,
        /// Resource label (e.g. "financials", "news").
        resource: String,
    },

    /// A project, collaborator or symbol could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing record, e.g. "project abc123xyz".
        what: String,
    },

    /// Every ticker batch of a project failed; contains the individual failures.
    #[error(
        "Failed to fetch data for all tickers. Please check your API credentials or try again later."
    )]
    AllTickersFailed(Vec<DeskError>),

    /// The request was abandoned because its owner was torn down.
    #[error("request cancelled")]
    Cancelled,

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl DeskError {
    /// Helper: build an `Unsupported` error for a resource label.
    #[must_use]
    pub fn unsupported(resource: impl Into<String>) -> Self {
        Self::Unsupported {
            resource: resource.into(),
        }
    }

    /// Helper: build an `Upstream` error with the upstream name and message.
    pub fn upstream(upstream: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Upstream {
            upstream: upstream.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build an `Http` error for a non-success status.
    pub fn http(upstream: impl Into<String>, status: u16) -> Self {
        Self::Http {
            upstream: upstream.into(),
            status,
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing record.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `ProviderTimeout` error.
    pub fn provider_timeout(upstream: impl Into<String>, resource: impl Into<String>) -> Self {
        Self::ProviderTimeout {
            upstream: upstream.into(),
            resource: resource.into(),
        }
    }
}
