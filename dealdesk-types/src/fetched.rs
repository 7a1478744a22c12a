//! Provenance-tagged outcome of a single resource fetch.

use serde::{Deserialize, Serialize};

use crate::error::DeskError;

/// Why generated data was returned in place of a live response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "error", rename_all = "camelCase")]
pub enum FallbackReason {
    /// Mock mode is enabled; no live call was attempted.
    MockMode,
    /// The live call failed with the contained error.
    Upstream(DeskError),
}

/// Outcome of one per-ticker resource fetch.
///
/// Under the default fallback policy a gateway call only yields `Live` or
/// `Fallback`; `Error` appears when the policy is strict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", content = "payload", rename_all = "camelCase")]
pub enum Fetched<T> {
    /// Data decoded from the upstream response.
    Live(T),
    /// Generated data standing in for a live response.
    Fallback {
        /// The generated record.
        data: T,
        /// What caused the substitution.
        reason: FallbackReason,
    },
    /// No data is available.
    Error(DeskError),
}

impl<T> Fetched<T> {
    /// Borrow the record, whether live or generated.
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Live(data) | Self::Fallback { data, .. } => Some(data),
            Self::Error(_) => None,
        }
    }

    /// Take the record, whether live or generated.
    pub fn into_data(self) -> Option<T> {
        match self {
            Self::Live(data) | Self::Fallback { data, .. } => Some(data),
            Self::Error(_) => None,
        }
    }

    /// Convert into a `Result`, discarding provenance.
    ///
    /// # Errors
    /// Returns the contained error for `Fetched::Error`.
    pub fn into_result(self) -> Result<T, DeskError> {
        match self {
            Self::Live(data) | Self::Fallback { data, .. } => Ok(data),
            Self::Error(e) => Err(e),
        }
    }

    /// The error for `Fetched::Error`.
    pub const fn error(&self) -> Option<&DeskError> {
        match self {
            Self::Error(e) => Some(e),
            _ => None,
        }
    }

    /// True when the record came from the upstream.
    pub const fn is_live(&self) -> bool {
        matches!(self, Self::Live(_))
    }

    /// True when the record was generated.
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    /// True when no record is available.
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Transform the record, keeping provenance.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fetched<U> {
        match self {
            Self::Live(data) => Fetched::Live(f(data)),
            Self::Fallback { data, reason } => Fetched::Fallback {
                data: f(data),
                reason,
            },
            Self::Error(e) => Fetched::Error(e),
        }
    }
}
