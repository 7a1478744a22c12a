//! Shared dealdesk error, configuration and labeling primitives.
#![warn(missing_docs)]

mod config;
mod error;
mod fetched;
mod provider;
mod resource;

pub use config::{
    DEFAULT_API_BASE, DelayConfig, DeskConfig, FallbackPolicy, RunEnvironment, UpstreamConfig,
    env_keys,
};
pub use error::DeskError;
pub use fetched::{FallbackReason, Fetched};
pub use provider::{ProviderKey, Upstream};
pub use resource::Resource;
