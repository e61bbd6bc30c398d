//! Map provider configuration and availability decision.
mod config;

pub use config::{MapProviderConfig, ProviderMode, PLACEHOLDER_DISABLED, PLACEHOLDER_TEMPLATE};
