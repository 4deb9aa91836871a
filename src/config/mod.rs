//! Application configuration.
//!
//! Everything has a default; the TOML file only overrides what it names.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, EndpointConfig, UiConfig, DEFAULT_ENDPOINT_URL};
