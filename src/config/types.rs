use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Summarization endpoint used when nothing else is configured.
pub const DEFAULT_ENDPOINT_URL: &str = "https://sanpri-textsummarizer-backend.hf.space/summarize";

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Remote summarization endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Full URL the text is POSTed to.
    #[serde(default = "default_endpoint_url")]
    pub url: String,
}

/// Terminal UI timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw/animation tick in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// How long "Copied!" stays visible in milliseconds (default: 2000).
    #[serde(default = "default_copied_reset_ms")]
    pub copied_reset_ms: u64,
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn copied_reset(&self) -> Duration {
        Duration::from_millis(self.copied_reset_ms)
    }
}

fn default_endpoint_url() -> String {
    DEFAULT_ENDPOINT_URL.to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_copied_reset_ms() -> u64 {
    2000
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: default_endpoint_url(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            copied_reset_ms: default_copied_reset_ms(),
        }
    }
}
