//! Error types for the summarization client.

use thiserror::Error;

/// Shown when a failure carries no description of its own.
pub const FALLBACK_MESSAGE: &str = "Gosh! Failed to summarize text. Please try again!";

/// Errors that can occur while requesting a summary.
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// The endpoint answered with a non-2xx status. The body is not inspected.
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    /// The request never produced a response (DNS, connect, TLS, reset).
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// A 2xx body did not match `{"summary": <string>}`.
    #[error("Invalid response: {0}")]
    Parse(String),

    /// The HTTP client could not be constructed.
    #[error("Client setup failed: {0}")]
    Client(String),
}

impl SummarizeError {
    /// The single string shown in the error banner.
    pub fn user_message(&self) -> String {
        failure_message(&self.to_string())
    }
}

/// Turn a failure description into the banner text.
pub fn failure_message(description: &str) -> String {
    if description.trim().is_empty() {
        FALLBACK_MESSAGE.to_string()
    } else {
        format!("Oh sorry! {}", description)
    }
}
