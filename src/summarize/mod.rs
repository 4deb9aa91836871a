//! Summarization endpoint client.

mod client;
mod error;

pub use client::SummarizeClient;
pub use error::{failure_message, SummarizeError, FALLBACK_MESSAGE};
