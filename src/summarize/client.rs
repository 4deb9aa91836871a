//! HTTP client for the remote summarization endpoint.
//!
//! Wire contract: `POST <endpoint>` with `{"text": ...}`, answered by
//! `{"summary": ...}` on success. Any non-2xx status is an error and its body
//! is not read.

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::config::EndpointConfig;

use super::error::SummarizeError;

/// Client for the summarization endpoint.
///
/// Cheap to share behind an `Arc`; `reqwest::Client` pools connections.
pub struct SummarizeClient {
    client: Client,
    endpoint: String,
}

impl SummarizeClient {
    /// Create a client for the configured endpoint.
    pub fn new(config: &EndpointConfig) -> Result<Self, SummarizeError> {
        let client = Client::builder()
            .build()
            .map_err(|e| SummarizeError::Client(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.url.clone(),
        })
    }

    /// Get the endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Request a summary of `text`.
    pub async fn summarize(&self, text: &str) -> Result<String, SummarizeError> {
        tracing::debug!(
            url = %self.endpoint,
            chars = text.chars().count(),
            "Sending summarization request"
        );

        let start = Instant::now();
        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .json(&SummarizeRequest { text })
            .send()
            .await?;

        let latency_ms = start.elapsed().as_millis() as u64;
        let status = response.status();

        if !status.is_success() {
            tracing::warn!(status = %status, latency_ms, "Summarization endpoint returned an error");
            return Err(SummarizeError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let summary = parse_summary(&body)?;

        tracing::info!(
            status = %status,
            latency_ms,
            summary_len = summary.len(),
            "Summarization succeeded"
        );

        Ok(summary)
    }
}

/// Request body.
#[derive(Debug, Serialize)]
struct SummarizeRequest<'a> {
    text: &'a str,
}

/// Success response body.
#[derive(Debug, Deserialize)]
struct SummarizeResponse {
    summary: String,
}

/// Decode a 2xx body. The summary is returned verbatim.
fn parse_summary(body: &str) -> Result<String, SummarizeError> {
    serde_json::from_str::<SummarizeResponse>(body)
        .map(|response| response.summary)
        .map_err(|e| SummarizeError::Parse(e.to_string()))
}
