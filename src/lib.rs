//! Terminal client for a remote text summarization endpoint.
//!
//! Paste or type text, press Ctrl+S, and the summary returned by the
//! endpoint is shown below the input, ready to copy.

pub mod clipboard;
pub mod config;
pub mod logging;
pub mod shutdown;
pub mod summarize;
pub mod ui;
