//! Clipboard access for copying the summary.

use arboard::Clipboard;
use thiserror::Error;

/// Clipboard failures. Never shown to the user, only logged.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(#[source] arboard::Error),

    #[error("Failed to set clipboard text: {0}")]
    Write(#[source] arboard::Error),
}

/// Something that can put text on the system clipboard.
pub trait ClipboardWriter {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Handler backed by the platform clipboard.
pub struct ClipboardHandler {
    clipboard: Clipboard,
}

impl ClipboardHandler {
    /// Create a new clipboard handler.
    pub fn new() -> Result<Self, ClipboardError> {
        let clipboard = Clipboard::new().map_err(ClipboardError::Unavailable)?;
        Ok(Self { clipboard })
    }
}

impl ClipboardWriter for ClipboardHandler {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.clipboard
            .set_text(text.to_string())
            .map_err(ClipboardError::Write)
    }
}
