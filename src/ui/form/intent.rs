//! Intents for the summary form.

use crate::ui::mvi::Intent;

/// Intents that can be dispatched to the summary form.
#[derive(Debug, Clone)]
pub enum FormIntent {
    /// A character typed into the input.
    InsertChar(char),

    /// Text pasted into the input.
    Paste(String),

    /// Remove the last character of the input.
    Backspace,

    /// User asked for a summary of the current input.
    ///
    /// Blank input sets the validation error, except while a request is in
    /// flight: the status belongs to that request until it completes.
    Submit,

    /// A summarization request finished.
    Completed {
        /// Token the request was issued with.
        token: u64,
        /// Summary text, or the user-facing error message.
        result: Result<String, String>,
    },

    /// The summary was written to the clipboard.
    CopySucceeded,

    /// The copied-reset timer fired.
    CopyReset {
        /// Generation the timer was scheduled for.
        generation: u64,
    },

    /// Reset input, summary and error.
    ClearAll,

    /// Scroll the summary panel by `delta` rows, staying within
    /// `0..=max_scroll` as measured by the last draw.
    ScrollSummary { delta: i32, max_scroll: u16 },

    /// Move focus to the next control.
    FocusNext,

    /// Move focus to the previous control.
    FocusPrev,

    /// Animation tick (for spinner updates).
    AnimationTick,
}

impl Intent for FormIntent {}
