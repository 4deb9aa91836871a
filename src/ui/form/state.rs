//! State for the summary form.

use crate::ui::mvi::UiState;

/// Maximum number of characters the input accepts.
pub const MAX_INPUT_CHARS: usize = 5000;

/// Error shown when Summarize is triggered with blank input.
pub const EMPTY_INPUT_MESSAGE: &str = "Please enter some text to summarize!";

/// Control that keyboard activation (Enter) targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    Summarize,
    Clear,
    Copy,
}

/// Lifecycle of the summarization request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestStatus {
    /// Nothing requested yet, or the form was cleared.
    #[default]
    Idle,

    /// A request is in flight.
    Loading {
        /// Token of the request whose completion is awaited.
        token: u64,
        /// Animation tick for the spinner.
        animation_tick: u8,
    },

    /// The last request returned a summary.
    Succeeded,

    /// Validation or the last request failed.
    Failed {
        /// User-facing message.
        message: String,
    },
}

/// State of the summary form.
///
/// `summary` holds the last successful result and is independent of
/// `status`: a failed or in-flight request leaves the previous summary in
/// place until the next success or a Clear All.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub(super) input: String,
    pub(super) summary: String,
    pub(super) status: RequestStatus,
    pub(super) copied: bool,
    /// Generation of the most recent successful copy.
    pub(super) copy_generation: u64,
    /// Token handed to the most recently issued request.
    pub(super) last_token: u64,
    pub(super) focus: Focus,
    /// First summary row shown in the panel.
    pub(super) summary_scroll: u16,
}

impl UiState for FormState {}

impl FormState {
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn status(&self) -> &RequestStatus {
        &self.status
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }

    pub fn copy_generation(&self) -> u64 {
        self.copy_generation
    }

    pub fn summary_scroll(&self) -> u16 {
        self.summary_scroll
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.status, RequestStatus::Loading { .. })
    }

    /// Token of the in-flight request, if any.
    pub fn loading_token(&self) -> Option<u64> {
        match self.status {
            RequestStatus::Loading { token, .. } => Some(token),
            _ => None,
        }
    }

    /// Spinner position while loading.
    pub fn animation_tick(&self) -> u8 {
        match self.status {
            RequestStatus::Loading { animation_tick, .. } => animation_tick,
            _ => 0,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            RequestStatus::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Number of characters in the input.
    pub fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    /// Characters that can still be added before hitting the cap.
    pub fn remaining_capacity(&self) -> usize {
        MAX_INPUT_CHARS.saturating_sub(self.char_count())
    }

    /// Counter shown under the input, e.g. `42/5000`.
    pub fn counter_label(&self) -> String {
        format!("{}/{}", self.char_count(), MAX_INPUT_CHARS)
    }

    pub fn has_text(&self) -> bool {
        !self.input.trim().is_empty()
    }

    /// Whether the Summarize control is enabled.
    pub fn can_submit(&self) -> bool {
        self.has_text() && !self.is_loading()
    }

    pub fn shows_error_banner(&self) -> bool {
        self.error_message().is_some()
    }

    pub fn shows_summary_panel(&self) -> bool {
        !self.summary.is_empty() || self.is_loading()
    }

    pub fn shows_copy_button(&self) -> bool {
        !self.summary.is_empty()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_loading() {
            "🎭 Summarizing..."
        } else {
            "⚡ Summarize! ⚡"
        }
    }

    pub fn copy_label(&self) -> &'static str {
        if self.copied {
            "🎊 Copied!"
        } else {
            "📋 Copy text"
        }
    }

    /// Controls that can currently receive focus, in Tab order.
    pub fn focus_order(&self) -> Vec<Focus> {
        let mut order = vec![Focus::Input, Focus::Summarize, Focus::Clear];
        if self.shows_copy_button() {
            order.push(Focus::Copy);
        }
        order
    }
}
