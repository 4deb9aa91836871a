use crate::clipboard::ClipboardWriter;
use crate::summarize::failure_message;
use crate::ui::form::{Focus, FormIntent, FormReducer, FormState, SummaryViewport};
use crate::ui::mvi::Reducer;
use crate::ui::worker::{UiCommand, UiCommandSender};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::cell::Cell;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Summary form state (MVI pattern).
    form: FormState,
    /// Channel to the command worker (resource, managed outside MVI).
    command_sender: Option<UiCommandSender>,
    /// System clipboard (resource, managed outside MVI).
    clipboard: Option<Box<dyn ClipboardWriter>>,
    /// Summary panel size reported by the last draw.
    summary_viewport: Cell<SummaryViewport>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            form: FormState::default(),
            command_sender: None,
            clipboard: None,
            summary_viewport: Cell::new(SummaryViewport::default()),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn set_clipboard(&mut self, clipboard: Box<dyn ClipboardWriter>) {
        self.clipboard = Some(clipboard);
    }

    /// Remember how much of the summary the last frame could show.
    pub fn record_summary_viewport(&self, viewport: SummaryViewport) {
        self.summary_viewport.set(viewport);
    }

    /// Scroll the summary panel by `delta` rows.
    pub fn scroll_summary(&mut self, delta: i32) {
        let max_scroll = self.summary_viewport.get().max_scroll;
        self.dispatch(FormIntent::ScrollSummary { delta, max_scroll });
    }

    /// Scroll the summary panel by one page.
    pub fn page_summary(&mut self, down: bool) {
        let page = i32::from(self.summary_viewport.get().page.saturating_sub(1).max(1));
        self.scroll_summary(if down { page } else { -page });
    }

    pub fn on_tick(&mut self) {
        if self.form.is_loading() {
            self.dispatch(FormIntent::AnimationTick);
        }
    }

    /// Keys that edit the input or move focus. Hotkeys are handled in
    /// `ui::input` before this is reached.
    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Tab => self.dispatch(FormIntent::FocusNext),
            KeyCode::BackTab => self.dispatch(FormIntent::FocusPrev),
            KeyCode::Enter => self.activate_focused(),
            KeyCode::PageDown => self.page_summary(true),
            KeyCode::PageUp => self.page_summary(false),
            KeyCode::Down if self.form.focus() != Focus::Input => self.scroll_summary(1),
            KeyCode::Up if self.form.focus() != Focus::Input => self.scroll_summary(-1),
            KeyCode::Backspace if self.form.focus() == Focus::Input => {
                self.dispatch(FormIntent::Backspace)
            }
            KeyCode::Char(ch)
                if self.form.focus() == Focus::Input
                    && !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.dispatch(FormIntent::InsertChar(ch))
            }
            _ => {}
        }
    }

    pub fn on_paste(&mut self, text: &str) {
        // Terminals deliver pasted line breaks as CR.
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        self.dispatch(FormIntent::Paste(normalized));
    }

    /// Enter on the focused control.
    pub fn activate_focused(&mut self) {
        match self.form.focus() {
            Focus::Input => self.dispatch(FormIntent::InsertChar('\n')),
            Focus::Summarize => {
                self.submit();
            }
            Focus::Clear => self.clear_all(),
            Focus::Copy => self.copy(),
        }
    }

    /// Summarize the current input.
    ///
    /// Blank input only sets the validation error. Returns true when a
    /// request was dispatched.
    pub fn submit(&mut self) -> bool {
        if self.form.is_loading() {
            return false;
        }

        self.dispatch(FormIntent::Submit);
        let Some(token) = self.form.loading_token() else {
            return false;
        };

        let text = self.form.input().to_string();
        tracing::info!(token, chars = self.form.char_count(), "Submitting text for summary");
        if let Err(message) = self.send_command(UiCommand::Summarize { token, text }) {
            self.dispatch(FormIntent::Completed {
                token,
                result: Err(failure_message(&message)),
            });
            return false;
        }
        true
    }

    /// Completion of the request issued with `token`.
    pub fn on_summary_ready(&mut self, token: u64, result: Result<String, String>) {
        if self.form.loading_token() != Some(token) {
            tracing::debug!(token, "Discarding stale summarization result");
        }
        self.dispatch(FormIntent::Completed { token, result });
    }

    /// Copy the summary to the clipboard.
    ///
    /// Does nothing without a summary. Clipboard failures are only logged.
    pub fn copy(&mut self) {
        if !self.form.shows_copy_button() {
            return;
        }

        let Some(clipboard) = self.clipboard.as_mut() else {
            tracing::warn!("Clipboard not available, copy skipped");
            return;
        };

        if let Err(err) = clipboard.set_text(self.form.summary()) {
            tracing::warn!(error = %err, "Failed to copy summary");
            return;
        }

        self.dispatch(FormIntent::CopySucceeded);
        let generation = self.form.copy_generation();
        if let Err(message) = self.send_command(UiCommand::ScheduleCopiedReset { generation }) {
            tracing::warn!(error = %message, "Copied reset not scheduled");
        }
    }

    /// The copied-reset timer for `generation` fired.
    pub fn on_copied_reset(&mut self, generation: u64) {
        self.dispatch(FormIntent::CopyReset { generation });
    }

    /// Reset input, summary and error. An in-flight request keeps running.
    pub fn clear_all(&mut self) {
        let was_copied = self.form.is_copied();
        self.dispatch(FormIntent::ClearAll);
        if was_copied {
            if let Err(message) = self.send_command(UiCommand::CancelCopiedReset) {
                tracing::warn!(error = %message, "Copied reset not cancelled");
            }
        }
    }

    /// Dispatch an intent to the form reducer.
    pub fn dispatch(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    fn send_command(&mut self, command: UiCommand) -> Result<(), String> {
        let Some(sender) = &self.command_sender else {
            return Err("command worker not running".to_string());
        };

        sender
            .try_send(command)
            .map_err(|err| format!("command send failed: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn typing_goes_into_input() {
        let mut app = App::new();
        app.on_key(press(KeyCode::Char('h'), KeyModifiers::empty()));
        app.on_key(press(KeyCode::Char('I'), KeyModifiers::SHIFT));
        app.on_key(press(KeyCode::Enter, KeyModifiers::empty()));
        assert_eq!(app.form().input(), "hI\n");
        app.on_key(press(KeyCode::Backspace, KeyModifiers::empty()));
        assert_eq!(app.form().input(), "hI");
    }

    #[test]
    fn control_chords_do_not_type() {
        let mut app = App::new();
        app.on_key(press(KeyCode::Char('x'), KeyModifiers::CONTROL));
        assert_eq!(app.form().input(), "");
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = App::new();
        let mut key = press(KeyCode::Char('a'), KeyModifiers::empty());
        key.kind = KeyEventKind::Release;
        app.on_key(key);
        assert_eq!(app.form().input(), "");
    }

    #[test]
    fn typing_is_ignored_when_a_button_has_focus() {
        let mut app = App::new();
        app.on_key(press(KeyCode::Tab, KeyModifiers::empty()));
        assert_eq!(app.form().focus(), Focus::Summarize);
        app.on_key(press(KeyCode::Char('a'), KeyModifiers::empty()));
        assert_eq!(app.form().input(), "");
    }

    #[test]
    fn paste_normalizes_carriage_returns() {
        let mut app = App::new();
        app.on_paste("one\r\ntwo\rthree");
        assert_eq!(app.form().input(), "one\ntwo\nthree");
    }

    #[test]
    fn submit_without_worker_fails_visibly() {
        let mut app = App::new();
        app.on_paste("some text");
        assert!(!app.submit());
        assert!(!app.form().is_loading());
        assert_eq!(
            app.form().error_message(),
            Some("Oh sorry! command worker not running")
        );
    }
}
