//! Background side effects requested by the UI.
//!
//! The UI thread never awaits. It sends a [`UiCommand`] and keeps drawing;
//! the worker runs the command on the tokio runtime and reports back with an
//! [`AppEvent`].

use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::summarize::SummarizeClient;
use crate::ui::events::AppEvent;

/// Capacity of the UI → worker command channel.
pub const COMMAND_BUFFER: usize = 16;

#[derive(Debug)]
pub enum UiCommand {
    /// POST `text` to the endpoint; the completion carries `token`.
    Summarize { token: u64, text: String },
    /// Clear the "copied" confirmation after the reset delay.
    /// Replaces any reset already pending.
    ScheduleCopiedReset { generation: u64 },
    /// Drop the pending copied-reset, if any.
    CancelCopiedReset,
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// Executes [`UiCommand`]s until the command channel closes.
pub struct CommandWorker {
    client: Arc<SummarizeClient>,
    events: Sender<AppEvent>,
    copied_reset: Duration,
    reset_timer: Option<JoinHandle<()>>,
}

impl CommandWorker {
    pub fn new(client: Arc<SummarizeClient>, events: Sender<AppEvent>, copied_reset: Duration) -> Self {
        Self {
            client,
            events,
            copied_reset,
            reset_timer: None,
        }
    }

    /// Process commands until every sender is dropped.
    ///
    /// A pending copied-reset does not outlive the worker. In-flight
    /// requests are not cancelled; their completions are dropped if the UI
    /// has gone away.
    pub async fn run(mut self, mut commands: mpsc::Receiver<UiCommand>) {
        while let Some(command) = commands.recv().await {
            self.handle(command);
        }
        self.cancel_reset();
        tracing::debug!("Command worker stopped");
    }

    fn handle(&mut self, command: UiCommand) {
        match command {
            UiCommand::Summarize { token, text } => self.spawn_summarize(token, text),
            UiCommand::ScheduleCopiedReset { generation } => self.schedule_reset(generation),
            UiCommand::CancelCopiedReset => self.cancel_reset(),
        }
    }

    fn spawn_summarize(&self, token: u64, text: String) {
        let client = Arc::clone(&self.client);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = client.summarize(&text).await.map_err(|err| {
                tracing::warn!(token, error = %err, "Summarization failed");
                err.user_message()
            });
            let _ = events.send(AppEvent::SummaryReady { token, result });
        });
    }

    fn schedule_reset(&mut self, generation: u64) {
        self.cancel_reset();
        let events = self.events.clone();
        let delay = self.copied_reset;
        self.reset_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = events.send(AppEvent::CopiedReset { generation });
        }));
    }

    fn cancel_reset(&mut self) {
        if let Some(timer) = self.reset_timer.take() {
            timer.abort();
        }
    }
}
