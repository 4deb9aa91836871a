use crate::clipboard::ClipboardHandler;
use crate::config::Config;
use crate::shutdown::ShutdownSignals;
use crate::summarize::SummarizeClient;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::{CommandWorker, COMMAND_BUFFER};
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Grace period for background tasks once the UI has exited.
const SHUTDOWN_GRACE: Duration = Duration::from_millis(200);

pub fn run(config: Config) -> io::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;

    let client = SummarizeClient::new(&config.endpoint).map_err(io::Error::other)?;
    tracing::info!(endpoint = %client.endpoint(), "Starting text summarizer");

    let signals = {
        let _enter = runtime.enter();
        ShutdownSignals::install()
    };

    let tick_rate = config.ui.tick_rate();
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);

    match signals {
        Ok(mut signals) => {
            let shutdown_tx = events.sender();
            runtime.spawn(async move {
                match signals.recv().await {
                    Ok(()) => {
                        let _ = shutdown_tx.send(AppEvent::Shutdown);
                    }
                    Err(err) => tracing::warn!(error = %err, "Signal listener failed"),
                }
            });
        }
        Err(err) => tracing::warn!(error = %err, "Signal handlers not installed"),
    }

    let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
    let worker = CommandWorker::new(Arc::new(client), events.sender(), config.ui.copied_reset());
    runtime.spawn(worker.run(command_rx));

    let mut app = App::new();
    app.set_command_sender(command_tx);
    match ClipboardHandler::new() {
        Ok(clipboard) => app.set_clipboard(Box::new(clipboard)),
        Err(err) => tracing::warn!(error = %err, "Clipboard unavailable, copy disabled"),
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => handle_event(&mut app, event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    // Dropping the app closes the command channel, which stops the worker
    // and aborts a pending copied-reset.
    drop(app);
    drop(guard);
    runtime.shutdown_timeout(SHUTDOWN_GRACE);
    tracing::info!("Text summarizer exited");
    Ok(())
}

/// Apply one event from the UI channel.
pub fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Paste(text) => app.on_paste(&text),
        AppEvent::Tick => app.on_tick(),
        // Layout is recomputed on every draw.
        AppEvent::Resize(_, _) => {}
        AppEvent::SummaryReady { token, result } => app.on_summary_ready(token, result),
        AppEvent::CopiedReset { generation } => app.on_copied_reset(generation),
        AppEvent::Shutdown => {
            tracing::info!("Shutting down on signal");
            app.request_quit();
        }
        AppEvent::InputClosed => {
            tracing::warn!("Terminal input closed, exiting");
            app.request_quit();
        }
    }
}
