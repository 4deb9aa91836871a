use crossterm::event::{self, Event, KeyEvent};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

/// Poll granularity of the input thread.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Tick,
    Resize(u16, u16),
    /// A summarization request finished.
    /// Tagged with the request token so stale completions can be dropped.
    SummaryReady {
        token: u64,
        result: Result<String, String>,
    },
    /// The copied-reset timer for `generation` fired.
    CopiedReset { generation: u64 },
    /// OS signal received (SIGTERM, SIGHUP, SIGINT).
    Shutdown,
    /// The input thread stopped; no more keys will arrive.
    InputClosed,
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: mpsc::Sender<AppEvent>,
}

impl EventHandler {
    /// Start the input thread. It stops once the handler is dropped.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || pump_input(read_terminal_event, &event_tx, tick_rate));

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    /// Sender for background work that reports back to the UI loop.
    pub fn sender(&self) -> mpsc::Sender<AppEvent> {
        self.tx.clone()
    }
}

fn read_terminal_event(timeout: Duration) -> io::Result<Option<Event>> {
    if event::poll(timeout)? {
        event::read().map(Some)
    } else {
        Ok(None)
    }
}

/// Forward terminal events and ticks until reading fails or the UI is gone.
///
/// A read failure ends with [`AppEvent::InputClosed`]: the UI holds its own
/// sender, so it would never observe the channel disconnect.
pub(crate) fn pump_input<R>(mut read: R, events: &Sender<AppEvent>, tick_rate: Duration)
where
    R: FnMut(Duration) -> io::Result<Option<Event>>,
{
    let mut last_tick = Instant::now();
    loop {
        let timeout = tick_rate
            .saturating_sub(last_tick.elapsed())
            .min(POLL_INTERVAL);

        let forwarded = match read(timeout) {
            Ok(Some(Event::Key(key))) => events.send(AppEvent::Key(key)),
            Ok(Some(Event::Paste(text))) => events.send(AppEvent::Paste(text)),
            Ok(Some(Event::Resize(cols, rows))) => events.send(AppEvent::Resize(cols, rows)),
            Ok(_) => Ok(()),
            Err(err) => {
                tracing::error!(error = %err, "Failed to read terminal events");
                let _ = events.send(AppEvent::InputClosed);
                return;
            }
        };
        if forwarded.is_err() {
            return;
        }

        if last_tick.elapsed() >= tick_rate {
            if events.send(AppEvent::Tick).is_err() {
                return;
            }
            last_tick = Instant::now();
        }
    }
}
