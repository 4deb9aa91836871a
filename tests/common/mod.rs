//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::mpsc::Receiver;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tempfile::TempDir;
use textsummary::clipboard::{ClipboardError, ClipboardWriter};
use textsummary::config::EndpointConfig;
use textsummary::ui::events::AppEvent;

/// Find a port with nothing listening on it.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

pub fn endpoint(url: &str) -> EndpointConfig {
    EndpointConfig {
        url: url.to_string(),
    }
}

/// Write `content` to a temporary `config.toml`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Wait for the next event without blocking the tokio runtime.
pub async fn next_event(rx: &Receiver<AppEvent>, timeout: Duration) -> Option<AppEvent> {
    let start = Instant::now();
    while start.elapsed() < timeout {
        if let Ok(event) = rx.try_recv() {
            return Some(event);
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    None
}

pub fn press(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

pub fn ctrl(ch: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(ch),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Clipboard double recording every write.
#[derive(Clone, Default)]
pub struct FakeClipboard {
    pub writes: Arc<Mutex<Vec<String>>>,
    pub fail: bool,
}

impl FakeClipboard {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

impl ClipboardWriter for FakeClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Write(arboard::Error::ClipboardNotSupported));
        }
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
