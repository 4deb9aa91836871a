//! OS termination signals.
//!
//! The terminal is in raw mode while the UI runs, so Ctrl+C arrives as a key
//! press. Signals from outside (SIGTERM from a service manager, SIGHUP when
//! the terminal window closes) must still end the UI loop normally so the
//! terminal guard gets to restore the screen.

use std::io;

#[cfg(unix)]
use tokio::signal::unix::{signal, Signal, SignalKind};

/// Registered signal listeners.
///
/// Handlers are installed by [`ShutdownSignals::install`], so a signal
/// arriving before the first [`recv`](ShutdownSignals::recv) is not lost.
pub struct ShutdownSignals {
    #[cfg(unix)]
    terminate: Signal,
    #[cfg(unix)]
    hangup: Signal,
    #[cfg(unix)]
    interrupt: Signal,
}

impl ShutdownSignals {
    /// Install the handlers. Must be called within a tokio runtime.
    #[cfg(unix)]
    pub fn install() -> io::Result<Self> {
        Ok(Self {
            terminate: signal(SignalKind::terminate())?,
            hangup: signal(SignalKind::hangup())?,
            interrupt: signal(SignalKind::interrupt())?,
        })
    }

    #[cfg(not(unix))]
    pub fn install() -> io::Result<Self> {
        Ok(Self {})
    }

    /// Wait for the first termination signal.
    #[cfg(unix)]
    pub async fn recv(&mut self) -> io::Result<()> {
        tokio::select! {
            _ = self.terminate.recv() => tracing::info!("SIGTERM received"),
            _ = self.hangup.recv() => tracing::info!("SIGHUP received"),
            _ = self.interrupt.recv() => tracing::info!("SIGINT received"),
        }
        Ok(())
    }

    #[cfg(not(unix))]
    pub async fn recv(&mut self) -> io::Result<()> {
        tokio::signal::ctrl_c().await?;
        tracing::info!("Ctrl+C received");
        Ok(())
    }
}
