//! Terminal session: raw mode, the alternate screen, and the input modes from
//! `TerminalSettings`. Leaving happens at most once, on drop or explicitly.

use crate::kernel::services::ports::TerminalSettings;
use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// What the session does to the real terminal. Swapped out in tests.
pub trait Screen {
    fn enter(&mut self, modes: TerminalSettings) -> io::Result<()>;
    fn leave(&mut self, modes: TerminalSettings) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct CrosstermScreen;

impl Screen for CrosstermScreen {
    fn enter(&mut self, modes: TerminalSettings) -> io::Result<()> {
        use crossterm::event::{EnableBracketedPaste, EnableMouseCapture};
        use crossterm::queue;
        use crossterm::terminal::{enable_raw_mode, EnterAlternateScreen};

        enable_raw_mode()?;
        let mut out = io::stdout();
        queue!(out, EnterAlternateScreen)?;
        if modes.mouse_capture {
            queue!(out, EnableMouseCapture)?;
        }
        if modes.bracketed_paste {
            queue!(out, EnableBracketedPaste)?;
        }
        out.flush()
    }

    fn leave(&mut self, modes: TerminalSettings) -> io::Result<()> {
        use crossterm::cursor::Show;
        use crossterm::event::{DisableBracketedPaste, DisableMouseCapture};
        use crossterm::queue;
        use crossterm::terminal::{disable_raw_mode, LeaveAlternateScreen};

        let raw = disable_raw_mode();
        let mut out = io::stdout();
        let screen = (|| -> io::Result<()> {
            if modes.bracketed_paste {
                queue!(out, DisableBracketedPaste)?;
            }
            if modes.mouse_capture {
                queue!(out, DisableMouseCapture)?;
            }
            queue!(out, LeaveAlternateScreen, Show)?;
            out.flush()
        })();
        raw.and(screen)
    }
}

pub struct TerminalSession {
    screen: Box<dyn Screen>,
    modes: TerminalSettings,
    active: bool,
}

impl TerminalSession {
    pub fn start(modes: TerminalSettings) -> io::Result<Self> {
        Self::with_screen(Box::new(CrosstermScreen), modes)
    }

    /// A screen that fails half-way through `enter` is unwound before the error is returned.
    pub fn with_screen(mut screen: Box<dyn Screen>, modes: TerminalSettings) -> io::Result<Self> {
        if let Err(err) = screen.enter(modes) {
            let _ = screen.leave(modes);
            return Err(err);
        }
        tracing::debug!(
            mouse_capture = modes.mouse_capture,
            bracketed_paste = modes.bracketed_paste,
            "terminal session started"
        );
        Ok(Self {
            screen,
            modes,
            active: true,
        })
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns `Ok(false)` when the session already ended.
    pub fn end(&mut self) -> io::Result<bool> {
        if !self.active {
            return Ok(false);
        }
        self.active = false;
        self.screen.leave(self.modes)?;
        Ok(true)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = self.end() {
            tracing::warn!(error = %err, "terminal restore failed");
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum TerminationSignal {
    Interrupt = 1,
    Terminate = 2,
}

impl TerminationSignal {
    fn from_raw(raw: usize) -> Option<Self> {
        match raw {
            1 => Some(Self::Interrupt),
            2 => Some(Self::Terminate),
            _ => None,
        }
    }

    /// Shell convention: 128 plus the signal number.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Interrupt => 130,
            Self::Terminate => 143,
        }
    }
}

/// SIGINT/SIGTERM latched into a flag the main loop polls between frames,
/// so the session is always ended on the main thread.
#[derive(Debug, Clone, Default)]
pub struct ShutdownSignals {
    received: Arc<AtomicUsize>,
}

impl ShutdownSignals {
    #[cfg(unix)]
    pub fn install() -> io::Result<Self> {
        use signal_hook::consts::signal::{SIGINT, SIGTERM};

        let signals = Self::default();
        for (raw, signal) in [
            (SIGINT, TerminationSignal::Interrupt),
            (SIGTERM, TerminationSignal::Terminate),
        ] {
            signal_hook::flag::register_usize(raw, Arc::clone(&signals.received), signal as usize)?;
        }
        Ok(signals)
    }

    #[cfg(not(unix))]
    pub fn install() -> io::Result<Self> {
        Ok(Self::default())
    }

    /// Returns the latest signal once, clearing it.
    pub fn take(&self) -> Option<TerminationSignal> {
        TerminationSignal::from_raw(self.received.swap(0, Ordering::SeqCst))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/session.rs"]
mod tests;
