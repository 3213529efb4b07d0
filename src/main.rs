use std::io;
use std::time::{Duration, Instant};

use crossterm::event;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use zstudio::app::Workbench;
use zstudio::core::event::InputEvent;
use zstudio::kernel::services::adapters::{load_settings, ViewportSignal};
use zstudio::kernel::services::ports::Settings;
use zstudio::tui::session::{ShutdownSignals, TerminalSession};
use zstudio::tui::view::{EventResult, View};

mod logging;

const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> io::Result<()> {
    let logging = logging::init();

    let settings = match load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!(error = %e, "using default settings");
            Settings::default()
        }
    };

    let (columns, _) = crossterm::terminal::size()?;
    let viewport = ViewportSignal::from_terminal_columns(columns, settings.viewport.cell_width_px);
    let mut workbench = Workbench::new(&settings, viewport)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let mut session = TerminalSession::start(settings.terminal)?;
    let signals = ShutdownSignals::install()?;

    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let mut dirty = true;

    loop {
        if let Some(signal) = signals.take() {
            tracing::info!(?signal, "termination signal received");
            drop(terminal);
            session.end()?;
            drop(logging);
            std::process::exit(signal.exit_code());
        }

        if dirty {
            terminal.draw(|frame| {
                let area = frame.area();
                workbench.render(frame, area);
            })?;
            dirty = false;
        }

        let timeout = workbench
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_POLL)
            .min(IDLE_POLL);

        if event::poll(timeout)? {
            if let Some(input) = InputEvent::from_terminal(event::read()?) {
                match workbench.handle_input(&input) {
                    EventResult::Quit => break,
                    EventResult::Consumed => dirty = true,
                    EventResult::Ignored => {}
                }
            }
        }

        dirty |= workbench.tick(Instant::now());
        if workbench.should_quit() {
            break;
        }
    }

    drop(terminal);
    session.end()?;
    if let Some(logging) = &logging {
        tracing::info!(log_dir = %logging.log_dir().display(), "exiting");
    }
    Ok(())
}
