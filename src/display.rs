// Terminal session: the single rendering surface of the program

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, Show},
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use tracing::{debug, info};

/// Owns the terminal while the game runs. Acquiring switches to raw mode and
/// the alternate screen; dropping restores the terminal, on error paths too.
pub struct Display {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    reports_releases: bool,
}

impl Display {
    pub fn acquire(title: &str) -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;

        let terminal = match Terminal::new(CrosstermBackend::new(io::stdout())) {
            Ok(terminal) => terminal,
            Err(e) => {
                let _ = disable_raw_mode();
                return Err(e).context("failed to open terminal");
            }
        };

        // From here on, Drop undoes whatever was set up
        let mut display = Self {
            terminal,
            reports_releases: false,
        };

        execute!(
            display.terminal.backend_mut(),
            EnterAlternateScreen,
            SetTitle(title),
            Hide
        )
        .context("failed to set up terminal screen")?;

        // Key releases are only reported by terminals that speak the kitty
        // keyboard protocol
        if supports_keyboard_enhancement().unwrap_or(false) {
            execute!(
                display.terminal.backend_mut(),
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )
            .context("failed to enable key release events")?;
            display.reports_releases = true;
        }

        display.terminal.clear()?;
        let reports_releases = display.reports_releases;
        info!(reports_releases, "terminal acquired");
        Ok(display)
    }

    pub fn reports_releases(&self) -> bool {
        self.reports_releases
    }

    /// Render one frame and present it.
    pub fn draw<F>(&mut self, render: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(render).context("failed to draw frame")?;
        Ok(())
    }

    /// Collect pending events, waiting at most `timeout` for the first one.
    pub fn poll_events(&mut self, timeout: Duration) -> Result<Vec<Event>> {
        let mut events = Vec::new();

        if event::poll(timeout)? {
            events.push(event::read()?);
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }
}

impl Drop for Display {
    fn drop(&mut self) {
        if self.reports_releases {
            let _ = execute!(self.terminal.backend_mut(), PopKeyboardEnhancementFlags);
        }
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen, Show);
        let _ = disable_raw_mode();
        debug!("terminal restored");
    }
}
