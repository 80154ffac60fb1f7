//! Terminal driver for the TUI.
//!
//! Implements the [`Driver`] trait for terminal I/O using crossterm for
//! keyboard events and ratatui for rendering.

use std::io::{self, Stdout, stdout};

use connie_app::{App, AppAction, AppEvent, Driver, KeyInput};
use crossterm::{
    ExecutableCommand,
    event::{Event, EventStream, KeyCode, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;

use crate::ui;

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Terminal driver implementing the [`Driver`] trait.
///
/// Handles terminal I/O (crossterm) and rendering (ratatui). In simulation
/// mode the `n` key stands in for the trip backend and advances the phase.
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_stream: EventStream,
    simulate: bool,
}

impl TerminalDriver {
    /// Create a new terminal driver and switch to the alternate screen.
    pub fn new(simulate: bool) -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;
        let event_stream = EventStream::new();

        Ok(Self { terminal, event_stream, simulate })
    }

    /// Convert crossterm `KeyCode` to `KeyInput`.
    fn convert_key(code: KeyCode) -> Option<KeyInput> {
        match code {
            KeyCode::Char(c) => Some(KeyInput::Char(c)),
            KeyCode::Enter => Some(KeyInput::Enter),
            KeyCode::Esc => Some(KeyInput::Esc),
            _ => None,
        }
    }

    /// Feed a key to the app, intercepting the simulated remote keys.
    fn handle_key(simulate: bool, key: KeyInput, app: &mut App) -> Vec<AppAction> {
        if simulate && key == KeyInput::Char('n') {
            return match app.phase().next() {
                Some(next) => {
                    tracing::info!(phase = %next, "Simulated remote phase change");
                    app.handle(AppEvent::PhaseChanged(next))
                },
                None => vec![],
            };
        }
        app.handle(AppEvent::Key(key))
    }
}

impl Driver for TerminalDriver {
    type Error = TerminalError;

    async fn poll_event(&mut self, app: &mut App) -> Result<Vec<AppAction>, Self::Error> {
        let timeout = tokio::time::Duration::from_millis(100);

        tokio::select! {
            biased;

            // Terminal events
            maybe_event = self.event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) if key_event.kind == KeyEventKind::Press => {
                        match Self::convert_key(key_event.code) {
                            Some(key_input) => Ok(Self::handle_key(self.simulate, key_input, app)),
                            None => Ok(vec![]),
                        }
                    },
                    Some(Ok(Event::Resize(cols, rows))) => {
                        Ok(app.handle(AppEvent::Resize(cols, rows)))
                    },
                    Some(Err(e)) => Err(TerminalError::Io(e)),
                    None => Ok(vec![AppAction::Quit]),
                    _ => Ok(vec![]),
                }
            }

            // Tick timeout
            () = tokio::time::sleep(timeout) => {
                Ok(app.handle(AppEvent::Tick))
            }
        }
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        let simulate = self.simulate;
        self.terminal.draw(|frame| {
            ui::render(frame, app, simulate);
        })?;
        Ok(())
    }

    fn stop(&mut self) {
        let _ = self.terminal.show_cursor();
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        self.stop();
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}
