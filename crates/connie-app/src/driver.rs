//! Driver trait for abstracting I/O operations.
//!
//! The [`Driver`] trait decouples the application runtime from specific I/O
//! implementations. Each frontend implements the trait to provide
//! platform-specific input and painting, while the generic
//! [`crate::Runtime`] handles all orchestration.

use std::future::Future;

use crate::{App, AppAction};

/// Abstracts I/O operations for the application runtime.
///
/// Implementations provide platform-specific I/O while the generic
/// [`Runtime`](crate::Runtime) handles orchestration logic. This ensures
/// the same orchestration code runs in production TUI and simulation.
///
/// # Implementations
///
/// - **TUI**: Uses crossterm for terminal events and ratatui for painting
/// - **Simulation**: Replays queued events and records rendered intents
pub trait Driver: Send {
    /// Platform-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Poll for the next input and feed it to the app.
    ///
    /// Returns the actions the app produced, or an empty list if no input was
    /// ready. A driver whose input source is exhausted returns
    /// [`AppAction::Quit`].
    fn poll_event(
        &mut self,
        app: &mut App,
    ) -> impl Future<Output = Result<Vec<AppAction>, Self::Error>> + Send;

    /// Paint the application state.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    fn render(&mut self, app: &App) -> Result<(), Self::Error>;

    /// Release resources before the runtime returns.
    fn stop(&mut self);
}
