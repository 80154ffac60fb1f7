//! Simulation driver implementing the Driver trait.
//!
//! `SimDriver` provides the same interface as the terminal driver but for
//! deterministic testing. It implements [`Driver`] so the same
//! [`connie_app::Runtime`] orchestration code runs in both production and
//! simulation.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use connie_app::{App, AppAction, AppEvent, Driver, KeyInput};
use connie_core::{PresentationIntent, TripPhase};

use crate::invariants::InvariantRegistry;

/// Error type for simulation driver.
#[derive(Debug, Clone)]
pub struct SimDriverError(pub String);

impl std::fmt::Display for SimDriverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SimDriverError: {}", self.0)
    }
}

impl std::error::Error for SimDriverError {}

/// One painted frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFrame {
    /// Phase at paint time.
    pub phase: TripPhase,
    /// Intent painted. `None` while the app waited for a profile.
    pub intent: Option<PresentationIntent>,
    /// Status line painted.
    pub status: Option<String>,
}

/// Shared state for event injection.
#[derive(Default)]
struct SharedState {
    pending_events: VecDeque<AppEvent>,
    frames: Vec<RenderedFrame>,
    stopped: bool,
}

/// Simulation driver for deterministic testing.
///
/// Replays injected events in order and reports [`AppAction::Quit`] once the
/// queue is drained. Clones share state.
#[derive(Clone)]
pub struct SimDriver {
    state: Arc<Mutex<SharedState>>,
    invariants: Option<Arc<InvariantRegistry>>,
}

impl Default for SimDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl SimDriver {
    /// Create a new simulation driver.
    pub fn new() -> Self {
        Self { state: Arc::new(Mutex::new(SharedState::default())), invariants: None }
    }

    /// Enable invariant checking on every render.
    #[must_use]
    pub fn with_invariants(mut self, registry: InvariantRegistry) -> Self {
        self.invariants = Some(Arc::new(registry));
        self
    }

    /// Inject an `AppEvent` for processing.
    pub fn inject_event(&self, event: AppEvent) {
        self.lock().pending_events.push_back(event);
    }

    /// Inject a key press.
    pub fn inject_key(&self, key: KeyInput) {
        self.inject_event(AppEvent::Key(key));
    }

    /// Inject a press of the action button.
    pub fn press_button(&self) {
        self.inject_key(KeyInput::Enter);
    }

    /// Check if there are pending events to process.
    pub fn has_pending(&self) -> bool {
        !self.lock().pending_events.is_empty()
    }

    /// All frames painted so far.
    pub fn frames(&self) -> Vec<RenderedFrame> {
        self.lock().frames.clone()
    }

    /// The most recently painted frame.
    pub fn last_frame(&self) -> Option<RenderedFrame> {
        self.lock().frames.last().cloned()
    }

    /// Whether the runtime stopped the driver.
    pub fn is_stopped(&self) -> bool {
        self.lock().stopped
    }

    fn lock(&self) -> MutexGuard<'_, SharedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Driver for SimDriver {
    type Error = SimDriverError;

    async fn poll_event(&mut self, app: &mut App) -> Result<Vec<AppAction>, Self::Error> {
        let event = self.lock().pending_events.pop_front();
        match event {
            Some(event) => Ok(app.handle(event)),
            None => Ok(vec![AppAction::Quit]),
        }
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        if let (Some(registry), Some(intent)) = (&self.invariants, app.intent())
            && let Err(violations) = registry.check_all(intent)
        {
            let messages: Vec<_> = violations.iter().map(ToString::to_string).collect();
            return Err(SimDriverError(format!(
                "invariant violation in {}: {}",
                app.phase(),
                messages.join("; ")
            )));
        }

        self.lock().frames.push(RenderedFrame {
            phase: app.phase(),
            intent: app.intent().cloned(),
            status: app.status_message().map(str::to_string),
        });
        Ok(())
    }

    fn stop(&mut self) {
        self.lock().stopped = true;
    }
}
