//! Application state machine.
//!
//! This module defines the [`App`] state machine, which manages the session
//! state behind the ride action panel completely decoupled from I/O and
//! backend mechanics.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs and
//! produces [`crate::AppAction`] instructions for the runtime to execute.
//!
//! # Responsibilities
//!
//! - Tracks the trip phase, accepting forward moves only.
//! - Holds the resolved user profile and selected destination.
//! - Recomputes the [`PresentationIntent`] after every change.
//! - Translates button presses into delegate dispatches.

use connie_core::{
    ActionKind, ActorRole, Destination, PresentationIntent, TripPhase, UserProfile,
    compute_intent_with_destination, resolve_action,
};

use crate::{AppAction, AppEvent, KeyInput, TripContext, TripUpdate};

const WAITING_FOR_PROFILE: &str = "Waiting for profile...";

/// Application state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable in simulation.
#[derive(Debug, Clone)]
pub struct App {
    /// Local participant role. Fixed for the session.
    role: ActorRole,
    /// Signed-in user. `None` until the profile store answers.
    user: Option<UserProfile>,
    /// Current trip phase.
    phase: TripPhase,
    /// Selected drop-off place.
    destination: Option<Destination>,
    /// Intent for the current inputs. `None` while waiting for a profile.
    intent: Option<PresentationIntent>,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
    /// Transient status message. `None` if no message.
    status_message: Option<String>,
}

impl App {
    /// Create a new App for a session with the given role.
    pub fn new(role: ActorRole) -> Self {
        let mut app = Self {
            role,
            user: None,
            phase: TripPhase::default(),
            destination: None,
            intent: None,
            terminal_size: (80, 24),
            status_message: None,
        };
        app.refresh_intent();
        app
    }

    /// Create a new App with a destination already picked.
    #[must_use]
    pub fn with_destination(mut self, destination: Destination) -> Self {
        self.destination = Some(destination);
        self.refresh_intent();
        self
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Tick => vec![],
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                vec![AppAction::Render]
            },
            AppEvent::ProfileLoaded(user) => {
                if user.role == self.role {
                    self.status_message = None;
                } else {
                    tracing::warn!(
                        session_role = %self.role,
                        profile_role = %user.role,
                        "profile role differs from session role"
                    );
                    self.status_message = Some(format!(
                        "Profile is a {} account; session stays {}",
                        user.role, self.role
                    ));
                }
                self.user = Some(user);
                self.refresh_intent();
                vec![AppAction::Render]
            },
            AppEvent::ProfileUnavailable { message } => {
                self.status_message = Some(format!("Profile unavailable: {message} (r to retry)"));
                vec![AppAction::Render]
            },
            AppEvent::PhaseChanged(phase) => self.advance(phase),
            AppEvent::TripEnded => self.end_trip(),
            AppEvent::DestinationSelected(destination) => {
                self.destination = Some(destination);
                self.refresh_intent();
                vec![AppAction::Render]
            },
            AppEvent::ActionSucceeded { action, update } => self.apply_update(action, update),
            AppEvent::ActionFailed { action, message } => {
                self.status_message = Some(format!("Could not {action}: {message}"));
                vec![AppAction::Render]
            },
        }
    }

    /// Handle keyboard input.
    fn handle_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        match key {
            KeyInput::Enter | KeyInput::Char(' ') => self.press_button(),
            KeyInput::Char('r') => self.retry_profile(),
            KeyInput::Char('q') | KeyInput::Esc => self.quit(),
            KeyInput::Char(_) => vec![],
        }
    }

    /// Move the trip to `phase`, rejecting regressions.
    fn advance(&mut self, phase: TripPhase) -> Vec<AppAction> {
        if !self.phase.can_advance_to(phase) {
            tracing::warn!(current = %self.phase, requested = %phase, "ignoring non-forward phase change");
            return vec![];
        }

        self.phase = phase;
        self.refresh_intent();
        if self.awaiting_profile() {
            return vec![AppAction::Render, AppAction::FetchProfile];
        }
        vec![AppAction::Render]
    }

    /// Start over at the default phase.
    fn end_trip(&mut self) -> Vec<AppAction> {
        self.phase = TripPhase::default();
        self.status_message = Some("Trip ended".to_string());
        self.refresh_intent();
        vec![AppAction::Render]
    }

    /// Apply the result of a successful delegate action.
    fn apply_update(&mut self, action: ActionKind, update: TripUpdate) -> Vec<AppAction> {
        tracing::debug!(%action, ?update, "applying delegate result");
        self.status_message = None;
        match update {
            TripUpdate::Advanced(phase) => {
                let mut actions = self.advance(phase);
                if !actions.contains(&AppAction::Render) {
                    actions.insert(0, AppAction::Render);
                }
                actions
            },
            TripUpdate::Unchanged => vec![AppAction::Render],
            TripUpdate::Ended => self.end_trip(),
        }
    }

    /// The phase needs an actor and no profile has resolved yet.
    fn awaiting_profile(&self) -> bool {
        self.phase.requires_actor() && self.user.is_none()
    }

    /// Recompute the intent from the current inputs.
    ///
    /// While the profile is outstanding the intent is withheld instead.
    fn refresh_intent(&mut self) {
        if self.awaiting_profile() {
            self.intent = None;
            self.status_message = Some(WAITING_FOR_PROFILE.to_string());
            return;
        }

        match compute_intent_with_destination(
            self.phase,
            self.role,
            self.user.as_ref(),
            self.destination.as_ref(),
        ) {
            Ok(intent) => {
                tracing::debug!(phase = %self.phase, action = %intent.button_action, "intent updated");
                self.intent = Some(intent);
            },
            Err(e) => {
                tracing::error!("Failed to compute intent: {e}");
                self.intent = None;
                self.status_message = Some(e.to_string());
            },
        }
    }

    /// Press the action button.
    ///
    /// Produces a dispatch only when the button is enabled and bound to an
    /// action.
    pub fn press_button(&mut self) -> Vec<AppAction> {
        let Some(intent) = self.intent.as_ref().filter(|i| i.button_enabled) else {
            return vec![];
        };

        match resolve_action(intent) {
            ActionKind::None => vec![],
            action => {
                self.status_message = Some(format!("Working on {action}..."));
                vec![AppAction::Render, AppAction::Dispatch(action)]
            },
        }
    }

    /// Ask the runtime to fetch the profile again.
    pub fn retry_profile(&mut self) -> Vec<AppAction> {
        self.status_message = Some("Loading profile...".to_string());
        vec![AppAction::FetchProfile, AppAction::Render]
    }

    /// Quit the application.
    pub fn quit(&self) -> Vec<AppAction> {
        vec![AppAction::Quit]
    }

    /// Snapshot of the trip for the delegate.
    pub fn trip_context(&self) -> TripContext {
        TripContext {
            phase: self.phase,
            role: self.role,
            user: self.user.clone(),
            destination: self.destination.clone(),
        }
    }

    /// Session role.
    pub fn role(&self) -> ActorRole {
        self.role
    }

    /// Signed-in user. `None` until resolved.
    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// Current trip phase.
    pub fn phase(&self) -> TripPhase {
        self.phase
    }

    /// Selected drop-off place.
    pub fn destination(&self) -> Option<&Destination> {
        self.destination.as_ref()
    }

    /// Intent for the current inputs. `None` while waiting for a profile.
    pub fn intent(&self) -> Option<&PresentationIntent> {
        self.intent.as_ref()
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// Transient status message. `None` if no message.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passenger_app() -> App {
        let mut app = App::new(ActorRole::Passenger);
        let _ = app.handle(AppEvent::ProfileLoaded(UserProfile::new(
            "u-ana",
            "Ana",
            ActorRole::Passenger,
        )));
        app
    }

    #[test]
    fn new_app_can_request_ride() {
        let app = App::new(ActorRole::Driver);

        assert_eq!(app.phase(), TripPhase::RequestingRide);
        assert_eq!(app.intent().map(|i| i.button_action), Some(ActionKind::RequestRide));
    }

    #[test]
    fn press_dispatches_bound_action() {
        let mut app = passenger_app();
        let actions = app.press_button();

        assert!(matches!(actions.as_slice(), [
            AppAction::Render,
            AppAction::Dispatch(ActionKind::RequestRide)
        ]));
        assert_eq!(app.status_message(), Some("Working on request ride..."));
    }

    #[test]
    fn press_on_disabled_button_does_nothing() {
        let mut app = App::new(ActorRole::Driver);
        let _ = app.handle(AppEvent::ProfileLoaded(UserProfile::new("u", "Tom", ActorRole::Driver)));
        let _ = app.handle(AppEvent::PhaseChanged(TripPhase::InProgress));

        assert!(app.press_button().is_empty());
    }

    #[test]
    fn regression_is_ignored() {
        let mut app = passenger_app();
        let _ = app.handle(AppEvent::PhaseChanged(TripPhase::PickupPending));
        let actions = app.handle(AppEvent::PhaseChanged(TripPhase::Accepted));

        assert!(actions.is_empty());
        assert_eq!(app.phase(), TripPhase::PickupPending);
    }

    #[test]
    fn phase_without_profile_requests_fetch() {
        let mut app = App::new(ActorRole::Passenger);
        let actions = app.handle(AppEvent::PhaseChanged(TripPhase::Accepted));

        assert!(matches!(actions.as_slice(), [AppAction::Render, AppAction::FetchProfile]));
        assert_eq!(app.phase(), TripPhase::Accepted);
        assert!(app.intent().is_none());

        let _ = app.handle(AppEvent::ProfileLoaded(UserProfile::new(
            "u-ana",
            "Ana",
            ActorRole::Passenger,
        )));
        assert_eq!(app.intent().map(|i| i.title_text.as_str()), Some("En Route To Guest"));
    }

    #[test]
    fn destination_while_waiting_keeps_waiting() {
        let mut app = App::new(ActorRole::Passenger);
        let _ = app.handle(AppEvent::PhaseChanged(TripPhase::Accepted));
        let actions = app.handle(AppEvent::DestinationSelected(Destination::new(
            "Corner Store",
            "12 Main St",
        )));

        assert_eq!(actions, vec![AppAction::Render]);
        assert!(app.intent().is_none());
        assert_eq!(app.status_message(), Some(WAITING_FOR_PROFILE));
        assert_eq!(app.destination().map(|d| d.name.as_str()), Some("Corner Store"));

        let _ = app.handle(AppEvent::ProfileLoaded(UserProfile::new(
            "u-ana",
            "Ana",
            ActorRole::Passenger,
        )));
        assert_eq!(app.intent().map(|i| i.address_text.as_str()), Some("12 Main St"));
        assert_eq!(app.status_message(), None);
    }

    #[test]
    fn action_success_clears_working_status() {
        let mut app = passenger_app();
        let _ = app.press_button();

        let actions = app.handle(AppEvent::ActionSucceeded {
            action: ActionKind::RequestRide,
            update: TripUpdate::Advanced(TripPhase::Accepted),
        });
        assert_eq!(actions, vec![AppAction::Render]);
        assert_eq!(app.phase(), TripPhase::Accepted);
        assert_eq!(app.status_message(), None);

        let _ = app.press_button();
        let actions = app.handle(AppEvent::ActionSucceeded {
            action: ActionKind::GetDirections,
            update: TripUpdate::Unchanged,
        });
        assert_eq!(actions, vec![AppAction::Render]);
        assert_eq!(app.status_message(), None);
    }

    #[test]
    fn stale_advance_still_repaints() {
        let mut app = passenger_app();
        let _ = app.handle(AppEvent::PhaseChanged(TripPhase::PickupPending));
        let _ = app.press_button();

        let actions = app.handle(AppEvent::ActionSucceeded {
            action: ActionKind::GetDirections,
            update: TripUpdate::Advanced(TripPhase::ActorArrived),
        });
        assert_eq!(actions, vec![AppAction::Render]);
        assert_eq!(app.phase(), TripPhase::PickupPending);
        assert_eq!(app.status_message(), None);
    }

    #[test]
    fn resize_records_size_and_repaints() {
        let mut app = passenger_app();
        let actions = app.handle(AppEvent::Resize(120, 40));

        assert_eq!(actions, vec![AppAction::Render]);
        assert_eq!(app.terminal_size(), (120, 40));
    }

    #[test]
    fn trip_ended_starts_over() {
        let mut app = passenger_app();
        let _ = app.handle(AppEvent::PhaseChanged(TripPhase::Accepted));
        let _ = app.handle(AppEvent::TripEnded);

        assert_eq!(app.phase(), TripPhase::RequestingRide);
        assert_eq!(app.status_message(), Some("Trip ended"));
    }

    #[test]
    fn mismatched_profile_role_keeps_session_role() {
        let mut app = App::new(ActorRole::Driver);
        let _ = app.handle(AppEvent::ProfileLoaded(UserProfile::new(
            "u-ana",
            "Ana",
            ActorRole::Passenger,
        )));

        assert_eq!(app.role(), ActorRole::Driver);
        assert!(app.status_message().is_some_and(|s| s.contains("passenger")));
    }

    #[test]
    fn keys_map_to_actions() {
        let mut app = passenger_app();

        assert_eq!(app.handle(AppEvent::Key(KeyInput::Esc)), vec![AppAction::Quit]);
        assert_eq!(app.handle(AppEvent::Key(KeyInput::Char('q'))), vec![AppAction::Quit]);
        assert_eq!(app.handle(AppEvent::Key(KeyInput::Char('r'))), vec![
            AppAction::FetchProfile,
            AppAction::Render
        ]);
        assert!(app.handle(AppEvent::Key(KeyInput::Char('x'))).is_empty());
    }

    #[test]
    fn action_failure_sets_status() {
        let mut app = passenger_app();
        let _ = app.handle(AppEvent::ActionFailed {
            action: ActionKind::RequestRide,
            message: "offline".into(),
        });

        assert_eq!(app.status_message(), Some("Could not request ride: offline"));
    }
}
