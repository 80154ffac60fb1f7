//! Generic runtime for application orchestration.
//!
//! The Runtime drives the application event loop, coordinating between:
//! - [`App`]: session state machine
//! - [`ProfileStore`]: profile lookups
//! - [`TripDelegate`]: lifecycle actions
//! - [`Driver`]: platform-specific I/O

use connie_core::{ActionKind, ActorRole};

use crate::{App, AppAction, AppEvent, Driver, ProfileStore, TripDelegate, dispatch};

/// Generic runtime that orchestrates App, collaborators, and Driver.
///
/// # Type Parameters
///
/// - `D`: Platform-specific I/O driver
/// - `P`: Profile store
/// - `T`: Trip delegate
pub struct Runtime<D, P, T>
where
    D: Driver,
    P: ProfileStore,
    T: TripDelegate,
{
    driver: D,
    app: App,
    profiles: P,
    delegate: T,
}

impl<D, P, T> Runtime<D, P, T>
where
    D: Driver,
    P: ProfileStore,
    T: TripDelegate,
{
    /// Create a new runtime for a session with the given role.
    pub fn new(driver: D, profiles: P, delegate: T, role: ActorRole) -> Self {
        Self::with_app(driver, profiles, delegate, App::new(role))
    }

    /// Create a new runtime around a prepared App.
    pub fn with_app(driver: D, profiles: P, delegate: T, app: App) -> Self {
        Self { driver, app, profiles, delegate }
    }

    /// Run the main event loop.
    ///
    /// This is the core orchestration loop that:
    /// 1. Paints the initial panel and resolves the profile
    /// 2. Polls for input events from the driver
    /// 3. Executes the resulting actions, feeding collaborator results back
    ///    into the App
    ///
    /// Returns the final App state once the App asks to quit.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(mut self) -> Result<App, D::Error> {
        self.driver.render(&self.app)?;

        let mut should_quit = self.process_actions(vec![AppAction::FetchProfile]).await?;
        while !should_quit {
            let actions = self.driver.poll_event(&mut self.app).await?;
            should_quit = self.process_actions(actions).await?;
        }

        self.driver.stop();
        Ok(self.app)
    }

    /// Process actions returned by the App.
    ///
    /// Returns `true` if should quit.
    async fn process_actions(&mut self, initial_actions: Vec<AppAction>) -> Result<bool, D::Error> {
        let mut pending_actions = initial_actions;

        while !pending_actions.is_empty() {
            let actions = std::mem::take(&mut pending_actions);

            for action in actions {
                match action {
                    AppAction::Render => self.driver.render(&self.app)?,
                    AppAction::Quit => return Ok(true),
                    AppAction::FetchProfile => {
                        let event = self.fetch_profile().await;
                        pending_actions.extend(self.app.handle(event));
                    },
                    AppAction::Dispatch(kind) => {
                        let event = self.dispatch(kind).await;
                        pending_actions.extend(self.app.handle(event));
                    },
                }
            }
        }
        Ok(false)
    }

    /// Resolve the profile and translate the outcome into an App event.
    async fn fetch_profile(&self) -> AppEvent {
        match self.profiles.fetch_current_user().await {
            Ok(user) => {
                tracing::info!(uid = %user.id, role = %user.role, "Profile loaded");
                AppEvent::ProfileLoaded(user)
            },
            Err(e) => {
                tracing::warn!(transient = e.is_transient(), "Failed to load profile: {e}");
                AppEvent::ProfileUnavailable { message: e.to_string() }
            },
        }
    }

    /// Hand an action to the delegate and translate the outcome.
    async fn dispatch(&mut self, kind: ActionKind) -> AppEvent {
        let context = self.app.trip_context();
        match dispatch(&mut self.delegate, kind, &context).await {
            Ok(update) => {
                tracing::info!(action = %kind, ?update, "Delegate action succeeded");
                AppEvent::ActionSucceeded { action: kind, update }
            },
            Err(e) => {
                tracing::warn!(transient = e.is_transient(), "Delegate action failed: {e}");
                AppEvent::ActionFailed { action: e.action(), message: e.reason().to_string() }
            },
        }
    }
}
