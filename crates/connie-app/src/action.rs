//! Application side-effects and intents.
//!
//! This module defines the [`AppAction`] enum, which represents instructions
//! produced by the [`crate::App`] state machine for the runtime to execute.

use connie_core::ActionKind;

/// Actions produced by the App state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Render the UI.
    Render,

    /// Quit the application.
    Quit,

    /// Resolve the signed-in user through the profile store.
    FetchProfile,

    /// Hand a lifecycle action to the trip delegate.
    Dispatch(ActionKind),
}
