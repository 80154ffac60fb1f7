//! Application input events.
//!
//! This module defines [`AppEvent`], the set of inputs that drive the
//! [`crate::App`] state machine.
//!
//! Events originate from two distinct sources:
//! - User interactions (keyboard, resize) and system ticks.
//! - Collaborator results: profile fetches, delegate outcomes, and remote trip
//!   updates.

use connie_core::{ActionKind, Destination, TripPhase, UserProfile};

use crate::{KeyInput, TripUpdate};

/// Events processed by the App state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Periodic tick.
    Tick,

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// The profile store resolved the signed-in user.
    ProfileLoaded(UserProfile),

    /// The profile store failed.
    ProfileUnavailable {
        /// Error description.
        message: String,
    },

    /// The trip moved to a new phase.
    PhaseChanged(TripPhase),

    /// The trip was cancelled; the session starts over.
    TripEnded,

    /// A drop-off place was picked.
    DestinationSelected(Destination),

    /// A delegate action completed and reported how the trip moved.
    ActionSucceeded {
        /// Action that ran.
        action: ActionKind,
        /// Resulting trip update.
        update: TripUpdate,
    },

    /// A delegate action failed.
    ActionFailed {
        /// Action that failed.
        action: ActionKind,
        /// Error description.
        message: String,
    },
}
