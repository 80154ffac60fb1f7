//! Error taxonomy for the trip presentation layer.
//!
//! Only [`IntentError`] is raised by the projection itself. The other two
//! belong to collaborators: [`ProfileError`] to the profile store and
//! [`DelegateError`] to the trip delegate. They live here so every frontend
//! shares one vocabulary for them.

use thiserror::Error;

use crate::{ActionKind, TripPhase};

/// Precondition violations of [`crate::compute_intent`].
///
/// A caller hitting this has a wiring bug: it asked for a phase that needs a
/// user before the profile resolved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntentError {
    /// Phase requires a user but none was supplied.
    #[error("phase {phase} requires a user profile but none was supplied")]
    MissingActor {
        /// Phase that was requested.
        phase: TripPhase,
    },
}

/// The profile store could not produce the current user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// No authenticated user for this session.
    #[error("no signed-in user")]
    NotSignedIn,

    /// The user record does not exist.
    #[error("user {uid} not found")]
    NotFound {
        /// Requested user id.
        uid: String,
    },

    /// The user record exists but cannot be decoded.
    #[error("user {uid} has a malformed record: {reason}")]
    Malformed {
        /// Requested user id.
        uid: String,
        /// Decoder message.
        reason: String,
    },

    /// The backend could not be reached.
    #[error("profile store unavailable: {0}")]
    Unavailable(String),
}

impl ProfileError {
    /// Returns true if retrying the fetch may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

/// A trip delegate action failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DelegateError {
    /// The backend refused the action (domain error).
    #[error("{action} rejected: {reason}")]
    Rejected {
        /// Action that failed.
        action: ActionKind,
        /// Backend message.
        reason: String,
    },

    /// The backend could not be reached.
    #[error("{action} failed: {reason}")]
    Unavailable {
        /// Action that failed.
        action: ActionKind,
        /// Transport message.
        reason: String,
    },
}

impl DelegateError {
    /// Action that failed.
    pub fn action(&self) -> ActionKind {
        match self {
            Self::Rejected { action, .. } | Self::Unavailable { action, .. } => *action,
        }
    }

    /// Backend message without the action prefix.
    pub fn reason(&self) -> &str {
        match self {
            Self::Rejected { reason, .. } | Self::Unavailable { reason, .. } => reason,
        }
    }

    /// Returns true if retrying the action may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}
