//! Trip presentation state machine.
//!
//! A projection, not a transition function: it maps the current
//! `(phase, role, user)` to a [`PresentationIntent`] and never touches the
//! phase itself. Callers advance the phase when a delegate confirms a domain
//! event and then ask for the new intent.
//!
//! # Table
//!
//! | phase          | passenger                          | driver                           |
//! |----------------|------------------------------------|----------------------------------|
//! | RequestingRide | CALL CONNIE → RequestRide          | same                             |
//! | Accepted       | En Route To Guest, MEET GUEST      | En Route To You, CANCEL CALL     |
//! | ActorArrived   | as Accepted                        | Connie Arrived!, CANCEL CALL     |
//! | PickupPending  | Connie Arrived!, MEET CURBSIDE     | same                             |
//! | InProgress     | MEET GUEST → GetDirections         | KICK IT CURBSIDE, disabled       |
//! | Completed      | DELIVERY COMPLETE → ConfirmDropoff | DELIVERY COMPLETE, disabled      |

use crate::{
    ActionKind, ActorRole, Destination, IntentError, PresentationIntent, TripPhase, UserProfile,
};

/// Avatar letter used when no display name is available.
pub const AVATAR_PLACEHOLDER: char = 'K';

const EN_ROUTE_TO_GUEST: &str = "En Route To Guest";
const EN_ROUTE_TO_YOU: &str = "En Route To You";
const ARRIVED: &str = "Connie Arrived!";
const DELIVERY_IN_PROGRESS: &str = "Delivery In Progress";
const DRIVER_IN_PROGRESS_LABEL: &str = "KICK IT CURBSIDE";
const DRIVER_COMPLETED_LABEL: &str = "DELIVERY COMPLETE";

/// Button configuration before it is flattened into the intent.
enum Button {
    /// Enabled, labelled by the action.
    Action(ActionKind),
    /// Fixed text, presses ignored.
    Disabled(&'static str),
}

/// Compute the presentation intent for a phase and role.
///
/// `user` may only be `None` in [`TripPhase::RequestingRide`]; every other
/// phase fails with [`IntentError::MissingActor`].
pub fn compute_intent(
    phase: TripPhase,
    role: ActorRole,
    user: Option<&UserProfile>,
) -> Result<PresentationIntent, IntentError> {
    compute_intent_with_destination(phase, role, user, None)
}

/// [`compute_intent`] with the selected drop-off place.
///
/// The destination names the panel before a driver is assigned and supplies
/// the address line.
pub fn compute_intent_with_destination(
    phase: TripPhase,
    role: ActorRole,
    user: Option<&UserProfile>,
    destination: Option<&Destination>,
) -> Result<PresentationIntent, IntentError> {
    if phase.requires_actor() && user.is_none() {
        tracing::debug!(%phase, %role, "intent requested before profile resolved");
        return Err(IntentError::MissingActor { phase });
    }

    let (title, button) = match (phase, role) {
        (TripPhase::RequestingRide, _) => {
            let title = destination.map(|d| d.name.clone()).unwrap_or_default();
            (title, Button::Action(ActionKind::RequestRide))
        },
        (TripPhase::Accepted | TripPhase::ActorArrived, ActorRole::Passenger) => {
            (EN_ROUTE_TO_GUEST.to_string(), Button::Action(ActionKind::GetDirections))
        },
        (TripPhase::Accepted, ActorRole::Driver) => {
            (EN_ROUTE_TO_YOU.to_string(), Button::Action(ActionKind::Cancel))
        },
        (TripPhase::ActorArrived, ActorRole::Driver) => {
            (ARRIVED.to_string(), Button::Action(ActionKind::Cancel))
        },
        (TripPhase::PickupPending, _) => {
            (ARRIVED.to_string(), Button::Action(ActionKind::ConfirmPickup))
        },
        (TripPhase::InProgress, ActorRole::Passenger) => {
            (ARRIVED.to_string(), Button::Action(ActionKind::GetDirections))
        },
        (TripPhase::InProgress, ActorRole::Driver) => {
            (ARRIVED.to_string(), Button::Disabled(DRIVER_IN_PROGRESS_LABEL))
        },
        (TripPhase::Completed, ActorRole::Passenger) => {
            (DELIVERY_IN_PROGRESS.to_string(), Button::Action(ActionKind::ConfirmDropoff))
        },
        (TripPhase::Completed, ActorRole::Driver) => {
            (DELIVERY_IN_PROGRESS.to_string(), Button::Disabled(DRIVER_COMPLETED_LABEL))
        },
    };

    let (button_label, button_enabled, button_action) = match button {
        Button::Action(action) => {
            (action.label().unwrap_or_default().to_string(), true, action)
        },
        Button::Disabled(label) => (label.to_string(), false, ActionKind::None),
    };

    Ok(PresentationIntent {
        title_text: title,
        address_text: destination.map(|d| d.address.clone()).unwrap_or_default(),
        address_visible: matches!(phase, TripPhase::RequestingRide | TripPhase::Accepted),
        avatar_initial: user.map_or(AVATAR_PLACEHOLDER, UserProfile::avatar_initial),
        actor_label: user.map(|u| u.display_name.clone()).unwrap_or_default(),
        button_label,
        button_enabled,
        button_action,
    })
}

/// Action a press of the intent's button triggers.
///
/// Renderers route presses through this instead of inspecting phase or role.
pub fn resolve_action(intent: &PresentationIntent) -> ActionKind {
    intent.button_action
}
