//! Presentation intent produced by the state machine.
//!
//! The intent is the fully resolved set of values a renderer paints for the
//! ride action panel. It has no identity of its own: for a fixed input it is
//! always the same value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle action bound to the panel's button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Button does nothing.
    #[default]
    None,
    /// Upload a new trip request.
    RequestRide,
    /// Cancel the trip.
    Cancel,
    /// Open directions to the other party.
    GetDirections,
    /// Confirm the curbside pickup.
    ConfirmPickup,
    /// Confirm the drop-off.
    ConfirmDropoff,
}

impl ActionKind {
    /// Button text for this action. `None` has no canonical label.
    pub fn label(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::RequestRide => Some("CALL CONNIE"),
            Self::Cancel => Some("CANCEL CALL"),
            Self::GetDirections => Some("MEET GUEST"),
            Self::ConfirmPickup => Some("MEET CURBSIDE"),
            Self::ConfirmDropoff => Some("DELIVERY COMPLETE"),
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::RequestRide => "request ride",
            Self::Cancel => "cancel",
            Self::GetDirections => "get directions",
            Self::ConfirmPickup => "confirm pickup",
            Self::ConfirmDropoff => "confirm dropoff",
        };
        f.write_str(name)
    }
}

/// Everything the ride action panel shows for one `(phase, role, user)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationIntent {
    /// Panel headline. Empty when there is nothing to announce yet.
    pub title_text: String,
    /// Destination address under the headline.
    pub address_text: String,
    /// Whether the address line is shown.
    pub address_visible: bool,
    /// Letter drawn in the avatar circle.
    pub avatar_initial: char,
    /// Name under the avatar.
    pub actor_label: String,
    /// Button text.
    pub button_label: String,
    /// Whether the button accepts presses.
    pub button_enabled: bool,
    /// Action a press triggers.
    pub button_action: ActionKind,
}
