//! Trip lifecycle phases and actor roles.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stage of a trip, from request to completion.
///
/// Variants are declared in lifecycle order and the derived ordering follows
/// it. A trip only ever moves forward; see [`TripPhase::can_advance_to`].
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[serde(rename_all = "snake_case")]
pub enum TripPhase {
    /// No actor assigned yet. Initial phase of every trip.
    #[default]
    RequestingRide,
    /// A driver accepted the request and is on the way.
    Accepted,
    /// The driver reached the pickup point.
    ActorArrived,
    /// Waiting for the pickup to be confirmed curbside.
    PickupPending,
    /// Pickup confirmed, trip underway.
    InProgress,
    /// Terminal phase.
    Completed,
}

impl TripPhase {
    /// All phases in lifecycle order.
    pub const ALL: [Self; 6] = [
        Self::RequestingRide,
        Self::Accepted,
        Self::ActorArrived,
        Self::PickupPending,
        Self::InProgress,
        Self::Completed,
    ];

    /// The phase that follows this one. `None` for [`TripPhase::Completed`].
    pub fn next(self) -> Option<Self> {
        match self {
            Self::RequestingRide => Some(Self::Accepted),
            Self::Accepted => Some(Self::ActorArrived),
            Self::ActorArrived => Some(Self::PickupPending),
            Self::PickupPending => Some(Self::InProgress),
            Self::InProgress => Some(Self::Completed),
            Self::Completed => None,
        }
    }

    /// True only for [`TripPhase::Completed`].
    pub fn is_terminal(self) -> bool {
        self == Self::Completed
    }

    /// Whether presenting this phase needs a resolved user profile.
    ///
    /// Only [`TripPhase::RequestingRide`] precedes actor assignment.
    pub fn requires_actor(self) -> bool {
        self != Self::RequestingRide
    }

    /// Whether a trip in this phase may move to `next`.
    ///
    /// Strictly forward moves only. Skipping phases is allowed since domain
    /// events may be coalesced upstream.
    pub fn can_advance_to(self, next: Self) -> bool {
        next > self
    }
}

impl fmt::Display for TripPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::RequestingRide => "requesting ride",
            Self::Accepted => "accepted",
            Self::ActorArrived => "arrived",
            Self::PickupPending => "pickup pending",
            Self::InProgress => "in progress",
            Self::Completed => "completed",
        };
        f.write_str(name)
    }
}

/// Whether the local participant fulfils the trip or requested it.
///
/// Fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[serde(rename_all = "snake_case", try_from = "RoleRecord")]
pub enum ActorRole {
    /// Fulfils the trip.
    Driver,
    /// Requested the trip.
    Passenger,
}

impl ActorRole {
    /// Both roles.
    pub const ALL: [Self; 2] = [Self::Driver, Self::Passenger];

    /// Integer code used by the realtime database user records.
    pub fn account_code(self) -> u8 {
        match self {
            Self::Passenger => 0,
            Self::Driver => 1,
        }
    }
}

impl fmt::Display for ActorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Driver => f.write_str("driver"),
            Self::Passenger => f.write_str("passenger"),
        }
    }
}

/// Wire forms accepted for a role: the database integer code or a name.
#[derive(Deserialize)]
#[serde(untagged)]
enum RoleRecord {
    Code(u8),
    Name(String),
}

impl TryFrom<RoleRecord> for ActorRole {
    type Error = String;

    fn try_from(record: RoleRecord) -> Result<Self, Self::Error> {
        match record {
            RoleRecord::Code(0) => Ok(Self::Passenger),
            RoleRecord::Code(1) => Ok(Self::Driver),
            RoleRecord::Code(code) => Err(format!("unknown account type code {code}")),
            RoleRecord::Name(name) => match name.to_ascii_lowercase().as_str() {
                "passenger" => Ok(Self::Passenger),
                "driver" => Ok(Self::Driver),
                _ => Err(format!("unknown account type {name:?}")),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_phase_is_requesting_ride() {
        assert_eq!(TripPhase::default(), TripPhase::RequestingRide);
    }

    #[test]
    fn next_walks_lifecycle_in_order() {
        let mut walked = vec![TripPhase::default()];
        while let Some(next) = walked.last().and_then(|p| p.next()) {
            walked.push(next);
        }
        assert_eq!(walked, TripPhase::ALL);
        assert!(TripPhase::Completed.is_terminal());
    }

    #[test]
    fn advancement_is_strictly_forward() {
        assert!(TripPhase::Accepted.can_advance_to(TripPhase::InProgress));
        assert!(!TripPhase::Accepted.can_advance_to(TripPhase::Accepted));
        assert!(!TripPhase::Completed.can_advance_to(TripPhase::RequestingRide));
    }

    #[test]
    fn only_requesting_ride_skips_actor() {
        let without: Vec<_> = TripPhase::ALL.into_iter().filter(|p| !p.requires_actor()).collect();
        assert_eq!(without, vec![TripPhase::RequestingRide]);
    }

    #[test]
    fn role_from_database_code() {
        assert_eq!(ActorRole::try_from(RoleRecord::Code(0)), Ok(ActorRole::Passenger));
        assert_eq!(ActorRole::try_from(RoleRecord::Code(1)), Ok(ActorRole::Driver));
        assert!(ActorRole::try_from(RoleRecord::Code(7)).is_err());
    }

    #[test]
    fn role_from_name_ignores_case() {
        assert_eq!(ActorRole::try_from(RoleRecord::Name("Driver".into())), Ok(ActorRole::Driver));
        assert!(ActorRole::try_from(RoleRecord::Name("courier".into())).is_err());
    }
}
