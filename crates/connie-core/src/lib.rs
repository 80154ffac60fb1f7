//! Trip lifecycle core for Connie.
//!
//! Domain types for a ride/delivery trip and the pure projection from
//! `(phase, role, user)` to the presentation intent painted by a frontend.
//!
//! # Components
//!
//! - [`TripPhase`] / [`ActorRole`]: lifecycle stage and local participant kind
//! - [`UserProfile`] / [`Destination`]: inputs owned by external collaborators
//! - [`compute_intent`]: deterministic, total projection to
//!   [`PresentationIntent`]
//! - [`resolve_action`]: the seam a renderer uses to route a button press
//!
//! Nothing in this crate performs I/O. Phase advancement happens elsewhere,
//! driven by confirmed domain events.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod intent;
mod machine;
mod phase;
mod profile;

pub use error::{DelegateError, IntentError, ProfileError};
pub use intent::{ActionKind, PresentationIntent};
pub use machine::{
    AVATAR_PLACEHOLDER, compute_intent, compute_intent_with_destination, resolve_action,
};
pub use phase::{ActorRole, TripPhase};
pub use profile::{Destination, UserProfile};
