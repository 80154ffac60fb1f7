//! Deterministic simulation harness for Connie testing.
//!
//! In-memory implementations of the [`connie_app::ProfileStore`],
//! [`connie_app::TripDelegate`] and [`connie_app::Driver`] traits, so the
//! production [`connie_app::Runtime`] runs unchanged in tests.
//!
//! # Invariant Testing
//!
//! The `invariants` module checks behavioral properties of every rendered
//! [`connie_core::PresentationIntent`]. Use [`InvariantRegistry::standard()`]
//! for the common set.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod invariants;
pub mod profile_store;
pub mod scripted_delegate;
pub mod sim_driver;

pub use invariants::{
    AvatarMatchesActor, ButtonEnabledMatchesAction, Invariant, InvariantRegistry,
    InvariantResult, LabelMatchesAction, Violation,
};
pub use profile_store::MemoryProfileStore;
pub use scripted_delegate::{DelegateCall, ScriptedDelegate};
pub use sim_driver::{RenderedFrame, SimDriver, SimDriverError};
