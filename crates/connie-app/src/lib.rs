//! Application layer for Connie
//!
//! Pure session state machine and generic runtime for the ride action panel,
//! enabling deterministic simulation testing with the same code that runs in
//! production.
//!
//! # Components
//!
//! - [`App`]: session state machine (phase, profile, intent, key handling)
//! - [`ProfileStore`]: collaborator that resolves the signed-in user
//! - [`TripDelegate`]: collaborator that performs lifecycle actions
//! - [`Driver`]: trait for platform-specific I/O and rendering
//! - [`Runtime`]: generic orchestration loop using all of the above

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod delegate;
mod driver;
mod event;
mod input;
mod runtime;
mod store;

pub use action::AppAction;
pub use app::App;
pub use delegate::{TripContext, TripDelegate, TripUpdate, dispatch, local_update};
pub use driver::Driver;
pub use event::AppEvent;
pub use input::KeyInput;
pub use runtime::Runtime;
pub use store::ProfileStore;
