//! Terminal UI for Connie
//!
//! A thin shell over [`connie_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic [`connie_app::Runtime`].
//!
//! This crate only handles terminal rendering, key translation and reading
//! profiles from disk.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod demo;
pub mod profile_store;
pub mod terminal;
pub mod ui;

pub use connie_app::{App, AppAction, AppEvent, Driver, KeyInput, Runtime};
pub use demo::{DemoProfile, LocalTrip};
pub use profile_store::JsonProfileStore;
pub use terminal::{TerminalDriver, TerminalError};
