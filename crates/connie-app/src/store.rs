//! Profile store collaborator.

use std::future::Future;

use connie_core::{ProfileError, UserProfile};

/// Resolves the signed-in user.
///
/// A single-shot read: every call fetches the record again. The runtime only
/// calls it on startup and when the app asks for a retry.
///
/// # Implementations
///
/// - **TUI**: `JsonProfileStore` reads a realtime-database export
/// - **Simulation**: `MemoryProfileStore` with injectable failures
pub trait ProfileStore: Send {
    /// Fetch the current user's profile.
    fn fetch_current_user(&self)
    -> impl Future<Output = Result<UserProfile, ProfileError>> + Send;
}
