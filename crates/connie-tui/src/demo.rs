//! In-process stand-ins for the hosted backend.
//!
//! The terminal front end has no network backend of its own. [`LocalTrip`]
//! moves the trip forward as the backend would, and [`DemoProfile`] serves a
//! fixed profile when no profile document is given.

use connie_app::{ProfileStore, TripContext, TripDelegate, TripUpdate, local_update};
use connie_core::{ActionKind, DelegateError, ProfileError, UserProfile};

/// [`ProfileStore`] that always answers with the same user.
#[derive(Debug, Clone)]
pub struct DemoProfile {
    user: UserProfile,
}

impl DemoProfile {
    /// Serve `user` as the signed-in profile.
    pub fn new(user: UserProfile) -> Self {
        Self { user }
    }
}

impl ProfileStore for DemoProfile {
    async fn fetch_current_user(&self) -> Result<UserProfile, ProfileError> {
        Ok(self.user.clone())
    }
}

/// [`TripDelegate`] that applies [`local_update`] in process.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTrip;

impl LocalTrip {
    fn perform(action: ActionKind, context: &TripContext) -> Result<TripUpdate, DelegateError> {
        let phase = context.phase;
        let update = local_update(action, phase).ok_or_else(|| DelegateError::Rejected {
            action,
            reason: format!("not allowed while {phase}"),
        })?;
        tracing::info!(%action, %phase, ?update, "Local trip updated");
        Ok(update)
    }
}

impl TripDelegate for LocalTrip {
    async fn on_request_ride(&mut self, context: &TripContext) -> Result<TripUpdate, DelegateError> {
        Self::perform(ActionKind::RequestRide, context)
    }

    async fn on_cancel(&mut self, context: &TripContext) -> Result<TripUpdate, DelegateError> {
        Self::perform(ActionKind::Cancel, context)
    }

    async fn on_get_directions(&mut self, context: &TripContext) -> Result<TripUpdate, DelegateError> {
        Self::perform(ActionKind::GetDirections, context)
    }

    async fn on_confirm_pickup(&mut self, context: &TripContext) -> Result<TripUpdate, DelegateError> {
        Self::perform(ActionKind::ConfirmPickup, context)
    }

    async fn on_confirm_dropoff(
        &mut self,
        context: &TripContext,
    ) -> Result<TripUpdate, DelegateError> {
        Self::perform(ActionKind::ConfirmDropoff, context)
    }
}
