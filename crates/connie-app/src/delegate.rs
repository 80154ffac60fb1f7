//! Trip delegate collaborator.
//!
//! The state machine only names the action a button press means. Performing
//! it (uploading the request, cancelling, confirming pickup or drop-off) is
//! the delegate's job, and so is reporting how the trip moved as a result.

use std::future::Future;

use connie_core::{ActionKind, ActorRole, DelegateError, Destination, TripPhase, UserProfile};

/// Trip state handed to the delegate along with each action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripContext {
    /// Phase the button was pressed in.
    pub phase: TripPhase,
    /// Session role.
    pub role: ActorRole,
    /// Signed-in user, if resolved.
    pub user: Option<UserProfile>,
    /// Selected drop-off place, if any.
    pub destination: Option<Destination>,
}

/// How a successful delegate action moved the trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripUpdate {
    /// The trip advanced to this phase.
    Advanced(TripPhase),
    /// Nothing to apply (e.g. directions were opened).
    Unchanged,
    /// The trip was left entirely.
    Ended,
}

/// Performs lifecycle actions on behalf of the ride action panel.
///
/// Each method may fail independently. On success the delegate reports the
/// resulting [`TripUpdate`]; the app never advances the phase on its own.
pub trait TripDelegate: Send {
    /// Upload a new trip request.
    fn on_request_ride(
        &mut self,
        context: &TripContext,
    ) -> impl Future<Output = Result<TripUpdate, DelegateError>> + Send;

    /// Cancel the current trip.
    fn on_cancel(
        &mut self,
        context: &TripContext,
    ) -> impl Future<Output = Result<TripUpdate, DelegateError>> + Send;

    /// Open directions to the other party.
    fn on_get_directions(
        &mut self,
        context: &TripContext,
    ) -> impl Future<Output = Result<TripUpdate, DelegateError>> + Send;

    /// Confirm the curbside pickup.
    fn on_confirm_pickup(
        &mut self,
        context: &TripContext,
    ) -> impl Future<Output = Result<TripUpdate, DelegateError>> + Send;

    /// Confirm the drop-off.
    fn on_confirm_dropoff(
        &mut self,
        context: &TripContext,
    ) -> impl Future<Output = Result<TripUpdate, DelegateError>> + Send;
}

/// Route an action to the matching delegate method.
///
/// [`ActionKind::None`] never reaches the delegate.
pub async fn dispatch<T: TripDelegate>(
    delegate: &mut T,
    action: ActionKind,
    context: &TripContext,
) -> Result<TripUpdate, DelegateError> {
    match action {
        ActionKind::None => Ok(TripUpdate::Unchanged),
        ActionKind::RequestRide => delegate.on_request_ride(context).await,
        ActionKind::Cancel => delegate.on_cancel(context).await,
        ActionKind::GetDirections => delegate.on_get_directions(context).await,
        ActionKind::ConfirmPickup => delegate.on_confirm_pickup(context).await,
        ActionKind::ConfirmDropoff => delegate.on_confirm_dropoff(context).await,
    }
}

/// Trip progression applied by a backend that lives in the same process.
///
/// | action         | accepted in              | result               |
/// |----------------|--------------------------|----------------------|
/// | RequestRide    | RequestingRide           | Advanced(Accepted)   |
/// | GetDirections  | before PickupPending     | Advanced(next phase) |
/// | GetDirections  | PickupPending and later  | Unchanged            |
/// | ConfirmPickup  | PickupPending            | Advanced(InProgress) |
/// | ConfirmDropoff | Completed                | Ended                |
/// | Cancel         | any                      | Ended                |
///
/// Returns `None` for any other pairing.
pub fn local_update(action: ActionKind, phase: TripPhase) -> Option<TripUpdate> {
    match (action, phase) {
        (ActionKind::RequestRide, TripPhase::RequestingRide) => {
            Some(TripUpdate::Advanced(TripPhase::Accepted))
        },
        (ActionKind::GetDirections, p) if p < TripPhase::PickupPending => {
            p.next().map(TripUpdate::Advanced)
        },
        (ActionKind::GetDirections, _) => Some(TripUpdate::Unchanged),
        (ActionKind::ConfirmPickup, TripPhase::PickupPending) => {
            Some(TripUpdate::Advanced(TripPhase::InProgress))
        },
        (ActionKind::ConfirmDropoff, TripPhase::Completed) | (ActionKind::Cancel, _) => {
            Some(TripUpdate::Ended)
        },
        _ => None,
    }
}
