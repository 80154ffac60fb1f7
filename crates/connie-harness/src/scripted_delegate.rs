//! Scripted trip delegate.
//!
//! Applies [`connie_app::local_update`] so runtime tests can drive a whole
//! trip without a network, while recording every call and replaying injected
//! failures. Out-of-phase actions are rejected.

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use connie_app::{TripContext, TripDelegate, TripUpdate, local_update};
use connie_core::{ActionKind, DelegateError, TripPhase};

/// One recorded delegate invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelegateCall {
    /// Action performed.
    pub action: ActionKind,
    /// Phase the trip was in.
    pub phase: TripPhase,
}

/// Scripted delegate for testing and simulation.
///
/// Clones share state, so a test can inspect calls after handing the
/// delegate to a runtime.
#[derive(Clone, Default)]
pub struct ScriptedDelegate {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    calls: Vec<DelegateCall>,
    failures: VecDeque<String>,
}

impl ScriptedDelegate {
    /// Create a delegate with no queued failures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next action fail as unreachable with `reason`.
    pub fn fail_next(&self, reason: impl Into<String>) {
        self.lock().failures.push_back(reason.into());
    }

    /// All calls received, in order.
    pub fn calls(&self) -> Vec<DelegateCall> {
        self.lock().calls.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn perform(&self, action: ActionKind, context: &TripContext) -> Result<TripUpdate, DelegateError> {
        let phase = context.phase;
        let mut inner = self.lock();
        inner.calls.push(DelegateCall { action, phase });

        if let Some(reason) = inner.failures.pop_front() {
            return Err(DelegateError::Unavailable { action, reason });
        }
        drop(inner);

        local_update(action, phase).ok_or_else(|| {
            tracing::debug!(%action, %phase, "scripted delegate rejecting action");
            DelegateError::Rejected { action, reason: format!("not allowed while {phase}") }
        })
    }
}

impl TripDelegate for ScriptedDelegate {
    async fn on_request_ride(&mut self, context: &TripContext) -> Result<TripUpdate, DelegateError> {
        self.perform(ActionKind::RequestRide, context)
    }

    async fn on_cancel(&mut self, context: &TripContext) -> Result<TripUpdate, DelegateError> {
        self.perform(ActionKind::Cancel, context)
    }

    async fn on_get_directions(&mut self, context: &TripContext) -> Result<TripUpdate, DelegateError> {
        self.perform(ActionKind::GetDirections, context)
    }

    async fn on_confirm_pickup(&mut self, context: &TripContext) -> Result<TripUpdate, DelegateError> {
        self.perform(ActionKind::ConfirmPickup, context)
    }

    async fn on_confirm_dropoff(
        &mut self,
        context: &TripContext,
    ) -> Result<TripUpdate, DelegateError> {
        self.perform(ActionKind::ConfirmDropoff, context)
    }
}

#[cfg(test)]
mod tests {
    use connie_app::dispatch;
    use connie_core::ActorRole;

    use super::*;

    fn context(phase: TripPhase) -> TripContext {
        TripContext { phase, role: ActorRole::Passenger, user: None, destination: None }
    }

    #[tokio::test]
    async fn request_advances_to_accepted() {
        let mut delegate = ScriptedDelegate::new();
        let update =
            dispatch(&mut delegate, ActionKind::RequestRide, &context(TripPhase::RequestingRide))
                .await;

        assert_eq!(update, Ok(TripUpdate::Advanced(TripPhase::Accepted)));
        assert_eq!(delegate.calls(), vec![DelegateCall {
            action: ActionKind::RequestRide,
            phase: TripPhase::RequestingRide
        }]);
    }

    #[tokio::test]
    async fn none_never_reaches_delegate() {
        let mut delegate = ScriptedDelegate::new();
        let update = dispatch(&mut delegate, ActionKind::None, &context(TripPhase::InProgress)).await;

        assert_eq!(update, Ok(TripUpdate::Unchanged));
        assert!(delegate.calls().is_empty());
    }

    #[tokio::test]
    async fn pickup_outside_pending_is_rejected() {
        let mut delegate = ScriptedDelegate::new();
        let err = dispatch(&mut delegate, ActionKind::ConfirmPickup, &context(TripPhase::Accepted))
            .await
            .unwrap_err();

        assert!(matches!(err, DelegateError::Rejected { action: ActionKind::ConfirmPickup, .. }));
    }

    #[tokio::test]
    async fn injected_failure_is_unavailable() {
        let mut delegate = ScriptedDelegate::new();
        delegate.fail_next("offline");
        let err = dispatch(&mut delegate, ActionKind::Cancel, &context(TripPhase::Accepted))
            .await
            .unwrap_err();

        assert!(err.is_transient());
        assert_eq!(err.reason(), "offline");
    }
}
