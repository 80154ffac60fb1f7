//! Fuzz target for the presentation state machine
//!
//! # Strategy
//!
//! - Any phase and role
//! - Present or absent actor with arbitrary (including empty and non-ASCII)
//!   display names
//! - Present or absent destination
//!
//! # Invariants
//!
//! - Computation never panics
//! - Fails ONLY when the phase needs an actor and none was supplied
//! - Every intent passes the standard invariant set
//! - Address is visible ONLY before the actor arrives
//! - Repeated computation gives the same intent

#![no_main]

use arbitrary::Arbitrary;
use connie_core::{
    ActorRole, Destination, IntentError, TripPhase, UserProfile, compute_intent_with_destination,
};
use connie_harness::InvariantRegistry;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct IntentScenario {
    phase: TripPhase,
    role: ActorRole,
    actor: Option<(String, ActorRole)>,
    destination: Option<(String, String)>,
}

fuzz_target!(|scenario: IntentScenario| {
    let user = scenario.actor.map(|(name, role)| UserProfile::new("fuzz", name, role));
    let destination = scenario.destination.map(|(name, address)| Destination::new(name, address));

    let result = compute_intent_with_destination(
        scenario.phase,
        scenario.role,
        user.as_ref(),
        destination.as_ref(),
    );

    let intent = match result {
        Ok(intent) => intent,
        Err(IntentError::MissingActor { phase }) => {
            assert_eq!(phase, scenario.phase);
            assert!(phase.requires_actor());
            assert!(user.is_none());
            return;
        },
    };

    assert!(!scenario.phase.requires_actor() || user.is_some());

    if let Err(violations) = InvariantRegistry::standard().check_all(&intent) {
        panic!("invariant violations: {violations:?}");
    }

    let early = matches!(scenario.phase, TripPhase::RequestingRide | TripPhase::Accepted);
    assert_eq!(intent.address_visible, early);

    let again = compute_intent_with_destination(
        scenario.phase,
        scenario.role,
        user.as_ref(),
        destination.as_ref(),
    );
    assert_eq!(again.as_ref(), Ok(&intent));
});
