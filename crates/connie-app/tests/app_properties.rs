//! Property-based tests for App state machine.
//!
//! Tests verify that phase ordering and intent invariants hold under
//! arbitrary event sequences.

use connie_app::{App, AppAction, AppEvent, KeyInput, TripUpdate};
use connie_core::{ActionKind, ActorRole, Destination, TripPhase, UserProfile};
use connie_harness::InvariantRegistry;
use proptest::prelude::*;

fn phase() -> impl Strategy<Value = TripPhase> {
    proptest::sample::select(TripPhase::ALL.to_vec())
}

fn role() -> impl Strategy<Value = ActorRole> {
    prop_oneof![Just(ActorRole::Passenger), Just(ActorRole::Driver)]
}

/// Generate random app events.
fn event() -> impl Strategy<Value = AppEvent> {
    prop_oneof![
        4 => phase().prop_map(AppEvent::PhaseChanged),
        2 => ("[A-Za-z]{0,6}", role())
            .prop_map(|(name, role)| AppEvent::ProfileLoaded(UserProfile::new("u-1", name, role))),
        1 => Just(AppEvent::ProfileUnavailable { message: "offline".into() }),
        1 => Just(AppEvent::TripEnded),
        1 => Just(AppEvent::DestinationSelected(Destination::new("Corner Store", "12 Main St"))),
        1 => phase().prop_map(|phase| AppEvent::ActionSucceeded {
            action: ActionKind::GetDirections,
            update: TripUpdate::Advanced(phase),
        }),
        1 => Just(AppEvent::ActionSucceeded {
            action: ActionKind::GetDirections,
            update: TripUpdate::Unchanged,
        }),
        1 => Just(AppEvent::ActionFailed {
            action: ActionKind::RequestRide,
            message: "offline".into(),
        }),
        2 => Just(AppEvent::Key(KeyInput::Enter)),
        1 => Just(AppEvent::Key(KeyInput::Char('r'))),
        1 => Just(AppEvent::Tick),
    ]
}

proptest! {
    #[test]
    fn phase_only_moves_forward_until_trip_ends(
        role in role(),
        events in proptest::collection::vec(event(), 0..40),
    ) {
        let mut app = App::new(role);

        for event in events {
            let before = app.phase();
            let ended = matches!(event, AppEvent::TripEnded);
            app.handle(event);

            if ended {
                prop_assert_eq!(app.phase(), TripPhase::RequestingRide);
            } else {
                prop_assert!(app.phase() >= before);
            }
        }
    }

    #[test]
    fn every_intent_satisfies_invariants(
        role in role(),
        events in proptest::collection::vec(event(), 0..40),
    ) {
        let registry = InvariantRegistry::standard();
        let mut app = App::new(role);

        for event in events {
            app.handle(event);
            if let Some(intent) = app.intent() {
                prop_assert!(registry.check_all(intent).is_ok());
            }
        }
    }

    #[test]
    fn dispatch_only_for_enabled_button(
        role in role(),
        events in proptest::collection::vec(event(), 0..40),
    ) {
        let mut app = App::new(role);

        for event in events {
            let enabled = app
                .intent()
                .filter(|i| i.button_enabled)
                .map(|i| i.button_action);
            let pressed = matches!(event, AppEvent::Key(KeyInput::Enter));
            let actions = app.handle(event);

            for action in actions {
                if let AppAction::Dispatch(kind) = action {
                    prop_assert!(pressed);
                    prop_assert_eq!(Some(kind), enabled);
                }
            }
        }
    }

    #[test]
    fn session_role_never_changes(
        role in role(),
        events in proptest::collection::vec(event(), 0..40),
    ) {
        let mut app = App::new(role);
        for event in events {
            app.handle(event);
            prop_assert_eq!(app.role(), role);
        }
    }
}
