//! Standard invariant checks.
//!
//! These invariants capture behavioral properties that must always hold.
//! They verify WHAT must be true, not specific table rows.

use connie_core::{AVATAR_PLACEHOLDER, ActionKind, PresentationIntent};

use super::{Invariant, InvariantResult, Violation};

/// The button is enabled exactly when it is bound to an action.
///
/// An enabled button with no action would swallow presses; a disabled button
/// with an action would advertise something the user cannot do.
pub struct ButtonEnabledMatchesAction;

impl Invariant for ButtonEnabledMatchesAction {
    fn name(&self) -> &'static str {
        "button_enabled_matches_action"
    }

    fn check(&self, intent: &PresentationIntent) -> InvariantResult {
        let bound = intent.button_action != ActionKind::None;
        if intent.button_enabled == bound {
            return Ok(());
        }
        Err(Violation {
            invariant: self.name(),
            message: format!(
                "button enabled={} but action is {}",
                intent.button_enabled, intent.button_action
            ),
        })
    }
}

/// A bound action shows its canonical label.
pub struct LabelMatchesAction;

impl Invariant for LabelMatchesAction {
    fn name(&self) -> &'static str {
        "label_matches_action"
    }

    fn check(&self, intent: &PresentationIntent) -> InvariantResult {
        match intent.button_action.label() {
            Some(label) if label != intent.button_label => Err(Violation {
                invariant: self.name(),
                message: format!(
                    "action {} labelled {:?}, expected {label:?}",
                    intent.button_action, intent.button_label
                ),
            }),
            _ => Ok(()),
        }
    }
}

/// The avatar shows the actor label's first character.
pub struct AvatarMatchesActor;

impl Invariant for AvatarMatchesActor {
    fn name(&self) -> &'static str {
        "avatar_matches_actor"
    }

    fn check(&self, intent: &PresentationIntent) -> InvariantResult {
        let expected = intent.actor_label.chars().next().unwrap_or(AVATAR_PLACEHOLDER);
        if intent.avatar_initial == expected {
            return Ok(());
        }
        Err(Violation {
            invariant: self.name(),
            message: format!(
                "avatar {:?} for actor {:?}, expected {expected:?}",
                intent.avatar_initial, intent.actor_label
            ),
        })
    }
}
