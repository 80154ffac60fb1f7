//! Invariant checking for presentation intents.
//!
//! Invariants are properties that must hold for every intent the state
//! machine produces, whatever the phase, role or user. Unlike example-based
//! tests that pin specific table rows, they verify behavioral properties
//! across all execution paths.
//!
//! # Usage
//!
//! ```ignore
//! let registry = InvariantRegistry::standard();
//! registry.check_all(&intent)?;
//! ```

mod checks;

pub use checks::{AvatarMatchesActor, ButtonEnabledMatchesAction, LabelMatchesAction};
use connie_core::PresentationIntent;

/// Invariant check result.
pub type InvariantResult = Result<(), Violation>;

/// Invariant violation with context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Name of the violated invariant.
    pub invariant: &'static str,
    /// Description of what went wrong.
    pub message: String,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.invariant, self.message)
    }
}

impl std::error::Error for Violation {}

/// An invariant that can be checked against an intent.
pub trait Invariant: Send + Sync {
    /// Invariant name for error reporting.
    fn name(&self) -> &'static str;

    /// Check the invariant against an intent.
    ///
    /// Returns `Ok(())` if the invariant holds, or a [`Violation`]
    /// describing what went wrong.
    fn check(&self, intent: &PresentationIntent) -> InvariantResult;
}

/// Registry of invariants to check.
///
/// Collects multiple invariants and runs them all against an intent.
/// Use [`InvariantRegistry::standard()`] for the common set.
pub struct InvariantRegistry {
    invariants: Vec<Box<dyn Invariant>>,
}

impl Default for InvariantRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl InvariantRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { invariants: Vec::new() }
    }

    /// Create a registry with the standard intent invariants.
    ///
    /// Includes:
    /// - [`ButtonEnabledMatchesAction`]: enabled iff an action is bound
    /// - [`LabelMatchesAction`]: bound actions carry their canonical label
    /// - [`AvatarMatchesActor`]: avatar is the actor label's initial
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.add(ButtonEnabledMatchesAction);
        registry.add(LabelMatchesAction);
        registry.add(AvatarMatchesActor);
        registry
    }

    /// Add an invariant to the registry.
    pub fn add<I: Invariant + 'static>(&mut self, invariant: I) {
        self.invariants.push(Box::new(invariant));
    }

    /// Check all invariants against the given intent.
    ///
    /// Returns `Ok(())` if all invariants hold, or all violations found.
    pub fn check_all(&self, intent: &PresentationIntent) -> Result<(), Vec<Violation>> {
        let violations: Vec<_> =
            self.invariants.iter().filter_map(|inv| inv.check(intent).err()).collect();

        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }

    /// Number of registered invariants.
    pub fn len(&self) -> usize {
        self.invariants.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.invariants.is_empty()
    }
}
