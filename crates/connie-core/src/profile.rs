//! User profile and destination inputs.
//!
//! Both are owned by external collaborators: the profile by the profile store,
//! the destination by whatever place search the frontend offers.

use serde::{Deserialize, Serialize};

use crate::{ActorRole, AVATAR_PLACEHOLDER};

/// A signed-in user as stored in the realtime database.
///
/// Records written by the mobile client use `fullname` and `accountType`; both
/// spellings are accepted when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Database key of the user (`users/<id>`).
    #[serde(default)]
    pub id: String,
    /// Name shown next to the avatar.
    #[serde(alias = "fullname")]
    pub display_name: String,
    /// Sign-in email. Empty when the record has none.
    #[serde(default)]
    pub email: String,
    /// Whether this user drives or rides.
    #[serde(alias = "accountType")]
    pub role: ActorRole,
}

impl UserProfile {
    /// Create a profile with no email.
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, role: ActorRole) -> Self {
        Self { id: id.into(), display_name: display_name.into(), email: String::new(), role }
    }

    /// First character of the display name, or [`AVATAR_PLACEHOLDER`] when
    /// the name is empty.
    pub fn avatar_initial(&self) -> char {
        self.display_name.chars().next().unwrap_or(AVATAR_PLACEHOLDER)
    }
}

/// The selected drop-off place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    /// Place name, used as the panel title before a driver is assigned.
    pub name: String,
    /// Street address shown under the title.
    pub address: String,
}

impl Destination {
    /// Create a destination.
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self { name: name.into(), address: address.into() }
    }
}
