//! Profile store backed by a JSON document on disk.
//!
//! The document mirrors the user table of the hosted database:
//!
//! ```json
//! { "users": { "u-ana": { "fullname": "Ana", "email": "ana@example.com", "accountType": 0 } } }
//! ```

use std::{collections::HashMap, path::PathBuf};

use connie_app::ProfileStore;
use connie_core::{ProfileError, UserProfile};
use serde::Deserialize;

#[derive(Deserialize)]
struct ProfileDocument {
    #[serde(default)]
    users: HashMap<String, serde_json::Value>,
}

/// [`ProfileStore`] that reads the signed-in user from a JSON file.
///
/// The file is re-read on every fetch so edits show up on retry.
#[derive(Debug, Clone)]
pub struct JsonProfileStore {
    path: PathBuf,
    uid: Option<String>,
}

impl JsonProfileStore {
    /// Store reading `path` with `uid` as the signed-in user.
    ///
    /// `None` means nobody is signed in.
    pub fn new(path: impl Into<PathBuf>, uid: Option<String>) -> Self {
        Self { path: path.into(), uid }
    }
}

impl ProfileStore for JsonProfileStore {
    async fn fetch_current_user(&self) -> Result<UserProfile, ProfileError> {
        let Some(uid) = self.uid.as_deref() else {
            return Err(ProfileError::NotSignedIn);
        };

        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| ProfileError::Unavailable(format!("{}: {e}", self.path.display())))?;

        let document: ProfileDocument = serde_json::from_str(&contents).map_err(|e| {
            ProfileError::Malformed { uid: uid.to_string(), reason: e.to_string() }
        })?;

        let record = document
            .users
            .get(uid)
            .cloned()
            .ok_or_else(|| ProfileError::NotFound { uid: uid.to_string() })?;

        let mut user: UserProfile = serde_json::from_value(record).map_err(|e| {
            ProfileError::Malformed { uid: uid.to_string(), reason: e.to_string() }
        })?;

        if user.id.is_empty() {
            user.id = uid.to_string();
        }

        tracing::debug!(uid, path = %self.path.display(), "Read profile record");
        Ok(user)
    }
}
