//! In-memory profile store.

use std::{
    collections::{HashMap, VecDeque},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use connie_app::ProfileStore;
use connie_core::{ProfileError, UserProfile};

/// In-memory profile store for testing and simulation.
///
/// Mirrors a `users/<uid>` table with a signed-in uid. Clones share state, so
/// a test can keep a handle to inject failures after handing the store to a
/// runtime.
#[derive(Clone, Default)]
pub struct MemoryProfileStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    users: HashMap<String, UserProfile>,
    current_uid: Option<String>,
    failures: VecDeque<ProfileError>,
    fetches: usize,
}

impl MemoryProfileStore {
    /// Create an empty store with nobody signed in.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `user`, signed in as that user.
    pub fn signed_in(user: UserProfile) -> Self {
        let store = Self::new();
        store.sign_in(&user.id);
        store.insert(user);
        store
    }

    /// Insert or replace a user record.
    pub fn insert(&self, user: UserProfile) {
        self.lock().users.insert(user.id.clone(), user);
    }

    /// Set the signed-in uid.
    pub fn sign_in(&self, uid: &str) {
        self.lock().current_uid = Some(uid.to_string());
    }

    /// Make the next fetch fail with `error`.
    ///
    /// Failures queue up and are consumed one per fetch.
    pub fn fail_next(&self, error: ProfileError) {
        self.lock().failures.push_back(error);
    }

    /// Number of fetches served, failed ones included.
    pub fn fetch_count(&self) -> usize {
        self.lock().fetches
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn fetch(&self) -> Result<UserProfile, ProfileError> {
        let mut inner = self.lock();
        inner.fetches += 1;

        if let Some(error) = inner.failures.pop_front() {
            return Err(error);
        }

        let uid = inner.current_uid.clone().ok_or(ProfileError::NotSignedIn)?;
        inner.users.get(&uid).cloned().ok_or(ProfileError::NotFound { uid })
    }
}

impl ProfileStore for MemoryProfileStore {
    async fn fetch_current_user(&self) -> Result<UserProfile, ProfileError> {
        self.fetch()
    }
}

#[cfg(test)]
mod tests {
    use connie_core::ActorRole;

    use super::*;

    #[tokio::test]
    async fn serves_signed_in_user() {
        let store = MemoryProfileStore::signed_in(UserProfile::new("u1", "Ana", ActorRole::Passenger));
        let user = store.fetch_current_user().await.unwrap();

        assert_eq!(user.display_name, "Ana");
        assert_eq!(store.fetch_count(), 1);
    }

    #[tokio::test]
    async fn nobody_signed_in() {
        let store = MemoryProfileStore::new();
        assert_eq!(store.fetch_current_user().await, Err(ProfileError::NotSignedIn));
    }

    #[tokio::test]
    async fn missing_record_is_not_found() {
        let store = MemoryProfileStore::new();
        store.sign_in("ghost");

        assert_eq!(
            store.fetch_current_user().await,
            Err(ProfileError::NotFound { uid: "ghost".into() })
        );
    }

    #[tokio::test]
    async fn injected_failure_is_consumed_once() {
        let store = MemoryProfileStore::signed_in(UserProfile::new("u1", "Ana", ActorRole::Passenger));
        store.fail_next(ProfileError::Unavailable("offline".into()));

        assert!(store.fetch_current_user().await.is_err());
        assert!(store.fetch_current_user().await.is_ok());
        assert_eq!(store.fetch_count(), 2);
    }
}
