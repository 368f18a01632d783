//! User profile management.
//!
//! One record per installation, replaced wholesale on edit. Field-level
//! validation is an edit-form concern; the only typed boundary here is
//! `Email`, enforced at construction of the record itself.

use std::sync::Arc;

use crate::models::user::UserProfile;
use crate::notify::{Notifier, NotifierExt};
use crate::store::{KvStore, StoreError, keys};

/// Read and replace the persisted user profile.
#[derive(Clone)]
pub struct ProfileService {
    store: KvStore,
    notifier: Arc<dyn Notifier>,
}

impl ProfileService {
    /// Create a profile service over the given store.
    #[must_use]
    pub fn new(store: KvStore, notifier: Arc<dyn Notifier>) -> Self {
        Self { store, notifier }
    }

    /// The current profile, or the starter default on first load.
    #[must_use]
    pub fn profile(&self) -> UserProfile {
        self.store.get(keys::USER_PROFILE, UserProfile::default())
    }

    /// Replace the whole profile record and persist it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if persisting the profile fails.
    pub fn update(&self, profile: UserProfile) -> Result<(), StoreError> {
        self.store.set(keys::USER_PROFILE, &profile)?;
        self.notifier.success("Profile updated successfully");
        tracing::debug!(user = %profile.id, "profile replaced");
        Ok(())
    }
}
