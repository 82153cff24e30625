use std::collections::BTreeMap;
use std::sync::Mutex;

use crate::core::verification::VerificationEvent;
use crate::models::{
    AccountStatus, ChildRecord, ChildStatus, FamilyProfile, Principal, Role, VerificationState,
};
use crate::services::stores::{
    AuthCollaborator, ChildStore, ProfileStore, StoreError, VerificationStore,
};

/// In-memory implementation of every collaborator seam
///
/// Backs the integration tests and gives embedders a working store for
/// smoke setups. All state sits behind mutexes so one instance can be
/// shared across threads.
#[derive(Default)]
pub struct MemoryStore {
    principals: Mutex<BTreeMap<String, Principal>>,
    profiles: Mutex<BTreeMap<String, FamilyProfile>>,
    children: Mutex<Vec<ChildRecord>>,
    signed_in: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_principal(&self, principal: Principal) {
        if let Ok(mut principals) = self.principals.lock() {
            principals.insert(principal.id.clone(), principal);
        }
    }

    /// Make subsequent `current_principal` calls resolve to this id
    pub fn sign_in(&self, principal_id: &str) {
        if let Ok(mut signed_in) = self.signed_in.lock() {
            *signed_in = Some(principal_id.to_string());
        }
    }

    pub fn sign_out(&self) {
        if let Ok(mut signed_in) = self.signed_in.lock() {
            *signed_in = None;
        }
    }

    pub fn principal(&self, id: &str) -> Option<Principal> {
        self.principals.lock().ok()?.get(id).cloned()
    }
}

fn poisoned(_: impl std::fmt::Debug) -> StoreError {
    StoreError::Unavailable("poisoned lock".to_string())
}

impl AuthCollaborator for MemoryStore {
    fn current_principal(&self) -> Option<Principal> {
        let id = self.signed_in.lock().ok()?.clone()?;
        self.principal(&id)
    }
}

impl ProfileStore for MemoryStore {
    fn family_profile(&self, principal_id: &str) -> Result<Option<FamilyProfile>, StoreError> {
        let profiles = self.profiles.lock().map_err(poisoned)?;
        Ok(profiles.get(principal_id).cloned())
    }

    fn upsert_family_profile(&self, profile: FamilyProfile) -> Result<FamilyProfile, StoreError> {
        let mut profiles = self.profiles.lock().map_err(poisoned)?;
        profiles.insert(profile.principal_id.clone(), profile.clone());
        Ok(profile)
    }
}

impl ChildStore for MemoryStore {
    fn list_available(&self, limit: usize) -> Result<Vec<ChildRecord>, StoreError> {
        let children = self.children.lock().map_err(poisoned)?;
        Ok(children
            .iter()
            .filter(|child| child.status == ChildStatus::Available)
            .take(limit)
            .cloned()
            .collect())
    }

    fn create(&self, record: ChildRecord) -> Result<ChildRecord, StoreError> {
        let mut children = self.children.lock().map_err(poisoned)?;
        children.push(record.clone());
        Ok(record)
    }

    fn list_recent(&self, limit: usize) -> Result<Vec<ChildRecord>, StoreError> {
        let children = self.children.lock().map_err(poisoned)?;
        Ok(children.iter().rev().take(limit).cloned().collect())
    }
}

impl VerificationStore for MemoryStore {
    fn transition(
        &self,
        principal_id: &str,
        event: VerificationEvent,
    ) -> Result<VerificationState, StoreError> {
        let mut principals = self.principals.lock().map_err(poisoned)?;
        let principal = principals
            .get_mut(principal_id)
            .ok_or_else(|| StoreError::NotFound(principal_id.to_string()))?;

        let next = principal.verification.apply(event)?;
        principal.verification = next;
        Ok(next)
    }

    fn set_account_status(
        &self,
        principal_id: &str,
        status: AccountStatus,
    ) -> Result<(), StoreError> {
        let mut principals = self.principals.lock().map_err(poisoned)?;
        let principal = principals
            .get_mut(principal_id)
            .ok_or_else(|| StoreError::NotFound(principal_id.to_string()))?;

        principal.account_status = status;
        Ok(())
    }

    fn pending_review(&self, limit: usize) -> Result<Vec<Principal>, StoreError> {
        let principals = self.principals.lock().map_err(poisoned)?;
        Ok(principals
            .values()
            .filter(|p| p.role == Role::Family && p.verification == VerificationState::PendingReview)
            .take(limit)
            .cloned()
            .collect())
    }
}
