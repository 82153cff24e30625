use thiserror::Error;

use crate::core::verification::{TransitionError, VerificationEvent};
use crate::models::{AccountStatus, ChildRecord, FamilyProfile, Principal, VerificationState};

/// Store failures surfaced to the orchestration services
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("record not found: {0}")]
    NotFound(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error(transparent)]
    Transition(#[from] TransitionError),
}

/// Resolves the calling identity; owned by the session layer
///
/// The core never reaches into ambient session state itself - a principal
/// is resolved here once and passed down explicitly.
pub trait AuthCollaborator: Send + Sync {
    fn current_principal(&self) -> Option<Principal>;
}

/// Family profile persistence seam
pub trait ProfileStore: Send + Sync {
    fn family_profile(&self, principal_id: &str) -> Result<Option<FamilyProfile>, StoreError>;
    fn upsert_family_profile(&self, profile: FamilyProfile) -> Result<FamilyProfile, StoreError>;
}

/// Child record persistence seam
pub trait ChildStore: Send + Sync {
    /// Available records only, in insertion order
    fn list_available(&self, limit: usize) -> Result<Vec<ChildRecord>, StoreError>;
    fn create(&self, record: ChildRecord) -> Result<ChildRecord, StoreError>;
    /// Most recent records first, regardless of status
    fn list_recent(&self, limit: usize) -> Result<Vec<ChildRecord>, StoreError>;
}

/// Verification and account state seam
pub trait VerificationStore: Send + Sync {
    /// Apply a verification event to the principal's current state and
    /// persist the outcome
    fn transition(
        &self,
        principal_id: &str,
        event: VerificationEvent,
    ) -> Result<VerificationState, StoreError>;

    fn set_account_status(
        &self,
        principal_id: &str,
        status: AccountStatus,
    ) -> Result<(), StoreError>;

    /// Families with an open review, for the admin queue
    fn pending_review(&self, limit: usize) -> Result<Vec<Principal>, StoreError>;
}
