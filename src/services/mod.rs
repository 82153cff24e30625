// Service exports
pub mod intake;
pub mod memory;
pub mod profile;
pub mod stores;
pub mod suggestions;
pub mod verification;

use thiserror::Error;

use crate::core::gate::AccessDenied;
use crate::models::Principal;

pub use intake::ChildIntakeService;
pub use memory::MemoryStore;
pub use profile::FamilyProfileService;
pub use stores::{AuthCollaborator, ChildStore, ProfileStore, StoreError, VerificationStore};
pub use suggestions::SuggestionService;
pub use verification::{SubmissionReceipt, VerificationService};

/// Failures surfaced by the orchestration services
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Denied(#[from] AccessDenied),

    #[error("family profile missing for principal {0}")]
    MissingProfile(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("validation failed: {0}")]
    Invalid(#[from] validator::ValidationErrors),

    #[error("invalid input: {0}")]
    Unprocessable(&'static str),
}

/// Resolve the caller or deny
///
/// An unresolved session is indistinguishable from a role mismatch to the
/// caller.
pub(crate) fn resolve_principal<A: AuthCollaborator>(auth: &A) -> Result<Principal, ServiceError> {
    auth.current_principal()
        .ok_or(ServiceError::Denied(AccessDenied::ForbiddenRole))
}
