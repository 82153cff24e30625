use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Principal, Role, VerificationState};

/// A named permission an operation requires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    ManageVerifications,
    ManageChildren,
    ManageOwnProfile,
    SubmitDocument,
    ViewMatches,
}

/// Denial reasons, distinguishable so the caller can redirect the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessDenied {
    /// Account status is not active; checked first, short-circuits the rest
    #[error("account is locked or banned")]
    AccountLocked,
    /// The principal's role does not grant the capability
    #[error("role does not grant this capability")]
    ForbiddenRole,
    /// Role fits but the family has not been verified yet
    #[error("family verification required")]
    NotVerified,
}

/// Evaluate a principal against a required capability
///
/// Pure function of its two inputs: no I/O, no partial grants. Callers gate
/// before touching any store or the match engine.
pub fn check_access(principal: &Principal, capability: Capability) -> Result<(), AccessDenied> {
    if !principal.is_active() {
        return Err(AccessDenied::AccountLocked);
    }

    let role_ok = match capability {
        Capability::ManageVerifications => principal.role == Role::Admin,
        Capability::ManageChildren => matches!(principal.role, Role::Caseworker | Role::Admin),
        Capability::ManageOwnProfile | Capability::SubmitDocument | Capability::ViewMatches => {
            principal.role == Role::Family
        }
    };
    if !role_ok {
        return Err(AccessDenied::ForbiddenRole);
    }

    if capability == Capability::ViewMatches && principal.verification != VerificationState::Verified
    {
        return Err(AccessDenied::NotVerified);
    }

    Ok(())
}
