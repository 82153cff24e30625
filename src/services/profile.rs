use std::sync::Arc;

use validator::Validate;

use crate::core::gate::{check_access, Capability};
use crate::models::{FamilyProfile, FamilyProfileUpdate};
use crate::services::stores::{AuthCollaborator, ProfileStore};
use crate::services::{resolve_principal, ServiceError};

/// Profile management for the signed-in family
pub struct FamilyProfileService<A, P> {
    auth: Arc<A>,
    profiles: Arc<P>,
}

impl<A, P> FamilyProfileService<A, P>
where
    A: AuthCollaborator,
    P: ProfileStore,
{
    pub fn new(auth: Arc<A>, profiles: Arc<P>) -> Self {
        Self { auth, profiles }
    }

    /// Create or replace the signed-in family's profile
    pub fn upsert(&self, update: FamilyProfileUpdate) -> Result<FamilyProfile, ServiceError> {
        let principal = resolve_principal(self.auth.as_ref())?;
        check_access(&principal, Capability::ManageOwnProfile)?;
        update.validate()?;
        if let Some(prefs) = &update.preferences {
            if prefs.age_min > prefs.age_max {
                return Err(ServiceError::Unprocessable("ageMin must not exceed ageMax"));
            }
        }

        let profile = FamilyProfile {
            principal_id: principal.id.clone(),
            full_name: update.full_name,
            city: update.city,
            household_size: update.household_size,
            income_bracket: update.income_bracket,
            experience: update.experience,
            preferences: update.preferences,
        };

        let profile = self.profiles.upsert_family_profile(profile)?;
        tracing::info!("Profile saved for {}", principal.id);
        Ok(profile)
    }

    /// The signed-in family's profile, if one exists yet
    pub fn own_profile(&self) -> Result<Option<FamilyProfile>, ServiceError> {
        let principal = resolve_principal(self.auth.as_ref())?;
        check_access(&principal, Capability::ManageOwnProfile)?;

        Ok(self.profiles.family_profile(&principal.id)?)
    }
}
