use std::sync::Arc;

use validator::Validate;

use crate::core::gate::{check_access, Capability};
use crate::models::{ChildRecord, ChildStatus, NewChildRecord};
use crate::services::stores::{AuthCollaborator, ChildStore};
use crate::services::{resolve_principal, ServiceError};

/// Child record intake for caseworkers and admins
pub struct ChildIntakeService<A, C> {
    auth: Arc<A>,
    children: Arc<C>,
}

impl<A, C> ChildIntakeService<A, C>
where
    A: AuthCollaborator,
    C: ChildStore,
{
    pub fn new(auth: Arc<A>, children: Arc<C>) -> Self {
        Self { auth, children }
    }

    /// Register a new child record
    pub fn create_child(&self, intake: NewChildRecord) -> Result<ChildRecord, ServiceError> {
        let principal = resolve_principal(self.auth.as_ref())?;
        check_access(&principal, Capability::ManageChildren)?;
        intake.validate()?;
        if intake.age_min > intake.age_max {
            return Err(ServiceError::Unprocessable("ageMin must not exceed ageMax"));
        }

        let record = ChildRecord {
            id: uuid::Uuid::new_v4().to_string(),
            city: intake.city,
            age_min: intake.age_min,
            age_max: intake.age_max,
            needs: intake.needs,
            has_siblings: intake.has_siblings,
            status: ChildStatus::Available,
            created_by: Some(principal.id.clone()),
            created_at: Some(chrono::Utc::now()),
        };

        let record = self.children.create(record)?;
        tracing::info!("Child record {} created by {}", record.id, principal.id);
        Ok(record)
    }

    /// Recent records for the caseworker dashboard
    pub fn list_children(&self, limit: usize) -> Result<Vec<ChildRecord>, ServiceError> {
        let principal = resolve_principal(self.auth.as_ref())?;
        check_access(&principal, Capability::ManageChildren)?;

        Ok(self.children.list_recent(limit)?)
    }
}
