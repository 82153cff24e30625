use std::sync::Arc;

use serde::Serialize;
use validator::Validate;

use crate::core::gate::{check_access, Capability};
use crate::core::verification::VerificationEvent;
use crate::models::{AccountStatus, DocumentSubmission, Principal, VerificationState};
use crate::services::stores::{AuthCollaborator, VerificationStore};
use crate::services::{resolve_principal, ServiceError};

/// Receipt returned to the family after a document submission
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionReceipt {
    #[serde(rename = "documentId")]
    pub document_id: String,
    #[serde(rename = "submittedAt")]
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    pub verification: VerificationState,
}

/// Verification workflow around the state machine in `core::verification`
///
/// Families feed it documents; admins resolve open reviews and can ban
/// accounts outright.
pub struct VerificationService<A, V> {
    auth: Arc<A>,
    verifications: Arc<V>,
}

impl<A, V> VerificationService<A, V>
where
    A: AuthCollaborator,
    V: VerificationStore,
{
    pub fn new(auth: Arc<A>, verifications: Arc<V>) -> Self {
        Self {
            auth,
            verifications,
        }
    }

    /// Family submits a verification document
    ///
    /// A first submission (and any submission after a rejection) opens a
    /// review as a consequence of the submission itself, not as a separate
    /// call.
    pub fn submit_document(
        &self,
        submission: &DocumentSubmission,
    ) -> Result<SubmissionReceipt, ServiceError> {
        let principal = resolve_principal(self.auth.as_ref())?;
        check_access(&principal, Capability::SubmitDocument)?;
        submission.validate()?;

        let verification = self
            .verifications
            .transition(&principal.id, VerificationEvent::DocumentSubmitted)?;

        let receipt = SubmissionReceipt {
            document_id: uuid::Uuid::new_v4().to_string(),
            submitted_at: chrono::Utc::now(),
            verification,
        };

        tracing::info!(
            "Document {} ({}) submitted by {}, verification now {}",
            receipt.document_id,
            submission.kind,
            principal.id,
            verification
        );

        Ok(receipt)
    }

    /// Admin approves an open review
    pub fn approve(&self, family_id: &str) -> Result<VerificationState, ServiceError> {
        let principal = resolve_principal(self.auth.as_ref())?;
        check_access(&principal, Capability::ManageVerifications)?;

        let state = self
            .verifications
            .transition(family_id, VerificationEvent::Approved)?;
        tracing::info!("{} approved verification for {}", principal.id, family_id);
        Ok(state)
    }

    /// Admin rejects an open review; the family may resubmit
    pub fn reject(&self, family_id: &str) -> Result<VerificationState, ServiceError> {
        let principal = resolve_principal(self.auth.as_ref())?;
        check_access(&principal, Capability::ManageVerifications)?;

        let state = self
            .verifications
            .transition(family_id, VerificationEvent::Rejected)?;
        tracing::info!("{} rejected verification for {}", principal.id, family_id);
        Ok(state)
    }

    /// Admin bans an account outright
    pub fn ban(&self, principal_id: &str) -> Result<(), ServiceError> {
        let principal = resolve_principal(self.auth.as_ref())?;
        check_access(&principal, Capability::ManageVerifications)?;

        self.verifications
            .set_account_status(principal_id, AccountStatus::Banned)?;
        tracing::warn!("{} banned account {}", principal.id, principal_id);
        Ok(())
    }

    /// Open reviews for the admin queue
    pub fn pending_review(&self, limit: usize) -> Result<Vec<Principal>, ServiceError> {
        let principal = resolve_principal(self.auth.as_ref())?;
        check_access(&principal, Capability::ManageVerifications)?;

        Ok(self.verifications.pending_review(limit)?)
    }
}
