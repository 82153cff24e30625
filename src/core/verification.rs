use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::VerificationState;

/// Events that move a family through the verification pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationEvent {
    DocumentSubmitted,
    Approved,
    Rejected,
}

impl VerificationEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationEvent::DocumentSubmitted => "document_submitted",
            VerificationEvent::Approved => "approved",
            VerificationEvent::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for VerificationEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An event with no legal transition from the current state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no {event} transition from {from}")]
pub struct TransitionError {
    pub from: VerificationState,
    pub event: VerificationEvent,
}

impl VerificationState {
    /// A family's first document opens a review
    pub fn submit_first_document(self) -> Result<Self, TransitionError> {
        match self {
            VerificationState::Unverified => Ok(VerificationState::PendingReview),
            from => Err(TransitionError {
                from,
                event: VerificationEvent::DocumentSubmitted,
            }),
        }
    }

    /// A rejected family re-enters review by submitting any document
    pub fn resubmit(self) -> Result<Self, TransitionError> {
        match self {
            VerificationState::Rejected => Ok(VerificationState::PendingReview),
            from => Err(TransitionError {
                from,
                event: VerificationEvent::DocumentSubmitted,
            }),
        }
    }

    /// Admin approval; terminal for gating purposes
    pub fn approve(self) -> Result<Self, TransitionError> {
        match self {
            VerificationState::PendingReview => Ok(VerificationState::Verified),
            from => Err(TransitionError {
                from,
                event: VerificationEvent::Approved,
            }),
        }
    }

    /// Admin rejection; the family may resubmit
    pub fn reject(self) -> Result<Self, TransitionError> {
        match self {
            VerificationState::PendingReview => Ok(VerificationState::Rejected),
            from => Err(TransitionError {
                from,
                event: VerificationEvent::Rejected,
            }),
        }
    }

    /// Apply an event, routing document submissions to the right named
    /// transition
    ///
    /// Documents arriving while a review is already open, or after
    /// verification, leave the state unchanged.
    pub fn apply(self, event: VerificationEvent) -> Result<Self, TransitionError> {
        match event {
            VerificationEvent::DocumentSubmitted => match self {
                VerificationState::Unverified => self.submit_first_document(),
                VerificationState::Rejected => self.resubmit(),
                other => Ok(other),
            },
            VerificationEvent::Approved => self.approve(),
            VerificationEvent::Rejected => self.reject(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_document_opens_review() {
        let state = VerificationState::Unverified;
        assert_eq!(
            state.submit_first_document(),
            Ok(VerificationState::PendingReview)
        );
    }

    #[test]
    fn test_approve_and_reject_require_open_review() {
        assert_eq!(
            VerificationState::PendingReview.approve(),
            Ok(VerificationState::Verified)
        );
        assert_eq!(
            VerificationState::PendingReview.reject(),
            Ok(VerificationState::Rejected)
        );

        for state in [
            VerificationState::Unverified,
            VerificationState::Verified,
            VerificationState::Rejected,
        ] {
            assert!(state.approve().is_err());
            assert!(state.reject().is_err());
        }
    }

    #[test]
    fn test_resubmission_reopens_review() {
        assert_eq!(
            VerificationState::Rejected.resubmit(),
            Ok(VerificationState::PendingReview)
        );
        assert!(VerificationState::Unverified.resubmit().is_err());
    }

    #[test]
    fn test_document_event_is_noop_during_and_after_review() {
        assert_eq!(
            VerificationState::PendingReview.apply(VerificationEvent::DocumentSubmitted),
            Ok(VerificationState::PendingReview)
        );
        assert_eq!(
            VerificationState::Verified.apply(VerificationEvent::DocumentSubmitted),
            Ok(VerificationState::Verified)
        );
    }

    #[test]
    fn test_full_lifecycle() {
        let state = VerificationState::Unverified;
        let state = state.apply(VerificationEvent::DocumentSubmitted).unwrap();
        assert_eq!(state, VerificationState::PendingReview);

        let state = state.apply(VerificationEvent::Rejected).unwrap();
        assert_eq!(state, VerificationState::Rejected);

        let state = state.apply(VerificationEvent::DocumentSubmitted).unwrap();
        assert_eq!(state, VerificationState::PendingReview);

        let state = state.apply(VerificationEvent::Approved).unwrap();
        assert_eq!(state, VerificationState::Verified);
    }

    #[test]
    fn test_transition_error_display() {
        let err = VerificationState::Unverified.approve().unwrap_err();
        assert_eq!(err.to_string(), "no approved transition from UNVERIFIED");
    }
}
