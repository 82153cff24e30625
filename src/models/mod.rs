// Model exports
pub mod domain;
pub mod inputs;

pub use domain::{
    AccountStatus, AvailabilityTier, ChildRecord, ChildStatus, FamilyProfile, IncomeBracket,
    NeedsSet, PreferenceSet, Principal, Role, ScoredSuggestion, ScoringWeights, VerificationState,
};
pub use inputs::{DocumentSubmission, FamilyProfileUpdate, NewChildRecord};
