//! SafeNest Match - verification and matching core for the SafeNest
//! placement platform
//!
//! This library provides the capability gate, the family-verification
//! state machine, and the compatibility engine that filters, scores, and
//! ranks child records against a family profile. Storage, sessions, and
//! transport are owned by the embedding services and reach the core
//! through the traits in [`services::stores`].

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use core::{check_access, AccessDenied, Capability, MatchEngine, SuggestionSet};
pub use models::{
    ChildRecord, FamilyProfile, Principal, ScoredSuggestion, ScoringWeights, VerificationState,
};
