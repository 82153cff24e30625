// Core decision logic exports
pub mod filters;
pub mod gate;
pub mod matcher;
pub mod scoring;
pub mod verification;

pub use filters::{covered_support_count, is_eligible};
pub use gate::{check_access, AccessDenied, Capability};
pub use matcher::{MatchEngine, SuggestionSet};
pub use scoring::compatibility_score;
pub use verification::{TransitionError, VerificationEvent};
