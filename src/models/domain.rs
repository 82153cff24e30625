use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Platform roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Family,
    Caseworker,
    Admin,
}

/// Account lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    #[default]
    Active,
    Locked,
    Banned,
}

/// Admin-reviewed trust status gating access to match suggestions
///
/// Transitions are defined in `core::verification`; everything else only
/// reads the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationState {
    #[default]
    Unverified,
    PendingReview,
    Verified,
    Rejected,
}

impl VerificationState {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationState::Unverified => "UNVERIFIED",
            VerificationState::PendingReview => "PENDING_REVIEW",
            VerificationState::Verified => "VERIFIED",
            VerificationState::Rejected => "REJECTED",
        }
    }
}

impl std::fmt::Display for VerificationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A caller's identity and authorization attributes
///
/// Resolved fresh per request by the auth collaborator and passed in
/// explicitly; nothing in this crate mutates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Principal {
    #[serde(rename = "principalId")]
    pub id: String,
    pub email: String,
    pub role: Role,
    #[serde(rename = "accountStatus", default)]
    pub account_status: AccountStatus,
    #[serde(default)]
    pub verification: VerificationState,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Principal {
    pub fn is_active(&self) -> bool {
        self.account_status == AccountStatus::Active
    }
}

/// Self-reported household income bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IncomeBracket {
    Low,
    Middle,
    High,
}

/// How much time the household can commit to a placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityTier {
    Low,
    Medium,
    High,
}

/// Matching preferences a family fills in on their profile
///
/// Every field has an explicit fallback (empty set / false / zero) so a
/// half-filled profile degrades instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferenceSet {
    #[serde(rename = "ageMin", default)]
    pub age_min: u8,
    #[serde(rename = "ageMax", default)]
    pub age_max: u8,
    #[serde(rename = "acceptsSiblings", default)]
    pub accepts_siblings: bool,
    #[serde(rename = "canRelocate", default)]
    pub can_relocate: bool,
    #[serde(default)]
    pub supports: BTreeSet<String>,
    #[serde(default)]
    pub availability: Option<AvailabilityTier>,
}

/// Family profile with household data and matching preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamilyProfile {
    #[serde(rename = "principalId")]
    pub principal_id: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub city: String,
    #[serde(rename = "householdSize")]
    pub household_size: u32,
    #[serde(rename = "incomeBracket")]
    pub income_bracket: IncomeBracket,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub preferences: Option<PreferenceSet>,
}

impl FamilyProfile {
    /// Helper to read preferences, falling back to the documented defaults
    /// when the family has not filled them in yet
    pub fn preference_set(&self) -> PreferenceSet {
        self.preferences.clone().unwrap_or_default()
    }
}

/// Support tags a child record requires from any matching family
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NeedsSet {
    #[serde(rename = "requiredSupports", default)]
    pub required_supports: BTreeSet<String>,
}

/// Child record lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChildStatus {
    #[default]
    Available,
    Placed,
    Withdrawn,
}

/// Child record as supplied by the case management collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChildRecord {
    pub id: String,
    pub city: String,
    #[serde(rename = "ageMin")]
    pub age_min: u8,
    #[serde(rename = "ageMax")]
    pub age_max: u8,
    #[serde(default)]
    pub needs: NeedsSet,
    #[serde(rename = "hasSiblings", default)]
    pub has_siblings: Option<bool>,
    #[serde(default)]
    pub status: ChildStatus,
    #[serde(rename = "createdBy", default)]
    pub created_by: Option<String>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl ChildRecord {
    /// Helper to read the sibling flag, defaulting to false
    pub fn siblings(&self) -> bool {
        self.has_siblings.unwrap_or(false)
    }
}

/// Scored suggestion result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSuggestion {
    #[serde(rename = "childId")]
    pub child_id: String,
    pub city: String,
    #[serde(rename = "ageMin")]
    pub age_min: u8,
    #[serde(rename = "ageMax")]
    pub age_max: u8,
    pub score: u32,
    pub reasons: Vec<String>,
}

/// Scoring weights
///
/// Each component is capped on its own so no single factor can dominate.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub age_overlap: u32,
    pub siblings: u32,
    pub support_per_tag: u32,
    pub support_cap: u32,
    pub availability: u32,
}

impl ScoringWeights {
    /// Highest score any candidate can reach under these weights
    pub fn max_score(&self) -> u32 {
        self.age_overlap + self.siblings + self.support_cap + self.availability
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            age_overlap: 30,
            siblings: 15,
            support_per_tag: 10,
            support_cap: 30,
            availability: 10,
        }
    }
}
