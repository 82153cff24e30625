use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{IncomeBracket, NeedsSet, PreferenceSet};

/// Family profile upsert payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FamilyProfileUpdate {
    #[validate(length(min = 1))]
    #[serde(alias = "full_name", rename = "fullName")]
    pub full_name: String,
    #[validate(length(min = 1))]
    pub city: String,
    #[validate(range(min = 1))]
    #[serde(alias = "household_size", rename = "householdSize")]
    pub household_size: u32,
    #[serde(alias = "income_bracket", rename = "incomeBracket")]
    pub income_bracket: IncomeBracket,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub preferences: Option<PreferenceSet>,
}

/// Child record intake payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewChildRecord {
    #[validate(length(min = 1))]
    pub city: String,
    #[serde(alias = "age_min", rename = "ageMin")]
    pub age_min: u8,
    #[serde(alias = "age_max", rename = "ageMax")]
    pub age_max: u8,
    #[serde(default)]
    pub needs: NeedsSet,
    #[serde(alias = "has_siblings", rename = "hasSiblings", default)]
    pub has_siblings: Option<bool>,
}

/// Verification document submission
///
/// Only the submission event matters here; the document itself is stored
/// by the document collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DocumentSubmission {
    #[validate(length(min = 1))]
    #[serde(rename = "type")]
    pub kind: String,
    #[validate(length(min = 1))]
    pub url: String,
}
