use crate::core::filters::covered_support_count;
use crate::models::{AvailabilityTier, ChildRecord, FamilyProfile, ScoringWeights};

/// Reason tags attached to scored suggestions
pub const REASON_AGE_RANGE: &str = "Age range matches";
pub const REASON_SIBLINGS: &str = "Open to siblings";
pub const REASON_SUPPORTS: &str = "Covers required supports";
pub const REASON_AVAILABILITY: &str = "High availability";

/// Calculate a compatibility score for an eligible candidate
///
/// Additive components, each capped on its own:
///   age-range overlap  -> weights.age_overlap
///   sibling fit        -> weights.siblings
///   support coverage   -> min(weights.support_cap, support_per_tag * covered)
///   high availability  -> weights.availability
///
/// Default weights top out at 85; scores are deliberately not rescaled to
/// 100 so later factors have headroom.
pub fn compatibility_score(
    child: &ChildRecord,
    family: &FamilyProfile,
    weights: &ScoringWeights,
) -> (u32, Vec<String>) {
    let prefs = family.preference_set();
    let mut score = 0;
    let mut reasons = Vec::new();

    // Any overlap between the preferred and the candidate age interval,
    // containment not required
    if prefs.age_min <= child.age_max && prefs.age_max >= child.age_min {
        score += weights.age_overlap;
        reasons.push(REASON_AGE_RANGE.to_string());
    }

    if child.siblings() && prefs.accepts_siblings {
        score += weights.siblings;
        reasons.push(REASON_SIBLINGS.to_string());
    }

    // One reason tag regardless of how many tags are covered
    let covered = covered_support_count(child, &prefs) as u32;
    if covered > 0 {
        score += (weights.support_per_tag * covered).min(weights.support_cap);
        reasons.push(REASON_SUPPORTS.to_string());
    }

    if prefs.availability == Some(AvailabilityTier::High) {
        score += weights.availability;
        reasons.push(REASON_AVAILABILITY.to_string());
    }

    (score, reasons)
}
