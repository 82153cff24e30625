use crate::models::{ChildRecord, FamilyProfile, PreferenceSet};

/// Hard eligibility test applied before any scoring
///
/// A candidate is eligible only if the family lives in the same city (or
/// can relocate) and covers every required support tag. Failing candidates
/// never receive a score; partial support coverage earns nothing here.
#[inline]
pub fn is_eligible(child: &ChildRecord, family: &FamilyProfile) -> bool {
    let prefs = family.preference_set();

    if child.city != family.city && !prefs.can_relocate {
        return false;
    }

    // Every required support tag must be covered; an empty requirement
    // set passes trivially
    child
        .needs
        .required_supports
        .iter()
        .all(|tag| prefs.supports.contains(tag))
}

/// Count how many of the candidate's required support tags the family covers
///
/// Feeds the coverage component of the compatibility score.
#[inline]
pub fn covered_support_count(child: &ChildRecord, prefs: &PreferenceSet) -> usize {
    child
        .needs
        .required_supports
        .iter()
        .filter(|tag| prefs.supports.contains(tag.as_str()))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ChildStatus, IncomeBracket, NeedsSet};
    use std::collections::BTreeSet;

    fn child(city: &str, required: &[&str]) -> ChildRecord {
        ChildRecord {
            id: "c1".to_string(),
            city: city.to_string(),
            age_min: 5,
            age_max: 10,
            needs: NeedsSet {
                required_supports: required.iter().map(|s| s.to_string()).collect(),
            },
            has_siblings: None,
            status: ChildStatus::Available,
            created_by: None,
            created_at: None,
        }
    }

    fn family(city: &str, can_relocate: bool, supports: &[&str]) -> FamilyProfile {
        FamilyProfile {
            principal_id: "f1".to_string(),
            full_name: "Test Family".to_string(),
            city: city.to_string(),
            household_size: 3,
            income_bracket: IncomeBracket::Middle,
            experience: None,
            preferences: Some(crate::models::PreferenceSet {
                age_min: 3,
                age_max: 16,
                accepts_siblings: false,
                can_relocate,
                supports: supports.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>(),
                availability: None,
            }),
        }
    }

    #[test]
    fn test_same_city_passes() {
        assert!(is_eligible(&child("Tunis", &[]), &family("Tunis", false, &[])));
    }

    #[test]
    fn test_city_mismatch_without_relocation_fails() {
        assert!(!is_eligible(&child("Sousse", &[]), &family("Tunis", false, &[])));
    }

    #[test]
    fn test_relocation_admits_other_cities() {
        assert!(is_eligible(&child("Sousse", &[]), &family("Tunis", true, &[])));
    }

    #[test]
    fn test_uncovered_support_fails() {
        let c = child("Tunis", &["medical", "therapy"]);
        assert!(!is_eligible(&c, &family("Tunis", false, &["medical"])));
        assert!(is_eligible(&c, &family("Tunis", false, &["medical", "therapy"])));
    }

    #[test]
    fn test_missing_preferences_defaults() {
        let mut f = family("Tunis", false, &[]);
        f.preferences = None;

        // Same city, no required supports: still eligible
        assert!(is_eligible(&child("Tunis", &[]), &f));
        // No preferences means no relocation and no supports
        assert!(!is_eligible(&child("Sousse", &[]), &f));
        assert!(!is_eligible(&child("Tunis", &["medical"]), &f));
    }

    #[test]
    fn test_covered_support_count() {
        let c = child("Tunis", &["medical", "therapy", "disability"]);
        let f = family("Tunis", false, &["medical", "therapy"]);
        assert_eq!(covered_support_count(&c, &f.preference_set()), 2);

        let none = family("Tunis", false, &[]);
        assert_eq!(covered_support_count(&c, &none.preference_set()), 0);
    }
}
