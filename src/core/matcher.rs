use crate::core::filters::is_eligible;
use crate::core::scoring::compatibility_score;
use crate::models::{ChildRecord, ChildStatus, FamilyProfile, ScoredSuggestion, ScoringWeights};

/// Result of a suggestion run
#[derive(Debug, Clone)]
pub struct SuggestionSet {
    pub suggestions: Vec<ScoredSuggestion>,
    pub total_candidates: usize,
}

/// Match engine - hard filtering, compatibility scoring, ranking
///
/// # Pipeline stages
/// 1. Per-record structural checks (bad records are skipped, never abort
///    the batch)
/// 2. Hard eligibility filter
/// 3. Compatibility scoring
/// 4. Ranking and truncation
#[derive(Debug, Clone)]
pub struct MatchEngine {
    weights: ScoringWeights,
}

impl MatchEngine {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Rank available candidates against a family profile
    ///
    /// Deterministic: identical inputs produce identical ordered output.
    /// Candidates with equal scores keep their input order (stable sort).
    /// A `limit` of zero yields an empty list.
    ///
    /// # Arguments
    /// * `family` - The requesting family's profile
    /// * `candidates` - Child records from the case management store
    /// * `limit` - Maximum number of suggestions to return
    pub fn suggest(
        &self,
        family: &FamilyProfile,
        candidates: Vec<ChildRecord>,
        limit: usize,
    ) -> SuggestionSet {
        let total_candidates = candidates.len();

        let mut suggestions: Vec<ScoredSuggestion> = candidates
            .into_iter()
            // Stage 1: skip records the store should never have produced
            .filter(|child| !child.id.is_empty() && child.age_min <= child.age_max)
            // Only available records are candidates; the store is expected
            // to pre-filter but is not trusted to
            .filter(|child| child.status == ChildStatus::Available)
            // Stage 2: hard eligibility filter
            .filter(|child| is_eligible(child, family))
            // Stage 3: score survivors
            .map(|child| {
                let (score, reasons) = compatibility_score(&child, family, &self.weights);
                ScoredSuggestion {
                    child_id: child.id,
                    city: child.city,
                    age_min: child.age_min,
                    age_max: child.age_max,
                    score,
                    reasons,
                }
            })
            .collect();

        // Stage 4: rank by score descending; sort_by is stable so ties
        // keep input order
        suggestions.sort_by(|a, b| b.score.cmp(&a.score));
        suggestions.truncate(limit);

        SuggestionSet {
            suggestions,
            total_candidates,
        }
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
