use std::sync::Arc;

use crate::config::MatchingSettings;
use crate::core::gate::{check_access, Capability};
use crate::core::matcher::{MatchEngine, SuggestionSet};
use crate::services::stores::{AuthCollaborator, ChildStore, ProfileStore};
use crate::services::{resolve_principal, ServiceError};

/// Ranked suggestions for the signed-in family
///
/// Control flow per request: resolve principal, capability gate, load the
/// family profile, pull a candidate batch, run the match engine. Every
/// step works on its own input snapshot; nothing is cached between calls.
pub struct SuggestionService<A, P, C> {
    auth: Arc<A>,
    profiles: Arc<P>,
    children: Arc<C>,
    engine: MatchEngine,
    matching: MatchingSettings,
}

impl<A, P, C> SuggestionService<A, P, C>
where
    A: AuthCollaborator,
    P: ProfileStore,
    C: ChildStore,
{
    pub fn new(
        auth: Arc<A>,
        profiles: Arc<P>,
        children: Arc<C>,
        engine: MatchEngine,
        matching: MatchingSettings,
    ) -> Self {
        Self {
            auth,
            profiles,
            children,
            engine,
            matching,
        }
    }

    /// Suggestions for the signed-in family, at most `limit`
    ///
    /// `None` falls back to the configured default; requested limits are
    /// clamped to the configured maximum.
    pub fn suggest(&self, limit: Option<usize>) -> Result<SuggestionSet, ServiceError> {
        let principal = resolve_principal(self.auth.as_ref())?;
        check_access(&principal, Capability::ViewMatches)?;

        let profile = self
            .profiles
            .family_profile(&principal.id)?
            .ok_or_else(|| ServiceError::MissingProfile(principal.id.clone()))?;

        let limit = limit
            .unwrap_or(self.matching.default_limit)
            .min(self.matching.max_limit);

        let candidates = self.children.list_available(self.matching.candidate_batch)?;

        tracing::debug!(
            "Considering {} candidates for {}",
            candidates.len(),
            principal.id
        );

        let result = self.engine.suggest(&profile, candidates, limit);

        tracing::info!(
            "Returning {} suggestions for {} (from {} candidates)",
            result.suggestions.len(),
            principal.id,
            result.total_candidates
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gate::AccessDenied;
    use crate::models::{
        AccountStatus, FamilyProfile, IncomeBracket, Principal, Role, VerificationState,
    };
    use crate::services::MemoryStore;

    fn service(store: Arc<MemoryStore>) -> SuggestionService<MemoryStore, MemoryStore, MemoryStore> {
        SuggestionService::new(
            store.clone(),
            store.clone(),
            store,
            MatchEngine::with_default_weights(),
            MatchingSettings::default(),
        )
    }

    #[test]
    fn test_unresolved_session_is_denied() {
        let store = Arc::new(MemoryStore::new());
        let result = service(store).suggest(None);
        assert!(matches!(
            result,
            Err(ServiceError::Denied(AccessDenied::ForbiddenRole))
        ));
    }

    #[test]
    fn test_verified_family_without_profile_errors() {
        let store = Arc::new(MemoryStore::new());
        store.insert_principal(Principal {
            id: "f1".to_string(),
            email: "f1@safenest.local".to_string(),
            role: Role::Family,
            account_status: AccountStatus::Active,
            verification: VerificationState::Verified,
            created_at: None,
        });
        store.sign_in("f1");

        let result = service(store).suggest(None);
        assert!(matches!(result, Err(ServiceError::MissingProfile(_))));
    }

    #[test]
    fn test_verified_family_with_profile_gets_suggestions() {
        let store = Arc::new(MemoryStore::new());
        store.insert_principal(Principal {
            id: "f1".to_string(),
            email: "f1@safenest.local".to_string(),
            role: Role::Family,
            account_status: AccountStatus::Active,
            verification: VerificationState::Verified,
            created_at: None,
        });
        store
            .upsert_family_profile(FamilyProfile {
                principal_id: "f1".to_string(),
                full_name: "Test Family".to_string(),
                city: "Tunis".to_string(),
                household_size: 3,
                income_bracket: IncomeBracket::Middle,
                experience: None,
                preferences: None,
            })
            .unwrap();
        store.sign_in("f1");

        let result = service(store).suggest(None).unwrap();
        assert!(result.suggestions.is_empty());
        assert_eq!(result.total_candidates, 0);
    }
}
