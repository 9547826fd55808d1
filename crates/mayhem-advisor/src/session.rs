use std::collections::{HashMap, hash_map::Entry};

use crate::{
    AdvisorError,
    advisor::AugmentAdvisor,
    record::ChampionId,
    reference::AugmentReference,
    source::AugmentStatSource,
    tier_group::ScoringPolicy,
};

/// Builds advisors on demand and keeps them per champion.
///
/// A champion's statistics are loaded and ranked the first time it is asked
/// for. Failed builds are not cached.
#[derive(Debug)]
pub struct AdvisorSession<R, S> {
    reference: R,
    source: S,
    policy: ScoringPolicy,
    advisors: HashMap<ChampionId, AugmentAdvisor<R>>,
}

impl<R, S> AdvisorSession<R, S>
where
    R: AugmentReference + Clone,
    S: AugmentStatSource,
{
    #[must_use]
    pub fn new(reference: R, source: S, policy: ScoringPolicy) -> Self {
        Self {
            reference,
            source,
            policy,
            advisors: HashMap::new(),
        }
    }

    #[must_use]
    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    /// Returns the advisor for `champion`, building it if needed.
    pub fn advisor(&mut self, champion: ChampionId) -> Result<&AugmentAdvisor<R>, AdvisorError> {
        match self.advisors.entry(champion) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let advisor = AugmentAdvisor::from_source(
                    self.reference.clone(),
                    &self.source,
                    champion,
                    &self.policy,
                )?;
                Ok(entry.insert(advisor))
            }
        }
    }

    #[must_use]
    pub fn is_cached(&self, champion: ChampionId) -> bool {
        self.advisors.contains_key(&champion)
    }

    /// Drops the cached advisor for `champion`, so the next request reloads it.
    pub fn invalidate(&mut self, champion: ChampionId) -> bool {
        self.advisors.remove(&champion).is_some()
    }

    /// Drops every cached advisor.
    pub fn clear(&mut self) {
        self.advisors.clear();
    }
}
