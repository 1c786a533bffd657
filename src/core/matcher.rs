use crate::models::{MatchTier, SearchEntry, SearchResult, TrainerRecord};
use crate::services::{StoreError, TrainerStore};
use std::collections::HashSet;
use uuid::Uuid;

/// Default result bound when none is configured
pub const DEFAULT_MAX_RESULTS: usize = 4;

/// Per-invocation accumulator for the tiering logic
///
/// Owns the deduplication set and the ordered entry list. Local to one
/// `search` call; nothing is shared across invocations.
struct Accumulator {
    entries: Vec<SearchEntry>,
    seen: HashSet<Uuid>,
    max_results: usize,
}

impl Accumulator {
    fn new(max_results: usize) -> Self {
        Self {
            entries: Vec::with_capacity(max_results),
            seen: HashSet::new(),
            max_results,
        }
    }

    fn remaining(&self) -> usize {
        self.max_results - self.entries.len()
    }

    fn is_full(&self) -> bool {
        self.entries.len() >= self.max_results
    }

    /// Add distinct trainers under one tier, bounded by `quota` additions
    ///
    /// Trainers already present keep the tier they were first discovered
    /// under; their later appearances are skipped without consuming quota.
    /// Returns the number of trainers actually added.
    fn add_tier(
        &mut self,
        trainers: &[TrainerRecord],
        tier: Option<MatchTier>,
        quota: usize,
    ) -> usize {
        let mut added = 0;

        for trainer in trainers {
            if added >= quota || self.is_full() {
                break;
            }
            if !self.seen.insert(trainer.trainer_id) {
                continue;
            }

            self.entries.push(SearchEntry {
                trainer_id: trainer.trainer_id,
                tier,
            });
            added += 1;
        }

        added
    }

    fn into_result(self) -> SearchResult {
        let found = !self.entries.is_empty();
        SearchResult {
            entries: self.entries,
            found,
        }
    }
}

/// Tiered search orchestrator
///
/// Composes the tag and area predicates (evaluated by the store) into a
/// three-tier search policy:
///
/// 1. Both tier - trainers satisfying a tag AND an area criterion.
/// 2. Tag tier - tag-only matches, capped at half the result bound so the
///    area tier keeps room.
/// 3. Area tier - area-only matches, filling the remaining capacity.
///
/// When one criterion list is empty only the other single tier runs,
/// uncapped. When both are empty the store listing is returned up to the
/// bound with no tier classification.
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    max_results: usize,
}

impl Matcher {
    pub fn new(max_results: usize) -> Self {
        Self { max_results }
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Run one tiered search against the store
    ///
    /// Returns an empty result with `found = false` when no tier yields a
    /// trainer; never fabricates entries. A store failure at any tier fails
    /// the whole call with no partial result.
    pub fn search(
        &self,
        store: &dyn TrainerStore,
        tags: &[String],
        areas: &[String],
    ) -> Result<SearchResult, StoreError> {
        let mut acc = Accumulator::new(self.max_results);

        // No constraints at all: best-effort listing, no tier labels
        if tags.is_empty() && areas.is_empty() {
            let all = store.find_all()?;
            acc.add_tier(&all, None, self.max_results);
            return Ok(acc.into_result());
        }

        // Tier 1: trainers satisfying both criterion kinds
        if !tags.is_empty() && !areas.is_empty() {
            let both = store.find_matching_both(tags, areas)?;
            let added = acc.add_tier(&both, Some(MatchTier::Both), acc.remaining());
            tracing::debug!("Both tier added {} trainers", added);
        }

        // Tier 2: tag-only matches. With area criteria present this tier
        // self-limits to half the bound, reserving room for the area tier.
        if !tags.is_empty() && !acc.is_full() {
            let quota = if areas.is_empty() {
                acc.remaining()
            } else {
                self.max_results / 2
            };
            let tag_trainers = store.find_matching_tags(tags)?;
            let added = acc.add_tier(&tag_trainers, Some(MatchTier::Tag), quota);
            tracing::debug!("Tag tier added {} trainers (quota {})", added, quota);
        }

        // Tier 3: area-only matches fill whatever capacity is left
        if !areas.is_empty() && !acc.is_full() {
            let area_trainers = store.find_matching_areas(areas)?;
            let added = acc.add_tier(&area_trainers, Some(MatchTier::Area), acc.remaining());
            tracing::debug!("Area tier added {} trainers", added);
        }

        Ok(acc.into_result())
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RESULTS)
    }
}
