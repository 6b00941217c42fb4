//! Candidate retriever
//!
//! Picks a candidate pool for one answer set from the database indexes. The
//! pool is not ranked; the scoring engine does that next.
//!
//! # Tiers (binary genders)
//! Each tier is tried only when its inputs were answered, and the first
//! non-empty one wins:
//! 1. state + gender + length + start + popularity
//! 2. state + gender + length
//! 3. gender + length
//! 4. gender
//!
//! Narrower tiers relax into broader ones; an empty specific index never
//! hides data in a broader one. When every tier is empty the pool is empty and
//! the caller substitutes fixed fallback names.
//!
//! # Non-binary
//! The strict non-binary pool filtered by length; if that is empty, the relaxed
//! pool filtered by length.

pub mod neutral_names;
pub mod non_binary;

pub use non_binary::{non_binary_candidates, NonBinaryCandidate, NonBinaryPolicy};

use crate::db::{CriteriaKey, NameTable};
use crate::record::{GenderCode, NameRecord, PopularityBucket};
use nameguess_common::answers::{GenderAnswer, PopularityPreference};
use nameguess_common::AnswerSet;
use std::sync::Arc;
use tracing::debug;

/// Which lookup produced a candidate pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetrievalTier {
    StateCriteria,
    StateGenderLength,
    GenderLength,
    Gender,
    /// No usable gender: length index, or the whole table
    AnyGender,
    NonBinaryStrict,
    NonBinaryRelaxed,
    /// Nothing matched
    Empty,
}

/// A candidate pool and where it came from
#[derive(Debug, Clone)]
pub struct Retrieval {
    pub candidates: Vec<Arc<NameRecord>>,
    pub tier: RetrievalTier,
}

/// Index bucket for a popularity answer
pub fn popularity_bucket(preference: PopularityPreference) -> PopularityBucket {
    match preference {
        PopularityPreference::VeryPopular => PopularityBucket::VeryPopular,
        PopularityPreference::Popular => PopularityBucket::Popular,
        PopularityPreference::Moderate
        | PopularityPreference::Uncommon
        | PopularityPreference::Rare => PopularityBucket::Uncommon,
    }
}

/// Record gender for a binary gender answer
pub fn gender_code(answer: GenderAnswer) -> Option<GenderCode> {
    match answer {
        GenderAnswer::Male => Some(GenderCode::M),
        GenderAnswer::Female => Some(GenderCode::F),
        GenderAnswer::NonBinary | GenderAnswer::PreferNotToSay => None,
    }
}

/// Candidate lookup over a loaded table
pub struct CandidateRetriever<'a> {
    table: &'a NameTable,
    max_candidates: usize,
}

impl<'a> CandidateRetriever<'a> {
    pub fn new(table: &'a NameTable, max_candidates: usize) -> Self {
        Self {
            table,
            max_candidates: max_candidates.max(1),
        }
    }

    /// Candidate pool for `answers`
    pub fn get_candidates(&self, answers: &AnswerSet) -> Vec<Arc<NameRecord>> {
        self.retrieve(answers).candidates
    }

    /// Candidate pool for `answers` along with the tier that produced it
    pub fn retrieve(&self, answers: &AnswerSet) -> Retrieval {
        let retrieval = match answers.gender {
            Some(GenderAnswer::NonBinary) => self.retrieve_non_binary(answers),
            Some(answer) => match gender_code(answer) {
                Some(gender) => self.retrieve_binary(answers, gender),
                None => self.retrieve_any_gender(answers),
            },
            None => self.retrieve_any_gender(answers),
        };

        debug!(
            tier = ?retrieval.tier,
            candidates = retrieval.candidates.len(),
            "Retrieved candidates"
        );
        retrieval
    }

    /// Non-binary pool under `policy`, most frequent first, uncapped
    pub fn non_binary_names(&self, policy: NonBinaryPolicy) -> Vec<NonBinaryCandidate> {
        non_binary_candidates(self.table, policy)
    }

    fn capped(&self, positions: &[usize]) -> Vec<Arc<NameRecord>> {
        let end = positions.len().min(self.max_candidates);
        self.table.resolve(&positions[..end])
    }

    fn retrieve_binary(&self, answers: &AnswerSet, gender: GenderCode) -> Retrieval {
        let idx = self.table.indexes();
        let state = answers.state.as_deref().map(str::to_ascii_uppercase);
        let state = state.as_deref();

        let mut tiers: Vec<(RetrievalTier, &[usize])> = Vec::with_capacity(4);
        if let (Some(state), Some(length), Some(start), Some(popularity)) = (
            state,
            answers.length,
            answers.starts_with,
            answers.popularity,
        ) {
            let key = CriteriaKey {
                gender,
                length,
                start,
                popularity: popularity_bucket(popularity),
            };
            tiers.push((RetrievalTier::StateCriteria, idx.state_criteria(state, key)));
        }
        if let (Some(state), Some(length)) = (state, answers.length) {
            tiers.push((
                RetrievalTier::StateGenderLength,
                idx.state_gender_length(state, gender, length),
            ));
        }
        if let Some(length) = answers.length {
            tiers.push((RetrievalTier::GenderLength, idx.gender_length(gender, length)));
        }
        tiers.push((RetrievalTier::Gender, idx.gender(gender)));

        for (tier, positions) in tiers {
            if positions.is_empty() {
                debug!(tier = ?tier, "Index empty, widening");
                continue;
            }
            return Retrieval {
                candidates: self.capped(positions),
                tier,
            };
        }

        Retrieval {
            candidates: Vec::new(),
            tier: RetrievalTier::Empty,
        }
    }

    fn retrieve_any_gender(&self, answers: &AnswerSet) -> Retrieval {
        let idx = self.table.indexes();
        let by_length = answers.length.map(|l| idx.length(l)).unwrap_or(&[]);

        let candidates = if !by_length.is_empty() {
            self.capped(by_length)
        } else {
            let mut all: Vec<Arc<NameRecord>> = self.table.records().to_vec();
            all.sort_by_key(|r| std::cmp::Reverse(r.total_count));
            all.truncate(self.max_candidates);
            all
        };

        Retrieval {
            tier: if candidates.is_empty() {
                RetrievalTier::Empty
            } else {
                RetrievalTier::AnyGender
            },
            candidates,
        }
    }

    fn retrieve_non_binary(&self, answers: &AnswerSet) -> Retrieval {
        let length_filter = |pool: Vec<NonBinaryCandidate>| -> Vec<Arc<NameRecord>> {
            pool.into_iter()
                .filter(|c| answers.length.map_or(true, |l| c.record.length_bucket() == l))
                .map(|c| c.record)
                .take(self.max_candidates)
                .collect()
        };

        let strict = length_filter(self.non_binary_names(NonBinaryPolicy::Strict));
        if !strict.is_empty() {
            return Retrieval {
                candidates: strict,
                tier: RetrievalTier::NonBinaryStrict,
            };
        }

        debug!("Strict non-binary pool empty, using relaxed balance policy");
        let relaxed = length_filter(self.non_binary_names(NonBinaryPolicy::Relaxed));
        Retrieval {
            tier: if relaxed.is_empty() {
                RetrievalTier::Empty
            } else {
                RetrievalTier::NonBinaryRelaxed
            },
            candidates: relaxed,
        }
    }
}
