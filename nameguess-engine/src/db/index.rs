//! Lookup indexes over the record table
//!
//! Every index maps a key to record positions in the table, sorted most likely
//! first: descending national total for national indexes, descending state
//! count for state-scoped ones. Ties keep table order. Retrieval relies on this
//! ordering to read "first match" as "most likely".

use crate::record::{GenderCode, NameRecord, PopularityBucket};
use nameguess_common::tags::{LengthBucket, StartClass};
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

/// Full-combination key for the most specific index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CriteriaKey {
    pub gender: GenderCode,
    pub length: LengthBucket,
    pub start: StartClass,
    pub popularity: PopularityBucket,
}

type Index<K> = HashMap<K, Vec<usize>>;

/// All index families
#[derive(Debug, Default)]
pub(crate) struct NameIndexes {
    by_gender: Index<GenderCode>,
    by_length: Index<LengthBucket>,
    by_start: Index<StartClass>,
    by_popularity: Index<PopularityBucket>,
    by_gender_length: Index<(GenderCode, LengthBucket)>,
    by_gender_start: Index<(GenderCode, StartClass)>,
    by_gender_popularity: Index<(GenderCode, PopularityBucket)>,
    by_criteria: Index<CriteriaKey>,
    by_state_gender: Index<(String, GenderCode)>,
    by_state_gender_length: Index<(String, GenderCode, LengthBucket)>,
    by_state_criteria: Index<(String, CriteriaKey)>,
}

fn push<K: Eq + Hash>(index: &mut Index<K>, key: K, position: usize) {
    index.entry(key).or_default().push(position);
}

fn sort_by_count<K>(index: &mut Index<K>, count: impl Fn(usize) -> u64) {
    for positions in index.values_mut() {
        // Stable sort: equal counts stay in table order
        positions.sort_by_key(|p| std::cmp::Reverse(count(*p)));
    }
}

fn lookup<'a, K: Eq + Hash>(index: &'a Index<K>, key: &K) -> &'a [usize] {
    index.get(key).map(Vec::as_slice).unwrap_or(&[])
}

impl NameIndexes {
    /// Build every index family over `records`
    pub fn build(records: &[Arc<NameRecord>]) -> Self {
        let mut idx = NameIndexes::default();

        for (position, record) in records.iter().enumerate() {
            let gender = record.gender;
            let length = record.length_bucket();
            let start = record.start_class();
            let popularity = PopularityBucket::from_count(record.total_count);
            let key = CriteriaKey {
                gender,
                length,
                start,
                popularity,
            };

            push(&mut idx.by_gender, gender, position);
            push(&mut idx.by_length, length, position);
            push(&mut idx.by_start, start, position);
            push(&mut idx.by_popularity, popularity, position);
            push(&mut idx.by_gender_length, (gender, length), position);
            push(&mut idx.by_gender_start, (gender, start), position);
            push(&mut idx.by_gender_popularity, (gender, popularity), position);
            push(&mut idx.by_criteria, key, position);

            for (state, state_count) in &record.state_counts {
                let state_key = CriteriaKey {
                    popularity: PopularityBucket::from_count(*state_count),
                    ..key
                };
                push(&mut idx.by_state_gender, (state.clone(), gender), position);
                push(
                    &mut idx.by_state_gender_length,
                    (state.clone(), gender, length),
                    position,
                );
                push(&mut idx.by_state_criteria, (state.clone(), state_key), position);
            }
        }

        let total = |p: usize| records[p].total_count;
        sort_by_count(&mut idx.by_gender, total);
        sort_by_count(&mut idx.by_length, total);
        sort_by_count(&mut idx.by_start, total);
        sort_by_count(&mut idx.by_popularity, total);
        sort_by_count(&mut idx.by_gender_length, total);
        sort_by_count(&mut idx.by_gender_start, total);
        sort_by_count(&mut idx.by_gender_popularity, total);
        sort_by_count(&mut idx.by_criteria, total);

        for ((state, _), positions) in idx.by_state_gender.iter_mut() {
            positions.sort_by_key(|p| std::cmp::Reverse(records[*p].state_count(state)));
        }
        for ((state, _, _), positions) in idx.by_state_gender_length.iter_mut() {
            positions.sort_by_key(|p| std::cmp::Reverse(records[*p].state_count(state)));
        }
        for ((state, _), positions) in idx.by_state_criteria.iter_mut() {
            positions.sort_by_key(|p| std::cmp::Reverse(records[*p].state_count(state)));
        }

        idx
    }

    pub fn gender(&self, gender: GenderCode) -> &[usize] {
        lookup(&self.by_gender, &gender)
    }

    pub fn length(&self, length: LengthBucket) -> &[usize] {
        lookup(&self.by_length, &length)
    }

    pub fn start(&self, start: StartClass) -> &[usize] {
        lookup(&self.by_start, &start)
    }

    pub fn popularity(&self, popularity: PopularityBucket) -> &[usize] {
        lookup(&self.by_popularity, &popularity)
    }

    pub fn gender_length(&self, gender: GenderCode, length: LengthBucket) -> &[usize] {
        lookup(&self.by_gender_length, &(gender, length))
    }

    pub fn gender_start(&self, gender: GenderCode, start: StartClass) -> &[usize] {
        lookup(&self.by_gender_start, &(gender, start))
    }

    pub fn gender_popularity(&self, gender: GenderCode, popularity: PopularityBucket) -> &[usize] {
        lookup(&self.by_gender_popularity, &(gender, popularity))
    }

    pub fn criteria(&self, key: CriteriaKey) -> &[usize] {
        lookup(&self.by_criteria, &key)
    }

    pub fn state_gender(&self, state: &str, gender: GenderCode) -> &[usize] {
        lookup(&self.by_state_gender, &(state.to_string(), gender))
    }

    pub fn state_gender_length(
        &self,
        state: &str,
        gender: GenderCode,
        length: LengthBucket,
    ) -> &[usize] {
        lookup(
            &self.by_state_gender_length,
            &(state.to_string(), gender, length),
        )
    }

    pub fn state_criteria(&self, state: &str, key: CriteriaKey) -> &[usize] {
        lookup(&self.by_state_criteria, &(state.to_string(), key))
    }

    /// Distinct states with at least one record
    pub fn states(&self) -> Vec<String> {
        let mut states: Vec<String> = self
            .by_state_gender
            .keys()
            .map(|(state, _)| state.clone())
            .collect();
        states.sort();
        states.dedup();
        states
    }
}
