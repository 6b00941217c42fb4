//! Non-binary candidate pool
//!
//! Names used for both genders, judged by how balanced their male and female
//! counts are. Candidates are computed fresh on every request from the base
//! records and never written back into the table.

use super::neutral_names::is_curated_neutral;
use crate::db::NameTable;
use crate::record::{GenderCode, NameRecord};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Minimum min/max count ratio under the strict policy
pub const STRICT_MIN_BALANCE: f64 = 0.43;

/// Minimum min/max count ratio under the relaxed policy
pub const RELAXED_MIN_BALANCE: f64 = 0.1;

/// Minimum combined count for names chosen by balance
pub const MIN_TOTAL: u64 = 100;

/// Minimum combined count for curated names
pub const CURATED_MIN_TOTAL: u64 = 50;

/// How balanced a name must be to enter the pool
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonBinaryPolicy {
    /// Curated with total ≥ 50, or balance ≥ 0.43 with total ≥ 100
    Strict,
    /// Curated with total ≥ 50, or balance ≥ 0.1 with total ≥ 100
    Relaxed,
}

impl NonBinaryPolicy {
    pub fn admits(&self, is_curated: bool, balance: f64, total: u64) -> bool {
        match self {
            NonBinaryPolicy::Strict if is_curated => total >= CURATED_MIN_TOTAL,
            NonBinaryPolicy::Strict => balance >= STRICT_MIN_BALANCE && total >= MIN_TOTAL,
            NonBinaryPolicy::Relaxed => {
                (is_curated && total >= CURATED_MIN_TOTAL)
                    || (balance >= RELAXED_MIN_BALANCE && total >= MIN_TOTAL)
            }
        }
    }
}

/// A name used for both genders
#[derive(Debug, Clone)]
pub struct NonBinaryCandidate {
    pub name: String,
    pub male_count: u64,
    pub female_count: u64,
    /// min/max of the two counts, in (0, 1]
    pub gender_balance: f64,
    pub is_curated: bool,
    /// Composite `NB` record carrying the dominant gender's attributes
    pub record: Arc<NameRecord>,
}

impl NonBinaryCandidate {
    pub fn total(&self) -> u64 {
        self.male_count + self.female_count
    }
}

fn composite(male: &NameRecord, female: &NameRecord) -> NameRecord {
    let dominant = if male.total_count >= female.total_count {
        male
    } else {
        female
    };

    let mut year_counts = male.year_counts.clone();
    year_counts.extend(female.year_counts.iter().copied());

    let mut state_counts: BTreeMap<String, u64> = male.state_counts.clone();
    for (state, count) in &female.state_counts {
        *state_counts.entry(state.clone()).or_insert(0) += count;
    }

    NameRecord {
        name: dominant.name.clone(),
        gender: GenderCode::NB,
        total_count: male.total_count + female.total_count,
        year_counts,
        state_counts,
        attributes: dominant.attributes.clone(),
    }
}

/// Every name in `table` admitted by `policy`, most frequent first
pub fn non_binary_candidates(
    table: &NameTable,
    policy: NonBinaryPolicy,
) -> Vec<NonBinaryCandidate> {
    let mut order: Vec<String> = Vec::new();
    let mut pairs: HashMap<String, (Option<&Arc<NameRecord>>, Option<&Arc<NameRecord>>)> =
        HashMap::new();

    for record in table.records() {
        let lower = record.name.to_lowercase();
        let entry = pairs.entry(lower.clone()).or_insert_with(|| {
            order.push(lower);
            (None, None)
        });
        match record.gender {
            GenderCode::M => entry.0 = Some(record),
            GenderCode::F => entry.1 = Some(record),
            GenderCode::NB => {}
        }
    }

    let mut candidates: Vec<NonBinaryCandidate> = order
        .iter()
        .filter_map(|lower| match pairs.get(lower) {
            Some((Some(male), Some(female))) => Some((*male, *female)),
            _ => None,
        })
        .filter(|(male, female)| male.total_count > 0 && female.total_count > 0)
        .filter_map(|(male, female)| {
            let (m, f) = (male.total_count, female.total_count);
            let balance = m.min(f) as f64 / m.max(f) as f64;
            let is_curated = is_curated_neutral(&male.name);
            if !policy.admits(is_curated, balance, m + f) {
                return None;
            }
            Some(NonBinaryCandidate {
                name: if m >= f {
                    male.name.clone()
                } else {
                    female.name.clone()
                },
                male_count: m,
                female_count: f,
                gender_balance: balance,
                is_curated,
                record: Arc::new(composite(male, female)),
            })
        })
        .collect();

    // Stable: equal totals keep table order
    candidates.sort_by_key(|c| std::cmp::Reverse(c.total()));
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strict_policy() {
        let strict = NonBinaryPolicy::Strict;
        // 120/60: balance 0.5, total 180
        assert!(strict.admits(false, 0.5, 180));
        // 500/10: balance 0.02
        assert!(!strict.admits(false, 0.02, 510));
        assert!(strict.admits(true, 0.02, 510));
        assert!(strict.admits(true, 0.02, 50));
        assert!(!strict.admits(true, 0.9, 49));
        assert!(!strict.admits(false, 0.5, 99));
    }

    #[test]
    fn test_relaxed_policy() {
        let relaxed = NonBinaryPolicy::Relaxed;
        assert!(relaxed.admits(false, 0.1, 100));
        assert!(!relaxed.admits(false, 0.09, 1000));
        assert!(relaxed.admits(true, 0.9, 80));
    }
}
