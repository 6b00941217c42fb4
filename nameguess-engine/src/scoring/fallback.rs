//! Fixed fallback names, used when retrieval finds nothing
//!
//! Five plausible names per gender and length bucket. Records built from
//! these lists carry a zero count.

use crate::enrich::enrich;
use crate::record::{GenderCode, NameRecord};
use nameguess_common::tags::LengthBucket;
use std::collections::BTreeMap;
use std::sync::Arc;

static MALE: [[&str; 5]; 4] = [
    ["John", "Jack", "Luke", "Liam", "Noah"],
    ["James", "David", "Henry", "Mason", "Logan"],
    ["Michael", "William", "Matthew", "Anthony", "Timothy"],
    ["Christopher", "Maximilian", "Bartholomew", "Montgomery", "Fitzgerald"],
];

static FEMALE: [[&str; 5]; 4] = [
    ["Emma", "Ava", "Mia", "Lily", "Zoe"],
    ["Olivia", "Sophia", "Grace", "Chloe", "Emily"],
    ["Abigail", "Charlotte", "Madison", "Isabella", "Caroline"],
    ["Alexandria", "Evangeline", "Jacqueline", "Marguerite", "Antoinette"],
];

static NON_BINARY: [[&str; 5]; 4] = [
    ["Alex", "Sam", "Kai", "Rory", "Jude"],
    ["Jordan", "Riley", "Avery", "Casey", "Quinn"],
    ["Cameron", "Addison", "Emerson", "Kendall", "Ellison"],
    ["Kensington", "Washington", "Wellington", "Huntington", "Livingston"],
];

/// Fallback names for a gender (`None` for non-binary or unspecified) and
/// length bucket (`None` means medium)
pub fn fallback_names(
    gender: Option<GenderCode>,
    length: Option<LengthBucket>,
) -> &'static [&'static str; 5] {
    let table = match gender {
        Some(GenderCode::M) => &MALE,
        Some(GenderCode::F) => &FEMALE,
        Some(GenderCode::NB) | None => &NON_BINARY,
    };
    &table[length.unwrap_or(LengthBucket::Medium).ordinal()]
}

/// Zero-count records for the fallback names
pub fn fallback_records(
    gender: Option<GenderCode>,
    length: Option<LengthBucket>,
) -> Vec<Arc<NameRecord>> {
    let record_gender = gender.unwrap_or(GenderCode::NB);
    fallback_names(gender, length)
        .iter()
        .map(|name| {
            Arc::new(NameRecord {
                name: name.to_string(),
                gender: record_gender,
                total_count: 0,
                year_counts: Vec::new(),
                state_counts: BTreeMap::new(),
                attributes: enrich(name, record_gender, 0),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_names_fit_their_bucket() {
        for (gender, table) in [
            (Some(GenderCode::M), &MALE),
            (Some(GenderCode::F), &FEMALE),
            (None, &NON_BINARY),
        ] {
            for bucket in LengthBucket::ALL {
                let names = fallback_names(gender, Some(*bucket));
                assert_eq!(names, &table[bucket.ordinal()]);
                for name in names {
                    assert_eq!(LengthBucket::of_len(name.len()), *bucket, "{}", name);
                }
            }
        }
    }

    #[test]
    fn test_fallback_records_default_to_medium() {
        let records = fallback_records(Some(GenderCode::F), None);
        assert_eq!(records.len(), 5);
        assert_eq!(records[0].name, "Olivia");
        assert!(records.iter().all(|r| r.gender == GenderCode::F));
    }
}
