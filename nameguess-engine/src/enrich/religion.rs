//! Religion associations and religious significance

use super::lists::*;
use crate::record::{GenderCode, ReligionTag, ReligiousSignificance};
use std::collections::BTreeSet;

type ReligionList = (&'static NameSet, &'static [ReligionTag]);

const ABRAHAMIC: &[ReligionTag] = &[ReligionTag::Christian, ReligionTag::Jewish];

static MALE_LISTS: [ReligionList; 8] = [
    (&OLD_TESTAMENT_MALE, ABRAHAMIC),
    (&CHRISTIAN_MALE, &[ReligionTag::Christian]),
    (&JEWISH_MALE, &[ReligionTag::Jewish]),
    (&MUSLIM_MALE, &[ReligionTag::Muslim]),
    (&QURANIC_SHARED, &[ReligionTag::Muslim]),
    (&HINDU_MALE, &[ReligionTag::Hindu]),
    (&BUDDHIST, &[ReligionTag::Buddhist]),
    (&SIKH, &[ReligionTag::Sikh]),
];

static FEMALE_LISTS: [ReligionList; 8] = [
    (&OLD_TESTAMENT_FEMALE, ABRAHAMIC),
    (&CHRISTIAN_FEMALE, &[ReligionTag::Christian]),
    (&JEWISH_FEMALE, &[ReligionTag::Jewish]),
    (&MUSLIM_FEMALE, &[ReligionTag::Muslim]),
    (&QURANIC_SHARED, &[ReligionTag::Muslim]),
    (&HINDU_FEMALE, &[ReligionTag::Hindu]),
    (&BUDDHIST, &[ReligionTag::Buddhist]),
    (&SIKH, &[ReligionTag::Sikh]),
];

/// Religions a lower-cased name is associated with
///
/// The lists are gender-keyed; any gender other than `M`/`F` yields an empty set.
pub(crate) fn religions(lower: &str, gender: GenderCode) -> BTreeSet<ReligionTag> {
    let lists: &[ReligionList] = match gender {
        GenderCode::M => &MALE_LISTS,
        GenderCode::F => &FEMALE_LISTS,
        GenderCode::NB => return BTreeSet::new(),
    };

    lists
        .iter()
        .filter(|(set, _)| set.contains(lower))
        .flat_map(|(_, tags)| tags.iter().copied())
        .collect()
}

/// Significance tier given the already-derived religion set
pub(crate) fn significance(
    lower: &str,
    religions: &BTreeSet<ReligionTag>,
) -> ReligiousSignificance {
    if religions.is_empty() {
        return ReligiousSignificance::None;
    }
    if religions.len() >= 2 || MAJOR_RELIGIOUS_FIGURES.contains(lower) {
        ReligiousSignificance::High
    } else if VIRTUE_NAMES.contains(lower) {
        ReligiousSignificance::Low
    } else {
        ReligiousSignificance::Medium
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_old_testament_name_is_cross_religious() {
        let found = religions("sarah", GenderCode::F);
        assert!(found.contains(&ReligionTag::Christian));
        assert!(found.contains(&ReligionTag::Jewish));
        assert!(found.contains(&ReligionTag::Muslim));
        assert_eq!(significance("sarah", &found), ReligiousSignificance::High);
    }

    #[test]
    fn test_virtue_name_is_low_significance() {
        let found = religions("grace", GenderCode::F);
        assert_eq!(found.len(), 1);
        assert_eq!(significance("grace", &found), ReligiousSignificance::Low);
    }

    #[test]
    fn test_lists_are_gender_keyed() {
        assert!(religions("fatima", GenderCode::M).is_empty());
        assert!(religions("fatima", GenderCode::NB).is_empty());
        assert_eq!(
            significance("brayden", &religions("brayden", GenderCode::M)),
            ReligiousSignificance::None
        );
    }
}
