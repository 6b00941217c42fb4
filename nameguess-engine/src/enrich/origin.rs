//! Language origin and cultural origin derivation

use super::lists::*;
use crate::record::{GenderCode, LanguageOrigin, ReligionTag};
use nameguess_common::tags::CulturalOrigin;
use std::collections::BTreeSet;

/// Explicit origin lists, checked in order; the first hit wins
///
/// Narrow, distinctive origins come before the broad European ones so that e.g.
/// `simran` resolves to Punjabi rather than a coincidental match further down.
static ORIGIN_LISTS: [(LanguageOrigin, &NameSet); 33] = [
    (LanguageOrigin::Punjabi, &LANG_PUNJABI),
    (LanguageOrigin::Hindi, &LANG_HINDI),
    (LanguageOrigin::Sanskrit, &LANG_SANSKRIT),
    (LanguageOrigin::Arabic, &LANG_ARABIC),
    (LanguageOrigin::Persian, &LANG_PERSIAN),
    (LanguageOrigin::Turkish, &LANG_TURKISH),
    (LanguageOrigin::Yoruba, &LANG_YORUBA),
    (LanguageOrigin::Igbo, &LANG_IGBO),
    (LanguageOrigin::Swahili, &LANG_SWAHILI),
    (LanguageOrigin::Hawaiian, &LANG_HAWAIIAN),
    (LanguageOrigin::NativeAmerican, &LANG_NATIVE_AMERICAN),
    (LanguageOrigin::Chinese, &LANG_CHINESE),
    (LanguageOrigin::Japanese, &LANG_JAPANESE),
    (LanguageOrigin::Korean, &LANG_KOREAN),
    (LanguageOrigin::Vietnamese, &LANG_VIETNAMESE),
    (LanguageOrigin::Modern, &LANG_MODERN),
    (LanguageOrigin::Irish, &LANG_IRISH),
    (LanguageOrigin::Scottish, &LANG_SCOTTISH),
    (LanguageOrigin::Welsh, &LANG_WELSH),
    (LanguageOrigin::Celtic, &LANG_CELTIC),
    (LanguageOrigin::Spanish, &LANG_SPANISH),
    (LanguageOrigin::Portuguese, &LANG_PORTUGUESE),
    (LanguageOrigin::Italian, &LANG_ITALIAN),
    (LanguageOrigin::French, &LANG_FRENCH),
    (LanguageOrigin::Dutch, &LANG_DUTCH),
    (LanguageOrigin::Scandinavian, &LANG_SCANDINAVIAN),
    (LanguageOrigin::Russian, &LANG_RUSSIAN),
    (LanguageOrigin::Polish, &LANG_POLISH),
    (LanguageOrigin::Hebrew, &LANG_HEBREW),
    (LanguageOrigin::Greek, &LANG_GREEK),
    (LanguageOrigin::Latin, &LANG_LATIN),
    (LanguageOrigin::Germanic, &LANG_GERMANIC),
    (LanguageOrigin::English, &LANG_ENGLISH),
];

/// Suffix rules for names on none of the lists
const SUFFIX_RULES: &[(&str, LanguageOrigin)] = &[
    ("preet", LanguageOrigin::Punjabi),
    ("deep", LanguageOrigin::Punjabi),
    ("winder", LanguageOrigin::Punjabi),
    ("jit", LanguageOrigin::Punjabi),
    ("oulos", LanguageOrigin::Greek),
    ("ios", LanguageOrigin::Greek),
    ("slav", LanguageOrigin::Russian),
    ("enko", LanguageOrigin::Russian),
    ("sson", LanguageOrigin::Scandinavian),
    ("iah", LanguageOrigin::Hebrew),
    ("iel", LanguageOrigin::Hebrew),
    ("ette", LanguageOrigin::French),
    ("elle", LanguageOrigin::French),
    ("ique", LanguageOrigin::French),
    ("etta", LanguageOrigin::Italian),
    ("ino", LanguageOrigin::Italian),
    ("enzo", LanguageOrigin::Italian),
    ("ita", LanguageOrigin::Spanish),
    ("ito", LanguageOrigin::Spanish),
    ("shawn", LanguageOrigin::Modern),
    ("quan", LanguageOrigin::Modern),
    ("iqua", LanguageOrigin::Modern),
    ("lynn", LanguageOrigin::Modern),
    ("leigh", LanguageOrigin::Modern),
    ("ayden", LanguageOrigin::Modern),
    ("aden", LanguageOrigin::Modern),
    ("son", LanguageOrigin::English),
    ("ton", LanguageOrigin::English),
    ("ley", LanguageOrigin::English),
];

const PREFIX_RULES: &[(&str, LanguageOrigin)] = &[
    ("mac", LanguageOrigin::Scottish),
    ("mc", LanguageOrigin::Scottish),
    ("fitz", LanguageOrigin::Irish),
];

/// Language origin of a lower-cased name; `english` when nothing matches
pub(crate) fn language_origin(lower: &str) -> LanguageOrigin {
    if let Some((origin, _)) = ORIGIN_LISTS.iter().find(|(_, set)| set.contains(lower)) {
        return *origin;
    }
    if let Some((_, origin)) = PREFIX_RULES.iter().find(|(p, _)| lower.starts_with(p)) {
        return *origin;
    }
    SUFFIX_RULES
        .iter()
        .find(|(suffix, _)| lower.len() > suffix.len() && lower.ends_with(suffix))
        .map(|(_, origin)| *origin)
        .unwrap_or(LanguageOrigin::English)
}

fn origins_for_language(origin: LanguageOrigin) -> &'static [CulturalOrigin] {
    use CulturalOrigin as C;
    match origin {
        LanguageOrigin::English => &[C::Anglo],
        LanguageOrigin::Germanic => &[C::Anglo, C::German],
        LanguageOrigin::Celtic => &[C::Anglo, C::Irish, C::Scottish, C::Welsh],
        LanguageOrigin::Irish => &[C::Irish],
        LanguageOrigin::Scottish => &[C::Scottish],
        LanguageOrigin::Welsh => &[C::Welsh],
        LanguageOrigin::Latin => &[C::Anglo, C::Italian],
        LanguageOrigin::Greek => &[C::Anglo, C::Greek],
        LanguageOrigin::Hebrew => &[C::Anglo],
        LanguageOrigin::French => &[C::French],
        LanguageOrigin::Italian => &[C::Italian],
        LanguageOrigin::Spanish => &[C::Hispanic],
        LanguageOrigin::Portuguese => &[C::Portuguese],
        LanguageOrigin::Dutch => &[C::German],
        LanguageOrigin::Scandinavian => &[C::Scandinavian],
        LanguageOrigin::Russian | LanguageOrigin::Polish => &[C::Slavic],
        LanguageOrigin::Arabic => &[C::Arabic],
        LanguageOrigin::Persian => &[C::Persian],
        LanguageOrigin::Turkish => &[C::Turkish],
        LanguageOrigin::Sanskrit | LanguageOrigin::Hindi | LanguageOrigin::Punjabi => {
            &[C::SouthAsian]
        }
        LanguageOrigin::Chinese | LanguageOrigin::Japanese | LanguageOrigin::Korean => {
            &[C::EastAsian]
        }
        LanguageOrigin::Vietnamese => &[C::SoutheastAsian],
        LanguageOrigin::Swahili | LanguageOrigin::Yoruba | LanguageOrigin::Igbo => &[C::African],
        LanguageOrigin::Hawaiian => &[C::PacificIslander],
        LanguageOrigin::NativeAmerican => &[C::NativeAmerican],
        LanguageOrigin::Modern => &[],
    }
}

/// Cultural origins of a lower-cased name
///
/// Like the religion lists, the explicit cultural lists are gender-keyed; any
/// gender other than `M`/`F` yields an empty set.
pub(crate) fn cultural_origins(
    lower: &str,
    gender: GenderCode,
    language: LanguageOrigin,
    religions: &BTreeSet<ReligionTag>,
) -> BTreeSet<CulturalOrigin> {
    let (african_american, hispanic): (&NameSet, &NameSet) = match gender {
        GenderCode::M => (&AFRICAN_AMERICAN_MALE, &HISPANIC_MALE),
        GenderCode::F => (&AFRICAN_AMERICAN_FEMALE, &HISPANIC_FEMALE),
        GenderCode::NB => return BTreeSet::new(),
    };

    let mut origins: BTreeSet<CulturalOrigin> =
        origins_for_language(language).iter().copied().collect();

    if african_american.contains(lower) {
        origins.insert(CulturalOrigin::AfricanAmerican);
    }
    if hispanic.contains(lower) {
        origins.insert(CulturalOrigin::Hispanic);
        origins.insert(CulturalOrigin::Caribbean);
    }
    if religions.contains(&ReligionTag::Jewish) {
        origins.insert(CulturalOrigin::Jewish);
    }
    if religions.contains(&ReligionTag::Muslim) && language == LanguageOrigin::Arabic {
        origins.insert(CulturalOrigin::Arabic);
    }
    origins
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_priority_and_default() {
        assert_eq!(language_origin("simran"), LanguageOrigin::Punjabi);
        assert_eq!(language_origin("siobhan"), LanguageOrigin::Irish);
        assert_eq!(language_origin("david"), LanguageOrigin::Hebrew);
        assert_eq!(language_origin("qwzx"), LanguageOrigin::English);
    }

    #[test]
    fn test_affix_rules() {
        assert_eq!(language_origin("mcallister"), LanguageOrigin::Scottish);
        assert_eq!(language_origin("brooklynn"), LanguageOrigin::Modern);
        assert_eq!(language_origin("antoinette"), LanguageOrigin::French);
        // Suffix alone is not a name
        assert_eq!(language_origin("son"), LanguageOrigin::English);
    }

    #[test]
    fn test_cultural_origins() {
        let none = BTreeSet::new();
        let origins = cultural_origins("carlos", GenderCode::M, LanguageOrigin::Spanish, &none);
        assert!(origins.contains(&CulturalOrigin::Hispanic));

        let origins = cultural_origins("liam", GenderCode::M, LanguageOrigin::Irish, &none);
        assert_eq!(origins.into_iter().collect::<Vec<_>>(), vec![CulturalOrigin::Irish]);

        assert!(cultural_origins("liam", GenderCode::NB, LanguageOrigin::Irish, &none).is_empty());
    }
}
