//! Name record enricher
//!
//! Derives the categorical attributes of a name from the name itself, its
//! gender code and its lifetime count. Matching is case-insensitive against
//! fixed lookup tables (see `lists`), built once on first use.
//!
//! # Contract
//! - Pure and deterministic: same input, same [`NameAttributes`].
//! - Never fails. A gender other than `M`/`F` only empties the religion and
//!   cultural-origin sets; every other derivation still runs.
//! - The five tag sets (meaning, reactions, perceived traits, desired traits,
//!   geographic preference) are never empty. A name on no list gets the
//!   single default tag, so match-scoring always has something to compare.

mod lists;
mod origin;
mod perception;
mod religion;

use crate::record::{GenderCode, NameAttributes, PopularityTier};
use nameguess_common::tags::is_vowel;

/// Derive all attributes for one aggregated (name, gender) record
///
/// `total_count` is the record's lifetime count across every parsed source, not
/// a single year's count.
pub fn enrich(name: &str, gender: GenderCode, total_count: u64) -> NameAttributes {
    let lower = name.trim().to_lowercase();
    let letters: Vec<char> = lower.chars().filter(|c| c.is_alphabetic()).collect();

    let popularity_tier = PopularityTier::from_count(total_count);
    let religions = religion::religions(&lower, gender);
    let religious_significance = religion::significance(&lower, &religions);
    let language_origin = origin::language_origin(&lower);
    let cultural_origins = origin::cultural_origins(&lower, gender, language_origin, &religions);

    NameAttributes {
        cross_religious: religions.len() >= 2,
        cultural_origins,
        popularity_tier,
        name_length: letters.len(),
        starts_with_vowel: letters.first().is_some_and(|c| is_vowel(*c)),
        ends_with_vowel: letters.last().is_some_and(|c| is_vowel(*c)),
        religious_significance,
        language_origin,
        traditional_significance: perception::traditional_significance(&lower, total_count),
        socioeconomic_level: perception::socioeconomic_level(&lower),
        perceived_traits: perception::perceived_traits(&lower, popularity_tier),
        desired_traits: perception::desired_traits(&lower),
        geographic_preference: perception::geographic_preference(&lower, religious_significance),
        name_meaning: perception::name_meaning(&lower),
        typical_reactions: perception::typical_reactions(&lower, popularity_tier, language_origin),
        religions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{LanguageOrigin, Level, ReligionTag, ReligiousSignificance};
    use nameguess_common::tags::{CulturalOrigin, MeaningTag};

    #[test]
    fn test_enrich_is_case_insensitive() {
        assert_eq!(
            enrich("Elizabeth", GenderCode::F, 40_000),
            enrich("ELIZABETH", GenderCode::F, 40_000)
        );
    }

    #[test]
    fn test_enrich_common_female_name() {
        let attrs = enrich("Amy", GenderCode::F, 12_000);
        assert_eq!(attrs.name_length, 3);
        assert!(attrs.starts_with_vowel);
        assert!(!attrs.ends_with_vowel);
        assert_eq!(attrs.popularity_tier, PopularityTier::VeryPopular);
        assert_eq!(attrs.traditional_significance, Level::High);
        assert!(attrs.name_meaning.contains(&MeaningTag::Love));
    }

    #[test]
    fn test_enrich_religious_name() {
        let attrs = enrich("Miriam", GenderCode::F, 800);
        assert!(attrs.religions.contains(&ReligionTag::Jewish));
        assert!(attrs.cross_religious);
        assert_eq!(attrs.religious_significance, ReligiousSignificance::High);
        assert_eq!(attrs.language_origin, LanguageOrigin::Hebrew);
        assert!(attrs.cultural_origins.contains(&CulturalOrigin::Jewish));
    }

    #[test]
    fn test_unknown_gender_keeps_other_derivations() {
        let attrs = enrich("Miriam", GenderCode::NB, 800);
        assert!(attrs.religions.is_empty());
        assert!(attrs.cultural_origins.is_empty());
        assert!(!attrs.cross_religious);
        assert_eq!(attrs.religious_significance, ReligiousSignificance::None);
        assert_eq!(attrs.language_origin, LanguageOrigin::Hebrew);
        assert!(!attrs.typical_reactions.is_empty());
    }

    #[test]
    fn test_tag_sets_never_empty() {
        for name in ["Zzyzx", "Amy", "Jolene", "Xochitl", "Q"] {
            for gender in GenderCode::ALL {
                let attrs = enrich(name, *gender, 42);
                assert!(!attrs.name_meaning.is_empty(), "{}", name);
                assert!(!attrs.typical_reactions.is_empty(), "{}", name);
                assert!(!attrs.perceived_traits.is_empty(), "{}", name);
                assert!(!attrs.desired_traits.is_empty(), "{}", name);
                assert!(!attrs.geographic_preference.is_empty(), "{}", name);
            }
        }
    }
}
