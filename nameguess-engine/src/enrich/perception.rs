//! Perception tags: traits, reactions, meaning, community, and the two
//! classic-vs-modern tiers

use super::lists::*;
use crate::record::{LanguageFamily, LanguageOrigin, Level, PopularityTier, ReligiousSignificance};
use nameguess_common::tags::{CommunityTag, MeaningTag, ReactionTag, TraitTag};
use std::collections::BTreeSet;

/// Lifetime count above which a name counts as historically established
const ESTABLISHED_COUNT: u64 = 5_000;

static PERCEIVED_LISTS: [(TraitTag, &NameSet); 13] = [
    (TraitTag::Strength, &PERCEIVED_STRONG),
    (TraitTag::Elegance, &PERCEIVED_ELEGANT),
    (TraitTag::Creativity, &PERCEIVED_CREATIVE),
    (TraitTag::Intelligence, &PERCEIVED_INTELLIGENT),
    (TraitTag::Playfulness, &PERCEIVED_PLAYFUL),
    (TraitTag::Sophistication, &PERCEIVED_SOPHISTICATED),
    (TraitTag::Adventure, &PERCEIVED_ADVENTUROUS),
    (TraitTag::Reliability, &PERCEIVED_RELIABLE),
    (TraitTag::Kindness, &PERCEIVED_KIND),
    (TraitTag::Charm, &PERCEIVED_CHARMING),
    (TraitTag::Confidence, &PERCEIVED_CONFIDENT),
    (TraitTag::Uniqueness, &PERCEIVED_UNIQUE),
    (TraitTag::Leadership, &DESIRED_LEADERSHIP),
];

static DESIRED_LISTS: [(TraitTag, &NameSet); 9] = [
    (TraitTag::Professionalism, &DESIRED_PROFESSIONAL),
    (TraitTag::Strength, &DESIRED_STRENGTH),
    (TraitTag::Creativity, &DESIRED_CREATIVITY),
    (TraitTag::Wisdom, &DESIRED_WISDOM),
    (TraitTag::Uniqueness, &DESIRED_UNIQUENESS),
    (TraitTag::Tradition, &DESIRED_TRADITION),
    (TraitTag::Kindness, &DESIRED_KINDNESS),
    (TraitTag::Leadership, &DESIRED_LEADERSHIP),
    (TraitTag::Elegance, &DESIRED_ELEGANCE),
];

static REACTION_LISTS: [(ReactionTag, &NameSet); 7] = [
    (ReactionTag::Compliments, &REACTION_COMPLIMENTS),
    (ReactionTag::Mispronounced, &REACTION_MISPRONOUNCED),
    (ReactionTag::Misspelled, &REACTION_MISSPELLED),
    (ReactionTag::Nicknames, &REACTION_NICKNAMES),
    (ReactionTag::FamousAssociation, &REACTION_FAMOUS),
    (ReactionTag::SongReference, &REACTION_SONG),
    (ReactionTag::OldFashioned, &REACTION_OLD_FASHIONED),
];

static MEANING_LISTS: [(MeaningTag, &NameSet); 15] = [
    (MeaningTag::Nature, &MEANING_NATURE),
    (MeaningTag::Virtue, &VIRTUE_NAMES),
    (MeaningTag::Strength, &MEANING_STRENGTH),
    (MeaningTag::Faith, &MEANING_FAITH),
    (MeaningTag::Light, &MEANING_LIGHT),
    (MeaningTag::Love, &MEANING_LOVE),
    (MeaningTag::Royalty, &MEANING_ROYALTY),
    (MeaningTag::Wisdom, &MEANING_WISDOM),
    (MeaningTag::Joy, &MEANING_JOY),
    (MeaningTag::Peace, &MEANING_PEACE),
    (MeaningTag::Beauty, &MEANING_BEAUTY),
    (MeaningTag::Family, &MEANING_FAMILY),
    (MeaningTag::Protection, &MEANING_PROTECTION),
    (MeaningTag::Precious, &MEANING_PRECIOUS),
    (MeaningTag::Celestial, &MEANING_CELESTIAL),
];

static COMMUNITY_LISTS: [(CommunityTag, &NameSet); 7] = [
    (CommunityTag::RuralCommunity, &COMMUNITY_RURAL),
    (CommunityTag::UrbanCommunity, &COMMUNITY_URBAN),
    (CommunityTag::SmallTownCommunity, &COMMUNITY_SMALL_TOWN),
    (CommunityTag::CoastalCommunity, &COMMUNITY_COASTAL),
    (CommunityTag::AcademicCommunity, &COMMUNITY_ACADEMIC),
    (CommunityTag::ArtisticCommunity, &COMMUNITY_ARTISTIC),
    (CommunityTag::MilitaryCommunity, &COMMUNITY_MILITARY),
];

/// Every tag whose list contains `lower`, or `default` when none does
fn tags_or<T: Copy + Ord>(lower: &str, lists: &[(T, &NameSet)], default: T) -> BTreeSet<T> {
    let mut tags: BTreeSet<T> = lists
        .iter()
        .filter(|(_, set)| set.contains(lower))
        .map(|(tag, _)| *tag)
        .collect();
    if tags.is_empty() {
        tags.insert(default);
    }
    tags
}

fn is_biblical(lower: &str) -> bool {
    OLD_TESTAMENT_MALE.contains(lower)
        || OLD_TESTAMENT_FEMALE.contains(lower)
        || CHRISTIAN_MALE.contains(lower)
        || CHRISTIAN_FEMALE.contains(lower)
}

pub(crate) fn traditional_significance(lower: &str, total_count: u64) -> Level {
    if HISTORICAL_CLASSIC.contains(lower) || is_biblical(lower) || total_count > ESTABLISHED_COUNT
    {
        Level::High
    } else if MODERN_TRENDY.contains(lower) {
        Level::Low
    } else {
        Level::Medium
    }
}

pub(crate) fn socioeconomic_level(lower: &str) -> Level {
    if ELITE_NAMES.contains(lower) {
        Level::High
    } else if ASPIRATIONAL_NAMES.contains(lower) {
        Level::Low
    } else {
        Level::Medium
    }
}

pub(crate) fn perceived_traits(lower: &str, tier: PopularityTier) -> BTreeSet<TraitTag> {
    let mut traits = tags_or(lower, &PERCEIVED_LISTS, TraitTag::Friendly);
    if tier == PopularityTier::Rare {
        traits.insert(TraitTag::Uniqueness);
    }
    traits
}

pub(crate) fn desired_traits(lower: &str) -> BTreeSet<TraitTag> {
    let mut traits = tags_or(lower, &DESIRED_LISTS, TraitTag::Warmth);
    if HISTORICAL_CLASSIC.contains(lower) {
        traits.insert(TraitTag::Tradition);
    }
    traits
}

pub(crate) fn typical_reactions(
    lower: &str,
    tier: PopularityTier,
    language: LanguageOrigin,
) -> BTreeSet<ReactionTag> {
    let mut reactions: BTreeSet<ReactionTag> = REACTION_LISTS
        .iter()
        .filter(|(_, set)| set.contains(lower))
        .map(|(tag, _)| *tag)
        .collect();

    match tier {
        PopularityTier::VeryPopular => {
            reactions.insert(ReactionTag::CommonName);
        }
        PopularityTier::Rare => {
            reactions.insert(ReactionTag::Unusual);
        }
        _ => {}
    }

    // Irish/Gaelic spellings that rarely read the way they sound
    if ["bh", "mh", "dh", "aoi"].iter().any(|s| lower.contains(s)) {
        reactions.insert(ReactionTag::Mispronounced);
    }

    if !matches!(language.family(), LanguageFamily::Anglo | LanguageFamily::Other) {
        reactions.insert(ReactionTag::AskOrigin);
    }

    if reactions.is_empty() {
        reactions.insert(ReactionTag::Neutral);
    }
    reactions
}

pub(crate) fn name_meaning(lower: &str) -> BTreeSet<MeaningTag> {
    let mut meanings = tags_or(lower, &MEANING_LISTS, MeaningTag::Sound);
    // Theophoric endings ("God is ...")
    if meanings.contains(&MeaningTag::Sound)
        && lower.len() > 4
        && (lower.ends_with("iel") || lower.ends_with("iah"))
    {
        meanings.remove(&MeaningTag::Sound);
        meanings.insert(MeaningTag::Faith);
    }
    meanings
}

pub(crate) fn geographic_preference(
    lower: &str,
    significance: ReligiousSignificance,
) -> BTreeSet<CommunityTag> {
    let mut communities: BTreeSet<CommunityTag> = COMMUNITY_LISTS
        .iter()
        .filter(|(_, set)| set.contains(lower))
        .map(|(tag, _)| *tag)
        .collect();
    if significance == ReligiousSignificance::High {
        communities.insert(CommunityTag::ReligiousCommunity);
    }
    if communities.is_empty() {
        communities.insert(CommunityTag::SuburbanCommunity);
    }
    communities
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traditional_significance() {
        assert_eq!(traditional_significance("william", 0), Level::High);
        assert_eq!(traditional_significance("brayden", 100), Level::Low);
        // Count fallback beats the trendy list
        assert_eq!(traditional_significance("brayden", 6_000), Level::High);
        assert_eq!(traditional_significance("qwzx", 10), Level::Medium);
    }

    #[test]
    fn test_defaults_are_single_tags() {
        let lower = "qwzx";
        assert_eq!(
            perceived_traits(lower, PopularityTier::Moderate),
            BTreeSet::from([TraitTag::Friendly])
        );
        assert_eq!(desired_traits(lower), BTreeSet::from([TraitTag::Warmth]));
        assert_eq!(name_meaning(lower), BTreeSet::from([MeaningTag::Sound]));
        assert_eq!(
            typical_reactions(lower, PopularityTier::Moderate, LanguageOrigin::English),
            BTreeSet::from([ReactionTag::Neutral])
        );
        assert_eq!(
            geographic_preference(lower, ReligiousSignificance::None),
            BTreeSet::from([CommunityTag::SuburbanCommunity])
        );
    }

    #[test]
    fn test_reaction_heuristics() {
        let reactions = typical_reactions("yusuf", PopularityTier::Rare, LanguageOrigin::Arabic);
        assert!(reactions.contains(&ReactionTag::Unusual));
        assert!(reactions.contains(&ReactionTag::AskOrigin));
        assert!(!reactions.contains(&ReactionTag::Neutral));
    }

    #[test]
    fn test_theophoric_suffix_means_faith() {
        assert!(name_meaning("azariah").contains(&MeaningTag::Faith));
    }
}
