//! Rule-based scoring engine
//!
//! Scores one candidate against one answer set by summing independent
//! per-question contributions (see `weights`). Unanswered questions contribute
//! nothing. Scores are unbounded in both directions; higher is a better match.
//! Scoring is deterministic.

pub mod fallback;
pub mod weights;

use crate::record::{
    GenderCode, LanguageFamily, LanguageOrigin, Level, NameRecord, PopularityTier, ReligionTag,
    ReligiousSignificance,
};
use crate::retriever::gender_code;
use nameguess_common::answers::{
    CareerPath, GenderAnswer, GrewUpLocation, LanguagePreference, PoliticalValues,
    PopularityPreference, ReligiousTradition,
};
use nameguess_common::tags::LengthBucket;
use nameguess_common::AnswerSet;
use serde::Serialize;
use std::sync::Arc;
use weights::*;

/// Question a score contribution comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    PoliticalValues,
    LanguagePreference,
    ReligiousTradition,
    CulturalBackground,
    Length,
    Gender,
    Popularity,
    StartsWith,
    FavoriteLetter,
    CareerPath,
    FamilyTradition,
    DiversityAttitude,
    NameMeaning,
    GrewUpLocation,
    NamePerception,
    DesiredImpression,
    NameReactions,
    CommunityType,
}

/// A candidate with its rule-based score
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub record: Arc<NameRecord>,
    pub score: i64,
}

/// Era-relative popularity estimate, in percent
///
/// A coarse mapping of the lifetime count, not a per-decade lookup.
pub fn decade_popularity(total_count: u64) -> u8 {
    match total_count {
        t if t > 50_000 => 80,
        t if t > 10_000 => 60,
        t if t > 1_000 => 40,
        _ => 20,
    }
}

fn expected_decade_popularity(preference: PopularityPreference) -> u8 {
    match preference {
        PopularityPreference::VeryPopular => 80,
        PopularityPreference::Popular => 60,
        PopularityPreference::Moderate | PopularityPreference::Uncommon => 40,
        PopularityPreference::Rare => 20,
    }
}

fn preferred_tier(preference: PopularityPreference) -> PopularityTier {
    match preference {
        PopularityPreference::VeryPopular => PopularityTier::VeryPopular,
        PopularityPreference::Popular => PopularityTier::Popular,
        PopularityPreference::Moderate => PopularityTier::Moderate,
        PopularityPreference::Uncommon => PopularityTier::Uncommon,
        PopularityPreference::Rare => PopularityTier::Rare,
    }
}

/// Origins for a full, strong-partial and weak-partial political match
fn political_origins(
    values: PoliticalValues,
) -> (&'static [LanguageOrigin], &'static [LanguageOrigin], &'static [LanguageOrigin]) {
    use LanguageOrigin::*;
    match values {
        PoliticalValues::VeryConservative => (
            &[English, Hebrew, Latin, Germanic],
            &[Greek, Celtic, Scottish, Irish],
            &[French, Welsh, Scandinavian],
        ),
        PoliticalValues::Conservative => (
            &[English, Hebrew, Germanic],
            &[Latin, Greek, Irish, Scottish],
            &[Celtic, Welsh, French, Dutch],
        ),
        PoliticalValues::Moderate => (
            &[English, Latin, Greek, French],
            &[Irish, Italian, Germanic, Hebrew],
            &[Spanish, Scottish, Welsh, Celtic, Scandinavian],
        ),
        PoliticalValues::Liberal => (
            &[Celtic, Irish, Welsh, Scandinavian, French, Italian],
            &[Greek, Latin, Spanish, Hawaiian, Modern],
            &[Japanese, Sanskrit, Arabic, Swahili],
        ),
        PoliticalValues::VeryLiberal => (
            &[Modern, Hawaiian, NativeAmerican, Swahili, Sanskrit, Japanese, Yoruba, Igbo],
            &[Celtic, Welsh, Scandinavian, Irish],
            &[Arabic, Persian, Korean, Chinese, Vietnamese, Hindi],
        ),
        PoliticalValues::Libertarian => (
            &[English, Scottish, Germanic, Scandinavian],
            &[Irish, Celtic, Modern],
            &[Latin, Greek],
        ),
        PoliticalValues::Apolitical => (&[], &[], &[]),
    }
}

/// Origins that exactly satisfy a language preference (empty for the
/// English-only and multilingual answers, which are handled by rule)
fn preferred_origins(preference: LanguagePreference) -> &'static [LanguageOrigin] {
    use LanguageOrigin::*;
    match preference {
        LanguagePreference::Spanish => &[Spanish],
        LanguagePreference::French => &[French],
        LanguagePreference::Italian => &[Italian],
        LanguagePreference::German => &[Germanic, Dutch],
        LanguagePreference::Irish => &[Irish, Celtic],
        LanguagePreference::Hebrew => &[Hebrew],
        LanguagePreference::Arabic => &[Arabic],
        LanguagePreference::Hindi => &[Hindi, Sanskrit, Punjabi],
        LanguagePreference::Chinese => &[Chinese],
        LanguagePreference::Japanese => &[Japanese],
        LanguagePreference::Korean => &[Korean],
        LanguagePreference::Russian => &[Russian, Polish],
        LanguagePreference::EnglishOnly | LanguagePreference::Multilingual => &[],
    }
}

/// Related origins for preferences whose family is too broad to use
fn related_origins(preference: LanguagePreference) -> &'static [LanguageOrigin] {
    use LanguageOrigin::*;
    match preference {
        LanguagePreference::German => &[Scandinavian],
        LanguagePreference::Irish => &[Scottish, Welsh],
        _ => &[],
    }
}

fn religion_tag(tradition: ReligiousTradition) -> Option<ReligionTag> {
    match tradition {
        ReligiousTradition::Christian => Some(ReligionTag::Christian),
        ReligiousTradition::Jewish => Some(ReligionTag::Jewish),
        ReligiousTradition::Muslim => Some(ReligionTag::Muslim),
        ReligiousTradition::Hindu => Some(ReligionTag::Hindu),
        ReligiousTradition::Buddhist => Some(ReligionTag::Buddhist),
        ReligiousTradition::Sikh => Some(ReligionTag::Sikh),
        ReligiousTradition::Spiritual | ReligiousTradition::Secular => None,
    }
}

fn career_level(career: CareerPath) -> Level {
    match career {
        CareerPath::Business | CareerPath::Law | CareerPath::Medicine | CareerPath::Finance => {
            Level::High
        }
        CareerPath::Engineering
        | CareerPath::Technology
        | CareerPath::Science
        | CareerPath::Education
        | CareerPath::Arts
        | CareerPath::PublicService
        | CareerPath::Student => Level::Medium,
        CareerPath::Trades
        | CareerPath::Military
        | CareerPath::Hospitality
        | CareerPath::Homemaker => Level::Low,
    }
}

/// How far an origin sits from mainstream English naming, on the 1-3 slider scale
fn diversity_level(origin: LanguageOrigin) -> u8 {
    if origin.is_english_like() {
        return 1;
    }
    match origin.family() {
        LanguageFamily::Anglo
        | LanguageFamily::Romance
        | LanguageFamily::Semitic
        | LanguageFamily::OtherEuropeanOrNearEast => 2,
        LanguageFamily::SouthAsian
        | LanguageFamily::EastAsian
        | LanguageFamily::African
        | LanguageFamily::Other => 3,
    }
}

/// Full / near match on a 1-3 scale
fn graded(expected: u8, actual: u8, full: i64, near: i64) -> i64 {
    match expected.abs_diff(actual) {
        0 => full,
        1 => near,
        _ => 0,
    }
}

fn any_match<T: Ord>(selected: &[T], present: &std::collections::BTreeSet<T>) -> bool {
    selected.iter().any(|tag| present.contains(tag))
}

/// Rule-based scorer
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringEngine;

impl ScoringEngine {
    pub fn new() -> Self {
        Self
    }

    /// Total score of `record` against `answers`
    pub fn score(&self, record: &NameRecord, answers: &AnswerSet) -> i64 {
        self.explain(record, answers)
            .iter()
            .map(|(_, points)| points)
            .sum()
    }

    /// Non-zero contributions per question
    pub fn explain(&self, record: &NameRecord, answers: &AnswerSet) -> Vec<(Factor, i64)> {
        let attrs = &record.attributes;
        let contributions = [
            (Factor::PoliticalValues, self.political(record, answers)),
            (Factor::LanguagePreference, self.language(record, answers)),
            (Factor::ReligiousTradition, self.religion(record, answers)),
            (
                Factor::CulturalBackground,
                if any_match(&answers.cultural_background, &attrs.cultural_origins) {
                    CULTURE_MATCH
                } else {
                    0
                },
            ),
            (Factor::Length, self.length(record, answers)),
            (Factor::Gender, self.gender(record, answers)),
            (Factor::Popularity, self.popularity(record, answers)),
            (
                Factor::StartsWith,
                match answers.starts_with {
                    Some(start) if start == record.start_class() => START_CLASS_MATCH,
                    _ => 0,
                },
            ),
            (
                Factor::FavoriteLetter,
                match answers.favorite_letter {
                    Some(letter) if record.first_letter() == Some(letter.to_ascii_lowercase()) => {
                        FAVORITE_LETTER_MATCH
                    }
                    _ => 0,
                },
            ),
            (
                Factor::CareerPath,
                answers.career_path.map_or(0, |career| {
                    graded(
                        career_level(career).ordinal(),
                        attrs.socioeconomic_level.ordinal(),
                        CAREER_MATCH,
                        CAREER_NEAR,
                    )
                }),
            ),
            (
                Factor::FamilyTradition,
                answers.family_tradition.map_or(0, |slider| {
                    graded(
                        slider,
                        attrs.traditional_significance.ordinal(),
                        FAMILY_TRADITION_MATCH,
                        FAMILY_TRADITION_NEAR,
                    )
                }),
            ),
            (
                Factor::DiversityAttitude,
                answers.diversity_attitude.map_or(0, |slider| {
                    graded(
                        slider,
                        diversity_level(attrs.language_origin),
                        DIVERSITY_MATCH,
                        DIVERSITY_NEAR,
                    )
                }),
            ),
            (
                Factor::NameMeaning,
                if any_match(&answers.name_meaning_preference, &attrs.name_meaning) {
                    MEANING_MATCH
                } else {
                    0
                },
            ),
            (Factor::GrewUpLocation, self.locale(record, answers)),
            (
                Factor::NamePerception,
                if any_match(&answers.name_perception, &attrs.perceived_traits) {
                    PERCEPTION_MATCH
                } else {
                    0
                },
            ),
            (
                Factor::DesiredImpression,
                if any_match(&answers.desired_impression, &attrs.desired_traits) {
                    IMPRESSION_MATCH
                } else {
                    0
                },
            ),
            (
                Factor::NameReactions,
                if any_match(&answers.name_reactions, &attrs.typical_reactions) {
                    REACTION_MATCH
                } else {
                    0
                },
            ),
            (
                Factor::CommunityType,
                match answers.community_type {
                    Some(community) if attrs.geographic_preference.contains(&community) => {
                        COMMUNITY_MATCH
                    }
                    _ => 0,
                },
            ),
        ];

        contributions
            .into_iter()
            .filter(|(_, points)| *points != 0)
            .collect()
    }

    /// Score every candidate
    pub fn score_all(
        &self,
        candidates: &[Arc<NameRecord>],
        answers: &AnswerSet,
    ) -> Vec<ScoredCandidate> {
        candidates
            .iter()
            .map(|record| ScoredCandidate {
                score: self.score(record, answers),
                record: Arc::clone(record),
            })
            .collect()
    }

    /// Fixed gender- and length-conditioned names for an empty candidate pool
    pub fn fallback_candidates(&self, answers: &AnswerSet) -> Vec<Arc<NameRecord>> {
        fallback::fallback_records(answers.gender.and_then(gender_code), answers.length)
    }

    fn political(&self, record: &NameRecord, answers: &AnswerSet) -> i64 {
        let Some(values) = answers.political_values else {
            return 0;
        };
        let origin = record.attributes.language_origin;
        let (full, strong, weak) = political_origins(values);
        if full.contains(&origin) {
            POLITICAL_FULL
        } else if strong.contains(&origin) {
            POLITICAL_STRONG_PARTIAL
        } else if weak.contains(&origin) {
            POLITICAL_WEAK_PARTIAL
        } else {
            0
        }
    }

    fn language(&self, record: &NameRecord, answers: &AnswerSet) -> i64 {
        let Some(preference) = answers.language_preference else {
            return 0;
        };
        let origin = record.attributes.language_origin;
        match preference {
            LanguagePreference::EnglishOnly => {
                if origin.is_english_like() {
                    LANGUAGE_EXACT
                } else {
                    LANGUAGE_ENGLISH_ONLY_MISMATCH
                }
            }
            LanguagePreference::Multilingual => {
                if origin.is_english_like() {
                    0
                } else {
                    LANGUAGE_FAMILY
                }
            }
            _ => {
                let exact = preferred_origins(preference);
                if exact.contains(&origin) {
                    return LANGUAGE_EXACT;
                }
                if related_origins(preference).contains(&origin) {
                    return LANGUAGE_FAMILY;
                }
                match exact.first().map(LanguageOrigin::family) {
                    Some(family)
                        if family != LanguageFamily::Anglo && family == origin.family() =>
                    {
                        LANGUAGE_FAMILY
                    }
                    _ => 0,
                }
            }
        }
    }

    fn religion(&self, record: &NameRecord, answers: &AnswerSet) -> i64 {
        let Some(tradition) = answers.religious_tradition else {
            return 0;
        };
        let attrs = &record.attributes;
        match tradition {
            ReligiousTradition::Secular => match attrs.religious_significance {
                ReligiousSignificance::None | ReligiousSignificance::Low => RELIGION_MATCH,
                _ => 0,
            },
            ReligiousTradition::Spiritual => {
                if attrs.cross_religious
                    || attrs.religious_significance == ReligiousSignificance::Low
                {
                    RELIGION_CROSS_RELIGIOUS
                } else {
                    0
                }
            }
            _ => match religion_tag(tradition) {
                Some(tag) if attrs.religions.contains(&tag) => RELIGION_MATCH,
                _ if attrs.cross_religious => RELIGION_CROSS_RELIGIOUS,
                _ => 0,
            },
        }
    }

    fn length(&self, record: &NameRecord, answers: &AnswerSet) -> i64 {
        let Some(wanted) = answers.length else {
            return 0;
        };
        let len = record.attributes.name_length;
        let actual = LengthBucket::of_len(len);
        if actual == wanted {
            return LENGTH_MATCH;
        }
        if wanted.distance_from(len) == 1 {
            return LENGTH_NEAR;
        }
        if actual.ordinal().abs_diff(wanted.ordinal()) == 1 {
            LENGTH_ADJACENT_BUCKET
        } else {
            LENGTH_FAR_BUCKET
        }
    }

    fn gender(&self, record: &NameRecord, answers: &AnswerSet) -> i64 {
        match answers.gender {
            None => 0,
            Some(GenderAnswer::NonBinary | GenderAnswer::PreferNotToSay) => GENDER_MATCH,
            Some(answer) => match gender_code(answer) {
                Some(code) if code == record.gender => GENDER_MATCH,
                _ if record.gender == GenderCode::NB => GENDER_MATCH,
                _ => 0,
            },
        }
    }

    fn popularity(&self, record: &NameRecord, answers: &AnswerSet) -> i64 {
        let Some(preference) = answers.popularity else {
            return 0;
        };
        if record.attributes.popularity_tier == preferred_tier(preference) {
            POPULARITY_TIER_MATCH
        } else if answers.decade.is_some()
            && decade_popularity(record.total_count) == expected_decade_popularity(preference)
        {
            POPULARITY_DECADE_MATCH
        } else {
            0
        }
    }

    fn locale(&self, record: &NameRecord, answers: &AnswerSet) -> i64 {
        let Some(location) = answers.grew_up_location else {
            return 0;
        };
        let tradition = record.attributes.traditional_significance;
        match (location, tradition) {
            (GrewUpLocation::Rural | GrewUpLocation::SmallTown, Level::Low) => LOCALE_MATCH,
            (GrewUpLocation::Rural | GrewUpLocation::SmallTown, Level::Medium) => LOCALE_NEAR,
            (GrewUpLocation::Rural, Level::High) => LOCALE_RURAL_MISMATCH,
            (GrewUpLocation::SmallTown, Level::High) => LOCALE_SMALL_TOWN_MISMATCH,
            (GrewUpLocation::Urban, Level::High) => LOCALE_MATCH,
            (GrewUpLocation::Urban, Level::Medium) => LOCALE_NEAR,
            (GrewUpLocation::Urban, Level::Low) => LOCALE_URBAN_MISMATCH,
            (GrewUpLocation::Suburban, Level::Medium) => LOCALE_MATCH,
            (GrewUpLocation::Suburban, _) => LOCALE_NEAR,
            (GrewUpLocation::Multiple, _) => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrich::enrich;
    use nameguess_common::tags::{CommunityTag, CulturalOrigin, StartClass, TraitTag};
    use std::collections::BTreeMap;

    fn record(name: &str, gender: GenderCode, total: u64) -> NameRecord {
        NameRecord {
            name: name.to_string(),
            gender,
            total_count: total,
            year_counts: vec![(1985, total)],
            state_counts: BTreeMap::new(),
            attributes: enrich(name, gender, total),
        }
    }

    fn answers_with_length(length: LengthBucket) -> AnswerSet {
        AnswerSet {
            length: Some(length),
            ..AnswerSet::default()
        }
    }

    #[test]
    fn test_length_scoring_boundaries() {
        let engine = ScoringEngine::new();
        let sam = record("Sam", GenderCode::M, 500);

        assert_eq!(engine.score(&sam, &answers_with_length(LengthBucket::Short)), LENGTH_MATCH);
        assert_eq!(engine.score(&sam, &answers_with_length(LengthBucket::Long)), LENGTH_FAR_BUCKET);
        assert_eq!(
            engine.score(&sam, &answers_with_length(LengthBucket::Medium)),
            LENGTH_ADJACENT_BUCKET
        );

        let emily = record("Emily", GenderCode::F, 500);
        assert_eq!(engine.score(&emily, &answers_with_length(LengthBucket::Short)), LENGTH_NEAR);
    }

    #[test]
    fn test_empty_answers_score_zero() {
        let engine = ScoringEngine::new();
        let amy = record("Amy", GenderCode::F, 20_000);
        assert_eq!(engine.score(&amy, &AnswerSet::default()), 0);
        assert!(engine.explain(&amy, &AnswerSet::default()).is_empty());
    }

    #[test]
    fn test_gender_match() {
        let engine = ScoringEngine::new();
        let amy = record("Amy", GenderCode::F, 100);
        let mut answers = AnswerSet {
            gender: Some(GenderAnswer::Female),
            ..AnswerSet::default()
        };
        assert_eq!(engine.score(&amy, &answers), GENDER_MATCH);

        answers.gender = Some(GenderAnswer::Male);
        assert_eq!(engine.score(&amy, &answers), 0);

        answers.gender = Some(GenderAnswer::PreferNotToSay);
        assert_eq!(engine.score(&amy, &answers), GENDER_MATCH);
    }

    #[test]
    fn test_popularity_tier_then_decade_heuristic() {
        let engine = ScoringEngine::new();
        let popular = record("Jessica", GenderCode::F, 60_000);
        let mut answers = AnswerSet {
            popularity: Some(PopularityPreference::VeryPopular),
            ..AnswerSet::default()
        };
        assert_eq!(engine.score(&popular, &answers), POPULARITY_TIER_MATCH);

        // 20_000 is a very popular tier but a 60% decade estimate
        let mid = record("Jessica", GenderCode::F, 20_000);
        answers.popularity = Some(PopularityPreference::Popular);
        assert_eq!(engine.score(&mid, &answers), 0);
        answers.decade = Some(1980);
        assert_eq!(engine.score(&mid, &answers), POPULARITY_DECADE_MATCH);
    }

    #[test]
    fn test_religion_match_and_cross_religious_partial() {
        let engine = ScoringEngine::new();
        let answers = AnswerSet {
            religious_tradition: Some(ReligiousTradition::Muslim),
            ..AnswerSet::default()
        };
        assert_eq!(engine.score(&record("Fatima", GenderCode::F, 100), &answers), RELIGION_MATCH);
        // Christian + Jewish, not Muslim
        assert_eq!(
            engine.score(&record("Rebecca", GenderCode::F, 100), &answers),
            RELIGION_CROSS_RELIGIOUS
        );
        assert_eq!(engine.score(&record("Brayden", GenderCode::M, 100), &answers), 0);
    }

    #[test]
    fn test_english_only_penalises_foreign_origin() {
        let engine = ScoringEngine::new();
        let answers = AnswerSet {
            language_preference: Some(LanguagePreference::EnglishOnly),
            ..AnswerSet::default()
        };
        assert_eq!(
            engine.score(&record("Giovanni", GenderCode::M, 100), &answers),
            LANGUAGE_ENGLISH_ONLY_MISMATCH
        );
        assert_eq!(engine.score(&record("Wyatt", GenderCode::M, 100), &answers), LANGUAGE_EXACT);
    }

    #[test]
    fn test_language_family_partial() {
        let engine = ScoringEngine::new();
        let answers = AnswerSet {
            language_preference: Some(LanguagePreference::Spanish),
            ..AnswerSet::default()
        };
        assert_eq!(engine.score(&record("Diego", GenderCode::M, 100), &answers), LANGUAGE_EXACT);
        assert_eq!(
            engine.score(&record("Giovanni", GenderCode::M, 100), &answers),
            LANGUAGE_FAMILY
        );
    }

    #[test]
    fn test_locale_inverts_tradition() {
        let engine = ScoringEngine::new();
        let trendy = record("Brayden", GenderCode::M, 200);
        let classic = record("William", GenderCode::M, 200);

        let rural = AnswerSet {
            grew_up_location: Some(GrewUpLocation::Rural),
            ..AnswerSet::default()
        };
        assert_eq!(engine.score(&trendy, &rural), LOCALE_MATCH);
        assert_eq!(engine.score(&classic, &rural), LOCALE_RURAL_MISMATCH);

        let urban = AnswerSet {
            grew_up_location: Some(GrewUpLocation::Urban),
            ..AnswerSet::default()
        };
        assert_eq!(engine.score(&classic, &urban), LOCALE_MATCH);
        assert_eq!(engine.score(&trendy, &urban), LOCALE_URBAN_MISMATCH);
    }

    #[test]
    fn test_start_and_favorite_letter() {
        let engine = ScoringEngine::new();
        let answers = AnswerSet {
            starts_with: Some(StartClass::Vowel),
            favorite_letter: Some('a'),
            ..AnswerSet::default()
        };
        assert_eq!(
            engine.score(&record("Amy", GenderCode::F, 10), &answers),
            START_CLASS_MATCH + FAVORITE_LETTER_MATCH
        );
        assert_eq!(engine.score(&record("Beth", GenderCode::F, 10), &answers), 0);
    }

    #[test]
    fn test_deserialized_upper_case_letter_still_matches() {
        let engine = ScoringEngine::new();
        let answers: AnswerSet = serde_json::from_str(r#"{"favorite_letter": "A"}"#).unwrap();
        assert_eq!(
            engine.score(&record("Amy", GenderCode::F, 10), &answers),
            FAVORITE_LETTER_MATCH
        );
    }

    #[test]
    fn test_default_tags_match_default_answers() {
        let engine = ScoringEngine::new();
        let answers = AnswerSet {
            name_meaning_preference: vec![nameguess_common::tags::MeaningTag::Sound],
            name_reactions: vec![nameguess_common::tags::ReactionTag::Neutral],
            ..AnswerSet::default()
        };
        let plain = record("Qwzx", GenderCode::M, 500);
        assert_eq!(engine.score(&plain, &answers), MEANING_MATCH + REACTION_MATCH);
    }

    #[test]
    fn test_score_equals_sum_of_explanation() {
        let engine = ScoringEngine::new();
        let answers = AnswerSet {
            gender: Some(GenderAnswer::Female),
            length: Some(LengthBucket::Medium),
            career_path: Some(CareerPath::Law),
            family_tradition: Some(3),
            diversity_attitude: Some(1),
            ..AnswerSet::default()
        };
        let rec = record("Eleanor", GenderCode::F, 9_000);
        let explained: i64 = engine.explain(&rec, &answers).iter().map(|(_, p)| p).sum();
        assert_eq!(engine.score(&rec, &answers), explained);
    }

    /// Points `factor` contributes for `name` (a male record of 500 births)
    fn points(name: &str, answers: &AnswerSet, factor: Factor) -> i64 {
        ScoringEngine::new()
            .explain(&record(name, GenderCode::M, 500), answers)
            .into_iter()
            .filter(|(f, _)| *f == factor)
            .map(|(_, p)| p)
            .sum()
    }

    #[test]
    fn test_political_values_tiers() {
        let mut answers = AnswerSet {
            political_values: Some(PoliticalValues::VeryConservative),
            ..AnswerSet::default()
        };
        let factor = Factor::PoliticalValues;
        // English, Greek, French and Modern origins
        assert_eq!(points("Zzyzx", &answers, factor), POLITICAL_FULL);
        assert_eq!(points("Zorbios", &answers, factor), POLITICAL_STRONG_PARTIAL);
        assert_eq!(points("Zorbette", &answers, factor), POLITICAL_WEAK_PARTIAL);
        assert_eq!(points("Zorbquan", &answers, factor), 0);

        answers.political_values = Some(PoliticalValues::VeryLiberal);
        assert_eq!(points("Zorbquan", &answers, factor), POLITICAL_FULL);
        assert_eq!(points("Zzyzx", &answers, factor), 0);

        answers.political_values = Some(PoliticalValues::Apolitical);
        assert_eq!(points("Zzyzx", &answers, factor), 0);
    }

    #[test]
    fn test_multilingual_and_related_language_preferences() {
        let mut answers = AnswerSet {
            language_preference: Some(LanguagePreference::Multilingual),
            ..AnswerSet::default()
        };
        let factor = Factor::LanguagePreference;
        assert_eq!(points("Zorbette", &answers, factor), LANGUAGE_FAMILY);
        assert_eq!(points("Zorbpreet", &answers, factor), LANGUAGE_FAMILY);
        assert_eq!(points("Zzyzx", &answers, factor), 0);

        // Scandinavian is related to German without sharing an exact origin
        answers.language_preference = Some(LanguagePreference::German);
        assert_eq!(points("Zorbsson", &answers, factor), LANGUAGE_FAMILY);
        assert_eq!(points("Zorbette", &answers, factor), 0);
    }

    #[test]
    fn test_cultural_background_match() {
        let mut answers = AnswerSet {
            cultural_background: vec![CulturalOrigin::Slavic],
            ..AnswerSet::default()
        };
        let factor = Factor::CulturalBackground;
        assert_eq!(points("Zorbenko", &answers, factor), CULTURE_MATCH);

        answers.cultural_background = vec![CulturalOrigin::Hispanic, CulturalOrigin::Slavic];
        assert_eq!(points("Zorbenko", &answers, factor), CULTURE_MATCH);

        answers.cultural_background = vec![CulturalOrigin::Hispanic];
        assert_eq!(points("Zorbenko", &answers, factor), 0);
    }

    #[test]
    fn test_community_type_match() {
        let mut answers = AnswerSet {
            community_type: Some(CommunityTag::RuralCommunity),
            ..AnswerSet::default()
        };
        let factor = Factor::CommunityType;
        assert_eq!(points("Wyatt", &answers, factor), COMMUNITY_MATCH);
        assert_eq!(points("Zzyzx", &answers, factor), 0);

        answers.community_type = Some(CommunityTag::SuburbanCommunity);
        assert_eq!(points("Zzyzx", &answers, factor), COMMUNITY_MATCH);

        answers.community_type = Some(CommunityTag::UrbanCommunity);
        assert_eq!(points("Wyatt", &answers, factor), 0);
    }

    #[test]
    fn test_perceived_traits_and_desired_impression() {
        let mut answers = AnswerSet {
            name_perception: vec![TraitTag::Strength],
            desired_impression: vec![TraitTag::Leadership],
            ..AnswerSet::default()
        };
        assert_eq!(points("Wyatt", &answers, Factor::NamePerception), PERCEPTION_MATCH);
        assert_eq!(points("Zzyzx", &answers, Factor::NamePerception), 0);
        assert_eq!(points("Winston", &answers, Factor::DesiredImpression), IMPRESSION_MATCH);
        assert_eq!(points("Zzyzx", &answers, Factor::DesiredImpression), 0);

        // Default tags
        answers.name_perception = vec![TraitTag::Friendly];
        answers.desired_impression = vec![TraitTag::Warmth];
        assert_eq!(points("Zzyzx", &answers, Factor::NamePerception), PERCEPTION_MATCH);
        assert_eq!(points("Zzyzx", &answers, Factor::DesiredImpression), IMPRESSION_MATCH);
    }

    #[test]
    fn test_career_path_grading() {
        let mut answers = AnswerSet {
            career_path: Some(CareerPath::Business),
            ..AnswerSet::default()
        };
        let factor = Factor::CareerPath;
        // William is a high socioeconomic name, Zzyzx a medium one
        assert_eq!(points("William", &answers, factor), CAREER_MATCH);
        assert_eq!(points("Zzyzx", &answers, factor), CAREER_NEAR);

        answers.career_path = Some(CareerPath::Education);
        assert_eq!(points("William", &answers, factor), CAREER_NEAR);
        assert_eq!(points("Zzyzx", &answers, factor), CAREER_MATCH);

        answers.career_path = Some(CareerPath::Trades);
        assert_eq!(points("William", &answers, factor), 0);
    }

    #[test]
    fn test_family_tradition_grading() {
        let mut answers = AnswerSet {
            family_tradition: Some(3),
            ..AnswerSet::default()
        };
        let factor = Factor::FamilyTradition;
        assert_eq!(points("William", &answers, factor), FAMILY_TRADITION_MATCH);
        assert_eq!(points("Zzyzx", &answers, factor), FAMILY_TRADITION_NEAR);
        assert_eq!(points("Brayden", &answers, factor), 0);

        answers.family_tradition = Some(1);
        assert_eq!(points("Brayden", &answers, factor), FAMILY_TRADITION_MATCH);
        assert_eq!(points("William", &answers, factor), 0);
    }

    #[test]
    fn test_diversity_attitude_grading() {
        let mut answers = AnswerSet {
            diversity_attitude: Some(1),
            ..AnswerSet::default()
        };
        let factor = Factor::DiversityAttitude;
        assert_eq!(points("Zzyzx", &answers, factor), DIVERSITY_MATCH);
        assert_eq!(points("Zorbette", &answers, factor), DIVERSITY_NEAR);
        assert_eq!(points("Zorbpreet", &answers, factor), 0);

        answers.diversity_attitude = Some(3);
        assert_eq!(points("Zorbpreet", &answers, factor), DIVERSITY_MATCH);
        assert_eq!(points("Zorbette", &answers, factor), DIVERSITY_NEAR);
        assert_eq!(points("Zzyzx", &answers, factor), 0);
    }
}
