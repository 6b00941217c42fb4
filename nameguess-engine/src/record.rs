//! Name record data model
//!
//! A [`NameRecord`] is one (name, gender) pair after aggregation across all
//! sources, together with the attributes the enricher derived for it.

use nameguess_common::tag_enum;
use nameguess_common::tags::{
    CommunityTag, CulturalOrigin, LengthBucket, MeaningTag, ReactionTag, StartClass, TraitTag,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

tag_enum! {
    /// Gender code of a record
    ///
    /// Source files only ever carry `M` and `F`. `NB` is reserved for composite
    /// records built by the non-binary candidate computation.
    pub enum GenderCode {
        #[serde(alias = "m")]
        M => "M",
        #[serde(alias = "f")]
        F => "F",
        #[serde(alias = "nb")]
        NB => "NB",
    }
}

impl GenderCode {
    /// Parse a source-file gender field; only `M` and `F` are accepted
    pub fn from_source_field(field: &str) -> Option<Self> {
        match field.trim() {
            "M" | "m" => Some(GenderCode::M),
            "F" | "f" => Some(GenderCode::F),
            _ => None,
        }
    }
}

tag_enum! {
    /// Enricher popularity tier over the record's lifetime total count
    ///
    /// Thresholds: >10000 very popular, >5000 popular, >1000 moderate,
    /// >100 uncommon, else rare. Distinct from [`PopularityBucket`].
    pub enum PopularityTier {
        VeryPopular => "very_popular",
        Popular => "popular",
        Moderate => "moderate",
        Uncommon => "uncommon",
        Rare => "rare",
    }
}

impl PopularityTier {
    pub fn from_count(total: u64) -> Self {
        match total {
            t if t > 10_000 => PopularityTier::VeryPopular,
            t if t > 5_000 => PopularityTier::Popular,
            t if t > 1_000 => PopularityTier::Moderate,
            t if t > 100 => PopularityTier::Uncommon,
            _ => PopularityTier::Rare,
        }
    }
}

tag_enum! {
    /// Index partition by popularity (>800 very popular, >500 popular, else uncommon)
    ///
    /// Used only to partition the lookup indexes. Never used for scoring.
    pub enum PopularityBucket {
        VeryPopular => "very_popular",
        Popular => "popular",
        Uncommon => "uncommon",
    }
}

impl PopularityBucket {
    pub fn from_count(count: u64) -> Self {
        match count {
            c if c > 800 => PopularityBucket::VeryPopular,
            c if c > 500 => PopularityBucket::Popular,
            _ => PopularityBucket::Uncommon,
        }
    }
}

tag_enum! {
    /// Religion a name is associated with
    pub enum ReligionTag {
        Christian => "christian",
        Jewish => "jewish",
        Muslim => "muslim",
        Hindu => "hindu",
        Buddhist => "buddhist",
        Sikh => "sikh",
    }
}

tag_enum! {
    /// How strongly a name carries religious meaning
    pub enum ReligiousSignificance {
        None => "none",
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

tag_enum! {
    /// Three-step level used for traditional significance and socioeconomic level
    pub enum Level {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

impl Level {
    pub fn ordinal(&self) -> u8 {
        match self {
            Level::Low => 1,
            Level::Medium => 2,
            Level::High => 3,
        }
    }
}

tag_enum! {
    /// Language or culture a name comes from
    pub enum LanguageOrigin {
        English => "english",
        Hebrew => "hebrew",
        Latin => "latin",
        Greek => "greek",
        Germanic => "germanic",
        Celtic => "celtic",
        Irish => "irish",
        Scottish => "scottish",
        Welsh => "welsh",
        French => "french",
        Italian => "italian",
        Spanish => "spanish",
        Portuguese => "portuguese",
        Dutch => "dutch",
        Scandinavian => "scandinavian",
        Russian => "russian",
        Polish => "polish",
        Arabic => "arabic",
        Persian => "persian",
        Turkish => "turkish",
        Sanskrit => "sanskrit",
        Hindi => "hindi",
        Punjabi => "punjabi",
        Chinese => "chinese",
        Japanese => "japanese",
        Korean => "korean",
        Vietnamese => "vietnamese",
        Swahili => "swahili",
        Yoruba => "yoruba",
        Igbo => "igbo",
        Hawaiian => "hawaiian",
        NativeAmerican => "native_american",
        Modern => "modern",
    }
}

/// Broad family a language origin belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanguageFamily {
    /// English and the Celtic/Germanic names long naturalised in English
    Anglo,
    /// Romance languages and Latin
    Romance,
    /// Hebrew, Arabic and the other classical Near-Eastern sources
    Semitic,
    /// Greek, Slavic, Persian, Turkish
    OtherEuropeanOrNearEast,
    /// Sanskrit, Hindi, Punjabi
    SouthAsian,
    /// Chinese, Japanese, Korean, Vietnamese
    EastAsian,
    /// Swahili, Yoruba, Igbo
    African,
    /// Hawaiian, Native American, modern coinages
    Other,
}

impl LanguageOrigin {
    pub fn family(&self) -> LanguageFamily {
        use LanguageOrigin::*;
        match self {
            English | Germanic | Celtic | Irish | Scottish | Welsh | Dutch | Scandinavian => {
                LanguageFamily::Anglo
            }
            Latin | French | Italian | Spanish | Portuguese => LanguageFamily::Romance,
            Hebrew | Arabic => LanguageFamily::Semitic,
            Greek | Russian | Polish | Persian | Turkish => LanguageFamily::OtherEuropeanOrNearEast,
            Sanskrit | Hindi | Punjabi => LanguageFamily::SouthAsian,
            Chinese | Japanese | Korean | Vietnamese => LanguageFamily::EastAsian,
            Swahili | Yoruba | Igbo => LanguageFamily::African,
            Hawaiian | NativeAmerican | Modern => LanguageFamily::Other,
        }
    }

    /// True for origins an English-only household would consider "English"
    pub fn is_english_like(&self) -> bool {
        matches!(
            self,
            LanguageOrigin::English | LanguageOrigin::Germanic | LanguageOrigin::Celtic
        )
    }
}

/// Attributes derived once per record by the enricher; immutable afterwards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameAttributes {
    pub religions: BTreeSet<ReligionTag>,
    pub cultural_origins: BTreeSet<CulturalOrigin>,
    pub popularity_tier: PopularityTier,
    pub name_length: usize,
    pub starts_with_vowel: bool,
    pub ends_with_vowel: bool,
    pub religious_significance: ReligiousSignificance,
    pub cross_religious: bool,
    pub language_origin: LanguageOrigin,
    pub traditional_significance: Level,
    pub socioeconomic_level: Level,
    /// Never empty; defaults to `friendly`
    pub perceived_traits: BTreeSet<TraitTag>,
    /// Never empty; defaults to `warmth`
    pub desired_traits: BTreeSet<TraitTag>,
    /// Never empty; defaults to `suburban_community`
    pub geographic_preference: BTreeSet<CommunityTag>,
    /// Never empty; defaults to `sound`
    pub name_meaning: BTreeSet<MeaningTag>,
    /// Never empty; defaults to `neutral`
    pub typical_reactions: BTreeSet<ReactionTag>,
}

/// One unique (name, gender) pair after aggregation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameRecord {
    /// Original casing as first seen in the sources
    pub name: String,
    pub gender: GenderCode,
    pub total_count: u64,
    /// Per-year counts in the order files were parsed
    pub year_counts: Vec<(u16, u64)>,
    /// Per-state counts; empty unless state files were loaded
    pub state_counts: BTreeMap<String, u64>,
    pub attributes: NameAttributes,
}

impl NameRecord {
    /// Aggregation key: lower-cased name + `_` + gender code
    pub fn key_for(name: &str, gender: GenderCode) -> String {
        format!("{}_{}", name.to_lowercase(), gender.as_str())
    }

    pub fn key(&self) -> String {
        Self::key_for(&self.name, self.gender)
    }

    pub fn length_bucket(&self) -> LengthBucket {
        LengthBucket::of_len(self.attributes.name_length)
    }

    pub fn start_class(&self) -> StartClass {
        if self.attributes.starts_with_vowel {
            StartClass::Vowel
        } else {
            StartClass::Consonant
        }
    }

    /// Lower-case first letter, if the name has one
    pub fn first_letter(&self) -> Option<char> {
        self.name
            .chars()
            .find(|c| c.is_alphabetic())
            .map(|c| c.to_ascii_lowercase())
    }

    pub fn state_count(&self, state: &str) -> u64 {
        self.state_counts.get(state).copied().unwrap_or(0)
    }

    /// First and last year with a recorded count
    pub fn year_range(&self) -> Option<(u16, u16)> {
        let min = self.year_counts.iter().map(|(year, _)| *year).min()?;
        let max = self.year_counts.iter().map(|(year, _)| *year).max()?;
        Some((min, max))
    }

    /// Births recorded in the ten years starting at `decade`
    pub fn count_in_decade(&self, decade: u16) -> u64 {
        self.year_counts
            .iter()
            .filter(|(year, _)| year / 10 == decade / 10)
            .map(|(_, count)| *count)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enricher_tier_and_index_bucket_are_different_scales() {
        // 900 births is "uncommon" for the enricher but "very popular" for the index
        assert_eq!(PopularityTier::from_count(900), PopularityTier::Uncommon);
        assert_eq!(PopularityBucket::from_count(900), PopularityBucket::VeryPopular);

        assert_eq!(PopularityTier::from_count(10_001), PopularityTier::VeryPopular);
        assert_eq!(PopularityTier::from_count(10_000), PopularityTier::Popular);
        assert_eq!(PopularityTier::from_count(100), PopularityTier::Rare);
        assert_eq!(PopularityBucket::from_count(501), PopularityBucket::Popular);
        assert_eq!(PopularityBucket::from_count(500), PopularityBucket::Uncommon);
    }

    #[test]
    fn test_source_gender_field_rejects_non_binary() {
        assert_eq!(GenderCode::from_source_field("M"), Some(GenderCode::M));
        assert_eq!(GenderCode::from_source_field("F"), Some(GenderCode::F));
        assert_eq!(GenderCode::from_source_field("NB"), None);
        assert_eq!(GenderCode::from_source_field("X"), None);
    }

    #[test]
    fn test_language_family() {
        assert_eq!(LanguageOrigin::Irish.family(), LanguageFamily::Anglo);
        assert_eq!(LanguageOrigin::Spanish.family(), LanguageFamily::Romance);
        assert!(LanguageOrigin::Celtic.is_english_like());
        assert!(!LanguageOrigin::French.is_english_like());
    }

    #[test]
    fn test_count_in_decade() {
        let record = NameRecord {
            name: "Amy".to_string(),
            gender: GenderCode::F,
            total_count: 160,
            year_counts: vec![(1979, 10), (1980, 20), (1987, 30), (1989, 40), (1990, 60)],
            state_counts: BTreeMap::new(),
            attributes: crate::enrich::enrich("Amy", GenderCode::F, 160),
        };
        assert_eq!(record.count_in_decade(1980), 90);
        // Any year inside the decade selects the same decade
        assert_eq!(record.count_in_decade(1987), 90);
        assert_eq!(record.count_in_decade(1970), 10);
        assert_eq!(record.count_in_decade(2000), 0);
        assert_eq!(record.count_in_decade(u16::MAX), 0);
        assert_eq!(record.count_in_decade(65530), 0);
    }

    #[test]
    fn test_key_is_case_insensitive() {
        assert_eq!(NameRecord::key_for("Amy", GenderCode::F), "amy_F");
        assert_eq!(NameRecord::key_for("AMY", GenderCode::F), "amy_F");
    }
}
