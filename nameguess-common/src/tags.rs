//! Shared tag vocabularies
//!
//! These are the categorical values that appear both as quiz answers and as
//! derived attributes on name records, so matching is a plain equality test.

/// Declares a closed string enum with its canonical wire names
///
/// Extra `#[serde(alias = ..)]` attributes may be attached per variant.
#[macro_export]
macro_rules! tag_enum {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $( $(#[$inner:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        pub enum $name {
            $( $(#[$inner])* #[serde(rename = $wire)] $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order
            pub const ALL: &'static [$name] = &[ $( $name::$variant ),+ ];

            /// Canonical wire name
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire ),+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

tag_enum! {
    /// Name length bucket: `short` ≤4 letters, `medium` 5–6, `long` 7–9, `extra_long` ≥10
    pub enum LengthBucket {
        Short => "short",
        Medium => "medium",
        Long => "long",
        #[serde(alias = "very_long")]
        ExtraLong => "extra_long",
    }
}

impl LengthBucket {
    /// Bucket of a name with `len` letters
    pub fn of_len(len: usize) -> Self {
        match len {
            0..=4 => LengthBucket::Short,
            5..=6 => LengthBucket::Medium,
            7..=9 => LengthBucket::Long,
            _ => LengthBucket::ExtraLong,
        }
    }

    /// Inclusive letter range; `ExtraLong` has no upper bound
    pub fn bounds(&self) -> (usize, Option<usize>) {
        match self {
            LengthBucket::Short => (1, Some(4)),
            LengthBucket::Medium => (5, Some(6)),
            LengthBucket::Long => (7, Some(9)),
            LengthBucket::ExtraLong => (10, None),
        }
    }

    /// Position on the short..extra_long scale
    pub fn ordinal(&self) -> usize {
        match self {
            LengthBucket::Short => 0,
            LengthBucket::Medium => 1,
            LengthBucket::Long => 2,
            LengthBucket::ExtraLong => 3,
        }
    }

    /// Letters between `len` and the nearest edge of this bucket (0 when inside)
    pub fn distance_from(&self, len: usize) -> usize {
        let (lo, hi) = self.bounds();
        if len < lo {
            lo - len
        } else {
            match hi {
                Some(hi) if len > hi => len - hi,
                _ => 0,
            }
        }
    }
}

tag_enum! {
    /// Whether a name starts with a vowel or a consonant
    pub enum StartClass {
        Vowel => "vowel",
        Consonant => "consonant",
    }
}

impl StartClass {
    /// Class of the first letter of `name`; `None` for names without a letter
    pub fn of_name(name: &str) -> Option<Self> {
        name.chars().find(|c| c.is_alphabetic()).map(|c| {
            if is_vowel(c) {
                StartClass::Vowel
            } else {
                StartClass::Consonant
            }
        })
    }
}

/// ASCII vowel test (`y` counts as a consonant)
pub fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

tag_enum! {
    /// Cultural origin associated with a name (and chosen as a background answer)
    pub enum CulturalOrigin {
        #[serde(alias = "english", alias = "british", alias = "american", alias = "anglo_american")]
        Anglo => "anglo",
        Irish => "irish",
        #[serde(alias = "scots")]
        Scottish => "scottish",
        Welsh => "welsh",
        Italian => "italian",
        #[serde(
            alias = "latino",
            alias = "latina",
            alias = "latinx",
            alias = "spanish",
            alias = "mexican"
        )]
        Hispanic => "hispanic",
        Portuguese => "portuguese",
        French => "french",
        German => "german",
        #[serde(alias = "nordic")]
        Scandinavian => "scandinavian",
        #[serde(alias = "eastern_european", alias = "russian", alias = "polish")]
        Slavic => "slavic",
        Greek => "greek",
        #[serde(alias = "hebrew")]
        Jewish => "jewish",
        #[serde(alias = "arab", alias = "middle_eastern")]
        Arabic => "arabic",
        #[serde(alias = "iranian")]
        Persian => "persian",
        Turkish => "turkish",
        #[serde(alias = "indian", alias = "south_asian_indian")]
        SouthAsian => "south_asian",
        #[serde(alias = "chinese", alias = "japanese", alias = "korean")]
        EastAsian => "east_asian",
        #[serde(alias = "vietnamese", alias = "filipino")]
        SoutheastAsian => "southeast_asian",
        African => "african",
        #[serde(alias = "black")]
        AfricanAmerican => "african_american",
        Caribbean => "caribbean",
        #[serde(alias = "indigenous")]
        NativeAmerican => "native_american",
        #[serde(alias = "hawaiian", alias = "polynesian")]
        PacificIslander => "pacific_islander",
    }
}

tag_enum! {
    /// Personality trait a name evokes or that its bearer wants to project
    pub enum TraitTag {
        Friendly => "friendly",
        #[serde(alias = "warm")]
        Warmth => "warmth",
        #[serde(alias = "strong")]
        Strength => "strength",
        #[serde(alias = "elegant")]
        Elegance => "elegance",
        #[serde(alias = "creative", alias = "artistic")]
        Creativity => "creativity",
        #[serde(alias = "intelligent", alias = "smart")]
        Intelligence => "intelligence",
        #[serde(alias = "playful", alias = "fun")]
        Playfulness => "playfulness",
        #[serde(alias = "leader")]
        Leadership => "leadership",
        #[serde(alias = "kind", alias = "gentle")]
        Kindness => "kindness",
        #[serde(alias = "sophisticated")]
        Sophistication => "sophistication",
        #[serde(alias = "adventurous")]
        Adventure => "adventure",
        #[serde(alias = "unique")]
        Uniqueness => "uniqueness",
        #[serde(alias = "reliable", alias = "dependable")]
        Reliability => "reliability",
        #[serde(alias = "charming")]
        Charm => "charm",
        #[serde(alias = "wise")]
        Wisdom => "wisdom",
        #[serde(alias = "confident")]
        Confidence => "confidence",
        #[serde(alias = "professional")]
        Professionalism => "professionalism",
        #[serde(alias = "traditional", alias = "classic")]
        Tradition => "tradition",
    }
}

tag_enum! {
    /// Typical reaction people have when they hear a name
    pub enum ReactionTag {
        #[serde(alias = "none", alias = "no_reaction")]
        Neutral => "neutral",
        #[serde(alias = "compliment", alias = "beautiful")]
        Compliments => "compliments",
        #[serde(alias = "mispronounce", alias = "pronunciation")]
        Mispronounced => "mispronounced",
        #[serde(alias = "misspell", alias = "spelling")]
        Misspelled => "misspelled",
        #[serde(alias = "common", alias = "so_many")]
        CommonName => "common_name",
        #[serde(alias = "unique", alias = "never_heard")]
        Unusual => "unusual",
        #[serde(alias = "nickname")]
        Nicknames => "nicknames",
        #[serde(alias = "where_from", alias = "origin_question")]
        AskOrigin => "ask_origin",
        #[serde(alias = "famous", alias = "celebrity")]
        FamousAssociation => "famous_association",
        #[serde(alias = "song", alias = "sing")]
        SongReference => "song_reference",
        #[serde(alias = "old_fashioned")]
        OldFashioned => "old_fashioned",
    }
}

tag_enum! {
    /// Meaning category of a name
    pub enum MeaningTag {
        #[serde(alias = "just_sound", alias = "sound_only")]
        Sound => "sound",
        Nature => "nature",
        #[serde(alias = "virtues")]
        Virtue => "virtue",
        #[serde(alias = "power")]
        Strength => "strength",
        #[serde(alias = "divine", alias = "religious", alias = "spiritual")]
        Faith => "faith",
        Light => "light",
        Love => "love",
        #[serde(alias = "royal", alias = "nobility")]
        Royalty => "royalty",
        Wisdom => "wisdom",
        #[serde(alias = "happiness")]
        Joy => "joy",
        Peace => "peace",
        Beauty => "beauty",
        #[serde(alias = "heritage", alias = "ancestry")]
        Family => "family",
        #[serde(alias = "warrior")]
        Protection => "protection",
        #[serde(alias = "gem", alias = "gems")]
        Precious => "precious",
        #[serde(alias = "stars", alias = "sky")]
        Celestial => "celestial",
    }
}

tag_enum! {
    /// Community type a name is most at home in
    pub enum CommunityTag {
        #[serde(alias = "urban", alias = "city")]
        UrbanCommunity => "urban_community",
        #[serde(alias = "suburban", alias = "suburbs")]
        SuburbanCommunity => "suburban_community",
        #[serde(alias = "rural", alias = "farm", alias = "country")]
        RuralCommunity => "rural_community",
        #[serde(alias = "small_town")]
        SmallTownCommunity => "small_town_community",
        #[serde(alias = "coastal", alias = "beach")]
        CoastalCommunity => "coastal_community",
        #[serde(alias = "religious", alias = "church")]
        ReligiousCommunity => "religious_community",
        #[serde(alias = "academic", alias = "college_town")]
        AcademicCommunity => "academic_community",
        #[serde(alias = "artistic", alias = "arts")]
        ArtisticCommunity => "artistic_community",
        #[serde(alias = "military")]
        MilitaryCommunity => "military_community",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_bucket_boundaries() {
        assert_eq!(LengthBucket::of_len(3), LengthBucket::Short);
        assert_eq!(LengthBucket::of_len(4), LengthBucket::Short);
        assert_eq!(LengthBucket::of_len(5), LengthBucket::Medium);
        assert_eq!(LengthBucket::of_len(6), LengthBucket::Medium);
        assert_eq!(LengthBucket::of_len(7), LengthBucket::Long);
        assert_eq!(LengthBucket::of_len(9), LengthBucket::Long);
        assert_eq!(LengthBucket::of_len(10), LengthBucket::ExtraLong);
    }

    #[test]
    fn test_length_distance() {
        assert_eq!(LengthBucket::Short.distance_from(3), 0);
        assert_eq!(LengthBucket::Short.distance_from(5), 1);
        assert_eq!(LengthBucket::Long.distance_from(3), 4);
        assert_eq!(LengthBucket::ExtraLong.distance_from(14), 0);
    }

    #[test]
    fn test_start_class() {
        assert_eq!(StartClass::of_name("Amy"), Some(StartClass::Vowel));
        assert_eq!(StartClass::of_name("yusuf"), Some(StartClass::Consonant));
        assert_eq!(StartClass::of_name(""), None);
    }

    #[test]
    fn test_tag_wire_names_round_trip_through_serde() {
        let tag: CommunityTag = serde_json::from_str("\"suburban\"").unwrap();
        assert_eq!(tag, CommunityTag::SuburbanCommunity);
        assert_eq!(serde_json::to_string(&tag).unwrap(), "\"suburban_community\"");
        assert_eq!(tag.to_string(), "suburban_community");
    }
}
