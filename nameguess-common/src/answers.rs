//! Quiz answer model
//!
//! The quiz shell hands over a loosely typed map of question key → scalar or
//! list. [`AnswerSet::from_raw`] validates that map once, at the boundary, into
//! a struct of optional typed fields. Everything downstream only ever sees
//! [`AnswerSet`].

use crate::tag_enum;
use crate::tags::{
    CommunityTag, CulturalOrigin, LengthBucket, MeaningTag, ReactionTag, StartClass,
    TraitTag,
};
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Loosely typed answers as received from the quiz shell
pub type RawAnswers = serde_json::Map<String, Value>;

/// Values that mean "question skipped" for every key except `gender`
const SKIP_VALUES: &[&str] = &["", "any", "skip", "no_preference", "none_of_these", "unsure"];

/// List entries that are valid answers but carry no matchable tag
const NEUTRAL_LIST_VALUES: &[&str] = &["mixed", "other", "none", "no_preference", "unsure"];

tag_enum! {
    /// Answer to the gender question
    pub enum GenderAnswer {
        #[serde(alias = "m", alias = "man", alias = "boy")]
        Male => "male",
        #[serde(alias = "f", alias = "woman", alias = "girl")]
        Female => "female",
        #[serde(alias = "nb", alias = "non_binary", alias = "enby", alias = "genderqueer")]
        NonBinary => "nonbinary",
        #[serde(alias = "unspecified", alias = "skip", alias = "")]
        PreferNotToSay => "prefer_not_to_say",
    }
}

tag_enum! {
    /// How popular the person perceives their name to be
    pub enum PopularityPreference {
        #[serde(alias = "very_common")]
        VeryPopular => "very_popular",
        #[serde(alias = "common")]
        Popular => "popular",
        #[serde(alias = "somewhat_common", alias = "average")]
        Moderate => "moderate",
        #[serde(alias = "unusual")]
        Uncommon => "uncommon",
        #[serde(alias = "very_rare", alias = "unique")]
        Rare => "rare",
    }
}

tag_enum! {
    /// Self-described political leaning of the household the person grew up in
    pub enum PoliticalValues {
        #[serde(alias = "very_progressive")]
        VeryLiberal => "very_liberal",
        #[serde(alias = "progressive")]
        Liberal => "liberal",
        #[serde(alias = "centrist")]
        Moderate => "moderate",
        Conservative => "conservative",
        #[serde(alias = "traditional", alias = "very_traditional")]
        VeryConservative => "very_conservative",
        Libertarian => "libertarian",
        #[serde(alias = "not_political", alias = "none")]
        Apolitical => "apolitical",
    }
}

tag_enum! {
    /// Language the person's family preferred when naming
    pub enum LanguagePreference {
        #[serde(alias = "english")]
        EnglishOnly => "english_only",
        Spanish => "spanish",
        French => "french",
        Italian => "italian",
        German => "german",
        #[serde(alias = "gaelic", alias = "celtic")]
        Irish => "irish",
        Hebrew => "hebrew",
        Arabic => "arabic",
        #[serde(alias = "sanskrit", alias = "indian")]
        Hindi => "hindi",
        #[serde(alias = "mandarin")]
        Chinese => "chinese",
        Japanese => "japanese",
        Korean => "korean",
        #[serde(alias = "slavic")]
        Russian => "russian",
        #[serde(alias = "bilingual", alias = "international")]
        Multilingual => "multilingual",
    }
}

tag_enum! {
    /// Religious tradition the person was raised in
    pub enum ReligiousTradition {
        #[serde(
            alias = "catholic",
            alias = "protestant",
            alias = "orthodox",
            alias = "evangelical"
        )]
        Christian => "christian",
        Jewish => "jewish",
        #[serde(alias = "islam", alias = "islamic")]
        Muslim => "muslim",
        Hindu => "hindu",
        Buddhist => "buddhist",
        Sikh => "sikh",
        #[serde(alias = "spiritual_not_religious")]
        Spiritual => "spiritual",
        #[serde(alias = "none", alias = "atheist", alias = "agnostic", alias = "not_religious")]
        Secular => "secular",
    }
}

tag_enum! {
    /// Kind of place the person grew up in
    pub enum GrewUpLocation {
        #[serde(alias = "countryside", alias = "farm")]
        Rural => "rural",
        SmallTown => "small_town",
        #[serde(alias = "suburbs")]
        Suburban => "suburban",
        #[serde(alias = "city", alias = "big_city")]
        Urban => "urban",
        #[serde(alias = "moved_around", alias = "abroad", alias = "many_places")]
        Multiple => "multiple",
    }
}

tag_enum! {
    /// Career path the person is on (or aspires to)
    pub enum CareerPath {
        #[serde(alias = "entrepreneur", alias = "management")]
        Business => "business",
        #[serde(alias = "legal")]
        Law => "law",
        #[serde(alias = "healthcare", alias = "doctor")]
        Medicine => "medicine",
        #[serde(alias = "banking")]
        Finance => "finance",
        Engineering => "engineering",
        #[serde(alias = "tech", alias = "software")]
        Technology => "technology",
        #[serde(alias = "research", alias = "academia")]
        Science => "science",
        #[serde(alias = "teaching")]
        Education => "education",
        #[serde(alias = "creative", alias = "entertainment", alias = "art")]
        Arts => "arts",
        #[serde(alias = "skilled_trades", alias = "construction")]
        Trades => "trades",
        #[serde(alias = "government", alias = "nonprofit")]
        PublicService => "public_service",
        #[serde(alias = "armed_forces")]
        Military => "military",
        #[serde(alias = "retail", alias = "service")]
        Hospitality => "hospitality",
        #[serde(alias = "caregiver", alias = "stay_at_home")]
        Homemaker => "homemaker",
        Student => "student",
    }
}

/// Validated quiz answers
///
/// Every field is optional; an unanswered question contributes nothing to scoring.
/// List fields hold multi-select answers. Deserializing directly skips the
/// [`AnswerSet::from_raw`] checks; consumers compare `favorite_letter` and
/// `state` case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswerSet {
    pub gender: Option<GenderAnswer>,
    /// Birth decade, normalised to its first year (1987 → 1980)
    pub decade: Option<u16>,
    pub length: Option<LengthBucket>,
    pub starts_with: Option<StartClass>,
    pub popularity: Option<PopularityPreference>,
    /// Two-letter upper-case state/territory code
    pub state: Option<String>,
    pub political_values: Option<PoliticalValues>,
    pub language_preference: Option<LanguagePreference>,
    pub religious_tradition: Option<ReligiousTradition>,
    pub cultural_background: Vec<CulturalOrigin>,
    pub grew_up_location: Option<GrewUpLocation>,
    pub community_type: Option<CommunityTag>,
    /// 1 (modern) .. 3 (strongly traditional)
    pub family_tradition: Option<u8>,
    /// 1 (homogeneous) .. 3 (embraces diversity)
    pub diversity_attitude: Option<u8>,
    pub name_meaning_preference: Vec<MeaningTag>,
    pub name_perception: Vec<TraitTag>,
    pub desired_impression: Vec<TraitTag>,
    pub name_reactions: Vec<ReactionTag>,
    pub career_path: Option<CareerPath>,
    /// Lower-case ASCII letter
    pub favorite_letter: Option<char>,
}

impl AnswerSet {
    /// Validate a raw answer map
    ///
    /// Unknown keys are ignored. A known key with a value outside its question's
    /// options is an [`Error::InvalidInput`].
    pub fn from_raw(raw: &RawAnswers) -> Result<Self> {
        let mut answers = AnswerSet::default();

        for (key, value) in raw {
            match key.as_str() {
                "gender" => answers.gender = parse_gender(value)?,
                "decade" => answers.decade = parse_decade(value)?,
                "length" => answers.length = parse_scalar(key, value)?,
                "starts_with" => answers.starts_with = parse_scalar(key, value)?,
                "popularity" => answers.popularity = parse_scalar(key, value)?,
                "state" => answers.state = parse_state(value)?,
                "political_values" => answers.political_values = parse_scalar(key, value)?,
                "language_preference" => answers.language_preference = parse_scalar(key, value)?,
                "religious_tradition" => answers.religious_tradition = parse_scalar(key, value)?,
                "cultural_background" => answers.cultural_background = parse_list(key, value)?,
                "grew_up_location" => answers.grew_up_location = parse_scalar(key, value)?,
                "community_type" => answers.community_type = parse_scalar(key, value)?,
                "family_tradition" => answers.family_tradition = parse_slider(key, value)?,
                "diversity_attitude" => answers.diversity_attitude = parse_slider(key, value)?,
                "name_meaning_preference" => {
                    answers.name_meaning_preference = parse_list(key, value)?
                }
                "name_perception" => answers.name_perception = parse_list(key, value)?,
                "desired_impression" => answers.desired_impression = parse_list(key, value)?,
                "name_reactions" => answers.name_reactions = parse_list(key, value)?,
                "career_path" => answers.career_path = parse_scalar(key, value)?,
                "favorite_letter" => answers.favorite_letter = parse_letter(value)?,
                other => debug!("Ignoring unknown answer key '{}'", other),
            }
        }

        Ok(answers)
    }

    /// Parse and validate a JSON object of answers
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| Error::InvalidInput(format!("Answers are not valid JSON: {}", e)))?;
        match value {
            Value::Object(map) => Self::from_raw(&map),
            _ => Err(Error::InvalidInput(
                "Answers must be a JSON object".to_string(),
            )),
        }
    }

    /// Number of questions that carry an answer
    pub fn answered_count(&self) -> usize {
        let scalars = [
            self.gender.is_some(),
            self.decade.is_some(),
            self.length.is_some(),
            self.starts_with.is_some(),
            self.popularity.is_some(),
            self.state.is_some(),
            self.political_values.is_some(),
            self.language_preference.is_some(),
            self.religious_tradition.is_some(),
            self.grew_up_location.is_some(),
            self.community_type.is_some(),
            self.family_tradition.is_some(),
            self.diversity_attitude.is_some(),
            self.career_path.is_some(),
            self.favorite_letter.is_some(),
        ];
        let lists = [
            !self.cultural_background.is_empty(),
            !self.name_meaning_preference.is_empty(),
            !self.name_perception.is_empty(),
            !self.desired_impression.is_empty(),
            !self.name_reactions.is_empty(),
        ];
        scalars.iter().chain(lists.iter()).filter(|answered| **answered).count()
    }

    pub fn is_empty(&self) -> bool {
        self.answered_count() == 0
    }
}

/// Lower-case, trim, and fold spaces/hyphens to underscores
fn normalize(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}

fn value_as_text(key: &str, value: &Value) -> Result<Option<String>> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        _ => Err(Error::InvalidInput(format!(
            "{}: expected a single value, got {}",
            key, value
        ))),
    }
}

fn parse_tag<T: DeserializeOwned>(key: &str, raw: &str) -> Result<T> {
    serde_json::from_value(Value::String(normalize(raw))).map_err(|_| {
        Error::InvalidInput(format!("{}: unrecognised value '{}'", key, raw))
    })
}

fn parse_scalar<T: DeserializeOwned>(key: &str, value: &Value) -> Result<Option<T>> {
    let Some(text) = value_as_text(key, value)? else {
        return Ok(None);
    };
    if SKIP_VALUES.contains(&normalize(&text).as_str()) {
        return Ok(None);
    }
    parse_tag(key, &text).map(Some)
}

fn parse_list<T: DeserializeOwned>(key: &str, value: &Value) -> Result<Vec<T>> {
    let items: Vec<Value> = match value {
        Value::Null => return Ok(Vec::new()),
        Value::Array(items) => items.clone(),
        single => vec![single.clone()],
    };

    let mut parsed = Vec::with_capacity(items.len());
    for item in &items {
        let Some(text) = value_as_text(key, item)? else {
            continue;
        };
        let normalized = normalize(&text);
        if SKIP_VALUES.contains(&normalized.as_str())
            || NEUTRAL_LIST_VALUES.contains(&normalized.as_str())
        {
            continue;
        }
        parsed.push(parse_tag(key, &text)?);
    }
    Ok(parsed)
}

fn parse_gender(value: &Value) -> Result<Option<GenderAnswer>> {
    match value_as_text("gender", value)? {
        None => Ok(None),
        Some(text) => parse_tag("gender", &text).map(Some),
    }
}

/// Accepts `1980`, `1987`, `"1980s"`, `"80s"`
fn parse_decade(value: &Value) -> Result<Option<u16>> {
    let Some(text) = value_as_text("decade", value)? else {
        return Ok(None);
    };
    let trimmed = normalize(&text);
    if SKIP_VALUES.contains(&trimmed.as_str()) {
        return Ok(None);
    }
    let digits = trimmed.trim_end_matches('s').trim_start_matches('\'');
    let year: u16 = digits
        .parse()
        .map_err(|_| Error::InvalidInput(format!("decade: unrecognised value '{}'", text)))?;

    let year = match year {
        0..=99 if digits.len() == 2 => {
            // Two-digit decades: 00s-20s are this century, the rest the last one
            if year <= 20 {
                2000 + year
            } else {
                1900 + year
            }
        }
        1880..=2029 => year,
        _ => {
            return Err(Error::InvalidInput(format!(
                "decade: {} is outside 1880-2020",
                text
            )))
        }
    };
    Ok(Some(year - year % 10))
}

fn parse_state(value: &Value) -> Result<Option<String>> {
    let Some(text) = value_as_text("state", value)? else {
        return Ok(None);
    };
    let code = text.trim().to_uppercase();
    if code.is_empty() {
        return Ok(None);
    }
    if code.len() != 2 || !code.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(Error::InvalidInput(format!(
            "state: expected a two-letter code, got '{}'",
            text
        )));
    }
    Ok(Some(code))
}

fn parse_slider(key: &str, value: &Value) -> Result<Option<u8>> {
    let Some(text) = value_as_text(key, value)? else {
        return Ok(None);
    };
    if text.trim().is_empty() {
        return Ok(None);
    }
    let level: f64 = text
        .trim()
        .parse()
        .map_err(|_| Error::InvalidInput(format!("{}: expected 1-3, got '{}'", key, text)))?;
    let rounded = level.round();
    if !(1.0..=3.0).contains(&rounded) {
        return Err(Error::InvalidInput(format!(
            "{}: expected 1-3, got '{}'",
            key, text
        )));
    }
    Ok(Some(rounded as u8))
}

fn parse_letter(value: &Value) -> Result<Option<char>> {
    let Some(text) = value_as_text("favorite_letter", value)? else {
        return Ok(None);
    };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => Ok(Some(c.to_ascii_lowercase())),
        _ => Err(Error::InvalidInput(format!(
            "favorite_letter: expected a single letter, got '{}'",
            text
        ))),
    }
}
