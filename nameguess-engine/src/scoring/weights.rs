// Scoring weights. Partial-match weights never stack with the full-match
// weight of the same question.

pub const POLITICAL_FULL: i64 = 60;
pub const POLITICAL_STRONG_PARTIAL: i64 = 30;
pub const POLITICAL_WEAK_PARTIAL: i64 = 20;

pub const LANGUAGE_EXACT: i64 = 50;
pub const LANGUAGE_FAMILY: i64 = 45;
pub const LANGUAGE_ENGLISH_ONLY_MISMATCH: i64 = -20;

pub const RELIGION_MATCH: i64 = 50;
pub const RELIGION_CROSS_RELIGIOUS: i64 = 25;

pub const CULTURE_MATCH: i64 = 45;

pub const LENGTH_MATCH: i64 = 35;
// Outside the bucket by one letter
pub const LENGTH_NEAR: i64 = 20;
// Neighbouring bucket, more than one letter away
pub const LENGTH_ADJACENT_BUCKET: i64 = -25;
// Two or more buckets away
pub const LENGTH_FAR_BUCKET: i64 = -40;

pub const GENDER_MATCH: i64 = 25;

pub const POPULARITY_TIER_MATCH: i64 = 20;
pub const POPULARITY_DECADE_MATCH: i64 = 15;

pub const START_CLASS_MATCH: i64 = 15;
pub const FAVORITE_LETTER_MATCH: i64 = 20;

pub const CAREER_MATCH: i64 = 15;
pub const CAREER_NEAR: i64 = 10;

pub const FAMILY_TRADITION_MATCH: i64 = 20;
pub const FAMILY_TRADITION_NEAR: i64 = 15;

pub const DIVERSITY_MATCH: i64 = 15;
pub const DIVERSITY_NEAR: i64 = 10;

pub const MEANING_MATCH: i64 = 15;

pub const LOCALE_MATCH: i64 = 30;
pub const LOCALE_NEAR: i64 = 20;
pub const LOCALE_SMALL_TOWN_MISMATCH: i64 = -10;
pub const LOCALE_RURAL_MISMATCH: i64 = -15;
pub const LOCALE_URBAN_MISMATCH: i64 = -10;

pub const PERCEPTION_MATCH: i64 = 25;
pub const IMPRESSION_MATCH: i64 = 25;
pub const REACTION_MATCH: i64 = 25;

pub const COMMUNITY_MATCH: i64 = 15;
