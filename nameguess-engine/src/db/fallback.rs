//! Embedded default names
//!
//! Used when no source yields a single record, so the database is never empty.

use super::source::{SourceFormat, StaticLineSource};

/// Year the embedded counts are attributed to
pub const FALLBACK_YEAR: u16 = 2000;

/// (name, gender, lifetime count)
const FALLBACK_NAMES: [(&str, &str, u64); 10] = [
    ("James", "M", 5_200_000),
    ("John", "M", 5_150_000),
    ("Robert", "M", 4_850_000),
    ("Michael", "M", 4_400_000),
    ("William", "M", 4_150_000),
    ("Mary", "F", 4_150_000),
    ("Patricia", "F", 1_575_000),
    ("Jennifer", "F", 1_470_000),
    ("Linda", "F", 1_455_000),
    ("Elizabeth", "F", 1_655_000),
];

/// The embedded names as a national source
pub fn fallback_source() -> StaticLineSource {
    StaticLineSource::new(
        "embedded-fallback",
        SourceFormat::National {
            year: FALLBACK_YEAR,
        },
        FALLBACK_NAMES
            .iter()
            .map(|(name, gender, count)| format!("{},{},{}", name, gender, count)),
    )
}
