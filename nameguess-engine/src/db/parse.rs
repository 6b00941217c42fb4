//! Source line parsing
//!
//! A malformed line (wrong field count, non-numeric count or year, gender other
//! than `M`/`F`, empty name) is rejected with `None` and skipped by the loader.

use super::source::SourceFormat;
use crate::record::GenderCode;

/// One accepted source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedLine<'a> {
    pub name: &'a str,
    pub gender: GenderCode,
    pub year: u16,
    pub count: u64,
    /// Upper-case state code for state-file lines
    pub state: Option<&'a str>,
}

/// Outcome of parsing one line
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum LineOutcome<'a> {
    Accepted(ParsedLine<'a>),
    /// Malformed line, counted as skipped
    Rejected,
    /// Blank line, not counted
    Blank,
}

pub(crate) fn parse_line(format: SourceFormat, line: &str) -> LineOutcome<'_> {
    let line = line.trim_start_matches('\u{feff}').trim();
    if line.is_empty() {
        return LineOutcome::Blank;
    }

    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let parsed = match (format, fields.as_slice()) {
        (SourceFormat::National { year }, &[name, gender, count]) => {
            national(name, gender, count, year)
        }
        (SourceFormat::State, &[state, gender, year, name, count]) => {
            state_line(state, gender, year, name, count)
        }
        _ => None,
    };

    match parsed {
        Some(parsed) => LineOutcome::Accepted(parsed),
        None => LineOutcome::Rejected,
    }
}

fn national<'a>(name: &'a str, gender: &str, count: &str, year: u16) -> Option<ParsedLine<'a>> {
    if name.is_empty() {
        return None;
    }
    Some(ParsedLine {
        name,
        gender: GenderCode::from_source_field(gender)?,
        year,
        count: count.parse().ok()?,
        state: None,
    })
}

fn state_line<'a>(
    state: &'a str,
    gender: &str,
    year: &str,
    name: &'a str,
    count: &str,
) -> Option<ParsedLine<'a>> {
    if name.is_empty() || state.len() != 2 || !state.chars().all(|c| c.is_ascii_uppercase()) {
        return None;
    }
    Some(ParsedLine {
        name,
        gender: GenderCode::from_source_field(gender)?,
        year: year.parse().ok()?,
        count: count.parse().ok()?,
        state: Some(state),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const NATIONAL: SourceFormat = SourceFormat::National { year: 1985 };

    #[test]
    fn test_national_line() {
        assert_eq!(
            parse_line(NATIONAL, "Amy,F,12345"),
            LineOutcome::Accepted(ParsedLine {
                name: "Amy",
                gender: GenderCode::F,
                year: 1985,
                count: 12345,
                state: None,
            })
        );
    }

    #[test]
    fn test_state_line() {
        match parse_line(SourceFormat::State, "CA,M,1990,Sam,42\r") {
            LineOutcome::Accepted(line) => {
                assert_eq!(line.state, Some("CA"));
                assert_eq!(line.year, 1990);
                assert_eq!(line.name, "Sam");
                assert_eq!(line.count, 42);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_malformed_lines_rejected() {
        for line in [
            "Amy,F",
            "Amy,F,lots",
            "Amy,X,10",
            "Amy,F,-3",
            ",F,10",
            "Amy,F,10,extra",
        ] {
            assert_eq!(parse_line(NATIONAL, line), LineOutcome::Rejected, "{}", line);
        }
        assert_eq!(
            parse_line(SourceFormat::State, "California,F,1990,Amy,5"),
            LineOutcome::Rejected
        );
        assert_eq!(parse_line(NATIONAL, "   "), LineOutcome::Blank);
    }
}
