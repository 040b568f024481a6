//! Parser for SteamDB chart text dumps.
//!
//! A chart unit (typically one year) is a sequence of entry blocks:
//! ```text
//! 35.
//! Game Name
//! -10%
//! $19.99	92%	15 Jan	12,345	6,789	45,000
//! ```
//! The discount line is optional and discarded. Anything outside an entry
//! block is skipped until the next rank marker.
//!
//! Parsing is fail-fast: the first malformed entry aborts the whole unit and
//! no partial result is returned.

use crate::error::{Expected, FieldError, ParseError};
use crate::normalize::{
    normalize_date, normalize_integer_with_separators, normalize_percentage, normalize_price,
};
use crate::types::GameRecord;

/// Number of tab-separated fields on a data line.
const DATA_FIELDS: usize = 6;

/// Trim every line and drop the blank ones.
///
/// The parser expects its input in this form.
pub fn prepare_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Parse a prepared chart unit into records, one per rank marker, in order.
///
/// `year` is the year context used to complete each `"<day> <Mon>"` release
/// date.
///
/// ```
/// use steam_junk_catalog::chart_parser::parse_chart;
///
/// let lines = ["1.", "Half-Life", "$9.99\t98%\t16 Nov\t1,234\t567\t89,000"];
/// let records = parse_chart(&lines, "2004").unwrap();
/// assert_eq!(records[0].name, "Half-Life");
/// assert_eq!(records[0].release_date, "2004-11-16");
/// ```
pub fn parse_chart<S: AsRef<str>>(
    lines: &[S],
    year: &str,
) -> Result<Vec<GameRecord>, ParseError> {
    let mut records = Vec::new();
    let mut state = State::SeekingMarker;
    let mut cursor = 0;

    while let Some(line) = lines.get(cursor) {
        let line = line.as_ref();
        let line_number = cursor + 1;

        state = match state {
            State::SeekingMarker => {
                cursor += 1;
                if is_rank_marker(line) {
                    State::ExpectName
                } else {
                    State::SeekingMarker
                }
            }
            State::ExpectName => {
                cursor += 1;
                State::ExpectDiscountOrData {
                    name: line.to_string(),
                }
            }
            State::ExpectDiscountOrData { name } => {
                if is_discount_line(line) {
                    cursor += 1;
                }
                State::ExpectData { name }
            }
            State::ExpectData { name } => {
                records.push(parse_data_line(name, line, line_number, year)?);
                cursor += 1;
                State::SeekingMarker
            }
        };
    }

    match state {
        State::SeekingMarker => Ok(records),
        State::ExpectName => Err(ParseError::UnexpectedEnd(Expected::Name)),
        State::ExpectDiscountOrData { .. } | State::ExpectData { .. } => {
            Err(ParseError::UnexpectedEnd(Expected::Data))
        }
    }
}

/// A rank marker is one or more ASCII digits followed by a single period.
pub fn is_rank_marker(line: &str) -> bool {
    line.strip_suffix('.').is_some_and(all_digits)
}

/// A discount line is a minus sign, one or more ASCII digits and a percent sign.
pub fn is_discount_line(line: &str) -> bool {
    line.strip_prefix('-')
        .and_then(|rest| rest.strip_suffix('%'))
        .is_some_and(all_digits)
}

// ── Internal parsing ────────────────────────────────────────────────────────

#[derive(Debug)]
enum State {
    SeekingMarker,
    ExpectName,
    ExpectDiscountOrData { name: String },
    ExpectData { name: String },
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Split a data line into its six fields and normalize each one.
fn parse_data_line(
    name: String,
    line: &str,
    line_number: usize,
    year: &str,
) -> Result<GameRecord, ParseError> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() != DATA_FIELDS {
        return Err(ParseError::FieldCount {
            line: line_number,
            found: fields.len(),
        });
    }

    let at_line = |source: FieldError| ParseError::Field {
        line: line_number,
        source,
    };

    Ok(GameRecord {
        name,
        price: normalize_price(fields[0]).map_err(at_line)?,
        rating: normalize_percentage(fields[1]).map_err(at_line)?,
        release_date: normalize_date(fields[2], year).map_err(at_line)?,
        follows: normalize_integer_with_separators(fields[3]).map_err(at_line)?,
        reviews: normalize_integer_with_separators(fields[4]).map_err(at_line)?,
        peak: normalize_integer_with_separators(fields[5]).map_err(at_line)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_marker_shapes() {
        assert!(is_rank_marker("1."));
        assert!(is_rank_marker("135."));
        assert!(!is_rank_marker("."));
        assert!(!is_rank_marker("1"));
        assert!(!is_rank_marker("1.."));
        assert!(!is_rank_marker("a1."));
        assert!(!is_rank_marker("1. Portal"));
    }

    #[test]
    fn discount_line_shapes() {
        assert!(is_discount_line("-10%"));
        assert!(is_discount_line("-100%"));
        assert!(!is_discount_line("10%"));
        assert!(!is_discount_line("-%"));
        assert!(!is_discount_line("-10"));
        assert!(!is_discount_line("-1.5%"));
    }

    #[test]
    fn prepare_lines_trims_and_drops_blanks() {
        let text = "  1.\n\n Portal \r\n\t\n$9.99\t90%\t1 Jan\t1\t2\t3\n";
        assert_eq!(
            prepare_lines(text),
            vec!["1.", "Portal", "$9.99\t90%\t1 Jan\t1\t2\t3"]
        );
    }
}
