//! Field normalizers for chart data lines.
//!
//! Each function turns one raw token into a typed value or a [`FieldError`].
//! They hold no state and never look at neighbouring fields.

use chrono::NaiveDate;

use crate::error::FieldError;

/// Price tokens that mean "no price" and normalize to zero.
const FREE_MARKERS: &[&str] = &["Free", "\u{2014}"];

/// Currency symbols accepted in front of a price.
const CURRENCY_SYMBOLS: &[char] = &['$', '€', '£', '¥'];

/// Three-letter month abbreviations as they appear in chart dumps.
const MONTHS: [(&str, u32); 12] = [
    ("Jan", 1),
    ("Feb", 2),
    ("Mar", 3),
    ("Apr", 4),
    ("May", 5),
    ("Jun", 6),
    ("Jul", 7),
    ("Aug", 8),
    ("Sep", 9),
    ("Oct", 10),
    ("Nov", 11),
    ("Dec", 12),
];

/// Normalize a price token such as `$19.99`, `Free` or `—`.
///
/// ```
/// use steam_junk_catalog::normalize::normalize_price;
///
/// assert_eq!(normalize_price("Free").unwrap(), 0.0);
/// assert_eq!(normalize_price("$19.99").unwrap(), 19.99);
/// assert!(normalize_price("$abc").is_err());
/// ```
pub fn normalize_price(token: &str) -> Result<f64, FieldError> {
    let token = token.trim();
    if FREE_MARKERS.contains(&token) {
        return Ok(0.0);
    }

    let amount = token
        .strip_prefix(|c: char| CURRENCY_SYMBOLS.contains(&c))
        .unwrap_or(token);

    match amount.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(FieldError::format("price", token)),
    }
}

/// Normalize a rating token such as `98%` into a value in `[0, 100]`.
pub fn normalize_percentage(token: &str) -> Result<f64, FieldError> {
    let token = token.trim();
    let number = token.strip_suffix('%').unwrap_or(token);

    match number.parse::<f64>() {
        Ok(value) if (0.0..=100.0).contains(&value) => Ok(value),
        _ => Err(FieldError::format("percentage", token)),
    }
}

/// Combine a `"<day> <Mon>"` token with a year into `YYYY-MM-DD`.
///
/// The year must be four ASCII digits and the day is zero-padded. Unknown
/// month abbreviations are a lookup failure; anything else that does not
/// make a real calendar date is a format failure.
///
/// ```
/// use steam_junk_catalog::normalize::normalize_date;
///
/// assert_eq!(normalize_date("15 Jan", "2023").unwrap(), "2023-01-15");
/// assert_eq!(normalize_date("3 Nov", "2004").unwrap(), "2004-11-03");
/// ```
pub fn normalize_date(day_and_month: &str, year: &str) -> Result<String, FieldError> {
    let mut parts = day_and_month.split_whitespace();
    let (day, month) = match (parts.next(), parts.next(), parts.next()) {
        (Some(day), Some(month), None) => (day, month),
        _ => return Err(FieldError::format("date", day_and_month)),
    };

    let month = month_number(month).ok_or_else(|| FieldError::unknown_month(month))?;
    let day: u32 = day.parse().map_err(|_| FieldError::format("day", day))?;
    let year = year.trim();
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldError::format("year", year));
    }
    let year_number: i32 = year
        .parse()
        .map_err(|_| FieldError::format("year", year))?;

    if NaiveDate::from_ymd_opt(year_number, month, day).is_none() {
        return Err(FieldError::format("date", format!("{day_and_month} {year}")));
    }

    Ok(format!("{year}-{month:02}-{day:02}"))
}

/// Normalize a count such as `89,000` by dropping thousands separators.
pub fn normalize_integer_with_separators(token: &str) -> Result<u64, FieldError> {
    let digits: String = token.trim().chars().filter(|&c| c != ',').collect();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldError::format("integer", token));
    }
    digits
        .parse()
        .map_err(|_| FieldError::format("integer", token))
}

/// Look up a three-letter month abbreviation (case-sensitive).
fn month_number(abbrev: &str) -> Option<u32> {
    MONTHS
        .iter()
        .find(|(name, _)| *name == abbrev)
        .map(|(_, number)| *number)
}

// ── Playtime ────────────────────────────────────────────────────────────────

/// Average and median playtime in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playtime {
    pub average_minutes: u32,
    pub median_minutes: u32,
}

/// Parse a SteamSpy playtime fragment such as `"25:17 (average) 12:03 (median)"`.
///
/// The first and third whitespace-separated tokens are `HH:MM` durations.
pub fn normalize_playtime(text: &str) -> Result<Playtime, FieldError> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() < 3 {
        return Err(FieldError::format("playtime", text));
    }

    let malformed = || FieldError::format("playtime", text.trim());
    let average_minutes = hours_minutes(tokens[0]).ok_or_else(malformed)?;
    let median_minutes = hours_minutes(tokens[2]).ok_or_else(malformed)?;

    Ok(Playtime {
        average_minutes,
        median_minutes,
    })
}

fn hours_minutes(token: &str) -> Option<u32> {
    let (hours, minutes) = token.split_once(':')?;
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    hours.checked_mul(60)?.checked_add(minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_table_covers_every_month() {
        for (i, (abbrev, _)) in MONTHS.iter().enumerate() {
            assert_eq!(month_number(abbrev), Some(i as u32 + 1));
        }
        assert_eq!(month_number("jan"), None);
        assert_eq!(month_number("Sept"), None);
    }

    #[test]
    fn hours_minutes_parses_durations() {
        assert_eq!(hours_minutes("25:17"), Some(1517));
        assert_eq!(hours_minutes("00:05"), Some(5));
        assert_eq!(hours_minutes("12"), None);
        assert_eq!(hours_minutes("ab:cd"), None);
    }
}
