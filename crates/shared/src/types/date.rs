//! Calendar date text adapters.
//!
//! Dates cross the process boundary as `YYYY-MM-DD` text. Everything inside
//! the workspace works on `chrono::NaiveDate`.

use chrono::NaiveDate;
use thiserror::Error;

/// Text format for calendar dates, e.g. `2025-05-06`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Errors raised while turning text into calendar dates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input was empty or whitespace only.
    #[error("Date text is empty")]
    Empty,

    /// Input did not match `YYYY-MM-DD` or named an impossible date.
    #[error("Invalid date '{input}': expected YYYY-MM-DD ({source})")]
    InvalidDate {
        /// Offending text, trimmed.
        input: String,
        /// Underlying chrono failure.
        source: chrono::ParseError,
    },
}

/// Parses a single `YYYY-MM-DD` date. Surrounding whitespace is ignored.
pub fn parse_date(text: &str) -> Result<NaiveDate, ParseError> {
    let input = text.trim();
    if input.is_empty() {
        return Err(ParseError::Empty);
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|source| ParseError::InvalidDate {
        input: input.to_string(),
        source,
    })
}

/// Parses a list of dates, failing on the first bad entry.
pub fn parse_dates<I, S>(texts: I) -> Result<Vec<NaiveDate>, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    texts
        .into_iter()
        .map(|text| parse_date(text.as_ref()))
        .collect()
}

/// Formats a date back to `YYYY-MM-DD`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
