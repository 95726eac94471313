//! Holiday set supplied by the caller.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use reportday_shared::{ParseError, parse_dates};
use serde::{Deserialize, Serialize};

/// Set of non-business dates on top of weekends.
///
/// Supplied wholesale per invocation. Duplicates collapse; iteration is in
/// date order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidaySet(BTreeSet<NaiveDate>);

impl HolidaySet {
    /// Creates an empty holiday set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a holiday set from `YYYY-MM-DD` text.
    pub fn parse<I, S>(texts: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(parse_dates(texts)?.into_iter().collect())
    }

    /// Returns true if `date` is a holiday.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.0.contains(&date)
    }

    /// Number of distinct holidays.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no holidays.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates holidays in date order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<NaiveDate> for HolidaySet {
    fn from_iter<T: IntoIterator<Item = NaiveDate>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<NaiveDate> for HolidaySet {
    fn extend<T: IntoIterator<Item = NaiveDate>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}
