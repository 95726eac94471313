//! Business-day arithmetic within and across calendar months.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use tracing::warn;

use super::error::{CalendarError, SearchDirection};
use super::holidays::HolidaySet;

/// Upper bound on dates examined by a single business-day search.
///
/// A month with no business day at all only happens with malformed holiday
/// data; the search fails with [`CalendarError::Exhausted`] instead of running
/// on into neighbouring months.
pub const MAX_SEARCH_DAYS: u32 = 31;

/// Returns true if `date` is Monday through Friday and not a holiday.
#[must_use]
pub fn is_business_day(date: NaiveDate, holidays: &HolidaySet) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) && !holidays.contains(date)
}

/// First calendar day of `date`'s month.
#[must_use]
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// First business day of `date`'s month.
pub fn first_business_day_of_month(
    date: NaiveDate,
    holidays: &HolidaySet,
) -> Result<NaiveDate, CalendarError> {
    search(month_start(date), SearchDirection::Forward, holidays)
}

/// Last business day strictly before the first day of `date`'s month.
pub fn last_business_day_of_previous_month(
    date: NaiveDate,
    holidays: &HolidaySet,
) -> Result<NaiveDate, CalendarError> {
    let start = month_start(date);
    let previous = start.pred_opt().ok_or(CalendarError::OutOfRange(start))?;
    search(previous, SearchDirection::Backward, holidays)
}

/// 1-based position of `date` among the business days of its month.
///
/// Counts business days from the 1st up to and including `date`. A
/// non-business `date` is not counted itself, so it shares the ordinal of the
/// business day before it (or 0 if none precedes it).
#[must_use]
pub fn business_day_ordinal(date: NaiveDate, holidays: &HolidaySet) -> u32 {
    let mut count = 0;
    for day in month_start(date).iter_days().take_while(|day| *day <= date) {
        if is_business_day(day, holidays) {
            count += 1;
        }
    }
    count
}

/// Returns true if `date` is the `n`-th business day of its month.
///
/// Only meaningful for business days; see [`business_day_ordinal`].
#[must_use]
pub fn nth_business_day_of_month(date: NaiveDate, n: u32, holidays: &HolidaySet) -> bool {
    business_day_ordinal(date, holidays) == n
}

/// Returns true if `date` is the first business day of its month.
pub fn is_first_business_day_of_month(
    date: NaiveDate,
    holidays: &HolidaySet,
) -> Result<bool, CalendarError> {
    Ok(date == first_business_day_of_month(date, holidays)?)
}

fn search(
    origin: NaiveDate,
    direction: SearchDirection,
    holidays: &HolidaySet,
) -> Result<NaiveDate, CalendarError> {
    let mut current = origin;
    for _ in 0..MAX_SEARCH_DAYS {
        if is_business_day(current, holidays) {
            return Ok(current);
        }
        let next = match direction {
            SearchDirection::Forward => current.succ_opt(),
            SearchDirection::Backward => current.pred_opt(),
        };
        current = next.ok_or(CalendarError::OutOfRange(current))?;
    }

    warn!(
        origin = %origin,
        direction = %direction,
        limit = MAX_SEARCH_DAYS,
        "Business-day search exhausted"
    );

    Err(CalendarError::Exhausted {
        origin,
        direction,
        limit: MAX_SEARCH_DAYS,
    })
}
