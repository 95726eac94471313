//! Report error types.

use chrono::NaiveDate;
use reportday_shared::AppError;
use thiserror::Error;

use crate::calendar::CalendarError;

/// Errors that can occur during report selection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// Business-day search failed.
    #[error(transparent)]
    Calendar(#[from] CalendarError),

    /// Daily base date falls outside the representable date range.
    #[error("Daily base date out of range: {date} minus {offset} days")]
    DateOutOfRange {
        /// Reference date.
        date: NaiveDate,
        /// Daily offset in calendar days.
        offset: u32,
    },

    /// Invalid date range.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::InvalidDateRange { .. } => Self::Validation(err.to_string()),
            ReportError::Calendar(_) | ReportError::DateOutOfRange { .. } => {
                Self::Calendar(err.to_string())
            }
        }
    }
}
