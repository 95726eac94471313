//! Calendar error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Direction of a business-day search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchDirection {
    /// Towards later dates.
    Forward,
    /// Towards earlier dates.
    Backward,
}

impl std::fmt::Display for SearchDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Forward => write!(f, "forward"),
            Self::Backward => write!(f, "backward"),
        }
    }
}

/// Errors that can occur during business-day searches.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// Holiday data left no business day inside the search window.
    #[error("No business day found searching {direction} from {origin} within {limit} days")]
    Exhausted {
        /// Date the search started from.
        origin: NaiveDate,
        /// Search direction.
        direction: SearchDirection,
        /// Number of dates examined.
        limit: u32,
    },

    /// Stepping past the representable date range.
    #[error("Date out of range stepping from {0}")]
    OutOfRange(NaiveDate),
}
