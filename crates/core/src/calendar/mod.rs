//! Business-day calendar.
//!
//! A business day is Monday through Friday and not in the caller's holiday
//! set. Every operation here is a pure function of its arguments.

pub mod business_day;
pub mod error;
pub mod holidays;


pub use business_day::{
    MAX_SEARCH_DAYS, business_day_ordinal, first_business_day_of_month, is_business_day,
    is_first_business_day_of_month, last_business_day_of_previous_month, month_start,
    nth_business_day_of_month,
};
pub use error::{CalendarError, SearchDirection};
pub use holidays::HolidaySet;
