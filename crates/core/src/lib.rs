//! Core business logic for Reportday.
//!
//! This crate contains pure business logic with ZERO I/O: no clock reads, no
//! files, no network. Dates arrive already parsed and reports leave as values.
//!
//! # Modules
//!
//! - `calendar` - Business-day arithmetic over weekends plus a holiday set
//! - `reports` - Pre-closing, closing, and daily report selection

pub mod calendar;
pub mod reports;

pub use calendar::{CalendarError, HolidaySet};
pub use reports::{DailyPolicy, ReportError, ReportKind, ReportRecord, ReportSchedule, ReportService};
