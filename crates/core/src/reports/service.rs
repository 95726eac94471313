//! Report selection service.

use chrono::{Days, NaiveDate};
use tracing::debug;

use super::error::ReportError;
use super::types::{ReportKind, ReportRecord, ReportSchedule};
use crate::calendar::{
    HolidaySet, is_business_day, is_first_business_day_of_month,
    last_business_day_of_previous_month, nth_business_day_of_month,
};

/// Service for selecting scheduled reports.
pub struct ReportService;

impl ReportService {
    /// Selects the reports due on `reference_date` with the default daily policy.
    ///
    /// Records come back as pre-closing, closing, then daily, each only when
    /// it applies.
    pub fn calculate_reports(
        closing_ordinal: u32,
        daily_offset: u32,
        reference_date: NaiveDate,
        holidays: &HolidaySet,
    ) -> Result<Vec<ReportRecord>, ReportError> {
        Self::calculate(
            &ReportSchedule::new(closing_ordinal, daily_offset),
            reference_date,
            holidays,
        )
    }

    /// Selects the reports due on `reference_date` under `schedule`.
    ///
    /// Pre-closing and closing reports need a business day and share the
    /// last business day of the previous month as base date. The daily report
    /// is `daily_offset` calendar days back, subject to the daily policy.
    pub fn calculate(
        schedule: &ReportSchedule,
        reference_date: NaiveDate,
        holidays: &HolidaySet,
    ) -> Result<Vec<ReportRecord>, ReportError> {
        let mut reports = Vec::with_capacity(3);

        if is_business_day(reference_date, holidays) {
            let pre_closing = is_first_business_day_of_month(reference_date, holidays)?;
            let closing =
                nth_business_day_of_month(reference_date, schedule.closing_ordinal, holidays);

            if pre_closing || closing {
                let base_date = last_business_day_of_previous_month(reference_date, holidays)?;
                if pre_closing {
                    reports.push(ReportRecord::new(
                        reference_date,
                        base_date,
                        ReportKind::PreClosing,
                    ));
                }
                if closing {
                    reports.push(ReportRecord::new(reference_date, base_date, ReportKind::Closing));
                }
            }
        } else {
            debug!(reference_date = %reference_date, "Not a business day, skipping closing reports");
        }

        let daily_base = Self::daily_base_date(reference_date, schedule.daily_offset)?;
        if schedule.daily_policy.emits(reference_date, daily_base) {
            reports.push(ReportRecord::new(reference_date, daily_base, ReportKind::Daily));
        } else {
            debug!(
                reference_date = %reference_date,
                base_date = %daily_base,
                "Daily report suppressed at month start"
            );
        }

        debug!(
            reference_date = %reference_date,
            count = reports.len(),
            "Reports selected"
        );

        Ok(reports)
    }

    /// Selects reports for every calendar date from `start` through `end`.
    pub fn calculate_range(
        schedule: &ReportSchedule,
        start: NaiveDate,
        end: NaiveDate,
        holidays: &HolidaySet,
    ) -> Result<Vec<ReportRecord>, ReportError> {
        if start > end {
            return Err(ReportError::InvalidDateRange { start, end });
        }

        let mut reports = Vec::new();
        for reference_date in start.iter_days().take_while(|day| *day <= end) {
            reports.extend(Self::calculate(schedule, reference_date, holidays)?);
        }
        Ok(reports)
    }

    fn daily_base_date(reference_date: NaiveDate, offset: u32) -> Result<NaiveDate, ReportError> {
        reference_date
            .checked_sub_days(Days::new(u64::from(offset)))
            .ok_or(ReportError::DateOutOfRange {
                date: reference_date,
                offset,
            })
    }
}
