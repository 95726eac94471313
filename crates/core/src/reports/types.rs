//! Report data types.

use chrono::{Datelike, NaiveDate};
use reportday_shared::config::ScheduleConfig;
use reportday_shared::format_date;
use serde::{Deserialize, Serialize};

/// Kind of scheduled report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// First business day of the month.
    PreClosing,
    /// N-th business day of the month.
    Closing,
    /// Calendar-day offset from the reference date.
    Daily,
}

impl ReportKind {
    /// Wire name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PreClosing => "pre_closing",
            Self::Closing => "closing",
            Self::Daily => "daily",
        }
    }
}

impl std::fmt::Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ReportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pre_closing" => Ok(Self::PreClosing),
            "closing" => Ok(Self::Closing),
            "daily" => Ok(Self::Daily),
            _ => Err(format!("Unknown report kind: {s}")),
        }
    }
}

/// A report due on `reference_date`, measured against `base_date`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportRecord {
    /// Date that triggered the report.
    pub reference_date: NaiveDate,
    /// Date the report compares against.
    pub base_date: NaiveDate,
    /// Report kind.
    pub report_type: ReportKind,
}

impl ReportRecord {
    /// Creates a new record.
    #[must_use]
    pub const fn new(reference_date: NaiveDate, base_date: NaiveDate, report_type: ReportKind) -> Self {
        Self {
            reference_date,
            base_date,
            report_type,
        }
    }
}

impl std::fmt::Display for ReportRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} reference={} base={}",
            self.report_type,
            format_date(self.reference_date),
            format_date(self.base_date)
        )
    }
}

/// When the daily report is emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DailyPolicy {
    /// Skip the daily report on the 1st when its base date lands in an
    /// earlier month.
    #[default]
    SuppressAtMonthStart,
    /// Always emit the daily report.
    Always,
}

impl DailyPolicy {
    /// Returns true if a daily report with `base_date` is due on `reference_date`.
    #[must_use]
    pub fn emits(self, reference_date: NaiveDate, base_date: NaiveDate) -> bool {
        match self {
            Self::Always => true,
            Self::SuppressAtMonthStart => {
                let crosses_month = (base_date.year(), base_date.month())
                    != (reference_date.year(), reference_date.month());
                !(reference_date.day() == 1 && crosses_month)
            }
        }
    }
}

/// Parameters for report selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSchedule {
    /// Business-day position that triggers the closing report.
    pub closing_ordinal: u32,
    /// Calendar days between the reference date and the daily base date.
    pub daily_offset: u32,
    /// Daily report emission rule.
    #[serde(default)]
    pub daily_policy: DailyPolicy,
}

impl ReportSchedule {
    /// Creates a schedule with the default daily policy.
    #[must_use]
    pub const fn new(closing_ordinal: u32, daily_offset: u32) -> Self {
        Self {
            closing_ordinal,
            daily_offset,
            daily_policy: DailyPolicy::SuppressAtMonthStart,
        }
    }

    /// Replaces the daily policy.
    #[must_use]
    pub const fn with_daily_policy(mut self, daily_policy: DailyPolicy) -> Self {
        self.daily_policy = daily_policy;
        self
    }
}

impl Default for ReportSchedule {
    fn default() -> Self {
        Self::new(3, 1)
    }
}

impl From<&ScheduleConfig> for ReportSchedule {
    fn from(config: &ScheduleConfig) -> Self {
        let daily_policy = if config.suppress_month_start_daily {
            DailyPolicy::SuppressAtMonthStart
        } else {
            DailyPolicy::Always
        };
        Self::new(config.closing_ordinal, config.daily_offset).with_daily_policy(daily_policy)
    }
}
