//! Application configuration management.

use std::path::Path;

use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AppConfig {
    /// Report schedule parameters.
    #[serde(default)]
    pub schedule: ScheduleConfig,
    /// Holiday calendar.
    #[serde(default)]
    pub calendar: CalendarConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Report schedule configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScheduleConfig {
    /// Business-day position within the month that triggers the closing report.
    #[serde(default = "default_closing_ordinal")]
    pub closing_ordinal: u32,
    /// Calendar days subtracted from the reference date for the daily report.
    #[serde(default = "default_daily_offset")]
    pub daily_offset: u32,
    /// Drop the daily report on the 1st when its base date lands in the previous month.
    #[serde(default = "default_suppress_month_start_daily")]
    pub suppress_month_start_daily: bool,
}

fn default_closing_ordinal() -> u32 {
    3
}

fn default_daily_offset() -> u32 {
    1
}

fn default_suppress_month_start_daily() -> bool {
    true
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            closing_ordinal: default_closing_ordinal(),
            daily_offset: default_daily_offset(),
            suppress_month_start_daily: default_suppress_month_start_daily(),
        }
    }
}

/// Holiday calendar configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CalendarConfig {
    /// Holidays as `YYYY-MM-DD` text.
    #[serde(default)]
    pub holidays: Vec<String>,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "reportday=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, lowest priority first: `config/default`, `config/{RUN_MODE}`,
    /// then `REPORTDAY__*` environment variables.
    pub fn load() -> AppResult<Self> {
        Self::build(None)
    }

    /// Like [`AppConfig::load`], with an extra required file layered on top of
    /// the config directory and below the environment.
    pub fn load_with_file(path: &Path) -> AppResult<Self> {
        Self::build(Some(path))
    }

    fn build(extra: Option<&Path>) -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false));

        if let Some(path) = extra {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("REPORTDAY")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("calendar.holidays"),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values the type system cannot.
    pub fn validate(&self) -> AppResult<()> {
        if self.schedule.closing_ordinal == 0 {
            return Err(AppError::Validation(
                "schedule.closing_ordinal must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAR: [(&str, Option<&str>); 5] = [
        ("RUN_MODE", None),
        ("REPORTDAY__SCHEDULE__CLOSING_ORDINAL", None),
        ("REPORTDAY__SCHEDULE__DAILY_OFFSET", None),
        ("REPORTDAY__SCHEDULE__SUPPRESS_MONTH_START_DAILY", None),
        ("REPORTDAY__CALENDAR__HOLIDAYS", None),
    ];

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.schedule.closing_ordinal, 3);
        assert_eq!(config.schedule.daily_offset, 1);
        assert!(config.schedule.suppress_month_start_daily);
        assert!(config.calendar.holidays.is_empty());
        assert_eq!(config.logging.filter, "reportday=info");
    }

    #[test]
    fn test_load_without_sources_uses_defaults() {
        temp_env::with_vars(CLEAR, || {
            let config = AppConfig::load().unwrap();
            assert_eq!(config, AppConfig::default());
        });
    }

    #[test]
    fn test_load_from_environment() {
        let vars = [
            ("RUN_MODE", None),
            ("REPORTDAY__SCHEDULE__CLOSING_ORDINAL", Some("5")),
            ("REPORTDAY__SCHEDULE__DAILY_OFFSET", Some("2")),
            ("REPORTDAY__SCHEDULE__SUPPRESS_MONTH_START_DAILY", Some("false")),
            ("REPORTDAY__CALENDAR__HOLIDAYS", Some("2025-05-01,2025-06-19")),
        ];

        temp_env::with_vars(vars, || {
            let config = AppConfig::load().unwrap();
            assert_eq!(config.schedule.closing_ordinal, 5);
            assert_eq!(config.schedule.daily_offset, 2);
            assert!(!config.schedule.suppress_month_start_daily);
            assert_eq!(config.calendar.holidays, vec!["2025-05-01", "2025-06-19"]);
        });
    }

    #[test]
    fn test_load_rejects_zero_closing_ordinal() {
        let vars = [
            ("RUN_MODE", None),
            ("REPORTDAY__SCHEDULE__CLOSING_ORDINAL", Some("0")),
            ("REPORTDAY__SCHEDULE__DAILY_OFFSET", None),
            ("REPORTDAY__SCHEDULE__SUPPRESS_MONTH_START_DAILY", None),
            ("REPORTDAY__CALENDAR__HOLIDAYS", None),
        ];

        temp_env::with_vars(vars, || {
            let err = AppConfig::load().unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        });
    }

    #[test]
    fn test_load_with_missing_file_fails() {
        temp_env::with_vars(CLEAR, || {
            let err = AppConfig::load_with_file(Path::new("does/not/exist.toml")).unwrap_err();
            assert!(matches!(err, AppError::Config(_)));
        });
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(AppConfig::default().validate().is_ok());
    }
}
