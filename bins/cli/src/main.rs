//! Reportday CLI
//!
//! Prints the reports due on a date (or every date in a range) as text or JSON.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reportday_core::{HolidaySet, ReportRecord, ReportSchedule, ReportService};
use reportday_shared::{AppConfig, AppError, parse_date};

#[derive(Parser)]
#[command(name = "reportday")]
#[command(about = "Scheduled reporting dates from a business-day calendar", long_about = None)]
struct Cli {
    /// Extra configuration file, layered over config/ and under REPORTDAY__* variables
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reports due on a single date
    Report {
        /// Reference date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<String>,

        #[command(flatten)]
        opts: ScheduleArgs,
    },

    /// Reports due on every date from --from through --to
    Range {
        /// First reference date (YYYY-MM-DD)
        #[arg(long)]
        from: String,

        /// Last reference date (YYYY-MM-DD), inclusive
        #[arg(long)]
        to: String,

        #[command(flatten)]
        opts: ScheduleArgs,
    },
}

#[derive(Args)]
struct ScheduleArgs {
    /// Holiday (YYYY-MM-DD); repeatable, merged with configured holidays
    #[arg(long = "holiday")]
    holidays: Vec<String>,

    /// File with one holiday per line; blank lines and # comments are ignored
    #[arg(long)]
    holidays_file: Option<PathBuf>,

    /// Business-day position that triggers the closing report
    #[arg(long)]
    closing_ordinal: Option<u32>,

    /// Calendar days back from the reference date for the daily report
    #[arg(long)]
    daily_offset: Option<u32>,

    /// Emit the daily report even when its base date crosses the month start
    #[arg(long, default_value_t = false)]
    always_daily: bool,

    /// Print a JSON array instead of one line per report
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => match err.downcast_ref::<AppError>() {
            Some(app_err) => {
                eprintln!("error [{}]: {app_err}", app_err.error_code());
                ExitCode::from(app_err.exit_code())
            }
            None => {
                eprintln!("error: {err:#}");
                ExitCode::FAILURE
            }
        },
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    // Load configuration
    let config = match &cli.config {
        Some(path) => AppConfig::load_with_file(path)?,
        None => AppConfig::load()?,
    };

    // Initialize tracing; stdout is reserved for reports
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.cmd {
        Commands::Report { date, opts } => {
            let reference = match date {
                Some(text) => parse_date(&text).map_err(AppError::from)?,
                None => {
                    let today = chrono::Local::now().date_naive();
                    debug!(%today, "No reference date given, using today");
                    today
                }
            };
            let (schedule, holidays) = resolve(config, &opts)?;
            let reports =
                ReportService::calculate(&schedule, reference, &holidays).map_err(AppError::from)?;
            info!(reference_date = %reference, count = reports.len(), "Reports calculated");
            print_reports(&reports, opts.json)
        }
        Commands::Range { from, to, opts } => {
            let start = parse_date(&from).map_err(AppError::from)?;
            let end = parse_date(&to).map_err(AppError::from)?;
            let (schedule, holidays) = resolve(config, &opts)?;
            let reports = ReportService::calculate_range(&schedule, start, end, &holidays)
                .map_err(AppError::from)?;
            info!(start = %start, end = %end, count = reports.len(), "Reports calculated");
            print_reports(&reports, opts.json)
        }
    }
}

/// Applies command-line overrides on top of configuration.
fn resolve(
    mut config: AppConfig,
    opts: &ScheduleArgs,
) -> anyhow::Result<(ReportSchedule, HolidaySet)> {
    if let Some(closing_ordinal) = opts.closing_ordinal {
        config.schedule.closing_ordinal = closing_ordinal;
    }
    if let Some(daily_offset) = opts.daily_offset {
        config.schedule.daily_offset = daily_offset;
    }
    if opts.always_daily {
        config.schedule.suppress_month_start_daily = false;
    }
    config.validate()?;

    let mut holidays = HolidaySet::parse(
        config
            .calendar
            .holidays
            .iter()
            .chain(opts.holidays.iter()),
    )
    .map_err(AppError::from)?;

    if let Some(path) = &opts.holidays_file {
        holidays.extend(read_holidays_file(path)?);
    }

    debug!(
        closing_ordinal = config.schedule.closing_ordinal,
        daily_offset = config.schedule.daily_offset,
        holidays = holidays.len(),
        "Schedule resolved"
    );

    Ok((ReportSchedule::from(&config.schedule), holidays))
}

fn read_holidays_file(path: &Path) -> anyhow::Result<Vec<NaiveDate>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("reading holidays file {}", path.display()))?;

    let holidays = HolidaySet::parse(
        contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#')),
    )
    .map_err(AppError::from)?;

    Ok(holidays.iter().collect())
}

fn print_reports(reports: &[ReportRecord], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(reports)?);
    } else {
        for record in reports {
            println!("{record}");
        }
    }
    Ok(())
}
