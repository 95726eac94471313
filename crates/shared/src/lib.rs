//! Shared types, errors, and configuration for Reportday.
//!
//! This crate provides the pieces every other crate leans on:
//! - Date text adapters (`YYYY-MM-DD` in and out)
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use types::date::{DATE_FORMAT, ParseError, format_date, parse_date, parse_dates};
