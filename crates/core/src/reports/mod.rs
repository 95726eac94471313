//! Scheduled report selection.
//!
//! Given a reference date, decides which of the pre-closing, closing, and
//! daily reports apply and the base date each one measures against.

pub mod error;
pub mod service;
pub mod types;


pub use error::ReportError;
pub use service::ReportService;
pub use types::*;
