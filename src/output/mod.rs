//! Output module for audit reports
//!
//! This module handles:
//! - Writing the CSV report of every checked link
//! - Summarizing a finished run

mod csv_report;
pub mod stats;

pub use csv_report::{write_report, write_report_file, REPORT_HEADER};
pub use stats::{print_summary, AuditSummary};
