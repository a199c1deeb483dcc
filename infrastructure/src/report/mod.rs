//! Report output: the JSON artifact of a run.
//!
//! Provides [`JsonReportWriter`], which serializes a
//! [`BatchAggregate`](shootout_domain::BatchAggregate) into a timestamped file.

mod json_writer;

pub use json_writer::{JsonReportWriter, ReportError, render_report, report_file_name};
