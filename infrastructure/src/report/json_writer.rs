//! JSON report writer.
//!
//! The report is the aggregate itself: one top-level key per backend, each
//! holding `system_prompt_used`, `user_prompt_used` and `response`.

use chrono::{DateTime, Local};
use shootout_domain::BatchAggregate;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Could not create results directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not write report {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// `YYYYmmdd-HHMMSS-model-shootout.json`
pub fn report_file_name(timestamp: &DateTime<Local>) -> String {
    format!("{}-model-shootout.json", timestamp.format("%Y%m%d-%H%M%S"))
}

/// Pretty-printed report body (2-space indentation)
pub fn render_report(aggregate: &BatchAggregate) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(aggregate)?)
}

/// Writes each run's aggregate into its own file under a results directory.
pub struct JsonReportWriter {
    results_dir: PathBuf,
}

impl JsonReportWriter {
    pub fn new(results_dir: impl Into<PathBuf>) -> Self {
        Self {
            results_dir: results_dir.into(),
        }
    }

    pub fn results_dir(&self) -> &Path {
        &self.results_dir
    }

    /// Write the report stamped with the current local time
    pub fn write(&self, aggregate: &BatchAggregate) -> Result<PathBuf, ReportError> {
        self.write_at(aggregate, &Local::now())
    }

    /// Write the report stamped with `timestamp`.
    ///
    /// Creates the results directory (and parents) if needed. Returns the path
    /// of the written file.
    pub fn write_at(
        &self,
        aggregate: &BatchAggregate,
        timestamp: &DateTime<Local>,
    ) -> Result<PathBuf, ReportError> {
        fs::create_dir_all(&self.results_dir).map_err(|source| ReportError::CreateDir {
            path: self.results_dir.clone(),
            source,
        })?;

        let path = self.results_dir.join(report_file_name(timestamp));
        let body = render_report(aggregate)?;

        fs::write(&path, body).map_err(|source| ReportError::Write {
            path: path.clone(),
            source,
        })?;

        info!(
            "Wrote report with {} entries to {}",
            aggregate.len(),
            path.display()
        );
        Ok(path)
    }
}
