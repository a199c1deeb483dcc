//! Console output formatter for shootout results

use colored::Colorize;
use shootout_domain::{BatchAggregate, ShootoutRun};
use std::path::Path;

/// Formats shootout results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Every response, followed by the failures and the report location
    pub fn format(run: &ShootoutRun, report_path: Option<&Path>) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Model Shootout Results"));
        output.push('\n');

        output.push_str(&Self::section_header("Responses"));
        if run.aggregate.is_empty() {
            output.push_str(&format!("\n{}\n", "(no backend responded)".dimmed()));
        }
        for (name, outcome) in run.aggregate.iter() {
            output.push_str(&format!(
                "\n{}\n{}\n",
                format!("── {} ──", name).yellow().bold(),
                outcome.response
            ));
        }

        output.push_str(&Self::format_failures(run));
        output.push('\n');
        output.push_str(&Self::format_summary(run, report_path));
        output.push_str(&Self::footer());

        output
    }

    /// One status line per run, plus the report path when one was written
    pub fn format_summary(run: &ShootoutRun, report_path: Option<&Path>) -> String {
        let counts = format!("{}/{} backends responded", run.succeeded(), run.attempted);
        let mut output = if run.all_failed() {
            format!("{} {}\n", "x".red(), counts.red().bold())
        } else if run.failures.is_empty() {
            format!("{} {}\n", "v".green(), counts.green().bold())
        } else {
            format!("{} {}\n", "!".yellow(), counts.yellow().bold())
        };

        if let Some(path) = report_path {
            output.push_str(&format!(
                "{} {}\n",
                "Results written to".cyan(),
                path.display()
            ));
        }

        output
    }

    /// The report body as pretty JSON
    pub fn format_json(aggregate: &BatchAggregate) -> String {
        serde_json::to_string_pretty(aggregate).unwrap_or_else(|_| "{}".to_string())
    }

    fn format_failures(run: &ShootoutRun) -> String {
        if run.failures.is_empty() {
            return String::new();
        }

        let mut output = Self::section_header("Failures");
        for failure in &run.failures {
            output.push_str(&format!(
                "  {} {} ({}): {}\n",
                "x".red(),
                failure.backend_name.red().bold(),
                failure.mode,
                failure.error
            ));
        }
        output
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("{}\n", "=".repeat(60).cyan())
    }
}
