//! CLI entrypoint for Model Shootout
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use shootout_application::{
    ModelCapability, NoProgress, ProgressNotifier, RunShootoutInput, RunShootoutUseCase,
};
use shootout_domain::ConfigIssue;
use shootout_infrastructure::{
    ConfigError, ConfigLoader, FileConfig, JsonReportWriter, RoutingCapability,
};
use shootout_presentation::{Cli, ConsoleFormatter, ProgressReporter, SimpleProgress};
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Held until exit so buffered file logs are flushed
    let _log_guard = init_tracing(cli.verbose, cli.log_file.as_deref())?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    info!("Starting Model Shootout");

    let mut config = ConfigLoader::load(cli.config.as_deref())?;
    apply_cli_overrides(&mut config, &cli);

    if !config.output.color || cli.no_color {
        colored::control::set_override(false);
    }

    // Nothing is queried unless the whole file is valid
    check_issues(&config.validate())?;

    // === Dependency Injection ===
    let capability: Arc<dyn ModelCapability> =
        Arc::new(RoutingCapability::from_config(&config.providers));
    let use_case = RunShootoutUseCase::new(capability);

    let input = RunShootoutInput::new(config.prompts(), config.backend_entries())
        .with_params(config.execution_params());

    let progress: Box<dyn ProgressNotifier> = if cli.quiet {
        Box::new(NoProgress)
    } else if cli.plain || !std::io::stderr().is_terminal() {
        Box::new(SimpleProgress)
    } else {
        Box::new(ProgressReporter::new())
    };

    let run = use_case
        .execute_with_progress(input, progress.as_ref())
        .await?;

    let writer = JsonReportWriter::new(&config.output.results_dir);
    let report_path = writer.write(&run.aggregate).with_context(|| {
        format!(
            "failed to write report to {}",
            writer.results_dir().display()
        )
    })?;

    debug!("Report path: {}", report_path.display());

    if cli.quiet {
        println!("Results written to {}", report_path.display());
    } else {
        println!("{}", ConsoleFormatter::format(&run, Some(&report_path)));
    }

    if cli.print_json {
        println!("{}", ConsoleFormatter::format_json(&run.aggregate));
    }

    Ok(())
}

/// Log warnings and fail on any error-severity issue, one issue per line
fn check_issues(issues: &[ConfigIssue]) -> Result<(), ConfigError> {
    for issue in issues.iter().filter(|i| !i.is_error()) {
        warn!("{}", issue.message);
    }

    let errors: Vec<&str> = issues
        .iter()
        .filter(|i| i.is_error())
        .map(|i| i.message.as_str())
        .collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::Invalid(errors.join("\n")))
    }
}

/// Flags given on the command line win over the file and the environment
fn apply_cli_overrides(config: &mut FileConfig, cli: &Cli) {
    if let Some(dir) = &cli.results_dir {
        config.output.results_dir = dir.clone();
    }
    if cli.strict {
        config.execution.strict_names = true;
    }
    if let Some(secs) = cli.task_timeout {
        config.execution.task_timeout_secs = Some(secs);
    }
}

fn init_tracing(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match std::env::var("RUST_LOG") {
        Ok(v) if !v.trim().is_empty() => EnvFilter::from_default_env(),
        _ => match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        },
    };

    let mut guard = None;
    let file_layer = match log_file {
        Some(path) => {
            let file_name = path
                .file_name()
                .context("--log-file must name a file")?;
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create log directory {}", dir.display()))?;

            let appender = tracing_appender::rolling::never(dir, file_name);
            let (non_blocking, worker_guard) = tracing_appender::non_blocking(appender);
            guard = Some(worker_guard);
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(non_blocking)
                    .with_ansi(false),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(file_layer)
        .init();

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shootout_domain::ConfigIssueCode;
    use std::path::PathBuf;

    #[test]
    fn test_cli_flags_override_file_settings() {
        let mut config = FileConfig::default();
        config.execution.task_timeout_secs = Some(60);
        let cli = Cli::try_parse_from([
            "model-shootout",
            "--results-dir",
            "out",
            "--strict",
            "--task-timeout",
            "5",
        ])
        .unwrap();

        apply_cli_overrides(&mut config, &cli);

        assert_eq!(config.output.results_dir, PathBuf::from("out"));
        assert!(config.execution.strict_names);
        assert_eq!(config.execution.task_timeout_secs, Some(5));
    }

    #[test]
    fn test_absent_flags_keep_file_settings() {
        let mut config = FileConfig::default();
        config.output.results_dir = PathBuf::from("shootouts");
        config.execution.strict_names = true;
        config.execution.task_timeout_secs = Some(60);
        let cli = Cli::try_parse_from(["model-shootout"]).unwrap();

        apply_cli_overrides(&mut config, &cli);

        assert_eq!(config.output.results_dir, PathBuf::from("shootouts"));
        assert!(config.execution.strict_names);
        assert_eq!(config.execution.task_timeout_secs, Some(60));
    }

    #[test]
    fn test_check_issues_lists_each_error_on_its_own_line() {
        let issues = vec![
            ConfigIssue::error(
                ConfigIssueCode::MissingField {
                    index: 0,
                    field: "api_key".to_string(),
                },
                "models[0].api_key: required field is missing or empty",
            ),
            ConfigIssue::warning(
                ConfigIssueCode::DuplicateModel {
                    name: "gpt-4o".to_string(),
                },
                "model 'gpt-4o' is configured more than once",
            ),
            ConfigIssue::error(
                ConfigIssueCode::InvalidExecutionMode {
                    index: 1,
                    value: "later".to_string(),
                },
                "models[1].execution_mode: unknown value 'later'",
            ),
        ];

        let err = check_issues(&issues).unwrap_err();
        let ConfigError::Invalid(message) = err else {
            panic!("expected Invalid, got {:?}", err);
        };
        assert_eq!(
            message,
            "models[0].api_key: required field is missing or empty\n\
             models[1].execution_mode: unknown value 'later'"
        );
    }

    #[test]
    fn test_warnings_alone_pass() {
        let issues = vec![ConfigIssue::warning(
            ConfigIssueCode::ConflictingMode { index: 0 },
            "models[0]: `async` and `execution_mode` disagree",
        )];
        assert!(check_issues(&issues).is_ok());
    }
}
