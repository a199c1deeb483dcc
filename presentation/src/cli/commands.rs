//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for model-shootout
#[derive(Parser, Debug)]
#[command(name = "model-shootout")]
#[command(author, version, about = "Ask several LLMs the same question and collect their answers")]
#[command(long_about = r#"
Model Shootout sends one system/user prompt pair to every model listed in the
configuration file and writes all answers into a single timestamped JSON report.

Models run concurrently unless marked `async = false` (or
`execution_mode = "sequential"`), in which case they run one at a time, in
file order, before the concurrent batch. A failing model never stops the others.

Configuration is read from (first match):
1. --config <path>
2. ./model_config.toml
3. ~/.config/model-shootout/config.toml

Example:
  model-shootout
  model-shootout --config shootouts/rust.toml --results-dir out
  model-shootout --strict --task-timeout 120 -v
"#)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory for the JSON report (overrides [output] results_dir)
    #[arg(long, value_name = "DIR")]
    pub results_dir: Option<PathBuf>,

    /// Fail if two models share a name instead of keeping the last result
    #[arg(long)]
    pub strict: bool,

    /// Per-model deadline in seconds
    #[arg(long, value_name = "SECS")]
    pub task_timeout: Option<u64>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress and summary output
    #[arg(short, long)]
    pub quiet: bool,

    /// Plain line-based progress instead of progress bars
    #[arg(long)]
    pub plain: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print the report JSON to stdout after writing it
    #[arg(long)]
    pub print_json: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["model-shootout"]).unwrap();
        assert!(cli.config.is_none());
        assert!(!cli.strict);
        assert_eq!(cli.verbose, 0);
        assert!(cli.task_timeout.is_none());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "model-shootout",
            "--config",
            "c.toml",
            "--results-dir",
            "out",
            "--strict",
            "--task-timeout",
            "30",
            "-vv",
            "--plain",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("c.toml")));
        assert_eq!(cli.results_dir, Some(PathBuf::from("out")));
        assert!(cli.strict);
        assert_eq!(cli.task_timeout, Some(30));
        assert_eq!(cli.verbose, 2);
        assert!(cli.plain);
    }
}
