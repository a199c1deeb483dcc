//! Progress reporting for shootout execution

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use shootout_application::ProgressNotifier;
use shootout_domain::ExecutionMode;
use std::sync::Mutex;

/// Reports progress with one progress bar per execution regime
pub struct ProgressReporter {
    multi: MultiProgress,
    regime_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            regime_bar: Mutex::new(None),
        }
    }

    fn regime_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn regime_display_name(mode: ExecutionMode) -> &'static str {
        match mode {
            ExecutionMode::Sequential => "Sequential backends",
            ExecutionMode::Concurrent => "Concurrent backends",
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_regime_start(&self, mode: ExecutionMode, total_tasks: usize) {
        let pb = self.multi.add(ProgressBar::new(total_tasks as u64));
        pb.set_style(Self::regime_style());
        pb.set_prefix(Self::regime_display_name(mode));
        pb.set_message("Starting...");

        if let Ok(mut slot) = self.regime_bar.lock() {
            *slot = Some(pb);
        }
    }

    fn on_task_start(&self, backend_name: &str, _mode: ExecutionMode) {
        if let Ok(slot) = self.regime_bar.lock()
            && let Some(pb) = slot.as_ref()
        {
            pb.set_message(format!("Querying {}...", backend_name));
        }
    }

    fn on_task_complete(&self, backend_name: &str, _mode: ExecutionMode, error: Option<&str>) {
        if let Ok(slot) = self.regime_bar.lock()
            && let Some(pb) = slot.as_ref()
        {
            match error {
                None => pb.set_message(format!("{} {}", "v".green(), backend_name)),
                Some(err) => {
                    pb.println(format!(
                        "  {} Error querying {}: {}",
                        "x".red(),
                        backend_name,
                        err
                    ));
                    pb.set_message(format!("{} {}", "x".red(), backend_name));
                }
            }
            pb.inc(1);
        }
    }

    fn on_regime_complete(&self, mode: ExecutionMode) {
        if let Ok(mut slot) = self.regime_bar.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_with_message(format!("{} done", mode.as_str().green()));
        }
    }
}

/// Line-based progress for logs and non-interactive terminals
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_regime_start(&self, mode: ExecutionMode, total_tasks: usize) {
        println!(
            "{} {} ({} tasks)",
            "->".cyan(),
            ProgressReporter::regime_display_name(mode).bold(),
            total_tasks
        );
    }

    fn on_task_start(&self, backend_name: &str, _mode: ExecutionMode) {
        println!("  Querying {}...", backend_name);
    }

    fn on_task_complete(&self, backend_name: &str, _mode: ExecutionMode, error: Option<&str>) {
        match error {
            None => println!("  {} {}", "v".green(), backend_name),
            Some(err) => eprintln!("  {} Error querying {}: {}", "x".red(), backend_name, err),
        }
    }

    fn on_regime_complete(&self, _mode: ExecutionMode) {
        println!();
    }
}
