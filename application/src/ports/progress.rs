//! Progress notification port
//!
//! Defines the interface for reporting progress during a shootout run.

use shootout_domain::ExecutionMode;

/// Callback for progress updates during a shootout run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bars, plain lines, ...).
/// All callbacks are invoked from the orchestrating task, never from inside
/// a spawned backend call.
pub trait ProgressNotifier: Send + Sync {
    /// Called when an execution regime starts with a non-empty task list
    fn on_regime_start(&self, mode: ExecutionMode, total_tasks: usize);

    /// Called right before a backend is queried
    fn on_task_start(&self, _backend_name: &str, _mode: ExecutionMode) {}

    /// Called when a backend call finished; `error` is `None` on success
    fn on_task_complete(&self, backend_name: &str, mode: ExecutionMode, error: Option<&str>);

    /// Called when every task of a regime has finished
    fn on_regime_complete(&self, mode: ExecutionMode);

    /// Whether `on_task_complete` shows failures to the user.
    ///
    /// When `false`, the executors log each failure through `tracing` instead.
    fn reports_failures(&self) -> bool {
        true
    }
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_regime_start(&self, _mode: ExecutionMode, _total_tasks: usize) {}
    fn on_task_complete(&self, _backend_name: &str, _mode: ExecutionMode, _error: Option<&str>) {}
    fn on_regime_complete(&self, _mode: ExecutionMode) {}

    fn reports_failures(&self) -> bool {
        false
    }
}
