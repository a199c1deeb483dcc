//! Execution parameters: per-run control knobs.
//!
//! [`ExecutionParams`] groups the static parameters that tune how
//! [`RunShootoutUseCase`](crate::use_cases::run_shootout::RunShootoutUseCase)
//! dispatches and runs tasks. These are application-layer concerns, not domain policy.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Run control parameters.
///
/// Defaults reproduce the plain behavior: duplicate backend names overwrite
/// each other and no call has a deadline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionParams {
    /// Reject duplicate backend names before any query runs.
    pub strict_names: bool,
    /// Deadline for each individual backend call. There is never a batch deadline.
    pub task_timeout: Option<Duration>,
}

impl ExecutionParams {
    pub fn with_strict_names(mut self, strict: bool) -> Self {
        self.strict_names = strict;
        self
    }

    pub fn with_task_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.task_timeout = timeout;
        self
    }
}
