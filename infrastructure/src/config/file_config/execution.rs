//! Execution settings from TOML (`[execution]` section)

use serde::{Deserialize, Serialize};
use shootout_application::ExecutionParams;
use std::time::Duration;

/// Raw execution configuration from TOML
///
/// # Example
///
/// ```toml
/// [execution]
/// strict_names = true      # reject duplicate model names
/// task_timeout_secs = 120  # per-call deadline
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileExecutionConfig {
    pub strict_names: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_timeout_secs: Option<u64>,
}

impl FileExecutionConfig {
    pub fn to_params(&self) -> ExecutionParams {
        ExecutionParams::default()
            .with_strict_names(self.strict_names)
            .with_task_timeout(self.task_timeout_secs.map(Duration::from_secs))
    }
}
