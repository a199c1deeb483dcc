//! Outcome value objects - what a single task produced.

use super::task::{ExecutionMode, TaskDescriptor};
use serde::{Deserialize, Serialize};

/// Successful answer from one backend, as it appears in the report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOutcome {
    /// The effective system prompt actually sent
    pub system_prompt_used: String,
    pub user_prompt_used: String,
    pub response: String,
}

impl QueryOutcome {
    /// Record a response against the prompts the task really sent
    pub fn from_task(task: &TaskDescriptor, response: impl Into<String>) -> Self {
        Self {
            system_prompt_used: task.effective_system_prompt().to_string(),
            user_prompt_used: task.user_prompt().to_string(),
            response: response.into(),
        }
    }
}

/// A backend call that did not produce an outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFailure {
    pub backend_name: String,
    pub mode: ExecutionMode,
    pub error: String,
}

/// Result of running one task, tagged with the backend it belongs to
#[derive(Debug, Clone)]
pub struct TaskResult {
    pub backend_name: String,
    pub mode: ExecutionMode,
    pub outcome: Result<QueryOutcome, String>,
}

impl TaskResult {
    pub fn success(task: &TaskDescriptor, response: impl Into<String>) -> Self {
        Self {
            backend_name: task.backend_name().to_string(),
            mode: task.execution_mode(),
            outcome: Ok(QueryOutcome::from_task(task, response)),
        }
    }

    pub fn failure(task: &TaskDescriptor, error: impl Into<String>) -> Self {
        Self {
            backend_name: task.backend_name().to_string(),
            mode: task.execution_mode(),
            outcome: Err(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// The outcome, or `None` when the call failed
    pub fn outcome(&self) -> Option<&QueryOutcome> {
        self.outcome.as_ref().ok()
    }

    /// Split into either the successful outcome or a failure record
    pub fn into_parts(self) -> (String, Result<QueryOutcome, TaskFailure>) {
        let outcome = self.outcome.map_err(|error| TaskFailure {
            backend_name: self.backend_name.clone(),
            mode: self.mode,
            error,
        });
        (self.backend_name, outcome)
    }
}
