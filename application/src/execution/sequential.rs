//! Sequential execution: one backend at a time, in configured order.

use super::{ExecutionStrategy, notify_complete, run_task};
use crate::ports::model_capability::ModelCapability;
use crate::ports::progress::ProgressNotifier;
use async_trait::async_trait;
use shootout_domain::{ExecutionMode, TaskDescriptor, TaskResult};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Runs tasks strictly one after another.
///
/// The next call is not started until the previous one has returned,
/// whatever its outcome.
pub struct SequentialRunner {
    capability: Arc<dyn ModelCapability>,
    task_timeout: Option<Duration>,
}

impl SequentialRunner {
    pub fn new(capability: Arc<dyn ModelCapability>) -> Self {
        Self {
            capability,
            task_timeout: None,
        }
    }

    pub fn with_task_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.task_timeout = timeout;
        self
    }
}

#[async_trait]
impl ExecutionStrategy for SequentialRunner {
    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }

    async fn execute(
        &self,
        tasks: Vec<TaskDescriptor>,
        progress: &dyn ProgressNotifier,
    ) -> Vec<TaskResult> {
        if tasks.is_empty() {
            debug!("No sequential tasks");
            return Vec::new();
        }

        progress.on_regime_start(ExecutionMode::Sequential, tasks.len());

        let mut results = Vec::with_capacity(tasks.len());
        for task in &tasks {
            progress.on_task_start(task.backend_name(), ExecutionMode::Sequential);
            let result = run_task(self.capability.as_ref(), task, self.task_timeout).await;
            notify_complete(progress, &result);
            results.push(result);
        }

        progress.on_regime_complete(ExecutionMode::Sequential);
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use crate::testing::{ScriptedCapability, tasks};
    use std::time::Duration;

    #[tokio::test]
    async fn test_runs_in_configured_order() {
        // Later tasks are faster; order must still follow the input.
        let capability = Arc::new(
            ScriptedCapability::new()
                .delayed("first", Duration::from_millis(60), "1")
                .delayed("second", Duration::from_millis(30), "2")
                .reply("third", "3"),
        );
        let runner = SequentialRunner::new(capability.clone());

        let results = runner
            .execute(
                tasks(&["first", "second", "third"], ExecutionMode::Sequential),
                &NoProgress,
            )
            .await;

        assert_eq!(capability.started(), vec!["first", "second", "third"]);
        assert_eq!(capability.finished(), vec!["first", "second", "third"]);
        let names: Vec<_> = results.iter().map(|r| r.backend_name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn test_failure_does_not_stop_later_tasks() {
        let capability = Arc::new(
            ScriptedCapability::new()
                .reply("a", "ok-a")
                .fail("b", "invalid api key")
                .reply("c", "ok-c"),
        );
        let runner = SequentialRunner::new(capability.clone());

        let results = runner
            .execute(tasks(&["a", "b", "c"], ExecutionMode::Sequential), &NoProgress)
            .await;

        assert_eq!(results.len(), 3);
        assert!(results[0].is_success());
        assert!(!results[1].is_success());
        assert!(results[1].outcome.as_ref().unwrap_err().contains("invalid api key"));
        assert_eq!(results[2].outcome().unwrap().response, "ok-c");
    }

    #[tokio::test]
    async fn test_one_call_in_flight() {
        let capability = Arc::new(
            ScriptedCapability::new()
                .delayed("a", Duration::from_millis(20), "a")
                .delayed("b", Duration::from_millis(20), "b"),
        );
        let runner = SequentialRunner::new(capability.clone());

        runner
            .execute(tasks(&["a", "b"], ExecutionMode::Sequential), &NoProgress)
            .await;

        assert_eq!(capability.max_in_flight(), 1);
    }

    #[tokio::test]
    async fn test_empty_list_makes_no_calls() {
        let capability = Arc::new(ScriptedCapability::new());
        let runner = SequentialRunner::new(capability.clone());

        let results = runner.execute(Vec::new(), &NoProgress).await;

        assert!(results.is_empty());
        assert_eq!(capability.call_count(), 0);
    }
}
