//! Concurrent execution: every backend at once, joined before returning.

use super::{ExecutionStrategy, notify_complete, run_task};
use crate::ports::model_capability::ModelCapability;
use crate::ports::progress::ProgressNotifier;
use async_trait::async_trait;
use shootout_domain::{ExecutionMode, TaskDescriptor, TaskResult};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tracing::{debug, info};

/// Launches all tasks together and waits for every one of them.
///
/// Results come back in input order regardless of completion order. There
/// is no cap on the number of calls in flight.
pub struct ConcurrentPool {
    capability: Arc<dyn ModelCapability>,
    task_timeout: Option<Duration>,
}

impl ConcurrentPool {
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
impl ExecutionStrategy for ConcurrentPool {
    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Concurrent
    }

    async fn execute(
        &self,
        tasks: Vec<TaskDescriptor>,
        progress: &dyn ProgressNotifier,
    ) -> Vec<TaskResult> {
        if tasks.is_empty() {
            debug!("No concurrent tasks");
            return Vec::new();
        }

        info!("Launching {} concurrent tasks", tasks.len());
        progress.on_regime_start(ExecutionMode::Concurrent, tasks.len());

        let mut join_set = JoinSet::new();

        for (index, task) in tasks.iter().enumerate() {
            progress.on_task_start(task.backend_name(), ExecutionMode::Concurrent);

            let capability = Arc::clone(&self.capability);
            let task = task.clone();
            let timeout = self.task_timeout;

            join_set.spawn(async move {
                let result = run_task(capability.as_ref(), &task, timeout).await;
                (index, result)
            });
        }

        let mut slots: Vec<Option<TaskResult>> = tasks.iter().map(|_| None).collect();

        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, result)) => {
                    notify_complete(progress, &result);
                    slots[index] = Some(result);
                }
                Err(e) => {
                    // The slot is filled below once every task has been joined.
                    debug!("Task join error: {}", e);
                }
            }
        }

        let results = slots
            .into_iter()
            .zip(&tasks)
            .map(|(slot, task)| {
                slot.unwrap_or_else(|| {
                    let result = TaskResult::failure(task, "task aborted before completing");
                    notify_complete(progress, &result);
                    result
                })
            })
            .collect();

        progress.on_regime_complete(ExecutionMode::Concurrent);
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::progress::NoProgress;
    use crate::testing::{RecordingProgress, ScriptedCapability, tasks};
    use std::time::{Duration, Instant};

    #[tokio::test]
    async fn test_wall_clock_is_slowest_call() {
        let capability = Arc::new(
            ScriptedCapability::new()
                .delayed("fast", Duration::from_millis(300), "f")
                .delayed("slow", Duration::from_millis(600), "s"),
        );
        let pool = ConcurrentPool::new(capability.clone());

        let started = Instant::now();
        let results = pool
            .execute(tasks(&["fast", "slow"], ExecutionMode::Concurrent), &NoProgress)
            .await;
        let elapsed = started.elapsed();

        assert_eq!(results.len(), 2);
        // Sequential execution would need at least 900ms
        assert!(elapsed >= Duration::from_millis(600));
        assert!(elapsed < Duration::from_millis(900), "took {:?}", elapsed);
        assert_eq!(capability.max_in_flight(), 2);
    }

    #[tokio::test]
    async fn test_results_follow_input_order() {
        let capability = Arc::new(
            ScriptedCapability::new()
                .delayed("a", Duration::from_millis(60), "ra")
                .delayed("b", Duration::from_millis(30), "rb")
                .reply("c", "rc"),
        );
        let pool = ConcurrentPool::new(capability.clone());

        let results = pool
            .execute(tasks(&["a", "b", "c"], ExecutionMode::Concurrent), &NoProgress)
            .await;

        let names: Vec<_> = results.iter().map(|r| r.backend_name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(capability.finished(), vec!["c", "b", "a"]);
        assert_eq!(results[0].outcome().unwrap().response, "ra");
    }

    #[tokio::test]
    async fn test_failure_is_isolated() {
        let capability = Arc::new(
            ScriptedCapability::new()
                .reply("ok-1", "one")
                .fail("broken", "connection refused")
                .delayed("ok-2", Duration::from_millis(20), "two"),
        );
        let pool = ConcurrentPool::new(capability);

        let results = pool
            .execute(
                tasks(&["ok-1", "broken", "ok-2"], ExecutionMode::Concurrent),
                &NoProgress,
            )
            .await;

        assert!(results[0].is_success());
        assert!(!results[1].is_success());
        assert!(results[2].is_success());
    }

    #[tokio::test]
    async fn test_panicking_task_becomes_failure() {
        let capability = Arc::new(
            ScriptedCapability::new()
                .panic("explodes")
                .reply("fine", "ok"),
        );
        let pool = ConcurrentPool::new(capability);
        let progress = RecordingProgress::default();

        let results = pool
            .execute(tasks(&["explodes", "fine"], ExecutionMode::Concurrent), &progress)
            .await;

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].backend_name, "explodes");
        assert!(!results[0].is_success());
        assert!(results[1].is_success());
        assert_eq!(progress.completed().len(), 2);
    }

    #[tokio::test]
    async fn test_task_timeout_fails_only_slow_task() {
        let capability = Arc::new(
            ScriptedCapability::new()
                .delayed("hangs", Duration::from_secs(5), "never")
                .reply("quick", "ok"),
        );
        let pool =
            ConcurrentPool::new(capability).with_task_timeout(Some(Duration::from_millis(50)));

        let started = Instant::now();
        let results = pool
            .execute(tasks(&["hangs", "quick"], ExecutionMode::Concurrent), &NoProgress)
            .await;

        assert!(started.elapsed() < Duration::from_secs(2));
        assert!(results[0].outcome.as_ref().unwrap_err().contains("Timed out"));
        assert!(results[1].is_success());
    }

    #[tokio::test]
    async fn test_progress_sees_every_task() {
        let capability = Arc::new(ScriptedCapability::new().reply("a", "1").fail("b", "x"));
        let pool = ConcurrentPool::new(capability);
        let progress = RecordingProgress::default();

        pool.execute(tasks(&["a", "b"], ExecutionMode::Concurrent), &progress)
            .await;

        assert_eq!(progress.started(), vec!["a", "b"]);
        let mut completed = progress.completed();
        completed.sort();
        assert_eq!(
            completed,
            vec![("a".to_string(), true), ("b".to_string(), false)]
        );
    }
}
