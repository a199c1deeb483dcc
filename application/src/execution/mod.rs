//! Execution strategies
//!
//! Two ways of running a list of [`TaskDescriptor`]s behind one contract:
//!
//! - [`SequentialRunner`]: one call in flight, strictly in input order
//! - [`ConcurrentPool`]: every call in flight at once, full join
//!
//! Both isolate failures per task and return exactly one [`TaskResult`] per
//! input descriptor, in input order.

mod concurrent;
mod sequential;

pub use concurrent::ConcurrentPool;
pub use sequential::SequentialRunner;

use crate::ports::model_capability::{CapabilityError, ModelCapability, ModelRequest};
use crate::ports::progress::ProgressNotifier;
use async_trait::async_trait;
use shootout_domain::{ExecutionMode, TaskDescriptor, TaskResult};
use std::time::Duration;
use tracing::{debug, info, warn};

/// A way of executing a batch of tasks
#[async_trait]
pub trait ExecutionStrategy: Send + Sync {
    /// The execution mode this strategy serves
    fn mode(&self) -> ExecutionMode;

    /// Run every task to completion (success or failure).
    ///
    /// Never fails as a whole: each task's failure is captured in its own
    /// [`TaskResult`].
    async fn execute(
        &self,
        tasks: Vec<TaskDescriptor>,
        progress: &dyn ProgressNotifier,
    ) -> Vec<TaskResult>;
}

/// Query one backend and turn whatever happens into a [`TaskResult`]
pub(crate) async fn run_task(
    capability: &dyn ModelCapability,
    task: &TaskDescriptor,
    timeout: Option<Duration>,
) -> TaskResult {
    info!("Querying {}...", task.backend_name());

    let request = ModelRequest::from_task(task);
    let response = match timeout {
        Some(limit) => match tokio::time::timeout(limit, capability.invoke(&request)).await {
            Ok(result) => result,
            Err(_) => Err(CapabilityError::Timeout(limit)),
        },
        None => capability.invoke(&request).await,
    };

    match response {
        Ok(text) => {
            info!("Model {} responded successfully", task.backend_name());
            TaskResult::success(task, text)
        }
        Err(e) => {
            debug!("Backend {} failed: {}", task.backend_name(), e);
            TaskResult::failure(task, e.to_string())
        }
    }
}

/// Forward a finished task to the notifier.
///
/// Failures are logged here only when the notifier does not show them itself,
/// so each failure produces exactly one diagnostic line.
fn notify_complete(progress: &dyn ProgressNotifier, result: &TaskResult) {
    let error = result.outcome.as_ref().err().map(String::as_str);
    if let Some(err) = error
        && !progress.reports_failures()
    {
        warn!("Error querying {}: {}", result.backend_name, err);
    }
    progress.on_task_complete(&result.backend_name, result.mode, error);
}
