//! Run Shootout use case
//!
//! Orchestrates one shootout: dispatch, sequential pass, concurrent pass,
//! aggregation.

use crate::config::ExecutionParams;
use crate::execution::{ConcurrentPool, ExecutionStrategy, SequentialRunner};
use crate::ports::model_capability::ModelCapability;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use shootout_domain::{
    BackendEntry, DispatchPlan, DomainError, PromptPair, ShootoutRun, TaskDescriptor, TaskResult,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur before a shootout starts querying
///
/// Backend failures are never reported here; they end up in
/// [`ShootoutRun::failures`].
#[derive(Error, Debug)]
pub enum RunShootoutError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] DomainError),
}

/// Input for the RunShootout use case
#[derive(Debug, Clone)]
pub struct RunShootoutInput {
    /// Prompt pair shared by every backend
    pub prompts: PromptPair,
    /// Configured backends, in configuration order
    pub backends: Vec<BackendEntry>,
    pub params: ExecutionParams,
}

impl RunShootoutInput {
    pub fn new(prompts: PromptPair, backends: Vec<BackendEntry>) -> Self {
        Self {
            prompts,
            backends,
            params: ExecutionParams::default(),
        }
    }

    pub fn with_params(mut self, params: ExecutionParams) -> Self {
        self.params = params;
        self
    }
}

/// Use case for running a shootout
pub struct RunShootoutUseCase {
    capability: Arc<dyn ModelCapability>,
}

impl RunShootoutUseCase {
    pub fn new(capability: Arc<dyn ModelCapability>) -> Self {
        Self { capability }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: RunShootoutInput) -> Result<ShootoutRun, RunShootoutError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    ///
    /// Sequential tasks run first, one by one; then all concurrent tasks run
    /// together. Only configuration problems fail the run.
    pub async fn execute_with_progress(
        &self,
        input: RunShootoutInput,
        progress: &dyn ProgressNotifier,
    ) -> Result<ShootoutRun, RunShootoutError> {
        let mut plan = DispatchPlan::build(&input.backends, &input.prompts)?;
        if input.params.strict_names {
            plan = plan.ensure_unique_names()?;
        }

        info!(
            "Starting shootout with {} backends ({} sequential, {} concurrent)",
            plan.tasks().count(),
            plan.sequential.len(),
            plan.concurrent.len()
        );

        let timeout = input.params.task_timeout;
        let sequential = SequentialRunner::new(Arc::clone(&self.capability))
            .with_task_timeout(timeout);
        let concurrent = ConcurrentPool::new(Arc::clone(&self.capability))
            .with_task_timeout(timeout);

        let sequential_results = Self::run_regime(&sequential, plan.sequential, progress).await;
        let concurrent_results = Self::run_regime(&concurrent, plan.concurrent, progress).await;

        let run = ShootoutRun::merge(sequential_results, concurrent_results);

        if run.all_failed() {
            warn!("All {} backends failed to respond", run.attempted);
        } else {
            info!(
                "Shootout finished: {}/{} backends responded",
                run.succeeded(),
                run.attempted
            );
        }

        Ok(run)
    }

    async fn run_regime(
        strategy: &dyn ExecutionStrategy,
        tasks: Vec<TaskDescriptor>,
        progress: &dyn ProgressNotifier,
    ) -> Vec<TaskResult> {
        info!("Running {} {} tasks", tasks.len(), strategy.mode());
        strategy.execute(tasks, progress).await
    }
}
