//! Result aggregation - merges both execution regimes into one keyed result.

use super::outcome::{QueryOutcome, TaskFailure, TaskResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from backend name to its successful outcome.
///
/// Serializes as a bare JSON object, which is the report format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BatchAggregate {
    entries: BTreeMap<String, QueryOutcome>,
}

impl BatchAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the outcome for a backend
    pub fn insert(&mut self, backend_name: impl Into<String>, outcome: QueryOutcome) {
        self.entries.insert(backend_name.into(), outcome);
    }

    pub fn get(&self, backend_name: &str) -> Option<&QueryOutcome> {
        self.entries.get(backend_name)
    }

    pub fn contains(&self, backend_name: &str) -> bool {
        self.entries.contains_key(backend_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryOutcome)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Everything one run produced
#[derive(Debug, Clone, Default)]
pub struct ShootoutRun {
    /// Successful outcomes keyed by backend name
    pub aggregate: BatchAggregate,
    /// Failed tasks, sequential first, then concurrent in input order
    pub failures: Vec<TaskFailure>,
    /// Number of tasks that were executed
    pub attempted: usize,
}

impl ShootoutRun {
    /// Merge sequential and concurrent results.
    ///
    /// Sequential outcomes form the base layer; concurrent outcomes are laid
    /// over them, so on a shared backend name the concurrent one is kept.
    /// Failed tasks contribute nothing to the aggregate.
    pub fn merge(sequential: Vec<TaskResult>, concurrent: Vec<TaskResult>) -> Self {
        let mut run = ShootoutRun {
            attempted: sequential.len() + concurrent.len(),
            ..Default::default()
        };

        for result in sequential.into_iter().chain(concurrent) {
            match result.into_parts() {
                (name, Ok(outcome)) => run.aggregate.insert(name, outcome),
                (_, Err(failure)) => run.failures.push(failure),
            }
        }

        run
    }

    pub fn succeeded(&self) -> usize {
        self.aggregate.len()
    }

    pub fn all_failed(&self) -> bool {
        self.attempted > 0 && self.aggregate.is_empty()
    }
}
