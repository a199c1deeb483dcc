//! Task dispatch - turns configured backend entries into per-mode task lists.

use super::task::{BackendEntry, ExecutionMode, TaskDescriptor};
use crate::core::error::DomainError;
use crate::core::prompt::PromptPair;
use std::collections::HashSet;

/// Descriptors split by execution mode, both lists in configured order.
#[derive(Debug, Clone, Default)]
pub struct DispatchPlan {
    pub sequential: Vec<TaskDescriptor>,
    pub concurrent: Vec<TaskDescriptor>,
}

impl DispatchPlan {
    /// Build one descriptor per entry and partition them by mode.
    ///
    /// Fails on the first entry lacking a backend name or credential, before
    /// any descriptor is handed out. An empty entry list is also an error.
    pub fn build(entries: &[BackendEntry], prompts: &PromptPair) -> Result<Self, DomainError> {
        if entries.is_empty() {
            return Err(DomainError::NoBackends);
        }

        let mut plan = DispatchPlan::default();

        for (index, entry) in entries.iter().enumerate() {
            let backend_name = required(entry.backend_name.as_deref(), index, "model_name")?;
            let credential = required(entry.credential.as_deref(), index, "api_key")?;

            let task = TaskDescriptor::new(
                backend_name,
                credential,
                prompts,
                entry.additional_system_prompt.clone().unwrap_or_default(),
                entry.execution_mode,
            );

            match entry.execution_mode {
                ExecutionMode::Sequential => plan.sequential.push(task),
                ExecutionMode::Concurrent => plan.concurrent.push(task),
            }
        }

        Ok(plan)
    }

    /// Reject plans where two tasks share a backend name.
    ///
    /// Without this check duplicates are allowed and the later merge wins.
    pub fn ensure_unique_names(self) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        for task in self.tasks() {
            if !seen.insert(task.backend_name()) {
                return Err(DomainError::DuplicateBackend(task.backend_name().to_string()));
            }
        }
        Ok(self)
    }

    /// All descriptors, sequential first
    pub fn tasks(&self) -> impl Iterator<Item = &TaskDescriptor> {
        self.sequential.iter().chain(self.concurrent.iter())
    }
}

fn required<'a>(
    value: Option<&'a str>,
    index: usize,
    field: &'static str,
) -> Result<&'a str, DomainError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(DomainError::MissingField { index, field }),
    }
}
