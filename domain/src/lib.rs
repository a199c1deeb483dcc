//! Domain layer for model-shootout
//!
//! This crate contains the core types and pure logic of a shootout run.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Task Descriptor**: one query against one backend, immutable once built
//! - **Dispatch Plan**: descriptors split into a sequential and a concurrent list
//! - **Batch Aggregate**: successful outcomes keyed by backend name

pub mod config;
pub mod core;
pub mod shootout;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, Severity};
pub use core::{credential::Credential, error::DomainError, prompt::PromptPair};
pub use shootout::{
    aggregate::{BatchAggregate, ShootoutRun},
    dispatch::DispatchPlan,
    outcome::{QueryOutcome, TaskFailure, TaskResult},
    task::{BackendEntry, ExecutionMode, TaskDescriptor},
};
