//! Application layer for model-shootout
//!
//! This crate contains the execution strategies, the shootout use case and
//! port definitions. It depends only on the domain layer.

pub mod config;
pub mod execution;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use config::ExecutionParams;
pub use execution::{ConcurrentPool, ExecutionStrategy, SequentialRunner};
pub use ports::{
    model_capability::{CapabilityError, ModelCapability, ModelRequest},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::run_shootout::{RunShootoutError, RunShootoutInput, RunShootoutUseCase};
