//! Application-level configuration.
//!
//! - [`ExecutionParams`]: duplicate-name policy and per-task deadline

pub mod execution_params;

pub use execution_params::ExecutionParams;
