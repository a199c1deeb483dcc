//! Shootout subdomain - one prompt pair, many backends.
//!
//! - [`task`]: backend entries, execution modes and task descriptors
//! - [`dispatch`]: partitioning entries into sequential / concurrent lists
//! - [`outcome`]: per-task results and failures
//! - [`aggregate`]: merging both regimes into the batch aggregate

pub mod aggregate;
pub mod dispatch;
pub mod outcome;
pub mod task;
