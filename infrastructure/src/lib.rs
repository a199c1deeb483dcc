//! Infrastructure layer for model-shootout
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, configuration file loading and report output.

pub mod config;
pub mod providers;
pub mod report;

// Re-export commonly used types
pub use config::{ConfigError, ConfigLoader, FileConfig, FileModelEntry, DEFAULT_CONFIG_FILE};
pub use providers::{AnthropicAdapter, OpenAiAdapter, ProviderKind, RoutingCapability};
pub use report::{JsonReportWriter, ReportError, render_report};
