//! Configuration file loading for model-shootout
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SHOOTOUT_*` environment variables (scalar settings only)
//! 2. The config file: `--config <path>`, else `./model_config.toml`,
//!    else `$XDG_CONFIG_HOME/model-shootout/config.toml`
//! 3. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileAnthropicConfig, FileConfig, FileExecutionConfig, FileModelEntry, FileOpenAiConfig,
    FileOutputConfig, FileProvidersConfig,
};
pub use loader::{ConfigError, ConfigLoader, DEFAULT_CONFIG_FILE};
