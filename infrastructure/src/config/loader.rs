//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// File looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "model_config.toml";

/// Environment variables with this prefix override scalar settings
const ENV_PREFIX: &str = "SHOOTOUT_";

/// Keys that may be overridden from the environment (after `__` → `.` mapping)
const ENV_KEYS: &[&str] = &[
    "system_prompt",
    "user_prompt",
    "output.results_dir",
    "output.color",
    "execution.strict_names",
    "execution.task_timeout_secs",
    "providers.default",
];

/// Errors raised while locating or reading the configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file {} not found", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read configuration: {0}")]
    Parse(#[from] Box<figment::Error>),

    #[error("Invalid configuration:\n{0}")]
    Invalid(String),
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// A config file is mandatory: an explicit path that does not exist, or
    /// no file at any default location, is an error.
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, ConfigError> {
        let path = Self::resolve_path(config_path)?;
        debug!("Loading configuration from {}", path.display());
        Self::figment(&path).extract().map_err(|e| ConfigError::Parse(Box::new(e)))
    }

    /// Build the figment for a given file, without extracting it
    pub fn figment(path: &Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(FileConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__").only(ENV_KEYS))
    }

    /// Decide which file to read
    pub fn resolve_path(config_path: Option<&Path>) -> Result<PathBuf, ConfigError> {
        if let Some(path) = config_path {
            return if path.exists() {
                Ok(path.to_path_buf())
            } else {
                Err(ConfigError::NotFound(path.to_path_buf()))
            };
        }

        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        if local.exists() {
            return Ok(local);
        }

        match Self::global_config_path() {
            Some(global) if global.exists() => Ok(global),
            _ => Err(ConfigError::NotFound(local)),
        }
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/model-shootout/config.toml if set,
    /// otherwise falls back to ~/.config/model-shootout/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("model-shootout").join("config.toml"))
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&Path>) {
        println!("Configuration sources (in priority order):");
        println!("  [     ] Environment: {}*", ENV_PREFIX);

        match config_path {
            Some(path) if path.exists() => println!("  [FOUND] Explicit: {}", path.display()),
            Some(path) => println!("  [MISS ] Explicit: {}", path.display()),
            None => {
                let local = PathBuf::from(DEFAULT_CONFIG_FILE);
                let mark = if local.exists() { "FOUND" } else { "     " };
                println!("  [{}] Project: ./{}", mark, DEFAULT_CONFIG_FILE);

                if let Some(global) = Self::global_config_path() {
                    let mark = if global.exists() { "FOUND" } else { "     " };
                    println!("  [{}] Global:  {}", mark, global.display());
                }
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}
