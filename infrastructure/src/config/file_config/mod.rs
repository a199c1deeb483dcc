//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to domain types on demand.

mod execution;
mod models;
mod output;
mod providers;

pub use execution::FileExecutionConfig;
pub use models::FileModelEntry;
pub use output::FileOutputConfig;
pub use providers::{FileAnthropicConfig, FileOpenAiConfig, FileProvidersConfig};

use serde::{Deserialize, Serialize};
use shootout_application::ExecutionParams;
use shootout_domain::{BackendEntry, ConfigIssue, ConfigIssueCode, PromptPair};
use std::collections::HashSet;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// System prompt shared by every backend
    pub system_prompt: String,
    /// User prompt shared by every backend
    pub user_prompt: String,
    /// Backends to query, in order
    pub models: Vec<FileModelEntry>,
    /// Report output settings
    pub output: FileOutputConfig,
    /// Duplicate-name policy and per-task deadline
    pub execution: FileExecutionConfig,
    /// HTTP provider settings
    pub providers: FileProvidersConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. The model list is non-empty
    /// 2. Every entry has a model name and an API key
    /// 3. Execution modes parse and agree with the `async` flag
    /// 4. Model names are unique (error under `strict_names`, warning otherwise)
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.models.is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::NoModels,
                "No models configured in TOML file",
            ));
            return issues;
        }

        for (index, entry) in self.models.iter().enumerate() {
            issues.extend(entry.missing_fields(index));
            issues.extend(entry.parse_execution_mode(index).1);
        }

        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        for name in self.models.iter().filter_map(|m| m.model_name.as_deref()) {
            if !seen.insert(name) && reported.insert(name) {
                let code = ConfigIssueCode::DuplicateModel {
                    name: name.to_string(),
                };
                issues.push(if self.execution.strict_names {
                    ConfigIssue::error(
                        code,
                        format!("model '{}' is configured more than once", name),
                    )
                } else {
                    ConfigIssue::warning(
                        code,
                        format!(
                            "model '{}' is configured more than once; the last result wins",
                            name
                        ),
                    )
                });
            }
        }

        issues
    }

    /// The batch-level prompt pair
    pub fn prompts(&self) -> PromptPair {
        PromptPair::new(self.system_prompt.clone(), self.user_prompt.clone())
    }

    /// Domain entries, one per `[[models]]` table, in file order
    pub fn backend_entries(&self) -> Vec<BackendEntry> {
        self.models
            .iter()
            .enumerate()
            .map(|(index, entry)| entry.to_backend_entry(index))
            .collect()
    }

    pub fn execution_params(&self) -> ExecutionParams {
        self.execution.to_params()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shootout_domain::ExecutionMode;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
system_prompt = "You are a helpful assistant."
user_prompt = "Summarize the borrow checker."

[[models]]
model_name = "gpt-4o"
api_key = "sk-1"

[[models]]
model_name = "claude-3-5-sonnet-latest"
api_key = "sk-2"
additional_system_prompt = "Be concise."
async = false

[output]
results_dir = "shootouts"

[execution]
task_timeout_secs = 60
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.models.len(), 2);
        assert!(config.validate().is_empty());

        let entries = config.backend_entries();
        assert_eq!(entries[0].execution_mode, ExecutionMode::Concurrent);
        assert_eq!(entries[1].execution_mode, ExecutionMode::Sequential);
        assert_eq!(
            entries[1].additional_system_prompt.as_deref(),
            Some("Be concise.")
        );

        let prompts = config.prompts();
        assert_eq!(prompts.system_prompt(), "You are a helpful assistant.");
        assert_eq!(prompts.user_prompt(), "Summarize the borrow checker.");
        assert_eq!(
            config.execution_params().task_timeout,
            Some(std::time::Duration::from_secs(60))
        );
    }

    #[test]
    fn test_prompts_default_to_empty() {
        let toml_str = r#"
[[models]]
model_name = "gpt-4o"
api_key = "sk-1"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.prompts(), PromptPair::default());
    }

    #[test]
    fn test_validate_empty_models() {
        let config = FileConfig::default();
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, ConfigIssueCode::NoModels);
        assert!(issues[0].is_error());
    }

    #[test]
    fn test_validate_missing_api_key() {
        let toml_str = r#"
[[models]]
model_name = "gpt-4o"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].code,
            ConfigIssueCode::MissingField {
                index: 0,
                field: "api_key".to_string()
            }
        );
    }

    #[test]
    fn test_validate_duplicates_warn_by_default() {
        let toml_str = r#"
[[models]]
model_name = "gpt-4o"
api_key = "a"

[[models]]
model_name = "gpt-4o"
api_key = "b"

[[models]]
model_name = "gpt-4o"
api_key = "c"
"#;
        let mut config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());

        config.execution.strict_names = true;
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
    }
}
