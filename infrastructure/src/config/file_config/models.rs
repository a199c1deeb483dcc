//! Backend entries from TOML (`[[models]]` array)

use serde::{Deserialize, Serialize};
use shootout_domain::{BackendEntry, ConfigIssue, ConfigIssueCode, ExecutionMode};

/// One `[[models]]` entry
///
/// # Example
///
/// ```toml
/// [[models]]
/// model_name = "gpt-4o"
/// api_key = "sk-..."
///
/// [[models]]
/// model_name = "claude-3-5-sonnet-latest"
/// api_key = "sk-ant-..."
/// additional_system_prompt = "Answer in one paragraph."
/// async = false                      # or: execution_mode = "sequential"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelEntry {
    /// Backend identifier (required)
    #[serde(alias = "backend_name", skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    /// Credential for the backend (required)
    #[serde(alias = "credential", skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Appended to the shared system prompt after a newline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_system_prompt: Option<String>,
    /// Legacy flag: `true` (default) runs concurrently, `false` sequentially
    #[serde(rename = "async", skip_serializing_if = "Option::is_none")]
    pub is_async: Option<bool>,
    /// `"concurrent"` or `"sequential"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_mode: Option<String>,
}

impl FileModelEntry {
    /// Resolve the execution mode, collecting issues for bad values.
    ///
    /// `execution_mode` takes precedence over `async` when both are present.
    pub fn parse_execution_mode(&self, index: usize) -> (ExecutionMode, Vec<ConfigIssue>) {
        let mut issues = Vec::new();

        let from_flag = self.is_async.map(ExecutionMode::from_async_flag);
        let from_name = match self.execution_mode.as_deref() {
            None => None,
            Some(s) => match s.parse::<ExecutionMode>() {
                Ok(mode) => Some(mode),
                Err(_) => {
                    issues.push(ConfigIssue::error(
                        ConfigIssueCode::InvalidExecutionMode {
                            index,
                            value: s.to_string(),
                        },
                        format!(
                            "models[{}].execution_mode: unknown value '{}' (expected 'concurrent' or 'sequential')",
                            index, s
                        ),
                    ));
                    None
                }
            },
        };

        if let (Some(flag), Some(name)) = (from_flag, from_name)
            && flag != name
        {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ConflictingMode { index },
                format!(
                    "models[{}]: `async` and `execution_mode` disagree, using execution_mode = '{}'",
                    index, name
                ),
            ));
        }

        (from_name.or(from_flag).unwrap_or_default(), issues)
    }

    /// Check that required fields are present and non-blank
    pub fn missing_fields(&self, index: usize) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        for (field, value) in [
            ("model_name", self.model_name.as_deref()),
            ("api_key", self.api_key.as_deref()),
        ] {
            if value.is_none_or(|v| v.trim().is_empty()) {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::MissingField {
                        index,
                        field: field.to_string(),
                    },
                    format!("models[{}].{}: required field is missing or empty", index, field),
                ));
            }
        }
        issues
    }

    /// Convert into the domain entry consumed by dispatch
    pub fn to_backend_entry(&self, index: usize) -> BackendEntry {
        BackendEntry {
            backend_name: self.model_name.clone(),
            credential: self.api_key.clone(),
            additional_system_prompt: self.additional_system_prompt.clone(),
            execution_mode: self.parse_execution_mode(index).0,
        }
    }
}
