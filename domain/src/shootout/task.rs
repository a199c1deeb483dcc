//! Task entities - backend entries and the immutable descriptors built from them.

use crate::core::credential::Credential;
use crate::core::error::DomainError;
use crate::core::prompt::PromptPair;
use serde::{Deserialize, Serialize};

/// How a task is executed relative to its siblings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Runs alongside every other concurrent task
    #[default]
    Concurrent,
    /// Runs alone, in configured order, before the concurrent pass
    Sequential,
}

impl ExecutionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionMode::Concurrent => "concurrent",
            ExecutionMode::Sequential => "sequential",
        }
    }

    /// Map the legacy `async = true/false` flag onto a mode
    pub fn from_async_flag(is_async: bool) -> Self {
        if is_async {
            ExecutionMode::Concurrent
        } else {
            ExecutionMode::Sequential
        }
    }
}

impl std::fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ExecutionMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "concurrent" | "async" | "parallel" => Ok(ExecutionMode::Concurrent),
            "sequential" | "sync" | "serial" => Ok(ExecutionMode::Sequential),
            other => Err(DomainError::InvalidExecutionMode(other.to_string())),
        }
    }
}

/// One configured backend, as read from configuration.
///
/// Required fields are optional here so that their absence can be reported
/// by dispatch as a configuration error instead of a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackendEntry {
    pub backend_name: Option<String>,
    pub credential: Option<String>,
    pub additional_system_prompt: Option<String>,
    pub execution_mode: ExecutionMode,
}

impl BackendEntry {
    pub fn new(backend_name: impl Into<String>, credential: impl Into<String>) -> Self {
        Self {
            backend_name: Some(backend_name.into()),
            credential: Some(credential.into()),
            ..Default::default()
        }
    }

    pub fn with_additional_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.additional_system_prompt = Some(prompt.into());
        self
    }

    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.execution_mode = mode;
        self
    }

    pub fn sequential(self) -> Self {
        self.with_mode(ExecutionMode::Sequential)
    }
}

/// Immutable description of one query to perform (Entity)
///
/// The effective system prompt is computed once, at construction, so that
/// what gets recorded is exactly what was sent.
#[derive(Debug, Clone)]
pub struct TaskDescriptor {
    backend_name: String,
    credential: Credential,
    system_prompt: String,
    user_prompt: String,
    execution_mode: ExecutionMode,
}

impl TaskDescriptor {
    pub fn new(
        backend_name: impl Into<String>,
        credential: impl Into<Credential>,
        prompts: &PromptPair,
        additional_system_prompt: impl Into<String>,
        execution_mode: ExecutionMode,
    ) -> Self {
        let additional_system_prompt: String = additional_system_prompt.into();
        Self {
            backend_name: backend_name.into(),
            credential: credential.into(),
            system_prompt: prompts.effective_system_prompt(&additional_system_prompt),
            user_prompt: prompts.user_prompt().to_string(),
            execution_mode,
        }
    }

    pub fn backend_name(&self) -> &str {
        &self.backend_name
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Base prompt plus the optional per-backend addition
    pub fn effective_system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn user_prompt(&self) -> &str {
        &self.user_prompt
    }

    pub fn execution_mode(&self) -> ExecutionMode {
        self.execution_mode
    }
}
