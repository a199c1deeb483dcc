//! Prompt pair value object

use serde::{Deserialize, Serialize};

/// The batch-level prompt pair shared by every task in a run (Value Object)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptPair {
    system_prompt: String,
    user_prompt: String,
}

impl PromptPair {
    pub fn new(system_prompt: impl Into<String>, user_prompt: impl Into<String>) -> Self {
        Self {
            system_prompt: system_prompt.into(),
            user_prompt: user_prompt.into(),
        }
    }

    /// The base system prompt, before any per-backend addition
    pub fn system_prompt(&self) -> &str {
        &self.system_prompt
    }

    pub fn user_prompt(&self) -> &str {
        &self.user_prompt
    }

    /// Build the system prompt actually sent to one backend.
    ///
    /// A non-empty `additional` is appended after a single newline; an empty
    /// one leaves the base untouched.
    pub fn effective_system_prompt(&self, additional: &str) -> String {
        if additional.is_empty() {
            self.system_prompt.clone()
        } else {
            format!("{}\n{}", self.system_prompt, additional)
        }
    }
}
