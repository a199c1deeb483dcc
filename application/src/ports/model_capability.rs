//! Model capability port
//!
//! Defines the interface for querying one language-model backend.

use async_trait::async_trait;
use shootout_domain::{Credential, TaskDescriptor};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while querying a backend
///
/// The executors treat every variant the same way: the task fails, its
/// siblings carry on.
#[derive(Error, Debug)]
pub enum CapabilityError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed: {0}")]
    Unauthorized(String),

    #[error("Request failed with status {status}: {body}")]
    RequestFailed { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    #[error("Timed out after {0:?}")]
    Timeout(Duration),

    #[error("Other error: {0}")]
    Other(String),
}

/// One prompt pair addressed to one backend
#[derive(Debug, Clone, Copy)]
pub struct ModelRequest<'a> {
    pub backend_name: &'a str,
    pub credential: &'a Credential,
    pub system_prompt: &'a str,
    pub user_prompt: &'a str,
}

impl<'a> ModelRequest<'a> {
    /// Build the request a task describes, using its effective system prompt
    pub fn from_task(task: &'a TaskDescriptor) -> Self {
        Self {
            backend_name: task.backend_name(),
            credential: task.credential(),
            system_prompt: task.effective_system_prompt(),
            user_prompt: task.user_prompt(),
        }
    }
}

/// Capability to get a response from a named backend
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ModelCapability: Send + Sync {
    /// Send the prompt pair and return the response text
    async fn invoke(&self, request: &ModelRequest<'_>) -> Result<String, CapabilityError>;
}
