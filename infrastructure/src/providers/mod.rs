//! HTTP adapters implementing the [`ModelCapability`] port.
//!
//! - [`OpenAiAdapter`]: OpenAI-compatible chat completions
//! - [`AnthropicAdapter`]: Anthropic messages API
//! - [`RoutingCapability`]: picks an adapter per backend name

pub mod anthropic;
pub mod openai;
pub mod routing;

pub use anthropic::AnthropicAdapter;
pub use openai::OpenAiAdapter;
pub use routing::RoutingCapability;

use async_trait::async_trait;
use shootout_application::{CapabilityError, ModelRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    #[default]
    OpenAi,
    Anthropic,
}

impl ProviderKind {
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "openai" => Some(ProviderKind::OpenAi),
            "anthropic" => Some(ProviderKind::Anthropic),
            _ => None,
        }
    }
}

/// One wire protocol for talking to model backends
#[async_trait]
pub trait ProviderAdapter: Send + Sync {
    fn kind(&self) -> ProviderKind;
    async fn complete(&self, request: &ModelRequest<'_>) -> Result<String, CapabilityError>;
}

/// Map a non-success HTTP status to a capability error
pub(crate) fn status_error(status: reqwest::StatusCode, body: String) -> CapabilityError {
    match status.as_u16() {
        401 | 403 => CapabilityError::Unauthorized(body),
        404 => CapabilityError::ModelNotAvailable(body),
        code => CapabilityError::RequestFailed { status: code, body },
    }
}

/// Map a transport-level failure to a capability error
pub(crate) fn transport_error(err: reqwest::Error) -> CapabilityError {
    if err.is_decode() {
        CapabilityError::MalformedResponse(err.to_string())
    } else {
        CapabilityError::ConnectionError(err.to_string())
    }
}

/// POST a JSON body and return the decoded JSON response
pub(crate) async fn post_json(
    request: reqwest::RequestBuilder,
    body: &serde_json::Value,
) -> Result<serde_json::Value, CapabilityError> {
    let response = request.json(body).send().await.map_err(transport_error)?;

    let status = response.status();
    if !status.is_success() {
        let text = response.text().await.unwrap_or_default();
        return Err(status_error(status, text));
    }

    response.json().await.map_err(transport_error)
}
