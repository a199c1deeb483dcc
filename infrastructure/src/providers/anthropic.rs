//! Anthropic messages API adapter.

use super::{ProviderAdapter, ProviderKind, post_json};
use crate::config::FileAnthropicConfig;
use async_trait::async_trait;
use serde_json::{Value, json};
use shootout_application::{CapabilityError, ModelRequest};

pub struct AnthropicAdapter {
    client: reqwest::Client,
    base_url: String,
    max_tokens: u32,
    api_version: String,
}

impl AnthropicAdapter {
    pub fn new(client: reqwest::Client, config: &FileAnthropicConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_tokens: config.max_tokens,
            api_version: config.api_version.clone(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }

    fn request_body(&self, request: &ModelRequest<'_>) -> Value {
        let mut body = json!({
            "model": request.backend_name,
            "max_tokens": self.max_tokens,
            "messages": [{ "role": "user", "content": request.user_prompt }],
        });
        if !request.system_prompt.is_empty() {
            body["system"] = Value::String(request.system_prompt.to_string());
        }
        body
    }
}

/// Concatenate every `text` block of `content`
fn extract_text(body: &Value) -> Result<String, CapabilityError> {
    let blocks = body
        .get("content")
        .and_then(Value::as_array)
        .ok_or_else(|| CapabilityError::MalformedResponse("response missing content".into()))?;

    let text: String = blocks
        .iter()
        .filter(|b| b.get("type").and_then(Value::as_str) == Some("text"))
        .filter_map(|b| b.get("text").and_then(Value::as_str))
        .collect();

    if text.is_empty() && !blocks.is_empty() {
        return Err(CapabilityError::MalformedResponse(
            "response has no text content".into(),
        ));
    }
    Ok(text)
}

#[async_trait]
impl ProviderAdapter for AnthropicAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Anthropic
    }

    async fn complete(&self, request: &ModelRequest<'_>) -> Result<String, CapabilityError> {
        let builder = self
            .client
            .post(self.endpoint())
            .header("x-api-key", request.credential.expose())
            .header("anthropic-version", &self.api_version);

        let body = post_json(builder, &self.request_body(request)).await?;
        extract_text(&body)
    }
}
