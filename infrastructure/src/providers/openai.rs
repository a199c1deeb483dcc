//! OpenAI-compatible chat completions adapter.

use super::{ProviderAdapter, ProviderKind, post_json};
use crate::config::FileOpenAiConfig;
use async_trait::async_trait;
use serde_json::{Value, json};
use shootout_application::{CapabilityError, ModelRequest};

pub struct OpenAiAdapter {
    client: reqwest::Client,
    base_url: String,
    max_tokens: u32,
}

impl OpenAiAdapter {
    pub fn new(client: reqwest::Client, config: &FileOpenAiConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            max_tokens: config.max_tokens,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }

    /// An empty system prompt is left out rather than sent as an empty message
    fn request_body(&self, request: &ModelRequest<'_>) -> Value {
        let mut messages = Vec::new();
        if !request.system_prompt.is_empty() {
            messages.push(json!({ "role": "system", "content": request.system_prompt }));
        }
        messages.push(json!({ "role": "user", "content": request.user_prompt }));

        json!({
            "model": request.backend_name,
            "messages": messages,
            "max_tokens": self.max_tokens,
        })
    }
}

/// Parse `choices[0].message.content`
fn extract_text(body: &Value) -> Result<String, CapabilityError> {
    body.pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            CapabilityError::MalformedResponse("response missing choices[0].message.content".into())
        })
}

#[async_trait]
impl ProviderAdapter for OpenAiAdapter {
    fn kind(&self) -> ProviderKind {
        ProviderKind::OpenAi
    }

    async fn complete(&self, request: &ModelRequest<'_>) -> Result<String, CapabilityError> {
        let builder = self
            .client
            .post(self.endpoint())
            .bearer_auth(request.credential.expose());

        let body = post_json(builder, &self.request_body(request)).await?;
        extract_text(&body)
    }
}
