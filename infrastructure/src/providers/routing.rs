use super::{AnthropicAdapter, OpenAiAdapter, ProviderAdapter, ProviderKind};
use crate::config::FileProvidersConfig;
use async_trait::async_trait;
use shootout_application::{CapabilityError, ModelCapability, ModelRequest};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// [`ModelCapability`] that forwards each request to a provider chosen by
/// backend name.
pub struct RoutingCapability {
    providers: Vec<Arc<dyn ProviderAdapter>>,
    /// Backend name to provider index, from `[providers.routing]`
    explicit_model_routing: HashMap<String, usize>,
    default_kind: ProviderKind,
}

impl RoutingCapability {
    pub fn new(providers: Vec<Arc<dyn ProviderAdapter>>, config: &FileProvidersConfig) -> Self {
        let mut explicit_model_routing = HashMap::new();

        for (model_name, provider_name) in &config.routing {
            let Some(target_kind) = ProviderKind::parse(provider_name) else {
                warn!(
                    "Ignoring routing for {}: unknown provider '{}'",
                    model_name, provider_name
                );
                continue;
            };

            if let Some(idx) = providers.iter().position(|p| p.kind() == target_kind) {
                explicit_model_routing.insert(model_name.clone(), idx);
            }
        }

        let default_kind = config
            .default
            .as_deref()
            .and_then(ProviderKind::parse)
            .unwrap_or_default();

        Self {
            providers,
            explicit_model_routing,
            default_kind,
        }
    }

    /// Both HTTP adapters sharing one client, configured from `[providers]`
    pub fn from_config(config: &FileProvidersConfig) -> Self {
        let client = reqwest::Client::new();
        let providers: Vec<Arc<dyn ProviderAdapter>> = vec![
            Arc::new(OpenAiAdapter::new(client.clone(), &config.openai)),
            Arc::new(AnthropicAdapter::new(client, &config.anthropic)),
        ];
        Self::new(providers, config)
    }

    /// Resolution order:
    ///  1. explicit routing table entry for the backend name
    ///  2. model family inferred from the name
    ///  3. the configured default provider
    ///  4. the first registered provider
    fn resolve_provider(
        &self,
        backend_name: &str,
    ) -> Result<&dyn ProviderAdapter, CapabilityError> {
        if let Some(&idx) = self.explicit_model_routing.get(backend_name) {
            return Ok(self.providers[idx].as_ref());
        }

        if let Some(kind) = infer_kind(backend_name)
            && let Some(p) = self.providers.iter().find(|p| p.kind() == kind)
        {
            return Ok(p.as_ref());
        }

        if let Some(p) = self
            .providers
            .iter()
            .find(|p| p.kind() == self.default_kind)
        {
            return Ok(p.as_ref());
        }

        self.providers
            .first()
            .map(|p| p.as_ref())
            .ok_or(CapabilityError::ModelNotAvailable(
                "No providers available".to_string(),
            ))
    }
}

fn infer_kind(backend_name: &str) -> Option<ProviderKind> {
    let name = backend_name.to_lowercase();
    if name.starts_with("claude") {
        Some(ProviderKind::Anthropic)
    } else if ["gpt", "o1", "o3", "o4", "chatgpt"]
        .iter()
        .any(|prefix| name.starts_with(prefix))
    {
        Some(ProviderKind::OpenAi)
    } else {
        None
    }
}

#[async_trait]
impl ModelCapability for RoutingCapability {
    async fn invoke(&self, request: &ModelRequest<'_>) -> Result<String, CapabilityError> {
        let provider = self.resolve_provider(request.backend_name)?;
        debug!(
            "Routing {} to {:?} provider",
            request.backend_name,
            provider.kind()
        );
        provider.complete(request).await
    }
}
