//! Chat model and embedder selection for the current request.
//!
//! A bound tenant always uses its own Azure OpenAI deployment. In simple mode the
//! priority is Azure OpenAI (from env) > Anthropic > OpenAI.

use crate::config::{
    LlmProviderConfig, ProviderDefaults, ANTHROPIC_DEFAULT_MODEL, OPENAI_DEFAULT_EMBEDDING_MODEL,
    OPENAI_DEFAULT_MODEL,
};
use crate::context;
use serde::Serialize;
use std::fmt;

/// Provider API key. Never serialized and redacted in `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Where a selected provider's credentials came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialScope {
    Tenant,
    Environment,
}

/// Provider-agnostic description of the chat model a client factory should build.
/// Credentials stay out of the serialized form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "provider", rename_all = "snake_case")]
pub enum ModelSpec {
    #[serde(rename = "azure_openai")]
    AzureOpenAi {
        id: String,
        endpoint: String,
        api_version: String,
        scope: CredentialScope,
        #[serde(skip)]
        api_key: ApiKey,
    },
    Anthropic {
        id: String,
    },
    #[serde(rename = "openai")]
    OpenAi {
        id: String,
    },
}

impl ModelSpec {
    pub fn id(&self) -> &str {
        match self {
            ModelSpec::AzureOpenAi { id, .. } | ModelSpec::Anthropic { id } | ModelSpec::OpenAi { id } => id,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "provider", rename_all = "snake_case")]
pub enum EmbedderSpec {
    #[serde(rename = "azure_openai")]
    AzureOpenAi {
        id: String,
        endpoint: String,
        api_version: String,
        scope: CredentialScope,
        #[serde(skip)]
        api_key: ApiKey,
    },
    #[serde(rename = "openai")]
    OpenAi {
        id: String,
    },
}

fn azure_chat(cfg: &LlmProviderConfig, scope: CredentialScope) -> ModelSpec {
    ModelSpec::AzureOpenAi {
        id: cfg.deployment.clone(),
        endpoint: cfg.endpoint.clone(),
        api_version: cfg.api_version.clone(),
        scope,
        api_key: ApiKey(cfg.api_key.clone()),
    }
}

fn azure_embedder(cfg: &LlmProviderConfig, scope: CredentialScope) -> EmbedderSpec {
    EmbedderSpec::AzureOpenAi {
        id: cfg.embedding_deployment.clone(),
        endpoint: cfg.endpoint.clone(),
        api_version: cfg.api_version.clone(),
        scope,
        api_key: ApiKey(cfg.api_key.clone()),
    }
}

/// Chat model for the current request.
pub fn resolve_chat_model(defaults: &ProviderDefaults) -> ModelSpec {
    if let Some(org) = context::get() {
        return azure_chat(&org.llm, CredentialScope::Tenant);
    }
    if let Some(azure) = &defaults.azure_openai {
        return azure_chat(azure, CredentialScope::Environment);
    }
    if defaults.anthropic_configured {
        return ModelSpec::Anthropic {
            id: ANTHROPIC_DEFAULT_MODEL.to_string(),
        };
    }
    ModelSpec::OpenAi {
        id: OPENAI_DEFAULT_MODEL.to_string(),
    }
}

/// Embedder for the current request. Anthropic has no embedder, so simple mode without
/// Azure falls back to OpenAI.
pub fn resolve_embedder(defaults: &ProviderDefaults) -> EmbedderSpec {
    if let Some(org) = context::get() {
        return azure_embedder(&org.llm, CredentialScope::Tenant);
    }
    match &defaults.azure_openai {
        Some(azure) => azure_embedder(azure, CredentialScope::Environment),
        None => EmbedderSpec::OpenAi {
            id: OPENAI_DEFAULT_EMBEDDING_MODEL.to_string(),
        },
    }
}
