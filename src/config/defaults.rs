//! Environment-level provider settings used in simple mode (no tenant bound).

use crate::config::settings::{
    LlmProviderConfig, DEFAULT_API_VERSION, DEFAULT_DEPLOYMENT, DEFAULT_EMBEDDING_DEPLOYMENT,
};
use crate::config::validator::normalize_endpoint;

pub const ANTHROPIC_DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
pub const OPENAI_DEFAULT_MODEL: &str = "gpt-4o";
pub const OPENAI_DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";

/// Provider credentials read once from the process environment.
#[derive(Clone, Debug, Default)]
pub struct ProviderDefaults {
    /// Set when both `AZURE_OPENAI_API_KEY` and `AZURE_OPENAI_ENDPOINT` are present.
    pub azure_openai: Option<LlmProviderConfig>,
    pub anthropic_configured: bool,
}

impl ProviderDefaults {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
        let azure_openai = match (get("AZURE_OPENAI_API_KEY"), get("AZURE_OPENAI_ENDPOINT")) {
            (Some(api_key), Some(endpoint)) => Some(LlmProviderConfig {
                api_key,
                endpoint: normalize_endpoint(&endpoint),
                api_version: get("AZURE_OPENAI_API_VERSION").unwrap_or_else(|| DEFAULT_API_VERSION.into()),
                deployment: get("AZURE_OPENAI_DEPLOYMENT").unwrap_or_else(|| DEFAULT_DEPLOYMENT.into()),
                embedding_deployment: get("AZURE_OPENAI_EMBEDDING_DEPLOYMENT")
                    .unwrap_or_else(|| DEFAULT_EMBEDDING_DEPLOYMENT.into()),
            }),
            _ => None,
        };
        ProviderDefaults {
            azure_openai,
            anthropic_configured: get("ANTHROPIC_API_KEY").is_some(),
        }
    }
}
