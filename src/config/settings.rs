//! Validated per-organization settings. Built once at load time and shared read-only.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_API_VERSION: &str = "2024-08-01-preview";
pub const DEFAULT_DEPLOYMENT: &str = "gpt-4o";
pub const DEFAULT_EMBEDDING_DEPLOYMENT: &str = "text-embedding-3-small";
pub const DEFAULT_EMBEDDING_API_VERSION: &str = "2023-05-15";

/// Azure OpenAI credentials and deployments for one tenant.
#[derive(Clone, PartialEq, Eq)]
pub struct LlmProviderConfig {
    pub api_key: String,
    /// No trailing slash.
    pub endpoint: String,
    pub api_version: String,
    pub deployment: String,
    pub embedding_deployment: String,
}

impl fmt::Debug for LlmProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmProviderConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("api_version", &self.api_version)
            .field("deployment", &self.deployment)
            .field("embedding_deployment", &self.embedding_deployment)
            .finish()
    }
}

/// Azure AI Search credentials and index for one tenant.
#[derive(Clone, PartialEq, Eq)]
pub struct SearchProviderConfig {
    pub api_key: String,
    /// No trailing slash.
    pub endpoint: String,
    pub index_name: String,
    pub embedding_api_version: String,
}

impl fmt::Debug for SearchProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchProviderConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("index_name", &self.index_name)
            .field("embedding_api_version", &self.embedding_api_version)
            .finish()
    }
}

/// Category a document id list is scoped to. `General` ids apply to every profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileCategory {
    General,
    Business,
    Quality,
}

impl ProfileCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileCategory::General => "general",
            ProfileCategory::Business => "business",
            ProfileCategory::Quality => "quality",
        }
    }
}

impl FromStr for ProfileCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "general" => Ok(ProfileCategory::General),
            "business" => Ok(ProfileCategory::Business),
            "quality" => Ok(ProfileCategory::Quality),
            other => Err(format!("unknown profile category: {}", other)),
        }
    }
}

impl fmt::Display for ProfileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Important document ids per category, in configured order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DocumentIdSet {
    pub general: Vec<String>,
    pub business: Vec<String>,
    pub quality: Vec<String>,
}

impl DocumentIdSet {
    /// Legacy flat list: everything is general.
    pub fn general_only(ids: Vec<String>) -> Self {
        DocumentIdSet {
            general: ids,
            ..Default::default()
        }
    }

    pub fn ids(&self, category: ProfileCategory) -> &[String] {
        match category {
            ProfileCategory::General => &self.general,
            ProfileCategory::Business => &self.business,
            ProfileCategory::Quality => &self.quality,
        }
    }

    pub(crate) fn ids_mut(&mut self, category: ProfileCategory) -> &mut Vec<String> {
        match category {
            ProfileCategory::General => &mut self.general,
            ProfileCategory::Business => &mut self.business,
            ProfileCategory::Quality => &mut self.quality,
        }
    }
}

/// Full configuration for one tenant. `name` is the tenant identifier used in `X-Tenant`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrganizationSettings {
    pub name: String,
    pub llm: LlmProviderConfig,
    pub search: SearchProviderConfig,
    pub doc_ids: DocumentIdSet,
}

impl OrganizationSettings {
    /// General ids followed by the category's ids. Duplicates are kept.
    /// `None` (unknown category) and `General` both yield the general ids only.
    pub fn resolve_document_ids(&self, category: Option<ProfileCategory>) -> Vec<String> {
        let mut ids = self.doc_ids.general.clone();
        match category {
            Some(ProfileCategory::General) | None => {}
            Some(other) => ids.extend(self.doc_ids.ids(other).iter().cloned()),
        }
        ids
    }

    /// Same as [`resolve_document_ids`](Self::resolve_document_ids) for a category name as
    /// it arrives from callers; unrecognized names contribute nothing beyond general.
    pub fn resolve_document_ids_by_name(&self, category: &str) -> Vec<String> {
        self.resolve_document_ids(category.parse().ok())
    }
}
