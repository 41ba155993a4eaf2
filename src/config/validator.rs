//! Validating factory: raw tenant JSON -> `OrganizationSettings`.

use crate::config::settings::{
    DocumentIdSet, LlmProviderConfig, OrganizationSettings, ProfileCategory, SearchProviderConfig,
    DEFAULT_API_VERSION, DEFAULT_DEPLOYMENT, DEFAULT_EMBEDDING_API_VERSION, DEFAULT_EMBEDDING_DEPLOYMENT,
};
use crate::config::types::{string_list, type_name_of_json, RawDocumentIds, RawOrganization};
use crate::error::ConfigError;
use serde_json::Value;

/// Build one tenant's settings from its raw JSON entry.
/// Missing/blank required fields fail with `MissingField`; wrong JSON types with `InvalidShape`.
pub fn parse_organization(name: &str, raw: &Value) -> Result<OrganizationSettings, ConfigError> {
    if !raw.is_object() {
        return Err(ConfigError::InvalidShape {
            tenant: name.to_string(),
            reason: format!("organization entry must be an object; got {}", type_name_of_json(raw)),
        });
    }
    let raw: RawOrganization = serde_json::from_value(raw.clone()).map_err(|e| ConfigError::InvalidShape {
        tenant: name.to_string(),
        reason: e.to_string(),
    })?;

    let ao = raw.azure_openai.unwrap_or_default();
    let llm = LlmProviderConfig {
        api_key: required(name, "azure_openai.api_key", ao.api_key)?,
        endpoint: normalize_endpoint(&required(name, "azure_openai.endpoint", ao.endpoint)?),
        api_version: or_default(ao.api_version, DEFAULT_API_VERSION),
        deployment: or_default(ao.deployment, DEFAULT_DEPLOYMENT),
        embedding_deployment: or_default(ao.embedding_deployment, DEFAULT_EMBEDDING_DEPLOYMENT),
    };

    let az = raw.azure_search.unwrap_or_default();
    let search = SearchProviderConfig {
        api_key: required(name, "azure_search.api_key", az.api_key)?,
        endpoint: normalize_endpoint(&required(name, "azure_search.endpoint", az.endpoint)?),
        index_name: required(name, "azure_search.index_name", az.index_name)?,
        embedding_api_version: or_default(az.embedding_api_version, DEFAULT_EMBEDDING_API_VERSION),
    };

    let doc_ids = match raw.important_doc_ids {
        None => DocumentIdSet::default(),
        Some(RawDocumentIds::Flat(ids)) => DocumentIdSet::general_only(ids),
        Some(RawDocumentIds::ByCategory(obj)) => categorized_doc_ids(name, obj)?,
    };

    Ok(OrganizationSettings {
        name: name.to_string(),
        llm,
        search,
        doc_ids,
    })
}

fn categorized_doc_ids(
    tenant: &str,
    obj: serde_json::Map<String, Value>,
) -> Result<DocumentIdSet, ConfigError> {
    let mut set = DocumentIdSet::default();
    for (key, value) in obj {
        let Ok(category) = key.parse::<ProfileCategory>() else {
            tracing::warn!(tenant = %tenant, category = %key, "unknown document category, ignoring");
            continue;
        };
        let ids = match value {
            Value::Null => Vec::new(),
            Value::Array(items) => string_list(items).map_err(|reason| ConfigError::InvalidShape {
                tenant: tenant.to_string(),
                reason: format!("important_doc_ids.{}: {}", category, reason),
            })?,
            other => {
                return Err(ConfigError::InvalidShape {
                    tenant: tenant.to_string(),
                    reason: format!(
                        "important_doc_ids.{} must be a list; got {}",
                        category,
                        type_name_of_json(&other)
                    ),
                })
            }
        };
        *set.ids_mut(category) = ids;
    }
    Ok(set)
}

fn required(tenant: &str, field: &'static str, value: Option<String>) -> Result<String, ConfigError> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ConfigError::MissingField {
            tenant: tenant.to_string(),
            field,
        })
}

fn or_default(value: Option<String>, default: &str) -> String {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Strip trailing slashes so callers can append paths directly.
pub fn normalize_endpoint(endpoint: &str) -> String {
    endpoint.trim().trim_end_matches('/').to_string()
}
