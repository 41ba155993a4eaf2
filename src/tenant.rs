//! Multi-tenant config store: organizations loaded once at startup, read-only afterwards.

use crate::config::{parse_organization, ConfigSource, OrganizationSettings, TenantsDocument};
use std::collections::HashMap;
use std::sync::Arc;

/// In-memory tenant settings keyed by tenant id. Never mutated after construction,
/// so it is shared across request tasks behind an `Arc` without locking.
#[derive(Clone, Debug, Default)]
pub struct ConfigStore {
    by_id: HashMap<String, Arc<OrganizationSettings>>,
    loaded_from: Option<String>,
}

impl ConfigStore {
    /// Store with no tenants: every request runs in simple mode.
    pub fn empty() -> Self {
        ConfigStore::default()
    }

    /// Load from the process environment and the conventional file locations.
    pub fn load() -> Self {
        Self::load_from(&ConfigSource::from_env())
    }

    /// Try each source in order; the first one that parses is final, even with zero organizations.
    /// Sources that fail to parse are logged and skipped. Never fails: worst case is an empty store.
    pub fn load_from(sources: &[ConfigSource]) -> Self {
        for source in sources {
            match source.read() {
                Ok(Some(doc)) => {
                    tracing::info!(source = %source, "loading tenants");
                    let mut store = Self::from_document(doc);
                    store.loaded_from = Some(source.to_string());
                    return store;
                }
                Ok(None) => continue,
                Err(e) => match source {
                    ConfigSource::Inline { .. } => tracing::error!(error = %e, "invalid inline tenants config"),
                    ConfigSource::File(_) => tracing::warn!(error = %e, "skipping tenants config file"),
                },
            }
        }
        tracing::warn!(
            "no organizations loaded; set TENANTS_CONFIG_JSON or provide config/organizations.json (simple mode only)"
        );
        ConfigStore::empty()
    }

    /// Build from an already-parsed document. Invalid entries are skipped (logged), siblings still load.
    pub fn from_document(doc: TenantsDocument) -> Self {
        let mut by_id = HashMap::new();
        for (name, raw) in doc.into_organizations() {
            match parse_organization(&name, &raw) {
                Ok(settings) => {
                    tracing::info!(tenant = %name, "organization loaded");
                    by_id.insert(name, Arc::new(settings));
                }
                Err(e) => tracing::error!(tenant = %name, error = %e, "skipping organization"),
            }
        }
        ConfigStore {
            by_id,
            loaded_from: None,
        }
    }

    pub fn get(&self, tenant_id: &str) -> Option<Arc<OrganizationSettings>> {
        self.by_id.get(tenant_id).cloned()
    }

    /// Copy of the tenant map; callers cannot affect the store through it.
    pub fn list_all(&self) -> HashMap<String, Arc<OrganizationSettings>> {
        self.by_id.clone()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Description of the source the tenants came from (`env:...` / `file:...`), if any parsed.
    pub fn loaded_from(&self) -> Option<&str> {
        self.loaded_from.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> TenantsDocument {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn invalid_tenant_does_not_block_siblings() {
        let store = ConfigStore::from_document(doc(json!({
            "organizations": {
                "acme": {
                    "azure_openai": { "api_key": "k" },
                    "azure_search": { "api_key": "s", "endpoint": "https://s", "index_name": "i" }
                },
                "globex": {
                    "azure_openai": { "api_key": "k", "endpoint": "https://e" },
                    "azure_search": { "api_key": "s", "endpoint": "https://s", "index_name": "i" }
                }
            }
        })));
        assert_eq!(store.len(), 1);
        assert!(store.get("acme").is_none());
        assert_eq!(store.get("globex").unwrap().name, "globex");
    }

    #[test]
    fn list_all_is_a_copy() {
        let store = ConfigStore::from_document(doc(json!({
            "organizations": {
                "globex": {
                    "azure_openai": { "api_key": "k", "endpoint": "https://e" },
                    "azure_search": { "api_key": "s", "endpoint": "https://s", "index_name": "i" }
                }
            }
        })));
        let mut copy = store.list_all();
        copy.clear();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn no_sources_means_empty_store() {
        let store = ConfigStore::load_from(&[]);
        assert!(store.is_empty());
        assert!(store.loaded_from().is_none());
    }
}
