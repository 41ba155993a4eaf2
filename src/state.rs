//! Shared application state for all routes. Built once at startup; nothing in it is mutated per request.

use crate::config::ProviderDefaults;
use crate::knowledge::KnowledgeStore;
use crate::tenant::ConfigStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Tenant settings, loaded once before serving.
    pub store: Arc<ConfigStore>,
    /// Environment-level providers for simple mode.
    pub defaults: Arc<ProviderDefaults>,
    pub knowledge: Arc<dyn KnowledgeStore>,
}

impl AppState {
    pub fn new(store: ConfigStore, defaults: ProviderDefaults, knowledge: Arc<dyn KnowledgeStore>) -> Self {
        AppState {
            store: Arc::new(store),
            defaults: Arc::new(defaults),
            knowledge,
        }
    }
}
