//! Shared fixtures for integration tests.

#![allow(dead_code)]

use agent_os::{AppState, ConfigStore, MemoryKnowledgeStore, ProviderDefaults};
use axum::body::Body;
use axum::http::{Request, Response};
use serde_json::{json, Value};
use std::sync::Arc;

pub fn tenant(endpoint: &str) -> Value {
    json!({
        "azure_openai": { "api_key": "llm-key", "endpoint": endpoint },
        "azure_search": { "api_key": "search-key", "endpoint": "https://search.example/", "index_name": "docs" },
        "important_doc_ids": { "general": ["g1"], "business": ["b1", "b2"], "quality": ["q1"] }
    })
}

pub fn tenants_json() -> String {
    json!({
        "organizations": {
            "acme": tenant("https://acme.openai.example/"),
            "globex": tenant("https://globex.openai.example"),
            "broken": { "azure_openai": { "api_key": "k" } }
        }
    })
    .to_string()
}

pub fn store() -> ConfigStore {
    ConfigStore::from_document(serde_json::from_str(&tenants_json()).unwrap())
}

pub fn state() -> AppState {
    AppState::new(store(), ProviderDefaults::default(), Arc::new(MemoryKnowledgeStore::new()))
}

pub fn get(uri: &str, tenant: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(t) = tenant {
        builder = builder.header("X-Tenant", t);
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn body_json(resp: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
