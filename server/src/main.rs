//! Agent OS server: loads tenants once, then serves the tenant-aware router.
//!
//! Run from repo root: `cargo run -p agent-os-server`

use agent_os::{app, AppState, ConfigStore, MemoryKnowledgeStore, ProviderDefaults};
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("agent_os=info,agent_os_server=info")),
        )
        .init();

    let store = ConfigStore::load();
    tracing::info!(tenants = store.len(), source = ?store.loaded_from(), "tenant config loaded");
    let defaults = ProviderDefaults::from_env();
    let state = AppState::new(store, defaults, Arc::new(MemoryKnowledgeStore::new()));

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".into());
    let listener = TcpListener::bind(&bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
