pub mod api;
pub mod common;

pub use api::*;
pub use common::*;

use crate::middleware::tenant_resolution_middleware;
use crate::state::AppState;
use axum::{middleware, Router};

/// Full application router. Every route, including health, runs behind tenant resolution.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api/v1", api_routes(state.clone()))
        .layer(middleware::from_fn_with_state(
            state.store.clone(),
            tenant_resolution_middleware,
        ))
}
