//! Tenant-aware API routes under /api/v1.

use crate::handlers::{
    current_organization, get_profile, get_team, list_profiles, list_teams, search_knowledge, upload_documents,
};
use crate::knowledge::{MAX_FILES, MAX_FILE_SIZE_BYTES};
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;

/// Room for multipart boundaries and headers on top of the file payloads.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn api_routes(state: AppState) -> Router {
    let upload = Router::new()
        .route("/knowledge/upload", post(upload_documents))
        .layer(
            ServiceBuilder::new()
                .layer(DefaultBodyLimit::disable())
                .layer(RequestBodyLimitLayer::new(
                    MAX_FILES * MAX_FILE_SIZE_BYTES + MULTIPART_OVERHEAD_BYTES,
                )),
        );

    Router::new()
        .route("/organization", get(current_organization))
        .route("/profiles", get(list_profiles))
        .route("/profiles/:profile", get(get_profile))
        .route("/teams", get(list_teams))
        .route("/teams/:team", get(get_team))
        .route("/knowledge/search", get(search_knowledge))
        .merge(upload)
        .with_state(state)
}
