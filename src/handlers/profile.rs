//! Profile handlers: list the available profiles and compose one for the current tenant.

use crate::agent::AgentBlueprint;
use crate::error::AppError;
use crate::profile::{create_profile, ProfileType};
use crate::response::{data_body, list_body};
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

/// GET /api/v1/profiles
pub async fn list_profiles() -> impl IntoResponse {
    let data: Vec<serde_json::Value> = ProfileType::ALL
        .iter()
        .map(|t| {
            serde_json::json!({
                "profile": t,
                "document_category": create_profile(*t).document_category(),
            })
        })
        .collect();
    list_body(data)
}

/// GET /api/v1/profiles/:profile: agent blueprint under the active tenant.
pub async fn get_profile(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let profile_type: ProfileType = name.parse()?;
    let blueprint = AgentBlueprint::for_profile(profile_type, &state.defaults);
    tracing::debug!(profile = %profile_type, tenant = ?blueprint.tenant, "profile composed");
    Ok(data_body(blueprint))
}
