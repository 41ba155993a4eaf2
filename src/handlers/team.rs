//! Team handlers: list the teams and compose one for the current tenant.

use crate::error::AppError;
use crate::response::{data_body, list_body};
use crate::state::AppState;
use crate::team::{TeamBlueprint, TeamType};
use axum::extract::{Path, State};
use axum::response::IntoResponse;

/// GET /api/v1/teams
pub async fn list_teams() -> impl IntoResponse {
    let data: Vec<serde_json::Value> = TeamType::ALL
        .iter()
        .map(|t| serde_json::json!({ "team": t, "members": t.members() }))
        .collect();
    list_body(data)
}

/// GET /api/v1/teams/:team: leader and member blueprints under the active tenant.
pub async fn get_team(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let team_type: TeamType = name.parse()?;
    let blueprint = TeamBlueprint::for_team(team_type, &state.defaults);
    tracing::debug!(team = %team_type, tenant = ?blueprint.tenant, members = blueprint.members.len(), "team composed");
    Ok(data_body(blueprint))
}
