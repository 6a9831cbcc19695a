//! Team endpoints

use axum::extract::State;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::players::PlayerResponse;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, Path};
use crate::domain::team::{validate_team_name, Team, TeamId};
use crate::infrastructure::roster::RenameTeamRequest;

/// Body of team registration and rename requests
#[derive(Debug, Clone, Deserialize)]
pub struct TeamNameApiRequest {
    pub name: String,
}

impl TeamNameApiRequest {
    fn validated_name(&self) -> Result<&str, ApiError> {
        validate_team_name(&self.name).map_err(|e| ApiError::bad_request(e.to_string()))?;
        Ok(&self.name)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamResponse {
    pub id: u64,
    pub name: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Team> for TeamResponse {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id().value(),
            name: team.name().to_string(),
            created_at: team.created_at().to_rfc3339(),
            updated_at: team.updated_at().to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ListTeamsResponse {
    pub teams: Vec<TeamResponse>,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamMessageResponse {
    pub message: String,
    pub team: TeamResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct RenameTeamResponse {
    pub message: String,
    pub previous_name: String,
    pub team: TeamResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteTeamResponse {
    pub message: String,
    pub removed_players: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamPlayersResponse {
    pub team_id: u64,
    pub players: Vec<PlayerResponse>,
    pub total: usize,
}

/// GET /api/v1/teams
pub async fn list_teams(
    State(state): State<AppState>,
) -> Result<Json<ListTeamsResponse>, ApiError> {
    debug!("Listing teams");

    let teams = state.roster_service.list_teams().await?;
    let teams: Vec<TeamResponse> = teams.iter().map(TeamResponse::from).collect();
    let total = teams.len();

    Ok(Json(ListTeamsResponse { teams, total }))
}

/// POST /api/v1/teams
pub async fn register_team(
    State(state): State<AppState>,
    Json(request): Json<TeamNameApiRequest>,
) -> Result<Json<TeamMessageResponse>, ApiError> {
    debug!(name = %request.name, "Registering team");

    let registration = state
        .roster_service
        .register_team(request.validated_name()?)
        .await?;

    Ok(Json(TeamMessageResponse {
        message: registration.message(),
        team: TeamResponse::from(&registration.team),
    }))
}

/// PUT /api/v1/teams/{team_id}/name
pub async fn rename_team(
    State(state): State<AppState>,
    Path(team_id): Path<u64>,
    Json(request): Json<TeamNameApiRequest>,
) -> Result<Json<RenameTeamResponse>, ApiError> {
    debug!(team_id, name = %request.name, "Renaming team");

    let name = request.validated_name()?.to_string();
    let rename = state
        .roster_service
        .rename_team(RenameTeamRequest {
            team_id: TeamId::new(team_id),
            name,
        })
        .await?;

    Ok(Json(RenameTeamResponse {
        message: rename.message(),
        previous_name: rename.previous_name.clone(),
        team: TeamResponse::from(&rename.team),
    }))
}

/// DELETE /api/v1/teams/{team_id}
pub async fn delete_team(
    State(state): State<AppState>,
    Path(team_id): Path<u64>,
) -> Result<Json<DeleteTeamResponse>, ApiError> {
    debug!(team_id, "Deleting team");

    let deletion = state
        .roster_service
        .delete_team(TeamId::new(team_id))
        .await?;

    Ok(Json(DeleteTeamResponse {
        message: deletion.message(),
        removed_players: deletion.removed_players,
    }))
}

/// GET /api/v1/teams/{team_id}/players
pub async fn team_players(
    State(state): State<AppState>,
    Path(team_id): Path<u64>,
) -> Result<Json<TeamPlayersResponse>, ApiError> {
    debug!(team_id, "Listing team players");

    let players = state
        .roster_service
        .team_players(TeamId::new(team_id))
        .await?;
    let players: Vec<PlayerResponse> = players.iter().map(PlayerResponse::from).collect();
    let total = players.len();

    Ok(Json(TeamPlayersResponse {
        team_id,
        players,
        total,
    }))
}
