//! Player endpoints

use axum::extract::State;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, Path};
use crate::domain::player::{validate_player_name, Nationality, Player, PlayerId, PlayerRole};
use crate::domain::team::TeamId;
use crate::infrastructure::roster::{ReassignPlayerRequest, RegisterPlayerRequest};

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterPlayerApiRequest {
    pub first_name: String,
    pub last_name: String,
    pub nationality: Nationality,
    pub role: PlayerRole,
    pub team_id: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReassignPlayerApiRequest {
    pub team_id: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerResponse {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub nationality: Nationality,
    pub role: PlayerRole,
    pub team_id: u64,
}

impl From<&Player> for PlayerResponse {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id().value(),
            first_name: player.first_name().to_string(),
            last_name: player.last_name().to_string(),
            nationality: player.nationality(),
            role: player.role(),
            team_id: player.team_id().value(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerMessageResponse {
    pub message: String,
    pub player: PlayerResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReassignPlayerResponse {
    pub message: String,
    pub previous_team: String,
    pub player: PlayerResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeletePlayerResponse {
    pub message: String,
}

/// POST /api/v1/players
pub async fn register_player(
    State(state): State<AppState>,
    Json(request): Json<RegisterPlayerApiRequest>,
) -> Result<Json<PlayerMessageResponse>, ApiError> {
    debug!(
        first_name = %request.first_name,
        last_name = %request.last_name,
        team_id = request.team_id,
        "Registering player"
    );

    validate_player_name(&request.first_name, &request.last_name)
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    let registration = state
        .roster_service
        .register_player(RegisterPlayerRequest {
            first_name: request.first_name,
            last_name: request.last_name,
            nationality: request.nationality,
            role: request.role,
            team_id: TeamId::new(request.team_id),
        })
        .await?;

    Ok(Json(PlayerMessageResponse {
        message: registration.message(),
        player: PlayerResponse::from(&registration.player),
    }))
}

/// PUT /api/v1/players/{player_id}/team
pub async fn reassign_player(
    State(state): State<AppState>,
    Path(player_id): Path<u64>,
    Json(request): Json<ReassignPlayerApiRequest>,
) -> Result<Json<ReassignPlayerResponse>, ApiError> {
    debug!(player_id, team_id = request.team_id, "Reassigning player");

    let transfer = state
        .roster_service
        .reassign_player(ReassignPlayerRequest {
            player_id: PlayerId::new(player_id),
            team_id: TeamId::new(request.team_id),
        })
        .await?;

    Ok(Json(ReassignPlayerResponse {
        message: transfer.message(),
        previous_team: transfer.previous_team_name.clone(),
        player: PlayerResponse::from(&transfer.player),
    }))
}

/// DELETE /api/v1/players/{player_id}
pub async fn delete_player(
    State(state): State<AppState>,
    Path(player_id): Path<u64>,
) -> Result<Json<DeletePlayerResponse>, ApiError> {
    debug!(player_id, "Deleting player");

    let deletion = state
        .roster_service
        .delete_player(PlayerId::new(player_id))
        .await?;

    Ok(Json(DeletePlayerResponse {
        message: deletion.message(),
    }))
}
