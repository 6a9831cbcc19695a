//! Roster v1 API endpoints

pub mod players;
pub mod teams;

use axum::{
    extract::State,
    routing::{delete, get, post, put},
    Router,
};

use super::state::AppState;
use super::types::Json;
use crate::domain::roster::RosterLimits;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/teams", get(teams::list_teams).post(teams::register_team))
        .route("/teams/{team_id}", delete(teams::delete_team))
        .route("/teams/{team_id}/name", put(teams::rename_team))
        .route("/teams/{team_id}/players", get(teams::team_players))
        .route("/players", post(players::register_player))
        .route("/players/{player_id}", delete(players::delete_player))
        .route("/players/{player_id}/team", put(players::reassign_player))
        .route("/roster/limits", get(roster_limits))
}

/// GET /api/v1/roster/limits
pub async fn roster_limits(State(state): State<AppState>) -> Json<RosterLimits> {
    Json(state.roster_service.limits())
}
