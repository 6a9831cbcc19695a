//! Football roster service
//!
//! Registers teams and players while enforcing per-team squad limits:
//! - at most 18 players per team
//! - at most 6 foreign players per team
//! - at most 2 goalkeepers per team

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use domain::{PlayerRepository, RosterLimits, TeamRepository};
use infrastructure::player::InMemoryPlayerRepository;
use infrastructure::roster::RosterService;
use infrastructure::team::InMemoryTeamRepository;
use tracing::info;

/// Create the application state backed by in-memory repositories
pub fn create_app_state() -> AppState {
    let teams: Arc<dyn TeamRepository> = Arc::new(InMemoryTeamRepository::new());
    let players: Arc<dyn PlayerRepository> = Arc::new(InMemoryPlayerRepository::new());

    create_app_state_with_repositories(teams, players)
}

/// Create the application state on top of the given repositories
pub fn create_app_state_with_repositories(
    teams: Arc<dyn TeamRepository>,
    players: Arc<dyn PlayerRepository>,
) -> AppState {
    let limits = RosterLimits::default();
    info!(
        max_players = limits.max_players,
        max_foreign = limits.max_foreign,
        max_goalkeepers = limits.max_goalkeepers,
        "Roster limits"
    );

    let roster_service = RosterService::new(teams, players, limits);

    AppState::new(Arc::new(roster_service))
}
