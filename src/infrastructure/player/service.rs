//! Player service: existence checks and roster composition counts

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::player::{
    Nationality, NewPlayer, Player, PlayerId, PlayerRepository, PlayerRole,
};
use crate::domain::team::{Team, TeamId};
use crate::domain::DomainError;

/// Player service
///
/// Writes performed here assume the caller already validated the roster
/// ceilings of the target team.
pub struct PlayerService {
    repository: Arc<dyn PlayerRepository>,
}

impl PlayerService {
    /// Create a new player service
    pub fn new(repository: Arc<dyn PlayerRepository>) -> Self {
        Self { repository }
    }

    pub async fn exists(&self, id: PlayerId) -> Result<bool, DomainError> {
        self.repository.exists(id).await
    }

    pub async fn exists_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<bool, DomainError> {
        self.repository.exists_by_name(first_name, last_name).await
    }

    pub async fn get(&self, id: PlayerId) -> Result<Option<Player>, DomainError> {
        self.repository.get(id).await
    }

    /// Get a player by ID, failing with `NotFound` when it is missing
    pub async fn require(&self, id: PlayerId) -> Result<Player, DomainError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("player {}", id)))
    }

    pub async fn get_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Player>, DomainError> {
        self.repository.get_by_name(first_name, last_name).await
    }

    pub async fn list_by_team(&self, team_id: TeamId) -> Result<Vec<Player>, DomainError> {
        self.repository.list_by_team(team_id).await
    }

    pub async fn count_by_team(&self, team_id: TeamId) -> Result<usize, DomainError> {
        self.repository.count_by_team(team_id).await
    }

    pub async fn count_foreign_by_team(&self, team_id: TeamId) -> Result<usize, DomainError> {
        self.repository
            .count_by_team_and_nationality(team_id, Nationality::Foreign)
            .await
    }

    pub async fn count_goalkeepers_by_team(&self, team_id: TeamId) -> Result<usize, DomainError> {
        self.repository
            .count_by_team_and_role(team_id, PlayerRole::Goalkeeper)
            .await
    }

    /// Persist a new player in `team`
    pub async fn register(
        &self,
        first_name: &str,
        last_name: &str,
        nationality: Nationality,
        role: PlayerRole,
        team: &Team,
    ) -> Result<Player, DomainError> {
        let new_player = NewPlayer::new(first_name, last_name, nationality, role, team.id())
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let player = self.repository.create(new_player).await?;
        info!(
            id = %player.id(),
            name = %player.full_name(),
            team = %team.name(),
            "Player registered"
        );

        Ok(player)
    }

    /// Point a player at `new_team`
    pub async fn reassign_team(
        &self,
        player_id: PlayerId,
        new_team: &Team,
    ) -> Result<Player, DomainError> {
        let mut player = self.require(player_id).await?;
        player.set_team(new_team.id());

        let player = self.repository.update(player).await?;
        info!(
            id = %player_id,
            team = %new_team.name(),
            "Player reassigned"
        );

        Ok(player)
    }

    /// Delete one player
    pub async fn delete(&self, id: PlayerId) -> Result<(), DomainError> {
        if !self.repository.delete(id).await? {
            return Err(DomainError::not_found(format!("player {}", id)));
        }

        debug!(id = %id, "Player removed");
        Ok(())
    }

    /// Delete every player of a team, returns how many were removed
    pub async fn delete_by_team(&self, team_id: TeamId) -> Result<usize, DomainError> {
        let removed = self.repository.delete_by_team(team_id).await?;
        debug!(team_id = %team_id, removed, "Team players removed");

        Ok(removed)
    }
}
