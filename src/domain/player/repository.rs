//! Player repository trait

use async_trait::async_trait;

use super::entity::{Nationality, NewPlayer, Player, PlayerId, PlayerRole};
use crate::domain::team::TeamId;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Repository for player persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    /// Get a player by ID
    async fn get(&self, id: PlayerId) -> Result<Option<Player>, DomainError>;

    /// Get a player by first and last name
    async fn get_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Player>, DomainError>;

    /// Check if a player exists
    async fn exists(&self, id: PlayerId) -> Result<bool, DomainError>;

    /// Check if a player with this first and last name exists in any team
    async fn exists_by_name(&self, first_name: &str, last_name: &str)
        -> Result<bool, DomainError>;

    /// List players of a team ordered by ID
    async fn list_by_team(&self, team_id: TeamId) -> Result<Vec<Player>, DomainError>;

    /// Count players of a team
    async fn count_by_team(&self, team_id: TeamId) -> Result<usize, DomainError>;

    /// Count players of a team with the given nationality
    async fn count_by_team_and_nationality(
        &self,
        team_id: TeamId,
        nationality: Nationality,
    ) -> Result<usize, DomainError>;

    /// Count players of a team with the given role
    async fn count_by_team_and_role(
        &self,
        team_id: TeamId,
        role: PlayerRole,
    ) -> Result<usize, DomainError>;

    /// Persist a new player, assigning it a fresh ID
    async fn create(&self, player: NewPlayer) -> Result<Player, DomainError>;

    /// Update an existing player
    async fn update(&self, player: Player) -> Result<Player, DomainError>;

    /// Delete a player by ID, returns true if it was present
    async fn delete(&self, id: PlayerId) -> Result<bool, DomainError>;

    /// Delete every player of a team, returns how many were removed
    async fn delete_by_team(&self, team_id: TeamId) -> Result<usize, DomainError>;
}
