//! Team repository trait

use async_trait::async_trait;

use super::entity::{NewTeam, Team, TeamId};
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Repository for team persistence
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Get a team by ID
    async fn get(&self, id: TeamId) -> Result<Option<Team>, DomainError>;

    /// Get a team by its exact name
    async fn get_by_name(&self, name: &str) -> Result<Option<Team>, DomainError>;

    /// Check if a team exists
    async fn exists(&self, id: TeamId) -> Result<bool, DomainError>;

    /// Check if a team with this exact name exists
    async fn exists_by_name(&self, name: &str) -> Result<bool, DomainError>;

    /// Persist a new team, assigning it a fresh ID
    async fn create(&self, team: NewTeam) -> Result<Team, DomainError>;

    /// Update an existing team
    async fn update(&self, team: Team) -> Result<Team, DomainError>;

    /// Delete a team by ID, returns true if it was present
    async fn delete(&self, id: TeamId) -> Result<bool, DomainError>;

    /// List all teams ordered by ID
    async fn list(&self) -> Result<Vec<Team>, DomainError>;
}
