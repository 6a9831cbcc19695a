//! Team service: existence and uniqueness rules for teams

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::team::{NewTeam, Team, TeamId, TeamRepository};
use crate::domain::DomainError;

/// Team service for managing teams
pub struct TeamService {
    repository: Arc<dyn TeamRepository>,
}

impl TeamService {
    /// Create a new team service
    pub fn new(repository: Arc<dyn TeamRepository>) -> Self {
        Self { repository }
    }

    /// Check if a team exists
    pub async fn exists(&self, id: TeamId) -> Result<bool, DomainError> {
        self.repository.exists(id).await
    }

    /// Check if a team with this name exists
    pub async fn exists_by_name(&self, name: &str) -> Result<bool, DomainError> {
        self.repository.exists_by_name(name).await
    }

    /// Get a team by ID
    pub async fn get(&self, id: TeamId) -> Result<Option<Team>, DomainError> {
        self.repository.get(id).await
    }

    /// Get a team by ID, failing with `NotFound` when it is missing
    pub async fn require(&self, id: TeamId) -> Result<Team, DomainError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("team {}", id)))
    }

    /// Get a team by name
    pub async fn get_by_name(&self, name: &str) -> Result<Option<Team>, DomainError> {
        self.repository.get_by_name(name).await
    }

    /// List all teams
    pub async fn list(&self) -> Result<Vec<Team>, DomainError> {
        self.repository.list().await
    }

    /// Register a new team under a unique name
    pub async fn register(&self, name: &str) -> Result<Team, DomainError> {
        let new_team = NewTeam::new(name).map_err(|e| DomainError::validation(e.to_string()))?;

        if self.repository.exists_by_name(name).await? {
            return Err(DomainError::already_exists(format!("team {}", name)));
        }

        let team = self.repository.create(new_team).await?;
        info!(id = %team.id(), name = %team.name(), "Team registered");

        Ok(team)
    }

    /// Rename a team
    ///
    /// The repository rejects a name held by another team with `AlreadyExists`.
    pub async fn rename(&self, id: TeamId, new_name: &str) -> Result<Team, DomainError> {
        let mut team = self.require(id).await?;

        team.set_name(new_name)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let team = self.repository.update(team).await?;
        info!(id = %id, name = %team.name(), "Team renamed");

        Ok(team)
    }

    /// Delete a team record
    ///
    /// The team's players must already be gone; see `PlayerService::delete_by_team`.
    pub async fn delete(&self, id: TeamId) -> Result<Team, DomainError> {
        let team = self.require(id).await?;

        if !self.repository.delete(id).await? {
            return Err(DomainError::not_found(format!("team {}", id)));
        }

        debug!(id = %id, "Team record removed");
        Ok(team)
    }
}
