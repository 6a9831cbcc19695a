//! In-memory team repository implementation

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::team::{NewTeam, Team, TeamId, TeamRepository};
use crate::domain::DomainError;

/// In-memory implementation of TeamRepository
///
/// Team names behave like a unique index: creating or renaming into a name
/// held by another team is rejected.
#[derive(Debug)]
pub struct InMemoryTeamRepository {
    teams: Arc<RwLock<BTreeMap<TeamId, Team>>>,
    next_id: AtomicU64,
}

impl InMemoryTeamRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            teams: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: AtomicU64::new(1),
        }
    }
}

impl Default for InMemoryTeamRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn get(&self, id: TeamId) -> Result<Option<Team>, DomainError> {
        let teams = self.teams.read().await;
        Ok(teams.get(&id).cloned())
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Team>, DomainError> {
        let teams = self.teams.read().await;
        Ok(teams.values().find(|t| t.name() == name).cloned())
    }

    async fn exists(&self, id: TeamId) -> Result<bool, DomainError> {
        let teams = self.teams.read().await;
        Ok(teams.contains_key(&id))
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool, DomainError> {
        let teams = self.teams.read().await;
        Ok(teams.values().any(|t| t.name() == name))
    }

    async fn create(&self, team: NewTeam) -> Result<Team, DomainError> {
        let mut teams = self.teams.write().await;

        if teams.values().any(|t| t.name() == team.name()) {
            return Err(DomainError::already_exists(format!(
                "team {}",
                team.name()
            )));
        }

        let id = TeamId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let team = team.into_team(id);

        teams.insert(id, team.clone());
        Ok(team)
    }

    async fn update(&self, team: Team) -> Result<Team, DomainError> {
        let mut teams = self.teams.write().await;

        if !teams.contains_key(&team.id()) {
            return Err(DomainError::not_found(format!("team {}", team.id())));
        }

        if teams
            .values()
            .any(|t| t.id() != team.id() && t.name() == team.name())
        {
            return Err(DomainError::already_exists(format!(
                "team {}",
                team.name()
            )));
        }

        teams.insert(team.id(), team.clone());
        Ok(team)
    }

    async fn delete(&self, id: TeamId) -> Result<bool, DomainError> {
        let mut teams = self.teams.write().await;
        Ok(teams.remove(&id).is_some())
    }

    async fn list(&self) -> Result<Vec<Team>, DomainError> {
        let teams = self.teams.read().await;
        Ok(teams.values().cloned().collect())
    }
}
