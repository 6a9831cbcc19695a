//! In-memory player repository implementation

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::player::{
    Nationality, NewPlayer, Player, PlayerId, PlayerRepository, PlayerRole,
};
use crate::domain::team::TeamId;
use crate::domain::DomainError;

/// In-memory implementation of PlayerRepository
///
/// The (first name, last name) pair behaves like a unique index.
#[derive(Debug)]
pub struct InMemoryPlayerRepository {
    players: Arc<RwLock<BTreeMap<PlayerId, Player>>>,
    next_id: AtomicU64,
}

impl InMemoryPlayerRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            players: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: AtomicU64::new(1),
        }
    }

    async fn count_where<F>(&self, team_id: TeamId, predicate: F) -> usize
    where
        F: Fn(&Player) -> bool,
    {
        let players = self.players.read().await;
        players
            .values()
            .filter(|p| p.team_id() == team_id && predicate(p))
            .count()
    }
}

impl Default for InMemoryPlayerRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn same_name(player: &Player, first_name: &str, last_name: &str) -> bool {
    player.first_name() == first_name && player.last_name() == last_name
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    async fn get(&self, id: PlayerId) -> Result<Option<Player>, DomainError> {
        let players = self.players.read().await;
        Ok(players.get(&id).cloned())
    }

    async fn get_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Option<Player>, DomainError> {
        let players = self.players.read().await;
        Ok(players
            .values()
            .find(|p| same_name(p, first_name, last_name))
            .cloned())
    }

    async fn exists(&self, id: PlayerId) -> Result<bool, DomainError> {
        let players = self.players.read().await;
        Ok(players.contains_key(&id))
    }

    async fn exists_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<bool, DomainError> {
        let players = self.players.read().await;
        Ok(players
            .values()
            .any(|p| same_name(p, first_name, last_name)))
    }

    async fn list_by_team(&self, team_id: TeamId) -> Result<Vec<Player>, DomainError> {
        let players = self.players.read().await;
        Ok(players
            .values()
            .filter(|p| p.team_id() == team_id)
            .cloned()
            .collect())
    }

    async fn count_by_team(&self, team_id: TeamId) -> Result<usize, DomainError> {
        Ok(self.count_where(team_id, |_| true).await)
    }

    async fn count_by_team_and_nationality(
        &self,
        team_id: TeamId,
        nationality: Nationality,
    ) -> Result<usize, DomainError> {
        Ok(self
            .count_where(team_id, |p| p.nationality() == nationality)
            .await)
    }

    async fn count_by_team_and_role(
        &self,
        team_id: TeamId,
        role: PlayerRole,
    ) -> Result<usize, DomainError> {
        Ok(self.count_where(team_id, |p| p.role() == role).await)
    }

    async fn create(&self, player: NewPlayer) -> Result<Player, DomainError> {
        let mut players = self.players.write().await;

        if players
            .values()
            .any(|p| same_name(p, player.first_name(), player.last_name()))
        {
            return Err(DomainError::already_exists(format!(
                "player {} {}",
                player.first_name(),
                player.last_name()
            )));
        }

        let id = PlayerId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let player = player.into_player(id);

        players.insert(id, player.clone());
        Ok(player)
    }

    async fn update(&self, player: Player) -> Result<Player, DomainError> {
        let mut players = self.players.write().await;

        if !players.contains_key(&player.id()) {
            return Err(DomainError::not_found(format!("player {}", player.id())));
        }

        players.insert(player.id(), player.clone());
        Ok(player)
    }

    async fn delete(&self, id: PlayerId) -> Result<bool, DomainError> {
        let mut players = self.players.write().await;
        Ok(players.remove(&id).is_some())
    }

    async fn delete_by_team(&self, team_id: TeamId) -> Result<usize, DomainError> {
        let mut players = self.players.write().await;
        let before = players.len();

        players.retain(|_, p| p.team_id() != team_id);

        Ok(before - players.len())
    }
}
