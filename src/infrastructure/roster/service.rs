//! Roster service
//!
//! Runs the ordered validation pipeline of every roster mutation. Checks run
//! in a fixed order and the first failure aborts the operation before anything
//! is written, so the error a caller sees is always the highest-priority one.
//!
//! Mutating pipelines are serialized through one exclusive section: nothing
//! can slip between the last limit check and the commit.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, warn};

use super::outcome::{
    PlayerDeletion, PlayerRegistration, PlayerTransfer, ReassignPlayerRequest,
    RegisterPlayerRequest, RenameTeamRequest, TeamDeletion, TeamRegistration, TeamRename,
};
use crate::domain::player::{Player, PlayerId, PlayerRepository};
use crate::domain::roster::RosterLimits;
use crate::domain::team::{Team, TeamId, TeamRepository};
use crate::domain::DomainError;
use crate::infrastructure::player::PlayerService;
use crate::infrastructure::team::TeamService;

/// Roster service composing team and player rules
pub struct RosterService {
    teams: TeamService,
    players: PlayerService,
    limits: RosterLimits,
    write_lock: Mutex<()>,
}

impl RosterService {
    /// Create a new roster service over the given repositories
    pub fn new(
        team_repository: Arc<dyn TeamRepository>,
        player_repository: Arc<dyn PlayerRepository>,
        limits: RosterLimits,
    ) -> Self {
        Self {
            teams: TeamService::new(team_repository),
            players: PlayerService::new(player_repository),
            limits,
            write_lock: Mutex::new(()),
        }
    }

    /// Ceilings enforced by this service
    pub fn limits(&self) -> RosterLimits {
        self.limits
    }

    /// List all teams
    pub async fn list_teams(&self) -> Result<Vec<Team>, DomainError> {
        self.teams.list().await
    }

    /// List the players of a team; an unknown team has no players
    pub async fn team_players(&self, team_id: TeamId) -> Result<Vec<Player>, DomainError> {
        self.players.list_by_team(team_id).await
    }

    /// Register a team under a name no other team uses
    pub async fn register_team(&self, name: &str) -> Result<TeamRegistration, DomainError> {
        let _guard = self.write_lock.lock().await;

        let team = self.teams.register(name).await.inspect_err(|e| {
            warn!(name = %name, error = %e, "Team registration rejected");
        })?;

        Ok(TeamRegistration { team })
    }

    /// Register a player into an existing team
    ///
    /// Check order: team exists, identity is free, squad size, goalkeepers,
    /// foreign players.
    pub async fn register_player(
        &self,
        request: RegisterPlayerRequest,
    ) -> Result<PlayerRegistration, DomainError> {
        let _guard = self.write_lock.lock().await;

        let team = self.teams.require(request.team_id).await.inspect_err(|_| {
            warn!(team_id = %request.team_id, "Player registration rejected: unknown team");
        })?;

        if let Some(existing) = self
            .players
            .get_by_name(&request.first_name, &request.last_name)
            .await?
        {
            let existing_team = self.team_name_of(&existing).await?;
            warn!(
                name = %existing.full_name(),
                team = %existing_team,
                "Player registration rejected: player already exists"
            );
            return Err(DomainError::already_exists(format!(
                "player {} {} in {}",
                request.first_name, request.last_name, existing_team
            )));
        }

        self.check_squad_size(&team).await?;

        if request.role.is_goalkeeper() {
            self.check_goalkeepers(&team).await?;
        }

        if request.nationality.is_foreign() {
            self.check_foreign(&team).await?;
        }

        let player = self
            .players
            .register(
                &request.first_name,
                &request.last_name,
                request.nationality,
                request.role,
                &team,
            )
            .await?;

        Ok(PlayerRegistration { player, team })
    }

    /// Move a player to another team
    ///
    /// Check order: target team exists, player exists, squad size, foreign
    /// players, goalkeepers. Counts are taken on the target team as it stands,
    /// so a move into the player's current team is validated like any other.
    pub async fn reassign_player(
        &self,
        request: ReassignPlayerRequest,
    ) -> Result<PlayerTransfer, DomainError> {
        let _guard = self.write_lock.lock().await;

        let team = self.teams.require(request.team_id).await.inspect_err(|_| {
            warn!(team_id = %request.team_id, "Player reassignment rejected: unknown team");
        })?;

        let player = self.players.require(request.player_id).await.inspect_err(|_| {
            warn!(player_id = %request.player_id, "Player reassignment rejected: unknown player");
        })?;

        self.check_squad_size(&team).await?;

        if player.nationality().is_foreign() {
            self.check_foreign(&team).await?;
        }

        if player.role().is_goalkeeper() {
            self.check_goalkeepers(&team).await?;
        }

        let previous_team_name = self.team_name_of(&player).await?;
        let player = self.players.reassign_team(player.id(), &team).await?;

        Ok(PlayerTransfer {
            player,
            previous_team_name,
            team,
        })
    }

    /// Delete a team together with its whole roster
    pub async fn delete_team(&self, team_id: TeamId) -> Result<TeamDeletion, DomainError> {
        let _guard = self.write_lock.lock().await;

        let team = self.teams.require(team_id).await.inspect_err(|_| {
            warn!(team_id = %team_id, "Team deletion rejected: unknown team");
        })?;

        // Players first: they hold the reference to the team.
        let removed_players = self.players.delete_by_team(team_id).await?;
        self.teams.delete(team_id).await?;

        info!(
            team_id = %team_id,
            name = %team.name(),
            removed_players,
            "Team deleted"
        );

        Ok(TeamDeletion {
            team,
            removed_players,
        })
    }

    /// Delete a single player
    pub async fn delete_player(&self, player_id: PlayerId) -> Result<PlayerDeletion, DomainError> {
        let _guard = self.write_lock.lock().await;

        let player = self.players.require(player_id).await.inspect_err(|_| {
            warn!(player_id = %player_id, "Player deletion rejected: unknown player");
        })?;

        let team_name = self.team_name_of(&player).await?;
        self.players.delete(player_id).await?;

        info!(
            player_id = %player_id,
            name = %player.full_name(),
            team = %team_name,
            "Player deleted"
        );

        Ok(PlayerDeletion { player, team_name })
    }

    /// Rename a team
    ///
    /// Another team already using the new name is rejected; renaming a team to
    /// its current name succeeds.
    pub async fn rename_team(&self, request: RenameTeamRequest) -> Result<TeamRename, DomainError> {
        let _guard = self.write_lock.lock().await;

        let team = self.teams.require(request.team_id).await.inspect_err(|_| {
            warn!(team_id = %request.team_id, "Team rename rejected: unknown team");
        })?;

        if let Some(other) = self.teams.get_by_name(&request.name).await? {
            if other.id() != team.id() {
                warn!(
                    team_id = %team.id(),
                    name = %request.name,
                    holder = %other.id(),
                    "Team rename rejected: name already taken"
                );
                return Err(DomainError::already_exists(format!(
                    "team {}",
                    request.name
                )));
            }
        }

        let previous_name = team.name().to_string();
        let team = self.teams.rename(team.id(), &request.name).await?;

        Ok(TeamRename {
            team,
            previous_name,
        })
    }

    async fn check_squad_size(&self, team: &Team) -> Result<(), DomainError> {
        let count = self.players.count_by_team(team.id()).await?;

        if self.limits.players_full(count) {
            warn!(
                team = %team.name(),
                limit = self.limits.max_players,
                "Team already has the maximum number of players"
            );
            return Err(DomainError::limit_exceeded("max players"));
        }

        Ok(())
    }

    async fn check_goalkeepers(&self, team: &Team) -> Result<(), DomainError> {
        let count = self.players.count_goalkeepers_by_team(team.id()).await?;

        if self.limits.goalkeepers_full(count) {
            warn!(
                team = %team.name(),
                limit = self.limits.max_goalkeepers,
                "Team already has the maximum number of goalkeepers"
            );
            return Err(DomainError::limit_exceeded("max goalkeepers"));
        }

        Ok(())
    }

    async fn check_foreign(&self, team: &Team) -> Result<(), DomainError> {
        let count = self.players.count_foreign_by_team(team.id()).await?;

        if self.limits.foreign_full(count) {
            warn!(
                team = %team.name(),
                limit = self.limits.max_foreign,
                "Team already has the maximum number of foreign players"
            );
            return Err(DomainError::limit_exceeded("max foreign"));
        }

        Ok(())
    }

    async fn team_name_of(&self, player: &Player) -> Result<String, DomainError> {
        self.teams
            .get(player.team_id())
            .await?
            .map(|team| team.name().to_string())
            .ok_or_else(|| {
                DomainError::internal(format!(
                    "player {} references missing team {}",
                    player.id(),
                    player.team_id()
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::player::{MockPlayerRepository, Nationality, PlayerRole};
    use crate::domain::roster::{MAX_FOREIGN_COUNT, MAX_GOALKEEPER_COUNT, MAX_PLAYER_COUNT};
    use crate::domain::team::{MockTeamRepository, NewTeam};
    use crate::infrastructure::player::InMemoryPlayerRepository;
    use crate::infrastructure::team::InMemoryTeamRepository;
    use mockall::Sequence;

    fn create_service() -> RosterService {
        RosterService::new(
            Arc::new(InMemoryTeamRepository::new()),
            Arc::new(InMemoryPlayerRepository::new()),
            RosterLimits::default(),
        )
    }

    fn player_request(
        first: &str,
        last: &str,
        nationality: Nationality,
        role: PlayerRole,
        team_id: TeamId,
    ) -> RegisterPlayerRequest {
        RegisterPlayerRequest {
            first_name: first.to_string(),
            last_name: last.to_string(),
            nationality,
            role,
            team_id,
        }
    }

    async fn team(service: &RosterService, name: &str) -> Team {
        service.register_team(name).await.unwrap().team
    }

    /// Register `count` players named `<prefix><n> Player` into `team_id`
    async fn fill(
        service: &RosterService,
        team_id: TeamId,
        prefix: &str,
        count: usize,
        nationality: Nationality,
        role: PlayerRole,
    ) -> Vec<Player> {
        let mut players = Vec::with_capacity(count);

        for n in 0..count {
            let request = player_request(
                &format!("{}{}", prefix, n),
                "Player",
                nationality,
                role,
                team_id,
            );
            players.push(service.register_player(request).await.unwrap().player);
        }

        players
    }

    async fn roster_size(service: &RosterService, team_id: TeamId) -> usize {
        service.team_players(team_id).await.unwrap().len()
    }

    #[tokio::test]
    async fn test_limits_are_injected() {
        let service = create_service();
        assert_eq!(service.limits(), RosterLimits::default());
        assert_eq!(service.limits().max_players, MAX_PLAYER_COUNT);
    }

    #[tokio::test]
    async fn test_register_team() {
        let service = create_service();

        let registration = service.register_team("Alpha").await.unwrap();
        assert_eq!(registration.team.name(), "Alpha");
        assert_eq!(service.list_teams().await.unwrap(), vec![registration.team]);
    }

    #[tokio::test]
    async fn test_register_team_duplicate_leaves_original() {
        let service = create_service();
        let original = team(&service, "Alpha").await;

        let result = service.register_team("Alpha").await;
        assert_eq!(result, Err(DomainError::already_exists("team Alpha")));
        assert_eq!(service.list_teams().await.unwrap(), vec![original]);
    }

    #[tokio::test]
    async fn test_register_player() {
        let service = create_service();
        let alpha = team(&service, "Alpha").await;

        let registration = service
            .register_player(player_request(
                "Jane",
                "Roe",
                Nationality::Local,
                PlayerRole::Forward,
                alpha.id(),
            ))
            .await
            .unwrap();

        assert_eq!(registration.player.team_id(), alpha.id());
        assert_eq!(registration.team, alpha);
        assert_eq!(registration.message(), "Jane Roe added to the team Alpha.");
    }

    #[tokio::test]
    async fn test_register_player_unknown_team() {
        let service = create_service();

        let result = service
            .register_player(player_request(
                "Jane",
                "Roe",
                Nationality::Local,
                PlayerRole::Forward,
                TeamId::new(42),
            ))
            .await;

        assert_eq!(result, Err(DomainError::not_found("team 42")));
    }

    #[tokio::test]
    async fn test_register_player_identity_collision_across_teams() {
        let service = create_service();
        let alpha = team(&service, "Alpha").await;
        let beta = team(&service, "Beta").await;

        service
            .register_player(player_request(
                "Jane",
                "Roe",
                Nationality::Local,
                PlayerRole::Forward,
                alpha.id(),
            ))
            .await
            .unwrap();

        let result = service
            .register_player(player_request(
                "Jane",
                "Roe",
                Nationality::Foreign,
                PlayerRole::Defender,
                beta.id(),
            ))
            .await;

        assert_eq!(
            result,
            Err(DomainError::already_exists("player Jane Roe in Alpha"))
        );
        assert_eq!(roster_size(&service, beta.id()).await, 0);
    }

    #[tokio::test]
    async fn test_unknown_team_reported_before_identity_collision() {
        let service = create_service();
        let alpha = team(&service, "Alpha").await;
        fill(&service, alpha.id(), "P", 1, Nationality::Local, PlayerRole::Forward).await;

        let result = service
            .register_player(player_request(
                "P0",
                "Player",
                Nationality::Local,
                PlayerRole::Forward,
                TeamId::new(99),
            ))
            .await;

        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_identity_collision_reported_before_limits() {
        let service = create_service();
        let alpha = team(&service, "Alpha").await;
        fill(
            &service,
            alpha.id(),
            "P",
            MAX_PLAYER_COUNT,
            Nationality::Local,
            PlayerRole::Midfielder,
        )
        .await;

        let result = service
            .register_player(player_request(
                "P3",
                "Player",
                Nationality::Local,
                PlayerRole::Midfielder,
                alpha.id(),
            ))
            .await;

        assert!(matches!(result, Err(DomainError::AlreadyExists { .. })));
    }

    #[tokio::test]
    async fn test_squad_fills_up_to_max_players() {
        let service = create_service();
        let alpha = team(&service, "Alpha").await;
        fill(
            &service,
            alpha.id(),
            "Local",
            MAX_PLAYER_COUNT - 1,
            Nationality::Local,
            PlayerRole::Forward,
        )
        .await;

        let jane = service
            .register_player(player_request(
                "Jane",
                "Roe",
                Nationality::Local,
                PlayerRole::Forward,
                alpha.id(),
            ))
            .await;
        assert!(jane.is_ok());
        assert_eq!(roster_size(&service, alpha.id()).await, MAX_PLAYER_COUNT);

        let jim = service
            .register_player(player_request(
                "Jim",
                "Roe",
                Nationality::Local,
                PlayerRole::Forward,
                alpha.id(),
            ))
            .await;
        assert_eq!(jim, Err(DomainError::limit_exceeded("max players")));
        assert_eq!(roster_size(&service, alpha.id()).await, MAX_PLAYER_COUNT);

        let players = service.team_players(alpha.id()).await.unwrap();
        assert!(!players.iter().any(|p| p.full_name() == "Jim Roe"));
    }

    #[tokio::test]
    async fn test_goalkeeper_ceiling() {
        let service = create_service();
        let beta = team(&service, "Beta").await;
        fill(
            &service,
            beta.id(),
            "Keeper",
            MAX_GOALKEEPER_COUNT,
            Nationality::Local,
            PlayerRole::Goalkeeper,
        )
        .await;

        for nationality in [Nationality::Local, Nationality::Foreign] {
            let result = service
                .register_player(player_request(
                    "Third",
                    "Keeper",
                    nationality,
                    PlayerRole::Goalkeeper,
                    beta.id(),
                ))
                .await;
            assert_eq!(result, Err(DomainError::limit_exceeded("max goalkeepers")));
        }

        // Outfield players are unaffected
        let defender = service
            .register_player(player_request(
                "Solid",
                "Back",
                Nationality::Local,
                PlayerRole::Defender,
                beta.id(),
            ))
            .await;
        assert!(defender.is_ok());
    }

    #[tokio::test]
    async fn test_foreign_ceiling() {
        let service = create_service();
        let alpha = team(&service, "Alpha").await;
        fill(
            &service,
            alpha.id(),
            "Abroad",
            MAX_FOREIGN_COUNT,
            Nationality::Foreign,
            PlayerRole::Midfielder,
        )
        .await;

        let result = service
            .register_player(player_request(
                "One",
                "More",
                Nationality::Foreign,
                PlayerRole::Forward,
                alpha.id(),
            ))
            .await;
        assert_eq!(result, Err(DomainError::limit_exceeded("max foreign")));

        let local = service
            .register_player(player_request(
                "Home",
                "Grown",
                Nationality::Local,
                PlayerRole::Forward,
                alpha.id(),
            ))
            .await;
        assert!(local.is_ok());
    }

    #[tokio::test]
    async fn test_squad_size_reported_before_goalkeepers() {
        let service = create_service();
        let alpha = team(&service, "Alpha").await;
        fill(
            &service,
            alpha.id(),
            "Keeper",
            MAX_GOALKEEPER_COUNT,
            Nationality::Local,
            PlayerRole::Goalkeeper,
        )
        .await;
        fill(
            &service,
            alpha.id(),
            "Field",
            MAX_PLAYER_COUNT - MAX_GOALKEEPER_COUNT,
            Nationality::Local,
            PlayerRole::Defender,
        )
        .await;

        let result = service
            .register_player(player_request(
                "New",
                "Keeper",
                Nationality::Local,
                PlayerRole::Goalkeeper,
                alpha.id(),
            ))
            .await;

        assert_eq!(result, Err(DomainError::limit_exceeded("max players")));
    }

    /// Team with both the goalkeeper and foreign ceilings reached
    async fn saturated_team(service: &RosterService) -> Team {
        let team = team(service, "Saturated").await;
        fill(
            service,
            team.id(),
            "Keeper",
            MAX_GOALKEEPER_COUNT,
            Nationality::Foreign,
            PlayerRole::Goalkeeper,
        )
        .await;
        fill(
            service,
            team.id(),
            "Abroad",
            MAX_FOREIGN_COUNT - MAX_GOALKEEPER_COUNT,
            Nationality::Foreign,
            PlayerRole::Forward,
        )
        .await;
        team
    }

    #[tokio::test]
    async fn test_registration_checks_goalkeepers_before_foreign() {
        let service = create_service();
        let team = saturated_team(&service).await;

        let result = service
            .register_player(player_request(
                "Foreign",
                "Keeper",
                Nationality::Foreign,
                PlayerRole::Goalkeeper,
                team.id(),
            ))
            .await;

        assert_eq!(result, Err(DomainError::limit_exceeded("max goalkeepers")));
    }

    #[tokio::test]
    async fn test_reassignment_checks_foreign_before_goalkeepers() {
        let service = create_service();
        let target = saturated_team(&service).await;
        let origin = team(&service, "Origin").await;
        let keeper = fill(
            &service,
            origin.id(),
            "Travelling",
            1,
            Nationality::Foreign,
            PlayerRole::Goalkeeper,
        )
        .await
        .remove(0);

        let result = service
            .reassign_player(ReassignPlayerRequest {
                player_id: keeper.id(),
                team_id: target.id(),
            })
            .await;

        assert_eq!(result, Err(DomainError::limit_exceeded("max foreign")));
    }

    #[tokio::test]
    async fn test_reassign_player() {
        let service = create_service();
        let alpha = team(&service, "Alpha").await;
        let beta = team(&service, "Beta").await;
        let jane = fill(&service, alpha.id(), "Jane", 1, Nationality::Local, PlayerRole::Forward)
            .await
            .remove(0);

        let transfer = service
            .reassign_player(ReassignPlayerRequest {
                player_id: jane.id(),
                team_id: beta.id(),
            })
            .await
            .unwrap();

        assert_eq!(transfer.previous_team_name, "Alpha");
        assert_eq!(transfer.team, beta);
        assert_eq!(transfer.player.team_id(), beta.id());
        assert_eq!(
            transfer.message(),
            "Jane0 Player's team changed from Alpha to Beta."
        );
        assert_eq!(roster_size(&service, alpha.id()).await, 0);
        assert_eq!(roster_size(&service, beta.id()).await, 1);
    }

    #[tokio::test]
    async fn test_reassign_into_team_one_below_max() {
        let service = create_service();
        let alpha = team(&service, "Alpha").await;
        let beta = team(&service, "Beta").await;
        fill(
            &service,
            beta.id(),
            "Beta",
            MAX_PLAYER_COUNT - 1,
            Nationality::Local,
            PlayerRole::Defender,
        )
        .await;
        let mover = fill(&service, alpha.id(), "Mover", 1, Nationality::Local, PlayerRole::Forward)
            .await
            .remove(0);

        let result = service
            .reassign_player(ReassignPlayerRequest {
                player_id: mover.id(),
                team_id: beta.id(),
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(roster_size(&service, beta.id()).await, MAX_PLAYER_COUNT);
    }

    #[tokio::test]
    async fn test_reassign_into_full_team_keeps_player() {
        let service = create_service();
        let alpha = team(&service, "Alpha").await;
        let beta = team(&service, "Beta").await;
        fill(
            &service,
            beta.id(),
            "Beta",
            MAX_PLAYER_COUNT,
            Nationality::Local,
            PlayerRole::Defender,
        )
        .await;
        let mover = fill(&service, alpha.id(), "Mover", 1, Nationality::Local, PlayerRole::Forward)
            .await
            .remove(0);

        let result = service
            .reassign_player(ReassignPlayerRequest {
                player_id: mover.id(),
                team_id: beta.id(),
            })
            .await;

        assert_eq!(result, Err(DomainError::limit_exceeded("max players")));

        let players = service.team_players(alpha.id()).await.unwrap();
        assert_eq!(players.len(), 1);
        assert_eq!(players[0].team_id(), alpha.id());
        assert_eq!(roster_size(&service, beta.id()).await, MAX_PLAYER_COUNT);
    }

    #[tokio::test]
    async fn test_reassign_to_own_full_team_is_revalidated() {
        let service = create_service();
        let alpha = team(&service, "Alpha").await;
        let players = fill(
            &service,
            alpha.id(),
            "Alpha",
            MAX_PLAYER_COUNT,
            Nationality::Local,
            PlayerRole::Defender,
        )
        .await;

        let result = service
            .reassign_player(ReassignPlayerRequest {
                player_id: players[0].id(),
                team_id: alpha.id(),
            })
            .await;

        assert!(matches!(result, Err(DomainError::LimitExceeded { .. })));
    }

    #[tokio::test]
    async fn test_reassign_unknown_team_reported_before_unknown_player() {
        let service = create_service();

        let result = service
            .reassign_player(ReassignPlayerRequest {
                player_id: PlayerId::new(7),
                team_id: TeamId::new(8),
            })
            .await;
        assert_eq!(result, Err(DomainError::not_found("team 8")));

        let alpha = team(&service, "Alpha").await;
        let result = service
            .reassign_player(ReassignPlayerRequest {
                player_id: PlayerId::new(7),
                team_id: alpha.id(),
            })
            .await;
        assert_eq!(result, Err(DomainError::not_found("player 7")));
    }

    #[tokio::test]
    async fn test_delete_team_cascades() {
        let service = create_service();
        let alpha = team(&service, "Alpha").await;
        let beta = team(&service, "Beta").await;
        fill(&service, alpha.id(), "A", 5, Nationality::Local, PlayerRole::Forward).await;
        fill(&service, beta.id(), "B", 2, Nationality::Local, PlayerRole::Forward).await;

        let deletion = service.delete_team(alpha.id()).await.unwrap();

        assert_eq!(deletion.team.name(), "Alpha");
        assert_eq!(deletion.removed_players, 5);
        assert_eq!(deletion.message(), "Team Alpha deleted from database.");
        assert_eq!(roster_size(&service, alpha.id()).await, 0);
        assert_eq!(service.list_teams().await.unwrap(), vec![beta.clone()]);
        assert_eq!(roster_size(&service, beta.id()).await, 2);
    }

    #[tokio::test]
    async fn test_delete_unknown_team() {
        let service = create_service();

        let result = service.delete_team(TeamId::new(3)).await;
        assert_eq!(result, Err(DomainError::not_found("team 3")));
    }

    #[tokio::test]
    async fn test_delete_team_removes_players_before_team() {
        let mut teams = MockTeamRepository::new();
        let mut players = MockPlayerRepository::new();
        let mut seq = Sequence::new();
        let alpha = NewTeam::new("Alpha").unwrap().into_team(TeamId::new(1));

        teams
            .expect_get()
            .times(2)
            .returning(move |_| Ok(Some(alpha.clone())));
        players
            .expect_delete_by_team()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(4));
        teams
            .expect_delete()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(true));

        let service =
            RosterService::new(Arc::new(teams), Arc::new(players), RosterLimits::default());
        let deletion = service.delete_team(TeamId::new(1)).await.unwrap();

        assert_eq!(deletion.removed_players, 4);
    }

    #[tokio::test]
    async fn test_rejected_registration_writes_nothing() {
        let mut teams = MockTeamRepository::new();
        let mut players = MockPlayerRepository::new();
        let alpha = NewTeam::new("Alpha").unwrap().into_team(TeamId::new(1));

        teams
            .expect_get()
            .returning(move |_| Ok(Some(alpha.clone())));
        players.expect_get_by_name().returning(|_, _| Ok(None));
        players
            .expect_count_by_team()
            .returning(|_| Ok(MAX_PLAYER_COUNT));
        players.expect_create().never();
        players.expect_count_by_team_and_role().never();
        players.expect_count_by_team_and_nationality().never();

        let service =
            RosterService::new(Arc::new(teams), Arc::new(players), RosterLimits::default());
        let result = service
            .register_player(player_request(
                "Jane",
                "Roe",
                Nationality::Foreign,
                PlayerRole::Goalkeeper,
                TeamId::new(1),
            ))
            .await;

        assert_eq!(result, Err(DomainError::limit_exceeded("max players")));
    }

    #[tokio::test]
    async fn test_rejected_reassignment_writes_nothing() {
        let mut teams = MockTeamRepository::new();
        let mut players = MockPlayerRepository::new();
        let beta = NewTeam::new("Beta").unwrap().into_team(TeamId::new(2));
        let keeper = crate::domain::player::NewPlayer::new(
            "Gina",
            "Keeper",
            Nationality::Local,
            PlayerRole::Goalkeeper,
            TeamId::new(1),
        )
        .unwrap()
        .into_player(PlayerId::new(5));

        teams.expect_get().returning(move |_| Ok(Some(beta.clone())));
        players
            .expect_get()
            .returning(move |_| Ok(Some(keeper.clone())));
        players.expect_count_by_team().returning(|_| Ok(3));
        players.expect_count_by_team_and_nationality().never();
        players
            .expect_count_by_team_and_role()
            .returning(|_, _| Ok(MAX_GOALKEEPER_COUNT));
        players.expect_update().never();

        let service =
            RosterService::new(Arc::new(teams), Arc::new(players), RosterLimits::default());
        let result = service
            .reassign_player(ReassignPlayerRequest {
                player_id: PlayerId::new(5),
                team_id: TeamId::new(2),
            })
            .await;

        assert_eq!(result, Err(DomainError::limit_exceeded("max goalkeepers")));
    }

    #[tokio::test]
    async fn test_delete_player() {
        let service = create_service();
        let alpha = team(&service, "Alpha").await;
        let jane = service
            .register_player(player_request(
                "Jane",
                "Roe",
                Nationality::Local,
                PlayerRole::Forward,
                alpha.id(),
            ))
            .await
            .unwrap()
            .player;

        let deletion = service.delete_player(jane.id()).await.unwrap();

        assert_eq!(deletion.team_name, "Alpha");
        assert_eq!(
            deletion.message(),
            "Player Jane Roe deleted from team Alpha."
        );
        assert_eq!(roster_size(&service, alpha.id()).await, 0);

        let again = service.delete_player(jane.id()).await;
        assert_eq!(again, Err(DomainError::not_found(format!("player {}", jane.id()))));
    }

    #[tokio::test]
    async fn test_deleted_player_name_can_be_reused() {
        let service = create_service();
        let alpha = team(&service, "Alpha").await;
        let jane = fill(&service, alpha.id(), "Jane", 1, Nationality::Local, PlayerRole::Forward)
            .await
            .remove(0);

        service.delete_player(jane.id()).await.unwrap();

        let again = service
            .register_player(player_request(
                "Jane0",
                "Player",
                Nationality::Local,
                PlayerRole::Forward,
                alpha.id(),
            ))
            .await;
        assert!(again.is_ok());
    }

    #[tokio::test]
    async fn test_rename_team() {
        let service = create_service();
        let alpha = team(&service, "Alpha").await;

        let rename = service
            .rename_team(RenameTeamRequest {
                team_id: alpha.id(),
                name: "Omega".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(rename.previous_name, "Alpha");
        assert_eq!(rename.team.name(), "Omega");
        assert_eq!(rename.message(), "Team name changed from Alpha to Omega.");
    }

    #[tokio::test]
    async fn test_rename_to_current_name_is_noop() {
        let service = create_service();
        let alpha = team(&service, "Alpha").await;
        fill(&service, alpha.id(), "A", 3, Nationality::Local, PlayerRole::Forward).await;

        let rename = service
            .rename_team(RenameTeamRequest {
                team_id: alpha.id(),
                name: "Alpha".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(rename.team.id(), alpha.id());
        assert_eq!(rename.team.name(), "Alpha");
        assert_eq!(rename.team.created_at(), alpha.created_at());
        assert_eq!(service.list_teams().await.unwrap().len(), 1);
        assert_eq!(roster_size(&service, alpha.id()).await, 3);
    }

    #[tokio::test]
    async fn test_rename_into_taken_name() {
        let service = create_service();
        team(&service, "Alpha").await;
        let beta = team(&service, "Beta").await;

        let result = service
            .rename_team(RenameTeamRequest {
                team_id: beta.id(),
                name: "Alpha".to_string(),
            })
            .await;

        assert_eq!(result, Err(DomainError::already_exists("team Alpha")));
        let names: Vec<String> = service
            .list_teams()
            .await
            .unwrap()
            .iter()
            .map(|t| t.name().to_string())
            .collect();
        assert_eq!(names, vec!["Alpha", "Beta"]);
    }

    #[tokio::test]
    async fn test_rename_unknown_team() {
        let service = create_service();

        let result = service
            .rename_team(RenameTeamRequest {
                team_id: TeamId::new(9),
                name: "Omega".to_string(),
            })
            .await;

        assert_eq!(result, Err(DomainError::not_found("team 9")));
    }

    #[tokio::test]
    async fn test_team_players_of_unknown_team_is_empty() {
        let service = create_service();
        assert!(service.team_players(TeamId::new(1)).await.unwrap().is_empty());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_registrations_respect_ceiling() {
        let service = Arc::new(create_service());
        let alpha = team(&service, "Alpha").await;

        let mut handles = Vec::new();

        for n in 0..(MAX_PLAYER_COUNT * 2) {
            let service = Arc::clone(&service);
            let team_id = alpha.id();

            handles.push(tokio::spawn(async move {
                service
                    .register_player(player_request(
                        &format!("Rush{}", n),
                        "Player",
                        Nationality::Local,
                        PlayerRole::Forward,
                        team_id,
                    ))
                    .await
            }));
        }

        let mut accepted = 0;
        let mut rejected = 0;

        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => accepted += 1,
                Err(DomainError::LimitExceeded { .. }) => rejected += 1,
                Err(other) => panic!("unexpected error: {}", other),
            }
        }

        assert_eq!(accepted, MAX_PLAYER_COUNT);
        assert_eq!(rejected, MAX_PLAYER_COUNT);
        assert_eq!(roster_size(&service, alpha.id()).await, MAX_PLAYER_COUNT);
    }
}
