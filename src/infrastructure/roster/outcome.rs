//! Requests accepted and outcomes returned by the roster service

use crate::domain::player::{Nationality, Player, PlayerId, PlayerRole};
use crate::domain::team::{Team, TeamId};

/// Request for registering a new player
#[derive(Debug, Clone)]
pub struct RegisterPlayerRequest {
    pub first_name: String,
    pub last_name: String,
    pub nationality: Nationality,
    pub role: PlayerRole,
    pub team_id: TeamId,
}

/// Request for moving a player to another team
#[derive(Debug, Clone, Copy)]
pub struct ReassignPlayerRequest {
    pub player_id: PlayerId,
    pub team_id: TeamId,
}

/// Request for renaming a team
#[derive(Debug, Clone)]
pub struct RenameTeamRequest {
    pub team_id: TeamId,
    pub name: String,
}

/// A team was registered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRegistration {
    pub team: Team,
}

impl TeamRegistration {
    pub fn message(&self) -> String {
        format!(
            "Team {} registered with id {}.",
            self.team.name(),
            self.team.id()
        )
    }
}

/// A player was registered into a team
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRegistration {
    pub player: Player,
    pub team: Team,
}

impl PlayerRegistration {
    pub fn message(&self) -> String {
        format!(
            "{} added to the team {}.",
            self.player.full_name(),
            self.team.name()
        )
    }
}

/// A player moved between teams
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerTransfer {
    pub player: Player,
    /// Name of the team the player left, read before the move
    pub previous_team_name: String,
    pub team: Team,
}

impl PlayerTransfer {
    pub fn message(&self) -> String {
        format!(
            "{}'s team changed from {} to {}.",
            self.player.full_name(),
            self.previous_team_name,
            self.team.name()
        )
    }
}

/// A team and its roster were deleted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamDeletion {
    pub team: Team,
    pub removed_players: usize,
}

impl TeamDeletion {
    pub fn message(&self) -> String {
        format!("Team {} deleted from database.", self.team.name())
    }
}

/// A player was deleted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerDeletion {
    pub player: Player,
    pub team_name: String,
}

impl PlayerDeletion {
    pub fn message(&self) -> String {
        format!(
            "Player {} deleted from team {}.",
            self.player.full_name(),
            self.team_name
        )
    }
}

/// A team was renamed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRename {
    pub team: Team,
    pub previous_name: String,
}

impl TeamRename {
    pub fn message(&self) -> String {
        format!(
            "Team name changed from {} to {}.",
            self.previous_name,
            self.team.name()
        )
    }
}
