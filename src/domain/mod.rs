//! Domain layer - Core entities, repository ports and roster rules

pub mod error;
pub mod player;
pub mod roster;
pub mod team;

pub use error::DomainError;
pub use player::{Nationality, NewPlayer, Player, PlayerId, PlayerRepository, PlayerRole};
pub use roster::{RosterLimits, MAX_FOREIGN_COUNT, MAX_GOALKEEPER_COUNT, MAX_PLAYER_COUNT};
pub use team::{NewTeam, Team, TeamId, TeamRepository};
