//! Player entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{validate_player_name, PlayerValidationError};
use crate::domain::team::TeamId;

/// Player identifier, assigned by the repository on creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for PlayerId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a player counts against the foreign player ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Nationality {
    Local,
    Foreign,
}

impl Nationality {
    pub fn is_foreign(&self) -> bool {
        matches!(self, Self::Foreign)
    }
}

impl std::fmt::Display for Nationality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Local => write!(f, "LOCAL"),
            Self::Foreign => write!(f, "FOREIGN"),
        }
    }
}

/// Playing role of a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerRole {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl PlayerRole {
    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, Self::Goalkeeper)
    }
}

impl std::fmt::Display for PlayerRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Goalkeeper => write!(f, "GOALKEEPER"),
            Self::Defender => write!(f, "DEFENDER"),
            Self::Midfielder => write!(f, "MIDFIELDER"),
            Self::Forward => write!(f, "FORWARD"),
        }
    }
}

/// A player that has not been persisted yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlayer {
    first_name: String,
    last_name: String,
    nationality: Nationality,
    role: PlayerRole,
    team_id: TeamId,
}

impl NewPlayer {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        nationality: Nationality,
        role: PlayerRole,
        team_id: TeamId,
    ) -> Result<Self, PlayerValidationError> {
        let first_name = first_name.into();
        let last_name = last_name.into();
        validate_player_name(&first_name, &last_name)?;

        Ok(Self {
            first_name,
            last_name,
            nationality,
            role,
            team_id,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn nationality(&self) -> Nationality {
        self.nationality
    }

    pub fn role(&self) -> PlayerRole {
        self.role
    }

    pub fn team_id(&self) -> TeamId {
        self.team_id
    }

    /// Materialize the player under the identifier chosen by the repository
    pub fn into_player(self, id: PlayerId) -> Player {
        let now = Utc::now();

        Player {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            nationality: self.nationality,
            role: self.role,
            team_id: self.team_id,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Player entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    first_name: String,
    last_name: String,
    nationality: Nationality,
    role: PlayerRole,
    /// Team the player currently belongs to
    team_id: TeamId,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Player {
    // Getters

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// First and last name joined by a space
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn nationality(&self) -> Nationality {
        self.nationality
    }

    pub fn role(&self) -> PlayerRole {
        self.role
    }

    pub fn team_id(&self) -> TeamId {
        self.team_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Setters

    /// Move the player to another team. Nothing else about the player changes.
    pub fn set_team(&mut self, team_id: TeamId) {
        self.team_id = team_id;
        self.updated_at = Utc::now();
    }
}
