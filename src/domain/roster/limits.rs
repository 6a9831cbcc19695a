//! Roster ceilings

use serde::{Deserialize, Serialize};

/// Maximum number of players in one team
pub const MAX_PLAYER_COUNT: usize = 18;

/// Maximum number of foreign players in one team
pub const MAX_FOREIGN_COUNT: usize = 6;

/// Maximum number of goalkeepers in one team
pub const MAX_GOALKEEPER_COUNT: usize = 2;

/// Ceilings applied to every team's roster
///
/// A ceiling is reached when the current count equals it; the next addition is
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterLimits {
    pub max_players: usize,
    pub max_foreign: usize,
    pub max_goalkeepers: usize,
}

impl Default for RosterLimits {
    fn default() -> Self {
        Self {
            max_players: MAX_PLAYER_COUNT,
            max_foreign: MAX_FOREIGN_COUNT,
            max_goalkeepers: MAX_GOALKEEPER_COUNT,
        }
    }
}

impl RosterLimits {
    pub fn players_full(&self, count: usize) -> bool {
        count >= self.max_players
    }

    pub fn foreign_full(&self, count: usize) -> bool {
        count >= self.max_foreign
    }

    pub fn goalkeepers_full(&self, count: usize) -> bool {
        count >= self.max_goalkeepers
    }
}
