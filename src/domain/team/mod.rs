//! Team domain module
//!
//! Teams are the unit rosters are counted against. A team never owns its
//! players; membership is recorded on the player.

mod entity;
mod repository;
mod validation;

pub use entity::{NewTeam, Team, TeamId};
pub use repository::TeamRepository;
pub use validation::{validate_team_name, TeamValidationError, MAX_TEAM_NAME_LENGTH};

#[cfg(test)]
pub use repository::MockTeamRepository;
