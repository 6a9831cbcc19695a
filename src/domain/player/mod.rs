//! Player domain module

mod entity;
mod repository;
mod validation;

pub use entity::{Nationality, NewPlayer, Player, PlayerId, PlayerRole};
pub use repository::PlayerRepository;
pub use validation::{validate_player_name, PlayerValidationError, MAX_PLAYER_NAME_LENGTH};

#[cfg(test)]
pub use repository::MockPlayerRepository;
