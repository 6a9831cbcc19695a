//! Player validation

use thiserror::Error;

/// Errors that can occur during player validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlayerValidationError {
    #[error("Player first name cannot be empty")]
    EmptyFirstName,

    #[error("Player last name cannot be empty")]
    EmptyLastName,

    #[error("Player names cannot exceed {0} characters")]
    NameTooLong(usize),
}

pub const MAX_PLAYER_NAME_LENGTH: usize = 50;

/// Validate a player's first and last name
pub fn validate_player_name(
    first_name: &str,
    last_name: &str,
) -> Result<(), PlayerValidationError> {
    if first_name.trim().is_empty() {
        return Err(PlayerValidationError::EmptyFirstName);
    }

    if last_name.trim().is_empty() {
        return Err(PlayerValidationError::EmptyLastName);
    }

    if first_name.chars().count() > MAX_PLAYER_NAME_LENGTH
        || last_name.chars().count() > MAX_PLAYER_NAME_LENGTH
    {
        return Err(PlayerValidationError::NameTooLong(MAX_PLAYER_NAME_LENGTH));
    }

    Ok(())
}
