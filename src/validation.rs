use thiserror::Error;

use crate::scoring::constants::{MAX_PLAYERS, MIN_PLAYERS};

pub const MIN_NAME_LENGTH: usize = 2;
pub const MAX_NAME_LENGTH: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,

    #[error("Name must be at least {} characters", MIN_NAME_LENGTH)]
    NameTooShort,

    #[error("Name must be {} characters or less", MAX_NAME_LENGTH)]
    NameTooLong,

    #[error("A game requires at least {} player", MIN_PLAYERS)]
    TooFewPlayers,

    #[error("A game supports up to {} players", MAX_PLAYERS)]
    TooManyPlayers,
}

/// Trims and checks a player name, returning the trimmed form
pub fn validate_player_name(name: &str) -> Result<&str, ValidationError> {
    let trimmed = name.trim();
    let length = trimmed.chars().count();

    if length == 0 {
        return Err(ValidationError::NameRequired);
    }
    if length < MIN_NAME_LENGTH {
        return Err(ValidationError::NameTooShort);
    }
    if length > MAX_NAME_LENGTH {
        return Err(ValidationError::NameTooLong);
    }

    Ok(trimmed)
}

pub fn validate_player_count(count: usize) -> Result<(), ValidationError> {
    if count < MIN_PLAYERS {
        return Err(ValidationError::TooFewPlayers);
    }
    if count > MAX_PLAYERS {
        return Err(ValidationError::TooManyPlayers);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", Err(ValidationError::NameRequired))]
    #[case("   ", Err(ValidationError::NameRequired))]
    #[case("A", Err(ValidationError::NameTooShort))]
    #[case("  Al ", Ok("Al"))]
    #[case("Robin", Ok("Robin"))]
    fn player_names(#[case] name: &str, #[case] expected: Result<&str, ValidationError>) {
        assert_eq!(validate_player_name(name), expected);
    }

    #[test]
    fn long_names_are_rejected() {
        let name = "x".repeat(31);
        assert_eq!(
            validate_player_name(&name),
            Err(ValidationError::NameTooLong)
        );
        assert!(validate_player_name(&"x".repeat(30)).is_ok());
    }

    #[rstest]
    #[case(0, Err(ValidationError::TooFewPlayers))]
    #[case(1, Ok(()))]
    #[case(5, Ok(()))]
    #[case(6, Err(ValidationError::TooManyPlayers))]
    fn player_counts(#[case] count: usize, #[case] expected: Result<(), ValidationError>) {
        assert_eq!(validate_player_count(count), expected);
    }
}
