use thiserror::Error;

use crate::scoring::ScoreError;
use crate::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Player {0} is not part of this game")]
    UnknownPlayer(String),

    #[error("Game {0} not found")]
    NotFound(String),

    /// Every player in a game must have a score, even an all-zero one
    #[error("No score recorded for player {0}")]
    MissingScore(String),

    #[error("Player {0} appears more than once")]
    DuplicatePlayer(String),

    #[error(transparent)]
    InvalidPlayers(#[from] ValidationError),

    #[error(transparent)]
    Score(#[from] ScoreError),
}
