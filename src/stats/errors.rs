use thiserror::Error;

use crate::shared::AppError;

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Player {0} not found")]
    PlayerNotFound(String),
}

impl From<AppError> for StatsError {
    fn from(err: AppError) -> Self {
        StatsError::Repository(err.to_string())
    }
}
