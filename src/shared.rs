use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::game::{repository::GameRepository, GameError, SessionStore};
use crate::players::repository::PlayerRepository;
use crate::scoring::ScoreError;
use crate::stats::StatsError;
use crate::validation::ValidationError;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub player_repository: Arc<dyn PlayerRepository + Send + Sync>,
    pub game_repository: Arc<dyn GameRepository + Send + Sync>,
    /// Games currently being scored, not yet persisted
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(
        player_repository: Arc<dyn PlayerRepository + Send + Sync>,
        game_repository: Arc<dyn GameRepository + Send + Sync>,
    ) -> Self {
        Self {
            player_repository,
            game_repository,
            sessions: SessionStore::new(),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            AppError::DatabaseError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", msg),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<ScoreError> for AppError {
    fn from(err: ScoreError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<GameError> for AppError {
    fn from(err: GameError) -> Self {
        match err {
            GameError::UnknownPlayer(_) | GameError::NotFound(_) => {
                AppError::NotFound(err.to_string())
            }
            // A record without a score for one of its players is corrupt data
            GameError::MissingScore(_) => AppError::DatabaseError(err.to_string()),
            GameError::DuplicatePlayer(_) | GameError::InvalidPlayers(_) | GameError::Score(_) => {
                AppError::Validation(err.to_string())
            }
        }
    }
}

impl From<StatsError> for AppError {
    fn from(err: StatsError) -> Self {
        match err {
            StatsError::PlayerNotFound(_) => AppError::NotFound(err.to_string()),
            StatsError::Repository(msg) => AppError::DatabaseError(msg),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;

    #[test]
    fn game_errors_map_to_http_categories() {
        assert!(matches!(
            AppError::from(GameError::NotFound("g".into())),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            AppError::from(GameError::DuplicatePlayer("p".into())),
            AppError::Validation(_)
        ));
        assert!(matches!(
            AppError::from(GameError::MissingScore("p".into())),
            AppError::DatabaseError(_)
        ));
    }

    #[test]
    fn validation_errors_keep_their_message() {
        match AppError::from(ValidationError::NameRequired) {
            AppError::Validation(msg) => assert_eq!(msg, "Name is required"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn not_found_responds_404() {
        let response = AppError::NotFound("missing".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
