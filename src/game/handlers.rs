use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    models::GameRecord,
    service::GameService,
    types::{FinalizeGameRequest, GameView, ListGamesQuery, SessionResponse, StartGameRequest},
};
use crate::scoring::{RankedResult, ScoreUpdate};
use crate::shared::{AppError, AppState};

fn service(state: &AppState) -> GameService {
    GameService::new(
        Arc::clone(&state.game_repository),
        Arc::clone(&state.player_repository),
        state.sessions.clone(),
    )
}

/// POST /games
#[instrument(name = "start_game", skip(state))]
pub async fn start_game(
    State(state): State<AppState>,
    Json(request): Json<StartGameRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), AppError> {
    info!(player_count = request.player_ids.len(), "Starting new game");
    let session = service(&state).start_game(request).await?;
    Ok((StatusCode::CREATED, Json(session)))
}

/// GET /games?limit=10
#[instrument(name = "list_games", skip(state))]
pub async fn list_games(
    State(state): State<AppState>,
    Query(query): Query<ListGamesQuery>,
) -> Result<Json<Vec<GameRecord>>, AppError> {
    Ok(Json(service(&state).list_games(query.limit).await?))
}

/// GET /games/:game_id
#[instrument(name = "get_game", skip(state))]
pub async fn get_game(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<Json<GameView>, AppError> {
    Ok(Json(service(&state).get_game(&game_id).await?))
}

/// DELETE /games/:game_id
#[instrument(name = "delete_game", skip(state))]
pub async fn delete_game(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<StatusCode, AppError> {
    service(&state).delete_game(&game_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /games/:game_id/scores/:player_id
#[instrument(name = "update_score", skip(state))]
pub async fn update_score(
    State(state): State<AppState>,
    Path((game_id, player_id)): Path<(String, String)>,
    Json(update): Json<ScoreUpdate>,
) -> Result<Json<SessionResponse>, AppError> {
    Ok(Json(
        service(&state)
            .update_score(&game_id, &player_id, update)
            .await?,
    ))
}

/// GET /games/:game_id/standings
#[instrument(name = "get_standings", skip(state))]
pub async fn get_standings(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<Json<Vec<RankedResult>>, AppError> {
    Ok(Json(service(&state).standings(&game_id).await?))
}

/// POST /games/:game_id/finalize
#[instrument(name = "finalize_game", skip(state, request))]
pub async fn finalize_game(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
    request: Option<Json<FinalizeGameRequest>>,
) -> Result<Json<GameRecord>, AppError> {
    let notes = request.and_then(|Json(r)| r.notes);
    Ok(Json(service(&state).finalize_game(&game_id, notes).await?))
}

/// POST /games/:game_id/cancel
#[instrument(name = "cancel_game", skip(state))]
pub async fn cancel_game(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<StatusCode, AppError> {
    service(&state).cancel_game(&game_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /games/:game_id/record/scores/:player_id
#[instrument(name = "edit_game_score", skip(state))]
pub async fn edit_game_score(
    State(state): State<AppState>,
    Path((game_id, player_id)): Path<(String, String)>,
    Json(update): Json<ScoreUpdate>,
) -> Result<Json<GameRecord>, AppError> {
    Ok(Json(
        service(&state)
            .edit_game_score(&game_id, &player_id, update)
            .await?,
    ))
}
