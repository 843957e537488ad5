use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tracing::instrument;

use super::{
    models::{HeadToHead, LeaderboardEntry, PlayerStats, StatsSummary},
    service::StatsService,
};
use crate::shared::{AppError, AppState};

fn service(state: &AppState) -> StatsService {
    StatsService::new(
        Arc::clone(&state.game_repository),
        Arc::clone(&state.player_repository),
    )
}

/// GET /stats/players/:player_id
#[instrument(name = "get_player_stats", skip(state))]
pub async fn get_player_stats(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
) -> Result<Json<PlayerStats>, AppError> {
    Ok(Json(service(&state).player_stats(&player_id).await?))
}

/// GET /stats/players/:player_id/head-to-head
#[instrument(name = "get_all_head_to_head", skip(state))]
pub async fn get_all_head_to_head(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
) -> Result<Json<Vec<HeadToHead>>, AppError> {
    Ok(Json(service(&state).all_head_to_head(&player_id).await?))
}

/// GET /stats/head-to-head/:player_id/:opponent_id
#[instrument(name = "get_head_to_head", skip(state))]
pub async fn get_head_to_head(
    State(state): State<AppState>,
    Path((player_id, opponent_id)): Path<(String, String)>,
) -> Result<Json<HeadToHead>, AppError> {
    Ok(Json(
        service(&state)
            .head_to_head(&player_id, &opponent_id)
            .await?,
    ))
}

/// GET /stats/leaderboard
#[instrument(name = "get_leaderboard", skip(state))]
pub async fn get_leaderboard(
    State(state): State<AppState>,
) -> Result<Json<Vec<LeaderboardEntry>>, AppError> {
    Ok(Json(service(&state).leaderboard().await?))
}

/// GET /stats/summary
#[instrument(name = "get_summary", skip(state))]
pub async fn get_summary(State(state): State<AppState>) -> Result<Json<StatsSummary>, AppError> {
    Ok(Json(service(&state).summary().await?))
}
