use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{game, players, shared::AppState, stats};

/// Every HTTP endpoint, traced and open to any origin
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "Wingspan score keeper" }))
        // Players
        .route(
            "/players",
            post(players::create_player).get(players::list_players),
        )
        .route(
            "/players/:player_id",
            get(players::get_player)
                .put(players::update_player)
                .delete(players::delete_player),
        )
        .route("/players/:player_id/restore", post(players::restore_player))
        // Games
        .route("/games", post(game::start_game).get(game::list_games))
        .route(
            "/games/:game_id",
            get(game::get_game).delete(game::delete_game),
        )
        .route(
            "/games/:game_id/scores/:player_id",
            put(game::update_score),
        )
        .route("/games/:game_id/standings", get(game::get_standings))
        .route("/games/:game_id/finalize", post(game::finalize_game))
        .route("/games/:game_id/cancel", post(game::cancel_game))
        .route(
            "/games/:game_id/record/scores/:player_id",
            put(game::edit_game_score),
        )
        // Stats
        .route(
            "/stats/players/:player_id",
            get(stats::get_player_stats),
        )
        .route(
            "/stats/players/:player_id/head-to-head",
            get(stats::get_all_head_to_head),
        )
        .route(
            "/stats/head-to-head/:player_id/:opponent_id",
            get(stats::get_head_to_head),
        )
        .route("/stats/leaderboard", get(stats::get_leaderboard))
        .route("/stats/summary", get(stats::get_summary))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
