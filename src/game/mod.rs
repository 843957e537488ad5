// Public API - what other modules can use
pub use cleanup_task::{start_cleanup_task, CleanupConfig};
pub use errors::GameError;
pub use handlers::{
    cancel_game, delete_game, edit_game_score, finalize_game, get_game, get_standings,
    list_games, start_game, update_score,
};
pub use models::{GamePlayer, GameRecord, GameScoreRecord};
pub use service::GameService;
pub use session::{GameSession, SessionStore};
pub use types::{
    FinalizeGameRequest, GameView, ListGamesQuery, PlayerScore, SessionResponse, StartGameRequest,
};

// Internal modules
mod cleanup_task;
mod errors;
mod handlers;
mod models;
pub mod repository;
mod service;
mod session;
mod types;
