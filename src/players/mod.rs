// Public API - what other modules can use
pub use handlers::{
    create_player, delete_player, get_player, list_players, restore_player, update_player,
};
pub use models::PlayerModel;
pub use service::PlayerService;
pub use types::{CreatePlayerRequest, PlayerResponse, UpdatePlayerRequest};

// Internal modules
mod handlers;
pub mod models;
pub mod repository;
mod service;
mod types;
