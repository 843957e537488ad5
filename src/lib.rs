// Library crate for the Wingspan score keeper
// This file exposes the public API for integration tests

pub mod config;
pub mod game;
pub mod players;
pub mod routes;
pub mod scoring;
pub mod shared;
pub mod stats;
pub mod validation;

// Re-export commonly used types for easier access in tests
pub use config::ServerConfig;
pub use game::{GameRecord, GameSession, SessionStore};
pub use players::PlayerModel;
pub use routes::router;
pub use shared::{AppError, AppState};
