use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use super::models::GameRecord;
use crate::shared::AppError;

/// Trait for finished game persistence
#[async_trait]
pub trait GameRepository {
    /// Inserts a new game or replaces an existing one with the same ID
    async fn save_game(&self, game: &GameRecord) -> Result<(), AppError>;
    async fn get_game(&self, game_id: &str) -> Result<Option<GameRecord>, AppError>;
    /// Most recent first
    async fn list_games(&self, limit: Option<usize>) -> Result<Vec<GameRecord>, AppError>;
    /// Games the player took part in, most recent first
    async fn games_for_player(&self, player_id: &str) -> Result<Vec<GameRecord>, AppError>;
    async fn delete_game(&self, game_id: &str) -> Result<(), AppError>;
    async fn count_games(&self) -> Result<usize, AppError>;
}

/// In-memory implementation of GameRepository for development and testing
#[derive(Debug, Default)]
pub struct InMemoryGameRepository {
    games: Arc<RwLock<HashMap<String, GameRecord>>>,
}

impl InMemoryGameRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            games: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    fn newest_first(mut games: Vec<GameRecord>) -> Vec<GameRecord> {
        games.sort_by(|a, b| {
            b.played_at
                .cmp(&a.played_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        games
    }
}

#[async_trait]
impl GameRepository for InMemoryGameRepository {
    #[instrument(skip(self, game))]
    async fn save_game(&self, game: &GameRecord) -> Result<(), AppError> {
        debug!(game_id = %game.id, player_count = game.player_count(), "Saving game in memory");

        let mut games = self.games.write().await;
        games.insert(game.id.clone(), game.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_game(&self, game_id: &str) -> Result<Option<GameRecord>, AppError> {
        let games = self.games.read().await;
        Ok(games.get(game_id).cloned())
    }

    #[instrument(skip(self))]
    async fn list_games(&self, limit: Option<usize>) -> Result<Vec<GameRecord>, AppError> {
        let games = self.games.read().await;
        let mut listed = Self::newest_first(games.values().cloned().collect());
        if let Some(limit) = limit {
            listed.truncate(limit);
        }
        Ok(listed)
    }

    #[instrument(skip(self))]
    async fn games_for_player(&self, player_id: &str) -> Result<Vec<GameRecord>, AppError> {
        let games = self.games.read().await;
        Ok(Self::newest_first(
            games
                .values()
                .filter(|g| g.has_player(player_id))
                .cloned()
                .collect(),
        ))
    }

    #[instrument(skip(self))]
    async fn delete_game(&self, game_id: &str) -> Result<(), AppError> {
        let mut games = self.games.write().await;
        if games.remove(game_id).is_none() {
            warn!(game_id = %game_id, "Game not found for deletion in memory");
            return Err(AppError::NotFound("Game not found".to_string()));
        }
        debug!(game_id = %game_id, "Game deleted from memory");
        Ok(())
    }

    async fn count_games(&self) -> Result<usize, AppError> {
        Ok(self.games.read().await.len())
    }
}
