use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};

use super::models::PlayerModel;
use crate::shared::AppError;

/// Result of a write that keeps active player names unique
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SavePlayerResult {
    Saved,
    /// Another active player already uses the name, case-insensitively
    NameTaken,
}

/// Trait for player repository operations.
///
/// Writes of an active player check name uniqueness and store the player
/// in one atomic step.
#[async_trait]
pub trait PlayerRepository {
    async fn create_player(&self, player: &PlayerModel) -> Result<SavePlayerResult, AppError>;
    async fn get_player(&self, player_id: &str) -> Result<Option<PlayerModel>, AppError>;
    /// Players matching `player_ids`, in the order requested. Unknown IDs are skipped.
    async fn get_players(&self, player_ids: &[String]) -> Result<Vec<PlayerModel>, AppError>;
    /// All players sorted by name
    async fn list_players(&self, include_inactive: bool) -> Result<Vec<PlayerModel>, AppError>;
    async fn update_player(&self, player: &PlayerModel) -> Result<SavePlayerResult, AppError>;
    /// Active players only
    async fn count_players(&self) -> Result<usize, AppError>;
}

/// In-memory implementation of PlayerRepository for development and testing
#[derive(Debug, Default)]
pub struct InMemoryPlayerRepository {
    players: Arc<RwLock<HashMap<String, PlayerModel>>>,
}

impl InMemoryPlayerRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            players: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Creates an in-memory repository with pre-populated players
    pub fn with_players(players: Vec<PlayerModel>) -> Self {
        let players = players
            .into_iter()
            .map(|player| (player.id.clone(), player))
            .collect();

        Self {
            players: Arc::new(RwLock::new(players)),
        }
    }

    fn name_taken(players: &HashMap<String, PlayerModel>, player: &PlayerModel) -> bool {
        player.is_active
            && players
                .values()
                .any(|p| p.is_active && p.id != player.id && p.has_name(&player.name))
    }
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    #[instrument(skip(self, player))]
    async fn create_player(&self, player: &PlayerModel) -> Result<SavePlayerResult, AppError> {
        debug!(player_id = %player.id, name = %player.name, "Creating player in memory");

        let mut players = self.players.write().await;
        if players.contains_key(&player.id) {
            warn!(player_id = %player.id, "Player already exists in memory");
            return Err(AppError::DatabaseError("Player already exists".to_string()));
        }
        if Self::name_taken(&players, player) {
            debug!(name = %player.name, "Player name already in use");
            return Ok(SavePlayerResult::NameTaken);
        }
        players.insert(player.id.clone(), player.clone());
        Ok(SavePlayerResult::Saved)
    }

    #[instrument(skip(self))]
    async fn get_player(&self, player_id: &str) -> Result<Option<PlayerModel>, AppError> {
        let players = self.players.read().await;
        Ok(players.get(player_id).cloned())
    }

    #[instrument(skip(self))]
    async fn get_players(&self, player_ids: &[String]) -> Result<Vec<PlayerModel>, AppError> {
        let players = self.players.read().await;
        Ok(player_ids
            .iter()
            .filter_map(|id| players.get(id).cloned())
            .collect())
    }

    #[instrument(skip(self))]
    async fn list_players(&self, include_inactive: bool) -> Result<Vec<PlayerModel>, AppError> {
        let players = self.players.read().await;
        let mut listed: Vec<PlayerModel> = players
            .values()
            .filter(|p| include_inactive || p.is_active)
            .cloned()
            .collect();
        listed.sort_by_key(|p| p.name.to_lowercase());
        Ok(listed)
    }

    #[instrument(skip(self, player))]
    async fn update_player(&self, player: &PlayerModel) -> Result<SavePlayerResult, AppError> {
        debug!(player_id = %player.id, "Updating player in memory");

        let mut players = self.players.write().await;
        if Self::name_taken(&players, player) {
            debug!(name = %player.name, "Player name already in use");
            return Ok(SavePlayerResult::NameTaken);
        }
        match players.get_mut(&player.id) {
            Some(existing) => {
                *existing = player.clone();
                Ok(SavePlayerResult::Saved)
            }
            None => {
                warn!(player_id = %player.id, "Player not found for update in memory");
                Err(AppError::NotFound("Player not found".to_string()))
            }
        }
    }

    async fn count_players(&self) -> Result<usize, AppError> {
        let players = self.players.read().await;
        Ok(players.values().filter(|p| p.is_active).count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str) -> PlayerModel {
        PlayerModel::new(name.to_string(), None)
    }

    #[tokio::test]
    async fn creates_and_fetches_player() {
        let repo = InMemoryPlayerRepository::new();
        let robin = player("Robin");

        repo.create_player(&robin).await.unwrap();

        let fetched = repo.get_player(&robin.id).await.unwrap();
        assert_eq!(fetched, Some(robin));
        assert_eq!(repo.count_players().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn rejects_duplicate_ids() {
        let repo = InMemoryPlayerRepository::new();
        let robin = player("Robin");

        repo.create_player(&robin).await.unwrap();
        let result = repo.create_player(&robin).await;
        assert!(matches!(result, Err(AppError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn list_hides_inactive_players_unless_asked() {
        let mut wren = player("wren");
        wren.is_active = false;
        let repo =
            InMemoryPlayerRepository::with_players(vec![player("Robin"), wren, player("Finch")]);

        let active: Vec<String> = repo
            .list_players(false)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(active, vec!["Finch", "Robin"]);

        let all = repo.list_players(true).await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[2].name, "wren");
    }

    #[tokio::test]
    async fn get_players_preserves_requested_order() {
        let a = player("Avocet");
        let b = player("Bittern");
        let repo = InMemoryPlayerRepository::with_players(vec![a.clone(), b.clone()]);

        let players = repo
            .get_players(&[b.id.clone(), "missing".to_string(), a.id.clone()])
            .await
            .unwrap();

        assert_eq!(players, vec![b, a]);
    }

    #[tokio::test]
    async fn name_check_ignores_inactive_players_and_self() {
        let robin = player("Robin");
        let mut old = player("Wren");
        old.is_active = false;
        let repo = InMemoryPlayerRepository::with_players(vec![robin.clone(), old]);

        let clash = repo.create_player(&player("ROBIN")).await.unwrap();
        assert_eq!(clash, SavePlayerResult::NameTaken);

        let mut renamed = robin.clone();
        renamed.name = "robin".to_string();
        let own = repo.update_player(&renamed).await.unwrap();
        assert_eq!(own, SavePlayerResult::Saved);

        let reuse = repo.create_player(&player("wren")).await.unwrap();
        assert_eq!(reuse, SavePlayerResult::Saved);
    }

    #[tokio::test]
    async fn concurrent_creates_with_one_name_save_once() {
        let repo = Arc::new(InMemoryPlayerRepository::new());

        let attempts: Vec<_> = ["Robin", "robin", "ROBIN"]
            .into_iter()
            .map(|name| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move { repo.create_player(&player(name)).await })
            })
            .collect();

        let mut saved = 0;
        for attempt in attempts {
            if attempt.await.unwrap().unwrap() == SavePlayerResult::Saved {
                saved += 1;
            }
        }

        assert_eq!(saved, 1);
        assert_eq!(repo.count_players().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn restoring_into_a_taken_name_is_refused() {
        let robin = player("Robin");
        let mut old = player("robin");
        old.is_active = false;
        let repo = InMemoryPlayerRepository::with_players(vec![robin, old.clone()]);

        old.is_active = true;
        assert_eq!(
            repo.update_player(&old).await.unwrap(),
            SavePlayerResult::NameTaken
        );
        let stored = repo.get_player(&old.id).await.unwrap().unwrap();
        assert!(!stored.is_active);
    }

    #[tokio::test]
    async fn count_skips_inactive_players() {
        let mut wren = player("Wren");
        wren.is_active = false;
        let repo = InMemoryPlayerRepository::with_players(vec![player("Robin"), wren]);

        assert_eq!(repo.count_players().await.unwrap(), 1);
        assert_eq!(repo.list_players(true).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn update_missing_player_is_not_found() {
        let repo = InMemoryPlayerRepository::new();
        let result = repo.update_player(&player("Ghost")).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
