use std::sync::Arc;
use tracing::{debug, info, instrument};

use super::{
    models::PlayerModel,
    repository::{PlayerRepository, SavePlayerResult},
    types::{CreatePlayerRequest, PlayerResponse, UpdatePlayerRequest},
};
use crate::{shared::AppError, validation::validate_player_name};

/// Service for handling player profile business logic
pub struct PlayerService {
    repository: Arc<dyn PlayerRepository + Send + Sync>,
}

impl PlayerService {
    pub fn new(repository: Arc<dyn PlayerRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    /// Creates a new player after validating the name is well formed and unused
    #[instrument(skip(self))]
    pub async fn create_player(
        &self,
        request: CreatePlayerRequest,
    ) -> Result<PlayerResponse, AppError> {
        let name = validate_player_name(&request.name)?;
        let player = PlayerModel::new(name.to_string(), request.avatar_id);
        ensure_saved(self.repository.create_player(&player).await?, &player)?;

        info!(player_id = %player.id, name = %player.name, "Player created successfully");

        Ok(player.into())
    }

    #[instrument(skip(self))]
    pub async fn list_players(
        &self,
        include_inactive: bool,
    ) -> Result<Vec<PlayerResponse>, AppError> {
        let players = self.repository.list_players(include_inactive).await?;
        debug!(player_count = players.len(), "Players retrieved");
        Ok(players.into_iter().map(PlayerResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_player(&self, player_id: &str) -> Result<PlayerResponse, AppError> {
        Ok(self.find_player(player_id).await?.into())
    }

    #[instrument(skip(self))]
    pub async fn update_player(
        &self,
        player_id: &str,
        request: UpdatePlayerRequest,
    ) -> Result<PlayerResponse, AppError> {
        let mut player = self.find_player(player_id).await?;

        if let Some(name) = request.name.as_deref() {
            player.name = validate_player_name(name)?.to_string();
        }
        if let Some(avatar_id) = request.avatar_id {
            player.avatar_id = Some(avatar_id);
        }

        ensure_saved(self.repository.update_player(&player).await?, &player)?;
        info!(player_id = %player.id, "Player updated");

        Ok(player.into())
    }

    /// Soft delete: the player disappears from pickers but their games remain
    #[instrument(skip(self))]
    pub async fn deactivate_player(&self, player_id: &str) -> Result<PlayerResponse, AppError> {
        let mut player = self.find_player(player_id).await?;
        player.is_active = false;
        self.repository.update_player(&player).await?;

        info!(player_id = %player.id, "Player deactivated");
        Ok(player.into())
    }

    #[instrument(skip(self))]
    pub async fn restore_player(&self, player_id: &str) -> Result<PlayerResponse, AppError> {
        let mut player = self.find_player(player_id).await?;
        if !player.is_active {
            player.is_active = true;
            ensure_saved(self.repository.update_player(&player).await?, &player)?;
            info!(player_id = %player.id, "Player restored");
        }
        Ok(player.into())
    }

    async fn find_player(&self, player_id: &str) -> Result<PlayerModel, AppError> {
        self.repository
            .get_player(player_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Player {} not found", player_id)))
    }
}

fn ensure_saved(result: SavePlayerResult, player: &PlayerModel) -> Result<(), AppError> {
    match result {
        SavePlayerResult::Saved => Ok(()),
        SavePlayerResult::NameTaken => Err(AppError::Conflict(format!(
            "A player named {} already exists",
            player.name
        ))),
    }
}
