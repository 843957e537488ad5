use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::models::PlayerModel;

/// Request payload for creating a new player
#[derive(Debug, Deserialize)]
pub struct CreatePlayerRequest {
    pub name: String,
    #[serde(default)]
    pub avatar_id: Option<String>,
}

/// Request payload for editing a player; absent fields are left unchanged
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePlayerRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListPlayersQuery {
    #[serde(default)]
    pub include_inactive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerResponse {
    pub id: String,
    pub name: String,
    pub avatar_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

impl From<PlayerModel> for PlayerResponse {
    fn from(player: PlayerModel) -> Self {
        Self {
            id: player.id,
            name: player.name,
            avatar_id: player.avatar_id,
            created_at: player.created_at,
            is_active: player.is_active,
        }
    }
}
