use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stored player profile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerModel {
    pub id: String, // UUID v4 as string
    pub name: String,
    pub avatar_id: Option<String>, // Bird avatar chosen in the app
    pub created_at: DateTime<Utc>,
    pub is_active: bool, // false once soft deleted; history keeps referencing the id
}

impl PlayerModel {
    /// Creates a new active player with a generated ID
    pub fn new(name: String, avatar_id: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            avatar_id,
            created_at: Utc::now(),
            is_active: true,
        }
    }

    /// Case-insensitive name comparison used for uniqueness checks
    pub fn has_name(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }
}
