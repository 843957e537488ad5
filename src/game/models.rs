use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::{Expansion, GoalScoringMode, ScoreBreakdown, ScoreInput};

/// A participant in a game, with the name shown at the time it was played
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamePlayer {
    pub player_id: String,
    pub display_name: String,
}

/// A finished game as persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: String,
    pub played_at: DateTime<Utc>,
    pub mode: GoalScoringMode,
    pub expansions: Vec<Expansion>,
    pub players: Vec<GamePlayer>,
    pub notes: Option<String>,
    /// One entry per player, in finishing order
    pub scores: Vec<GameScoreRecord>,
}

/// One player's final score in a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameScoreRecord {
    pub player_id: String,
    pub player_name: String,
    pub input: ScoreInput,
    pub breakdown: ScoreBreakdown,
    pub total_score: u32,
    pub finish_position: u32,
    pub is_winner: bool,
}

impl GameRecord {
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn has_player(&self, player_id: &str) -> bool {
        self.players.iter().any(|p| p.player_id == player_id)
    }

    pub fn score_for(&self, player_id: &str) -> Option<&GameScoreRecord> {
        self.scores.iter().find(|s| s.player_id == player_id)
    }

    pub fn winners(&self) -> impl Iterator<Item = &GameScoreRecord> {
        self.scores.iter().filter(|s| s.is_winner)
    }

    /// True when two or more players finished first
    pub fn has_shared_victory(&self) -> bool {
        self.winners().count() > 1
    }
}
