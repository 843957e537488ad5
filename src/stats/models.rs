use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::game::GameRecord;
use crate::scoring::ScoreBreakdown;

/// One player's result in one saved game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerGameResult {
    pub game_id: String,
    pub played_at: DateTime<Utc>,
    pub finish_position: u32,
    pub is_winner: bool,
    /// The win was shared with at least one other player
    pub shared_victory: bool,
    pub total_score: u32,
    pub breakdown: ScoreBreakdown,
}

impl PlayerGameResult {
    pub fn from_record(record: &GameRecord, player_id: &str) -> Option<Self> {
        let score = record.score_for(player_id)?;
        Some(Self {
            game_id: record.id.clone(),
            played_at: record.played_at,
            finish_position: score.finish_position,
            is_winner: score.is_winner,
            shared_victory: score.is_winner && record.has_shared_victory(),
            total_score: score.total_score,
            breakdown: score.breakdown,
        })
    }

    pub fn outcome(&self) -> GameOutcome {
        match (self.is_winner, self.shared_victory) {
            (true, false) => GameOutcome::Win,
            (true, true) => GameOutcome::SharedWin,
            (false, _) => GameOutcome::Loss,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "T")]
    SharedWin,
    #[serde(rename = "L")]
    Loss,
}

/// Per-category averages, rounded to one decimal
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryAverages {
    pub bird_card_points: f64,
    pub bonus_card_points: f64,
    pub round_goal_points: f64,
    pub eggs_points: f64,
    pub cached_food_points: f64,
    pub tucked_cards_points: f64,
    pub nectar_points: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub player_id: String,
    pub player_name: String,
    pub total_games: u32,
    /// Every first place, shared or not
    pub wins: u32,
    pub shared_victories: u32,
    pub losses: u32,
    /// Whole percentage
    pub win_rate: u32,
    pub average_finish: f64,
    pub average_score: f64,
    pub high_score: u32,
    pub low_score: u32,
    pub category_averages: CategoryAverages,
    pub current_win_streak: u32,
    pub best_win_streak: u32,
    /// Most recent first
    pub last_five: Vec<GameOutcome>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadToHead {
    pub player_id: String,
    pub opponent_id: String,
    pub opponent_name: String,
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub player_id: String,
    pub player_name: String,
    pub total_games: u32,
    pub wins: u32,
    pub win_rate: u32,
    pub average_score: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    pub score: u32,
    pub player_id: String,
    pub player_name: String,
    pub game_id: String,
    pub played_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub total_games: usize,
    pub total_players: usize,
    pub high_score: Option<HighScore>,
    pub average_score: f64,
}
