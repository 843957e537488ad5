use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::constants::{MAX_CATEGORY_VALUE, ROUNDS_PER_GAME};
use super::goals::GoalScoringMode;
use super::majority::Region;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("Round {0} does not exist (expected 1-{})", ROUNDS_PER_GAME)]
    InvalidRound(u8),

    #[error("Round goal points {points} exceed the {mode} maximum of {max}")]
    RoundGoalOutOfRange {
        points: u32,
        max: u32,
        mode: GoalScoringMode,
    },

    #[error("{category} value {value} is too high")]
    ValueTooHigh { category: &'static str, value: i64 },
}

/// Nectar spent in each habitat (Oceania expansion)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NectarSpent {
    pub forest: u32,
    pub grassland: u32,
    pub wetland: u32,
}

impl NectarSpent {
    pub fn get(&self, region: Region) -> u32 {
        match region {
            Region::Forest => self.forest,
            Region::Grassland => self.grassland,
            Region::Wetland => self.wetland,
        }
    }

    pub fn set(&mut self, region: Region, amount: u32) {
        match region {
            Region::Forest => self.forest = amount,
            Region::Grassland => self.grassland = amount,
            Region::Wetland => self.wetland = amount,
        }
    }
}

/// Raw per-category values for one player in one game.
///
/// All values are non-negative. Round goals hold already-resolved points,
/// see [`crate::scoring::goals`] for how they are produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreInput {
    pub bird_card_points: u32,
    pub bonus_card_points: u32,
    pub round_goals: [u32; ROUNDS_PER_GAME],
    pub eggs_count: u32,
    pub cached_food_count: u32,
    pub tucked_cards_count: u32,
    /// Tiebreaker only, never added to the total
    pub unused_food_tokens: u32,
    #[serde(default)]
    pub nectar: NectarSpent,
}

impl ScoreInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn round_goal_total(&self) -> u32 {
        self.round_goals.iter().sum()
    }

    /// Apply a single category update.
    ///
    /// Negative values are clamped to zero. Rounds are 1-based.
    pub fn apply(&mut self, update: ScoreUpdate, mode: GoalScoringMode) -> Result<(), ScoreError> {
        let category = update.category();
        match update {
            ScoreUpdate::BirdCards { value } => {
                self.bird_card_points = clamp_value(category, value)?;
            }
            ScoreUpdate::BonusCards { value } => {
                self.bonus_card_points = clamp_value(category, value)?;
            }
            ScoreUpdate::RoundGoal { round, points } => {
                let index = round_index(round)?;
                let points = clamp_value(category, points)?;
                let max = mode.max_round_points();
                if points > max {
                    return Err(ScoreError::RoundGoalOutOfRange { points, max, mode });
                }
                self.round_goals[index] = points;
            }
            ScoreUpdate::Eggs { value } => {
                self.eggs_count = clamp_value(category, value)?;
            }
            ScoreUpdate::CachedFood { value } => {
                self.cached_food_count = clamp_value(category, value)?;
            }
            ScoreUpdate::TuckedCards { value } => {
                self.tucked_cards_count = clamp_value(category, value)?;
            }
            ScoreUpdate::UnusedFood { value } => {
                self.unused_food_tokens = clamp_value(category, value)?;
            }
            ScoreUpdate::Nectar { region, value } => {
                let amount = clamp_value(category, value)?;
                self.nectar.set(region, amount);
            }
        }
        Ok(())
    }
}

/// One edit to a player's score during entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum ScoreUpdate {
    BirdCards { value: i64 },
    BonusCards { value: i64 },
    RoundGoal { round: u8, points: i64 },
    Eggs { value: i64 },
    CachedFood { value: i64 },
    TuckedCards { value: i64 },
    UnusedFood { value: i64 },
    Nectar { region: Region, value: i64 },
}

impl ScoreUpdate {
    pub fn category(&self) -> &'static str {
        match self {
            ScoreUpdate::BirdCards { .. } => "bird_cards",
            ScoreUpdate::BonusCards { .. } => "bonus_cards",
            ScoreUpdate::RoundGoal { .. } => "round_goal",
            ScoreUpdate::Eggs { .. } => "eggs",
            ScoreUpdate::CachedFood { .. } => "cached_food",
            ScoreUpdate::TuckedCards { .. } => "tucked_cards",
            ScoreUpdate::UnusedFood { .. } => "unused_food",
            ScoreUpdate::Nectar { .. } => "nectar",
        }
    }
}

fn clamp_value(category: &'static str, value: i64) -> Result<u32, ScoreError> {
    if value > MAX_CATEGORY_VALUE {
        return Err(ScoreError::ValueTooHigh { category, value });
    }
    Ok(value.max(0) as u32)
}

fn round_index(round: u8) -> Result<usize, ScoreError> {
    match round as usize {
        r @ 1..=ROUNDS_PER_GAME => Ok(r - 1),
        _ => Err(ScoreError::InvalidRound(round)),
    }
}
