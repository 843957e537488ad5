use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use super::constants::{
    competitive_goal_table, fallback_goal_points, CASUAL_GOAL_MAX_POINTS,
    COMPETITIVE_GOAL_MAX_POINTS,
};

/// How end-of-round goals are scored. Chosen once when a game starts.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GoalScoringMode {
    /// Green side: players are compared and placements score from a table
    #[default]
    Competitive,
    /// Blue side: one point per item, no comparison between players
    Casual,
}

impl GoalScoringMode {
    /// Largest value a single round goal may hold in this mode
    pub fn max_round_points(self) -> u32 {
        match self {
            GoalScoringMode::Competitive => COMPETITIVE_GOAL_MAX_POINTS,
            GoalScoringMode::Casual => CASUAL_GOAL_MAX_POINTS,
        }
    }
}

/// Points for a competitive placement (1-based) at the given table size.
pub fn competitive_goal_points(placement: u32, player_count: usize) -> u32 {
    match competitive_goal_table(player_count) {
        Some(table) => placement_points(table, placement),
        None => fallback_goal_points(placement),
    }
}

/// Points for a casual goal: the item count, capped.
pub fn casual_goal_points(item_count: u32) -> u32 {
    item_count.min(CASUAL_GOAL_MAX_POINTS)
}

/// Points for each player tied across `placements`.
///
/// The tied players pool the points of every placement they occupy and split
/// them evenly, rounding down.
pub fn tied_goal_points(placements: &[u32], player_count: usize) -> u32 {
    if placements.is_empty() {
        return 0;
    }

    let pooled: u32 = placements
        .iter()
        .map(|&placement| competitive_goal_points(placement, player_count))
        .sum();

    pooled / placements.len() as u32
}

/// Resolve a round goal according to the game's scoring mode.
pub fn round_goal_points(
    mode: GoalScoringMode,
    placement: u32,
    player_count: usize,
    item_count: Option<u32>,
) -> u32 {
    match mode {
        GoalScoringMode::Casual => casual_goal_points(item_count.unwrap_or_default()),
        GoalScoringMode::Competitive => competitive_goal_points(placement, player_count),
    }
}

fn placement_points(table: &[u32], placement: u32) -> u32 {
    placement
        .checked_sub(1)
        .and_then(|index| table.get(index as usize))
        .copied()
        .unwrap_or_default()
}
