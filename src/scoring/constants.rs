//! Fixed scoring rules for the base game and the supported expansions.

/// Number of end-of-round goals scored in a game
pub const ROUNDS_PER_GAME: usize = 4;

pub const MIN_PLAYERS: usize = 1;
pub const MAX_PLAYERS: usize = 5;

/// Casual (blue side) goals: one point per item, capped
pub const CASUAL_GOAL_MAX_POINTS: u32 = 5;

/// Highest round-goal value accepted in competitive mode (5 players, 1st place)
pub const COMPETITIVE_GOAL_MAX_POINTS: u32 = 5;

/// Upper bound accepted for any single category value
pub const MAX_CATEGORY_VALUE: i64 = 999;

/// Nectar majority bonus for the habitat leader
pub const MAJORITY_FIRST_BONUS: u32 = 5;
/// Nectar majority bonus for the runner-up
pub const MAJORITY_SECOND_BONUS: u32 = 2;

/// Competitive (green side) goal points indexed by placement, keyed by player count.
///
/// Returns `None` for player counts that have no printed table.
pub fn competitive_goal_table(player_count: usize) -> Option<&'static [u32]> {
    match player_count {
        2 => Some(&[4, 1]),
        3 => Some(&[4, 1, 0]),
        4 => Some(&[4, 2, 1, 0]),
        5 => Some(&[5, 2, 1, 0, 0]),
        _ => None,
    }
}

/// Points used when the player count has no table entry
pub fn fallback_goal_points(placement: u32) -> u32 {
    match placement {
        1 => 4,
        2 => 1,
        _ => 0,
    }
}
