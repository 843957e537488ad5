// Scoring and ranking engine
//
// Pure, synchronous functions over in-memory values. Callers own all state and
// recompute from scratch on every change.

// Public API - what other modules can use
pub use composer::{compose_score, ScoreBreakdown};
pub use goals::{
    casual_goal_points, competitive_goal_points, round_goal_points, tied_goal_points,
    GoalScoringMode,
};
pub use input::{NectarSpent, ScoreError, ScoreInput, ScoreUpdate};
pub use majority::{
    allocate_majority_bonus, allocate_region, contributions_from_inputs,
    majority_scoring_active, Expansion, Region, RegionContribution,
};
pub use ranking::{
    format_position, has_shared_victory, position_counts, rank_players, winners, RankedResult,
    RankingEntry,
};

// Internal modules
mod composer;
pub mod constants;
mod goals;
mod input;
mod majority;
mod ranking;
