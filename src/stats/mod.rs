// Public API - what other modules can use
pub use errors::StatsError;
pub use handlers::{
    get_all_head_to_head, get_head_to_head, get_leaderboard, get_player_stats, get_summary,
};
pub use models::{
    CategoryAverages, GameOutcome, HeadToHead, HighScore, LeaderboardEntry, PlayerGameResult,
    PlayerStats, StatsSummary,
};
pub use service::StatsService;

// Internal modules
pub mod calculators;
mod errors;
mod handlers;
mod models;
mod service;
