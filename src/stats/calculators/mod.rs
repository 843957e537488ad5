// Pure reductions over saved games. Callers fetch the records; nothing here
// touches a repository.

// Public API - what other modules can use
pub use averages::{category_averages, player_stats, round_to_tenth, win_rate};
pub use head_to_head::{all_head_to_head, head_to_head};
pub use leaderboard::{leaderboard, summary};
pub use streaks::win_streaks;

// Internal modules
mod averages;
mod head_to_head;
mod leaderboard;
mod streaks;
