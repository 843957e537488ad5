use super::streaks::win_streaks;
use crate::stats::models::{CategoryAverages, PlayerGameResult, PlayerStats};

const RECENT_RESULTS: usize = 5;

pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Whole percentage of games won, 0 when no games were played
pub fn win_rate(wins: u32, total_games: u32) -> u32 {
    if total_games == 0 {
        return 0;
    }
    ((wins as f64 / total_games as f64) * 100.0).round() as u32
}

fn average(sum: u64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    round_to_tenth(sum as f64 / count as f64)
}

pub fn category_averages(results: &[PlayerGameResult]) -> CategoryAverages {
    let count = results.len();
    let sum = |points: fn(&PlayerGameResult) -> u32| -> f64 {
        average(results.iter().map(|r| points(r) as u64).sum(), count)
    };

    CategoryAverages {
        bird_card_points: sum(|r| r.breakdown.bird_card_points),
        bonus_card_points: sum(|r| r.breakdown.bonus_card_points),
        round_goal_points: sum(|r| r.breakdown.round_goal_points),
        eggs_points: sum(|r| r.breakdown.eggs_points),
        cached_food_points: sum(|r| r.breakdown.cached_food_points),
        tucked_cards_points: sum(|r| r.breakdown.tucked_cards_points),
        nectar_points: sum(|r| r.breakdown.nectar_points),
    }
}

/// Full statistics for one player over their saved games
pub fn player_stats(
    player_id: &str,
    player_name: &str,
    results: &[PlayerGameResult],
) -> PlayerStats {
    let total_games = results.len() as u32;
    let wins = results.iter().filter(|r| r.is_winner).count() as u32;
    let shared_victories = results.iter().filter(|r| r.shared_victory).count() as u32;

    let mut recent: Vec<&PlayerGameResult> = results.iter().collect();
    recent.sort_by(|a, b| b.played_at.cmp(&a.played_at));
    let last_five = recent
        .iter()
        .take(RECENT_RESULTS)
        .map(|r| r.outcome())
        .collect();

    let (current_win_streak, best_win_streak) = win_streaks(results);

    PlayerStats {
        player_id: player_id.to_string(),
        player_name: player_name.to_string(),
        total_games,
        wins,
        shared_victories,
        losses: total_games - wins,
        win_rate: win_rate(wins, total_games),
        average_finish: average(
            results.iter().map(|r| r.finish_position as u64).sum(),
            results.len(),
        ),
        average_score: average(
            results.iter().map(|r| r.total_score as u64).sum(),
            results.len(),
        ),
        high_score: results.iter().map(|r| r.total_score).max().unwrap_or(0),
        low_score: results.iter().map(|r| r.total_score).min().unwrap_or(0),
        category_averages: category_averages(results),
        current_win_streak,
        best_win_streak,
        last_five,
    }
}
