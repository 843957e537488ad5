use super::averages::round_to_tenth;
use crate::game::GameRecord;
use crate::stats::models::{HighScore, LeaderboardEntry, PlayerStats, StatsSummary};

/// Ranks players with at least one game by wins, then win rate, then
/// average score.
pub fn leaderboard(stats: Vec<PlayerStats>) -> Vec<LeaderboardEntry> {
    let mut ranked: Vec<PlayerStats> = stats.into_iter().filter(|s| s.total_games > 0).collect();
    ranked.sort_by(|a, b| {
        b.wins
            .cmp(&a.wins)
            .then_with(|| b.win_rate.cmp(&a.win_rate))
            .then_with(|| b.average_score.total_cmp(&a.average_score))
    });

    ranked
        .into_iter()
        .enumerate()
        .map(|(index, s)| LeaderboardEntry {
            rank: index as u32 + 1,
            player_id: s.player_id,
            player_name: s.player_name,
            total_games: s.total_games,
            wins: s.wins,
            win_rate: s.win_rate,
            average_score: s.average_score,
        })
        .collect()
}

/// Totals across every saved game. The high score goes to whoever set it first.
pub fn summary(games: &[GameRecord], total_players: usize) -> StatsSummary {
    let mut ordered: Vec<&GameRecord> = games.iter().collect();
    ordered.sort_by(|a, b| a.played_at.cmp(&b.played_at));

    let mut high_score: Option<HighScore> = None;
    let mut score_sum: u64 = 0;
    let mut score_count: u64 = 0;

    for game in ordered {
        for score in &game.scores {
            score_sum += score.total_score as u64;
            score_count += 1;

            if high_score
                .as_ref()
                .map_or(true, |best| score.total_score > best.score)
            {
                high_score = Some(HighScore {
                    score: score.total_score,
                    player_id: score.player_id.clone(),
                    player_name: score.player_name.clone(),
                    game_id: game.id.clone(),
                    played_at: game.played_at,
                });
            }
        }
    }

    let average_score = if score_count == 0 {
        0.0
    } else {
        round_to_tenth(score_sum as f64 / score_count as f64)
    };

    StatsSummary {
        total_games: games.len(),
        total_players,
        high_score,
        average_score,
    }
}
