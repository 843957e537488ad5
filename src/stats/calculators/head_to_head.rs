use std::collections::BTreeMap;

use crate::game::GameRecord;
use crate::stats::models::HeadToHead;

/// Record between two players over the games both took part in.
/// A lower finish position is a win; equal positions are a tie.
pub fn head_to_head(
    player_id: &str,
    opponent_id: &str,
    opponent_name: &str,
    games: &[GameRecord],
) -> HeadToHead {
    let mut record = HeadToHead {
        player_id: player_id.to_string(),
        opponent_id: opponent_id.to_string(),
        opponent_name: opponent_name.to_string(),
        ..HeadToHead::default()
    };

    for game in games {
        let (Some(mine), Some(theirs)) = (game.score_for(player_id), game.score_for(opponent_id))
        else {
            continue;
        };

        record.games_played += 1;
        match mine.finish_position.cmp(&theirs.finish_position) {
            std::cmp::Ordering::Less => record.wins += 1,
            std::cmp::Ordering::Greater => record.losses += 1,
            std::cmp::Ordering::Equal => record.ties += 1,
        }
    }

    record
}

/// Head-to-head against every opponent the player has faced, most played first
pub fn all_head_to_head(player_id: &str, games: &[GameRecord]) -> Vec<HeadToHead> {
    // opponent id -> name as shown in their most recent game
    let mut opponents: BTreeMap<&str, (&str, chrono::DateTime<chrono::Utc>)> = BTreeMap::new();
    for game in games.iter().filter(|g| g.has_player(player_id)) {
        for opponent in game.players.iter().filter(|p| p.player_id != player_id) {
            let entry = opponents
                .entry(opponent.player_id.as_str())
                .or_insert((opponent.display_name.as_str(), game.played_at));
            if game.played_at > entry.1 {
                *entry = (opponent.display_name.as_str(), game.played_at);
            }
        }
    }

    let mut records: Vec<HeadToHead> = opponents
        .into_iter()
        .map(|(opponent_id, (name, _))| head_to_head(player_id, opponent_id, name, games))
        .collect();
    records.sort_by(|a, b| {
        b.games_played
            .cmp(&a.games_played)
            .then_with(|| a.opponent_name.cmp(&b.opponent_name))
    });
    records
}
