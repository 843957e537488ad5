use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::composer::{compose_score, ScoreBreakdown};
use super::input::ScoreInput;
use super::majority::{
    allocate_majority_bonus, contributions_from_inputs, majority_scoring_active, Expansion,
};

/// A player and their raw score, as handed to [`rank_players`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub player_id: String,
    pub display_name: String,
    pub score: ScoreInput,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedResult {
    pub player_id: String,
    pub display_name: String,
    pub total_score: u32,
    /// Unused food tokens
    pub tiebreaker: u32,
    /// 1-based competition ranking position
    pub position: u32,
    pub is_winner: bool,
    pub breakdown: ScoreBreakdown,
}

/// Rank every player, highest total first.
///
/// Equal totals are ordered by unused food tokens. Players level on both share
/// a position, and the next distinct player is placed at their 1-based index,
/// so `[20, 20, 15]` ranks as `[1, 1, 3]`. Everyone at position 1 is a
/// winner.
pub fn rank_players(players: &[RankingEntry], expansions: &[Expansion]) -> Vec<RankedResult> {
    let bonuses = if majority_scoring_active(expansions) {
        allocate_majority_bonus(&contributions_from_inputs(
            players
                .iter()
                .map(|entry| (entry.player_id.as_str(), &entry.score)),
        ))
    } else {
        Default::default()
    };

    let mut scored: Vec<(&RankingEntry, ScoreBreakdown)> = players
        .iter()
        .map(|entry| {
            let bonus = bonuses.get(&entry.player_id).copied().unwrap_or_default();
            (entry, compose_score(&entry.score, bonus))
        })
        .collect();

    // Stable, so fully tied players keep their input order
    scored.sort_by(|(a, a_breakdown), (b, b_breakdown)| {
        b_breakdown
            .total
            .cmp(&a_breakdown.total)
            .then_with(|| b.score.unused_food_tokens.cmp(&a.score.unused_food_tokens))
    });

    let mut ranked: Vec<RankedResult> = Vec::with_capacity(scored.len());
    for (index, (entry, breakdown)) in scored.into_iter().enumerate() {
        let tiebreaker = entry.score.unused_food_tokens;
        let position = match ranked.last() {
            Some(previous)
                if previous.total_score == breakdown.total
                    && previous.tiebreaker == tiebreaker =>
            {
                previous.position
            }
            _ => index as u32 + 1,
        };

        ranked.push(RankedResult {
            player_id: entry.player_id.clone(),
            display_name: entry.display_name.clone(),
            total_score: breakdown.total,
            tiebreaker,
            position,
            is_winner: position == 1,
            breakdown,
        });
    }

    ranked
}

/// True when more than one player finished first
pub fn has_shared_victory(ranked: &[RankedResult]) -> bool {
    ranked.iter().filter(|r| r.is_winner).count() > 1
}

pub fn winners(ranked: &[RankedResult]) -> Vec<&RankedResult> {
    ranked.iter().filter(|r| r.is_winner).collect()
}

/// Number of players at each finishing position
pub fn position_counts(ranked: &[RankedResult]) -> BTreeMap<u32, usize> {
    let mut counts = BTreeMap::new();
    for result in ranked {
        *counts.entry(result.position).or_insert(0) += 1;
    }
    counts
}

/// Ordinal form of a position: 1st, 2nd, 3rd, 4th, 11th, 21st...
pub fn format_position(position: u32) -> String {
    let suffix = match (position % 10, position % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{position}{suffix}")
}
