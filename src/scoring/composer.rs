use serde::{Deserialize, Serialize};

use super::input::ScoreInput;

/// Per-category points for one player, derived from a [`ScoreInput`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub bird_card_points: u32,
    pub bonus_card_points: u32,
    pub round_goal_points: u32,
    pub eggs_points: u32,
    pub cached_food_points: u32,
    pub tucked_cards_points: u32,
    pub nectar_points: u32,
    pub total: u32,
}

/// Compose a player's total from their raw inputs.
///
/// `majority_bonus` is the pre-computed habitat majority award, 0 when the
/// expansion is not in play. Eggs, cached food and tucked cards score one
/// point each; unused food tokens never count towards the total.
pub fn compose_score(input: &ScoreInput, majority_bonus: u32) -> ScoreBreakdown {
    let round_goal_points = input.round_goal_total();

    let total = input.bird_card_points
        + input.bonus_card_points
        + round_goal_points
        + input.eggs_count
        + input.cached_food_count
        + input.tucked_cards_count
        + majority_bonus;

    ScoreBreakdown {
        bird_card_points: input.bird_card_points,
        bonus_card_points: input.bonus_card_points,
        round_goal_points,
        eggs_points: input.eggs_count,
        cached_food_points: input.cached_food_count,
        tucked_cards_points: input.tucked_cards_count,
        nectar_points: majority_bonus,
        total,
    }
}
