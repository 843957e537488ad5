#![allow(dead_code)] // Test utilities may not all be used in every test

use wingspan_scores::scoring::{RankingEntry, Region, ScoreInput};

// ============================================================================
// Score Input Builder
// ============================================================================

/// Fluent builder for a player's raw score sheet
#[derive(Default)]
pub struct ScoreInputBuilder {
    input: ScoreInput,
}

impl ScoreInputBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn birds(mut self, points: u32) -> Self {
        self.input.bird_card_points = points;
        self
    }

    pub fn bonus(mut self, points: u32) -> Self {
        self.input.bonus_card_points = points;
        self
    }

    pub fn round_goals(mut self, points: [u32; 4]) -> Self {
        self.input.round_goals = points;
        self
    }

    pub fn eggs(mut self, count: u32) -> Self {
        self.input.eggs_count = count;
        self
    }

    pub fn cached_food(mut self, count: u32) -> Self {
        self.input.cached_food_count = count;
        self
    }

    pub fn tucked(mut self, count: u32) -> Self {
        self.input.tucked_cards_count = count;
        self
    }

    pub fn unused_food(mut self, count: u32) -> Self {
        self.input.unused_food_tokens = count;
        self
    }

    pub fn nectar(mut self, region: Region, amount: u32) -> Self {
        self.input.nectar.set(region, amount);
        self
    }

    /// A sheet whose total is exactly `points`, all in bird cards
    pub fn total(points: u32) -> Self {
        Self::new().birds(points)
    }

    pub fn build(self) -> ScoreInput {
        self.input
    }

    pub fn entry(self, player_id: &str) -> RankingEntry {
        RankingEntry {
            player_id: player_id.to_string(),
            display_name: player_id.to_string(),
            score: self.input,
        }
    }
}
