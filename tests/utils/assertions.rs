//! Assertion helpers - fluent API for checking standings
#![allow(dead_code)] // Test utilities may not all be used in every test

use wingspan_scores::scoring::RankedResult;

// ============================================================================
// Assertion Helpers
// ============================================================================

pub struct StandingsAssertion<'a> {
    standings: &'a [RankedResult],
}

impl<'a> StandingsAssertion<'a> {
    pub fn new(standings: &'a [RankedResult]) -> Self {
        Self { standings }
    }

    fn find(&self, player_id: &str) -> &'a RankedResult {
        self.standings
            .iter()
            .find(|r| r.player_id == player_id)
            .unwrap_or_else(|| panic!("{} missing from standings", player_id))
    }

    /// Positions in result order
    pub fn has_positions(self, expected: &[u32]) -> Self {
        let positions: Vec<u32> = self.standings.iter().map(|r| r.position).collect();
        assert_eq!(positions, expected, "unexpected positions");
        self
    }

    pub fn has_totals(self, expected: &[u32]) -> Self {
        let totals: Vec<u32> = self.standings.iter().map(|r| r.total_score).collect();
        assert_eq!(totals, expected, "unexpected totals");
        self
    }

    pub fn player_placed(self, player_id: &str, position: u32) -> Self {
        let result = self.find(player_id);
        assert_eq!(result.position, position, "{} placed wrong", player_id);
        assert_eq!(result.is_winner, position == 1, "{} winner flag wrong", player_id);
        self
    }

    pub fn player_scored(self, player_id: &str, total: u32) -> Self {
        assert_eq!(self.find(player_id).total_score, total, "{} total wrong", player_id);
        self
    }

    pub fn winner_count(self, expected: usize) -> Self {
        let winners = self.standings.iter().filter(|r| r.is_winner).count();
        assert_eq!(winners, expected, "unexpected number of winners");
        self
    }
}
