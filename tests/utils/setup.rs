#![allow(dead_code)] // Test utilities may not all be used in every test

use axum::Router;
use std::sync::Arc;

use wingspan_scores::{
    game::repository::InMemoryGameRepository,
    players::repository::{InMemoryPlayerRepository, PlayerRepository},
    router, AppState, PlayerModel,
};

// ============================================================================
// Test Setup Infrastructure
// ============================================================================

pub struct TestSetup {
    pub app: Router,
    pub state: AppState,
    /// Player IDs in the order their names were given
    pub players: Vec<String>,
}

pub struct TestSetupBuilder {
    names: Vec<String>,
}

impl TestSetupBuilder {
    pub fn new() -> Self {
        Self { names: vec![] }
    }

    pub fn with_players(mut self, names: Vec<&str>) -> Self {
        self.names = names.into_iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_three_players(self) -> Self {
        self.with_players(vec!["Robin", "Wren", "Heron"])
    }

    pub async fn build(self) -> TestSetup {
        let player_repository = Arc::new(InMemoryPlayerRepository::new());
        let mut players = vec![];
        for name in self.names {
            let player = PlayerModel::new(name, None);
            player_repository.create_player(&player).await.unwrap();
            players.push(player.id);
        }

        let state = AppState::new(player_repository, Arc::new(InMemoryGameRepository::new()));

        TestSetup {
            app: router(state.clone()),
            state,
            players,
        }
    }
}

impl Default for TestSetupBuilder {
    fn default() -> Self {
        Self::new()
    }
}
