use serde::{Deserialize, Serialize};

use super::models::{GamePlayer, GameRecord};
use super::session::GameSession;
use crate::scoring::{has_shared_victory, Expansion, GoalScoringMode, RankedResult, ScoreInput};

/// Request payload for starting a new game
#[derive(Debug, Deserialize)]
pub struct StartGameRequest {
    pub player_ids: Vec<String>,
    #[serde(default)]
    pub mode: GoalScoringMode,
    #[serde(default)]
    pub expansions: Vec<Expansion>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FinalizeGameRequest {
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListGamesQuery {
    #[serde(default)]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerScore {
    pub player_id: String,
    pub display_name: String,
    pub input: ScoreInput,
}

/// An in-progress game with its live standings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResponse {
    pub id: String,
    pub mode: GoalScoringMode,
    pub expansions: Vec<Expansion>,
    pub players: Vec<GamePlayer>,
    pub scores: Vec<PlayerScore>,
    pub standings: Vec<RankedResult>,
    pub has_shared_victory: bool,
}

impl SessionResponse {
    pub fn new(session: &GameSession, standings: Vec<RankedResult>) -> Self {
        let scores = session
            .players
            .iter()
            .filter_map(|player| {
                session.score(&player.player_id).ok().map(|input| PlayerScore {
                    player_id: player.player_id.clone(),
                    display_name: player.display_name.clone(),
                    input: input.clone(),
                })
            })
            .collect();

        Self {
            id: session.id.clone(),
            mode: session.mode,
            expansions: session.expansions.clone(),
            players: session.players.clone(),
            scores,
            has_shared_victory: has_shared_victory(&standings),
            standings,
        }
    }
}

/// Either a game still being scored or a finished one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GameView {
    InProgress(SessionResponse),
    Complete(GameRecord),
}
