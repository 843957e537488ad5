use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::{
    models::{GamePlayer, GameRecord},
    repository::GameRepository,
    session::{GameSession, SessionStore},
    types::{GameView, SessionResponse, StartGameRequest},
};
use crate::players::repository::PlayerRepository;
use crate::scoring::{RankedResult, ScoreUpdate};
use crate::shared::AppError;

/// Service for scoring games, from the first category entered to the saved record
pub struct GameService {
    games: Arc<dyn GameRepository + Send + Sync>,
    players: Arc<dyn PlayerRepository + Send + Sync>,
    sessions: SessionStore,
}

impl GameService {
    pub fn new(
        games: Arc<dyn GameRepository + Send + Sync>,
        players: Arc<dyn PlayerRepository + Send + Sync>,
        sessions: SessionStore,
    ) -> Self {
        Self {
            games,
            players,
            sessions,
        }
    }

    /// Opens a scoring session for active players, in the order given
    #[instrument(skip(self))]
    pub async fn start_game(&self, request: StartGameRequest) -> Result<SessionResponse, AppError> {
        let found = self.players.get_players(&request.player_ids).await?;

        let mut players = Vec::with_capacity(request.player_ids.len());
        for player_id in &request.player_ids {
            let player = found
                .iter()
                .find(|p| &p.id == player_id)
                .ok_or_else(|| AppError::NotFound(format!("Player {} not found", player_id)))?;
            if !player.is_active {
                warn!(player_id = %player_id, "Inactive player cannot join a game");
                return Err(AppError::Validation(format!(
                    "Player {} is no longer active",
                    player.name
                )));
            }
            players.push(GamePlayer {
                player_id: player.id.clone(),
                display_name: player.name.clone(),
            });
        }

        let session = GameSession::new(players, request.mode, request.expansions)?;
        let response = SessionResponse::new(&session, session.standings()?);
        info!(
            game_id = %session.id,
            player_count = session.player_count(),
            mode = %session.mode,
            "Game started"
        );
        self.sessions.insert(session).await;

        Ok(response)
    }

    /// Applies one category update and returns the refreshed standings
    #[instrument(skip(self))]
    pub async fn update_score(
        &self,
        game_id: &str,
        player_id: &str,
        update: ScoreUpdate,
    ) -> Result<SessionResponse, AppError> {
        let category = update.category();
        let response = self
            .sessions
            .update(game_id, |session| {
                session.apply(player_id, update)?;
                Ok(SessionResponse::new(session, session.standings()?))
            })
            .await?;

        debug!(game_id = %game_id, player_id = %player_id, category = %category, "Score updated");
        Ok(response)
    }

    #[instrument(skip(self))]
    pub async fn standings(&self, game_id: &str) -> Result<Vec<RankedResult>, AppError> {
        Ok(self.find_session(game_id).await?.standings()?)
    }

    /// Discards an in-progress game without saving it
    #[instrument(skip(self))]
    pub async fn cancel_game(&self, game_id: &str) -> Result<(), AppError> {
        self.sessions
            .remove(game_id)
            .await
            .ok_or_else(|| AppError::NotFound(format!("Game {} not found", game_id)))?;
        info!(game_id = %game_id, "Game cancelled");
        Ok(())
    }

    /// Saves the final standings. The session is only dropped once the save
    /// succeeds, so a failed save can be retried.
    #[instrument(skip(self))]
    pub async fn finalize_game(
        &self,
        game_id: &str,
        notes: Option<String>,
    ) -> Result<GameRecord, AppError> {
        let record = self
            .sessions
            .finalize(game_id, Utc::now(), clean_notes(notes), self.games.as_ref())
            .await
            .inspect_err(|err| {
                warn!(game_id = %game_id, error = %err, "Failed to finalize game");
            })?;

        info!(
            game_id = %record.id,
            shared_victory = record.has_shared_victory(),
            "Game finalized"
        );
        Ok(record)
    }

    /// Corrects one category of a saved game and re-ranks it.
    /// The original play date and notes are kept.
    #[instrument(skip(self))]
    pub async fn edit_game_score(
        &self,
        game_id: &str,
        player_id: &str,
        update: ScoreUpdate,
    ) -> Result<GameRecord, AppError> {
        let _guard = self.sessions.lock_record(game_id).await;
        let record = self.find_record(game_id).await?;
        let mut session = GameSession::from_record(&record)?;
        session.apply(player_id, update)?;

        let edited = session.to_record(record.played_at, record.notes.clone())?;
        self.games.save_game(&edited).await?;

        info!(game_id = %game_id, player_id = %player_id, "Saved game edited");
        Ok(edited)
    }

    #[instrument(skip(self))]
    pub async fn list_games(&self, limit: Option<usize>) -> Result<Vec<GameRecord>, AppError> {
        let games = self.games.list_games(limit).await?;
        debug!(game_count = games.len(), "Games retrieved");
        Ok(games)
    }

    /// Looks in the live sessions first, then the saved games
    #[instrument(skip(self))]
    pub async fn get_game(&self, game_id: &str) -> Result<GameView, AppError> {
        if let Some(session) = self.sessions.get(game_id).await {
            return Ok(GameView::InProgress(SessionResponse::new(
                &session,
                session.standings()?,
            )));
        }
        Ok(GameView::Complete(self.find_record(game_id).await?))
    }

    #[instrument(skip(self))]
    pub async fn delete_game(&self, game_id: &str) -> Result<(), AppError> {
        let _guard = self.sessions.lock_record(game_id).await;
        self.games.delete_game(game_id).await?;
        self.sessions.forget_record(game_id).await;
        info!(game_id = %game_id, "Game deleted");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn games_for_player(&self, player_id: &str) -> Result<Vec<GameRecord>, AppError> {
        self.games.games_for_player(player_id).await
    }

    /// Saved games only; sessions still being scored are not counted
    pub async fn count_games(&self) -> Result<usize, AppError> {
        self.games.count_games().await
    }

    async fn find_session(&self, game_id: &str) -> Result<GameSession, AppError> {
        self.sessions
            .get(game_id)
            .await
            .ok_or_else(|| AppError::NotFound(format!("Game {} not found", game_id)))
    }

    async fn find_record(&self, game_id: &str) -> Result<GameRecord, AppError> {
        self.games
            .get_game(game_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Game {} not found", game_id)))
    }
}

fn clean_notes(notes: Option<String>) -> Option<String> {
    notes
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
}
