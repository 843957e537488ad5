use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};
use uuid::Uuid;

use super::errors::GameError;
use super::models::{GamePlayer, GameRecord, GameScoreRecord};
use super::repository::GameRepository;
use crate::shared::AppError;
use crate::scoring::{
    rank_players, Expansion, GoalScoringMode, RankedResult, RankingEntry, ScoreInput, ScoreUpdate,
};
use crate::validation::validate_player_count;

/// A game being scored. Owned by the caller; every derived value is
/// recomputed from the current inputs on request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    pub id: String,
    pub players: Vec<GamePlayer>,
    pub mode: GoalScoringMode,
    pub expansions: Vec<Expansion>,
    pub started_at: DateTime<Utc>,
    scores: HashMap<String, ScoreInput>,
}

impl GameSession {
    /// Starts a new game with an all-zero score for every player
    pub fn new(
        players: Vec<GamePlayer>,
        mode: GoalScoringMode,
        expansions: Vec<Expansion>,
    ) -> Result<Self, GameError> {
        let scores = players
            .iter()
            .map(|p| (p.player_id.clone(), ScoreInput::new()))
            .collect();

        Self::restore(
            Uuid::new_v4().to_string(),
            players,
            mode,
            expansions,
            Utc::now(),
            scores,
        )
    }

    /// Rebuilds a session from stored parts.
    ///
    /// Every player must have a score: a missing entry is reported rather
    /// than silently replaced with zeros.
    pub fn restore(
        id: String,
        players: Vec<GamePlayer>,
        mode: GoalScoringMode,
        mut expansions: Vec<Expansion>,
        started_at: DateTime<Utc>,
        scores: HashMap<String, ScoreInput>,
    ) -> Result<Self, GameError> {
        validate_player_count(players.len())?;

        let mut seen = HashSet::new();
        for player in &players {
            if !seen.insert(player.player_id.as_str()) {
                return Err(GameError::DuplicatePlayer(player.player_id.clone()));
            }
            if !scores.contains_key(&player.player_id) {
                return Err(GameError::MissingScore(player.player_id.clone()));
            }
        }

        let mut unique = HashSet::new();
        expansions.retain(|e| unique.insert(*e));

        Ok(Self {
            id,
            players,
            mode,
            expansions,
            started_at,
            scores,
        })
    }

    /// Reopens a finished game for editing
    pub fn from_record(record: &GameRecord) -> Result<Self, GameError> {
        let scores = record
            .scores
            .iter()
            .map(|s| (s.player_id.clone(), s.input.clone()))
            .collect();

        Self::restore(
            record.id.clone(),
            record.players.clone(),
            record.mode,
            record.expansions.clone(),
            record.played_at,
            scores,
        )
    }

    pub fn has_expansion(&self, expansion: Expansion) -> bool {
        self.expansions.contains(&expansion)
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn score(&self, player_id: &str) -> Result<&ScoreInput, GameError> {
        self.scores
            .get(player_id)
            .ok_or_else(|| GameError::UnknownPlayer(player_id.to_string()))
    }

    /// Applies one category update to a player's score
    pub fn apply(
        &mut self,
        player_id: &str,
        update: ScoreUpdate,
    ) -> Result<&ScoreInput, GameError> {
        let mode = self.mode;
        let score = self
            .scores
            .get_mut(player_id)
            .ok_or_else(|| GameError::UnknownPlayer(player_id.to_string()))?;
        score.apply(update, mode)?;
        Ok(score)
    }

    /// Full ranking over the current inputs
    pub fn standings(&self) -> Result<Vec<RankedResult>, GameError> {
        let entries = self
            .players
            .iter()
            .map(|player| {
                let score = self
                    .scores
                    .get(&player.player_id)
                    .ok_or_else(|| GameError::MissingScore(player.player_id.clone()))?;
                Ok::<_, GameError>(RankingEntry {
                    player_id: player.player_id.clone(),
                    display_name: player.display_name.clone(),
                    score: score.clone(),
                })
            })
            .collect::<Result<Vec<_>, GameError>>()?;

        Ok(rank_players(&entries, &self.expansions))
    }

    /// Current total for one player, including any majority bonus
    pub fn total_score(&self, player_id: &str) -> Result<u32, GameError> {
        self.standings()?
            .into_iter()
            .find(|r| r.player_id == player_id)
            .map(|r| r.total_score)
            .ok_or_else(|| GameError::UnknownPlayer(player_id.to_string()))
    }

    /// Freezes the session into an immutable record
    pub fn to_record(
        &self,
        played_at: DateTime<Utc>,
        notes: Option<String>,
    ) -> Result<GameRecord, GameError> {
        let scores = self
            .standings()?
            .into_iter()
            .map(|ranked| {
                let input = self.score(&ranked.player_id)?.clone();
                Ok::<_, GameError>(GameScoreRecord {
                    player_id: ranked.player_id,
                    player_name: ranked.display_name,
                    input,
                    breakdown: ranked.breakdown,
                    total_score: ranked.total_score,
                    finish_position: ranked.position,
                    is_winner: ranked.is_winner,
                })
            })
            .collect::<Result<Vec<_>, GameError>>()?;

        Ok(GameRecord {
            id: self.id.clone(),
            played_at,
            mode: self.mode,
            expansions: self.expansions.clone(),
            players: self.players.clone(),
            notes,
            scores,
        })
    }
}

struct LiveSession {
    session: GameSession,
    last_activity: Instant,
}

impl LiveSession {
    fn new(session: GameSession) -> Self {
        Self {
            session,
            last_activity: Instant::now(),
        }
    }
}

/// In-progress sessions keyed by game ID, plus per-game edit locks for
/// saved records
#[derive(Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<String, LiveSession>>>,
    record_locks: Arc<RwLock<HashMap<String, Arc<Mutex<()>>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, session: GameSession) {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id.clone(), LiveSession::new(session));
    }

    pub async fn get(&self, game_id: &str) -> Option<GameSession> {
        let sessions = self.sessions.read().await;
        sessions.get(game_id).map(|live| live.session.clone())
    }

    pub async fn remove(&self, game_id: &str) -> Option<GameSession> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(game_id).map(|live| live.session)
    }

    /// Runs `f` against the session while holding the write lock
    pub async fn update<R>(
        &self,
        game_id: &str,
        f: impl FnOnce(&mut GameSession) -> Result<R, GameError>,
    ) -> Result<R, GameError> {
        let mut sessions = self.sessions.write().await;
        let live = sessions
            .get_mut(game_id)
            .ok_or_else(|| GameError::NotFound(game_id.to_string()))?;
        live.last_activity = Instant::now();
        f(&mut live.session)
    }

    /// Saves the session as a record and closes it.
    ///
    /// The write lock is held across the save, so no update can land
    /// between building the record and removing the session. A failed
    /// save leaves the session open.
    pub async fn finalize(
        &self,
        game_id: &str,
        played_at: DateTime<Utc>,
        notes: Option<String>,
        games: &(dyn GameRepository + Send + Sync),
    ) -> Result<GameRecord, AppError> {
        let mut sessions = self.sessions.write().await;
        let record = sessions
            .get(game_id)
            .ok_or_else(|| AppError::NotFound(format!("Game {} not found", game_id)))?
            .session
            .to_record(played_at, notes)?;

        games.save_game(&record).await?;
        sessions.remove(game_id);
        Ok(record)
    }

    /// Drops sessions with no activity for longer than `threshold`,
    /// returning their IDs
    pub async fn evict_inactive(&self, threshold: Duration) -> Vec<String> {
        let mut sessions = self.sessions.write().await;
        let stale: Vec<String> = sessions
            .iter()
            .filter(|(_, live)| live.last_activity.elapsed() > threshold)
            .map(|(id, _)| id.clone())
            .collect();
        for game_id in &stale {
            sessions.remove(game_id);
        }
        stale
    }

    /// Serializes read-modify-write cycles on one saved game
    pub async fn lock_record(&self, game_id: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.record_locks.write().await;
            locks
                .entry(game_id.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }

    pub async fn forget_record(&self, game_id: &str) {
        let mut locks = self.record_locks.write().await;
        locks.remove(game_id);
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
