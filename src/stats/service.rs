use std::sync::Arc;
use tracing::{debug, instrument};

use super::{
    calculators,
    models::{HeadToHead, LeaderboardEntry, PlayerGameResult, PlayerStats, StatsSummary},
    StatsError,
};
use crate::game::{repository::GameRepository, GameRecord};
use crate::players::{repository::PlayerRepository, PlayerModel};

/// Read-only statistics over saved games
pub struct StatsService {
    games: Arc<dyn GameRepository + Send + Sync>,
    players: Arc<dyn PlayerRepository + Send + Sync>,
}

impl StatsService {
    pub fn new(
        games: Arc<dyn GameRepository + Send + Sync>,
        players: Arc<dyn PlayerRepository + Send + Sync>,
    ) -> Self {
        Self { games, players }
    }

    /// Stats for any known player, including deactivated ones
    #[instrument(skip(self))]
    pub async fn player_stats(&self, player_id: &str) -> Result<PlayerStats, StatsError> {
        let player = self.find_player(player_id).await?;
        let games = self.games.games_for_player(player_id).await?;
        Ok(Self::stats_for(&player, &games))
    }

    #[instrument(skip(self))]
    pub async fn head_to_head(
        &self,
        player_id: &str,
        opponent_id: &str,
    ) -> Result<HeadToHead, StatsError> {
        self.find_player(player_id).await?;
        let opponent = self.find_player(opponent_id).await?;
        let games = self.games.games_for_player(player_id).await?;

        Ok(calculators::head_to_head(
            player_id,
            opponent_id,
            &opponent.name,
            &games,
        ))
    }

    /// Every opponent the player has faced, with current profile names
    #[instrument(skip(self))]
    pub async fn all_head_to_head(&self, player_id: &str) -> Result<Vec<HeadToHead>, StatsError> {
        self.find_player(player_id).await?;
        let games = self.games.games_for_player(player_id).await?;
        let mut records = calculators::all_head_to_head(player_id, &games);

        let opponent_ids: Vec<String> = records.iter().map(|r| r.opponent_id.clone()).collect();
        for profile in self.players.get_players(&opponent_ids).await? {
            if let Some(record) = records.iter_mut().find(|r| r.opponent_id == profile.id) {
                record.opponent_name = profile.name;
            }
        }

        debug!(opponent_count = records.len(), "Head-to-head records computed");
        Ok(records)
    }

    /// Active players with at least one saved game
    #[instrument(skip(self))]
    pub async fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, StatsError> {
        let players = self.players.list_players(false).await?;
        let games = self.games.list_games(None).await?;

        let stats = players
            .iter()
            .map(|player| {
                let played: Vec<GameRecord> = games
                    .iter()
                    .filter(|g| g.has_player(&player.id))
                    .cloned()
                    .collect();
                Self::stats_for(player, &played)
            })
            .collect();

        Ok(calculators::leaderboard(stats))
    }

    #[instrument(skip(self))]
    pub async fn summary(&self) -> Result<StatsSummary, StatsError> {
        let games = self.games.list_games(None).await?;
        let total_players = self.players.count_players().await?;
        Ok(calculators::summary(&games, total_players))
    }

    fn stats_for(player: &PlayerModel, games: &[GameRecord]) -> PlayerStats {
        let results: Vec<PlayerGameResult> = games
            .iter()
            .filter_map(|g| PlayerGameResult::from_record(g, &player.id))
            .collect();
        calculators::player_stats(&player.id, &player.name, &results)
    }

    async fn find_player(&self, player_id: &str) -> Result<PlayerModel, StatsError> {
        self.players
            .get_player(player_id)
            .await?
            .ok_or_else(|| StatsError::PlayerNotFound(player_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{repository::InMemoryGameRepository, GamePlayer, GameSession};
    use crate::players::repository::InMemoryPlayerRepository;
    use crate::scoring::{GoalScoringMode, ScoreUpdate};
    use chrono::{Duration, Utc};

    struct Fixture {
        service: StatsService,
        players: Arc<InMemoryPlayerRepository>,
        games: Arc<InMemoryGameRepository>,
        ids: Vec<String>,
    }

    fn fixture(names: &[&str]) -> Fixture {
        let profiles: Vec<PlayerModel> = names
            .iter()
            .map(|n| PlayerModel::new(n.to_string(), None))
            .collect();
        let ids = profiles.iter().map(|p| p.id.clone()).collect();
        let players = Arc::new(InMemoryPlayerRepository::with_players(profiles));
        let games = Arc::new(InMemoryGameRepository::new());
        Fixture {
            service: StatsService::new(games.clone(), players.clone()),
            players,
            games,
            ids,
        }
    }

    /// Saves a game where each listed player scored the given bird points
    async fn play(f: &Fixture, days_ago: i64, birds: &[(usize, i64)]) {
        let players = birds
            .iter()
            .map(|(i, _)| GamePlayer {
                player_id: f.ids[*i].clone(),
                display_name: format!("player{i}"),
            })
            .collect();
        let mut session = GameSession::new(players, GoalScoringMode::Competitive, vec![]).unwrap();
        for (i, value) in birds {
            session
                .apply(&f.ids[*i], ScoreUpdate::BirdCards { value: *value })
                .unwrap();
        }
        let record = session
            .to_record(Utc::now() - Duration::days(days_ago), None)
            .unwrap();
        f.games.save_game(&record).await.unwrap();
    }

    #[tokio::test]
    async fn player_stats_for_unknown_player_fails() {
        let f = fixture(&["Robin"]);
        let result = f.service.player_stats("ghost").await;
        assert!(matches!(result, Err(StatsError::PlayerNotFound(_))));
    }

    #[tokio::test]
    async fn player_stats_cover_saved_games() {
        let f = fixture(&["Robin", "Wren"]);
        play(&f, 3, &[(0, 50), (1, 40)]).await;
        play(&f, 2, &[(0, 30), (1, 30)]).await;
        play(&f, 1, &[(0, 20), (1, 60)]).await;

        let stats = f.service.player_stats(&f.ids[0]).await.unwrap();

        assert_eq!(stats.player_name, "Robin");
        assert_eq!(stats.total_games, 3);
        assert_eq!(stats.wins, 2);
        assert_eq!(stats.shared_victories, 1);
        assert_eq!(stats.high_score, 50);
        assert_eq!(stats.low_score, 20);
        assert_eq!(stats.average_score, 33.3);
        assert_eq!(stats.current_win_streak, 0);
        assert_eq!(stats.best_win_streak, 2);
    }

    #[tokio::test]
    async fn head_to_head_uses_profile_names() {
        let f = fixture(&["Robin", "Wren", "Jay"]);
        play(&f, 2, &[(0, 50), (1, 40), (2, 10)]).await;
        play(&f, 1, &[(0, 10), (1, 40)]).await;

        let record = f.service.head_to_head(&f.ids[0], &f.ids[1]).await.unwrap();
        assert_eq!(record.opponent_name, "Wren");
        assert_eq!((record.wins, record.losses, record.ties), (1, 1, 0));

        let all = f.service.all_head_to_head(&f.ids[0]).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].opponent_name, "Wren");
        assert_eq!(all[1].opponent_name, "Jay");
    }

    #[tokio::test]
    async fn leaderboard_skips_inactive_and_idle_players() {
        let f = fixture(&["Robin", "Wren", "Jay", "Idle"]);
        play(&f, 2, &[(0, 50), (1, 40), (2, 60)]).await;
        play(&f, 1, &[(0, 50), (1, 40)]).await;

        let mut jay = f.players.get_player(&f.ids[2]).await.unwrap().unwrap();
        jay.is_active = false;
        f.players.update_player(&jay).await.unwrap();

        let board = f.service.leaderboard().await.unwrap();

        let names: Vec<&str> = board.iter().map(|e| e.player_name.as_str()).collect();
        assert_eq!(names, vec!["Robin", "Wren"]);
        assert_eq!(board[0].wins, 1);
        assert_eq!(board[0].win_rate, 50);
    }

    #[tokio::test]
    async fn summary_counts_games_and_active_players() {
        let f = fixture(&["Robin", "Wren", "Jay"]);
        play(&f, 1, &[(0, 70), (1, 41)]).await;

        let mut jay = f.players.get_player(&f.ids[2]).await.unwrap().unwrap();
        jay.is_active = false;
        f.players.update_player(&jay).await.unwrap();

        let summary = f.service.summary().await.unwrap();

        assert_eq!(summary.total_games, 1);
        assert_eq!(summary.total_players, 2);
        assert_eq!(summary.high_score.unwrap().score, 70);
        assert_eq!(summary.average_score, 55.5);
    }
}
