use std::time::Duration;
use tokio::time::interval;
use tracing::{debug, info, instrument};

use super::session::SessionStore;

/// Configuration for the abandoned-session sweep
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanupConfig {
    /// How often to run the sweep
    pub cleanup_interval: Duration,
    /// How long a session may go without a score update before it is dropped
    pub inactivity_threshold: Duration,
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            cleanup_interval: Duration::from_secs(30 * 60), // 30 minutes
            inactivity_threshold: Duration::from_secs(24 * 60 * 60), // 24 hours
        }
    }
}

impl CleanupConfig {
    /// Reads `SESSION_CLEANUP_INTERVAL_SECS` and `SESSION_IDLE_TIMEOUT_SECS`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let seconds = |key: &str| {
            lookup(key)
                .and_then(|s| s.trim().parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs)
        };

        Self {
            cleanup_interval: seconds("SESSION_CLEANUP_INTERVAL_SECS")
                .unwrap_or(defaults.cleanup_interval),
            inactivity_threshold: seconds("SESSION_IDLE_TIMEOUT_SECS")
                .unwrap_or(defaults.inactivity_threshold),
        }
    }
}

/// Periodically drops sessions that were started but never finalized or cancelled
#[instrument(skip(sessions))]
pub async fn start_cleanup_task(sessions: SessionStore, config: CleanupConfig) {
    info!(
        cleanup_interval_secs = config.cleanup_interval.as_secs(),
        inactivity_threshold_secs = config.inactivity_threshold.as_secs(),
        "Starting session cleanup background task"
    );

    let mut cleanup_interval = interval(config.cleanup_interval);

    loop {
        cleanup_interval.tick().await;
        let evicted = cleanup_inactive_sessions(&sessions, config.inactivity_threshold).await;
        info!(evicted_count = evicted, "Session cleanup completed");
    }
}

async fn cleanup_inactive_sessions(sessions: &SessionStore, threshold: Duration) -> usize {
    let evicted = sessions.evict_inactive(threshold).await;
    for game_id in &evicted {
        debug!(game_id = %game_id, "Dropped abandoned game session");
    }
    evicted.len()
}
