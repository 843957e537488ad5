use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wingspan_scores::{
    game::{repository::InMemoryGameRepository, start_cleanup_task, CleanupConfig},
    players::repository::InMemoryPlayerRepository,
    router, AppState, ServerConfig,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), std::io::Error> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wingspan_scores=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Wingspan score keeper");

    let config = ServerConfig::from_env();

    let app_state = AppState::new(
        Arc::new(InMemoryPlayerRepository::new()),
        Arc::new(InMemoryGameRepository::new()),
    );

    tokio::spawn(start_cleanup_task(app_state.sessions.clone(), CleanupConfig::from_env()));

    let app = router(app_state);

    let listener = tokio::net::TcpListener::bind(config.socket_address()).await?;
    info!(address = %config.socket_address(), "Server running");
    axum::serve(listener, app).await
}
