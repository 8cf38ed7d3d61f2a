//! Server binary: loads config from env, prepares the store, serves the tutorial API.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;
use tutorial_api::{
    app_from_config, apply_migrations, ensure_database_exists, AppConfig, AppState, InMemoryTutorialStore,
    PgTutorialStore, StoreBackend, TutorialStore,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tutorial_api=info,tower_http=info")),
        )
        .init();

    let store: Arc<dyn TutorialStore> = match config.store_backend {
        StoreBackend::Postgres => {
            ensure_database_exists(&config.database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .acquire_timeout(config.acquire_timeout)
                .connect(&config.database_url)
                .await?;
            apply_migrations(&pool).await?;
            Arc::new(PgTutorialStore::new(pool))
        }
        StoreBackend::Memory => {
            tracing::warn!("using in-memory store; data is lost on exit");
            Arc::new(InMemoryTutorialStore::new())
        }
    };

    let state = AppState::new(store, config.api.clone());
    let app = app_from_config(state, &config);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(prefix = %config.api_prefix, "listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::warn!("could not install ctrl-c handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
