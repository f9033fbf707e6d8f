use anyhow::{Context, Result};
use dotenv::dotenv;
use server::{handler::AppRouter, state::AppState};
use shared::{
    config::{Config, ConnectionManager},
    utils::Logger,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);

    let _logger = Logger::new("server", is_dev);

    let config = Config::init().context("Failed to load configuration")?;

    info!("🔌 Connecting to database at {}", config.safe_database_url());

    let db_pool = ConnectionManager::new_pool(&config.database_url(), config.run_migrations)
        .await
        .context("Failed to initialize database pool")?;

    let port = config.port;

    let state = AppState::new(db_pool)
        .await
        .context("Failed to create AppState")?;

    println!("🚀 Server started successfully");

    AppRouter::serve(port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down servers...");

    Ok(())
}
