use anyhow::{Context, Result};
use product::{
    handler::AppRouter,
    repository::ensure_schema,
    seed::load_seed,
    state::AppState,
};
use shared::{
    config::{Config, ConnectionManager},
    utils::init_logger,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    let is_enable_file = std::env::var("ENABLE_FILE_LOG")
        .map(|v| v == "true")
        .unwrap_or(false);

    let _log_guard = init_logger("product-service", is_dev, is_enable_file);

    let config = Config::init().context("Failed to load configuration")?;

    info!("🚀 Starting Product Service initialization...");

    let db_pool = ConnectionManager::new_pool(
        &config.database_url,
        config.db_min_conn,
        config.db_max_conn,
    )
    .await
    .context("Failed to initialize database pool")?;

    ensure_schema(&db_pool)
        .await
        .context("Failed to prepare products table")?;

    let state = AppState::new(db_pool, config.cors_origin.clone());

    let seed = load_seed(config.seed_file.as_deref())
        .await
        .context("Failed to load seed products")?;

    let seeded = state
        .di_container
        .product_command
        .seed_products(&seed)
        .await
        .context("Failed to seed products")?;

    info!("✅ Application setup completed successfully ({seeded} products seeded).");

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("✅ Product Service shutdown complete.");

    Ok(())
}
