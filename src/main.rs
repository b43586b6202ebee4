use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;
use teloxide::prelude::*;

use earlybird::core::{config::Config, init_logger};
use earlybird::storage::create_pool;
use earlybird::telegram::{create_bot, schema, HandlerDeps, Messages};

/// Main entry point for the Telegram bot
///
/// # Errors
/// Returns an error if initialization fails (logging, configuration,
/// database, bot creation).
#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env if present
    let _ = dotenv();

    // Fail fast on missing BOT_TOKEN / DATABASE_PATH
    let config = Arc::new(Config::from_env()?);

    // Initialize logger (console + file)
    init_logger(&config.log_file_path)?;

    run_bot(config).await
}

/// Run the Telegram bot in long polling mode
async fn run_bot(config: Arc<Config>) -> Result<()> {
    log::info!("Starting bot...");

    // Create database connection pool and apply migrations
    let db_pool = Arc::new(create_pool(&config.database_path)?);
    log::info!("Database ready at {}", config.database_path);

    if !std::path::Path::new(&config.guide_file_path).exists() {
        log::warn!(
            "Guide file {} not found; successful registrations will get the textual fallback",
            config.guide_file_path
        );
    }

    // Create bot instance
    let bot = create_bot(&config)?;

    let deps = HandlerDeps::new(db_pool, Arc::clone(&config), Arc::new(Messages::default()));
    let handler = schema(deps);

    log::info!("Starting bot in long polling mode");

    Dispatcher::builder(bot, handler)
        .dependencies(DependencyMap::new())
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    log::info!("Dispatcher shutdown gracefully");
    Ok(())
}
