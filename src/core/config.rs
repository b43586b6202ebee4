use std::env;
use std::time::Duration;

use crate::core::error::AppError;

/// Runtime configuration, built once at process start from the environment
/// and passed by reference to the components that need it.
///
/// `BOT_TOKEN` and `DATABASE_PATH` are required; the process refuses to
/// start without them. Everything else has a sane default.
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot token (BOT_TOKEN, falls back to TELOXIDE_TOKEN)
    pub bot_token: String,
    /// Path to the SQLite database file (DATABASE_PATH)
    pub database_path: String,
    /// Log file path (LOG_FILE_PATH, default: app.log)
    pub log_file_path: String,
    /// Bonus PDF guide sent after a successful registration
    /// (GUIDE_FILE_PATH, default: early_access_guide.pdf)
    pub guide_file_path: String,
    /// Custom Bot API server URL (BOT_API_URL, optional)
    pub bot_api_url: Option<String>,
}

impl Config {
    /// Reads configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` when `BOT_TOKEN` (or `TELOXIDE_TOKEN`)
    /// or `DATABASE_PATH` is absent.
    pub fn from_env() -> Result<Self, AppError> {
        let bot_token = env::var("BOT_TOKEN")
            .or_else(|_| env::var("TELOXIDE_TOKEN"))
            .map_err(|_| AppError::Config("BOT_TOKEN is not set".to_string()))?;

        let database_path =
            env::var("DATABASE_PATH").map_err(|_| AppError::Config("DATABASE_PATH is not set".to_string()))?;

        Ok(Self {
            bot_token,
            database_path,
            log_file_path: env::var("LOG_FILE_PATH").unwrap_or_else(|_| "app.log".to_string()),
            guide_file_path: env::var("GUIDE_FILE_PATH").unwrap_or_else(|_| "early_access_guide.pdf".to_string()),
            bot_api_url: env::var("BOT_API_URL").ok(),
        })
    }
}

/// Network configuration
pub mod network {
    use super::Duration;

    /// Request timeout for Bot API HTTP requests (in seconds)
    pub const REQUEST_TIMEOUT_SECS: u64 = 60;

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}
