use thiserror::Error;

/// Centralized error types for the application
///
/// All errors in the application are converted to this enum for consistent
/// error handling. Uses `thiserror` for automatic error conversion and
/// display formatting.
#[derive(Error, Debug)]
pub enum AppError {
    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Database connection pool errors
    #[error("Database pool error: {0}")]
    DatabasePool(#[from] r2d2::Error),

    /// Telegram API errors
    #[error("Telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    /// A (user, contact) pair that is already stored.
    ///
    /// Raised when the unique index on (user_id, contact) rejects an
    /// insert; callers treat it exactly like a pre-flight duplicate.
    #[error("Contact already registered for this user")]
    DuplicateContact,

    /// Missing or invalid startup configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
