//! Earlybird - Telegram bot that collects early-access contacts
//!
//! The bot greets a user, asks for an email address or Telegram handle,
//! validates it, stores it idempotently in SQLite, and thanks the user
//! (optionally attaching a bonus PDF guide).
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, logging, and contact validation
//! - `storage`: database pool and contact persistence
//! - `telegram`: bot wiring, message templates, and handlers

pub mod core;
pub mod storage;
pub mod telegram;

// Re-export commonly used types for convenience
pub use crate::core::{config::Config, AppError, AppResult};
pub use crate::storage::{create_pool, get_connection, DbConnection, DbPool};
pub use crate::telegram::{schema, HandlerDeps, Messages};
