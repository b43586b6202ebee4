//! Telegram bot integration and handlers

pub mod bot;
pub mod handlers;
pub mod messages;

// Re-exports for convenience
pub use bot::{create_bot, Command};
pub use handlers::{schema, HandlerDeps, HandlerError};
pub use messages::Messages;
