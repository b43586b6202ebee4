//! Core utilities, configuration, and common functionality

pub mod config;
pub mod error;
pub mod logging;
pub mod validation;

// Re-exports for convenience
pub use error::{AppError, AppResult};
pub use logging::init_logger;
pub use validation::{classify_contact, ContactKind};
