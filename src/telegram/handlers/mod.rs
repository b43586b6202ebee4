//! Handler modules for the Telegram bot

pub mod contact;
pub mod schema;
pub mod types;

pub use contact::register_contact;
pub use schema::schema;
pub use types::{HandlerDeps, HandlerError};
