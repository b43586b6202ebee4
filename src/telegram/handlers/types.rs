//! Handler types and dependencies

use std::sync::Arc;

use crate::core::config::Config;
use crate::storage::db::DbPool;
use crate::telegram::messages::Messages;

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub db_pool: Arc<DbPool>,
    pub config: Arc<Config>,
    pub messages: Arc<Messages>,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(db_pool: Arc<DbPool>, config: Arc<Config>, messages: Arc<Messages>) -> Self {
        Self {
            db_pool,
            config,
            messages,
        }
    }
}
