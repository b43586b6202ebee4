//! Contact registration flow
//!
//! Validated input lands here: one conditional insert decides between
//! the duplicate notice and the thank-you reply, then the bonus guide
//! is delivered on a best-effort basis.

use std::path::Path;
use std::sync::Arc;

use teloxide::prelude::*;
use teloxide::types::InputFile;

use super::types::{HandlerDeps, HandlerError};
use crate::core::error::AppError;
use crate::storage::db::insert_contact_if_absent;
use crate::storage::get_connection;

/// Persists a validated contact and replies accordingly.
///
/// The insert runs off the dispatcher thread via `spawn_blocking` so
/// concurrent chat events are not serialized behind database I/O. A
/// duplicate pair (pre-existing or lost race) yields the
/// "already registered" notice; a fresh pair yields the thank-you reply
/// followed by a best-effort guide delivery.
pub async fn register_contact(
    bot: &Bot,
    chat_id: ChatId,
    user_id: i64,
    contact: &str,
    deps: &HandlerDeps,
) -> Result<(), HandlerError> {
    let pool = Arc::clone(&deps.db_pool);
    let contact_owned = contact.to_string();

    let inserted = tokio::task::spawn_blocking(move || -> Result<bool, AppError> {
        let conn = get_connection(&pool)?;
        Ok(insert_contact_if_absent(&conn, user_id, &contact_owned)?)
    })
    .await??;

    if !inserted {
        bot.send_message(chat_id, deps.messages.already_registered.clone()).await?;
        return Ok(());
    }

    log::info!("Registered new contact for user {}", user_id);
    bot.send_message(chat_id, deps.messages.thanks.clone()).await?;
    send_guide(bot, chat_id, deps).await;

    Ok(())
}

/// Delivers the bonus PDF guide, degrading to a textual fallback when
/// the file is missing or the transport fails. Never surfaces an error.
async fn send_guide(bot: &Bot, chat_id: ChatId, deps: &HandlerDeps) {
    let path = Path::new(&deps.config.guide_file_path);

    if path.exists() {
        let document = InputFile::file(path.to_path_buf());
        match bot
            .send_document(chat_id, document)
            .caption(deps.messages.guide_caption.clone())
            .await
        {
            Ok(_) => return,
            Err(e) => log::error!("Failed to send guide file {}: {}", path.display(), e),
        }
    } else {
        log::warn!("Guide file {} not found, sending textual fallback", path.display());
    }

    if let Err(e) = bot.send_message(chat_id, deps.messages.guide_fallback.clone()).await {
        log::error!("Failed to send guide fallback message: {}", e);
    }
}
