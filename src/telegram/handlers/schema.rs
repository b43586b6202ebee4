//! Dispatcher schema and handler chain builders

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, Message};

use super::contact::register_contact;
use super::types::{HandlerDeps, HandlerError};
use crate::core::validation::classify_contact;
use crate::telegram::bot::Command;
use crate::telegram::messages::SEND_TELEGRAM_CALLBACK;

/// Creates the main dispatcher schema for the Telegram bot.
///
/// This function returns a handler tree that can be used with teloxide's
/// Dispatcher. The same schema is used in production and in integration
/// tests.
///
/// # Arguments
/// * `deps` - Handler dependencies (database pool, config, messages)
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let deps_commands = deps.clone();
    let deps_messages = deps.clone();
    let deps_callback = deps;

    dptree::entry()
        // Command handler must come first so /start is not treated as a contact
        .branch(command_handler(deps_commands))
        // Message handler for contact submissions
        .branch(message_handler(deps_messages))
        // Callback query handler for the inline button
        .branch(callback_handler(deps_callback))
}

/// Handler for bot commands (/start)
fn command_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().branch(dptree::entry().filter_command::<Command>().endpoint(
        move |bot: Bot, msg: Message, cmd: Command| {
            let deps = deps.clone();
            async move {
                log::info!("Received command: {:?} from chat {}", cmd, msg.chat.id);

                match cmd {
                    Command::Start => {
                        let keyboard = InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::callback(
                            deps.messages.send_telegram_button.clone(),
                            SEND_TELEGRAM_CALLBACK,
                        )]]);

                        bot.send_message(msg.chat.id, deps.messages.welcome.clone())
                            .reply_markup(keyboard)
                            .await?;
                    }
                }
                Ok(())
            }
        },
    ))
}

/// Handler for regular messages (contact submissions)
fn message_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().endpoint(move |bot: Bot, msg: Message| {
        let deps = deps.clone();
        async move {
            let Some(user) = msg.from.as_ref() else {
                bot.send_message(msg.chat.id, deps.messages.no_user_data.clone()).await?;
                return Ok(());
            };
            let user_id = i64::try_from(user.id.0).unwrap_or(0);

            let text = msg.text().map(str::trim).unwrap_or_default();

            if classify_contact(text).is_valid() {
                register_contact(&bot, msg.chat.id, user_id, text, &deps).await?;
            } else {
                bot.send_message(msg.chat.id, deps.messages.invalid_format.clone()).await?;
            }

            Ok(())
        }
    })
}

/// Handler for callback queries (the "send my Telegram" inline button)
fn callback_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_callback_query()
        .filter(|q: CallbackQuery| q.data.as_deref() == Some(SEND_TELEGRAM_CALLBACK))
        .endpoint(move |bot: Bot, q: CallbackQuery| {
            let deps = deps.clone();
            async move {
                let user_id = i64::try_from(q.from.id.0).unwrap_or(0);
                let username = q.from.username.clone();

                if let Some(msg) = q.message.as_ref() {
                    let chat_id = msg.chat().id;
                    if let Some(username) = username {
                        let handle = format!("@{}", username);
                        // Echo the submitted handle back before registering it
                        bot.send_message(chat_id, handle.clone()).await?;
                        register_contact(&bot, chat_id, user_id, &handle, &deps).await?;
                    } else {
                        bot.send_message(chat_id, deps.messages.no_username.clone()).await?;
                    }
                }

                bot.answer_callback_query(q.id).await?;
                Ok(())
            }
        })
}
