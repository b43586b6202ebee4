//! Bot initialization and command definitions

use reqwest::ClientBuilder;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::core::config::{self, Config};

/// Bot commands enum with descriptions
#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "Я умею:")]
pub enum Command {
    #[command(description = "приветствие и запрос контакта")]
    Start,
}

/// Creates a Bot instance with custom or default API URL
///
/// # Returns
/// * `Ok(Bot)` - Successfully created bot instance
/// * `Err(anyhow::Error)` - Failed to create bot (invalid URL, client build failure)
pub fn create_bot(cfg: &Config) -> anyhow::Result<Bot> {
    let client = ClientBuilder::new().timeout(config::network::timeout()).build()?;

    let bot = if let Some(ref bot_api_url) = cfg.bot_api_url {
        log::info!("Using custom Bot API URL: {}", bot_api_url);
        let url = url::Url::parse(bot_api_url).map_err(|e| anyhow::anyhow!("Invalid BOT_API_URL: {}", e))?;
        Bot::with_client(cfg.bot_token.clone(), client).set_api_url(url)
    } else {
        Bot::with_client(cfg.bot_token.clone(), client)
    };

    Ok(bot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_descriptions() {
        let commands = Command::descriptions();
        let command_list = format!("{}", commands);

        assert!(command_list.contains("Я умею"));
        assert!(command_list.contains("start"));
    }
}
