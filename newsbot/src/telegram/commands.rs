//! Slash commands: /help, /health, /news [TICKER].

use super::state::BotState;
use news_core::{normalize_currency, Destination, FormattedMessage};
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{error, info, instrument, warn};

pub const HEALTHY: &str = "Bot is running and healthy!";

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "These commands are supported:")]
pub enum Command {
    #[command(description = "show this text.")]
    Help,
    #[command(description = "check that the bot is alive.")]
    Health,
    #[command(description = "latest crypto news, optionally for one ticker, e.g. /news BTC.")]
    News(String),
}

/// What to send back for a command. News replies carry Markdown and go through the publisher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandReply {
    Plain(String),
    News(FormattedMessage),
}

/// Computes the reply without touching Telegram.
pub async fn reply_for(command: &Command, state: &BotState) -> CommandReply {
    match command {
        Command::Help => CommandReply::Plain(Command::descriptions().to_string()),
        Command::Health => CommandReply::Plain(HEALTHY.to_string()),
        Command::News(arg) => {
            let arg = arg.trim();
            let currency = normalize_currency(arg);
            if !arg.is_empty() && currency.is_none() {
                warn!(argument = %arg, "Ignoring invalid ticker, fetching unfiltered news");
            }
            CommandReply::News(state.news_message(currency.as_deref()).await)
        }
    }
}

/// Dispatcher endpoint for message commands. Delivery failures are logged, never returned.
#[instrument(skip(bot, msg, state), fields(chat_id = msg.chat.id.0))]
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    state: Arc<BotState>,
) -> ResponseResult<()> {
    info!(command = ?cmd, "Received command");

    match reply_for(&cmd, &state).await {
        CommandReply::Plain(text) => {
            if let Err(e) = bot.send_message(msg.chat.id, text).await {
                error!(error = %e, "Failed to send reply");
            }
        }
        CommandReply::News(message) => {
            let destination = Destination::Id(msg.chat.id.0);
            if let Err(e) = state.publisher.publish(&destination, &message).await {
                error!(error = %e, "Failed to send news reply");
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telegram::test_support::{item, FixedSource, NullPublisher};
    use news_core::{HEADER, NO_NEWS};

    fn state(source: FixedSource) -> BotState {
        BotState::new(Arc::new(source), Arc::new(NullPublisher), 3, "news")
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("/health", "newsbot").unwrap(), Command::Health);
        assert_eq!(Command::parse("/help", "newsbot").unwrap(), Command::Help);
        assert_eq!(
            Command::parse("/news btc", "newsbot").unwrap(),
            Command::News("btc".to_string())
        );
        assert_eq!(
            Command::parse("/news@newsbot ETH", "newsbot").unwrap(),
            Command::News("ETH".to_string())
        );
        assert!(Command::parse("/weather", "newsbot").is_err());
    }

    #[tokio::test]
    async fn test_health_reply() {
        let reply = reply_for(&Command::Health, &state(FixedSource::new(vec![]))).await;
        assert_eq!(reply, CommandReply::Plain(HEALTHY.to_string()));
    }

    #[tokio::test]
    async fn test_help_lists_commands() {
        let reply = reply_for(&Command::Help, &state(FixedSource::new(vec![]))).await;
        match reply {
            CommandReply::Plain(text) => {
                assert!(text.contains("/health"));
                assert!(text.contains("/news"));
            }
            other => panic!("unexpected reply {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_news_normalizes_ticker_and_uses_limit() {
        let source = FixedSource::new(vec![item("BTC rallies", 1)]);
        let requests = source.requests.clone();
        let reply = reply_for(&Command::News(" btc ".to_string()), &state(source)).await;

        match reply {
            CommandReply::News(message) => {
                assert!(message.as_str().starts_with(HEADER));
                assert!(message.as_str().contains("1. [BTC rallies](https://x/1)"));
            }
            other => panic!("unexpected reply {:?}", other),
        }
        assert_eq!(
            *requests.lock().unwrap(),
            vec![(Some("BTC".to_string()), 3)]
        );
    }

    #[tokio::test]
    async fn test_news_without_argument_is_unfiltered() {
        let source = FixedSource::new(vec![]);
        let requests = source.requests.clone();
        let reply = reply_for(&Command::News(String::new()), &state(source)).await;

        assert_eq!(reply, CommandReply::News(FormattedMessage::new(NO_NEWS)));
        assert_eq!(*requests.lock().unwrap(), vec![(None, 3)]);
    }

    #[tokio::test]
    async fn test_news_with_invalid_ticker_falls_back_to_unfiltered() {
        let source = FixedSource::new(vec![]);
        let requests = source.requests.clone();
        reply_for(&Command::News("b$c".to_string()), &state(source)).await;

        assert_eq!(*requests.lock().unwrap(), vec![(None, 3)]);
    }
}
