//! Update dispatching: message commands and inline queries, over long polling or a webhook.

use super::commands::{handle_command, Command};
use super::inline::handle_inline_query;
use super::state::BotState;
use crate::config::Transport;
use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use teloxide::dispatching::UpdateHandler;
use teloxide::error_handlers::LoggingErrorHandler;
use teloxide::prelude::*;
use teloxide::update_listeners::webhooks;
use teloxide::utils::command::BotCommands;
use tracing::{info, instrument, warn};

/// Handler tree: commands on messages, then inline queries. Other updates are dropped.
pub fn schema() -> UpdateHandler<teloxide::RequestError> {
    dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(handle_command),
        )
        .branch(Update::filter_inline_query().endpoint(handle_inline_query))
}

/// Registers the command list, then dispatches until Ctrl-C.
#[instrument(skip(bot, state, transport))]
pub async fn run_dispatcher(bot: Bot, state: Arc<BotState>, transport: &Transport) -> Result<()> {
    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        warn!(error = %e, "Failed to register bot commands");
    }

    let mut dispatcher = Dispatcher::builder(bot.clone(), schema())
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build();

    match transport {
        Transport::Polling => {
            info!("Running in polling mode");
            dispatcher.dispatch().await;
        }
        Transport::Webhook(webhook) => {
            let address = SocketAddr::from(([0, 0, 0, 0], webhook.port));
            let url = reqwest::Url::parse(&webhook.url).context("Parse WEBHOOK_URL")?;
            let mut options = webhooks::Options::new(address, url);
            if let Some(ref secret) = webhook.secret {
                options = options.secret_token(secret.clone());
            }

            let listener = webhooks::axum(bot, options)
                .await
                .context("Register webhook with Telegram")?;
            info!(port = webhook.port, url = %webhook.url, "Running in webhook mode");

            dispatcher
                .dispatch_with_listener(
                    listener,
                    LoggingErrorHandler::with_custom_text("An error from the update listener"),
                )
                .await;
        }
    }

    Ok(())
}
