//! Component factory: builds BotComponents from config. Isolates assembly logic from runner.

use anyhow::{Context, Result};
use cryptopanic_client::CryptoPanicClient;
use news_core::{NewsSource, Publisher, TelegramPublisher};
use news_pipeline::NewsPipeline;
use std::sync::Arc;
use teloxide::prelude::*;
use tracing::{info, instrument};

use crate::config::{BotConfig, NewsConfig};
use crate::telegram::BotState;

/// Everything run_bot needs. The HTTP clients inside are shared, read-only after startup.
#[derive(Clone)]
pub struct BotComponents {
    pub teloxide_bot: Bot,
    pub pipeline: NewsPipeline,
    pub state: Arc<BotState>,
}

/// Creates the teloxide Bot, pointing it at TELEGRAM_API_URL when set (e.g. a mock server in tests).
pub fn build_teloxide_bot(config: &BotConfig) -> Result<Bot> {
    let bot = Bot::new(config.bot_token());
    match config.telegram_api_url() {
        Some(url) => {
            let url = reqwest::Url::parse(url).context("Parse TELEGRAM_API_URL")?;
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}

/// Creates the CryptoPanic client from the news section of the config.
pub fn build_news_source(news: &NewsConfig) -> Result<CryptoPanicClient> {
    let client = CryptoPanicClient::with_base_url(
        news.api_key.clone(),
        news.api_url.clone(),
        news.http_timeout(),
    )?;
    Ok(client)
}

#[instrument(skip(config))]
pub fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let teloxide_bot = build_teloxide_bot(config)?;
    let news_source: Arc<dyn NewsSource> = Arc::new(build_news_source(config.news())?);
    let publisher: Arc<dyn Publisher> = Arc::new(TelegramPublisher::new(teloxide_bot.clone()));

    let pipeline = NewsPipeline::new(
        news_source.clone(),
        publisher.clone(),
        config.channel().clone(),
        config.news_limit(),
    )
    .with_currency(config.news().currency.clone());

    let state = Arc::new(BotState::new(
        news_source,
        publisher,
        config.news_limit(),
        config.news().inline_trigger.clone(),
    ));

    info!(
        channel = %config.channel(),
        limit = config.news_limit(),
        "Bot components built"
    );

    Ok(BotComponents {
        teloxide_bot,
        pipeline,
        state,
    })
}
