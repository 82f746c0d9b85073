//! Bootstrap: logging, components, scheduler, dispatcher. Plus the one-shot entry points used by the CLI.

use anyhow::Result;
use news_core::{format_news, init_tracing, FormattedMessage, LogOutput, NewsSource};
use news_pipeline::{PipelineOutcome, Scheduler};
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use crate::components::{build_bot_components, build_news_source};
use crate::config::{BotConfig, NewsConfig};
use crate::telegram::run_dispatcher;

/// Main entry: validate config, init logging, build components, start the scheduler, then dispatch updates.
/// If the scheduler cannot start, commands keep working without scheduled updates.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(LogOutput::StdoutAndFile(config.log_file()))?;

    let components = build_bot_components(&config)?;

    if let Ok(me) = components.teloxide_bot.get_me().await {
        if let Some(username) = &me.user.username {
            info!(username = %username, "Bot identity resolved");
        }
    }

    let scheduler = Scheduler::new(*config.schedule(), components.pipeline.clone());
    let _scheduler = match scheduler.spawn() {
        Ok(handle) => Some(handle),
        Err(e) => {
            error!(error = %e, "Scheduler not available! Scheduled updates disabled");
            None
        }
    };

    info!("Bot started successfully");

    run_dispatcher(
        components.teloxide_bot.clone(),
        components.state.clone(),
        config.transport(),
    )
    .await
}

/// Runs the scheduled pipeline a single time against the configured channel.
#[instrument(skip(config))]
pub async fn publish_once(config: BotConfig) -> Result<PipelineOutcome> {
    config.validate()?;
    let components = build_bot_components(&config)?;
    Ok(components.pipeline.run_once().await)
}

/// Fetches and formats without Telegram; `limit` overrides NEWS_LIMIT.
#[instrument(skip(news))]
pub async fn fetch_once(
    news: &NewsConfig,
    currency: Option<&str>,
    limit: Option<usize>,
) -> Result<FormattedMessage> {
    news.validate()?;
    if limit == Some(0) {
        anyhow::bail!("--limit must be at least 1");
    }
    let client = build_news_source(news)?;
    let currency = currency.or(news.currency.as_deref());
    let batch = client.fetch(currency, limit.unwrap_or(news.limit)).await;
    Ok(format_news(&batch))
}
