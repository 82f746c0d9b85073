//! Inline queries of the form `<trigger> [TICKER]`, answered with a single article.

use super::state::BotState;
use news_core::{
    disabled_link_preview, markup_mode, normalize_currency, FormattedMessage, NO_NEWS,
};
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::{
    InlineQuery, InlineQueryResult, InlineQueryResultArticle, InputMessageContent,
    InputMessageContentText,
};
use tracing::{debug, error, info, instrument};

/// A recognised inline request; `currency` is the normalized ticker, if one was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineNewsQuery {
    pub currency: Option<String>,
}

/// Parses `query` against `trigger` (case-insensitive). Anything else, including an
/// unusable ticker or extra words, is not a news query.
pub fn parse_inline_query(query: &str, trigger: &str) -> Option<InlineNewsQuery> {
    let mut words = query.split_whitespace();
    let first = words.next()?;
    if !first.eq_ignore_ascii_case(trigger) {
        return None;
    }
    let currency = match words.next() {
        Some(raw) => Some(normalize_currency(raw)?),
        None => None,
    };
    if words.next().is_some() {
        return None;
    }
    Some(InlineNewsQuery { currency })
}

/// Builds the article result for a formatted message.
pub fn news_article(
    message: &FormattedMessage,
    request: &InlineNewsQuery,
    items: usize,
) -> InlineQueryResult {
    let (id, title) = match request.currency {
        Some(ref ticker) => (format!("news-{}", ticker), format!("Top {} news", ticker)),
        None => ("news-all".to_string(), "Top crypto news".to_string()),
    };
    let description = if items == 0 {
        NO_NEWS.to_string()
    } else {
        format!("{} latest stories", items)
    };

    let content = InputMessageContentText::new(message.as_str())
        .parse_mode(markup_mode())
        .link_preview_options(disabled_link_preview());

    InlineQueryResult::Article(
        InlineQueryResultArticle::new(id, title, InputMessageContent::Text(content))
            .description(description),
    )
}

/// Dispatcher endpoint for inline queries. Non-matching queries get an empty answer.
#[instrument(skip(bot, query, state), fields(from = query.from.id.0))]
pub async fn handle_inline_query(
    bot: Bot,
    query: InlineQuery,
    state: Arc<BotState>,
) -> ResponseResult<()> {
    let results = match parse_inline_query(&query.query, &state.inline_trigger) {
        Some(request) => {
            info!(currency = ?request.currency, "Received inline news query");
            let batch = state
                .source
                .fetch(request.currency.as_deref(), state.limit)
                .await;
            let message = news_core::format_news(&batch);
            vec![news_article(&message, &request, batch.len())]
        }
        None => {
            debug!(query = %query.query, "Inline query does not match trigger");
            Vec::new()
        }
    };

    if let Err(e) = bot.answer_inline_query(query.id.clone(), results).await {
        error!(error = %e, "Failed to answer inline query");
    }
    Ok(())
}
