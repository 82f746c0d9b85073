//! Publishing formatted messages.
//!
//! [`Publisher`] is transport-agnostic; [`TelegramPublisher`] implements it via teloxide.

use crate::error::{NewsbotError, Result};
use crate::types::{Destination, FormattedMessage};
use async_trait::async_trait;
use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::*;
use teloxide::types::{ChatId, LinkPreviewOptions, ParseMode, Recipient};

/// Sends a formatted message to a destination. Implementations must not retry.
#[async_trait]
pub trait Publisher: Send + Sync {
    async fn publish(&self, destination: &Destination, message: &FormattedMessage) -> Result<()>;
}

/// Teloxide-based implementation of [`Publisher`]. Sends with legacy Markdown and link previews disabled.
#[derive(Clone)]
pub struct TelegramPublisher {
    bot: teloxide::Bot,
}

impl TelegramPublisher {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

/// Maps a [`Destination`] to a teloxide recipient.
pub fn recipient(destination: &Destination) -> Recipient {
    match destination {
        Destination::Id(id) => Recipient::from(ChatId(*id)),
        Destination::Username(name) => Recipient::ChannelUsername(name.clone()),
    }
}

/// Link previews off so the channel stays compact.
pub fn disabled_link_preview() -> LinkPreviewOptions {
    LinkPreviewOptions {
        is_disabled: true,
        url: None,
        prefer_small_media: false,
        prefer_large_media: false,
        show_above_text: false,
    }
}

/// Parse mode matching the `[title](url)` / `_source_` markup produced by the formatter.
#[allow(deprecated)]
pub fn markup_mode() -> ParseMode {
    ParseMode::Markdown
}

#[async_trait]
impl Publisher for TelegramPublisher {
    async fn publish(&self, destination: &Destination, message: &FormattedMessage) -> Result<()> {
        self.bot
            .send_message(recipient(destination), message.as_str())
            .parse_mode(markup_mode())
            .link_preview_options(disabled_link_preview())
            .await
            .map_err(|e| NewsbotError::Delivery(e.to_string()))?;
        Ok(())
    }
}
