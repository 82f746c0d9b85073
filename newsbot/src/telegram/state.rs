//! Shared, read-only state injected into every update handler.

use news_core::{format_news, FormattedMessage, NewsSource, Publisher};
use std::sync::Arc;

pub struct BotState {
    pub source: Arc<dyn NewsSource>,
    pub publisher: Arc<dyn Publisher>,
    pub limit: usize,
    pub inline_trigger: String,
}

impl BotState {
    pub fn new(
        source: Arc<dyn NewsSource>,
        publisher: Arc<dyn Publisher>,
        limit: usize,
        inline_trigger: impl Into<String>,
    ) -> Self {
        Self {
            source,
            publisher,
            limit,
            inline_trigger: inline_trigger.into(),
        }
    }

    /// Fetches and formats on demand. A failed fetch yields the "no news" placeholder.
    pub async fn news_message(&self, currency: Option<&str>) -> FormattedMessage {
        let batch = self.source.fetch(currency, self.limit).await;
        format_news(&batch)
    }
}
