use news_core::{format_news, Destination, NewsSource, Publisher};
use std::sync::Arc;
use tracing::{error, info, instrument};

/// Result of one pipeline run. `items` is the fetched batch size (0 means the placeholder was sent).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOutcome {
    pub items: usize,
    pub delivered: bool,
}

/// Fetch → format → publish for one destination. Holds no mutable state; runs are independent.
#[derive(Clone)]
pub struct NewsPipeline {
    source: Arc<dyn NewsSource>,
    publisher: Arc<dyn Publisher>,
    destination: Destination,
    limit: usize,
    currency: Option<String>,
}

impl NewsPipeline {
    pub fn new(
        source: Arc<dyn NewsSource>,
        publisher: Arc<dyn Publisher>,
        destination: Destination,
        limit: usize,
    ) -> Self {
        Self {
            source,
            publisher,
            destination,
            limit,
            currency: None,
        }
    }

    /// Restricts every run to one ticker (e.g. "BTC"). `None` means unfiltered.
    pub fn with_currency(mut self, currency: Option<String>) -> Self {
        self.currency = currency;
        self
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Runs the pipeline once. Fetch failures arrive as an empty batch and still publish the
    /// "no news" placeholder; delivery failures are logged and reported in the outcome.
    #[instrument(skip(self), fields(destination = %self.destination, limit = self.limit))]
    pub async fn run_once(&self) -> PipelineOutcome {
        info!(currency = ?self.currency, "step: pipeline started");

        let batch = self
            .source
            .fetch(self.currency.as_deref(), self.limit)
            .await;
        let message = format_news(&batch);

        match self.publisher.publish(&self.destination, &message).await {
            Ok(()) => {
                info!(items = batch.len(), "News update sent successfully");
                PipelineOutcome {
                    items: batch.len(),
                    delivered: true,
                }
            }
            Err(e) => {
                error!(error = %e, items = batch.len(), "Failed to send news");
                PipelineOutcome {
                    items: batch.len(),
                    delivered: false,
                }
            }
        }
    }
}
