//! Fakes shared by the telegram module's unit tests.

use async_trait::async_trait;
use news_core::{Destination, FormattedMessage, NewsBatch, NewsItem, NewsSource, Publisher, Result};
use std::sync::{Arc, Mutex};

pub fn item(title: &str, n: usize) -> NewsItem {
    NewsItem::new(
        Some(title.to_string()),
        Some(format!("https://x/{}", n)),
        Some("CoinDesk".to_string()),
    )
}

/// Always returns the same items; records (currency, limit) per call.
pub struct FixedSource {
    items: Vec<NewsItem>,
    pub requests: Arc<Mutex<Vec<(Option<String>, usize)>>>,
}

impl FixedSource {
    pub fn new(items: Vec<NewsItem>) -> Self {
        Self {
            items,
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl NewsSource for FixedSource {
    async fn fetch(&self, currency: Option<&str>, limit: usize) -> NewsBatch {
        self.requests
            .lock()
            .unwrap()
            .push((currency.map(str::to_string), limit));
        NewsBatch::truncated(self.items.clone(), limit)
    }
}

pub struct NullPublisher;

#[async_trait]
impl Publisher for NullPublisher {
    async fn publish(&self, _: &Destination, _: &FormattedMessage) -> Result<()> {
        Ok(())
    }
}
