//! Test doubles for [`NewsSource`] and [`Publisher`].

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use news_core::{
    Destination, FormattedMessage, NewsBatch, NewsItem, NewsSource, NewsbotError, Publisher,
    Result,
};

pub fn item(title: &str, n: usize) -> NewsItem {
    NewsItem::new(
        Some(title.to_string()),
        Some(format!("https://x/{}", n)),
        Some("CoinDesk".to_string()),
    )
}

/// Returns queued batches in order, then empty batches. Records each requested currency.
#[derive(Default)]
pub struct ScriptedSource {
    batches: Mutex<VecDeque<Vec<NewsItem>>>,
    pub requests: Mutex<Vec<(Option<String>, usize)>>,
}

impl ScriptedSource {
    pub fn new(batches: Vec<Vec<NewsItem>>) -> Self {
        Self {
            batches: Mutex::new(batches.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl NewsSource for ScriptedSource {
    async fn fetch(&self, currency: Option<&str>, limit: usize) -> NewsBatch {
        self.requests
            .lock()
            .unwrap()
            .push((currency.map(str::to_string), limit));
        let next = self.batches.lock().unwrap().pop_front().unwrap_or_default();
        NewsBatch::truncated(next, limit)
    }
}

/// Records every publish; optionally fails or takes time to complete.
#[derive(Default)]
pub struct RecordingPublisher {
    pub sent: Mutex<Vec<(Destination, String)>>,
    fail: bool,
    delay: Option<Duration>,
    in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn attempts(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn messages(&self) -> Vec<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|(_, text)| text.clone())
            .collect()
    }
}

#[async_trait]
impl Publisher for RecordingPublisher {
    async fn publish(&self, destination: &Destination, message: &FormattedMessage) -> Result<()> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.sent
            .lock()
            .unwrap()
            .push((destination.clone(), message.as_str().to_string()));

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        if self.fail {
            return Err(NewsbotError::Delivery("Bad Request: chat not found".to_string()));
        }
        Ok(())
    }
}

/// Panics on every publish.
pub struct PanickingPublisher {
    pub attempts: AtomicUsize,
}

#[async_trait]
impl Publisher for PanickingPublisher {
    async fn publish(&self, _: &Destination, _: &FormattedMessage) -> Result<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        panic!("publisher exploded");
    }
}

pub fn shared<T>(value: T) -> Arc<T> {
    Arc::new(value)
}
