//! Core types: news item, batch, formatted message, destination and schedule config.

use crate::error::{NewsbotError, Result};
use std::fmt;
use std::time::Duration;

pub const UNTITLED: &str = "Untitled";
pub const NO_URL: &str = "#";
pub const UNKNOWN_SOURCE: &str = "Unknown";

/// One article from the upstream news API. Missing fields are filled with placeholders at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    pub title: String,
    pub url: String,
    pub source_name: String,
}

impl NewsItem {
    /// Builds an item from optional upstream fields, substituting "Untitled", "#" and "Unknown".
    pub fn new(title: Option<String>, url: Option<String>, source_name: Option<String>) -> Self {
        Self {
            title: title.unwrap_or_else(|| UNTITLED.to_string()),
            url: url.unwrap_or_else(|| NO_URL.to_string()),
            source_name: source_name.unwrap_or_else(|| UNKNOWN_SOURCE.to_string()),
        }
    }
}

impl Default for NewsItem {
    fn default() -> Self {
        Self::new(None, None, None)
    }
}

/// Ordered, size-bounded list of news items from a single fetch. Order is upstream order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsBatch {
    items: Vec<NewsItem>,
}

impl NewsBatch {
    /// Keeps the first `limit` items, preserving order.
    pub fn truncated(mut items: Vec<NewsItem>, limit: usize) -> Self {
        items.truncate(limit);
        Self { items }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[NewsItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<NewsItem>> for NewsBatch {
    fn from(items: Vec<NewsItem>) -> Self {
        Self { items }
    }
}

/// Rendered message body, consumed once by a [`crate::Publisher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedMessage(String);

impl FormattedMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for FormattedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where messages go: a numeric chat id or a public channel username (`@name`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Id(i64),
    Username(String),
}

impl Destination {
    /// Parses a configured channel identifier: an integer id (e.g. `-1001234567890`) or `@channel`.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if let Ok(id) = raw.parse::<i64>() {
            return Ok(Destination::Id(id));
        }
        match raw.strip_prefix('@') {
            Some(name) if !name.is_empty() && !name.contains(char::is_whitespace) => {
                Ok(Destination::Username(raw.to_string()))
            }
            _ => Err(NewsbotError::Config(format!(
                "Invalid channel id {:?}: expected an integer chat id or @channel",
                raw
            ))),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Id(id) => write!(f, "{}", id),
            Destination::Username(name) => f.write_str(name),
        }
    }
}

/// Timer settings, fixed for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleConfig {
    interval_secs: u64,
    initial_delay_secs: u64,
}

impl ScheduleConfig {
    /// `interval_secs` must be greater than zero.
    pub fn new(interval_secs: u64, initial_delay_secs: u64) -> Result<Self> {
        if interval_secs == 0 {
            return Err(NewsbotError::Config(
                "schedule interval must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            interval_secs,
            initial_delay_secs,
        })
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn initial_delay(&self) -> Duration {
        Duration::from_secs(self.initial_delay_secs)
    }

    pub fn interval_secs(&self) -> u64 {
        self.interval_secs
    }

    pub fn initial_delay_secs(&self) -> u64 {
        self.initial_delay_secs
    }
}
