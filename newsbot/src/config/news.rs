//! News config: upstream API credentials and endpoint, batch size, schedule, inline trigger.

use super::env::{optional, parsed, required};
use cryptopanic_client::{CRYPTOPANIC_API_BASE, DEFAULT_TIMEOUT_SECS};
use news_core::{normalize_currency, NewsbotError, Result, ScheduleConfig};
use std::time::Duration;

pub const DEFAULT_NEWS_LIMIT: usize = 3;
pub const DEFAULT_INTERVAL_SECS: u64 = 7200;
pub const DEFAULT_INITIAL_DELAY_SECS: u64 = 10;
pub const DEFAULT_INLINE_TRIGGER: &str = "news";

#[derive(Debug, Clone)]
pub struct NewsConfig {
    /// CRYPTO_PANIC_API_KEY
    pub api_key: String,
    /// CRYPTO_PANIC_API_URL
    pub api_url: String,
    /// HTTP_TIMEOUT_SECS
    pub http_timeout_secs: u64,
    /// NEWS_LIMIT: items per message
    pub limit: usize,
    /// NEWS_CURRENCY: ticker filter for scheduled posts
    pub currency: Option<String>,
    /// NEWS_INTERVAL_SECS / NEWS_INITIAL_DELAY_SECS
    pub schedule: ScheduleConfig,
    /// INLINE_TRIGGER: first word of inline queries
    pub inline_trigger: String,
}

impl NewsConfig {
    pub fn from_env() -> Result<Self> {
        let api_key = required("CRYPTO_PANIC_API_KEY")?;
        let api_url =
            optional("CRYPTO_PANIC_API_URL").unwrap_or_else(|| CRYPTOPANIC_API_BASE.to_string());
        let http_timeout_secs = parsed("HTTP_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        let limit = parsed("NEWS_LIMIT", DEFAULT_NEWS_LIMIT)?;
        let currency = match optional("NEWS_CURRENCY") {
            Some(raw) => Some(normalize_currency(&raw).ok_or_else(|| {
                NewsbotError::Config(format!("NEWS_CURRENCY {:?} is not a ticker", raw))
            })?),
            None => None,
        };
        let schedule = ScheduleConfig::new(
            parsed("NEWS_INTERVAL_SECS", DEFAULT_INTERVAL_SECS)?,
            parsed("NEWS_INITIAL_DELAY_SECS", DEFAULT_INITIAL_DELAY_SECS)?,
        )?;
        let inline_trigger = optional("INLINE_TRIGGER")
            .unwrap_or_else(|| DEFAULT_INLINE_TRIGGER.to_string())
            .to_lowercase();

        Ok(Self {
            api_key,
            api_url,
            http_timeout_secs,
            limit,
            currency,
            schedule,
            inline_trigger,
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.limit == 0 {
            return Err(NewsbotError::Config("NEWS_LIMIT must be at least 1".to_string()));
        }
        if self.http_timeout_secs == 0 {
            return Err(NewsbotError::Config(
                "HTTP_TIMEOUT_SECS must be at least 1".to_string(),
            ));
        }
        if reqwest::Url::parse(&self.api_url).is_err() {
            return Err(NewsbotError::Config(format!(
                "CRYPTO_PANIC_API_URL is not a valid URL: {}",
                self.api_url
            )));
        }
        if self.inline_trigger.contains(char::is_whitespace) {
            return Err(NewsbotError::Config(
                "INLINE_TRIGGER must be a single word".to_string(),
            ));
        }
        Ok(())
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}
