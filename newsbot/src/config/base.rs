//! Base config: Telegram connection, destination channel, logging, transport. Loaded from env.

use super::env::{optional, required};
use super::transport::Transport;
use news_core::{Destination, NewsbotError, Result};

pub const DEFAULT_LOG_FILE: &str = "logs/newsbot.log";

#[derive(Debug, Clone)]
pub struct BaseConfig {
    /// TELEGRAM_TOKEN, falling back to BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// CHANNEL_ID: numeric chat id or @channel
    pub channel: Destination,
    /// LOG_FILE
    pub log_file: String,
    pub transport: Transport,
}

impl BaseConfig {
    /// Load from environment variables. `token` overrides TELEGRAM_TOKEN / BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token.filter(|t| !t.trim().is_empty()) {
            Some(token) => token,
            None => optional("TELEGRAM_TOKEN")
                .or_else(|| optional("BOT_TOKEN"))
                .ok_or_else(|| NewsbotError::missing_var("TELEGRAM_TOKEN"))?,
        };
        let channel = Destination::parse(&required("CHANNEL_ID")?)?;
        let telegram_api_url =
            optional("TELEGRAM_API_URL").or_else(|| optional("TELOXIDE_API_URL"));
        let log_file = optional("LOG_FILE").unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());
        let transport = Transport::from_env()?;

        Ok(Self {
            bot_token,
            telegram_api_url,
            channel,
            log_file,
            transport,
        })
    }

    /// Validate config (e.g. telegram_api_url must be valid URL if set).
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                return Err(NewsbotError::Config(format!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                )));
            }
        }
        if let Transport::Webhook(ref webhook) = self.transport {
            webhook.validate()?;
        }
        Ok(())
    }
}
