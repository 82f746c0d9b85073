//! BotConfig: BaseConfig + NewsConfig. Use load() for env-based loading, then validate() before init.

use news_core::{Destination, Result, ScheduleConfig};

use super::{BaseConfig, NewsConfig, Transport};

/// Full bot config, built once at startup and passed by reference into constructors.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    pub news: NewsConfig,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides TELEGRAM_TOKEN.
    /// A missing required variable is an error naming it.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let news = NewsConfig::from_env()?;
        Ok(Self { base, news })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.news.validate()
    }

    pub fn base(&self) -> &BaseConfig {
        &self.base
    }
    pub fn news(&self) -> &NewsConfig {
        &self.news
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }
    pub fn channel(&self) -> &Destination {
        &self.base.channel
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }
    pub fn transport(&self) -> &Transport {
        &self.base.transport
    }
    pub fn news_limit(&self) -> usize {
        self.news.limit
    }
    pub fn schedule(&self) -> &ScheduleConfig {
        &self.news.schedule
    }
}
