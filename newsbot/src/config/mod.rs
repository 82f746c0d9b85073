//! Bot configuration: BaseConfig (Telegram, channel, log, transport) + NewsConfig (upstream API, limits, schedule).

mod base;
mod bot_config;
mod env;
mod news;
mod transport;


pub use base::BaseConfig;
pub use bot_config::BotConfig;
pub use news::NewsConfig;
pub use transport::{Transport, WebhookConfig};
