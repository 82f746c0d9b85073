//! # newsbot
//!
//! Crypto news relay for Telegram. Loads config from env, posts the latest CryptoPanic headlines to a
//! channel on a fixed schedule, and answers `/news`, `/health` and inline queries.
//! Core types come from news-core, fetching from cryptopanic-client, fetch → format → publish and the
//! timer from news-pipeline.

pub mod cli;
pub mod components;
pub mod config;
pub mod runner;
pub mod telegram;

pub use cli::{load_config, Cli, Commands};
pub use components::{build_bot_components, build_news_source, build_teloxide_bot, BotComponents};
pub use config::{BaseConfig, BotConfig, NewsConfig, Transport, WebhookConfig};
pub use runner::{fetch_once, publish_once, run_bot};
pub use telegram::{BotState, Command};
