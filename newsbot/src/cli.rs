//! CLI parser and config loading.

use clap::{Parser, Subcommand};
use news_core::Result;

use crate::config::BotConfig;

#[derive(Parser, Debug)]
#[command(name = "newsbot")]
#[command(about = "Crypto news relay for Telegram", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the bot: scheduled channel updates plus commands (token can override TELEGRAM_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Fetch news once and print the formatted message; needs only CRYPTO_PANIC_API_KEY.
    Fetch {
        #[arg(short, long)]
        currency: Option<String>,
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Post one update to CHANNEL_ID and exit.
    PublishOnce {
        #[arg(short, long)]
        token: Option<String>,
    },
}

/// Load BotConfig from environment. If `token` is provided it overrides TELEGRAM_TOKEN.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}
