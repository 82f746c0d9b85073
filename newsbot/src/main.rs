//! newsbot binary: run the relay, fetch once to stdout, or publish once. Config from env and optional CLI args.

use anyhow::{Context, Result};
use clap::Parser;
use news_core::{init_tracing, LogOutput};
use newsbot::{fetch_once, load_config, publish_once, run_bot, Cli, Commands, NewsConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token).context("Load config from environment")?;
            run_bot(config).await
        }
        Commands::Fetch { currency, limit } => {
            init_tracing(LogOutput::Stderr)?;
            let news = NewsConfig::from_env().context("Load news config from environment")?;
            let message = fetch_once(&news, currency.as_deref(), limit).await?;
            println!("{}", message);
            Ok(())
        }
        Commands::PublishOnce { token } => {
            init_tracing(LogOutput::Stderr)?;
            let config = load_config(token).context("Load config from environment")?;
            let channel = config.channel().clone();
            let outcome = publish_once(config).await?;
            if !outcome.delivered {
                anyhow::bail!("Failed to deliver news update to {}", channel);
            }
            println!("Published {} item(s) to {}", outcome.items, channel);
            Ok(())
        }
    }
}

