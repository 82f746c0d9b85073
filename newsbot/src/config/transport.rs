//! Transport selection: long polling locally, webhook when a hosting marker (`RENDER`) is present.

use super::env::{optional, parsed};
use news_core::{NewsbotError, Result};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_WEBHOOK_PATH: &str = "webhook";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transport {
    Polling,
    Webhook(WebhookConfig),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookConfig {
    /// PORT; the listener binds 0.0.0.0:port
    pub port: u16,
    /// Public URL Telegram posts updates to. Its path is the route the listener serves.
    pub url: String,
    /// WEBHOOK_SECRET, sent back by Telegram in the secret-token header
    pub secret: Option<String>,
}

impl Transport {
    /// `RENDER` set → webhook (`PORT`, `WEBHOOK_URL` or `RENDER_SERVICE_NAME` + `WEBHOOK_PATH`, `WEBHOOK_SECRET`).
    pub fn from_env() -> Result<Self> {
        if std::env::var_os("RENDER").is_none() {
            return Ok(Transport::Polling);
        }

        let port = parsed("PORT", DEFAULT_PORT)?;
        let path = optional("WEBHOOK_PATH").unwrap_or_else(|| DEFAULT_WEBHOOK_PATH.to_string());
        let path = path.trim_start_matches('/');
        let url = match optional("WEBHOOK_URL") {
            Some(url) => url,
            None => {
                let service = optional("RENDER_SERVICE_NAME").ok_or_else(|| {
                    NewsbotError::Config(
                        "webhook mode needs WEBHOOK_URL or RENDER_SERVICE_NAME".to_string(),
                    )
                })?;
                format!("https://{}.onrender.com/{}", service, path)
            }
        };

        Ok(Transport::Webhook(WebhookConfig {
            port,
            url,
            secret: optional("WEBHOOK_SECRET"),
        }))
    }
}

impl WebhookConfig {
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.url).map_err(|e| {
            NewsbotError::Config(format!("WEBHOOK_URL {:?} is not a valid URL: {}", self.url, e))
        })?;
        if url.scheme() != "https" {
            return Err(NewsbotError::Config(format!(
                "WEBHOOK_URL must use https: {}",
                self.url
            )));
        }
        if let Some(ref secret) = self.secret {
            let valid = (1..=256).contains(&secret.len())
                && secret
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
            if !valid {
                return Err(NewsbotError::Config(
                    "WEBHOOK_SECRET must be 1-256 characters of A-Z, a-z, 0-9, _ and -".to_string(),
                ));
            }
        }
        Ok(())
    }
}
