//! # CryptoPanic client
//!
//! Fetches recent news posts from the CryptoPanic posts API and implements
//! [`news_core::NewsSource`].
//!
//! ## Behavior
//!
//! - One `GET` per call with `auth_token`, `public=true`, `kind=news` and, when given, `currencies=<TICKER>`.
//! - The result list is truncated to the requested limit, keeping upstream order.
//! - No retry, caching or deduplication.
//! - [`CryptoPanicClient::try_fetch`] returns the failure; the [`NewsSource::fetch`] impl logs it
//!   and returns an empty batch so callers (scheduler, commands) are never interrupted.
//!
//! ## Example
//!
//! ```rust,no_run
//! use cryptopanic_client::CryptoPanicClient;
//! use news_core::{format_news, NewsSource};
//!
//! async fn example() -> news_core::Result<()> {
//!     let client = CryptoPanicClient::new("your-api-key".to_string())?;
//!     let batch = client.fetch(Some("BTC"), 3).await;
//!     println!("{}", format_news(&batch));
//!     Ok(())
//! }
//! ```

mod wire;

use async_trait::async_trait;
use news_core::{normalize_currency, NewsBatch, NewsSource, NewsbotError, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{error, info};

use wire::PostsResponse;

pub const CRYPTOPANIC_API_BASE: &str = "https://cryptopanic.com/api/v1/posts/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// CryptoPanic posts client. Holds the shared HTTP client and the API key; read-only after construction.
#[derive(Debug, Clone)]
pub struct CryptoPanicClient {
    client: Client,
    base_url: String,
    auth_token: String,
}

impl CryptoPanicClient {
    /// Client for the public CryptoPanic endpoint with the default timeout.
    pub fn new(auth_token: String) -> Result<Self> {
        Self::with_base_url(
            auth_token,
            CRYPTOPANIC_API_BASE.to_string(),
            Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        )
    }

    /// Client for a custom endpoint (self-hosted proxy, mock server) with an explicit request timeout.
    pub fn with_base_url(auth_token: String, base_url: String, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NewsbotError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            auth_token,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches up to `limit` posts. `currency` is normalized (trimmed, uppercased); blank means unfiltered.
    ///
    /// # Errors
    ///
    /// [`NewsbotError::Fetch`] on network failure, timeout, non-2xx status or malformed JSON.
    pub async fn try_fetch(&self, currency: Option<&str>, limit: usize) -> Result<NewsBatch> {
        let currency = currency.and_then(normalize_currency);

        let mut query: Vec<(&str, &str)> = vec![
            ("auth_token", self.auth_token.as_str()),
            ("public", "true"),
            ("kind", "news"),
        ];
        if let Some(ref ticker) = currency {
            query.push(("currencies", ticker.as_str()));
        }

        info!(currency = ?currency, limit = limit, "step: fetching news");

        // without_url(): the request URL carries auth_token.
        let response = self
            .client
            .get(&self.base_url)
            .query(&query)
            .send()
            .await
            .map_err(|e| NewsbotError::Fetch(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NewsbotError::Fetch(format!(
                "CryptoPanic API error ({}): {}",
                status,
                preview(&body)
            )));
        }

        let posts: PostsResponse = response
            .json()
            .await
            .map_err(|e| NewsbotError::Fetch(format!("Malformed response: {}", e.without_url())))?;

        let batch = posts.into_batch(limit);
        info!(items = batch.len(), "step: news fetched");
        Ok(batch)
    }
}

#[async_trait]
impl NewsSource for CryptoPanicClient {
    async fn fetch(&self, currency: Option<&str>, limit: usize) -> NewsBatch {
        match self.try_fetch(currency, limit).await {
            Ok(batch) => batch,
            Err(e) => {
                error!(error = %e, currency = ?currency, "Error fetching news");
                NewsBatch::empty()
            }
        }
    }
}

fn preview(body: &str) -> &str {
    const LOG_PREVIEW_LEN: usize = 200;
    match body.char_indices().nth(LOG_PREVIEW_LEN) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        let long = "é".repeat(300);
        assert_eq!(preview(&long).chars().count(), 200);
        assert_eq!(preview("short"), "short");
    }

    #[test]
    fn test_new_uses_public_endpoint() {
        let client = CryptoPanicClient::new("key".to_string()).unwrap();
        assert_eq!(client.base_url(), CRYPTOPANIC_API_BASE);
    }
}
