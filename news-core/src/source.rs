//! News source abstraction. [`NewsSource::fetch`] never fails: failures are logged by the
//! implementation and surface as an empty batch.

use crate::types::NewsBatch;
use async_trait::async_trait;

/// Something that returns up to `limit` recent news items, optionally filtered by ticker.
#[async_trait]
pub trait NewsSource: Send + Sync {
    async fn fetch(&self, currency: Option<&str>, limit: usize) -> NewsBatch;
}

/// Longest ticker accepted. Keeps derived ids such as inline result ids well under
/// Telegram's 64-byte limit.
pub const MAX_TICKER_LEN: usize = 16;

/// Normalizes a user-supplied ticker: trims, uppercases, drops empty, overlong or
/// non-alphanumeric input.
pub fn normalize_currency(raw: &str) -> Option<String> {
    let ticker = raw.trim();
    if ticker.is_empty()
        || ticker.len() > MAX_TICKER_LEN
        || !ticker.chars().all(|c| c.is_ascii_alphanumeric())
    {
        return None;
    }
    Some(ticker.to_ascii_uppercase())
}
