//! Message formatting: turns a [`NewsBatch`] into one Telegram message using legacy Markdown
//! (`[title](url)` links, `_source_` italics). Pure; never fails.

use crate::types::{FormattedMessage, NewsBatch, NewsItem};

pub const HEADER: &str = "🔥 *Top Crypto News* 🔥";
pub const NO_NEWS: &str = "No news available at the moment.";

/// Renders a batch. Empty batch gives [`NO_NEWS`]; otherwise the header followed by
/// `idx. [title](url) - _source_` entries, 1-based, separated by blank lines.
pub fn format_news(batch: &NewsBatch) -> FormattedMessage {
    if batch.is_empty() {
        return FormattedMessage::new(NO_NEWS);
    }

    let mut text = String::from(HEADER);
    for (idx, item) in batch.items().iter().enumerate() {
        text.push_str("\n\n");
        text.push_str(&format_entry(idx + 1, item));
    }
    FormattedMessage::new(text)
}

/// One numbered entry, e.g. `1. [BTC rallies](https://x/1) - _CoinDesk_`.
pub fn format_entry(idx: usize, item: &NewsItem) -> String {
    format!(
        "{}. [{}]({}) - _{}_",
        idx,
        link_text(&item.title),
        link_target(&item.url),
        italic_text(&item.source_name)
    )
}

// Legacy Markdown has no escaping inside entities, so characters that would close
// the entity early are replaced.
fn link_text(title: &str) -> String {
    title.replace('[', "(").replace(']', ")")
}

fn link_target(url: &str) -> String {
    url.replace(')', "%29").replace(' ', "%20")
}

fn italic_text(source: &str) -> String {
    source.replace('_', " ")
}
