//! # news-core
//!
//! Core of the news relay: [`NewsItem`] and [`NewsBatch`], the Markdown [`format_news`] formatter,
//! the [`NewsSource`] and [`Publisher`] seams, the teloxide [`TelegramPublisher`], and tracing
//! initialization. Used by cryptopanic-client, news-pipeline and newsbot.

pub mod error;
pub mod formatter;
pub mod logger;
pub mod publisher;
pub mod source;
pub mod types;

pub use error::{NewsbotError, Result};
pub use formatter::{format_entry, format_news, HEADER, NO_NEWS};
pub use logger::{init_tracing, LogOutput};
pub use publisher::{disabled_link_preview, markup_mode, recipient, Publisher, TelegramPublisher};
pub use source::{normalize_currency, NewsSource, MAX_TICKER_LEN};
pub use types::{Destination, FormattedMessage, NewsBatch, NewsItem, ScheduleConfig};
