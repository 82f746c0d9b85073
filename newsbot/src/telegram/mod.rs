//! Telegram command surface: slash commands, inline queries, dispatcher over polling or webhook.

mod commands;
mod inline;
mod runner;
mod state;

#[cfg(test)]
mod test_support;

pub use commands::{handle_command, reply_for, Command, CommandReply, HEALTHY};
pub use inline::{handle_inline_query, news_article, parse_inline_query, InlineNewsQuery};
pub use runner::{run_dispatcher, schema};
pub use state::BotState;
