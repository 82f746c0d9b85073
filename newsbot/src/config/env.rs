//! Environment lookups shared by the config sections.

use news_core::{NewsbotError, Result};
use std::env;
use std::fmt::Display;
use std::str::FromStr;

/// Value of `name` if set and not blank.
pub(crate) fn optional(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Value of `name`; missing or blank is a config error naming the variable.
pub(crate) fn required(name: &str) -> Result<String> {
    optional(name).ok_or_else(|| NewsbotError::missing_var(name))
}

/// Parses `name` when set, else `default`. An unparseable value is an error, not a silent default.
pub(crate) fn parsed<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    match optional(name) {
        Some(raw) => raw
            .parse()
            .map_err(|e| NewsbotError::Config(format!("{}={:?} is invalid: {}", name, raw, e))),
        None => Ok(default),
    }
}
