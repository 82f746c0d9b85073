use thiserror::Error;

/// Error kinds of the relay. Fetch and delivery failures are recovered by their callers;
/// configuration errors abort startup; scheduling unavailability degrades to command-only mode.
#[derive(Error, Debug)]
pub enum NewsbotError {
    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Delivery error: {0}")]
    Delivery(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("Scheduling unavailable: {0}")]
    SchedulingUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl NewsbotError {
    /// Shorthand for a missing required environment variable.
    pub fn missing_var(name: &str) -> Self {
        NewsbotError::Config(format!("{} not set", name))
    }
}

pub type Result<T> = std::result::Result<T, NewsbotError>;
