//! Tracing setup for the relay. The long-running bot logs to stdout and an append-only file;
//! one-shot CLI commands log to stderr only, so stdout carries just their output.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::error::{NewsbotError, Result};

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput<'a> {
    /// `run`: stdout plus the given log file, default level info.
    StdoutAndFile(&'a str),
    /// One-shot commands: stderr only, default level warn.
    Stderr,
}

impl LogOutput<'_> {
    /// Level used when `RUST_LOG` is unset or invalid.
    pub fn default_directive(&self) -> &'static str {
        match self {
            LogOutput::StdoutAndFile(_) => "info",
            LogOutput::Stderr => "warn",
        }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.default_directive()))
    }
}

/// Opens `path` for appending, creating missing parent directories.
fn open_log_file(path: &str) -> Result<File> {
    if let Some(dir) = Path::new(path).parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)?;
        }
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}

/// Installs the global subscriber. Load `.env` first so `RUST_LOG` is honoured.
///
/// # Errors
///
/// [`NewsbotError::Io`] if the log file cannot be opened, [`NewsbotError::Logging`] if a
/// global subscriber is already installed.
pub fn init_tracing(output: LogOutput<'_>) -> Result<()> {
    let filter = output.env_filter();
    let installed = match output {
        LogOutput::StdoutAndFile(path) => {
            let file = Arc::new(open_log_file(path)?);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout.and(file))
                .with_span_events(FmtSpan::CLOSE)
                .with_thread_ids(true);
            Registry::default().with(filter).with(layer).try_init()
        }
        LogOutput::Stderr => {
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false);
            Registry::default().with(filter).with(layer).try_init()
        }
    };

    installed.map_err(|e| NewsbotError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_levels() {
        assert_eq!(LogOutput::StdoutAndFile("x.log").default_directive(), "info");
        assert_eq!(LogOutput::Stderr.default_directive(), "warn");
    }

    #[test]
    fn test_open_log_file_creates_parent_dirs() {
        let dir = std::env::temp_dir().join(format!("newsbot-log-{}", std::process::id()));
        let path = dir.join("nested").join("newsbot.log");
        let path = path.to_str().unwrap();

        open_log_file(path).unwrap();

        assert!(Path::new(path).is_file());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    // The only test in this crate that installs a global subscriber.
    #[test]
    fn test_second_init_is_logging_error() {
        init_tracing(LogOutput::Stderr).unwrap();
        let err = init_tracing(LogOutput::Stderr).unwrap_err();
        assert!(matches!(err, NewsbotError::Logging(_)));
    }
}
