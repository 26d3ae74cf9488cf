//! Errors that can occur in the front end.
use crate::{config, run};
use thiserror::Error;

/// A front-end error.
#[derive(Debug, Error)]
pub enum Error {
    /// The configuration couldn't be loaded.
    #[error("config error")]
    Config(#[from] config::Error),

    /// A test run failed to start or to read its output.
    #[error("test run error")]
    Run(#[from] run::Error),

    /// The line editor failed.
    #[error("prompt error")]
    Prompt(#[from] rustyline::error::ReadlineError),

    /// The log filter in the environment couldn't be parsed.
    #[error("couldn't parse log filter {0:?}")]
    LogFilter(String, #[source] tracing_subscriber::filter::ParseError),

    /// A logger was already installed.
    #[error("couldn't install logger")]
    LogInit(#[from] tracing_subscriber::util::TryInitError),

    /// A general I/O error.
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

/// Results over [Error].
pub type Result<T> = std::result::Result<T, Error>;
