//! Errors that can occur while running the test runner.
use thiserror::Error;

/// A run error.
#[derive(Debug, Error)]
pub enum Error {
    /// We couldn't launch the shell that runs the test command.
    #[error("couldn't launch test command {cmd:?}")]
    Spawn {
        /// The filled-in command line.
        cmd: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The child's output pipe wasn't available.
    #[error("test command has no {0} pipe")]
    NoPipe(&'static str),

    /// A general I/O error, either reading the runner or writing progress.
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

/// Shorthand for a result over [Error]s.
pub type Result<T> = std::result::Result<T, Error>;
