//! Errors that can occur during configuration.
use std::path::PathBuf;
use thiserror::Error;

/// A configuration error.
#[derive(Debug, Error)]
pub enum Error {
    /// We couldn't read the config file at all.
    #[error("couldn't read config file {path}")]
    Read {
        /// The path we tried to read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// We couldn't deserialise the config from JSON.
    #[error("couldn't parse config")]
    Deserialize(#[source] serde_json::Error),

    /// We couldn't serialise the config to JSON.
    #[error("couldn't dump config")]
    Serialize(#[source] serde_json::Error),

    /// The command template had a problem.
    #[error("bad command template {template:?}")]
    Template {
        /// The offending template.
        template: String,
        /// What was wrong with it.
        source: TemplateError,
    },
}

/// Something wrong with a command template.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    /// The template has more than one place to put the selectors.
    #[error("more than one '%s' placeholder (write '%%' for a literal '%')")]
    ExtraPlaceholder,
    /// The template contains a `%`-directive other than `%s` or `%%`.
    #[error("unsupported directive '%{0}' (write '%%' for a literal '%')")]
    BadDirective(char),
    /// The template ends with a lone `%`.
    #[error("trailing '%' (write '%%' for a literal '%')")]
    TrailingPercent,
}

/// Results over [Error].
pub type Result<T> = std::result::Result<T, Error>;
