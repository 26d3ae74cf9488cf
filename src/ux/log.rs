//! Diagnostic logging to standard error.

use super::err::{Error, Result};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{filter::Targets, layer::SubscriberExt, util::SubscriberInitExt, Layer};

/// The environment variable holding the log filter, in `tracing` target
/// syntax (for example `debug` or `litr::run=trace`).
pub const ENV_VAR: &str = "LITR_LOG";

/// Parses a log filter, falling back to `info` when `spec` is empty.
///
/// # Examples
///
/// ```
/// use litr::ux::log::targets;
/// assert!(targets("").is_ok());
/// assert!(targets("litr::run=trace,warn").is_ok());
/// assert!(targets("litr=loud").is_err());
/// ```
pub fn targets(spec: &str) -> Result<Targets> {
    if spec.trim().is_empty() {
        Ok(Targets::new().with_default(LevelFilter::INFO))
    } else {
        spec.parse().map_err(|e| Error::LogFilter(spec.to_owned(), e))
    }
}

/// Installs the global logger, filtered by [ENV_VAR].
pub fn init(colour: bool) -> Result<()> {
    let spec = std::env::var(ENV_VAR).unwrap_or_default();
    let layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(false)
        .with_ansi(colour)
        .with_writer(std::io::stderr)
        .with_filter(targets(&spec)?);
    tracing_subscriber::registry().with(layer).try_init()?;
    Ok(())
}
