//! `clap` integration for the front end.

use super::err::Result;
use crate::config::Config;
use std::path::{Path, PathBuf};

/// Clap names for various arguments.
pub mod arg {
    /// Name of the repository argument.
    pub const REPOSITORY: &str = "REPOSITORY";
    /// Name of the config argument.
    pub const CONFIG: &str = "config";
    /// Name of the dump-config argument.
    pub const DUMP_CONFIG: &str = "dump-config";
    /// Name of the no-colour argument.
    pub const NO_COLOUR: &str = "no-colour";
}

/// A parsed argument structure.
pub struct Args {
    /// The repository under test, used as the runner's working directory.
    pub repository: PathBuf,
    /// The config file, if overridden on the command line.
    pub config: Option<PathBuf>,
    /// Whether to dump the config instead of starting the prompt.
    pub dump_config: bool,
    /// Whether to colourise output.
    pub colour: bool,
}

impl Args {
    /// Parses an argument set from a clap match dictionary.
    ///
    /// The repository path is made absolute, so that it stays meaningful
    /// if the current directory changes.
    pub fn parse(matches: &clap::ArgMatches) -> std::io::Result<Self> {
        let repository = matches.value_of(arg::REPOSITORY).unwrap_or(".");
        Ok(Self {
            repository: std::path::absolute(Path::new(repository))?,
            config: matches.value_of(arg::CONFIG).map(PathBuf::from),
            dump_config: matches.is_present(arg::DUMP_CONFIG),
            colour: !matches.is_present(arg::NO_COLOUR),
        })
    }

    /// Loads the config file named on the command line, or the default file
    /// inside the repository if none was named.
    pub fn load_config(&self) -> Result<Config> {
        let config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::load_for_repo(&self.repository)?,
        };
        Ok(config)
    }
}

/// Builds the clap application for the `litr` binary.
pub fn app<'a, 'b>() -> clap::App<'a, 'b> {
    clap::App::new("litr")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Interactive test re-runner")
        .arg(
            clap::Arg::with_name(arg::CONFIG)
                .help("Config file to use instead of REPOSITORY/.litr.json")
                .short("c")
                .long(arg::CONFIG)
                .value_name("FILE"),
        )
        .arg(
            clap::Arg::with_name(arg::DUMP_CONFIG)
                .help("Dump config instead of testing")
                .long(arg::DUMP_CONFIG),
        )
        .arg(
            clap::Arg::with_name(arg::NO_COLOUR)
                .help("Don't colourise output")
                .long(arg::NO_COLOUR),
        )
        .arg(
            clap::Arg::with_name(arg::REPOSITORY)
                .help("The repository whose tests to run")
                .required(true)
                .index(1),
        )
}
