//! The command loop.

use super::{
    command::Command,
    err::Result,
    out,
    prompt::{Prompt, PROMPT},
};
use crate::{
    config::Config,
    model::{Outcome, Registry},
    run::Session,
};
use std::{io::Write, path::PathBuf};

/// Reads commands, runs tests, and reports on the registry.
///
/// The controller owns the registry for the life of the process, and hands it
/// to one run session at a time.
pub struct Controller {
    config: Config,
    repository: PathBuf,
    registry: Registry,
}

impl Controller {
    /// Constructs a controller running tests in `repository` according to
    /// `config`, with an empty registry.
    pub fn new(config: Config, repository: PathBuf) -> Self {
        Self {
            config,
            repository,
            registry: Registry::new(),
        }
    }

    /// Handles commands from `prompt` until it runs out of input.
    pub fn run<P: Prompt, W: Write>(&mut self, prompt: &mut P, mut w: W) -> Result<()> {
        while let Some(line) = prompt.read_line(PROMPT)? {
            self.handle_line(&line, &mut w)?;
        }
        Ok(())
    }

    /// Handles one line of input, then prints the status tally.
    ///
    /// Unrecognised input does nothing but print the tally.
    pub fn handle_line<W: Write>(&mut self, line: &str, mut w: W) -> Result<()> {
        match Command::parse(line) {
            Some(command) => self.dispatch(command, &mut w)?,
            None if !line.trim().is_empty() => tracing::trace!(line, "ignoring unknown command"),
            None => {}
        }
        out::write_tally(&mut w, &self.registry)?;
        w.flush()?;
        Ok(())
    }

    /// Gets the selectors that `command` would run, if it runs tests.
    ///
    /// An empty list means the runner's default set.
    pub fn selectors(&self, command: &Command) -> Option<Vec<String>> {
        match command {
            Command::Run => Some(self.config.default_selectors.clone()),
            Command::Failed => Some(self.registry.filter_by_outcome(&Outcome::failed())),
            Command::Print | Command::Details(_) => None,
        }
    }

    fn dispatch<W: Write>(&mut self, command: Command, w: &mut W) -> Result<()> {
        if let Some(selectors) = self.selectors(&command) {
            if command == Command::Failed && selectors.is_empty() {
                tracing::info!("no failed tests recorded; running the default set");
            }
            return self.launch(selectors, w);
        }

        match command {
            Command::Details(id) => match self.registry.get(&id) {
                Some(record) => out::write_details(w, record)?,
                None => writeln!(w, "no test recorded with id {:?}", id)?,
            },
            _ => out::write_listing(w, &self.registry)?,
        }
        Ok(())
    }

    fn launch<W: Write>(&mut self, selectors: Vec<String>, w: &mut W) -> Result<()> {
        let session = Session::new(&self.config.cmd, &self.repository, selectors);
        let summary = session.run(&mut self.registry, w)?;
        tracing::debug!(
            events = summary.events,
            results = summary.results,
            tests = self.registry.len(),
            "run finished"
        );
        Ok(())
    }
}
