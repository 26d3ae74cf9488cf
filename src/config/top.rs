use super::{err, io, template::Template};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// The top-level config structure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// The shell command used to launch the test runner.
    pub cmd: Template,
    /// The selectors passed when running the whole suite.
    ///
    /// There is no built-in full-suite marker: the default is empty, which
    /// fills the placeholder with nothing and leaves the choice of tests to
    /// the runner.  Until something fails, "run" and "failed" therefore run
    /// the same command.  Set this to name the suite explicitly (for example
    /// `["tests/"]`).
    #[serde(default)]
    pub default_selectors: Vec<String>,
}

impl Config {
    /// Loads the config for the repository at `repo`.
    pub fn load_for_repo(repo: &Path) -> err::Result<Self> {
        Self::load(&io::default_file(repo))
    }

    /// Loads a config from the file at `path`.
    pub fn load(path: &Path) -> err::Result<Self> {
        let s = fs::read_to_string(path).map_err(|source| err::Error::Read {
            path: path.to_owned(),
            source,
        })?;
        let config = Self::from_str(&s)?;
        tracing::debug!(path = %path.display(), cmd = config.cmd.as_str(), "loaded config");
        Ok(config)
    }

    /// Tries to dump a config to a string.
    pub fn to_string(&self) -> err::Result<String> {
        serde_json::to_string_pretty(self).map_err(err::Error::Serialize)
    }

    /// Tries to load a config from a string.
    ///
    /// # Examples
    ///
    /// ```
    /// use litr::config::Config;
    ///
    /// let config = Config::from_str(r#"{"cmd": "pytest %s"}"#).unwrap();
    /// assert_eq!(config.cmd.fill(&["t1"]), "pytest 't1'");
    /// assert!(config.default_selectors.is_empty());
    ///
    /// assert!(Config::from_str(r#"{"cmd": "pytest %s %s"}"#).is_err());
    /// assert!(Config::from_str(r#"{}"#).is_err());
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> err::Result<Self> {
        serde_json::from_str(s).map_err(err::Error::Deserialize)
    }
}
