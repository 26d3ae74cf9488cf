//! Outcomes reported by the external test runner.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The outcome of a single test.
///
/// Outcomes are an open set: the test runner defines them, and we only give
/// names to the ones we treat specially.  Comparison is exact, so `failed`
/// and `FAILED` are different outcomes.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Outcome(String);

/// String representations for well-known outcomes.
pub mod string {
    /// String representation for passing tests.
    pub const PASSED: &str = "passed";
    /// String representation for failing tests.
    pub const FAILED: &str = "failed";
    /// String representation for skipped tests.
    pub const SKIPPED: &str = "skipped";
    /// String representation for tests that errored outside their body.
    pub const ERROR: &str = "error";
}

impl Outcome {
    /// Constructs an outcome from its tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The outcome that the "failed" command re-runs.
    ///
    /// # Examples
    ///
    /// ```
    /// use litr::model::Outcome;
    /// assert_eq!(Outcome::failed().as_str(), "failed");
    /// ```
    #[must_use]
    pub fn failed() -> Self {
        Self::new(string::FAILED)
    }

    /// Gets the tag of this outcome.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// We display outcomes as their raw tag.
///
/// # Examples
///
/// ```
/// use litr::model::Outcome;
/// assert_eq!(Outcome::new("xfailed").to_string(), "xfailed");
/// ```
impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Outcome {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Outcome {
    fn from(s: String) -> Self {
        Self(s)
    }
}
