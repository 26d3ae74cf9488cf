//! Folding decoded events into the registry, with progress reporting.

use crate::{
    model::{Event, Registry, TestRecord},
    ux::out,
};
use std::{fmt::Display, io};

/// Per-run progress counters.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Progress {
    /// The number of tests the runner said it would run, if it said.
    pub expected: Option<u64>,
    /// The number of results seen so far in this run.
    pub current: u64,
}

impl Progress {
    /// Restarts the count for a session expecting `expected` tests.
    pub fn start(&mut self, expected: Option<u64>) {
        self.expected = expected;
        self.current = 0;
    }

    /// Counts one more result.
    pub fn advance(&mut self) {
        self.current = self.current.saturating_add(1);
    }
}

/// Progress displays as `current/expected`, or just `current` if the runner
/// didn't say how many tests to expect.
///
/// # Examples
///
/// ```
/// use litr::run::Progress;
/// assert_eq!(Progress { expected: Some(5), current: 2 }.to_string(), "2/5");
/// assert_eq!(Progress { expected: None, current: 2 }.to_string(), "2");
/// ```
impl Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.expected {
            Some(expected) => write!(f, "{}/{}", self.current, expected),
            None => write!(f, "{}", self.current),
        }
    }
}

/// Something that consumes decoded events.
pub trait Observer {
    /// Handles one event.
    ///
    /// Malformed events are not errors; errors only come from writing output.
    fn observe(&mut self, event: Event) -> io::Result<()>;
}

/// An event consumer that records results into a registry and writes a
/// progress line for each one.
///
/// The tracker holds the registry for as long as it lives, so there can only
/// be one active run recording into a registry at a time.
pub struct Tracker<'a, W> {
    registry: &'a mut Registry,
    progress: Progress,
    results: u64,
    w: W,
}

impl<'a, W: io::Write> Tracker<'a, W> {
    /// Constructs a tracker for a fresh run, recording into `registry` and
    /// writing progress to `w`.
    pub fn new(registry: &'a mut Registry, w: W) -> Self {
        Self {
            registry,
            progress: Progress::default(),
            results: 0,
            w,
        }
    }

    /// Gets the progress of the current run.
    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// Gets the number of results recorded over this tracker's lifetime, across
    /// any session restarts.
    pub fn results(&self) -> u64 {
        self.results
    }

    /// Consumes the tracker, giving back the writer.
    pub fn into_inner(self) -> W {
        self.w
    }

    fn record(&mut self, record: TestRecord) -> io::Result<()> {
        self.progress.advance();
        self.results = self.results.saturating_add(1);
        out::write_progress(&mut self.w, self.progress, &record)?;
        self.registry.upsert(record);
        Ok(())
    }
}

impl<'a, W: io::Write> Observer for Tracker<'a, W> {
    fn observe(&mut self, event: Event) -> io::Result<()> {
        match event {
            Event::SessionStart { test_number } => {
                tracing::debug!(?test_number, "session started");
                self.progress.start(test_number);
                Ok(())
            }
            Event::TestResult(record) => self.record(record),
            Event::Incomplete => {
                tracing::trace!("ignoring incomplete test result");
                Ok(())
            }
            Event::Unrecognized(value) => writeln!(self.w, "{}", value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn feed(registry: &mut Registry, lines: &[&str]) -> String {
        colored::control::set_override(false);
        let mut tracker = Tracker::new(registry, Vec::new());
        for line in lines {
            if let Some(event) = Event::decode(line.as_bytes()) {
                tracker.observe(event).unwrap();
            }
        }
        String::from_utf8(tracker.into_inner()).unwrap()
    }

    const T1: &str = r#"{"_type": "test_result", "id": "t1", "outcome": "passed"}"#;
    const T2: &str = r#"{"_type": "test_result", "id": "t2", "outcome": "failed"}"#;
    const T3: &str = r#"{"_type": "test_result", "id": "t3", "outcome": "skipped"}"#;

    #[test]
    fn test_progress_with_expected_count() {
        let mut registry = Registry::new();
        let out = feed(
            &mut registry,
            &[r#"{"_type": "session_start", "test_number": 5}"#, T1, T2, T3],
        );
        assert_eq!(out, "1/5 t1: passed\n2/5 t2: failed\n3/5 t3: skipped\n");
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_progress_without_session_start() {
        let mut registry = Registry::new();
        let out = feed(&mut registry, &[T1, T2, T3]);
        assert_eq!(out, "1 t1: passed\n2 t2: failed\n3 t3: skipped\n");
    }

    #[test]
    /// A second session start within one run restarts the count.
    fn test_session_restart_resets_index() {
        let mut registry = Registry::new();
        let out = feed(
            &mut registry,
            &[
                r#"{"_type": "session_start", "test_number": 2}"#,
                T1,
                r#"{"_type": "session_start", "test_number": null}"#,
                T2,
            ],
        );
        assert_eq!(out, "1/2 t1: passed\n1 t2: failed\n");
    }

    #[test]
    fn test_incomplete_results_change_nothing() {
        let mut registry = Registry::new();
        colored::control::set_override(false);
        let mut tracker = Tracker::new(&mut registry, Vec::new());
        tracker.observe(Event::decode(T1.as_bytes()).unwrap()).unwrap();

        for line in &[
            r#"{"_type": "test_result", "id": "t1"}"#,
            r#"{"_type": "test_result", "outcome": "failed"}"#,
        ] {
            tracker.observe(Event::decode(line.as_bytes()).unwrap()).unwrap();
        }

        assert_eq!(tracker.progress().current, 1);
        assert_eq!(tracker.results(), 1);
        let out = String::from_utf8(tracker.into_inner()).unwrap();
        assert_eq!(out, "1 t1: passed\n");
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("t1").map(|r| r.outcome.as_str()), Some("passed"));
    }

    #[test]
    fn test_unrecognized_passes_through_raw() {
        let mut registry = Registry::new();
        let out = feed(&mut registry, &[r#"{"_type": "warning", "message": "slow"}"#, "[1,2]"]);
        assert_eq!(out, "{\"_type\":\"warning\",\"message\":\"slow\"}\n[1,2]\n");
        assert!(registry.is_empty());
    }

    #[test]
    /// The registry keeps the last result for each test across runs.
    fn test_last_write_wins_across_runs() {
        let mut registry = Registry::new();
        feed(&mut registry, &[T1, T2]);
        feed(
            &mut registry,
            &[r#"{"_type": "test_result", "id": "t2", "outcome": "passed", "duration": 0.1}"#],
        );

        assert_eq!(registry.len(), 2);
        let t2 = registry.get("t2").unwrap();
        assert_eq!(t2.outcome.as_str(), "passed");
        assert!(t2.payload.contains_key("duration"));
    }
}
