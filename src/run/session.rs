//! One invocation of the external test runner.

use super::{
    err::{Error, Result},
    reader::EventStream,
    tracker::{Observer, Tracker},
};
use crate::{config::Template, model::Registry};
use std::{
    io::{self, BufRead, BufReader, Write},
    path::Path,
    process::{Child, ChildStderr, Command, Stdio},
    sync::mpsc,
    thread,
};

/// What happened during a session.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// The number of JSON events the runner emitted.
    pub events: u64,
    /// The number of test results recorded into the registry.
    pub results: u64,
}

/// A single run of the test command over a list of selectors.
pub struct Session<'a> {
    template: &'a Template,
    dir: &'a Path,
    selectors: Vec<String>,
}

impl<'a> Session<'a> {
    /// Constructs a session that runs `template`, filled with `selectors`,
    /// inside `dir`.
    pub fn new(template: &'a Template, dir: &'a Path, selectors: Vec<String>) -> Self {
        Self {
            template,
            dir,
            selectors,
        }
    }

    /// Gets the selectors this session will run.
    pub fn selectors(&self) -> &[String] {
        &self.selectors
    }

    /// Gets the shell command line this session will run.
    pub fn command_line(&self) -> String {
        self.template.fill(&self.selectors)
    }

    /// Runs the session to the end of the runner's standard output, recording
    /// results into `registry` and writing progress to `w`.
    ///
    /// This blocks until the runner closes its standard output.  The runner's
    /// exit status is not inspected: a session is done when its output ends.
    pub fn run<W: Write>(&self, registry: &mut Registry, mut w: W) -> Result<Summary> {
        let cmd = self.command_line();
        tracing::debug!(%cmd, dir = %self.dir.display(), "launching test command");

        let mut child = shell(&cmd)
            .current_dir(self.dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| Error::Spawn {
                cmd: cmd.clone(),
                source,
            })?;
        let (stdout, stderr) = match (child.stdout.take(), child.stderr.take()) {
            (Some(stdout), Some(stderr)) => (stdout, stderr),
            (stdout, _) => {
                abandon(&mut child);
                return Err(Error::NoPipe(if stdout.is_none() { "stdout" } else { "stderr" }));
            }
        };
        reap_in_background(child, stderr)?;

        let mut tracker = Tracker::new(registry, &mut w);
        let mut summary = Summary::default();
        for event in EventStream::new(BufReader::new(stdout)) {
            tracker.observe(event?)?;
            summary.events += 1;
        }
        summary.results = tracker.results();

        writeln!(w, "Done")?;
        w.flush()?;
        tracing::debug!(events = summary.events, results = summary.results, "session finished");
        Ok(summary)
    }
}

/// Builds a command that runs `cmd` through the platform shell.
fn shell(cmd: &str) -> Command {
    let mut command = if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C");
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c");
        c
    };
    command.arg(cmd);
    command
}

/// Drains the child's standard error on a background thread, then reaps it.
///
/// The runner never blocks on a full error pipe, and the session doesn't wait
/// on either the pipe or the exit.  If the thread can't be started, the child
/// is killed and reaped here instead.
fn reap_in_background(child: Child, stderr: ChildStderr) -> io::Result<()> {
    let (tx, rx) = mpsc::channel::<Child>();
    let spawned = thread::Builder::new()
        .name("runner-stderr".to_owned())
        .spawn(move || {
            drain(stderr);
            let Ok(mut child) = rx.recv() else { return };
            match child.wait() {
                Ok(status) => tracing::debug!(%status, "test command exited"),
                Err(error) => tracing::debug!(%error, "couldn't wait for test command"),
            }
        });
    match spawned {
        Ok(_) => {
            if let Err(mpsc::SendError(mut child)) = tx.send(child) {
                abandon(&mut child);
            }
            Ok(())
        }
        Err(error) => {
            let mut child = child;
            abandon(&mut child);
            Err(error)
        }
    }
}

/// Kills and reaps a child the session can no longer drive.
fn abandon(child: &mut Child) {
    if let Err(error) = child.kill() {
        tracing::debug!(%error, "couldn't kill test command");
    }
    match child.wait() {
        Ok(status) => tracing::debug!(%status, "abandoned test command exited"),
        Err(error) => tracing::debug!(%error, "couldn't wait for abandoned test command"),
    }
}

fn drain(stderr: ChildStderr) {
    let mut reader = BufReader::new(stderr);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => return,
            Ok(_) => tracing::debug!(
                line = %String::from_utf8_lossy(&buf).trim_end(),
                "test command stderr"
            ),
            Err(error) => {
                tracing::debug!(%error, "stopped reading test command stderr");
                return;
            }
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn template(s: &str) -> Template {
        s.parse().unwrap()
    }

    fn run(cmd: &str, selectors: &[&str]) -> (Registry, Summary, String) {
        colored::control::set_override(false);
        let dir = tempfile::tempdir().unwrap();
        let template = template(cmd);
        let session = Session::new(
            &template,
            dir.path(),
            selectors.iter().map(|s| s.to_string()).collect(),
        );
        let mut registry = Registry::new();
        let mut out = Vec::new();
        let summary = session.run(&mut registry, &mut out).unwrap();
        (registry, summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_abandon_kills_and_reaps() {
        let mut child = shell("sleep 30").stdin(Stdio::null()).spawn().unwrap();
        abandon(&mut child);
        assert!(child.try_wait().unwrap().is_some());
    }

    #[test]
    fn test_command_line() {
        let template = template("pytest %s -p litr");
        let session = Session::new(
            &template,
            Path::new("."),
            vec!["a b".to_owned(), "c".to_owned()],
        );
        assert_eq!(session.command_line(), "pytest 'a b' 'c' -p litr");
        assert_eq!(session.selectors(), ["a b", "c"]);

        let session = Session::new(&template, Path::new("."), vec![]);
        assert_eq!(session.command_line(), "pytest  -p litr");
    }

    #[test]
    fn test_runs_and_records() {
        let (registry, summary, out) = run(
            r#"printf '%%s\n' 'collecting' '{"_type":"session_start","test_number":2}' '{"_type":"test_result","id":"t1","outcome":"passed"}' '{"_type":"test_result","id":"t2","outcome":"failed"}' %s"#,
            &[],
        );

        assert_eq!(out, "1/2 t1: passed\n2/2 t2: failed\nDone\n");
        assert_eq!(summary, Summary { events: 3, results: 2 });
        assert_eq!(registry.filter_by_outcome(&crate::model::Outcome::failed()), vec!["t2"]);
    }

    #[test]
    /// Selectors reach the runner as one shell word each.
    fn test_selectors_are_words() {
        let (registry, _, _) = run(
            r#"for t in %s; do printf '{"_type":"test_result","id":"%%s","outcome":"passed"}\n' "$t"; done"#,
            &["alpha", "beta"],
        );
        let ids: Vec<&str> = registry.list().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["alpha", "beta"]);
    }

    #[test]
    /// The session runs in the given directory.
    fn test_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("events.jsonl"),
            "{\"_type\":\"test_result\",\"id\":\"from-file\",\"outcome\":\"passed\"}\n",
        )
        .unwrap();

        let template = template("cat events.jsonl %s");
        let session = Session::new(&template, dir.path(), vec![]);
        let mut registry = Registry::new();
        session.run(&mut registry, io::sink()).unwrap();
        assert!(registry.get("from-file").is_some());
    }

    #[test]
    /// Failing commands and chatty stderr look like any other finished run.
    fn test_exit_status_and_stderr_ignored() {
        let (registry, summary, out) = run(
            r#"echo noise >&2; printf '%%s\n' '{"_type":"test_result","id":"t","outcome":"error"}'; exit 3 %s"#,
            &[],
        );
        assert_eq!(out, "1 t: error\nDone\n");
        assert_eq!(summary.results, 1);
        assert_eq!(registry.len(), 1);
    }
}
