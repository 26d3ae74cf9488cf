//! Rendering of progress, listings, tallies and test details.

use crate::{
    model::{outcome, Outcome, Registry, TestRecord},
    run::Progress,
};
use colored::Colorize;
use serde_json::Value;
use std::io::{self, Write};

/// Colours an outcome tag by how good it is.
pub fn paint(outcome: &Outcome) -> colored::ColoredString {
    let tag = outcome.as_str();
    match tag {
        outcome::string::PASSED => tag.green(),
        outcome::string::FAILED | outcome::string::ERROR => tag.red(),
        outcome::string::SKIPPED => tag.yellow(),
        _ => tag.normal(),
    }
}

/// Writes the progress line for a freshly recorded result.
pub fn write_progress<W: Write>(w: &mut W, progress: Progress, record: &TestRecord) -> io::Result<()> {
    writeln!(w, "{} {}: {}", progress, record.id, paint(&record.outcome))
}

/// Writes every recorded test with its outcome, one per line.
pub fn write_listing<W: Write>(w: &mut W, registry: &Registry) -> io::Result<()> {
    writeln!(w, "Tests:")?;
    for (id, outcome) in registry.list() {
        writeln!(w, "{}: {}", id, paint(outcome))?;
    }
    writeln!(w)
}

/// Writes an aligned tally of how many tests sit at each outcome.
pub fn write_tally<W: Write>(w: &mut W, registry: &Registry) -> io::Result<()> {
    writeln!(w, "Status:")?;
    let mut tw = tabwriter::TabWriter::new(&mut *w).padding(1);
    for (outcome, count) in registry.count_by_outcome() {
        writeln!(tw, "{}:\t{}", paint(&outcome), count)?;
    }
    tw.flush()?;
    drop(tw);
    writeln!(w)
}

/// Writes everything recorded about one test.
///
/// String fields are written raw, so multi-line output such as tracebacks
/// keeps its shape; other fields are written as JSON.
pub fn write_details<W: Write>(w: &mut W, record: &TestRecord) -> io::Result<()> {
    writeln!(w, "{}: {}", record.id, paint(&record.outcome))?;
    for (key, value) in record.details() {
        match value {
            Value::String(s) if s.contains('\n') => {
                writeln!(w, "{}:", key.bold())?;
                for line in s.lines() {
                    writeln!(w, "    {}", line)?;
                }
            }
            Value::String(s) => writeln!(w, "{}: {}", key.bold(), s)?,
            other => writeln!(w, "{}: {}", key.bold(), other)?,
        }
    }
    Ok(())
}
