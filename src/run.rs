//! Running the external test runner and folding its output into the registry.
//!
//! A [Session] launches one runner process and drives an
//! [EventStream](reader::EventStream) over its standard output, feeding each
//! decoded event through a [Tracker](tracker::Tracker) into the registry as it
//! arrives.

pub mod err;
pub mod reader;
pub mod session;
pub mod tracker;

pub use err::{Error, Result};
pub use session::{Session, Summary};
pub use tracker::{Progress, Tracker};
