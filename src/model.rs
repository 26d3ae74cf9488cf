//! Various model types used within the re-runner.

pub mod event;
pub mod outcome;
pub mod record;
pub mod registry;

pub use event::Event;
pub use outcome::Outcome;
pub use record::TestRecord;
pub use registry::Registry;
