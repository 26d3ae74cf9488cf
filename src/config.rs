//! Top-level configuration for the re-runner.
//!
//! The configuration lives in a JSON file inside the repository under test,
//! and at minimum supplies the shell command template used to launch the
//! test runner.

pub mod err;
pub mod io;
pub mod template;
pub mod top;

pub use err::{Error, Result};
pub use template::Template;
pub use top::Config;
