//! The interactive front end: command-line arguments, the prompt, the command
//! loop, and everything it prints.

pub mod args;
pub mod command;
pub mod err;
pub mod log;
pub mod out;
pub mod prompt;
pub mod repl;

pub use command::Command;
pub use err::{Error, Result};
pub use repl::Controller;
