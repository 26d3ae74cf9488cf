//! litr: an interactive re-runner for test suites.
//!
//! litr launches a test command that reports progress as newline-delimited
//! JSON, keeps the latest outcome of every test it has seen, and lets the
//! operator re-run everything or only what last failed.

pub mod config;
pub mod model;
pub mod run;
pub mod ux;
