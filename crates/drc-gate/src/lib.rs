//! Scriptable gate over board design-rule check reports
//!
//! Reads a report produced by the verification engine, evaluates it at the
//! configured severity threshold and maps the verdict to an exit status.

#![allow(clippy::uninlined_format_args)]

pub mod cli;
pub mod runner;

pub use cli::{Args, OutputFormat};
pub use runner::{exit_code, Gate, GateOutput};
