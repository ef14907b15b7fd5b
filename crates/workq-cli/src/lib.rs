//! workq CLI library.
//!
//! This crate drives a `workq` queue from the command line: scripts read
//! from a file or stdin, and an interactive REPL. It is the collaborator
//! that enqueues and consumes work items; all logging and error reporting
//! live here, never in the queue itself.

pub mod cli;
pub mod command;
pub mod config;
pub mod error;
pub mod repl;
pub mod script;
pub mod session;

pub use error::{CliError, CommandError, Result};
