//! Error types for the workq CLI.

use thiserror::Error;

/// Errors produced while parsing a single command line.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CommandError {
    /// Verb not recognised.
    #[error("unknown command: {0}")]
    Unknown(String),

    /// Required argument missing.
    #[error("{command} requires {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    /// Priority could not be parsed as a number.
    #[error("invalid priority: {0}")]
    InvalidPriority(String),
}

/// Errors that can occur while running the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// A script line failed to parse.
    #[error("line {line}: {source}")]
    Command {
        line: usize,
        #[source]
        source: CommandError,
    },

    /// A script line could not be read (e.g. invalid UTF-8).
    #[error("line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    /// I/O error reading a script or writing output.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Line editor error.
    #[error("readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    /// JSON rendering error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
