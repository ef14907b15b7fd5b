//! Command-line interface definition using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{Backend, OutputFormat, SessionConfig};

/// workq - drive a priority-ordered work queue from scripts or a REPL
#[derive(Parser, Debug)]
#[command(name = "workq")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Queue backing
    #[arg(short, long, value_enum, env = "WORKQ_BACKEND", default_value_t = Backend::Heap)]
    pub backend: Backend,

    /// Output format (text, json)
    #[arg(short, long, value_enum, env = "WORKQ_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Path to the REPL history file
    #[arg(long, env = "WORKQ_HISTORY")]
    pub history: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a script of queue commands
    Run {
        /// Script file (reads stdin when omitted or "-")
        script: Option<PathBuf>,
    },

    /// Start interactive REPL mode
    Repl,
}

impl Cli {
    /// Returns the session configuration selected by the flags.
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig::new()
            .with_backend(self.backend)
            .with_format(self.format)
    }

    /// Returns the history file path, using default if not specified.
    pub fn history_path(&self) -> PathBuf {
        self.history.clone().unwrap_or_else(|| {
            dirs::home_dir()
                .map(|h| h.join(".workq_history"))
                .unwrap_or_else(|| PathBuf::from(".workq_history"))
        })
    }

    /// Returns the log level based on verbosity.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
