//! workq CLI entry point.

use std::io;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use workq_cli::cli::{Cli, Commands};
use workq_cli::repl::Repl;
use workq_cli::script;
use workq_cli::session::Session;

fn main() {
    // Load .env.local if it exists (for WORKQ_BACKEND etc.)
    let _ = dotenvy::from_filename(".env.local");

    let cli = Cli::parse();

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let config = cli.session_config();
    info!(backend = ?config.backend, format = ?config.format, "Starting workq");

    let result = match &cli.command {
        Some(Commands::Run { script: path }) => {
            let mut session = Session::new(config);
            let stdout = io::stdout();
            let mut out = stdout.lock();
            script::run_path(&mut session, path.as_deref(), &mut out).map(|_| ())
        }
        Some(Commands::Repl) | None => {
            // No command = enter REPL
            Repl::new(config, Some(cli.history_path())).and_then(|mut repl| repl.run())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
