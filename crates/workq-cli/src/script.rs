//! Script runner: applies a file or stream of commands to a session.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use tracing::{info, warn};

use crate::command::QueueCommand;
use crate::error::{CliError, Result};
use crate::session::{Outcome, Session};

/// Summary of a finished script run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Commands executed (blank lines and comments excluded).
    pub executed: usize,
    /// Entries left in the queue afterwards.
    pub remaining: usize,
    /// True if the script ended with `quit`.
    pub quit: bool,
}

/// Runs the script at `path`, or stdin when `path` is `None` or `-`.
pub fn run_path<W: Write + ?Sized>(
    session: &mut Session,
    path: Option<&Path>,
    out: &mut W,
) -> Result<RunSummary> {
    match path {
        Some(path) if path != Path::new("-") => {
            info!(path = %path.display(), "Running script");
            let file = File::open(path)?;
            run_script(session, BufReader::new(file), out)
        }
        _ => {
            info!("Running script from stdin");
            let stdin = io::stdin();
            run_script(session, stdin.lock(), out)
        }
    }
}

/// Runs every command read from `reader`, writing rendered outcomes to `out`.
///
/// Stops at the first malformed line, reporting its 1-based line number.
pub fn run_script<R: BufRead, W: Write + ?Sized>(
    session: &mut Session,
    reader: R,
    out: &mut W,
) -> Result<RunSummary> {
    let mut executed = 0;
    let mut quit = false;

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| CliError::Read {
            line: index + 1,
            source,
        })?;
        let command = match QueueCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(source) => {
                warn!(line = index + 1, error = %source, "Rejected script line");
                return Err(CliError::Command {
                    line: index + 1,
                    source,
                });
            }
        };

        let outcome = session.execute(command);
        executed += 1;

        if let Some(rendered) = session.render(&outcome)? {
            writeln!(out, "{}", rendered)?;
        }

        if outcome == Outcome::Quit {
            quit = true;
            break;
        }
    }

    let summary = RunSummary {
        executed,
        remaining: session.queue().len(),
        quit,
    };
    info!(
        executed = summary.executed,
        remaining = summary.remaining,
        "Script finished"
    );

    Ok(summary)
}
