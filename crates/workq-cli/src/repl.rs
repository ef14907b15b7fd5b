//! Interactive REPL (Read-Eval-Print Loop) over a queue session.

use std::path::PathBuf;

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};
use tracing::debug;

use crate::command::{QueueCommand, COMMAND_HELP};
use crate::config::SessionConfig;
use crate::error::Result;
use crate::session::{Outcome, Session};

/// Tab completion for command verbs.
struct CommandCompleter;

impl CommandCompleter {
    /// Completes the first word of `line` up to `pos`.
    fn candidates(line: &str, pos: usize) -> Vec<Pair> {
        let prefix = &line[..pos];
        if prefix.contains(char::is_whitespace) {
            return vec![];
        }

        let (slash, word) = match prefix.strip_prefix('/') {
            Some(rest) => ("/", rest),
            None => ("", prefix),
        };
        let word = word.to_lowercase();

        COMMAND_HELP
            .iter()
            .map(|h| h.name)
            .filter(|name| name.starts_with(&word))
            .map(|name| Pair {
                display: name.to_string(),
                replacement: format!("{}{}", slash, name),
            })
            .collect()
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        Ok((0, Self::candidates(line, pos)))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Highlighter for CommandCompleter {}
impl Validator for CommandCompleter {}
impl Helper for CommandCompleter {}

pub struct Repl {
    editor: Editor<CommandCompleter, DefaultHistory>,
    session: Session,
    history_path: Option<PathBuf>,
}

impl Repl {
    /// Creates a new REPL instance.
    pub fn new(config: SessionConfig, history_path: Option<PathBuf>) -> Result<Self> {
        let rl_config = rustyline::Config::builder()
            .completion_type(rustyline::CompletionType::List)
            .build();
        let mut editor = Editor::with_config(rl_config)?;
        editor.set_helper(Some(CommandCompleter));

        if let Some(path) = &history_path {
            if path.exists() {
                if let Err(e) = editor.load_history(path) {
                    debug!(path = %path.display(), error = %e, "Could not load history");
                }
            }
        }

        Ok(Self {
            editor,
            session: Session::new(config),
            history_path,
        })
    }

    /// Runs the REPL loop.
    pub fn run(&mut self) -> Result<()> {
        println!("workq REPL v{}", env!("CARGO_PKG_VERSION"));
        println!(
            "Backend: {:?}. Type help for commands, quit to exit",
            self.session.config().backend
        );
        println!();

        loop {
            match self.editor.readline("workq> ") {
                Ok(line) => {
                    self.editor.add_history_entry(&line)?;

                    match self.handle_line(&line) {
                        Ok(true) => break, // Quit requested
                        Ok(false) => {}    // Continue
                        Err(e) => eprintln!("Error: {}", e),
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    // Don't exit on Ctrl+C, just clear line
                }
                Err(ReadlineError::Eof) => {
                    println!("^D");
                    break;
                }
                Err(err) => return Err(err.into()),
            }
        }

        // Save history
        if let Some(path) = &self.history_path {
            if let Err(e) = self.editor.save_history(path) {
                debug!(path = %path.display(), error = %e, "Could not save history");
            }
        }

        Ok(())
    }

    /// Handles one input line. Returns Ok(true) if should quit.
    fn handle_line(&mut self, line: &str) -> Result<bool> {
        let command = match QueueCommand::parse(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(false),
            Err(e) => {
                eprintln!("{} (type help for commands)", e);
                return Ok(false);
            }
        };
        debug!(?command, "Parsed command");

        let outcome = self.session.execute(command);
        if let Some(rendered) = self.session.render(&outcome)? {
            println!("{}", rendered);
        }

        Ok(outcome == Outcome::Quit)
    }
}
