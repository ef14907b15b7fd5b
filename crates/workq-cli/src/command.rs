//! Line grammar shared by scripts and the REPL.

use crate::error::CommandError;

/// Help information for a command.
pub struct CommandHelp {
    /// Command name (e.g., "enqueue").
    pub name: &'static str,
    /// Command aliases (e.g., ["push"]).
    pub aliases: &'static [&'static str],
    /// Usage syntax.
    pub usage: &'static str,
    /// Brief one-line description.
    pub brief: &'static str,
}

/// Static help entries for all commands.
pub static COMMAND_HELP: &[CommandHelp] = &[
    CommandHelp {
        name: "enqueue",
        aliases: &["enq", "push"],
        usage: "enqueue <value...> <priority>",
        brief: "Add a value; lower priority is served first, ties in arrival order",
    },
    CommandHelp {
        name: "dequeue",
        aliases: &["deq", "pop"],
        usage: "dequeue",
        brief: "Remove and show the next value",
    },
    CommandHelp {
        name: "peek",
        aliases: &["front"],
        usage: "peek",
        brief: "Show the next value without removing it",
    },
    CommandHelp {
        name: "size",
        aliases: &["len"],
        usage: "size",
        brief: "Show the number of queued values",
    },
    CommandHelp {
        name: "empty",
        aliases: &["is-empty"],
        usage: "empty",
        brief: "Show whether the queue is empty",
    },
    CommandHelp {
        name: "list",
        aliases: &["ls"],
        usage: "list [min] [max]",
        brief: "Show queued values in extraction order, optionally by priority range",
    },
    CommandHelp {
        name: "clear",
        aliases: &[],
        usage: "clear",
        brief: "Remove every queued value",
    },
    CommandHelp {
        name: "help",
        aliases: &["h", "?"],
        usage: "help [command]",
        brief: "Show help",
    },
    CommandHelp {
        name: "quit",
        aliases: &["q", "exit"],
        usage: "quit",
        brief: "Stop processing",
    },
];

/// Finds the help entry for a command name or alias.
pub fn find_command_help(name: &str) -> Option<&'static CommandHelp> {
    let name = name.trim_start_matches('/').to_lowercase();
    COMMAND_HELP
        .iter()
        .find(|h| h.name == name || h.aliases.iter().any(|a| *a == name))
}

/// A queue command parsed from one input line.
#[derive(Debug, Clone, PartialEq)]
pub enum QueueCommand {
    /// Add a value with a priority
    Enqueue { value: String, priority: f64 },
    /// Remove the next value
    Dequeue,
    /// Show the next value
    Peek,
    /// Show the queue size
    Size,
    /// Show whether the queue is empty
    Empty,
    /// List values, optionally within an inclusive priority range
    List { min: Option<f64>, max: Option<f64> },
    /// Remove every value
    Clear,
    /// Show help (optionally for a specific command)
    Help(Option<String>),
    /// Stop processing
    Quit,
}

impl QueueCommand {
    /// Parses a line into a command.
    ///
    /// Returns `Ok(None)` for blank lines and `#` comments. A leading `/` is
    /// accepted so REPL-style input works in scripts too.
    pub fn parse(input: &str) -> Result<Option<Self>, CommandError> {
        let input = input.trim();

        if input.is_empty() || input.starts_with('#') {
            return Ok(None);
        }

        let input = input.strip_prefix('/').unwrap_or(input);
        let mut parts = input.split_whitespace();
        let verb = match parts.next() {
            Some(verb) => verb.to_lowercase(),
            None => return Ok(None),
        };
        let args: Vec<&str> = parts.collect();

        let command = match verb.as_str() {
            "enqueue" | "enq" | "push" => Self::parse_enqueue(&args)?,
            "dequeue" | "deq" | "pop" => QueueCommand::Dequeue,
            "peek" | "front" => QueueCommand::Peek,
            "size" | "len" => QueueCommand::Size,
            "empty" | "is-empty" => QueueCommand::Empty,
            "list" | "ls" => QueueCommand::List {
                min: args.first().map(|s| parse_priority(s)).transpose()?,
                max: args.get(1).map(|s| parse_priority(s)).transpose()?,
            },
            "clear" => QueueCommand::Clear,
            "help" | "h" | "?" => QueueCommand::Help(args.first().map(|s| s.to_string())),
            "quit" | "q" | "exit" => QueueCommand::Quit,
            _ => return Err(CommandError::Unknown(verb)),
        };

        Ok(Some(command))
    }

    /// The last argument is the priority; everything before it is the value.
    fn parse_enqueue(args: &[&str]) -> Result<Self, CommandError> {
        let (priority, value) = match args.split_last() {
            Some((priority, value)) if !value.is_empty() => (priority, value),
            Some(_) => {
                return Err(CommandError::MissingArgument {
                    command: "enqueue",
                    argument: "a priority",
                })
            }
            None => {
                return Err(CommandError::MissingArgument {
                    command: "enqueue",
                    argument: "a value and a priority",
                })
            }
        };

        Ok(QueueCommand::Enqueue {
            value: value.join(" "),
            priority: parse_priority(priority)?,
        })
    }
}

/// Priorities must be finite; JSON output has no encoding for NaN or infinity.
fn parse_priority(raw: &str) -> Result<f64, CommandError> {
    match raw.parse::<f64>() {
        Ok(p) if p.is_finite() => Ok(p),
        _ => Err(CommandError::InvalidPriority(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(input: &str) -> QueueCommand {
        QueueCommand::parse(input).unwrap().unwrap()
    }

    #[test]
    fn test_parse_enqueue() {
        assert_eq!(
            parse("enqueue A 2"),
            QueueCommand::Enqueue {
                value: "A".to_string(),
                priority: 2.0
            }
        );
    }

    #[test]
    fn test_parse_enqueue_multi_word_value() {
        assert_eq!(
            parse("push Task A -1.5"),
            QueueCommand::Enqueue {
                value: "Task A".to_string(),
                priority: -1.5
            }
        );
    }

    #[test]
    fn test_parse_slash_and_case() {
        assert_eq!(parse("/DEQUEUE"), QueueCommand::Dequeue);
        assert_eq!(parse("/Peek"), QueueCommand::Peek);
        assert_eq!(parse("pop"), QueueCommand::Dequeue);
    }

    #[test]
    fn test_parse_queries() {
        assert_eq!(parse("size"), QueueCommand::Size);
        assert_eq!(parse("len"), QueueCommand::Size);
        assert_eq!(parse("empty"), QueueCommand::Empty);
        assert_eq!(parse("clear"), QueueCommand::Clear);
        assert_eq!(parse("q"), QueueCommand::Quit);
    }

    #[test]
    fn test_parse_list_range() {
        assert_eq!(parse("list"), QueueCommand::List { min: None, max: None });
        assert_eq!(
            parse("ls 1 3"),
            QueueCommand::List {
                min: Some(1.0),
                max: Some(3.0)
            }
        );
    }

    #[test]
    fn test_parse_help() {
        assert_eq!(parse("help"), QueueCommand::Help(None));
        assert_eq!(parse("? enqueue"), QueueCommand::Help(Some("enqueue".to_string())));
    }

    #[test]
    fn test_parse_blank_and_comment() {
        assert_eq!(QueueCommand::parse("   "), Ok(None));
        assert_eq!(QueueCommand::parse("# setup"), Ok(None));
        assert_eq!(QueueCommand::parse("/"), Ok(None));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            QueueCommand::parse("frobnicate"),
            Err(CommandError::Unknown("frobnicate".to_string()))
        );
    }

    #[test]
    fn test_parse_enqueue_missing_arguments() {
        assert!(matches!(
            QueueCommand::parse("enqueue"),
            Err(CommandError::MissingArgument { .. })
        ));
        assert!(matches!(
            QueueCommand::parse("enqueue 3"),
            Err(CommandError::MissingArgument { argument: "a priority", .. })
        ));
    }

    #[test]
    fn test_parse_invalid_priority() {
        assert_eq!(
            QueueCommand::parse("enqueue A high"),
            Err(CommandError::InvalidPriority("high".to_string()))
        );
        assert_eq!(
            QueueCommand::parse("enqueue A NaN"),
            Err(CommandError::InvalidPriority("NaN".to_string()))
        );
    }

    #[test]
    fn test_parse_non_finite_priority() {
        for raw in ["inf", "-inf", "infinity", "1e400", "-1e400"] {
            assert_eq!(
                QueueCommand::parse(&format!("enqueue A {}", raw)),
                Err(CommandError::InvalidPriority(raw.to_string()))
            );
        }
        assert_eq!(
            QueueCommand::parse("list -inf 3"),
            Err(CommandError::InvalidPriority("-inf".to_string()))
        );
        assert_eq!(
            parse("enqueue A 1e300"),
            QueueCommand::Enqueue {
                value: "A".to_string(),
                priority: 1e300
            }
        );
    }

    #[test]
    fn test_find_command_help() {
        assert_eq!(find_command_help("push").map(|h| h.name), Some("enqueue"));
        assert_eq!(find_command_help("/LS").map(|h| h.name), Some("list"));
        assert!(find_command_help("nope").is_none());
    }
}
