//! A queue session: executes commands and renders their outcomes.

use serde::Serialize;
use tracing::{debug, trace};
use workq::{HeapQueue, OrderedQueue, PriorityFilter, SortedQueue};

use crate::command::{find_command_help, QueueCommand, COMMAND_HELP};
use crate::config::{Backend, OutputFormat, SessionConfig};
use crate::error::Result;

/// One listed entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListedEntry {
    /// Queued value.
    pub value: String,
    /// Priority it was enqueued with.
    pub priority: f64,
}

/// Result of executing one command.
///
/// An empty queue is a normal outcome: `Dequeued` and `Peeked` carry `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Outcome {
    /// A value was added; `size` is the queue length afterwards.
    Enqueued {
        value: String,
        priority: f64,
        size: usize,
    },
    /// The first value was removed, or `None` if the queue was empty.
    Dequeued {
        value: Option<String>,
        priority: Option<f64>,
    },
    /// The first value, left in place, or `None` if the queue is empty.
    Peeked {
        value: Option<String>,
        priority: Option<f64>,
    },
    /// Number of queued values.
    Size {
        size: usize,
    },
    /// Whether the queue is empty.
    Empty {
        empty: bool,
    },
    /// Matching entries in extraction order.
    Listed {
        entries: Vec<ListedEntry>,
    },
    /// Every value was removed; `removed` is how many.
    Cleared {
        removed: usize,
    },
    /// Help text, one line per entry.
    Help {
        lines: Vec<String>,
    },
    /// Processing should stop.
    Quit,
}

/// Owns a queue and applies commands to it.
pub struct Session {
    queue: Box<dyn OrderedQueue<String, f64>>,
    config: SessionConfig,
    executed: usize,
}

impl Session {
    /// Creates a session with an empty queue of the configured backing.
    pub fn new(config: SessionConfig) -> Self {
        let queue: Box<dyn OrderedQueue<String, f64>> = match config.backend {
            Backend::Heap => Box::new(HeapQueue::new()),
            Backend::Sorted => Box::new(SortedQueue::new()),
        };
        debug!(backend = ?config.backend, "Session created");

        Self {
            queue,
            config,
            executed: 0,
        }
    }

    /// Returns the session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns the underlying queue.
    pub fn queue(&self) -> &dyn OrderedQueue<String, f64> {
        self.queue.as_ref()
    }

    /// Returns the number of commands executed so far.
    pub fn executed(&self) -> usize {
        self.executed
    }

    /// Executes a command against the queue.
    pub fn execute(&mut self, command: QueueCommand) -> Outcome {
        debug!(?command, "Executing command");
        self.executed += 1;

        match command {
            QueueCommand::Enqueue { value, priority } => {
                self.queue.enqueue(value.clone(), priority);
                let size = self.queue.len();
                trace!(%value, priority, size, "Enqueued");
                Outcome::Enqueued {
                    value,
                    priority,
                    size,
                }
            }
            QueueCommand::Dequeue => match self.queue.dequeue_entry() {
                Some(entry) => {
                    trace!(sequence = entry.sequence(), "Dequeued");
                    let (value, priority, _) = entry.into_parts();
                    Outcome::Dequeued {
                        value: Some(value),
                        priority: Some(priority),
                    }
                }
                None => {
                    debug!("Dequeue on empty queue");
                    Outcome::Dequeued {
                        value: None,
                        priority: None,
                    }
                }
            },
            QueueCommand::Peek => {
                let head = self.queue.peek_entry();
                Outcome::Peeked {
                    value: head.map(|e| e.value().clone()),
                    priority: head.map(|e| e.priority()),
                }
            }
            QueueCommand::Size => Outcome::Size {
                size: self.queue.len(),
            },
            QueueCommand::Empty => Outcome::Empty {
                empty: self.queue.is_empty(),
            },
            QueueCommand::List { min, max } => {
                let filter = PriorityFilter { min, max };
                let entries = filter
                    .apply(self.queue.as_ref())
                    .into_iter()
                    .map(|e| ListedEntry {
                        value: e.value().clone(),
                        priority: e.priority(),
                    })
                    .collect();
                Outcome::Listed { entries }
            }
            QueueCommand::Clear => {
                let removed = self.queue.len();
                self.queue.clear();
                Outcome::Cleared { removed }
            }
            QueueCommand::Help(topic) => Outcome::Help {
                lines: help_lines(topic.as_deref()),
            },
            QueueCommand::Quit => Outcome::Quit,
        }
    }

    /// Renders an outcome in the configured format.
    ///
    /// Returns `None` for outcomes with nothing to show.
    pub fn render(&self, outcome: &Outcome) -> Result<Option<String>> {
        if *outcome == Outcome::Quit {
            return Ok(None);
        }

        match self.config.format {
            OutputFormat::Json => Ok(Some(serde_json::to_string(outcome)?)),
            OutputFormat::Text => Ok(Some(render_text(outcome))),
        }
    }
}

fn render_text(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Enqueued {
            value,
            priority,
            size,
        } => format!("enqueued {} (priority {}, size {})", value, priority, size),
        Outcome::Dequeued { value, .. } | Outcome::Peeked { value, .. } => value
            .clone()
            .unwrap_or_else(|| "(empty)".to_string()),
        Outcome::Size { size } => size.to_string(),
        Outcome::Empty { empty } => empty.to_string(),
        Outcome::Listed { entries } if entries.is_empty() => "(empty)".to_string(),
        Outcome::Listed { entries } => entries
            .iter()
            .map(|e| format!("{}\t{}", e.priority, e.value))
            .collect::<Vec<_>>()
            .join("\n"),
        Outcome::Cleared { removed } => format!("cleared {}", removed),
        Outcome::Help { lines } => lines.join("\n"),
        Outcome::Quit => String::new(),
    }
}

fn help_lines(topic: Option<&str>) -> Vec<String> {
    if let Some(topic) = topic {
        return match find_command_help(topic) {
            Some(help) => {
                let mut lines = vec![format!("{:<32} {}", help.usage, help.brief)];
                if !help.aliases.is_empty() {
                    lines.push(format!("aliases: {}", help.aliases.join(", ")));
                }
                lines
            }
            None => vec![format!("no help for '{}'", topic)],
        };
    }

    COMMAND_HELP
        .iter()
        .map(|help| format!("{:<32} {}", help.usage, help.brief))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enqueue(session: &mut Session, value: &str, priority: f64) {
        session.execute(QueueCommand::Enqueue {
            value: value.to_string(),
            priority,
        });
    }

    fn dequeued(session: &mut Session) -> Option<String> {
        match session.execute(QueueCommand::Dequeue) {
            Outcome::Dequeued { value, .. } => value,
            other => panic!("Expected Dequeued, got {:?}", other),
        }
    }

    #[test]
    fn test_enqueue_reports_size() {
        let mut session = Session::new(SessionConfig::default());
        let outcome = session.execute(QueueCommand::Enqueue {
            value: "A".to_string(),
            priority: 2.0,
        });
        assert_eq!(
            outcome,
            Outcome::Enqueued {
                value: "A".to_string(),
                priority: 2.0,
                size: 1
            }
        );
    }

    #[test]
    fn test_order_on_both_backends() {
        for backend in [Backend::Heap, Backend::Sorted] {
            let mut session = Session::new(SessionConfig::new().with_backend(backend));
            enqueue(&mut session, "X", 2.0);
            enqueue(&mut session, "Y", 1.0);
            enqueue(&mut session, "Z", 2.0);

            assert_eq!(dequeued(&mut session).as_deref(), Some("Y"));
            assert_eq!(dequeued(&mut session).as_deref(), Some("X"));
            assert_eq!(dequeued(&mut session).as_deref(), Some("Z"));
            assert_eq!(dequeued(&mut session), None);
        }
    }

    #[test]
    fn test_empty_queue_outcomes() {
        let mut session = Session::new(SessionConfig::default());
        assert_eq!(
            session.execute(QueueCommand::Peek),
            Outcome::Peeked {
                value: None,
                priority: None
            }
        );
        assert_eq!(session.execute(QueueCommand::Size), Outcome::Size { size: 0 });
        assert_eq!(
            session.execute(QueueCommand::Empty),
            Outcome::Empty { empty: true }
        );
    }

    #[test]
    fn test_list_with_range() {
        let mut session = Session::new(SessionConfig::new().with_backend(Backend::Sorted));
        enqueue(&mut session, "a", 1.0);
        enqueue(&mut session, "b", 2.0);
        enqueue(&mut session, "c", 3.0);

        let outcome = session.execute(QueueCommand::List {
            min: Some(2.0),
            max: None,
        });
        match outcome {
            Outcome::Listed { entries } => {
                let values: Vec<&str> = entries.iter().map(|e| e.value.as_str()).collect();
                assert_eq!(values, vec!["b", "c"]);
            }
            other => panic!("Expected Listed, got {:?}", other),
        }
        assert_eq!(session.queue().len(), 3);
    }

    #[test]
    fn test_clear() {
        let mut session = Session::new(SessionConfig::default());
        enqueue(&mut session, "a", 1.0);
        enqueue(&mut session, "b", 1.0);

        assert_eq!(
            session.execute(QueueCommand::Clear),
            Outcome::Cleared { removed: 2 }
        );
        assert!(session.queue().is_empty());
        assert_eq!(session.executed(), 3);
    }

    #[test]
    fn test_render_text() {
        let mut session = Session::new(SessionConfig::default());
        let outcome = session.execute(QueueCommand::Dequeue);
        assert_eq!(session.render(&outcome).unwrap().as_deref(), Some("(empty)"));

        enqueue(&mut session, "Task A", 2.0);
        let outcome = session.execute(QueueCommand::Peek);
        assert_eq!(session.render(&outcome).unwrap().as_deref(), Some("Task A"));

        assert_eq!(session.render(&Outcome::Quit).unwrap(), None);
    }

    #[test]
    fn test_render_json() {
        let mut session = Session::new(SessionConfig::new().with_format(OutputFormat::Json));
        let outcome = session.execute(QueueCommand::Dequeue);
        let rendered = session.render(&outcome).unwrap().unwrap();

        let json: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(json["op"], "dequeued");
        assert!(json["value"].is_null());
    }

    #[test]
    fn test_help_lines() {
        assert_eq!(help_lines(None).len(), COMMAND_HELP.len());
        let push = help_lines(Some("push"));
        assert!(push[0].starts_with("enqueue"));
        assert!(push[1].contains("push"));
        assert_eq!(help_lines(Some("nope")), vec!["no help for 'nope'".to_string()]);
    }
}
