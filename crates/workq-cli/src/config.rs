//! Session configuration.

use clap::ValueEnum;

/// Which queue backing a session uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Backend {
    /// Binary heap: O(log n) enqueue and dequeue.
    #[default]
    Heap,
    /// Sorted deque: O(n) enqueue, O(1) dequeue.
    Sorted,
}

/// How outcomes are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Configuration for a queue session.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Queue backing.
    pub backend: Backend,
    /// Output rendering.
    pub format: OutputFormat,
}

impl SessionConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the queue backing.
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// Sets the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}
