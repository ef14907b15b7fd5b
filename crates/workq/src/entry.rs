//! Queue entries and insertion sequencing.

use std::cmp::Ordering;

use crate::priority::Priority;

/// A value held by a queue, tagged with its priority and insertion sequence.
///
/// Entries are ordered ascending by `(priority, sequence)`: priority first,
/// then arrival order among equal priorities.
#[derive(Debug, Clone)]
pub struct Entry<T, P> {
    value: T,
    priority: P,
    sequence: u64,
}

impl<T, P: Priority> Entry<T, P> {
    pub(crate) fn new(value: T, priority: P, sequence: u64) -> Self {
        Self {
            value,
            priority,
            sequence,
        }
    }

    /// Returns the stored value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the priority the entry was enqueued with.
    pub fn priority(&self) -> P {
        self.priority
    }

    /// Returns the insertion sequence number.
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Consumes the entry, returning its value.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Consumes the entry, returning `(value, priority, sequence)`.
    pub fn into_parts(self) -> (T, P, u64) {
        (self.value, self.priority, self.sequence)
    }

    /// Compares by `(priority, sequence)`. `Less` means extracted earlier.
    #[inline]
    pub fn key_cmp(&self, other: &Self) -> Ordering {
        self.priority
            .compare(&other.priority)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// Hands out strictly increasing sequence numbers.
///
/// Numbers are never reused over the lifetime of the owning queue, including
/// after entries are dequeued or the queue is cleared.
#[derive(Debug, Clone, Default)]
pub(crate) struct Sequencer {
    next: u64,
}

impl Sequencer {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn next(&mut self) -> u64 {
        let sequence = self.next;
        self.next += 1;
        sequence
    }
}
