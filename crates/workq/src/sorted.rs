//! SortedQueue - sorted-deque backed ordered queue.

use std::cmp::Ordering;
use std::collections::vec_deque::{self, VecDeque};

use crate::entry::{Entry, Sequencer};
use crate::priority::Priority;
use crate::queue::OrderedQueue;

/// Priority queue that keeps its entries sorted at all times.
///
/// Entries live in a `VecDeque` ascending by `(priority, sequence)`, so the
/// front is always the next value out.
///
/// # Complexity
///
/// - `enqueue`: O(log n) search plus O(n) shift
/// - `dequeue`, `peek`, `len`, `is_empty`: O(1)
///
/// Prefer [`HeapQueue`](crate::HeapQueue) when inserts dominate; prefer this
/// when the queue is mostly read or needs cheap ordered iteration.
#[derive(Debug, Clone)]
pub struct SortedQueue<T, P> {
    entries: VecDeque<Entry<T, P>>,
    sequencer: Sequencer,
}

impl<T, P: Priority> SortedQueue<T, P> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            sequencer: Sequencer::new(),
        }
    }

    /// Creates an empty queue with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            sequencer: Sequencer::new(),
        }
    }

    /// Iterates over entries in extraction order.
    pub fn iter(&self) -> vec_deque::Iter<'_, Entry<T, P>> {
        self.entries.iter()
    }

    /// Consumes the queue, returning its values in extraction order.
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.entries.into_iter().map(Entry::into_value).collect()
    }
}

impl<T, P: Priority> OrderedQueue<T, P> for SortedQueue<T, P> {
    fn enqueue(&mut self, value: T, priority: P) {
        let sequence = self.sequencer.next();
        // The new sequence is the largest ever issued, so the entry goes
        // after every entry whose priority is not greater than its own.
        let index = self
            .entries
            .partition_point(|e| e.priority().compare(&priority) != Ordering::Greater);
        self.entries
            .insert(index, Entry::new(value, priority, sequence));
    }

    fn dequeue_entry(&mut self) -> Option<Entry<T, P>> {
        self.entries.pop_front()
    }

    fn peek_entry(&self) -> Option<&Entry<T, P>> {
        self.entries.front()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn ordered_entries(&self) -> Vec<&Entry<T, P>> {
        self.entries.iter().collect()
    }
}

impl<T, P: Priority> Default for SortedQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Priority> Extend<(T, P)> for SortedQueue<T, P> {
    fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
        for (value, priority) in iter {
            self.enqueue(value, priority);
        }
    }
}

impl<T, P: Priority> FromIterator<(T, P)> for SortedQueue<T, P> {
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut queue = Self::with_capacity(iter.size_hint().0);
        queue.extend(iter);
        queue
    }
}

impl<'a, T, P: Priority> IntoIterator for &'a SortedQueue<T, P> {
    type Item = &'a Entry<T, P>;
    type IntoIter = vec_deque::Iter<'a, Entry<T, P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
