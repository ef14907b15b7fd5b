//! HeapQueue - binary-heap backed ordered queue.
//!
//! `BinaryHeap` alone orders by its element's `Ord`, and a priority-only
//! comparator gives no FIFO guarantee among equal keys. Each entry therefore
//! carries its insertion sequence and the comparator combines both.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::entry::{Entry, Sequencer};
use crate::priority::Priority;
use crate::queue::OrderedQueue;

/// Wrapper for Entry that implements custom ordering for BinaryHeap.
///
/// # Ordering Rules
///
/// 1. Lower priority comes first
/// 2. For same priority, smaller sequence comes first (FIFO within priority)
///
/// This is inverted because BinaryHeap is a max-heap, but we want
/// the smallest `(priority, sequence)` key on top.
#[derive(Debug, Clone)]
struct HeapSlot<T, P>(Entry<T, P>);

impl<T, P: Priority> PartialEq for HeapSlot<T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.0.sequence() == other.0.sequence()
    }
}

impl<T, P: Priority> Eq for HeapSlot<T, P> {}

impl<T, P: Priority> PartialOrd for HeapSlot<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, P: Priority> Ord for HeapSlot<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse because BinaryHeap is max-heap
        other.0.key_cmp(&self.0)
    }
}

/// Priority queue backed by a binary heap.
///
/// # Complexity
///
/// - `enqueue`: O(log n)
/// - `dequeue`: O(log n)
/// - `peek`, `len`, `is_empty`: O(1)
///
/// # Example
///
/// ```
/// use workq::{HeapQueue, OrderedQueue};
///
/// let mut queue = HeapQueue::new();
/// queue.enqueue("A", 2);
/// queue.enqueue("B", 1);
/// queue.enqueue("C", 3);
///
/// assert_eq!(queue.into_sorted_vec(), vec!["B", "A", "C"]);
/// ```
#[derive(Debug, Clone)]
pub struct HeapQueue<T, P> {
    heap: BinaryHeap<HeapSlot<T, P>>,
    sequencer: Sequencer,
}

impl<T, P: Priority> HeapQueue<T, P> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            sequencer: Sequencer::new(),
        }
    }

    /// Creates an empty queue with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            sequencer: Sequencer::new(),
        }
    }

    /// Consumes the queue, returning its values in extraction order.
    pub fn into_sorted_vec(self) -> Vec<T> {
        // BinaryHeap sorts ascending by Ord, which is the reverse key order.
        self.heap
            .into_sorted_vec()
            .into_iter()
            .rev()
            .map(|slot| slot.0.into_value())
            .collect()
    }
}

impl<T, P: Priority> OrderedQueue<T, P> for HeapQueue<T, P> {
    fn enqueue(&mut self, value: T, priority: P) {
        let sequence = self.sequencer.next();
        self.heap.push(HeapSlot(Entry::new(value, priority, sequence)));
    }

    fn dequeue_entry(&mut self) -> Option<Entry<T, P>> {
        self.heap.pop().map(|slot| slot.0)
    }

    fn peek_entry(&self) -> Option<&Entry<T, P>> {
        self.heap.peek().map(|slot| &slot.0)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
    }

    fn ordered_entries(&self) -> Vec<&Entry<T, P>> {
        let mut entries: Vec<&Entry<T, P>> = self.heap.iter().map(|slot| &slot.0).collect();
        entries.sort_by(|a, b| a.key_cmp(b));
        entries
    }
}

impl<T, P: Priority> Default for HeapQueue<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P: Priority> Extend<(T, P)> for HeapQueue<T, P> {
    fn extend<I: IntoIterator<Item = (T, P)>>(&mut self, iter: I) {
        for (value, priority) in iter {
            self.enqueue(value, priority);
        }
    }
}

impl<T, P: Priority> FromIterator<(T, P)> for HeapQueue<T, P> {
    fn from_iter<I: IntoIterator<Item = (T, P)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut queue = Self::with_capacity(iter.size_hint().0);
        queue.extend(iter);
        queue
    }
}
