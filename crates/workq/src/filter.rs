//! Priority range filtering for queue listings.

use std::cmp::Ordering;

use crate::entry::Entry;
use crate::priority::Priority;
use crate::queue::OrderedQueue;

/// Inclusive priority range used to select entries from a queue.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityFilter<P> {
    /// Lowest priority to include.
    pub min: Option<P>,
    /// Highest priority to include.
    pub max: Option<P>,
}

impl<P: Priority> PriorityFilter<P> {
    /// Creates a filter that matches every entry.
    pub fn new() -> Self {
        Self {
            min: None,
            max: None,
        }
    }

    /// Sets the lower bound (inclusive).
    pub fn at_least(mut self, min: P) -> Self {
        self.min = Some(min);
        self
    }

    /// Sets the upper bound (inclusive).
    pub fn at_most(mut self, max: P) -> Self {
        self.max = Some(max);
        self
    }

    /// Returns true if the entry's priority lies within the range.
    pub fn matches<T>(&self, entry: &Entry<T, P>) -> bool {
        let priority = entry.priority();

        if let Some(min) = self.min {
            if priority.compare(&min) == Ordering::Less {
                return false;
            }
        }

        if let Some(max) = self.max {
            if priority.compare(&max) == Ordering::Greater {
                return false;
            }
        }

        true
    }

    /// Returns the matching entries of `queue` in extraction order.
    pub fn apply<'q, T, Q>(&self, queue: &'q Q) -> Vec<&'q Entry<T, P>>
    where
        Q: OrderedQueue<T, P> + ?Sized,
    {
        queue
            .ordered_entries()
            .into_iter()
            .filter(|entry| self.matches(entry))
            .collect()
    }
}
