//! The ordered queue contract shared by every backing.

use std::marker::PhantomData;

use crate::entry::Entry;
use crate::priority::Priority;

/// A container that yields values ascending by `(priority, sequence)`.
///
/// # Ordering Rules
///
/// 1. Lower priority value comes first
/// 2. For equal priority, the earlier enqueued value comes first
///
/// Rule 2 holds for every interleaving of enqueues and dequeues, not only
/// for values enqueued before the first dequeue.
///
/// The trait is object safe apart from [`OrderedQueue::drain_ordered`], so a
/// caller can pick a backing at runtime via `Box<dyn OrderedQueue<T, P>>`.
pub trait OrderedQueue<T, P: Priority> {
    /// Adds a value with the given priority. Always succeeds.
    fn enqueue(&mut self, value: T, priority: P);

    /// Removes and returns the first entry, or `None` if the queue is empty.
    fn dequeue_entry(&mut self) -> Option<Entry<T, P>>;

    /// Returns the first entry without removing it.
    fn peek_entry(&self) -> Option<&Entry<T, P>>;

    /// Returns the number of entries not yet dequeued.
    fn len(&self) -> usize;

    /// Removes every entry. Sequence numbers keep increasing afterwards.
    fn clear(&mut self);

    /// Returns references to all entries in extraction order.
    fn ordered_entries(&self) -> Vec<&Entry<T, P>>;

    /// Removes and returns the first value, or `None` if the queue is empty.
    fn dequeue(&mut self) -> Option<T> {
        self.dequeue_entry().map(Entry::into_value)
    }

    /// Returns the first value without removing it.
    fn peek<'a>(&'a self) -> Option<&'a T>
    where
        P: 'a,
    {
        self.peek_entry().map(Entry::value)
    }

    /// Returns true if the queue has no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dequeues values in extraction order until the queue is empty.
    ///
    /// Values not consumed before the iterator is dropped stay queued.
    fn drain_ordered(&mut self) -> DrainOrdered<'_, T, P, Self>
    where
        Self: Sized,
    {
        DrainOrdered {
            queue: self,
            _marker: PhantomData,
        }
    }
}

/// Iterator returned by [`OrderedQueue::drain_ordered`].
pub struct DrainOrdered<'a, T, P, Q: ?Sized> {
    queue: &'a mut Q,
    _marker: PhantomData<(T, P)>,
}

impl<T, P, Q> Iterator for DrainOrdered<'_, T, P, Q>
where
    P: Priority,
    Q: OrderedQueue<T, P> + ?Sized,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.dequeue()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T, P, Q> ExactSizeIterator for DrainOrdered<'_, T, P, Q>
where
    P: Priority,
    Q: OrderedQueue<T, P> + ?Sized,
{
}
