//! Priority-ordered work queue.
//!
//! This crate provides containers that hold work items tagged with a
//! priority and yield them back in a well-defined total order:
//! - Lower priority value is extracted first
//! - Equal priorities are extracted in insertion order (FIFO-on-ties)
//! - Emptiness is a normal outcome, reported as `None`
//!
//! Two backings implement the same [`OrderedQueue`] contract:
//! - [`HeapQueue`]: `BinaryHeap` with an explicit `(priority, sequence)` key,
//!   O(log n) enqueue and dequeue
//! - [`SortedQueue`]: sorted deque, O(n) enqueue, O(1) dequeue and peek
//!
//! # Example
//!
//! ```
//! use workq::{HeapQueue, OrderedQueue};
//!
//! let mut queue = HeapQueue::new();
//! queue.enqueue("X", 2);
//! queue.enqueue("Y", 1);
//! queue.enqueue("Z", 2);
//!
//! assert_eq!(queue.peek(), Some(&"Y"));
//! assert_eq!(queue.dequeue(), Some("Y"));
//! assert_eq!(queue.dequeue(), Some("X"));
//! assert_eq!(queue.dequeue(), Some("Z"));
//! assert_eq!(queue.dequeue(), None);
//! ```

pub mod entry;
pub mod filter;
pub mod heap;
pub mod priority;
pub mod queue;
pub mod sorted;

pub use entry::Entry;
pub use filter::PriorityFilter;
pub use heap::HeapQueue;
pub use priority::Priority;
pub use queue::{DrainOrdered, OrderedQueue};
pub use sorted::SortedQueue;
