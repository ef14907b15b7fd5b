//! Model-based property tests for arbitrary enqueue/dequeue interleavings.

use proptest::prelude::*;
use workq::{HeapQueue, OrderedQueue, SortedQueue};

#[derive(Debug, Clone)]
enum Op {
    Enqueue(i8),
    Dequeue,
    Peek,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    // A narrow priority range forces plenty of ties.
    prop_oneof![
        3 => (-4i8..4).prop_map(Op::Enqueue),
        2 => Just(Op::Dequeue),
        1 => Just(Op::Peek),
    ]
}

/// Reference model: a plain vector, scanned for the smallest key.
#[derive(Default)]
struct Model {
    entries: Vec<(i8, u64)>,
    next_id: u64,
}

impl Model {
    fn enqueue(&mut self, priority: i8) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push((priority, id));
        id
    }

    fn first_index(&self) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .min_by_key(|(_, key)| **key)
            .map(|(i, _)| i)
    }

    fn peek(&self) -> Option<u64> {
        self.first_index().map(|i| self.entries[i].1)
    }

    fn dequeue(&mut self) -> Option<u64> {
        self.first_index().map(|i| self.entries.remove(i).1)
    }
}

fn check_against_model<Q>(ops: &[Op]) -> Result<(), TestCaseError>
where
    Q: OrderedQueue<u64, i8> + Default,
{
    let mut queue = Q::default();
    let mut model = Model::default();
    let mut inserted = 0usize;
    let mut removed = 0usize;

    for op in ops {
        match op {
            Op::Enqueue(priority) => {
                let id = model.enqueue(*priority);
                queue.enqueue(id, *priority);
                inserted += 1;
            }
            Op::Dequeue => {
                let expected = model.dequeue();
                prop_assert_eq!(queue.dequeue(), expected);
                if expected.is_some() {
                    removed += 1;
                }
            }
            Op::Peek => {
                let before = queue.len();
                let first = queue.peek().copied();
                let second = queue.peek().copied();
                prop_assert_eq!(first, model.peek());
                prop_assert_eq!(first, second);
                prop_assert_eq!(queue.len(), before);
            }
        }

        prop_assert_eq!(queue.len(), inserted - removed);
        prop_assert_eq!(queue.is_empty(), queue.len() == 0);
    }

    // Drain what is left: priorities never decrease, ties come out by id.
    let mut previous: Option<(i8, u64)> = None;
    while let Some(entry) = queue.dequeue_entry() {
        let key = (entry.priority(), *entry.value());
        prop_assert_eq!(Some(entry.priority()), model.entries.iter().map(|e| e.0).min());
        if let Some(prev) = previous {
            prop_assert!(prev < key, "{:?} extracted before {:?}", prev, key);
        }
        model.dequeue();
        previous = Some(key);
    }
    prop_assert!(model.entries.is_empty());

    Ok(())
}

proptest! {
    #[test]
    fn heap_queue_matches_model(ops in prop::collection::vec(op_strategy(), 0..200)) {
        check_against_model::<HeapQueue<u64, i8>>(&ops)?;
    }

    #[test]
    fn sorted_queue_matches_model(ops in prop::collection::vec(op_strategy(), 0..200)) {
        check_against_model::<SortedQueue<u64, i8>>(&ops)?;
    }

    #[test]
    fn backends_drain_identically(
        items in prop::collection::vec((any::<u16>(), -8i32..8), 0..100)
    ) {
        let heap: HeapQueue<u16, i32> = items.iter().copied().collect();
        let sorted: SortedQueue<u16, i32> = items.iter().copied().collect();
        prop_assert_eq!(heap.into_sorted_vec(), sorted.into_sorted_vec());
    }
}
