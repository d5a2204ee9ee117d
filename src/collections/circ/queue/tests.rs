#![cfg(test)]

use std::iter;

use super::*;
use crate::collections::contiguous::GrowableStack;
use crate::collections::contiguous::capacity::{DEFAULT_CAP, MIN_CAP};
use crate::util::alloc::{Counted, CountedDrop};
use crate::util::panic::assert_panics;

#[test]
fn test_fifo_order() {
    let mut queue = CircularQueue::new();
    for i in 0..6 {
        queue.add(i);
    }
    assert_eq!(queue.size(), 6);

    for i in 0..6 {
        assert_eq!(queue.remove(), i, "Values should come out in the order they went in.");
    }
    assert!(queue.is_empty());
    assert_eq!(queue.size(), 0);
}

#[test]
fn test_wrapping() {
    let mut queue = CircularQueue::with_cap(DEFAULT_CAP);
    queue.extend(0..4);
    assert_eq!(queue.remove(), 0);
    assert_eq!(queue.remove(), 1);

    queue.add(4);
    queue.add(5);
    assert_eq!(queue.cap(), DEFAULT_CAP, "Freed slots at the front should be reused.");
    assert_eq!(queue.start, 2);
    assert_eq!(queue.physical_index(3), 1, "Logical indices should wrap around the buffer.");

    for i in 0..4 {
        assert_eq!(*queue.get(i), i + 2);
    }
}

#[test]
fn test_resize_relinearizes() {
    let mut queue = CircularQueue::with_cap(4);
    queue.extend(0..4);
    queue.remove();
    queue.remove();
    queue.extend(4..6);
    assert_eq!(queue.start, 2);

    // The queue is full and wrapped, so this add has to relocate both segments.
    queue.add(6);
    assert_eq!(queue.start, 0, "Resizing should move the head back to the first slot.");
    assert_eq!(queue.cap(), 6);
    assert_eq!(*queue.iter().copied().collect::<GrowableStack<_>>(), [2, 3, 4, 5, 6]);

    for i in 2..7 {
        assert_eq!(queue.remove(), i);
    }
}

#[test]
fn test_shrink_hysteresis() {
    let mut queue: CircularQueue<usize> = (0..30).collect();
    let grown = queue.cap();

    while queue.cap() == grown {
        queue.remove();
        assert!(queue.cap() >= queue.size());
    }

    assert!(grown >= 3 * queue.size());
    assert_eq!(queue.start, 0);
    assert_eq!(*queue.peek(), 30 - queue.size(), "Shrinking shouldn't lose the head.");

    while !queue.is_empty() {
        queue.remove();
    }
    assert_eq!(queue.cap(), MIN_CAP, "An emptied queue should settle at the minimum capacity.");
}

#[test]
fn test_get_mut_and_peek() {
    let mut queue: CircularQueue<_> = ["a", "b", "c"].into_iter().collect();
    *queue.get_mut(1) = "z";
    queue[2] = "c";
    assert_eq!(queue[1], "z");

    assert_eq!(*queue.peek(), "a");
    assert_eq!(queue.to_string(), r#"["a", "z", "c"]"#);
    assert_eq!(*queue.iter().rev().copied().collect::<GrowableStack<_>>(), ["c", "z", "a"]);
}

#[test]
fn test_empty_preconditions() {
    let mut queue: CircularQueue<u8> = CircularQueue::new();

    assert_eq!(queue.try_remove(), Err(EmptyCollection));
    assert_eq!(queue.try_peek(), Err(EmptyCollection));
    assert_eq!(queue.try_get(0), Err(IndexOutOfBounds { index: 0, len: 0 }));

    assert_panics!({ CircularQueue::<u8>::new().remove() }, "empty collection");
    assert_panics!({ CircularQueue::<u8>::new().peek(); }, "empty collection");
    assert_panics!({ (0..3).collect::<CircularQueue<_>>().get(3); }, "out of bounds");
}

#[test]
fn test_drop_accounting() {
    let tally = Counted::handle();
    let mut queue = CircularQueue::with_cap(4);

    for i in 0..4 {
        queue.add(Counted::new(i, &tally));
    }
    queue.remove();
    queue.add(Counted::new(4, &tally));
    queue.add(Counted::new(5, &tally));

    assert_eq!(tally.borrow().cloned, 0, "Resizing should never clone values.");
    assert_eq!(tally.borrow().live(), 5);
    drop(queue);
    assert_eq!(tally.borrow().live(), 0, "Dropping a wrapped queue should drop every value.");

    let counter = CountedDrop::new(0);
    let mut iter: IntoIter<_> = iter::repeat_with(|| counter.clone())
        .take(6)
        .collect::<CircularQueue<_>>()
        .into_iter();
    iter.next();
    drop(iter);
    assert_eq!(*counter.borrow(), 6, "Partially drained iterators should drop the rest.");
}

#[test]
fn test_clone_and_equality() {
    let mut queue: CircularQueue<_> = (0..5).collect();
    queue.remove();
    queue.add(5);

    let cloned = queue.clone();
    assert_eq!(queue, cloned, "Equality should compare logical order, not physical layout.");
    assert_eq!(cloned.start, 0);
    assert_eq!(*queue.into_iter().collect::<GrowableStack<_>>(), [1, 2, 3, 4, 5]);
}
