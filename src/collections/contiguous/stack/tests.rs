#![cfg(test)]

use std::iter;

use super::*;
use crate::collections::contiguous::capacity::{DEFAULT_CAP, MIN_CAP};
use crate::util::alloc::{Counted, CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

fn filled(count: usize) -> GrowableStack<usize> {
    let mut stack = GrowableStack::new();
    for i in 0..count {
        stack.add(i, i);
    }
    stack
}

#[test]
fn test_add_then_get() {
    let stack = filled(6);

    assert_eq!(stack.size(), 6);
    for i in 0..6 {
        assert_eq!(*stack.get(i), i, "Values added at the tail should be read back in order.");
    }
    assert!(stack.cap() >= stack.size(), "Capacity should never be less than the size.");
}

#[test]
fn test_add_shifts_towards_tail() {
    let mut stack = filled(3);
    stack.add(0, 10);
    stack.add(2, 20);
    stack.add(stack.size(), 30);

    assert_eq!(&*stack, &[10, 0, 20, 1, 2, 30]);
}

#[test]
fn test_set_and_get_mut() {
    let mut stack = filled(6);

    assert_eq!(stack.set(0, 23), 0, "set should return the previous value.");
    *stack.get_mut(5) = 32;

    assert_eq!(*stack.get(0), 23);
    assert_eq!(*stack.get(5), 32);
    assert_eq!(stack.size(), 6, "Replacing values shouldn't change the size.");
}

#[test]
fn test_remove_shifts_towards_head() {
    let mut stack = filled(6);
    let size = stack.size();

    assert_eq!(stack.remove(0), 0);
    assert_eq!(stack.remove(stack.size() - 1), 5);
    assert_eq!(stack.size(), size - 2);

    for i in 0..stack.size() {
        assert_eq!(*stack.get(i), i + 1, "Remaining values should keep their relative order.");
    }
}

#[test]
fn test_growth() {
    let mut stack: GrowableStack<usize> = GrowableStack::new();
    assert_eq!(stack.cap(), DEFAULT_CAP);

    stack.extend(0..4);
    assert_eq!(stack.cap(), 4, "A full stack shouldn't grow until another value is added.");

    stack.push(4);
    assert_eq!(stack.cap(), 6, "Capacity should grow by half of the length.");

    stack.extend(5..7);
    assert_eq!(stack.cap(), 9);
    assert_eq!(&*stack, &[0, 1, 2, 3, 4, 5, 6]);

    let mut stack: GrowableStack<u8> = GrowableStack::with_cap(0);
    stack.push(1);
    assert_eq!(stack.cap(), MIN_CAP, "Growing from nothing should use the minimum capacity.");
}

#[test]
fn test_shrink_hysteresis() {
    let mut stack: GrowableStack<usize> = (0..30).collect();
    let grown = stack.cap();
    assert!(grown >= 30);

    while stack.cap() == grown {
        stack.pop();
        assert!(stack.cap() >= stack.size());
    }

    assert!(
        grown >= 3 * stack.size(),
        "Shrinking should only happen once occupancy drops to a third."
    );
    assert_eq!(stack.cap(), stack.size() + stack.size() / 2);
    assert_eq!(&*stack, &*(0..stack.size()).collect::<GrowableStack<_>>());

    // Alternating at the boundary shouldn't resize back and forth.
    let cap = stack.cap();
    let len = stack.size();
    for _ in 0..10 {
        stack.push(0);
        stack.pop();
    }
    assert_eq!(stack.cap(), cap);
    assert_eq!(stack.size(), len);
}

#[test]
fn test_fast_variant_matches() {
    let mut slow: GrowableStack<u32> = GrowableStack::new();
    let mut fast: FastGrowableStack<u32> = FastGrowableStack::new();

    for i in 0..50 {
        slow.add((i as usize) / 2, i);
        fast.add((i as usize) / 2, i);
        assert_eq!(slow.cap(), fast.cap());
    }
    assert_eq!(&*slow, &*fast, "Both relocation strategies should produce the same contents.");

    for i in (0..40).rev() {
        assert_eq!(slow.remove(i), fast.remove(i));
        assert_eq!(slow.cap(), fast.cap());
    }
    assert_eq!(&*slow, &*fast);
}

#[test]
fn test_out_of_bounds() {
    let mut stack = filled(3);

    assert_eq!(stack.try_get(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert!(stack.try_add(5, 0).is_err_and(|e| e.is_index_out_of_bounds()));
    assert!(stack.try_remove(3).is_err());
    assert!(stack.try_set(7, 0).is_err());
    assert_eq!(stack.size(), 3, "Failed operations shouldn't change the stack.");

    assert_panics!({ filled(3).get(3); }, "out of bounds");
    assert_panics!({ filled(3).remove(3); }, "out of bounds");
    assert_panics!({ filled(0).add(1, 0) }, "out of bounds");

    let mut empty: GrowableStack<u8> = GrowableStack::new();
    assert_eq!(empty.pop(), None);
}

#[test]
fn test_resize_moves_without_cloning() {
    let tally = Counted::handle();
    let mut stack: GrowableStack<Counted> = GrowableStack::new();

    for i in 0..20 {
        stack.push(Counted::new(i, &tally));
    }
    for _ in 0..15 {
        stack.remove(0);
    }

    let counts = *tally.borrow();
    assert_eq!(counts.cloned, 0, "Resizing should never clone values.");
    assert_eq!(counts.dropped, 15, "Only removed values should have been dropped.");
    assert_eq!(counts.live(), 5);
    assert_eq!(stack.get(0).value, 15);

    drop(stack);
    assert_eq!(tally.borrow().live(), 0, "Dropping the stack should drop every value.");
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let stack: GrowableStack<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    drop(stack);
    assert_eq!(*counter.borrow(), 10, "10 elements should have been dropped.");

    let mut stack: GrowableStack<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    let replaced = stack.set(0, counter.clone());
    drop(replaced);
    let mut iter = stack.into_iter();
    iter.next();
    iter.next_back();
    drop(iter);
    assert_eq!(*counter.borrow(), 21, "Partially consumed iterators should drop the rest.");
}

#[test]
fn test_zst_support() {
    let mut stack: GrowableStack<ZeroSizedType> = GrowableStack::new();
    for _ in 0..10 {
        stack.push(ZeroSizedType);
    }
    stack.add(3, ZeroSizedType);
    assert_eq!(stack.size(), 11);
    assert_eq!(stack.remove(0), ZeroSizedType);
    assert_eq!(stack.iter().count(), 10);
}

#[test]
fn test_iterators_and_clone() {
    let stack = filled(5);
    let cloned = stack.clone();
    assert_eq!(stack, cloned, "Cloned stacks should be equal.");

    assert_eq!(
        stack.into_iter().rev().collect::<GrowableStack<_>>(),
        (0..5).rev().collect::<GrowableStack<_>>(),
    );
    assert_eq!(cloned.last(), Some(&4));
    assert_eq!(format!("{cloned}"), "[0, 1, 2, 3, 4]");
}

/// Relocates from the last value to the first, which is still a valid order-preserving move.
struct BackwardsRelocate;

// SAFETY: Every one of the count values is read from src and written to dst exactly once.
unsafe impl<T> Relocate<T> for BackwardsRelocate {
    unsafe fn relocate(src: *const T, dst: *mut T, count: usize) {
        for i in (0..count).rev() {
            // SAFETY: i < count, so both offsets are within the ranges the caller guarantees.
            unsafe { dst.add(i).write(src.add(i).read()); }
        }
    }
}

#[test]
fn test_custom_relocate_strategy() {
    let mut stack: GrowableStack<u64, BackwardsRelocate> = GrowableStack::with_cap(4);
    for value in 0xDEAD0000..=0xDEAD0004 {
        stack.push(value);
    }

    assert_eq!(stack.cap(), 6, "Pushing a fifth value should have resized the stack.");
    assert_eq!(
        *stack,
        [0xDEAD0000, 0xDEAD0001, 0xDEAD0002, 0xDEAD0003, 0xDEAD0004],
        "Every value should be readable after a resize through an outside strategy."
    );

    while stack.size() > 1 {
        stack.pop();
    }
    assert_eq!(stack.cap(), MIN_CAP);
    assert_eq!(*stack, [0xDEAD0000]);
}
