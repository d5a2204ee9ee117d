#![cfg(test)]

use std::mem::MaybeUninit;

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};

#[test]
fn test_zst_support() {
    let buf = RawBuffer::<ZeroSizedType>::new(5);
    assert_eq!(buf[0], ZeroSizedType, "Indexing with no offset should work.");
    assert_eq!(buf[4], ZeroSizedType, "Indexing with an in-bounds offset should work.");
    assert_eq!(buf.iter().count(), 5, "Should iterate over the right number of ZST instances.");
    assert_eq!(buf.ptr, RawBuffer::<ZeroSizedType>::empty().ptr, "ZSTs should never allocate.");
}

#[test]
fn test_default_construction() {
    let mut buf: RawBuffer<usize> = RawBuffer::new(4);
    assert_eq!(buf.size(), 4);
    assert_eq!(&*buf, &[0, 0, 0, 0], "All slots should hold the default value.");

    buf[2] = 7;
    // SAFETY: 3 < buf.size().
    unsafe { *buf.get_unchecked_mut(3) = 9; }
    // SAFETY: 2 < buf.size().
    assert_eq!(unsafe { *buf.get_unchecked(2) }, 7);
    assert_eq!(&*buf, &[0, 0, 7, 9]);
}

#[test]
fn test_take_leaves_empty() {
    let mut buf: RawBuffer<u8> = RawBuffer::new(8);
    buf[0] = 1;

    let moved = buf.take();
    assert_eq!(moved.size(), 8, "Taken buffer should keep the original capacity.");
    assert_eq!(moved[0], 1, "Taken buffer should keep the original contents.");
    assert_eq!(buf.size(), 0, "Source should be left with capacity 0.");
    assert!(buf.is_empty());
}

#[test]
fn test_uninit_then_init() {
    let mut buf = RawBuffer::<String>::new_uninit(3);
    for (i, slot) in buf.iter_mut().enumerate() {
        *slot = MaybeUninit::new(i.to_string());
    }

    // SAFETY: Every slot has just been written.
    let buf = unsafe { buf.assume_init() };
    assert_eq!(&*buf, &["0", "1", "2"]);
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut buf = RawBuffer::<CountedDrop>::new_uninit(10);
    for slot in buf.iter_mut() {
        *slot = MaybeUninit::new(counter.clone());
    }
    // SAFETY: Every slot has just been written.
    let buf = unsafe { buf.assume_init() };

    drop(buf);
    assert_eq!(*counter.borrow(), 10, "10 elements should have been dropped.");

    let mut buf: RawBuffer<MaybeUninit<CountedDrop>> = RawBuffer::new_uninit(4);
    buf[0] = MaybeUninit::new(counter.clone());
    drop(buf);
    assert_eq!(
        *counter.borrow(), 10,
        "Uninitialized storage should never drop the values it holds."
    );
}

#[test]
fn test_reassignment_releases_previous() {
    let counter = CountedDrop::new(0);
    let mut buf = RawBuffer::<CountedDrop>::new_uninit(2);
    buf[0] = MaybeUninit::new(counter.clone());
    buf[1] = MaybeUninit::new(counter.clone());
    // SAFETY: Both slots have just been written.
    let mut buf = unsafe { buf.assume_init() };

    buf = RawBuffer::empty();
    assert_eq!(*counter.borrow(), 2, "Assigning over a buffer should release its contents.");
    assert_eq!(buf.size(), 0);
}
