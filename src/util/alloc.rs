//! Instrumented element types for checking how containers treat the values they own.

use std::cell::RefCell;
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ZeroSizedType;

/// A value which increments a shared counter whenever one of its instances is dropped.
#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<RefCell<usize>>);

impl CountedDrop {
    pub fn new(value: usize) -> CountedDrop {
        CountedDrop(Rc::new(RefCell::new(value)))
    }
}

impl Deref for CountedDrop {
    type Target = Rc<RefCell<usize>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for CountedDrop {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.replace_with(|v| *v + 1);
    }
}

/// Shared tallies for every [`Counted`] created from the same handle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub created: usize,
    pub cloned: usize,
    pub dropped: usize,
}

impl Tally {
    /// The number of instances which are currently alive.
    pub const fn live(&self) -> usize {
        self.created + self.cloned - self.dropped
    }
}

/// A value tagged with a shared [`Tally`] handle. Unlike a global counter, every test owns its own
/// handle, so tests can run in parallel without disturbing each other.
#[derive(Debug)]
pub struct Counted {
    pub value: usize,
    tally: Rc<RefCell<Tally>>,
}

impl Counted {
    pub fn handle() -> Rc<RefCell<Tally>> {
        Rc::new(RefCell::new(Tally::default()))
    }

    pub fn new(value: usize, tally: &Rc<RefCell<Tally>>) -> Counted {
        tally.borrow_mut().created += 1;
        Counted {
            value,
            tally: Rc::clone(tally),
        }
    }
}

impl Clone for Counted {
    fn clone(&self) -> Self {
        self.tally.borrow_mut().cloned += 1;
        Counted {
            value: self.value,
            tally: Rc::clone(&self.tally),
        }
    }
}

impl PartialEq for Counted {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Drop for Counted {
    fn drop(&mut self) {
        self.tally.borrow_mut().dropped += 1;
    }
}
