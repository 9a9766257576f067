// Complete Unmodifiable View Demo
// Demonstrates that a read-only view aliases its backing list instead of copying it

use colored::Colorize;
use itertools::Itertools;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

//==============================================================================
// Milestone 1: Shared Mutable List
//==============================================================================

/// SharedList: an ordered sequence behind a shared, interiorly-mutable handle.
/// Cloning the handle shares the elements, it does not copy them.
#[derive(Clone, Default)]
pub struct SharedList<T> {
    items: Rc<RefCell<Vec<T>>>,
}

impl<T> SharedList<T> {
    pub fn new() -> Self {
        SharedList {
            items: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn push(&self, value: T) {
        self.items.borrow_mut().push(value);
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Wraps this list in a read-only view. The view holds a handle to the
    /// same cell, so reads through it track this list's current contents.
    pub fn read_only(&self) -> ReadOnlyView<T> {
        ReadOnlyView {
            items: Rc::clone(&self.items),
        }
    }
}

impl<T: Clone> SharedList<T> {
    pub fn snapshot(&self) -> Vec<T> {
        self.items.borrow().clone()
    }
}

impl<T: fmt::Display> fmt::Display for SharedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.items.borrow().iter().join(", "))
    }
}


//==============================================================================
// Milestone 2: Read-Only View With Rejected Mutation
//==============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    #[error("operation '{operation}' is not supported on a read-only view")]
    UnsupportedOperation { operation: &'static str },
}

/// ReadOnlyView: a window onto a SharedList. Reads go straight to the backing
/// list; the mutating operations are present only to fail loudly.
pub struct ReadOnlyView<T> {
    items: Rc<RefCell<Vec<T>>>,
}

impl<T> ReadOnlyView<T> {
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Always fails. The backing list can only be mutated through its own
    /// handle, never through a view.
    pub fn push(&self, _value: T) -> Result<(), ViewError> {
        Err(ViewError::UnsupportedOperation { operation: "push" })
    }

    /// Always fails, same contract as `push`.
    pub fn clear(&self) -> Result<(), ViewError> {
        Err(ViewError::UnsupportedOperation { operation: "clear" })
    }
}

impl<T: Clone> ReadOnlyView<T> {
    /// Reads the element currently at `index` in the backing list.
    pub fn get(&self, index: usize) -> Option<T> {
        self.items.borrow().get(index).cloned()
    }

    pub fn snapshot(&self) -> Vec<T> {
        self.items.borrow().clone()
    }
}

impl<T: fmt::Display> fmt::Display for ReadOnlyView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.items.borrow().iter().join(", "))
    }
}


//==============================================================================
// Demonstration
//==============================================================================

fn main() {
    println!("{}", "=== Read-Only View Over a Mutable List ===".bold());
    let words = SharedList::new();
    words.push("Java".to_string());
    words.push("is".to_string());

    let view = words.read_only();
    println!("Before modification: {}", view);

    words.push("the".to_string());
    words.push("best".to_string());
    println!("After modification: {}", view);

    println!();
    println!("{}", "=== Mutating Through the View ===".bold());
    match view.push("!".to_string()) {
        Ok(()) => println!("{}", "push through the view succeeded?!".red()),
        Err(err) => println!("{} {}", "rejected:".yellow(), err),
    }
    println!("Backing list is still: {}", words);
}
