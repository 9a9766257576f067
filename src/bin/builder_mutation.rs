// Complete Builder Mutation Demo
// Demonstrates why build() must defensively copy the builder's internal collections

use colored::Colorize;
use itertools::Itertools;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

//==============================================================================
// Milestone 1: Leaky Builder (shared friends list)
//==============================================================================

/// LeakyBuilder: hands its friends list to the built value by shared handle.
/// Every person built from it keeps aliasing the builder's internal state.
#[derive(Default)]
pub struct LeakyBuilder {
    name: String,
    friends: Rc<RefCell<Vec<String>>>,
}

impl LeakyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn friend(&mut self, friend: impl Into<String>) -> &mut Self {
        self.friends.borrow_mut().push(friend.into());
        self
    }

    pub fn build(&self) -> LeakyPerson {
        LeakyPerson {
            name: self.name.clone(),
            // Shares the cell instead of copying its contents
            friends: Rc::clone(&self.friends),
        }
    }
}

pub struct LeakyPerson {
    name: String,
    friends: Rc<RefCell<Vec<String>>>,
}

impl LeakyPerson {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn friends(&self) -> Vec<String> {
        self.friends.borrow().clone()
    }
}

impl fmt::Display for LeakyPerson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (friends: [{}])", self.name, self.friends.borrow().iter().join(", "))
    }
}


//==============================================================================
// Milestone 2: Builder With Defensive Copy
//==============================================================================

/// PersonBuilder: mutable accumulator for a Person. Setters chain through
/// `&mut Self`, and the builder stays usable after every `build()`.
#[derive(Default)]
pub struct PersonBuilder {
    name: String,
    friends: Vec<String>,
}

impl PersonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn friend(&mut self, friend: impl Into<String>) -> &mut Self {
        self.friends.push(friend.into());
        self
    }

    /// Builds a Person from the current state. The friends list is cloned,
    /// so the builder and the built value share nothing afterwards.
    pub fn build(&self) -> Person {
        Person {
            name: self.name.clone(),
            friends: self.friends.clone(),
        }
    }
}

/// Person: frozen at construction. No setter exists, and `friends()` borrows
/// the person's own copy, never the builder's list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: String,
    friends: Vec<String>,
}

impl Person {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn friends(&self) -> &[String] {
        &self.friends
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (friends: [{}])", self.name, self.friends.iter().join(", "))
    }
}

#[cfg(test)]
mod builder_tests {
    use super::*;

    fn albert() -> PersonBuilder {
        let mut builder = PersonBuilder::new();
        builder
            .name("Albert Attard")
            .friend("John White")
            .friend("Mary Vella");
        builder
    }

    #[test]
    fn build_copies_current_state() {
        let builder = albert();
        let person = builder.build();

        assert_eq!(person.name(), "Albert Attard");
        assert_eq!(person.friends(), ["John White", "Mary Vella"]);
    }

    #[test]
    fn later_builder_mutation_does_not_reach_built_person() {
        let mut builder = albert();
        let person = builder.build();

        builder.friend("Joe Borg");
        assert_eq!(person.friends(), ["John White", "Mary Vella"]);
    }

    #[test]
    fn name_overwrite_does_not_reach_built_person() {
        let mut builder = albert();
        let person = builder.build();

        builder.name("Someone Else");
        assert_eq!(person.name(), "Albert Attard");
    }

    #[test]
    fn each_build_reflects_builder_state_at_that_call() {
        let mut builder = albert();
        let first = builder.build();

        builder.friend("Joe Borg");
        let second = builder.build();

        assert_ne!(first, second);
        assert_eq!(first.friends(), ["John White", "Mary Vella"]);
        assert_eq!(second.friends(), ["John White", "Mary Vella", "Joe Borg"]);
    }

    #[test]
    fn rendering_is_stable_across_calls() {
        let mut builder = albert();
        let person = builder.build();
        let before = person.to_string();

        builder.friend("Joe Borg");
        assert_eq!(person.to_string(), before);
        assert_eq!(
            before,
            "Albert Attard (friends: [John White, Mary Vella])"
        );
    }
}

//==============================================================================
// Demonstration
//==============================================================================

fn main() {
    println!("{}", "=== Builder With Defensive Copy ===".bold());
    let mut builder = PersonBuilder::new();
    builder
        .name("Albert Attard")
        .friend("John White")
        .friend("Mary Vella");

    let person = builder.build();
    println!("Before modification: {}", person);

    // Adding a new friend after the person was built
    builder.friend("Joe Borg");
    println!("After modification: {}", person);

    println!();
    println!("{}", "=== The Builder Stays Usable ===".bold());
    let second = builder.build();
    println!("Second build: {}", second);

    println!();
    println!("{}", "=== Without the Copy ===".bold());
    let mut leaky = LeakyBuilder::new();
    leaky
        .name("Albert Attard")
        .friend("John White")
        .friend("Mary Vella");

    let aliased = leaky.build();
    println!("Leaky build:  {}", aliased);

    leaky.friend("Joe Borg");
    println!("{} {}", "After builder mutation:".yellow(), aliased);
}
