//! # Positional Radix Trie
//!
//! A radix trie multiset that remembers where every key was inserted.
//!
//! This crate provides a prefix-compressed trie (also known as a patricia trie) that stores
//! occurrences of keys rather than key-value pairs. Every insertion receives the next number
//! from a single counter shared by the whole trie, so the trie can answer both "is this key
//! here?" and "at which positions of the input did it appear?", and can rebuild the input in
//! its original order.
//!
//! ## Features
//!
//! - **Generic keys**: Any type implementing [`SequenceKey`] can be stored; `String` and
//!   `Vec<T>` are supported out of the box
//! - **Duplicates**: Repeated keys share a node and keep every position
//! - **Compact positions**: Removing an occurrence renumbers later ones, so positions are
//!   always exactly `1..=len()`
//! - **Ordered snapshots**: Iteration yields the surviving keys in insertion order
//!
//! ## Example
//!
//! ```rust
//! use positional_radix::PositionalTrie;
//!
//! let mut trie = PositionalTrie::<String>::new();
//! for word in "abc bcd cde def efg".split_whitespace() {
//!     trie.insert(word);
//! }
//!
//! // Positions are global insertion indices
//! assert_eq!(trie.find("def"), Some(4));
//!
//! // Removing a key closes the gap it leaves behind
//! assert!(trie.remove("cde"));
//! assert_eq!(trie.find("def"), Some(3));
//! assert_eq!(trie.to_vec(), vec!["abc", "bcd", "def", "efg"]);
//! ```

pub mod iter;
mod invariants;
pub mod key;
mod node;
mod trie;
mod util;

// Re-export public types
pub use crate::iter::Iter;
pub use crate::key::SequenceKey;
pub use crate::trie::PositionalTrie;

/// Errors that can occur in trie operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Key is invalid for the operation
    InvalidKey,
    /// The trie's structure is inconsistent, with a description of the first problem found
    InvariantViolation(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidKey => write!(f, "Invalid key for this operation"),
            Error::InvariantViolation(msg) => write!(f, "Trie invariant violated: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
