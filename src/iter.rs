//! Snapshot iteration over a positional trie.

use std::iter::FusedIterator;
use std::vec;

/// An iterator over the keys of a [`PositionalTrie`](crate::PositionalTrie),
/// in position order.
///
/// The keys are materialized when the iterator is created, so the iterator
/// owns its data and is unaffected by later changes to the trie. Call
/// `iter()` again to observe the current state.
#[derive(Debug, Clone)]
pub struct Iter<K> {
    keys: vec::IntoIter<K>,
}

impl<K> Iter<K> {
    pub(crate) fn new(keys: Vec<K>) -> Self {
        Iter {
            keys: keys.into_iter(),
        }
    }
}

impl<K> Iterator for Iter<K> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.keys.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<K> DoubleEndedIterator for Iter<K> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.keys.next_back()
    }
}

impl<K> ExactSizeIterator for Iter<K> {}

impl<K> FusedIterator for Iter<K> {}
