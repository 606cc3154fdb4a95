//! The main trie implementation.
//!
//! This module contains the `PositionalTrie` type, which provides the primary API for
//! working with the positional radix trie.

use std::fmt;
use std::iter::FromIterator;

use tracing::{debug, trace};

use crate::iter::Iter;
use crate::key::SequenceKey;
use crate::node::TrieNode;
use crate::Error;

/// A radix trie multiset that remembers where every key was inserted.
///
/// Each insertion is numbered by a single counter shared across the whole trie, so
/// a key's position is its index among *all* insertions, not among occurrences of
/// that key. Duplicate keys are allowed. Removing an occurrence renumbers every later
/// occurrence so the stored positions are always exactly `1..=len()`.
///
/// Keys are stored with prefix compression: each node holds only the fragment of a
/// key that differs from its siblings.
///
/// The trie is not synchronized. Callers sharing one across threads must wrap it in
/// a lock.
#[derive(Clone)]
pub struct PositionalTrie<K> {
    /// The root node of the trie; `None` while the trie is empty
    pub(crate) root: Option<TrieNode<K>>,

    /// The number of occurrences stored in the trie, and the last position handed out
    pub(crate) size: usize,
}

impl<K> PositionalTrie<K> {
    /// Creates a new, empty trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use positional_radix::PositionalTrie;
    ///
    /// let trie = PositionalTrie::<String>::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        PositionalTrie {
            root: None,
            size: 0,
        }
    }

    /// Returns the number of occurrences stored in the trie.
    ///
    /// # Examples
    ///
    /// ```
    /// use positional_radix::PositionalTrie;
    ///
    /// let mut trie = PositionalTrie::<String>::new();
    /// assert_eq!(trie.len(), 0);
    ///
    /// trie.insert("hello");
    /// trie.insert("hello");
    /// assert_eq!(trie.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the trie contains no occurrences.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Drops every node and resets the position counter.
    pub fn clear(&mut self) {
        debug!(dropped = self.size, "clearing trie");
        self.root = None;
        self.size = 0;
    }
}

impl<K: SequenceKey> PositionalTrie<K> {
    /// Inserts one occurrence of `key` and returns the position it was given.
    ///
    /// The position is `len()` after the insertion. Empty keys are rejected with
    /// [`Error::InvalidKey`] and leave the trie untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use positional_radix::{Error, PositionalTrie};
    ///
    /// let mut trie = PositionalTrie::<String>::new();
    /// assert_eq!(trie.push("abc"), Ok(1));
    /// assert_eq!(trie.push("xyz"), Ok(2));
    /// assert_eq!(trie.push("abc"), Ok(3));
    /// assert_eq!(trie.push(""), Err(Error::InvalidKey));
    /// ```
    pub fn push<Q>(&mut self, key: Q) -> Result<usize, Error>
    where
        Q: Into<K>,
    {
        let key = key.into();
        if key.is_empty() {
            return Err(Error::InvalidKey);
        }

        let position = self.size + 1;
        if let Some(root) = self.root.as_mut() {
            Self::insert_below(root, key, position);
        } else {
            // The root only anchors the children; its fragment is never matched
            let mut root = TrieNode::new(key.empty());
            root.children.push(TrieNode::with_position(key, position));
            self.root = Some(root);
        }
        self.size = position;

        debug!(position, "inserted occurrence");
        Ok(position)
    }

    /// Inserts one occurrence of `key`, returning `false` if the key was rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use positional_radix::PositionalTrie;
    ///
    /// let mut trie = PositionalTrie::<String>::new();
    /// assert!(trie.insert("hello"));
    /// assert!(!trie.insert(""));
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn insert<Q>(&mut self, key: Q) -> bool
    where
        Q: Into<K>,
    {
        self.push(key).is_ok()
    }

    // Descends from the root, splitting or extending nodes until the key has a home
    fn insert_below(root: &mut TrieNode<K>, key: K, position: usize) {
        let mut parent = root;
        let mut remaining = key;

        loop {
            let (idx, shared) = match parent.matching_child(&remaining) {
                Some(found) => found,
                None => {
                    if parent.is_leaf() {
                        // A terminal leaf about to gain its first child
                        trace!(position, "demoting terminal leaf into epsilon marker");
                        parent.demote();
                    } else if parent.fold_marker() {
                        trace!(position, "folded epsilon marker back into branching node");
                    }
                    parent
                        .children
                        .push(TrieNode::with_position(remaining, position));
                    return;
                }
            };

            let fragment_len = parent.children[idx].fragment.len();
            if shared < fragment_len {
                trace!(shared, fragment_len, position, "splitting node");
                let child = &mut parent.children[idx];
                child.split(shared);
                // An exhausted key turns into the epsilon marker of the split node
                child
                    .children
                    .push(TrieNode::with_position(remaining.suffix(shared), position));
                return;
            }

            if shared == remaining.len() {
                trace!(position, "exact match");
                parent.children[idx].add_position(position);
                return;
            }

            remaining = remaining.suffix(shared);
            parent = &mut parent.children[idx];
        }
    }

    /// Returns the child-index path from the root to the node holding the positions
    /// of `key`, if the key is present.
    fn holder_path(&self, key: &K) -> Option<Vec<usize>> {
        if key.is_empty() {
            return None;
        }

        let mut parent = self.root.as_ref()?;
        let mut remaining = key.clone();
        let mut path = Vec::new();

        loop {
            let (idx, shared) = parent.matching_child(&remaining)?;
            let child = &parent.children[idx];
            if shared < child.fragment.len() {
                return None;
            }
            path.push(idx);

            if shared == remaining.len() {
                if child.is_terminal() {
                    return Some(path);
                }
                let marker = child.marker_index()?;
                path.push(marker);
                return Some(path);
            }

            remaining = remaining.suffix(shared);
            parent = child;
        }
    }

    fn holder(&self, key: &K) -> Option<&TrieNode<K>> {
        let path = self.holder_path(key)?;
        self.root
            .as_ref()?
            .descendant(&path)
            .filter(|node| node.is_terminal())
    }

    /// Returns `true` if at least one occurrence of `key` is stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use positional_radix::PositionalTrie;
    ///
    /// let mut trie = PositionalTrie::<String>::new();
    /// trie.insert("hello");
    ///
    /// assert!(trie.contains("hello"));
    /// assert!(!trie.contains("hell"));
    /// ```
    pub fn contains<Q>(&self, key: Q) -> bool
    where
        Q: Into<K>,
    {
        self.holder(&key.into()).is_some()
    }

    /// Returns the smallest position at which `key` is stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use positional_radix::PositionalTrie;
    ///
    /// let mut trie = PositionalTrie::<String>::new();
    /// trie.insert("a");
    /// trie.insert("b");
    /// trie.insert("b");
    ///
    /// assert_eq!(trie.find("b"), Some(2));
    /// assert_eq!(trie.find("c"), None);
    /// ```
    pub fn find<Q>(&self, key: Q) -> Option<usize>
    where
        Q: Into<K>,
    {
        self.holder(&key.into())
            .and_then(|node| node.positions.first().copied())
    }

    /// Returns every position at which `key` is stored, in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use positional_radix::PositionalTrie;
    ///
    /// let mut trie = PositionalTrie::<String>::new();
    /// trie.insert("cde");
    /// trie.insert("abc");
    /// trie.insert("cde");
    ///
    /// assert_eq!(trie.find_all("cde"), Some(vec![1, 3]));
    /// assert_eq!(trie.find_all("zzz"), None);
    /// ```
    pub fn find_all<Q>(&self, key: Q) -> Option<Vec<usize>>
    where
        Q: Into<K>,
    {
        self.holder(&key.into()).map(|node| node.positions.clone())
    }

    /// Removes the most recently inserted occurrence of `key`.
    ///
    /// Every occurrence stored after the removed one moves down a position, so
    /// positions stay contiguous. Returns `false` and leaves the trie untouched if
    /// the key is not present.
    ///
    /// # Examples
    ///
    /// ```
    /// use positional_radix::PositionalTrie;
    ///
    /// let mut trie = PositionalTrie::<String>::new();
    /// trie.insert("abc");
    /// trie.insert("cde");
    /// trie.insert("def");
    ///
    /// assert!(trie.remove("cde"));
    /// assert_eq!(trie.find("def"), Some(2));
    /// assert!(!trie.remove("cde"));
    /// ```
    pub fn remove<Q>(&mut self, key: Q) -> bool
    where
        Q: Into<K>,
    {
        let path = match self.holder_path(&key.into()) {
            Some(path) => path,
            None => return false,
        };
        let (holder_idx, parent_path) = match path.split_last() {
            Some((&last, rest)) => (last, rest),
            None => return false,
        };
        let root = match self.root.as_mut() {
            Some(root) => root,
            None => return false,
        };

        let removed = match root.descendant_mut(&path).and_then(|node| node.positions.pop()) {
            Some(position) => position,
            None => return false,
        };
        if removed < self.size {
            root.close_gap(removed);
        }

        if let Some(parent) = root.descendant_mut(parent_path) {
            let holder = &parent.children[holder_idx];
            if !holder.is_terminal() && holder.is_leaf() {
                parent.children.remove(holder_idx);

                // The root may keep a single child; any other node must not
                if !parent_path.is_empty() && parent.children.len() == 1 {
                    if parent.is_terminal() {
                        trace!(removed, "re-creating epsilon marker after removal");
                        parent.demote();
                    } else {
                        trace!(removed, "compressing node after removal");
                        parent.compress();
                    }
                }
            }
        }

        let emptied = root.children.is_empty();
        self.size -= 1;
        if emptied {
            self.root = None;
        }

        debug!(removed, remaining = self.size, "removed occurrence");
        true
    }

    /// Returns the stored keys ordered by position.
    ///
    /// This is the insertion order of the surviving occurrences.
    ///
    /// # Examples
    ///
    /// ```
    /// use positional_radix::PositionalTrie;
    ///
    /// let mut trie = PositionalTrie::<String>::new();
    /// for word in &["the", "cat", "then", "the"] {
    ///     trie.insert(*word);
    /// }
    /// trie.remove("cat");
    ///
    /// assert_eq!(trie.to_vec(), vec!["the", "then", "the"]);
    /// ```
    pub fn to_vec(&self) -> Vec<K> {
        let root = match &self.root {
            Some(root) => root,
            None => return Vec::new(),
        };

        debug_assert_eq!(root.subtree_size(), self.size);
        let mut slots = vec![None; self.size];
        root.emit(&root.fragment, &mut slots);
        slots.into_iter().flatten().collect()
    }

    /// Returns an iterator over a snapshot of the stored keys, in position order.
    ///
    /// The snapshot is taken when this method is called; later changes to the trie
    /// are not observed by the iterator.
    pub fn iter(&self) -> Iter<K> {
        Iter::new(self.to_vec())
    }

    /// Returns `true` if every listed key is present. An empty list is trivially
    /// contained.
    pub fn contains_all<I>(&self, keys: I) -> bool
    where
        I: IntoIterator,
        I::Item: Into<K>,
    {
        keys.into_iter().all(|key| self.contains(key))
    }

    /// Removes one occurrence of each listed key, returning `true` if anything was
    /// removed.
    pub fn remove_all<I>(&mut self, keys: I) -> bool
    where
        I: IntoIterator,
        I::Item: Into<K>,
    {
        keys.into_iter()
            .fold(false, |removed, key| self.remove(key) || removed)
    }

    /// Removes every occurrence whose key fails the predicate.
    ///
    /// The predicate is called once per occurrence, in position order.
    ///
    /// # Examples
    ///
    /// ```
    /// use positional_radix::PositionalTrie;
    ///
    /// let mut trie: PositionalTrie<String> =
    ///     vec!["apple", "kiwi", "avocado", "fig"].into_iter().collect();
    /// trie.retain(|word| word.starts_with('a'));
    ///
    /// assert_eq!(trie.to_vec(), vec!["apple", "avocado"]);
    /// assert_eq!(trie.find("avocado"), Some(2));
    /// ```
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&K) -> bool,
    {
        let doomed: Vec<K> = self.to_vec().into_iter().filter(|key| !keep(key)).collect();
        for key in doomed {
            self.remove(key);
        }
    }
}

// Default implementation
impl<K> Default for PositionalTrie<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, Q> Extend<Q> for PositionalTrie<K>
where
    K: SequenceKey,
    Q: Into<K>,
{
    fn extend<I: IntoIterator<Item = Q>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }
}

impl<K, Q> FromIterator<Q> for PositionalTrie<K>
where
    K: SequenceKey,
    Q: Into<K>,
{
    fn from_iter<I: IntoIterator<Item = Q>>(keys: I) -> Self {
        let mut trie = PositionalTrie::new();
        trie.extend(keys);
        trie
    }
}

impl<'a, K: SequenceKey> IntoIterator for &'a PositionalTrie<K> {
    type Item = K;
    type IntoIter = Iter<K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: SequenceKey> IntoIterator for PositionalTrie<K> {
    type Item = K;
    type IntoIter = Iter<K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Two tries are equal when they hold the same keys at the same positions,
// regardless of how their nodes happen to be arranged
impl<K: SequenceKey> PartialEq for PositionalTrie<K> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.to_vec() == other.to_vec()
    }
}

impl<K: SequenceKey> Eq for PositionalTrie<K> {}

impl<K: SequenceKey + fmt::Debug> fmt::Debug for PositionalTrie<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<K: SequenceKey + fmt::Display> fmt::Display for PositionalTrie<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, key) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", key)?;
        }
        Ok(())
    }
}
