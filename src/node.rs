//! Internal node implementation for the positional trie.
//!
//! A `TrieNode` owns a key fragment, the global positions at which the key
//! spelled by the root-to-node path was inserted, and its children. Nodes are
//! owned strictly top-down; the trie never shares a node between two parents.
//!
//! A node that is terminal but must keep branching with a single other child
//! routes its positions through an *epsilon marker*: a leaf child whose
//! fragment is the empty key.

use std::mem;

use crate::key::SequenceKey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TrieNode<K> {
    /// The key material covered by this node relative to its parent
    pub fragment: K,

    /// Ascending global positions at which the full path to this node was inserted
    pub positions: Vec<usize>,

    /// Child nodes; no two of them share a non-empty prefix
    pub children: Vec<TrieNode<K>>,
}

impl<K: SequenceKey> TrieNode<K> {
    /// Creates a new non-terminal node with the given key fragment
    pub fn new(fragment: K) -> Self {
        TrieNode {
            fragment,
            positions: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates a leaf that records a single occurrence at `position`
    pub fn with_position(fragment: K, position: usize) -> Self {
        TrieNode {
            fragment,
            positions: vec![position],
            children: Vec::new(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        !self.positions.is_empty()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns whether this node is an epsilon marker
    pub fn is_marker(&self) -> bool {
        self.fragment.is_empty()
    }

    /// Returns the index of the epsilon-marker child, if this node currently
    /// routes its positions through one.
    pub fn marker_index(&self) -> Option<usize> {
        if self.is_terminal() || self.children.len() != 2 {
            return None;
        }
        self.children.iter().position(TrieNode::is_marker)
    }

    /// Finds the child sharing a non-empty prefix with `key`, along with the
    /// length of that prefix.
    pub fn matching_child(&self, key: &K) -> Option<(usize, usize)> {
        self.children.iter().enumerate().find_map(|(idx, child)| {
            let shared = child.fragment.common_prefix_len(key);
            if shared > 0 {
                Some((idx, shared))
            } else {
                None
            }
        })
    }

    /// Returns the node that holds the positions of the key ending exactly at
    /// this node: the node itself, or its epsilon marker.
    pub fn position_holder(&self) -> Option<&TrieNode<K>> {
        if self.is_terminal() {
            return Some(self);
        }
        self.marker_index().map(|idx| &self.children[idx])
    }

    /// Records a new occurrence of the key ending at this node.
    pub fn add_position(&mut self, position: usize) {
        match self.marker_index() {
            Some(idx) => self.children[idx].positions.push(position),
            None => self.positions.push(position),
        }
    }

    /// Moves this node's positions into a fresh epsilon-marker child.
    pub fn demote(&mut self) {
        let marker = TrieNode {
            fragment: self.fragment.empty(),
            positions: mem::take(&mut self.positions),
            children: Vec::new(),
        };
        self.children.push(marker);
    }

    /// Discards the epsilon-marker child and takes its positions back.
    ///
    /// Returns `false` if there was no marker to fold.
    pub fn fold_marker(&mut self) -> bool {
        match self.marker_index() {
            Some(idx) => {
                let marker = self.children.remove(idx);
                self.positions = marker.positions;
                true
            }
            None => false,
        }
    }

    /// Truncates the fragment to its first `at` symbols and pushes the rest,
    /// along with every position and child, down into a new child.
    pub fn split(&mut self, at: usize) {
        let tail = TrieNode {
            fragment: self.fragment.suffix(at),
            positions: mem::take(&mut self.positions),
            children: mem::take(&mut self.children),
        };
        self.fragment = self.fragment.slice(0, at);
        self.children.push(tail);
    }

    /// Absorbs the only child into this node (path compression).
    pub fn compress(&mut self) {
        debug_assert!(!self.is_terminal() && self.children.len() == 1);
        if let Some(child) = self.children.pop() {
            self.fragment = self.fragment.concat(&child.fragment);
            self.positions = child.positions;
            self.children = child.children;
        }
    }

    /// Walks down a path of child indices.
    pub fn descendant(&self, path: &[usize]) -> Option<&TrieNode<K>> {
        path.iter()
            .try_fold(self, |node, &idx| node.children.get(idx))
    }

    pub fn descendant_mut(&mut self, path: &[usize]) -> Option<&mut TrieNode<K>> {
        let mut node = self;
        for &idx in path {
            node = node.children.get_mut(idx)?;
        }
        Some(node)
    }

    /// Shifts every position above `removed` in this subtree down by one.
    ///
    /// Only magnitudes change; each list keeps its order.
    pub fn close_gap(&mut self, removed: usize) {
        for position in self.positions.iter_mut().filter(|p| **p > removed) {
            *position -= 1;
        }
        for child in &mut self.children {
            child.close_gap(removed);
        }
    }

    /// Writes every key stored below this node into `out`, each at its
    /// recorded positions. `prefix` spells the path down to this node.
    pub fn emit(&self, prefix: &K, out: &mut [Option<K>]) {
        for child in &self.children {
            let key = prefix.concat(&child.fragment);
            for &position in &child.positions {
                if let Some(slot) = position.checked_sub(1).and_then(|idx| out.get_mut(idx)) {
                    *slot = Some(key.clone());
                }
            }
            child.emit(&key, out);
        }
    }

    /// Returns the number of positions stored in this subtree
    pub fn subtree_size(&self) -> usize {
        self.positions.len()
            + self
                .children
                .iter()
                .map(TrieNode::subtree_size)
                .sum::<usize>()
    }
}
