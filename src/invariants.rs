//! Structural self-checks for the positional trie.
//!
//! A violation found here is a bug in the trie, never a consequence of caller
//! input. The checks walk every node, so they are meant for tests and debugging.

use crate::key::SequenceKey;
use crate::node::TrieNode;
use crate::trie::PositionalTrie;
use crate::Error;

impl<K: SequenceKey> PositionalTrie<K> {
    /// Verifies the structural invariants of the trie, reporting the first
    /// violation found.
    ///
    /// Checked properties:
    ///
    /// - the stored positions are exactly `1..=len()`, each stored once;
    /// - positions within a node are strictly ascending;
    /// - no node below the root has exactly one child;
    /// - epsilon markers are terminal leaves whose parent is non-terminal with
    ///   exactly two children;
    /// - every leaf is terminal;
    /// - no two siblings share a non-empty prefix.
    ///
    /// # Examples
    ///
    /// ```
    /// use positional_radix::PositionalTrie;
    ///
    /// let mut trie = PositionalTrie::<String>::new();
    /// trie.insert("alpha");
    /// trie.insert("alphabet");
    /// trie.remove("alpha");
    ///
    /// assert_eq!(trie.check_invariants(), Ok(()));
    /// ```
    pub fn check_invariants(&self) -> Result<(), Error> {
        let root = match &self.root {
            Some(root) => root,
            None if self.size == 0 => return Ok(()),
            None => {
                return Err(violation(format!(
                    "empty trie reports {} occurrences",
                    self.size
                )))
            }
        };

        if root.is_terminal() {
            return Err(violation("root holds positions".to_string()));
        }
        if root.is_leaf() {
            return Err(violation("root is kept without children".to_string()));
        }
        check_siblings(root, 0)?;

        let mut seen = vec![false; self.size];
        for child in &root.children {
            check_node(child, 1, &mut seen)?;
        }
        match seen.iter().position(|found| !found) {
            Some(gap) => Err(violation(format!("position {} is not stored", gap + 1))),
            None => Ok(()),
        }
    }
}

fn violation(msg: String) -> Error {
    Error::InvariantViolation(msg)
}

fn check_node<K: SequenceKey>(
    node: &TrieNode<K>,
    depth: usize,
    seen: &mut [bool],
) -> Result<(), Error> {
    if node.positions.windows(2).any(|pair| pair[0] >= pair[1]) {
        return Err(violation(format!(
            "positions out of order at depth {}: {:?}",
            depth, node.positions
        )));
    }
    for &position in &node.positions {
        let slot = position
            .checked_sub(1)
            .and_then(|idx| seen.get_mut(idx))
            .ok_or_else(|| violation(format!("position {} is out of range", position)))?;
        if *slot {
            return Err(violation(format!("position {} is stored twice", position)));
        }
        *slot = true;
    }

    if node.is_leaf() && !node.is_terminal() {
        return Err(violation(format!("dead leaf at depth {}", depth)));
    }
    if node.children.len() == 1 {
        let what = if node.is_terminal() {
            "terminal node"
        } else {
            "uncompressed node"
        };
        return Err(violation(format!(
            "{} with a single child at depth {}",
            what, depth
        )));
    }

    let markers = node.children.iter().filter(|child| child.is_marker()).count();
    if markers > 0 && (markers > 1 || node.is_terminal() || node.children.len() != 2) {
        return Err(violation(format!("misplaced epsilon marker at depth {}", depth + 1)));
    }
    if node.is_marker() && !node.is_leaf() {
        return Err(violation(format!("epsilon marker with children at depth {}", depth)));
    }

    check_siblings(node, depth)?;
    for child in &node.children {
        check_node(child, depth + 1, seen)?;
    }
    Ok(())
}

fn check_siblings<K: SequenceKey>(node: &TrieNode<K>, depth: usize) -> Result<(), Error> {
    for (idx, left) in node.children.iter().enumerate() {
        for right in &node.children[idx + 1..] {
            if left.fragment.common_prefix_len(&right.fragment) > 0 {
                return Err(violation(format!(
                    "siblings share a prefix at depth {}",
                    depth + 1
                )));
            }
        }
    }
    Ok(())
}
