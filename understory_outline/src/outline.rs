// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The flattened arena plus id lookup.

use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;

use hashbrown::HashMap;
use hashbrown::hash_map::Entry;

use crate::{FlatNode, TreeNode, flatten};

/// Error returned by [`Outline::validate`] when two nodes share an id.
#[derive(Clone, PartialEq, Eq)]
pub struct DuplicateIdError<K> {
    /// The repeated id.
    pub id: K,
    /// Arena index of the first node carrying `id`; this is the one lookups resolve to.
    pub first: usize,
    /// Arena index of the later node carrying the same id.
    pub duplicate: usize,
}

impl<K: fmt::Debug> fmt::Debug for DuplicateIdError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DuplicateIdError {{ id: {:?}, first: {}, duplicate: {} }}",
            self.id, self.first, self.duplicate
        )
    }
}

impl<K: fmt::Debug> fmt::Display for DuplicateIdError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "node id {:?} appears at rows {} and {}",
            self.id, self.first, self.duplicate
        )
    }
}

impl<K: fmt::Debug> core::error::Error for DuplicateIdError<K> {}

/// A tree flattened into an arena of [`FlatNode`] rows with O(1) id lookup.
///
/// Build one whenever the shape of the input changes; navigation then works
/// purely on arena indices. Parent and sibling queries walk the arena rather
/// than the source nodes.
#[derive(Clone, Debug)]
pub struct Outline<K> {
    nodes: Vec<FlatNode<K>>,
    index: HashMap<K, usize>,
}

impl<K> Default for Outline<K> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Clone + Eq + Hash> Outline<K> {
    /// Flattens `roots` and indexes the result.
    pub fn new(roots: &[TreeNode<K>]) -> Self {
        Self::from_rows(flatten(roots))
    }

    /// Indexes rows produced by [`flatten`].
    ///
    /// If ids repeat, lookups resolve to the first row carrying the id.
    pub fn from_rows(nodes: Vec<FlatNode<K>>) -> Self {
        let mut index = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            index.entry(node.id.clone()).or_insert(i);
        }
        Self { nodes, index }
    }

    /// Checks the unique-id precondition.
    ///
    /// Nothing in the navigation path calls this; it exists for tests and
    /// debug tooling around untrusted data.
    pub fn validate(&self) -> Result<(), DuplicateIdError<K>> {
        let mut seen: HashMap<&K, usize> = HashMap::with_capacity(self.nodes.len());
        for (i, node) in self.nodes.iter().enumerate() {
            match seen.entry(&node.id) {
                Entry::Vacant(entry) => {
                    entry.insert(i);
                }
                Entry::Occupied(entry) => {
                    return Err(DuplicateIdError {
                        id: node.id.clone(),
                        first: *entry.get(),
                        duplicate: i,
                    });
                }
            }
        }
        Ok(())
    }
}

impl<K: Eq + Hash> Outline<K> {
    /// Returns the arena index of `id`.
    #[must_use]
    pub fn index_of(&self, id: &K) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Returns the row for `id`.
    #[must_use]
    pub fn get(&self, id: &K) -> Option<&FlatNode<K>> {
        self.index_of(id).map(|i| &self.nodes[i])
    }

    /// Returns `true` if some row carries `id`.
    #[must_use]
    pub fn contains(&self, id: &K) -> bool {
        self.index.contains_key(id)
    }

    /// Returns the id of the parent of `id`.
    #[must_use]
    pub fn parent_id(&self, id: &K) -> Option<&K> {
        let parent = self.get(id)?.parent?;
        Some(&self.nodes[parent].id)
    }
}

impl<K> Outline<K> {
    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All rows in document order.
    #[must_use]
    pub fn nodes(&self) -> &[FlatNode<K>] {
        &self.nodes
    }

    /// Returns the row at arena index `index`.
    #[must_use]
    pub fn node(&self, index: usize) -> Option<&FlatNode<K>> {
        self.nodes.get(index)
    }

    /// Returns the parent arena index of `index`.
    #[must_use]
    pub fn parent_of(&self, index: usize) -> Option<usize> {
        self.nodes.get(index)?.parent
    }

    /// Iterates the ancestors of `index`, nearest first.
    pub fn ancestors(&self, index: usize) -> Ancestors<'_, K> {
        Ancestors {
            outline: self,
            next: self.parent_of(index),
        }
    }

    /// Returns `true` if `ancestor` is a proper ancestor of `index`.
    #[must_use]
    pub fn is_ancestor(&self, ancestor: usize, index: usize) -> bool {
        self.ancestors(index).any(|a| a == ancestor)
    }

    /// Returns the arena index of the first child of `index`.
    ///
    /// In document order that is always the next row.
    #[must_use]
    pub fn first_child(&self, index: usize) -> Option<usize> {
        self.nodes
            .get(index)
            .filter(|node| node.has_children)
            .map(|_| index + 1)
    }

    /// Iterates the arena indices of `index` and its siblings, in order.
    ///
    /// Yields nothing if `index` is out of range.
    pub fn siblings_of(&self, index: usize) -> impl Iterator<Item = usize> + '_ {
        let (start, depth) = match self.nodes.get(index) {
            Some(node) => (node.parent.map_or(0, |p| p + 1), node.depth),
            None => (self.nodes.len(), 0),
        };
        self.nodes[start..]
            .iter()
            .enumerate()
            // Leaving the parent's subtree means meeting a row shallower than the siblings.
            .take_while(move |(_, node)| node.depth >= depth)
            .filter(move |(_, node)| node.depth == depth)
            .map(move |(offset, _)| start + offset)
    }
}

/// Iterator returned by [`Outline::ancestors`].
#[derive(Clone, Debug)]
pub struct Ancestors<'a, K> {
    outline: &'a Outline<K>,
    next: Option<usize>,
}

impl<K> Iterator for Ancestors<'_, K> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.next?;
        self.next = self.outline.parent_of(current);
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn sample() -> Outline<&'static str> {
        Outline::new(&[
            TreeNode::new("a", "Alpha").with_children([
                TreeNode::new("a1", "One").with_child(TreeNode::new("a1x", "Deep")),
                TreeNode::new("a2", "Two"),
            ]),
            TreeNode::new("b", "Beta"),
        ])
    }

    #[test]
    fn lookup_by_id() {
        let outline = sample();
        assert_eq!(outline.len(), 5);
        assert_eq!(outline.index_of(&"a2"), Some(3));
        assert_eq!(outline.get(&"b").map(|n| n.depth), Some(0));
        assert_eq!(outline.index_of(&"zz"), None);
        assert_eq!(outline.parent_id(&"a1x"), Some(&"a1"));
        assert_eq!(outline.parent_id(&"a"), None);
    }

    #[test]
    fn ancestors_walk_to_the_root() {
        let outline = sample();
        let chain: Vec<usize> = outline.ancestors(2).collect();
        assert_eq!(chain, vec![1, 0]);
        assert!(outline.is_ancestor(0, 2));
        assert!(!outline.is_ancestor(2, 0));
        assert!(!outline.is_ancestor(4, 2));
        assert!(!outline.is_ancestor(2, 2));
    }

    #[test]
    fn siblings_stay_inside_the_parent() {
        let outline = sample();
        let roots: Vec<usize> = outline.siblings_of(4).collect();
        assert_eq!(roots, vec![0, 4]);
        let children: Vec<usize> = outline.siblings_of(3).collect();
        assert_eq!(children, vec![1, 3]);
        assert_eq!(outline.siblings_of(99).count(), 0);
    }

    #[test]
    fn first_child_is_next_row() {
        let outline = sample();
        assert_eq!(outline.first_child(0), Some(1));
        assert_eq!(outline.first_child(3), None);
    }

    #[test]
    fn duplicates_resolve_to_first_and_fail_validation() {
        let outline = Outline::new(&[
            TreeNode::new(1_u32, "x"),
            TreeNode::new(2, "y").with_child(TreeNode::new(1, "z")),
        ]);
        assert_eq!(outline.index_of(&1), Some(0));
        let err = outline.validate().unwrap_err();
        assert_eq!(err.id, 1);
        assert_eq!(err.first, 0);
        assert_eq!(err.duplicate, 2);
        assert!(sample().validate().is_ok());
    }
}
