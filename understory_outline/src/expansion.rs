// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The set of expanded node ids.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashSet;

use crate::Outline;

/// Ids of the nodes that are currently expanded.
///
/// The set is keyed by id rather than by arena index so it survives a rebuild
/// of the [`Outline`]. Membership is only meaningful for ids whose row has
/// children; deciding which ids may be inserted is the caller's policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpansionSet<K: Eq + Hash> {
    ids: HashSet<K>,
}

impl<K: Eq + Hash> Default for ExpansionSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash> ExpansionSet<K> {
    /// Creates an empty set: every node collapsed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ids: HashSet::new(),
        }
    }

    /// Returns `true` if `id` is expanded.
    #[must_use]
    pub fn is_expanded(&self, id: &K) -> bool {
        self.ids.contains(id)
    }

    /// Marks `id` expanded. Returns `true` if it was collapsed before.
    pub fn expand(&mut self, id: K) -> bool {
        self.ids.insert(id)
    }

    /// Marks `id` collapsed. Returns `true` if it was expanded before.
    pub fn collapse(&mut self, id: &K) -> bool {
        self.ids.remove(id)
    }

    /// Number of expanded ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if nothing is expanded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Collapses everything.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Iterates expanded ids in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &K> + '_ {
        self.ids.iter()
    }

    /// Keeps only the ids for which `keep` returns `true`.
    pub fn retain(&mut self, mut keep: impl FnMut(&K) -> bool) {
        self.ids.retain(|id| keep(id));
    }

    /// Returns every expanded id: those present in `outline` in document
    /// order, followed by ids the outline does not know in arbitrary order.
    pub fn ordered_ids(&self, outline: &Outline<K>) -> Vec<K>
    where
        K: Clone,
    {
        let mut ordered: Vec<K> = outline
            .nodes()
            .iter()
            .filter(|node| self.ids.contains(&node.id))
            .map(|node| node.id.clone())
            .collect();
        ordered.extend(
            self.ids
                .iter()
                .filter(|id| !outline.contains(id))
                .cloned(),
        );
        ordered
    }
}

impl<K: Eq + Hash> FromIterator<K> for ExpansionSet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl<K: Eq + Hash> Extend<K> for ExpansionSet<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        self.ids.extend(iter);
    }
}
