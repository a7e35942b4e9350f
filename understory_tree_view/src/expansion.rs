// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Expansion controller.

use alloc::vec::Vec;
use core::hash::Hash;

use crate::{TreeView, TreeViewHost};

impl<K: Clone + Eq + Hash> TreeView<K> {
    /// Known, enabled, and has children.
    fn is_expandable(&self, id: &K) -> bool {
        self.outline
            .get(id)
            .is_some_and(|node| node.has_children && !node.disabled)
    }

    /// Expands `id`.
    ///
    /// No-op for unknown ids, leaves, disabled nodes, and nodes already expanded.
    pub fn expand(&mut self, id: &K, mut host: impl TreeViewHost<K>) -> bool {
        let before = self.focused;
        let changed = self.expand_inner(id, &mut host);
        self.flush_focus(before, &mut host);
        changed
    }

    pub(crate) fn expand_inner(&mut self, id: &K, host: &mut impl TreeViewHost<K>) -> bool {
        if !self.is_expandable(id) || self.expanded.is_expanded(id) {
            return false;
        }
        self.commit_expansion(host, |expanded| expanded.expand(id.clone()))
    }

    /// Collapses `id`.
    ///
    /// No-op for unknown ids, leaves, disabled nodes, and nodes already
    /// collapsed. If focus is inside the collapsed subtree it moves to `id`.
    pub fn collapse(&mut self, id: &K, mut host: impl TreeViewHost<K>) -> bool {
        let before = self.focused;
        let changed = self.collapse_inner(id, &mut host);
        self.flush_focus(before, &mut host);
        changed
    }

    pub(crate) fn collapse_inner(&mut self, id: &K, host: &mut impl TreeViewHost<K>) -> bool {
        if !self.is_expandable(id) || !self.expanded.is_expanded(id) {
            return false;
        }
        // Committing recomputes visibility, and focus repair puts a hidden
        // cursor on its nearest visible ancestor, which is `id` when `id` is
        // visible. In controlled mode that happens when the caller confirms.
        self.commit_expansion(host, |expanded| expanded.collapse(id))
    }

    /// Flips the expansion of `id`, as a disclosure toggle would.
    pub fn toggle_expanded(&mut self, id: &K, host: impl TreeViewHost<K>) -> bool {
        if self.expanded.is_expanded(id) {
            self.collapse(id, host)
        } else {
            self.expand(id, host)
        }
    }

    /// Expands every enabled parent among the siblings of `id`, `id` included.
    ///
    /// All of them are committed and reported as one change.
    pub fn expand_siblings_at_level(&mut self, id: &K, mut host: impl TreeViewHost<K>) -> bool {
        let before = self.focused;
        let changed = self.expand_siblings_inner(id, &mut host);
        self.flush_focus(before, &mut host);
        changed
    }

    pub(crate) fn expand_siblings_inner(
        &mut self,
        id: &K,
        host: &mut impl TreeViewHost<K>,
    ) -> bool {
        let Some(index) = self.outline.index_of(id) else {
            return false;
        };
        let targets: Vec<K> = self
            .outline
            .siblings_of(index)
            .map(|i| &self.outline.nodes()[i])
            .filter(|node| node.has_children && !node.disabled)
            .filter(|node| !self.expanded.is_expanded(&node.id))
            .map(|node| node.id.clone())
            .collect();
        if targets.is_empty() {
            return false;
        }
        log::trace!("tree view: expanding {} siblings", targets.len());
        self.commit_expansion(host, |expanded| {
            expanded.extend(targets);
            true
        })
    }
}
