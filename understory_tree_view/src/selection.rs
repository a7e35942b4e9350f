// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection controller.
//!
//! Focus movement never changes the selection; only these explicit commits do.

use alloc::vec::Vec;
use core::hash::Hash;

use crate::{TreeView, TreeViewHost};

impl<K: Clone + Eq + Hash> TreeView<K> {
    /// Returns `true` if `id` exists and is not disabled.
    pub(crate) fn is_enabled(&self, id: &K) -> bool {
        self.outline.get(id).is_some_and(|node| !node.disabled)
    }

    /// Toggles `id`: flips membership in multi-select mode, replaces the
    /// selection in single-select mode.
    ///
    /// No-op for unknown and disabled ids. The anchor is not touched.
    pub fn toggle_selected(&mut self, id: &K, mut host: impl TreeViewHost<K>) -> bool {
        self.toggle_inner(id, &mut host)
    }

    pub(crate) fn toggle_inner(&mut self, id: &K, host: &mut impl TreeViewHost<K>) -> bool {
        if !self.is_enabled(id) {
            return false;
        }
        self.commit_selection(host, |selection| selection.toggle(id.clone()))
    }

    /// Makes `id` the only selected node. No-op for unknown and disabled ids.
    pub fn replace_with_single(&mut self, id: &K, mut host: impl TreeViewHost<K>) -> bool {
        self.replace_with_single_inner(id, &mut host)
    }

    pub(crate) fn replace_with_single_inner(
        &mut self,
        id: &K,
        host: &mut impl TreeViewHost<K>,
    ) -> bool {
        if !self.is_enabled(id) {
            return false;
        }
        self.commit_selection(host, |selection| selection.select_only(id.clone()))
    }

    /// Adds every enabled visible node between `anchor` and `target`, inclusive.
    ///
    /// The range is measured over the current visible rows and is never
    /// subtracted from the selection. If `anchor` is not visible the range is
    /// `target` alone. No-op in single-select mode or if `target` is not
    /// visible.
    pub fn extend_range(&mut self, anchor: &K, target: &K, mut host: impl TreeViewHost<K>) -> bool {
        self.extend_range_inner(anchor, target, &mut host)
    }

    pub(crate) fn extend_range_inner(
        &mut self,
        anchor: &K,
        target: &K,
        host: &mut impl TreeViewHost<K>,
    ) -> bool {
        if !self.is_multiselectable() {
            return false;
        }
        let Some(end) = self
            .outline
            .index_of(target)
            .and_then(|i| self.visible.position_of(i))
        else {
            return false;
        };
        let start = self
            .outline
            .index_of(anchor)
            .and_then(|i| self.visible.position_of(i))
            .unwrap_or(end);
        let (low, high) = (start.min(end), start.max(end));
        let range: Vec<K> = self.visible.rows()[low..=high]
            .iter()
            .map(|&i| &self.outline.nodes()[i])
            .filter(|node| !node.disabled)
            .map(|node| node.id.clone())
            .collect();
        log::trace!("tree view: extending selection over rows {low}..={high}");
        self.commit_selection(host, |selection| selection.extend_with_hashed(range))
    }

    /// Selects exactly the enabled visible nodes. No-op in single-select mode.
    pub fn select_all_visible(&mut self, mut host: impl TreeViewHost<K>) -> bool {
        self.select_all_inner(&mut host)
    }

    pub(crate) fn select_all_inner(&mut self, host: &mut impl TreeViewHost<K>) -> bool {
        if !self.is_multiselectable() {
            return false;
        }
        let all: Vec<K> = self
            .visible
            .rows()
            .iter()
            .map(|&i| &self.outline.nodes()[i])
            .filter(|node| !node.disabled)
            .map(|node| node.id.clone())
            .collect();
        self.commit_selection(host, |selection| selection.replace_with_unique(all))
    }
}
