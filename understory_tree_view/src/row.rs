// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-row render state.

/// Everything a renderer needs to draw one row and keep its accessibility
/// attributes in sync.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowState<'a, K> {
    /// Node id.
    pub id: &'a K,
    /// Display label.
    pub label: &'a str,
    /// Nesting depth, `0` for roots.
    pub depth: usize,
    /// `Some` for parents (their expansion state), `None` for leaves.
    pub expanded: Option<bool>,
    /// Whether the node is selected.
    pub selected: bool,
    /// Whether the node is disabled.
    pub disabled: bool,
    /// Whether the node holds focus.
    pub focused: bool,
    /// Roving tab index: `0` on the focused node, `-1` elsewhere.
    pub tab_index: i32,
}

impl<K> RowState<'_, K> {
    /// ARIA level, one-based.
    #[must_use]
    pub fn level(&self) -> usize {
        self.depth + 1
    }

    /// Returns `true` if the node has children.
    #[must_use]
    pub fn has_children(&self) -> bool {
        self.expanded.is_some()
    }
}
