// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time options for [`TreeView`](crate::TreeView).

use alloc::vec::Vec;

/// Default type-ahead reset delay, in milliseconds.
pub const DEFAULT_TYPE_AHEAD_TIMEOUT: u64 = 500;

/// Options for building a [`TreeView`](crate::TreeView).
///
/// `controlled_*` fields put the matching state under caller ownership from
/// the start; see [`TreeView::set_controlled_selected`](crate::TreeView::set_controlled_selected).
#[derive(Clone, Debug)]
pub struct TreeViewConfig<K> {
    /// Allow more than one selected node.
    pub multiselectable: bool,
    /// Delay after the last keystroke before the type-ahead buffer resets.
    pub type_ahead_timeout: u64,
    /// Ids expanded at construction (uncontrolled).
    pub initial_expanded: Vec<K>,
    /// Ids selected at construction (uncontrolled). Unknown and disabled ids are dropped.
    pub initial_selected: Vec<K>,
    /// Preferred initial focus. Ignored if the id is unknown or hidden.
    pub initial_focus: Option<K>,
    /// Caller-owned expansion state.
    pub controlled_expanded: Option<Vec<K>>,
    /// Caller-owned selection state.
    pub controlled_selected: Option<Vec<K>>,
}

impl<K> Default for TreeViewConfig<K> {
    fn default() -> Self {
        Self {
            multiselectable: false,
            type_ahead_timeout: DEFAULT_TYPE_AHEAD_TIMEOUT,
            initial_expanded: Vec::new(),
            initial_selected: Vec::new(),
            initial_focus: None,
            controlled_expanded: None,
            controlled_selected: None,
        }
    }
}

impl<K> TreeViewConfig<K> {
    /// Single-select, everything collapsed, default timeout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets multi-select mode.
    #[must_use]
    pub fn multiselectable(mut self, multiselectable: bool) -> Self {
        self.multiselectable = multiselectable;
        self
    }

    /// Sets the type-ahead reset delay in milliseconds.
    #[must_use]
    pub fn with_type_ahead_timeout(mut self, timeout: u64) -> Self {
        self.type_ahead_timeout = timeout;
        self
    }

    /// Sets the initially expanded ids.
    #[must_use]
    pub fn with_expanded(mut self, ids: impl IntoIterator<Item = K>) -> Self {
        self.initial_expanded = ids.into_iter().collect();
        self
    }

    /// Sets the initially selected ids.
    #[must_use]
    pub fn with_selected(mut self, ids: impl IntoIterator<Item = K>) -> Self {
        self.initial_selected = ids.into_iter().collect();
        self
    }

    /// Sets the preferred initial focus.
    #[must_use]
    pub fn with_focus(mut self, id: K) -> Self {
        self.initial_focus = Some(id);
        self
    }

    /// Hands expansion state to the caller.
    #[must_use]
    pub fn controlled_expanded(mut self, ids: impl IntoIterator<Item = K>) -> Self {
        self.controlled_expanded = Some(ids.into_iter().collect());
        self
    }

    /// Hands selection state to the caller.
    #[must_use]
    pub fn controlled_selected(mut self, ids: impl IntoIterator<Item = K>) -> Self {
        self.controlled_selected = Some(ids.into_iter().collect());
        self
    }
}
