// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caller-owned input nodes.

use alloc::string::String;
use alloc::vec::Vec;

/// One node of hierarchical input data.
///
/// `TreeNode` is plain data owned by the caller. Ids must be unique across the
/// whole tree; this is a precondition of every consumer in Understory, not a
/// checked invariant. Use [`Outline::validate`](crate::Outline::validate) in
/// debug tooling if the source of your data cannot guarantee it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeNode<K> {
    /// Stable identifier, unique across the tree.
    pub id: K,
    /// Display label; also the text matched by type-ahead.
    pub label: String,
    /// Ordered children. Empty for leaves.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    pub children: Vec<Self>,
    /// Disabled nodes can be focused but never selected, expanded, or activated.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "core::ops::Not::not")
    )]
    pub disabled: bool,
}

impl<K> TreeNode<K> {
    /// Creates an enabled leaf.
    pub fn new(id: K, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            children: Vec::new(),
            disabled: false,
        }
    }

    /// Replaces the children of this node.
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children = children.into_iter().collect();
        self
    }

    /// Appends one child.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Sets the disabled flag.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Returns `true` if this node has at least one child.
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}
