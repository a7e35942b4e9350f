// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pre-order flattening of [`TreeNode`] input.

use alloc::string::String;
use alloc::vec::Vec;

use crate::TreeNode;

/// One row of a flattened tree.
///
/// Rows live in an arena ordered like the document (pre-order), so a node's
/// descendants always occupy the contiguous run of rows right after it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlatNode<K> {
    /// Id of the source node.
    pub id: K,
    /// Label of the source node.
    pub label: String,
    /// Number of ancestors; roots are at depth 0.
    pub depth: usize,
    /// Arena index of the parent row, `None` for roots.
    pub parent: Option<usize>,
    /// Whether the source node has children.
    pub has_children: bool,
    /// Whether the source node is disabled.
    pub disabled: bool,
    folded_label: String,
}

impl<K> FlatNode<K> {
    /// The label lowercased once at flatten time, for case-insensitive matching.
    #[must_use]
    pub fn folded_label(&self) -> &str {
        &self.folded_label
    }
}

/// Flattens `roots` into rows in document order.
///
/// The walk is iterative, so deep trees do not grow the call stack.
pub fn flatten<K: Clone>(roots: &[TreeNode<K>]) -> Vec<FlatNode<K>> {
    let mut rows = Vec::new();
    let mut stack: Vec<(&TreeNode<K>, usize, Option<usize>)> =
        roots.iter().rev().map(|node| (node, 0, None)).collect();

    while let Some((node, depth, parent)) = stack.pop() {
        let index = rows.len();
        rows.push(FlatNode {
            id: node.id.clone(),
            label: node.label.clone(),
            depth,
            parent,
            has_children: node.has_children(),
            disabled: node.disabled,
            folded_label: node.label.to_lowercase(),
        });
        stack.extend(
            node.children
                .iter()
                .rev()
                .map(|child| (child, depth + 1, Some(index))),
        );
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn empty_input_flattens_to_nothing() {
        assert!(flatten::<u32>(&[]).is_empty());
    }

    #[test]
    fn rows_follow_document_order() {
        let roots = vec![
            TreeNode::new(1, "A").with_children([
                TreeNode::new(2, "A1").with_child(TreeNode::new(3, "A1a")),
                TreeNode::new(4, "A2"),
            ]),
            TreeNode::new(5, "B"),
        ];
        let rows = flatten(&roots);

        let ids: Vec<u32> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);

        let depths: Vec<usize> = rows.iter().map(|r| r.depth).collect();
        assert_eq!(depths, vec![0, 1, 2, 1, 0]);

        let parents: Vec<Option<usize>> = rows.iter().map(|r| r.parent).collect();
        assert_eq!(parents, vec![None, Some(0), Some(1), Some(0), None]);

        assert!(rows[0].has_children);
        assert!(!rows[4].has_children);
    }

    #[test]
    fn folded_label_is_lowercase() {
        let rows = flatten(&[TreeNode::new(1, "MiXeD Case")]);
        assert_eq!(rows[0].folded_label(), "mixed case");
        assert_eq!(rows[0].label, "MiXeD Case");
    }
}
