// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Outline: visible-row projection and expansion state for trees.
//!
//! Keyboard navigation over a tree wants O(1) neighbor lookup, not pointer
//! chasing through nested children. This crate turns caller-owned
//! [`TreeNode`] data into an arena:
//!
//! - [`flatten`] walks the input once, in document (pre-order) order, and
//!   produces one [`FlatNode`] per node with its depth, parent index, and
//!   whether it has children.
//! - [`Outline`] owns those rows plus an id → index map and answers ancestry
//!   and sibling questions by walking the arena.
//! - [`ExpansionSet`] records which ids are expanded.
//! - [`VisibleRows`] is the visible subsequence under an expansion set, with
//!   a reverse map from arena index to visible position.
//!
//! The crate holds no policy: it does not decide which nodes may expand, and
//! it does not track focus or selection. Those live one layer up, for example
//! in `understory_tree_view`.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_outline::{ExpansionSet, Outline, TreeNode, VisibleRows};
//!
//! let outline = Outline::new(&[
//!     TreeNode::new("a", "Alpha").with_children([
//!         TreeNode::new("a1", "One"),
//!         TreeNode::new("a2", "Two"),
//!     ]),
//!     TreeNode::new("b", "Beta"),
//! ]);
//!
//! let mut expanded = ExpansionSet::new();
//! let rows = VisibleRows::compute(&outline, &expanded);
//! assert_eq!(rows.len(), 2);
//!
//! expanded.expand("a");
//! let rows = VisibleRows::compute(&outline, &expanded);
//! let ids: Vec<_> = rows
//!     .rows()
//!     .iter()
//!     .map(|&i| outline.nodes()[i].id)
//!     .collect();
//! assert_eq!(ids, ["a", "a1", "a2", "b"]);
//! ```
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`TreeNode`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod expansion;
mod flatten;
mod node;
mod outline;
mod visible;

pub use expansion::ExpansionSet;
pub use flatten::{FlatNode, flatten};
pub use node::TreeNode;
pub use outline::{Ancestors, DuplicateIdError, Outline};
pub use visible::VisibleRows;
