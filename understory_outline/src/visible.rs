// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Projection of an [`Outline`] onto its currently visible rows.

use alloc::vec::Vec;
use core::hash::Hash;

use crate::{ExpansionSet, Outline};

/// The visible subsequence of an [`Outline`] under an [`ExpansionSet`].
///
/// A row is visible iff every ancestor is expanded. `VisibleRows` stores the
/// arena indices of those rows in document order plus the reverse mapping
/// from arena index to visible position, so both directions are O(1).
///
/// It is derived state: recompute it whenever the outline or the expansion
/// set changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibleRows {
    rows: Vec<usize>,
    positions: Vec<Option<usize>>,
}

impl VisibleRows {
    /// Creates an empty projection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            rows: Vec::new(),
            positions: Vec::new(),
        }
    }

    /// Computes the projection of `outline` under `expanded`.
    pub fn compute<K: Eq + Hash>(outline: &Outline<K>, expanded: &ExpansionSet<K>) -> Self {
        let mut rows = Self::new();
        rows.recompute(outline, expanded);
        rows
    }

    /// Recomputes in place, reusing allocations.
    ///
    /// This is a single pass over the arena. Once a visible row turns out to be
    /// collapsed, every following row deeper than it belongs to its subtree and
    /// is skipped without consulting the expansion set.
    pub fn recompute<K: Eq + Hash>(&mut self, outline: &Outline<K>, expanded: &ExpansionSet<K>) {
        self.rows.clear();
        self.positions.clear();
        self.positions.resize(outline.len(), None);

        let mut hidden_below: Option<usize> = None;
        for (index, node) in outline.nodes().iter().enumerate() {
            if let Some(depth) = hidden_below {
                if node.depth > depth {
                    continue;
                }
                hidden_below = None;
            }
            self.positions[index] = Some(self.rows.len());
            self.rows.push(index);
            if node.has_children && !expanded.is_expanded(&node.id) {
                hidden_below = Some(node.depth);
            }
        }
    }

    /// Number of visible rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if nothing is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Arena indices of the visible rows, in order.
    #[must_use]
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Arena index of the row at visible `position`.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<usize> {
        self.rows.get(position).copied()
    }

    /// Visible position of arena row `index`, or `None` if it is hidden.
    #[must_use]
    pub fn position_of(&self, index: usize) -> Option<usize> {
        self.positions.get(index).copied().flatten()
    }

    /// Returns `true` if arena row `index` is visible.
    #[must_use]
    pub fn is_visible(&self, index: usize) -> bool {
        self.position_of(index).is_some()
    }

    /// Arena index of the first visible row.
    #[must_use]
    pub fn first(&self) -> Option<usize> {
        self.rows.first().copied()
    }

    /// Arena index of the last visible row.
    #[must_use]
    pub fn last(&self) -> Option<usize> {
        self.rows.last().copied()
    }
}
