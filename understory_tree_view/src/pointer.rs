// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer entry point.

use core::hash::Hash;

use ui_events::keyboard::Modifiers;

use crate::{TreeView, TreeViewHost};

impl<K: Clone + Eq + Hash> TreeView<K> {
    /// Handles a primary click on the row for `id`.
    ///
    /// Focus always moves to the row, disabled or not. For an enabled row:
    /// - multi-select with Shift extends the selection from the anchor;
    /// - other multi-select clicks toggle the row, make it the anchor, and activate it;
    /// - single-select clicks select the row and activate it.
    ///
    /// Ctrl and Meta behave like a plain click. Clicks on unknown or hidden
    /// rows are ignored.
    pub fn click(&mut self, id: &K, modifiers: Modifiers, mut host: impl TreeViewHost<K>) {
        let Some(index) = self.visible_index_of(id) else {
            return;
        };
        let before = self.focused;
        let multi = self.is_multiselectable();
        let extend = multi && modifiers.contains(Modifiers::SHIFT);
        self.set_focus(index);
        if !extend && multi {
            self.selection.set_anchor(id.clone());
        }

        if self.is_enabled(id) {
            if extend {
                let anchor = self.selection.anchor().cloned().unwrap_or_else(|| id.clone());
                self.extend_range_inner(&anchor, id, &mut host);
            } else {
                if multi {
                    self.toggle_inner(id, &mut host);
                } else {
                    self.replace_with_single_inner(id, &mut host);
                }
                host.on_activate(id);
            }
        }
        self.flush_focus(before, &mut host);
    }
}
