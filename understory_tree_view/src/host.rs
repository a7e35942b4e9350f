// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam between the engine and the rendering layer.

/// Callbacks the engine invokes while it handles input.
///
/// Every method has a no-op default, and `()` implements the trait for callers
/// that only want to drive the model.
///
/// Change notifications fire synchronously at the point each change is
/// committed, in both controlled and uncontrolled mode. Id sequences are in
/// document order. [`focus_element_for`](Self::focus_element_for) fires last,
/// once per changed focus, after focus, selection, and expansion for the event
/// are all committed, so the renderer's roving `tabindex` is already correct
/// when native focus moves.
///
/// Panics raised by a host propagate to the caller of the engine.
pub trait TreeViewHost<K> {
    /// The selected ids changed (or would change, in controlled mode).
    fn on_selection_change(&mut self, _ids: &[K]) {}

    /// The expanded ids changed (or would change, in controlled mode).
    fn on_expanded_change(&mut self, _ids: &[K]) {}

    /// A node was activated with Enter, a single-select Space, or a click.
    fn on_activate(&mut self, _id: &K) {}

    /// Move native input focus to the element representing `id`.
    fn focus_element_for(&mut self, _id: &K) {}
}

impl<K> TreeViewHost<K> for () {}

impl<K, H: TreeViewHost<K> + ?Sized> TreeViewHost<K> for &mut H {
    fn on_selection_change(&mut self, ids: &[K]) {
        (**self).on_selection_change(ids);
    }

    fn on_expanded_change(&mut self, ids: &[K]) {
        (**self).on_expanded_change(ids);
    }

    fn on_activate(&mut self, id: &K) {
        (**self).on_activate(id);
    }

    fn focus_element_for(&mut self, id: &K) {
        (**self).focus_element_for(id);
    }
}
