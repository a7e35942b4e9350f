// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`TreeView`] state machine: model, focus cursor, and commit plumbing.

use alloc::vec::Vec;
use core::hash::Hash;

use understory_outline::{ExpansionSet, Outline, TreeNode, VisibleRows};
use understory_selection::{Selection, SelectionMode};
use understory_timing::TimerToken;

use crate::{RowState, TreeViewConfig, TreeViewHost, TypeAhead};

/// A headless tree view.
///
/// `TreeView` owns the flattened tree, the expansion and selection sets, the
/// focused node, and the type-ahead matcher. It renders nothing; a host reads
/// [`TreeView::rows`] to draw and feeds input back through
/// [`TreeView::handle_key`], [`TreeView::click`], or the programmatic
/// operations. Each of those takes a [`TreeViewHost`] that receives change
/// notifications and the deferred native-focus request.
///
/// Invariants maintained after every public call:
/// - Unless the tree is empty, exactly one node is focused and it is visible.
/// - In single-select mode at most one node is selected.
/// - Disabled nodes are never added to the selection, expanded, collapsed, or
///   activated by an input. They can still be focused.
///
/// Ids must be unique across the tree. Duplicates are not detected; lookups
/// resolve to the first node carrying the id.
#[derive(Clone, Debug)]
pub struct TreeView<K: Clone + Eq + Hash> {
    pub(crate) outline: Outline<K>,
    pub(crate) visible: VisibleRows,
    pub(crate) expanded: ExpansionSet<K>,
    pub(crate) selection: Selection<K>,
    /// Arena index of the focused row.
    pub(crate) focused: Option<usize>,
    pub(crate) controlled_expanded: bool,
    pub(crate) controlled_selected: bool,
    pub(crate) type_ahead: TypeAhead,
}

impl<K: Clone + Eq + Hash> TreeView<K> {
    /// Builds a tree view over `roots`.
    pub fn new(roots: &[TreeNode<K>], config: TreeViewConfig<K>) -> Self {
        let outline = Outline::new(roots);
        let controlled_expanded = config.controlled_expanded.is_some();
        let controlled_selected = config.controlled_selected.is_some();

        let expanded: ExpansionSet<K> = config
            .controlled_expanded
            .unwrap_or(config.initial_expanded)
            .into_iter()
            .collect();

        let mode = if config.multiselectable {
            SelectionMode::Multiple
        } else {
            SelectionMode::Single
        };
        let mut selection = Selection::with_mode(mode);
        selection.replace_with(
            config
                .controlled_selected
                .unwrap_or(config.initial_selected)
                .into_iter()
                .filter(|id| is_selectable(&outline, id)),
        );

        let visible = VisibleRows::compute(&outline, &expanded);
        let mut view = Self {
            outline,
            visible,
            expanded,
            selection,
            focused: None,
            controlled_expanded,
            controlled_selected,
            type_ahead: TypeAhead::new(config.type_ahead_timeout),
        };
        view.focused = view.initial_focus(config.initial_focus.as_ref());
        if let Some(id) = view.focused_id().cloned() {
            view.selection.set_anchor(id);
        }
        view
    }

    fn initial_focus(&self, preferred: Option<&K>) -> Option<usize> {
        preferred
            .and_then(|id| self.visible_index_of(id))
            .or_else(|| {
                self.visible
                    .rows()
                    .iter()
                    .copied()
                    .find(|&i| self.selection.contains(&self.outline.nodes()[i].id))
            })
            .or_else(|| self.visible.first())
    }

    // -------------------------------------------------------------------------
    // Model access
    // -------------------------------------------------------------------------

    /// The flattened tree.
    #[must_use]
    pub fn outline(&self) -> &Outline<K> {
        &self.outline
    }

    /// The currently visible rows.
    #[must_use]
    pub fn visible_rows(&self) -> &VisibleRows {
        &self.visible
    }

    /// Ids of the visible rows, in order.
    pub fn visible_ids(&self) -> impl Iterator<Item = &K> + '_ {
        self.visible
            .rows()
            .iter()
            .map(|&i| &self.outline.nodes()[i].id)
    }

    /// Render state of every visible row, in order.
    pub fn rows(&self) -> impl Iterator<Item = RowState<'_, K>> + '_ {
        self.visible.rows().iter().map(|&i| self.row_state(i))
    }

    /// Render state of the row for `id`, visible or not.
    #[must_use]
    pub fn row(&self, id: &K) -> Option<RowState<'_, K>> {
        self.outline.index_of(id).map(|i| self.row_state(i))
    }

    fn row_state(&self, index: usize) -> RowState<'_, K> {
        let node = &self.outline.nodes()[index];
        let focused = self.focused == Some(index);
        RowState {
            id: &node.id,
            label: &node.label,
            depth: node.depth,
            expanded: node
                .has_children
                .then(|| self.expanded.is_expanded(&node.id)),
            selected: self.selection.contains(&node.id),
            disabled: node.disabled,
            focused,
            tab_index: if focused { 0 } else { -1 },
        }
    }

    /// The roving tab index for `id`: `0` for the focused node, `-1` otherwise.
    #[must_use]
    pub fn tab_index(&self, id: &K) -> i32 {
        if self.focused_id() == Some(id) { 0 } else { -1 }
    }

    /// Returns `true` if more than one node may be selected.
    #[must_use]
    pub fn is_multiselectable(&self) -> bool {
        self.selection.mode() == SelectionMode::Multiple
    }

    /// Returns `true` if `id` is expanded.
    #[must_use]
    pub fn is_expanded(&self, id: &K) -> bool {
        self.expanded.is_expanded(id)
    }

    /// Returns `true` if `id` is selected.
    #[must_use]
    pub fn is_selected(&self, id: &K) -> bool {
        self.selection.contains(id)
    }

    /// Returns `true` if `id` is currently visible.
    #[must_use]
    pub fn is_visible(&self, id: &K) -> bool {
        self.visible_index_of(id).is_some()
    }

    /// Expanded ids in document order, then any controlled ids not in the tree.
    #[must_use]
    pub fn expanded_ids(&self) -> Vec<K> {
        self.expanded.ordered_ids(&self.outline)
    }

    /// Selected ids in document order.
    #[must_use]
    pub fn selected_ids(&self) -> Vec<K> {
        self.ordered_selection(&self.selection)
    }

    /// The selection, including its anchor.
    #[must_use]
    pub fn selection(&self) -> &Selection<K> {
        &self.selection
    }

    /// The range anchor.
    #[must_use]
    pub fn anchor(&self) -> Option<&K> {
        self.selection.anchor()
    }

    /// The type-ahead matcher.
    #[must_use]
    pub fn type_ahead(&self) -> &TypeAhead {
        &self.type_ahead
    }

    /// The focused id. `None` only when the tree is empty.
    #[must_use]
    pub fn focused_id(&self) -> Option<&K> {
        self.focused.map(|i| &self.outline.nodes()[i].id)
    }

    /// The visible position of the focused node.
    #[must_use]
    pub fn focused_position(&self) -> Option<usize> {
        self.focused.and_then(|i| self.visible.position_of(i))
    }

    /// Arena index of `id` if it is visible.
    pub(crate) fn visible_index_of(&self, id: &K) -> Option<usize> {
        self.outline
            .index_of(id)
            .filter(|&i| self.visible.is_visible(i))
    }

    // -------------------------------------------------------------------------
    // Focus cursor
    // -------------------------------------------------------------------------

    /// Moves focus to `id`. No-op if `id` is unknown or hidden.
    pub fn focus(&mut self, id: &K, mut host: impl TreeViewHost<K>) {
        let before = self.focused;
        if let Some(index) = self.visible_index_of(id) {
            self.move_focus(index);
        }
        self.flush_focus(before, &mut host);
    }

    /// Moves focus to visible `position`, clamped to the last row.
    pub fn focus_index(&mut self, position: usize, mut host: impl TreeViewHost<K>) {
        let before = self.focused;
        let last = self.visible.len().saturating_sub(1);
        if let Some(index) = self.visible.get(position.min(last)) {
            self.move_focus(index);
        }
        self.flush_focus(before, &mut host);
    }

    /// Moves focus one visible row down. No-op on the last row.
    pub fn focus_next(&mut self, mut host: impl TreeViewHost<K>) {
        let before = self.focused;
        if let Some(index) = self.step_target(1) {
            self.move_focus(index);
        }
        self.flush_focus(before, &mut host);
    }

    /// Moves focus one visible row up. No-op on the first row.
    pub fn focus_previous(&mut self, mut host: impl TreeViewHost<K>) {
        let before = self.focused;
        if let Some(index) = self.step_target(-1) {
            self.move_focus(index);
        }
        self.flush_focus(before, &mut host);
    }

    /// Moves focus to the first visible row.
    pub fn focus_first(&mut self, mut host: impl TreeViewHost<K>) {
        let before = self.focused;
        if let Some(index) = self.visible.first() {
            self.move_focus(index);
        }
        self.flush_focus(before, &mut host);
    }

    /// Moves focus to the last visible row.
    pub fn focus_last(&mut self, mut host: impl TreeViewHost<K>) {
        let before = self.focused;
        if let Some(index) = self.visible.last() {
            self.move_focus(index);
        }
        self.flush_focus(before, &mut host);
    }

    /// Arena index one visible row away from focus, clamped at both ends.
    pub(crate) fn step_target(&self, delta: isize) -> Option<usize> {
        let position = self.focused_position()?;
        let target = position
            .saturating_add_signed(delta)
            .min(self.visible.len() - 1);
        self.visible.get(target)
    }

    /// Focus moved by navigation without Shift: in multi-select mode the anchor follows.
    pub(crate) fn move_focus(&mut self, index: usize) {
        self.set_focus(index);
        if self.is_multiselectable() {
            let id = self.outline.nodes()[index].id.clone();
            self.selection.set_anchor(id);
        }
    }

    /// Moves the cursor without touching the anchor.
    pub(crate) fn set_focus(&mut self, index: usize) {
        debug_assert!(self.visible.is_visible(index), "focus must stay visible");
        self.focused = Some(index);
    }

    /// Calls the host's native-focus hook if focus changed since `before`.
    ///
    /// Every public entry point ends here, after all model state for the
    /// event has been committed.
    pub(crate) fn flush_focus(&self, before: Option<usize>, host: &mut impl TreeViewHost<K>) {
        if self.focused != before
            && let Some(id) = self.focused_id()
        {
            host.focus_element_for(id);
        }
    }

    // -------------------------------------------------------------------------
    // Commits
    // -------------------------------------------------------------------------

    /// Applies `change` to a copy of the expansion set and commits it if anything changed.
    ///
    /// The host always hears about the new set. The internal mirror only takes
    /// it in uncontrolled mode; in controlled mode the caller pushes it back
    /// through [`TreeView::set_controlled_expanded`].
    pub(crate) fn commit_expansion(
        &mut self,
        host: &mut impl TreeViewHost<K>,
        change: impl FnOnce(&mut ExpansionSet<K>) -> bool,
    ) -> bool {
        let mut next = self.expanded.clone();
        if !change(&mut next) {
            return false;
        }
        let ids = next.ordered_ids(&self.outline);
        log::debug!(
            "tree view: expansion committed, {} expanded{}",
            ids.len(),
            if self.controlled_expanded { " (controlled)" } else { "" }
        );
        host.on_expanded_change(&ids);
        if !self.controlled_expanded {
            self.expanded = next;
            self.refresh_visible();
        }
        true
    }

    /// Applies `change` to a copy of the selection and commits it if membership changed.
    ///
    /// Same controlled/uncontrolled contract as [`TreeView::commit_expansion`].
    pub(crate) fn commit_selection(
        &mut self,
        host: &mut impl TreeViewHost<K>,
        change: impl FnOnce(&mut Selection<K>),
    ) -> bool {
        let mut next = self.selection.clone();
        let revision = next.revision();
        change(&mut next);
        if next.revision() == revision {
            return false;
        }
        let ids = self.ordered_selection(&next);
        log::debug!(
            "tree view: selection committed, {} selected{}",
            ids.len(),
            if self.controlled_selected { " (controlled)" } else { "" }
        );
        host.on_selection_change(&ids);
        if !self.controlled_selected {
            self.selection = next;
        }
        true
    }

    /// Ids of `selection` in document order; ids missing from the tree go last.
    fn ordered_selection(&self, selection: &Selection<K>) -> Vec<K> {
        let mut known: Vec<usize> = Vec::with_capacity(selection.len());
        let mut unknown: Vec<K> = Vec::new();
        for id in selection.iter() {
            match self.outline.index_of(id) {
                Some(index) => known.push(index),
                None => unknown.push(id.clone()),
            }
        }
        known.sort_unstable();
        known
            .into_iter()
            .map(|i| self.outline.nodes()[i].id.clone())
            .chain(unknown)
            .collect()
    }

    /// Recomputes visibility and repairs focus.
    pub(crate) fn refresh_visible(&mut self) {
        self.visible.recompute(&self.outline, &self.expanded);
        self.repair_focus();
    }

    /// Puts focus back on a visible node: the nearest visible ancestor of a
    /// hidden focus, or the first row if focus is gone.
    ///
    /// A relocation is a move without Shift, so in multi-select mode the
    /// anchor follows it.
    fn repair_focus(&mut self) {
        let repaired = match self.focused {
            Some(index) if self.visible.is_visible(index) => return,
            Some(index) => self
                .outline
                .ancestors(index)
                .find(|&a| self.visible.is_visible(a))
                .or_else(|| self.visible.first()),
            None => self.visible.first(),
        };
        if repaired != self.focused {
            log::debug!("tree view: focus relocated from {:?} to {repaired:?}", self.focused);
            match repaired {
                Some(index) => self.move_focus(index),
                None => self.focused = None,
            }
        }
    }

    // -------------------------------------------------------------------------
    // External state
    // -------------------------------------------------------------------------

    /// Replaces the tree data.
    ///
    /// Focus stays on the same id if it still exists and is visible, moves to
    /// its nearest visible ancestor if hidden, and falls back to the first row
    /// otherwise. Uncontrolled selection and expansion drop ids that no longer
    /// exist; selection also drops ids that became disabled. Nothing is
    /// reported for that pruning since it is not a user change. In
    /// multi-select mode an anchor that no longer names a visible node is
    /// reset to the focused node.
    pub fn set_roots(&mut self, roots: &[TreeNode<K>], mut host: impl TreeViewHost<K>) {
        let focused_id = self.focused_id().cloned();
        self.outline = Outline::new(roots);
        let before = focused_id
            .as_ref()
            .and_then(|id| self.outline.index_of(id));
        self.focused = before;

        if !self.controlled_expanded {
            let outline = &self.outline;
            self.expanded.retain(|id| outline.contains(id));
        }
        if !self.controlled_selected {
            let outline = &self.outline;
            self.selection.retain(|id| is_selectable(outline, id));
        }
        self.refresh_visible();
        if self.is_multiselectable()
            && let Some(index) = self.focused
            && !self
                .anchor()
                .and_then(|id| self.outline.index_of(id))
                .is_some_and(|a| self.visible.is_visible(a))
        {
            self.move_focus(index);
        }
        self.flush_focus(before, &mut host);
    }

    /// Takes expansion state from the caller and keeps it caller-owned.
    ///
    /// From now on expansion changes are only reported, never applied, until
    /// [`TreeView::release_controlled_expanded`].
    pub fn set_controlled_expanded(
        &mut self,
        ids: impl IntoIterator<Item = K>,
        mut host: impl TreeViewHost<K>,
    ) {
        let before = self.focused;
        self.controlled_expanded = true;
        self.expanded = ids.into_iter().collect();
        self.refresh_visible();
        self.flush_focus(before, &mut host);
    }

    /// Returns expansion ownership to the engine, keeping the current state.
    pub fn release_controlled_expanded(&mut self) {
        self.controlled_expanded = false;
    }

    /// Takes selection state from the caller and keeps it caller-owned.
    ///
    /// Unknown and disabled ids are ignored. In single-select mode only the
    /// first remaining id counts. The anchor is kept.
    pub fn set_controlled_selected(&mut self, ids: impl IntoIterator<Item = K>) {
        self.controlled_selected = true;
        let outline = &self.outline;
        self.selection
            .replace_with(ids.into_iter().filter(|id| is_selectable(outline, id)));
    }

    /// Returns selection ownership to the engine, keeping the current state.
    pub fn release_controlled_selected(&mut self) {
        self.controlled_selected = false;
    }

    // -------------------------------------------------------------------------
    // Type-ahead timer
    // -------------------------------------------------------------------------

    /// Resets the type-ahead buffer if its deadline has passed at `now`.
    pub fn poll_timers(&mut self, now: u64) -> bool {
        self.type_ahead.poll(now)
    }

    /// The next time [`TreeView::poll_timers`] has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.type_ahead.deadline()
    }

    /// Reports a platform timer scheduled for the type-ahead reset.
    ///
    /// Stale tokens are ignored, so a timer that was superseded by a later
    /// keystroke cannot clear the newer buffer.
    pub fn on_type_ahead_timer(&mut self, token: TimerToken) -> bool {
        self.type_ahead.fire(token)
    }

    /// Cancels pending timers. Call when the widget is destroyed.
    pub fn teardown(&mut self) {
        self.type_ahead.cancel();
    }
}

/// Known and enabled: the only ids that may be selected.
fn is_selectable<K: Eq + Hash>(outline: &Outline<K>, id: &K) -> bool {
    outline.get(id).is_some_and(|node| !node.disabled)
}
