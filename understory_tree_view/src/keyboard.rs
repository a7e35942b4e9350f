// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard interpreter.

use core::hash::Hash;

use ui_events::keyboard::{Key, KeyState, KeyboardEvent, Modifiers};

use crate::{Command, TreeView, TreeViewHost};

/// Whether the tree view consumed a key.
///
/// On [`KeyOutcome::Handled`] the host should suppress the platform's default
/// action for the event; [`KeyOutcome::Ignored`] events should be passed on
/// untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum KeyOutcome {
    /// The key maps to a tree view command, whether or not it changed anything.
    Handled,
    /// The key is not a tree view key.
    Ignored,
}

impl KeyOutcome {
    /// Returns `true` for [`KeyOutcome::Handled`].
    #[must_use]
    pub fn is_handled(self) -> bool {
        self == Self::Handled
    }
}

impl<K: Clone + Eq + Hash> TreeView<K> {
    /// Interprets a key press at time `now` (milliseconds).
    ///
    /// An expired type-ahead buffer is cleared first. Keys are ignored while
    /// the tree is empty.
    pub fn handle_key(
        &mut self,
        key: &Key,
        modifiers: Modifiers,
        now: u64,
        host: impl TreeViewHost<K>,
    ) -> KeyOutcome {
        self.poll_timers(now);
        if self.focused.is_none() {
            return KeyOutcome::Ignored;
        }
        let Some(command) = Command::from_key(key, modifiers, self.is_multiselectable()) else {
            log::trace!("tree view: key passed through");
            return KeyOutcome::Ignored;
        };
        log::trace!("tree view: {command:?}");
        self.execute(command, now, host);
        KeyOutcome::Handled
    }

    /// Interprets a `ui-events` keyboard event.
    ///
    /// Key releases and events that are part of an IME composition are ignored.
    pub fn handle_keyboard_event(
        &mut self,
        event: &KeyboardEvent,
        now: u64,
        host: impl TreeViewHost<K>,
    ) -> KeyOutcome {
        if !matches!(event.state, KeyState::Down) || event.is_composing {
            return KeyOutcome::Ignored;
        }
        self.handle_key(&event.key, event.modifiers, now, host)
    }

    /// Applies `command` to the focused node.
    ///
    /// This is the second half of [`TreeView::handle_key`], exposed for hosts
    /// with their own key bindings. Does nothing while the tree is empty.
    pub fn execute(&mut self, command: Command, now: u64, mut host: impl TreeViewHost<K>) {
        let before = self.focused;
        self.execute_inner(command, now, &mut host);
        self.flush_focus(before, &mut host);
    }

    fn execute_inner(&mut self, command: Command, now: u64, host: &mut impl TreeViewHost<K>) {
        let Some(focused) = self.focused else {
            return;
        };
        match command {
            Command::FocusNext { extend } => self.navigate(self.step_target(1), extend, host),
            Command::FocusPrevious { extend } => self.navigate(self.step_target(-1), extend, host),
            Command::FocusFirst { extend } => self.navigate(self.visible.first(), extend, host),
            Command::FocusLast { extend } => self.navigate(self.visible.last(), extend, host),
            Command::ExpandOrFocusChild => self.expand_or_focus_child(focused, host),
            Command::CollapseOrFocusParent => self.collapse_or_focus_parent(focused, host),
            Command::Activate => self.activate(focused, host),
            Command::ToggleSelection { keep_anchor } => {
                let id = self.outline.nodes()[focused].id.clone();
                if !self.is_enabled(&id) {
                    return;
                }
                self.toggle_inner(&id, host);
                if !keep_anchor {
                    self.selection.set_anchor(id);
                }
            }
            Command::ExpandSiblings => {
                let id = self.outline.nodes()[focused].id.clone();
                self.expand_siblings_inner(&id, host);
            }
            Command::SelectAll => {
                self.select_all_inner(host);
            }
            Command::TypeAhead(ch) => self.type_ahead_to(ch, now),
        }
    }

    /// Moves focus to `target`, extending the selection from the anchor when asked.
    fn navigate(&mut self, target: Option<usize>, extend: bool, host: &mut impl TreeViewHost<K>) {
        let Some(target) = target else {
            return;
        };
        if !extend {
            self.move_focus(target);
            return;
        }
        self.set_focus(target);
        let target_id = self.outline.nodes()[target].id.clone();
        let anchor = self
            .selection
            .anchor()
            .cloned()
            .unwrap_or_else(|| target_id.clone());
        self.extend_range_inner(&anchor, &target_id, host);
    }

    fn expand_or_focus_child(&mut self, focused: usize, host: &mut impl TreeViewHost<K>) {
        let node = &self.outline.nodes()[focused];
        if !node.has_children || node.disabled {
            return;
        }
        if !self.expanded.is_expanded(&node.id) {
            let id = node.id.clone();
            self.expand_inner(&id, host);
            return;
        }
        let next = self.step_target(1);
        if let Some(child) = self.outline.first_child(focused)
            && next == Some(child)
        {
            self.move_focus(child);
        }
    }

    fn collapse_or_focus_parent(&mut self, focused: usize, host: &mut impl TreeViewHost<K>) {
        let node = &self.outline.nodes()[focused];
        if node.has_children && !node.disabled && self.expanded.is_expanded(&node.id) {
            let id = node.id.clone();
            self.collapse_inner(&id, host);
        } else if let Some(parent) = node.parent {
            self.move_focus(parent);
        }
    }

    fn activate(&mut self, focused: usize, host: &mut impl TreeViewHost<K>) {
        let id = self.outline.nodes()[focused].id.clone();
        if !self.is_enabled(&id) {
            return;
        }
        if self.is_multiselectable() {
            self.toggle_inner(&id, host);
            self.selection.set_anchor(id.clone());
        } else {
            self.replace_with_single_inner(&id, host);
        }
        host.on_activate(&id);
    }

    fn type_ahead_to(&mut self, ch: char, now: u64) {
        let current = self.focused_position();
        let (visible, outline) = (&self.visible, &self.outline);
        let found = self
            .type_ahead
            .search(ch, now, current, visible.len(), |position| {
                let node = &outline.nodes()[visible.get(position)?];
                (!node.disabled).then(|| node.folded_label())
            });
        if let Some(index) = found.and_then(|position| self.visible.get(position)) {
            self.move_focus(index);
        }
    }
}
