// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The key → command table.
//!
//! Interpretation is split in two so each half can be tested on its own:
//! [`Command::from_key`] is a pure table from a key plus modifiers to a
//! command, and [`TreeView::execute`](crate::TreeView::execute) applies a
//! command to the model. Hosts with custom bindings can skip the table and
//! call `execute` directly.

use ui_events::keyboard::{Key, Modifiers, NamedKey};

/// One tree view action.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move focus one visible row down. `extend` grows the selection range.
    FocusNext {
        /// Extend the selection from the anchor to the new focus.
        extend: bool,
    },
    /// Move focus one visible row up.
    FocusPrevious {
        /// Extend the selection from the anchor to the new focus.
        extend: bool,
    },
    /// Move focus to the first visible row.
    FocusFirst {
        /// Extend the selection from the anchor to the new focus.
        extend: bool,
    },
    /// Move focus to the last visible row.
    FocusLast {
        /// Extend the selection from the anchor to the new focus.
        extend: bool,
    },
    /// Expand a collapsed parent, or step into an expanded one.
    ExpandOrFocusChild,
    /// Collapse an expanded parent, or step out to the parent row.
    CollapseOrFocusParent,
    /// Select the focused node and report activation.
    Activate,
    /// Toggle the focused node in a multi-selection.
    ToggleSelection {
        /// Leave the range anchor where it is.
        keep_anchor: bool,
    },
    /// Expand the focused node and all of its siblings.
    ExpandSiblings,
    /// Select every enabled visible node.
    SelectAll,
    /// Feed a printable character to type-ahead.
    TypeAhead(char),
}

impl Command {
    /// Maps a key press to a command, or `None` if the tree view does not handle it.
    ///
    /// Ctrl and Meta are interchangeable. Alt combinations are never handled.
    /// Shift only matters for range extension, which exists in multi-select mode.
    /// Precedence for letters: Ctrl+A is select-all in multi-select mode and
    /// type-ahead otherwise; any other Ctrl chord passes through.
    #[must_use]
    pub fn from_key(key: &Key, modifiers: Modifiers, multiselectable: bool) -> Option<Self> {
        if modifiers.contains(Modifiers::ALT) {
            return None;
        }
        let shift = modifiers.contains(Modifiers::SHIFT);
        let ctrl = modifiers.intersects(Modifiers::CONTROL | Modifiers::META);
        let extend = shift && multiselectable;

        if let Key::Named(named) = key {
            return match named {
                NamedKey::ArrowDown => Some(Self::FocusNext { extend }),
                NamedKey::ArrowUp => Some(Self::FocusPrevious { extend }),
                NamedKey::Home => Some(Self::FocusFirst { extend }),
                NamedKey::End => Some(Self::FocusLast { extend }),
                NamedKey::ArrowRight => Some(Self::ExpandOrFocusChild),
                NamedKey::ArrowLeft => Some(Self::CollapseOrFocusParent),
                NamedKey::Enter => Some(Self::Activate),
                _ => None,
            };
        }
        let Key::Character(text) = key else {
            return None;
        };
        let mut chars = text.chars();
        let (Some(ch), None) = (chars.next(), chars.next()) else {
            return None;
        };
        Self::from_char(ch, ctrl, multiselectable)
    }

    fn from_char(ch: char, ctrl: bool, multiselectable: bool) -> Option<Self> {
        match ch {
            ' ' if multiselectable => Some(Self::ToggleSelection { keep_anchor: ctrl }),
            ' ' => Some(Self::Activate),
            '*' if !ctrl => Some(Self::ExpandSiblings),
            'a' | 'A' if ctrl && multiselectable => Some(Self::SelectAll),
            'a' | 'A' if ctrl => Some(Self::TypeAhead(ch)),
            _ if ctrl => None,
            _ if ch.is_control() || ch.is_whitespace() => None,
            _ => Some(Self::TypeAhead(ch)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn ch(c: &str) -> Key {
        Key::Character(c.to_string())
    }

    #[test]
    fn arrows_extend_only_with_shift_in_multi_mode() {
        let down = Key::Named(NamedKey::ArrowDown);
        assert_eq!(
            Command::from_key(&down, Modifiers::empty(), true),
            Some(Command::FocusNext { extend: false })
        );
        assert_eq!(
            Command::from_key(&down, Modifiers::SHIFT, true),
            Some(Command::FocusNext { extend: true })
        );
        assert_eq!(
            Command::from_key(&down, Modifiers::SHIFT, false),
            Some(Command::FocusNext { extend: false })
        );
        assert_eq!(
            Command::from_key(&Key::Named(NamedKey::End), Modifiers::SHIFT, true),
            Some(Command::FocusLast { extend: true })
        );
    }

    #[test]
    fn ctrl_a_precedence() {
        assert_eq!(
            Command::from_key(&ch("a"), Modifiers::CONTROL, true),
            Some(Command::SelectAll)
        );
        assert_eq!(
            Command::from_key(&ch("a"), Modifiers::META, true),
            Some(Command::SelectAll)
        );
        assert_eq!(
            Command::from_key(&ch("a"), Modifiers::CONTROL, false),
            Some(Command::TypeAhead('a'))
        );
        assert_eq!(
            Command::from_key(&ch("a"), Modifiers::empty(), true),
            Some(Command::TypeAhead('a'))
        );
        assert_eq!(Command::from_key(&ch("c"), Modifiers::CONTROL, true), None);
    }

    #[test]
    fn star_expands_siblings_only_without_ctrl() {
        assert_eq!(
            Command::from_key(&ch("*"), Modifiers::SHIFT, false),
            Some(Command::ExpandSiblings)
        );
        assert_eq!(Command::from_key(&ch("*"), Modifiers::CONTROL, true), None);
        assert_eq!(Command::from_key(&ch("*"), Modifiers::META, false), None);
    }

    #[test]
    fn space_depends_on_mode() {
        assert_eq!(
            Command::from_key(&ch(" "), Modifiers::empty(), true),
            Some(Command::ToggleSelection { keep_anchor: false })
        );
        assert_eq!(
            Command::from_key(&ch(" "), Modifiers::CONTROL, true),
            Some(Command::ToggleSelection { keep_anchor: true })
        );
        assert_eq!(
            Command::from_key(&ch(" "), Modifiers::empty(), false),
            Some(Command::Activate)
        );
    }

    #[test]
    fn unhandled_keys_pass_through() {
        assert_eq!(
            Command::from_key(&Key::Named(NamedKey::Tab), Modifiers::empty(), true),
            None
        );
        assert_eq!(
            Command::from_key(&Key::Named(NamedKey::ArrowDown), Modifiers::ALT, true),
            None
        );
        assert_eq!(Command::from_key(&ch("ab"), Modifiers::empty(), true), None);
        assert_eq!(Command::from_key(&ch("\t"), Modifiers::empty(), true), None);
    }

    #[test]
    fn star_and_printables() {
        assert_eq!(
            Command::from_key(&ch("*"), Modifiers::SHIFT, false),
            Some(Command::ExpandSiblings)
        );
        assert_eq!(
            Command::from_key(&ch("B"), Modifiers::SHIFT, true),
            Some(Command::TypeAhead('B'))
        );
    }
}
