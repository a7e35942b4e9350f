// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Tree View: a headless, accessible tree view engine.
//!
//! [`TreeView`] implements the state machine behind a WAI-ARIA tree widget
//! and nothing else. It tracks which nodes are expanded, which are selected,
//! and which one holds the roving tab stop; it interprets keys and clicks; and
//! it reports every committed change to a [`TreeViewHost`]. Drawing rows,
//! setting ARIA attributes, and moving native focus belong to the host.
//!
//! ## Input
//!
//! - Keys arrive as `ui-events` values through [`TreeView::handle_key`] or
//!   [`TreeView::handle_keyboard_event`]. Key → action mapping lives in the
//!   [`Command`] table; [`TreeView::execute`] applies a command directly.
//! - Clicks arrive through [`TreeView::click`]; disclosure triangles call
//!   [`TreeView::toggle_expanded`].
//! - Every operation the keyboard uses is also public (`expand`,
//!   `extend_range`, `focus_next`, ...), each taking the host.
//!
//! ## Output
//!
//! [`TreeView::rows`] yields a [`RowState`] per visible row, carrying what a
//! renderer needs for `aria-level`, `aria-expanded`, `aria-selected`,
//! `aria-disabled`, and `tabindex`. The host's
//! [`focus_element_for`](TreeViewHost::focus_element_for) fires after the model
//! commit for an event, so `tabindex` is already right when native focus moves.
//!
//! ## Controlled state
//!
//! Expansion and selection can each be owned by the caller. In controlled
//! mode the engine still reports every change, but only takes new state
//! through [`TreeView::set_controlled_expanded`] and
//! [`TreeView::set_controlled_selected`].
//!
//! ## Time
//!
//! The type-ahead buffer resets after a quiet period. The engine never reads
//! a clock: callers pass `now` in milliseconds with each key, and may call
//! [`TreeView::poll_timers`] or report a platform timer through
//! [`TreeView::on_type_ahead_timer`].
//!
//! ## Minimal example
//!
//! ```rust
//! use ui_events::keyboard::{Key, Modifiers, NamedKey};
//! use understory_tree_view::{KeyOutcome, TreeNode, TreeView, TreeViewConfig};
//!
//! let roots = [
//!     TreeNode::new("a", "Alpha").with_children([
//!         TreeNode::new("a1", "One"),
//!         TreeNode::new("a2", "Two"),
//!     ]),
//!     TreeNode::new("b", "Beta"),
//! ];
//! let mut view = TreeView::new(&roots, TreeViewConfig::new());
//! assert_eq!(view.focused_id(), Some(&"a"));
//!
//! let right = Key::Named(NamedKey::ArrowRight);
//! assert_eq!(view.handle_key(&right, Modifiers::empty(), 0, ()), KeyOutcome::Handled);
//! assert!(view.is_expanded(&"a"));
//! assert_eq!(view.visible_ids().copied().collect::<Vec<_>>(), ["a", "a1", "a2", "b"]);
//!
//! let down = Key::Named(NamedKey::ArrowDown);
//! view.handle_key(&down, Modifiers::empty(), 10, ());
//! view.handle_key(&down, Modifiers::empty(), 20, ());
//! assert_eq!(view.focused_id(), Some(&"a2"));
//! assert_eq!(view.tab_index(&"a2"), 0);
//! assert_eq!(view.tab_index(&"a"), -1);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod command;
mod config;
mod expansion;
mod host;
mod keyboard;
mod pointer;
mod row;
mod selection;
mod type_ahead;
mod view;

pub use command::Command;
pub use config::{DEFAULT_TYPE_AHEAD_TIMEOUT, TreeViewConfig};
pub use host::TreeViewHost;
pub use keyboard::KeyOutcome;
pub use row::RowState;
pub use type_ahead::TypeAhead;
pub use view::TreeView;

pub use understory_outline::{Outline, TreeNode, VisibleRows};
pub use understory_timing::TimerToken;
