// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Selection: selection management primitives.
//!
//! This crate focuses on the _bookkeeping_ of a selection: the set of selected
//! keys, the mode that constrains it, and an anchor used for range extension.
//! It does **not** know how your items are laid out or ordered; callers decide
//! how to map user input (click, toggle, shift-range) into concrete keys.
//!
//! The core type is [`Selection`], a small, generic container that tracks:
//! - The selected keys, unique, in the order they were added.
//! - A [`SelectionMode`]: `Single` keeps at most one key, `Multiple` is
//!   unconstrained.
//! - An optional **anchor** key, the fixed end of a range gesture. The anchor
//!   is independent of membership: in a tree or list it usually follows the
//!   keyboard cursor, which need not be selected.
//! - A monotonically increasing **revision** counter that bumps only when
//!   membership changes.
//!
//! Keys need only `PartialEq`, which keeps the type easy to use with existing
//! handle types. With the `hashbrown` feature, `Hash + Eq` keys get linear-time
//! bulk operations.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_selection::{Selection, SelectionMode};
//!
//! let mut selection = Selection::<u32>::new();
//!
//! // Plain click: replace selection with a single item.
//! selection.select_only(10);
//! assert_eq!(selection.items(), &[10]);
//!
//! // Ctrl-click: toggle a single item.
//! selection.toggle(10);
//! assert!(selection.is_empty());
//!
//! // Shift-range: the caller computes the keys in range and unions them in.
//! selection.add(1);
//! selection.extend_with([2, 3]);
//! assert_eq!(selection.items(), &[1, 2, 3]);
//!
//! // Single mode never holds more than one key.
//! let mut single = Selection::with_mode(SelectionMode::Single);
//! single.toggle(1);
//! single.toggle(2);
//! assert_eq!(single.items(), &[2]);
//! ```
//!
//! ## Range extension
//!
//! Ranges are the caller's business because only the caller knows the order
//! of its items. A typical shift-arrow handler looks like this:
//!
//! ```rust
//! use understory_selection::Selection;
//!
//! fn extend_to(selection: &mut Selection<u32>, target: u32, items_in_order: &[u32]) {
//!     let anchor = selection.anchor().copied().unwrap_or(target);
//!     let index_of = |key: u32| items_in_order.iter().position(|&k| k == key);
//!     let (Some(a), Some(b)) = (index_of(anchor), index_of(target)) else {
//!         return;
//!     };
//!     let (start, end) = if a <= b { (a, b) } else { (b, a) };
//!     selection.extend_with(items_in_order[start..=end].iter().copied());
//! }
//!
//! let items = [10_u32, 20, 30, 40];
//! let mut sel = Selection::new();
//! sel.select_only(40);
//! sel.set_anchor(20);
//!
//! extend_to(&mut sel, 30, &items);
//! // Additive: 40 stays selected.
//! assert_eq!(sel.items(), &[40, 20, 30]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

/// Constrains how many keys a [`Selection`] may hold.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SelectionMode {
    /// At most one key is selected.
    Single,
    /// Any number of keys may be selected.
    #[default]
    Multiple,
}

/// A small selection container tracking a set of keys plus an anchor and a revision.
#[derive(Clone, Debug, Default)]
pub struct Selection<T> {
    items: Vec<T>,
    anchor: Option<T>,
    mode: SelectionMode,
    revision: u64,
}

impl<T> Selection<T> {
    /// Creates an empty multiple-selection.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_mode(SelectionMode::Multiple)
    }

    /// Creates an empty selection with the given mode.
    #[must_use]
    pub const fn with_mode(mode: SelectionMode) -> Self {
        Self {
            items: Vec::new(),
            anchor: None,
            mode,
            revision: 0,
        }
    }

    /// Returns the selection mode.
    #[must_use]
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Changes the selection mode.
    ///
    /// Switching to [`SelectionMode::Single`] keeps only the earliest selected key.
    pub fn set_mode(&mut self, mode: SelectionMode) {
        self.mode = mode;
        if mode == SelectionMode::Single && self.items.len() > 1 {
            self.items.truncate(1);
            self.bump_revision();
        }
    }

    /// Returns `true` if the selection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of selected keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns all selected keys in the order they were added.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns an iterator over the selected keys.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the anchor key, if any.
    ///
    /// The anchor is not required to be selected.
    #[must_use]
    pub fn anchor(&self) -> Option<&T> {
        self.anchor.as_ref()
    }

    /// Sets the anchor key.
    ///
    /// The anchor is not part of the membership, so this never bumps the revision.
    pub fn set_anchor(&mut self, key: T) {
        self.anchor = Some(key);
    }

    /// Clears the anchor.
    pub fn clear_anchor(&mut self) {
        self.anchor = None;
    }

    /// Returns the membership revision.
    ///
    /// The revision is local to this instance and bumps only when the set of
    /// selected keys changes. No-op calls (for example, toggling a key on and
    /// then asking to select it again) leave it unchanged, so observers can
    /// compare revisions instead of contents.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Removes all keys. The anchor is kept.
    pub fn clear(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.items.clear();
        self.bump_revision();
    }

    /// Keeps only the keys for which `keep` returns `true`.
    pub fn retain(&mut self, keep: impl FnMut(&T) -> bool) {
        let before = self.items.len();
        self.items.retain(keep);
        if self.items.len() != before {
            self.bump_revision();
        }
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<T> Selection<T>
where
    T: PartialEq,
{
    /// Returns `true` if the selection currently contains `key`.
    #[must_use]
    pub fn contains(&self, key: &T) -> bool {
        self.position_of(key).is_some()
    }

    /// Replaces the selection with exactly `key`.
    pub fn select_only(&mut self, key: T) {
        if self.items.len() == 1 && self.items[0] == key {
            return;
        }
        self.items.clear();
        self.items.push(key);
        self.bump_revision();
    }

    /// Toggles `key`.
    ///
    /// In [`SelectionMode::Multiple`] this flips membership. In
    /// [`SelectionMode::Single`] it replaces the selection with `key`; a single
    /// selection is changed, never emptied, by a toggle.
    pub fn toggle(&mut self, key: T) {
        if self.mode == SelectionMode::Single {
            self.select_only(key);
            return;
        }
        if let Some(idx) = self.position_of(&key) {
            self.items.remove(idx);
        } else {
            self.items.push(key);
        }
        self.bump_revision();
    }

    /// Adds `key` if it is not already selected.
    ///
    /// In [`SelectionMode::Single`] this is [`Selection::select_only`].
    pub fn add(&mut self, key: T) {
        if self.mode == SelectionMode::Single {
            self.select_only(key);
        } else if !self.contains(&key) {
            self.items.push(key);
            self.bump_revision();
        }
    }

    /// Removes `key` if it is selected.
    pub fn remove(&mut self, key: &T) {
        if let Some(idx) = self.position_of(key) {
            self.items.remove(idx);
            self.bump_revision();
        }
    }

    /// Unions `keys` into the selection.
    ///
    /// Existing keys stay selected; new keys are appended in input order and
    /// duplicates are ignored. The anchor is untouched. In
    /// [`SelectionMode::Single`] only the last key of the batch is kept.
    ///
    /// De-duplication scans the accumulated items, so this is quadratic in the
    /// batch size. See `extend_with_hashed` (feature `hashbrown`) for large
    /// ranges.
    pub fn extend_with<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = T>,
    {
        if self.mode == SelectionMode::Single {
            if let Some(last) = keys.into_iter().last() {
                self.select_only(last);
            }
            return;
        }
        let before = self.items.len();
        for key in keys {
            if !self.contains(&key) {
                self.items.push(key);
            }
        }
        if self.items.len() != before {
            self.bump_revision();
        }
    }

    /// Replaces the selection with `keys`, dropping duplicates.
    ///
    /// In [`SelectionMode::Single`] only the first key is kept.
    pub fn replace_with<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut new_items: Vec<T> = Vec::new();
        for key in keys {
            if self.mode == SelectionMode::Single && !new_items.is_empty() {
                break;
            }
            if !new_items.iter().any(|existing| existing == &key) {
                new_items.push(key);
            }
        }
        self.replace_with_items(new_items);
    }

    /// Replaces the selection with a batch of keys known to be unique.
    ///
    /// This skips de-duplication, which makes it linear. It is the natural fit
    /// for "select all" over a list of distinct ids.
    ///
    /// # Panics (debug only)
    ///
    /// Panics in debug builds if the input contains duplicates.
    pub fn replace_with_unique<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = T>,
    {
        let iter = keys.into_iter();
        let new_items: Vec<T> = if self.mode == SelectionMode::Single {
            iter.take(1).collect()
        } else {
            iter.collect()
        };

        #[cfg(debug_assertions)]
        debug_assert_unique(&new_items);
        self.replace_with_items(new_items);
    }

    fn position_of(&self, key: &T) -> Option<usize> {
        self.items.iter().position(|k| k == key)
    }

    fn replace_with_items(&mut self, new_items: Vec<T>) {
        if new_items == self.items {
            return;
        }
        self.items = new_items;
        self.bump_revision();
    }
}

impl<T: PartialEq> PartialEq for Selection<T> {
    /// Two selections are equal when they hold the same keys in the same
    /// order, with the same mode and anchor. Revisions are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items && self.anchor == other.anchor && self.mode == other.mode
    }
}

impl<T: Eq> Eq for Selection<T> {}

#[cfg(feature = "hashbrown")]
impl<T> Selection<T>
where
    T: core::hash::Hash + Eq,
{
    /// Hash-based variant of [`Selection::extend_with`].
    ///
    /// Same semantics, but linear in the size of the selection plus the batch.
    /// Prefer it for shift-range gestures over long lists.
    pub fn extend_with_hashed<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = T>,
    {
        use core::hash::BuildHasher;
        use hashbrown::{DefaultHashBuilder, HashTable};

        if self.mode == SelectionMode::Single {
            self.extend_with(keys);
            return;
        }

        let iter = keys.into_iter();
        let (lower, _) = iter.size_hint();
        let build_hasher = DefaultHashBuilder::default();

        // The table stores indices into `items`; hashing goes through the items
        // themselves so `T` never needs to be cloned.
        let mut table: HashTable<usize> = HashTable::with_capacity(self.items.len() + lower);
        for (idx, item) in self.items.iter().enumerate() {
            table.insert_unique(build_hasher.hash_one(item), idx, |&i| {
                build_hasher.hash_one(&self.items[i])
            });
        }

        let before = self.items.len();
        for key in iter {
            let hash = build_hasher.hash_one(&key);
            if table.find(hash, |&i| self.items[i] == key).is_some() {
                continue;
            }
            let idx = self.items.len();
            self.items.push(key);
            table.insert_unique(hash, idx, |&i| build_hasher.hash_one(&self.items[i]));
        }

        if self.items.len() != before {
            self.bump_revision();
        }
    }
}

#[cfg(debug_assertions)]
fn debug_assert_unique<T>(items: &[T])
where
    T: PartialEq,
{
    for i in 0..items.len() {
        for j in (i + 1)..items.len() {
            debug_assert!(
                items[i] != items[j],
                "duplicate selection key at {i} and {j}"
            );
        }
    }
}
