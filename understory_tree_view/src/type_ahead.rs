// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Focus-by-typing over a list of labels.

use smallvec::SmallVec;
use understory_timing::{OneShot, TimerToken};

use crate::DEFAULT_TYPE_AHEAD_TIMEOUT;

/// Buffered prefix search with cycling and a debounced reset.
///
/// `TypeAhead` knows nothing about trees. It searches positions `0..len` of
/// some list through a label accessor and returns the position to focus.
///
/// Rules for each keystroke:
/// - The character is lowercased and appended to the buffer.
/// - A buffer made of one repeated character ("aaa") collapses back to that
///   character and the search starts after the current position, so pressing
///   the same key cycles through the matches.
/// - A single-character buffer also starts after the current position.
/// - A longer, mixed buffer starts at the current position, so the current
///   item stays matched while its prefix keeps growing.
/// - The scan wraps around and skips positions whose label is `None`.
/// - Each keystroke restarts the reset timer. A keystroke that matches nothing
///   leaves the buffer grown and the focus where it was.
#[derive(Clone, Debug)]
pub struct TypeAhead {
    buffer: SmallVec<[char; 16]>,
    timer: OneShot,
    timeout: u64,
}

impl Default for TypeAhead {
    fn default() -> Self {
        Self::new(DEFAULT_TYPE_AHEAD_TIMEOUT)
    }
}

impl TypeAhead {
    /// Creates an idle matcher that resets `timeout` ms after the last keystroke.
    #[must_use]
    pub fn new(timeout: u64) -> Self {
        Self {
            buffer: SmallVec::new(),
            timer: OneShot::new(),
            timeout,
        }
    }

    /// The reset delay in milliseconds.
    #[must_use]
    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    /// Changes the reset delay. A pending reset keeps its old deadline.
    pub fn set_timeout(&mut self, timeout: u64) {
        self.timeout = timeout;
    }

    /// The lowercased characters typed since the last reset.
    #[must_use]
    pub fn buffer(&self) -> &[char] {
        &self.buffer
    }

    /// When the buffer will reset, if a reset is pending.
    #[must_use]
    pub fn deadline(&self) -> Option<u64> {
        self.timer.deadline()
    }

    /// Token of the pending reset, for hosts that schedule a platform timer.
    #[must_use]
    pub fn token(&self) -> Option<TimerToken> {
        self.timer.token()
    }

    /// Clears the buffer if the reset deadline has passed at `now`.
    ///
    /// Returns `true` if the buffer was cleared.
    pub fn poll(&mut self, now: u64) -> bool {
        if self.timer.poll(now) {
            self.buffer.clear();
            true
        } else {
            false
        }
    }

    /// Clears the buffer on behalf of a platform timer scheduled for `token`.
    ///
    /// Stale tokens are ignored. Returns `true` if the buffer was cleared.
    pub fn fire(&mut self, token: TimerToken) -> bool {
        if self.timer.fire(token) {
            self.buffer.clear();
            true
        } else {
            false
        }
    }

    /// Clears the buffer and cancels any pending reset.
    pub fn cancel(&mut self) {
        self.timer.cancel();
        self.buffer.clear();
    }

    /// Handles one keystroke and returns the position to focus, if any matched.
    ///
    /// `current` is the focused position, `len` the number of positions, and
    /// `label_at` returns the already-lowercased label of a position, or `None`
    /// for positions that must be skipped. `now` is the keystroke time.
    pub fn search<'a>(
        &mut self,
        ch: char,
        now: u64,
        current: Option<usize>,
        len: usize,
        label_at: impl Fn(usize) -> Option<&'a str>,
    ) -> Option<usize> {
        self.poll(now);
        // One keystroke buffers one char, even where lowercasing expands.
        self.buffer.push(ch.to_lowercase().next().unwrap_or(ch));
        self.timer.arm(now, self.timeout);

        if len == 0 {
            return None;
        }
        let after_current = current.map_or(0, |c| (c + 1) % len);
        let first = self.buffer[0];
        let start = if self.buffer.len() > 1 && self.buffer.iter().all(|&c| c == first) {
            self.buffer.truncate(1);
            after_current
        } else if self.buffer.len() == 1 {
            after_current
        } else {
            current.map_or(0, |c| c.min(len - 1))
        };

        let found = (0..len)
            .map(|step| (start + step) % len)
            .find(|&position| label_at(position).is_some_and(|label| self.is_prefix_of(label)));
        log::trace!(
            "type-ahead: {} char(s) buffered, start {start}, found {found:?}",
            self.buffer.len()
        );
        found
    }

    fn is_prefix_of(&self, label: &str) -> bool {
        let mut chars = label.chars();
        self.buffer.iter().all(|&b| chars.next() == Some(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABELS: [&str; 4] = ["apple", "apricot", "banana", "avocado"];

    fn search(ta: &mut TypeAhead, ch: char, now: u64, current: usize) -> Option<usize> {
        ta.search(ch, now, Some(current), LABELS.len(), |i| Some(LABELS[i]))
    }

    #[test]
    fn first_press_starts_after_current() {
        let mut ta = TypeAhead::default();
        assert_eq!(search(&mut ta, 'a', 0, 0), Some(1));
    }

    #[test]
    fn repeated_key_cycles_and_wraps() {
        let mut ta = TypeAhead::default();
        assert_eq!(search(&mut ta, 'a', 0, 2), Some(3));
        assert_eq!(search(&mut ta, 'a', 10, 3), Some(0));
        assert_eq!(search(&mut ta, 'a', 20, 0), Some(1));
        assert_eq!(ta.buffer(), &['a']);
    }

    #[test]
    fn growing_prefix_keeps_current_match() {
        let mut ta = TypeAhead::default();
        assert_eq!(search(&mut ta, 'A', 0, 2), Some(3));
        assert_eq!(search(&mut ta, 'v', 10, 3), Some(3));
        assert_eq!(ta.buffer(), &['a', 'v']);
    }

    #[test]
    fn expanding_lowercase_buffers_one_char_per_key() {
        let mut ta = TypeAhead::default();
        let labels = ["i\u{307}stanbul", "izmir"];
        let found = ta.search('\u{130}', 0, Some(0), labels.len(), |i| Some(labels[i]));
        assert_eq!(found, Some(1));
        assert_eq!(ta.buffer(), &['i']);
    }

    #[test]
    fn no_match_keeps_buffer_and_reports_none() {
        let mut ta = TypeAhead::default();
        assert_eq!(search(&mut ta, 'z', 0, 0), None);
        assert_eq!(ta.buffer(), &['z']);
        assert!(ta.deadline().is_some());
    }

    #[test]
    fn skipped_positions_never_match() {
        let mut ta = TypeAhead::default();
        let found = ta.search('a', 0, Some(2), 4, |i| (i != 3).then(|| LABELS[i]));
        assert_eq!(found, Some(0));
    }

    #[test]
    fn buffer_resets_after_timeout() {
        let mut ta = TypeAhead::new(500);
        search(&mut ta, 'a', 0, 0);
        assert!(!ta.poll(499));
        assert!(ta.poll(500));
        assert!(ta.buffer().is_empty());
        assert_eq!(ta.deadline(), None);
    }

    #[test]
    fn stale_token_does_not_clear() {
        let mut ta = TypeAhead::new(500);
        search(&mut ta, 'a', 0, 0);
        let stale = ta.token().unwrap();
        search(&mut ta, 'p', 100, 1);
        assert!(!ta.fire(stale));
        assert_eq!(ta.buffer(), &['a', 'p']);
        let live = ta.token().unwrap();
        assert!(ta.fire(live));
        assert!(ta.buffer().is_empty());
    }

    #[test]
    fn cancel_clears_everything() {
        let mut ta = TypeAhead::default();
        search(&mut ta, 'a', 0, 0);
        ta.cancel();
        assert!(ta.buffer().is_empty());
        assert_eq!(ta.token(), None);
    }
}
