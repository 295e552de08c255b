// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loop buffer: the padded sequence of real slides plus leading and trailing clones.
//!
//! The buffer is a derived, read-only projection of the host's real slides. It
//! is rebuilt wholesale whenever the real slides change or the clone count
//! changes, and never patched in place. Hosts render one element per
//! [`BufferSlot`]; for clone slots they materialize a copy of the element
//! identified by the slot's key.
//!
//! With looping enabled and `c` clones per side, a buffer over real slides
//! `A B C` (`c = 3`) reads:
//!
//! ```text
//! position: 0 1 2 | 3 4 5 | 6 7 8
//! slide:    A B C | A B C | A B C
//!           clones  real    clones
//! ```
//!
//! The leading clones mirror the tail of the real sequence so that the slot
//! immediately left of the first real slide is always a copy of the last one.

use alloc::vec::Vec;

use crate::layout::whole_items;

/// One rendered position in the loop buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BufferSlot<K> {
    /// Host handle of the real slide this slot shows (cloned for clone slots).
    pub key: K,
    /// Index of the real slide this slot shows.
    pub real_index: usize,
    /// `true` for engine-created clones.
    pub is_clone: bool,
    /// Position of this slot in the buffer.
    pub buffer_position: usize,
}

/// Real slides padded with clones on both sides for seamless looping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoopBuffer<K> {
    slots: Vec<BufferSlot<K>>,
    real_count: usize,
    clone_count: usize,
}

impl<K> Default for LoopBuffer<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> LoopBuffer<K> {
    /// Creates an empty buffer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            real_count: 0,
            clone_count: 0,
        }
    }

    /// Clones needed on each side to cover `items_per_view` plus one
    /// neighbor in either direction.
    #[must_use]
    pub fn clone_count_for(items_per_view: f64) -> usize {
        whole_items(items_per_view).saturating_add(2)
    }

    /// Number of real slides.
    #[must_use]
    pub fn real_count(&self) -> usize {
        self.real_count
    }

    /// Number of clones on each side (0 when not looping).
    #[must_use]
    pub fn clone_count(&self) -> usize {
        self.clone_count
    }

    /// Total number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if there are no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// All slots in buffer order.
    #[must_use]
    pub fn slots(&self) -> &[BufferSlot<K>] {
        &self.slots
    }

    /// The slot at `buffer_position`, if any.
    #[must_use]
    pub fn slot(&self, buffer_position: usize) -> Option<&BufferSlot<K>> {
        self.slots.get(buffer_position)
    }

    /// Buffer position of the real (non-clone) slot for `real_index`.
    #[must_use]
    pub fn buffer_position_of(&self, real_index: usize) -> Option<usize> {
        (real_index < self.real_count).then_some(self.clone_count + real_index)
    }

    /// Iterates over the clone slots only.
    pub fn clones(&self) -> impl Iterator<Item = &BufferSlot<K>> {
        self.slots.iter().filter(|slot| slot.is_clone)
    }
}

impl<K: Clone> LoopBuffer<K> {
    /// Discards all slots and rebuilds the buffer from `real`.
    ///
    /// Without looping the buffer is exactly the real slides. With looping,
    /// [`LoopBuffer::clone_count_for`] clones are placed on each side. An empty
    /// `real` leaves an empty buffer.
    pub fn rebuild(&mut self, real: &[K], items_per_view: f64, looping: bool) {
        self.slots.clear();
        self.real_count = real.len();
        self.clone_count = if looping && !real.is_empty() {
            Self::clone_count_for(items_per_view)
        } else {
            0
        };
        if real.is_empty() {
            return;
        }

        let n = real.len();
        let c = self.clone_count;
        self.slots.reserve(n.saturating_add(c.saturating_mul(2)));

        // Leading clones, nearest-to-real last: position `c - 1` shows the last
        // real slide, `c - 2` the one before it, and so on.
        for pos in 0..c {
            let real_index = n - 1 - ((c - 1 - pos) % n);
            self.push(real, real_index, true);
        }
        for real_index in 0..n {
            self.push(real, real_index, false);
        }
        for i in 0..c {
            self.push(real, i % n, true);
        }
    }

    fn push(&mut self, real: &[K], real_index: usize, is_clone: bool) {
        let buffer_position = self.slots.len();
        self.slots.push(BufferSlot {
            key: real[real_index].clone(),
            real_index,
            is_clone,
            buffer_position,
        });
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    fn real_indices<K>(buffer: &LoopBuffer<K>) -> Vec<usize> {
        buffer.slots().iter().map(|s| s.real_index).collect()
    }

    #[test]
    fn non_looping_buffer_is_the_real_sequence() {
        let mut buffer = LoopBuffer::new();
        buffer.rebuild(&["a", "b", "c"], 2.0, false);

        assert_eq!(buffer.clone_count(), 0);
        assert_eq!(buffer.len(), 3);
        assert_eq!(real_indices(&buffer), [0, 1, 2]);
        assert_eq!(buffer.clones().count(), 0);
    }

    #[test]
    fn looping_buffer_pads_both_sides() {
        let mut buffer = LoopBuffer::new();
        buffer.rebuild(&["a", "b", "c", "d", "e"], 1.0, true);

        // ceil(1) + 2 clones on each side.
        assert_eq!(buffer.clone_count(), 3);
        assert_eq!(buffer.len(), 11);
        assert_eq!(real_indices(&buffer), [2, 3, 4, 0, 1, 2, 3, 4, 0, 1, 2]);

        let keys: Vec<_> = buffer.slots().iter().map(|s| s.key).collect();
        assert_eq!(keys, ["c", "d", "e", "a", "b", "c", "d", "e", "a", "b", "c"]);
    }

    #[test]
    fn huge_items_per_view_keeps_the_buffer_bounded() {
        assert_eq!(LoopBuffer::<u32>::clone_count_for(1e300), 102);

        let mut buffer = LoopBuffer::new();
        buffer.rebuild(&[1_u32, 2, 3], f64::MAX, true);
        assert_eq!(buffer.clone_count(), 102);
        assert_eq!(buffer.len(), 3 + 2 * 102);
    }

    #[test]
    fn clones_wrap_when_fewer_real_slides_than_clones() {
        let mut buffer = LoopBuffer::new();
        buffer.rebuild(&[10_u32, 20], 2.5, true);

        assert_eq!(buffer.clone_count(), 5);
        // Leading: immediate left neighbor of the first real slide is the last one.
        assert_eq!(
            real_indices(&buffer),
            [1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0]
        );
        assert_eq!(buffer.slot(4).map(|s| s.real_index), Some(1));
    }

    #[test]
    fn clone_flags_and_positions() {
        let mut buffer = LoopBuffer::new();
        buffer.rebuild(&['x', 'y', 'z'], 1.0, true);

        for (pos, slot) in buffer.slots().iter().enumerate() {
            assert_eq!(slot.buffer_position, pos);
            let in_real_range = (3..6).contains(&pos);
            assert_eq!(slot.is_clone, !in_real_range);
        }
        assert_eq!(buffer.clones().count(), 6);
        assert_eq!(buffer.buffer_position_of(0), Some(3));
        assert_eq!(buffer.buffer_position_of(2), Some(5));
        assert_eq!(buffer.buffer_position_of(3), None);
    }

    #[test]
    fn rebuild_is_idempotent() {
        let real = ["a", "b", "c", "d"];
        let mut buffer = LoopBuffer::new();
        buffer.rebuild(&real, 2.0, true);
        let first = buffer.clone();
        buffer.rebuild(&real, 2.0, true);

        assert_eq!(buffer, first);
        assert_eq!(buffer.clones().count(), 8);
    }

    #[test]
    fn rebuild_discards_previous_clones() {
        let mut buffer = LoopBuffer::new();
        buffer.rebuild(&["a", "b", "c"], 3.0, true);
        assert_eq!(buffer.len(), 3 + 2 * 5);

        buffer.rebuild(&["a", "b", "c"], 1.0, false);
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.clones().count(), 0);
    }

    #[test]
    fn empty_real_slides_leave_empty_buffer() {
        let mut buffer = LoopBuffer::<&str>::new();
        buffer.rebuild(&[], 1.0, true);

        assert!(buffer.is_empty());
        assert_eq!(buffer.clone_count(), 0);
        assert_eq!(buffer.real_count(), 0);
    }
}
