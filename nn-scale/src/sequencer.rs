// SPDX-License-Identifier: MIT
//! Lazy per-axis index generation.
//!
//! [`IndexSequence`] walks one axis with an accumulator: emit
//! `min(acc >> shift, S - 1)`, then add the increment. One add and one shift
//! per step, no division.

use std::iter::FusedIterator;

use crate::fixed::AxisMap;

/// Restartable iterator over the source indices of one axis.
///
/// Yields exactly `destination_extent` items. The sequence starts at 0, never
/// decreases and never leaves `[0, source_extent - 1]`.
#[derive(Debug, Clone)]
pub struct IndexSequence {
    map: AxisMap,
    accumulator: u64,
    remaining: usize,
}

impl IndexSequence {
    pub fn new(map: AxisMap) -> Self {
        Self {
            map,
            accumulator: 0,
            remaining: map.destination_extent(),
        }
    }

    /// Rewinds to the first destination coordinate.
    pub fn restart(&mut self) {
        self.accumulator = 0;
        self.remaining = self.map.destination_extent();
    }

    pub fn map(&self) -> &AxisMap {
        &self.map
    }
}

impl Iterator for IndexSequence {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.map.to_index(self.accumulator);
        self.remaining -= 1;
        // Skip the add after the final step, the accumulator is not read again.
        if self.remaining > 0 {
            self.accumulator += self.map.increment();
        }
        Some(index)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    fn nth(&mut self, n: usize) -> Option<usize> {
        if n >= self.remaining {
            self.remaining = 0;
            return None;
        }
        self.accumulator += n as u64 * self.map.increment();
        self.remaining -= n;
        self.next()
    }
}

impl ExactSizeIterator for IndexSequence {}

impl FusedIterator for IndexSequence {}

impl AxisMap {
    /// Starts a fresh walk over this axis.
    pub fn indices(&self) -> IndexSequence {
        IndexSequence::new(*self)
    }
}
