// SPDX-License-Identifier: MIT
//! # Fixed-Point Axis Mapping
//!
//! Nearest-neighbor scaling needs `floor(x * S / D)` for every destination
//! coordinate `x`. Instead of dividing per pixel, each axis gets a one-time
//! setup that turns `S / D` into a `u64` fixed-point increment:
//!
//! 1. [`select_shift`] picks the number of fractional bits from `D` alone:
//!    the largest `shift` with `(u64::MAX >> (shift + 1)) > D`.
//! 2. The shift is narrowed until `(S << shift) + D` still fits in a `u64`,
//!    so the accumulator cannot wrap when shrinking large sources.
//! 3. [`encode_increment`] computes `ceil((S << shift) / D)`.
//!
//! After that, walking the axis is one add and one shift per step.
//!
//! ## Rounding
//!
//! The increment is rounded up. Truncating would let the accumulator fall
//! short and lose the last source row or column; rounding up can overshoot,
//! which is why every produced index is clamped to `S - 1`.
//!
//! With `u64` arithmetic the produced index equals `floor(x * S / D)` exactly
//! whenever `D * D <= 2^shift`, which holds for all extents up to `2^20`.
//! Between `2^20` and [`MAX_EXTENT`] the result can run at most one index
//! ahead of the exact value before clamping.

use crate::error::{Axis, ScaleError, ScaleResult};

/// Largest accepted extent on any axis.
pub const MAX_EXTENT: usize = 1 << 24;

/// Returns the number of fractional bits to use for a destination extent.
///
/// This is the largest `shift` such that `(u64::MAX >> (shift + 1)) > D`.
/// Returns `None` when `destination_extent` is zero or above [`MAX_EXTENT`].
#[must_use]
pub fn select_shift(destination_extent: usize) -> Option<u32> {
    if destination_extent == 0 || destination_extent > MAX_EXTENT {
        return None;
    }
    let d = destination_extent as u64;
    let mut shift = 0;
    while shift + 2 < u64::BITS && (u64::MAX >> (shift + 2)) > d {
        shift += 1;
    }
    Some(shift)
}

/// Lowers `shift` until `(S << shift) + D` fits in a `u64`.
#[must_use]
pub fn narrow_shift(source_extent: usize, destination_extent: usize, shift: u32) -> u32 {
    let s = source_extent as u64;
    let headroom = u64::MAX - destination_extent as u64;
    let mut shift = shift;
    while shift > 0 && s > (headroom >> shift) {
        shift -= 1;
    }
    shift
}

/// Computes `ceil((S << shift) / D)`.
///
/// Returns `None` if either extent is zero or `S << shift` does not fit.
#[must_use]
pub fn encode_increment(source_extent: usize, destination_extent: usize, shift: u32) -> Option<u64> {
    if source_extent == 0 || destination_extent == 0 || shift >= u64::BITS {
        return None;
    }
    let s = source_extent as u64;
    if s > (u64::MAX >> shift) {
        return None;
    }
    Some((s << shift).div_ceil(destination_extent as u64))
}

/// Immutable per-axis mapping from destination coordinates to source indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisMap {
    source_extent: usize,
    destination_extent: usize,
    shift: u32,
    increment: u64,
}

impl AxisMap {
    /// Mapping for the column axis (`source_width` → `destination_width`).
    pub fn horizontal(source_width: usize, destination_width: usize) -> ScaleResult<Self> {
        Self::build(
            (Axis::SourceWidth, source_width),
            (Axis::DestinationWidth, destination_width),
        )
    }

    /// Mapping for the row axis (`source_height` → `destination_height`).
    pub fn vertical(source_height: usize, destination_height: usize) -> ScaleResult<Self> {
        Self::build(
            (Axis::SourceHeight, source_height),
            (Axis::DestinationHeight, destination_height),
        )
    }

    fn build(source: (Axis, usize), destination: (Axis, usize)) -> ScaleResult<Self> {
        let (source_axis, source_extent) = source;
        let (destination_axis, destination_extent) = destination;

        if source_extent == 0 || source_extent > MAX_EXTENT {
            return Err(ScaleError::InvalidExtent {
                axis: source_axis,
                extent: source_extent,
            });
        }
        let invalid_destination = ScaleError::InvalidExtent {
            axis: destination_axis,
            extent: destination_extent,
        };
        let shift = select_shift(destination_extent).ok_or_else(|| invalid_destination.clone())?;
        let shift = narrow_shift(source_extent, destination_extent, shift);
        let increment = encode_increment(source_extent, destination_extent, shift)
            .ok_or(invalid_destination)?;

        log::trace!(
            "{source_axis} {source_extent} -> {destination_extent}: shift {shift}, increment {increment:#x}"
        );

        Ok(Self {
            source_extent,
            destination_extent,
            shift,
            increment,
        })
    }

    pub fn source_extent(&self) -> usize {
        self.source_extent
    }

    pub fn destination_extent(&self) -> usize {
        self.destination_extent
    }

    /// Fractional bits of the fixed-point increment.
    pub fn shift(&self) -> u32 {
        self.shift
    }

    /// `ceil((S << shift) / D)`.
    pub fn increment(&self) -> u64 {
        self.increment
    }

    /// True when the mapping is `x -> x`.
    pub fn is_identity(&self) -> bool {
        self.source_extent == self.destination_extent
    }

    /// Source index for destination coordinate `x`, without walking the axis.
    ///
    /// Equal to the `x`-th element of [`AxisMap::indices`]. `x` must be below
    /// the destination extent.
    #[inline]
    pub fn index_at(&self, x: usize) -> usize {
        debug_assert!(x < self.destination_extent);
        self.to_index(x as u64 * self.increment)
    }

    /// Converts an accumulator value to a clamped source index.
    #[inline(always)]
    pub(crate) fn to_index(&self, accumulator: u64) -> usize {
        ((accumulator >> self.shift) as usize).min(self.source_extent - 1)
    }

    /// Collects the whole index sequence into a lookup table.
    pub fn table(&self) -> Vec<usize> {
        self.indices().collect()
    }
}
