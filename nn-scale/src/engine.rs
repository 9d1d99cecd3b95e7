// SPDX-License-Identifier: MIT
//! # Scale Engine
//!
//! Fills a destination buffer from a source buffer using one [`AxisMap`] per
//! axis. The row index is computed once per destination row and the column
//! indices come either from a precomputed table or from a column
//! [`IndexSequence`](crate::IndexSequence) restarted on every row. Both give
//! identical output.
//!
//! ## Failure Atomicity
//!
//! Extents and buffer lengths are validated before the first write. A call
//! that returns an error has not touched the destination.
//!
//! ## Parallel Fill
//!
//! With the `rayon` feature, [`Scaler::scale_par`] hands destination rows to
//! the rayon pool. Each row only reads the source and its own row index
//! (from [`AxisMap::index_at`]), so rows need no synchronization.

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::error::{BufferRole, ScaleError, ScaleResult};
use crate::fixed::AxisMap;

/// How column indices are produced for each destination row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnMode {
    /// Precompute `destination_width` column indices once and reuse them.
    #[default]
    Table,
    /// Re-walk the column accumulator on every row.
    Incremental,
}

/// Precomputed mapping for one (source size, destination size) pair.
///
/// Build once with [`Scaler::new`] and reuse it for every frame of that
/// geometry.
#[derive(Debug, Clone)]
pub struct Scaler {
    rows: AxisMap,
    columns: AxisMap,
    column_table: Vec<usize>,
    mode: ColumnMode,
}

impl Scaler {
    pub fn new(
        source_width: usize,
        source_height: usize,
        destination_width: usize,
        destination_height: usize,
    ) -> ScaleResult<Self> {
        let columns = AxisMap::horizontal(source_width, destination_width)?;
        let rows = AxisMap::vertical(source_height, destination_height)?;
        log::debug!(
            "scaler {}x{} -> {}x{} (column shift {}, row shift {})",
            source_width,
            source_height,
            destination_width,
            destination_height,
            columns.shift(),
            rows.shift()
        );
        Ok(Self {
            rows,
            columns,
            column_table: columns.table(),
            mode: ColumnMode::default(),
        })
    }

    /// Selects how column indices are produced.
    #[must_use]
    pub fn with_mode(mut self, mode: ColumnMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> ColumnMode {
        self.mode
    }

    pub fn rows(&self) -> &AxisMap {
        &self.rows
    }

    pub fn columns(&self) -> &AxisMap {
        &self.columns
    }

    /// Precomputed column indices, one per destination column.
    pub fn column_table(&self) -> &[usize] {
        &self.column_table
    }

    /// Number of samples the source buffer must hold.
    pub fn source_len(&self) -> usize {
        self.columns.source_extent() * self.rows.source_extent()
    }

    /// Number of samples the destination buffer must hold.
    pub fn destination_len(&self) -> usize {
        self.columns.destination_extent() * self.rows.destination_extent()
    }

    /// Checks both buffer lengths against the scaler's geometry.
    pub fn check_buffers<P>(&self, source: &[P], destination: &[P]) -> ScaleResult<()> {
        check_len(BufferRole::Source, self.source_len(), source.len())?;
        check_len(
            BufferRole::Destination,
            self.destination_len(),
            destination.len(),
        )
    }

    /// Fills `destination` from `source`.
    pub fn scale<P: Copy>(&self, source: &[P], destination: &mut [P]) -> ScaleResult<()> {
        self.check_buffers(source, destination)?;
        match self.mode {
            ColumnMode::Table => self.fill_with_table(source, destination),
            ColumnMode::Incremental => self.fill_incremental(source, destination),
        }
        Ok(())
    }

    /// Same output as [`Scaler::scale`], with rows filled on the rayon pool.
    #[cfg(feature = "rayon")]
    pub fn scale_par<P>(&self, source: &[P], destination: &mut [P]) -> ScaleResult<()>
    where
        P: Copy + Send + Sync,
    {
        self.check_buffers(source, destination)?;
        let source_width = self.columns.source_extent();
        destination
            .par_chunks_exact_mut(self.columns.destination_extent())
            .enumerate()
            .for_each(|(y, dst_row)| {
                let src_y = self.rows.index_at(y);
                let src_row = &source[src_y * source_width..(src_y + 1) * source_width];
                copy_row(src_row, dst_row, &self.column_table);
            });
        Ok(())
    }

    fn fill_with_table<P: Copy>(&self, source: &[P], destination: &mut [P]) {
        let source_width = self.columns.source_extent();
        let dst_rows = destination.chunks_exact_mut(self.columns.destination_extent());
        for (dst_row, src_y) in dst_rows.zip(self.rows.indices()) {
            let src_row = &source[src_y * source_width..(src_y + 1) * source_width];
            copy_row(src_row, dst_row, &self.column_table);
        }
    }

    fn fill_incremental<P: Copy>(&self, source: &[P], destination: &mut [P]) {
        let source_width = self.columns.source_extent();
        let mut columns = self.columns.indices();
        let dst_rows = destination.chunks_exact_mut(self.columns.destination_extent());
        for (dst_row, src_y) in dst_rows.zip(self.rows.indices()) {
            let src_row = &source[src_y * source_width..(src_y + 1) * source_width];
            columns.restart();
            for (out, src_x) in dst_row.iter_mut().zip(columns.by_ref()) {
                *out = src_row[src_x];
            }
        }
    }
}

#[inline]
fn copy_row<P: Copy>(src_row: &[P], dst_row: &mut [P], column_table: &[usize]) {
    for (out, &src_x) in dst_row.iter_mut().zip(column_table) {
        *out = src_row[src_x];
    }
}

pub(crate) fn check_len(buffer: BufferRole, expected: usize, actual: usize) -> ScaleResult<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(ScaleError::BufferSizeMismatch {
            buffer,
            expected,
            actual,
        })
    }
}

/// Scales a row-major `source` of `source_width x source_height` samples into
/// `destination` of `destination_width x destination_height` samples.
///
/// # Errors
/// * [`ScaleError::InvalidExtent`] if any dimension is zero or above
///   [`crate::MAX_EXTENT`].
/// * [`ScaleError::BufferSizeMismatch`] if a buffer's length is not
///   `width * height`.
///
/// Nothing is written to `destination` when an error is returned.
///
/// # Example
/// ```
/// let source = [1u32, 2, 3, 4];
/// let mut destination = [0u32; 16];
/// nn_scale::scale(&source, 2, 2, &mut destination, 4, 4).unwrap();
/// assert_eq!(&destination[..4], &[1, 1, 2, 2]);
/// assert_eq!(&destination[8..12], &[3, 3, 4, 4]);
/// ```
pub fn scale<P: Copy>(
    source: &[P],
    source_width: usize,
    source_height: usize,
    destination: &mut [P],
    destination_width: usize,
    destination_height: usize,
) -> ScaleResult<()> {
    Scaler::new(
        source_width,
        source_height,
        destination_width,
        destination_height,
    )?
    .scale(source, destination)
}

/// Row-parallel variant of [`scale`].
#[cfg(feature = "rayon")]
pub fn scale_par<P: Copy + Send + Sync>(
    source: &[P],
    source_width: usize,
    source_height: usize,
    destination: &mut [P],
    destination_width: usize,
    destination_height: usize,
) -> ScaleResult<()> {
    Scaler::new(
        source_width,
        source_height,
        destination_width,
        destination_height,
    )?
    .scale_par(source, destination)
}

#[cfg(test)]
mod tests {
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::error::Axis;

    fn naive(source: &[u32], sw: usize, sh: usize, dw: usize, dh: usize) -> Vec<u32> {
        let mut out = Vec::with_capacity(dw * dh);
        for y in 0..dh {
            for x in 0..dw {
                out.push(source[(y * sh / dh) * sw + x * sw / dw]);
            }
        }
        out
    }

    fn numbered(len: usize) -> Vec<u32> {
        (0..len as u32).collect()
    }

    #[test]
    fn test_two_by_two_to_four_by_four() {
        let source = [1u32, 2, 3, 4];
        let mut destination = [0u32; 16];
        scale(&source, 2, 2, &mut destination, 4, 4).unwrap();
        assert_eq!(
            destination,
            [1, 1, 2, 2, 1, 1, 2, 2, 3, 3, 4, 4, 3, 3, 4, 4]
        );
    }

    #[test]
    fn test_column_indices_for_four_to_ten() {
        let scaler = Scaler::new(4, 1, 10, 1).unwrap();
        assert_eq!(scaler.column_table(), &[0, 0, 0, 1, 1, 2, 2, 2, 3, 3]);

        let source = [10u8, 11, 12, 13];
        let mut destination = [0u8; 10];
        scaler.scale(&source, &mut destination).unwrap();
        assert_eq!(destination, [10, 10, 10, 11, 11, 12, 12, 12, 13, 13]);
    }

    #[test]
    fn test_zero_destination_width_writes_nothing() {
        let source = [1u32, 2, 3, 4];
        let mut destination = [7u32; 16];
        let err = scale(&source, 2, 2, &mut destination, 0, 4).unwrap_err();
        assert_eq!(
            err,
            ScaleError::InvalidExtent {
                axis: Axis::DestinationWidth,
                extent: 0
            }
        );
        assert!(destination.iter().all(|&v| v == 7));
    }

    #[test]
    fn test_short_destination_is_rejected() {
        let source = [1u32, 2, 3, 4];
        let mut destination = [7u32; 5];
        let err = scale(&source, 2, 2, &mut destination, 4, 4).unwrap_err();
        assert_eq!(
            err,
            ScaleError::BufferSizeMismatch {
                buffer: BufferRole::Destination,
                expected: 16,
                actual: 5
            }
        );
        assert!(destination.iter().all(|&v| v == 7));
    }

    #[test]
    fn test_wrong_source_length_is_rejected() {
        let source = [1u32, 2, 3];
        let mut destination = [0u32; 16];
        assert!(matches!(
            scale(&source, 2, 2, &mut destination, 4, 4),
            Err(ScaleError::BufferSizeMismatch {
                buffer: BufferRole::Source,
                ..
            })
        ));
    }

    #[test]
    fn test_identity_copies_source() {
        let source = numbered(12 * 7);
        let mut destination = vec![0; source.len()];
        scale(&source, 12, 7, &mut destination, 12, 7).unwrap();
        assert_eq!(source, destination);
    }

    #[test]
    fn test_classic_sizes_match_division() {
        let (sw, sh, dw, dh) = (64, 48, 192, 108);
        let source = numbered(sw * sh);
        let mut destination = vec![0; dw * dh];
        scale(&source, sw, sh, &mut destination, dw, dh).unwrap();
        assert_eq!(destination, naive(&source, sw, sh, dw, dh));
    }

    #[test]
    fn test_scaler_is_reusable() {
        let scaler = Scaler::new(3, 3, 5, 2).unwrap();
        let mut first = vec![0u16; 10];
        let mut second = vec![0u16; 10];
        scaler.scale(&[1, 2, 3, 4, 5, 6, 7, 8, 9], &mut first).unwrap();
        scaler.scale(&[1, 2, 3, 4, 5, 6, 7, 8, 9], &mut second).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, vec![1, 1, 2, 2, 3, 4, 4, 5, 5, 6]);
    }

    #[quickcheck]
    fn test_column_modes_agree(sw: u8, sh: u8, dw: u8, dh: u8) -> TestResult {
        if sw == 0 || sh == 0 || dw == 0 || dh == 0 {
            return TestResult::discard();
        }
        let (sw, sh, dw, dh) = (sw as usize, sh as usize, dw as usize, dh as usize);
        let source = numbered(sw * sh);
        let table = Scaler::new(sw, sh, dw, dh).unwrap();
        let incremental = table.clone().with_mode(ColumnMode::Incremental);

        let mut a = vec![0; dw * dh];
        let mut b = vec![0; dw * dh];
        table.scale(&source, &mut a).unwrap();
        incremental.scale(&source, &mut b).unwrap();
        TestResult::from_bool(a == b && a == naive(&source, sw, sh, dw, dh))
    }

    #[cfg(feature = "rayon")]
    #[quickcheck]
    fn test_parallel_matches_sequential(sw: u8, sh: u8, dw: u8, dh: u8) -> TestResult {
        if sw == 0 || sh == 0 || dw == 0 || dh == 0 {
            return TestResult::discard();
        }
        let (sw, sh, dw, dh) = (sw as usize, sh as usize, dw as usize, dh as usize);
        let source = numbered(sw * sh);
        let mut sequential = vec![0; dw * dh];
        let mut parallel = vec![0; dw * dh];
        scale(&source, sw, sh, &mut sequential, dw, dh).unwrap();
        scale_par(&source, sw, sh, &mut parallel, dw, dh).unwrap();
        TestResult::from_bool(sequential == parallel)
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn test_parallel_rejects_before_writing() {
        let mut destination = [9u32; 5];
        assert!(scale_par(&[1u32, 2, 3, 4], 2, 2, &mut destination, 4, 4).is_err());
        assert_eq!(destination, [9; 5]);
    }
}
