// SPDX-License-Identifier: MIT
//! # Interchangeable Fill Strategies
//!
//! Every [`Method`] computes the same mapping, `floor(x * S / D)` on both axes,
//! and must produce byte-identical output. They differ only in where the work
//! happens: per pixel, once per row, in precomputed tables, or in a fixed-point
//! accumulator. The benchmark harness times them against each other.
//!
//! | Method | Per-pixel work | Setup |
//! |---|---|---|
//! | `division` | two multiplies, two divides | none |
//! | `hoisted-division` | one multiply, one divide | none |
//! | `backward` | two multiplies, two divides | none |
//! | `tables` | two lookups | `Dw + Dh` divides |
//! | `flat-table` | one lookup | `Dw * Dh` entries |
//! | `change-trigger` | one add | `Dw + Dh` divides |
//! | `fixed-point` | add + shift | one division per axis |
//! | `best` | one lookup, row hoisted | one division per axis, `Dw` table |
//! | `parallel` | as `best`, rows on the rayon pool | as `best` |

use crate::engine::{ColumnMode, Scaler};
use crate::error::ScaleResult;
use crate::fixed::AxisMap;

/// Nearest-neighbor fill strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Method {
    /// Divide on every pixel for both axes.
    Division,
    /// Divide once per row for the row index, per pixel for the column.
    HoistedDivision,
    /// Like `division`, iterating rows and columns from the end.
    Backward,
    /// Precomputed row and column index tables.
    Tables,
    /// One precomputed source offset per destination pixel.
    FlatTable,
    /// Per-coordinate advance counts; the walk only adds.
    ChangeTrigger,
    /// Fixed-point accumulators on both axes, columns re-walked per row.
    FixedPoint,
    /// Fixed-point row walk with a precomputed column table.
    Best,
    /// `best` with rows distributed over the rayon pool.
    Parallel,
}

impl Method {
    pub const ALL: [Method; 9] = [
        Method::Division,
        Method::HoistedDivision,
        Method::Backward,
        Method::Tables,
        Method::FlatTable,
        Method::ChangeTrigger,
        Method::FixedPoint,
        Method::Best,
        Method::Parallel,
    ];

    /// Stable kebab-case name, also used for dump file names.
    pub fn name(self) -> &'static str {
        match self {
            Method::Division => "division",
            Method::HoistedDivision => "hoisted-division",
            Method::Backward => "backward",
            Method::Tables => "tables",
            Method::FlatTable => "flat-table",
            Method::ChangeTrigger => "change-trigger",
            Method::FixedPoint => "fixed-point",
            Method::Best => "best",
            Method::Parallel => "parallel",
        }
    }

    /// Fills `destination` from `source` with this strategy.
    ///
    /// Validation is shared by all methods: the same inputs fail with the
    /// same error and leave `destination` untouched.
    pub fn apply<P: Copy + Send + Sync>(
        self,
        source: &[P],
        source_width: usize,
        source_height: usize,
        destination: &mut [P],
        destination_width: usize,
        destination_height: usize,
    ) -> ScaleResult<()> {
        let scaler = Scaler::new(
            source_width,
            source_height,
            destination_width,
            destination_height,
        )?;
        scaler.check_buffers(source, destination)?;
        let geometry = Geometry {
            sw: source_width,
            sh: source_height,
            dw: destination_width,
            dh: destination_height,
        };

        match self {
            Method::Division => division(source, destination, geometry),
            Method::HoistedDivision => hoisted_division(source, destination, geometry),
            Method::Backward => backward(source, destination, geometry),
            Method::Tables => tables(source, destination, geometry),
            Method::FlatTable => flat_table(source, destination, geometry),
            Method::ChangeTrigger => change_trigger(source, destination, geometry),
            Method::FixedPoint => fixed_point(source, destination, scaler.rows(), scaler.columns()),
            Method::Best => scaler.with_mode(ColumnMode::Table).scale(source, destination)?,
            Method::Parallel => parallel(&scaler, source, destination)?,
        }
        Ok(())
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy)]
struct Geometry {
    sw: usize,
    sh: usize,
    dw: usize,
    dh: usize,
}

/// `floor(i * s / d)` without intermediate overflow on 32-bit targets.
#[inline(always)]
fn floor_index(i: usize, s: usize, d: usize) -> usize {
    (i as u64 * s as u64 / d as u64) as usize
}

fn division<P: Copy>(source: &[P], destination: &mut [P], g: Geometry) {
    for y in 0..g.dh {
        for x in 0..g.dw {
            destination[y * g.dw + x] =
                source[floor_index(y, g.sh, g.dh) * g.sw + floor_index(x, g.sw, g.dw)];
        }
    }
}

fn hoisted_division<P: Copy>(source: &[P], destination: &mut [P], g: Geometry) {
    for (y, dst_row) in destination.chunks_exact_mut(g.dw).enumerate() {
        let src_y = floor_index(y, g.sh, g.dh);
        let src_row = &source[src_y * g.sw..(src_y + 1) * g.sw];
        for (x, out) in dst_row.iter_mut().enumerate() {
            *out = src_row[floor_index(x, g.sw, g.dw)];
        }
    }
}

fn backward<P: Copy>(source: &[P], destination: &mut [P], g: Geometry) {
    for y in (0..g.dh).rev() {
        for x in (0..g.dw).rev() {
            destination[y * g.dw + x] =
                source[floor_index(y, g.sh, g.dh) * g.sw + floor_index(x, g.sw, g.dw)];
        }
    }
}

fn tables<P: Copy>(source: &[P], destination: &mut [P], g: Geometry) {
    let columns: Vec<usize> = (0..g.dw).map(|x| floor_index(x, g.sw, g.dw)).collect();
    let rows: Vec<usize> = (0..g.dh).map(|y| floor_index(y, g.sh, g.dh)).collect();
    for (dst_row, &src_y) in destination.chunks_exact_mut(g.dw).zip(&rows) {
        for (out, &src_x) in dst_row.iter_mut().zip(&columns) {
            *out = source[src_y * g.sw + src_x];
        }
    }
}

fn flat_table<P: Copy>(source: &[P], destination: &mut [P], g: Geometry) {
    let mut offsets = Vec::with_capacity(g.dw * g.dh);
    for y in 0..g.dh {
        let row_offset = floor_index(y, g.sh, g.dh) * g.sw;
        offsets.extend((0..g.dw).map(|x| row_offset + floor_index(x, g.sw, g.dw)));
    }
    for (out, &offset) in destination.iter_mut().zip(&offsets) {
        *out = source[offset];
    }
}

/// Source index advance at each destination coordinate; entry 0 is always 0.
///
/// When magnifying every entry is 0 or 1.
fn advances(s: usize, d: usize) -> Vec<usize> {
    let mut steps = Vec::with_capacity(d);
    steps.push(0);
    steps.extend((1..d).map(|i| floor_index(i, s, d) - floor_index(i - 1, s, d)));
    steps
}

fn change_trigger<P: Copy>(source: &[P], destination: &mut [P], g: Geometry) {
    let column_steps = advances(g.sw, g.dw);
    let row_steps = advances(g.sh, g.dh);
    let mut src_y = 0;
    for (dst_row, &row_step) in destination.chunks_exact_mut(g.dw).zip(&row_steps) {
        src_y += row_step;
        let src_row = &source[src_y * g.sw..(src_y + 1) * g.sw];
        let mut src_x = 0;
        for (out, &column_step) in dst_row.iter_mut().zip(&column_steps) {
            src_x += column_step;
            *out = src_row[src_x];
        }
    }
}

fn fixed_point<P: Copy>(source: &[P], destination: &mut [P], rows: &AxisMap, columns: &AxisMap) {
    let sw = columns.source_extent();
    let dw = columns.destination_extent();
    let mut column_walk = columns.indices();
    for (y, src_y) in rows.indices().enumerate() {
        column_walk.restart();
        for (x, src_x) in column_walk.by_ref().enumerate() {
            destination[y * dw + x] = source[src_y * sw + src_x];
        }
    }
}

#[cfg(feature = "rayon")]
fn parallel<P: Copy + Send + Sync>(
    scaler: &Scaler,
    source: &[P],
    destination: &mut [P],
) -> ScaleResult<()> {
    scaler.scale_par(source, destination)
}

#[cfg(not(feature = "rayon"))]
fn parallel<P: Copy + Send + Sync>(
    scaler: &Scaler,
    source: &[P],
    destination: &mut [P],
) -> ScaleResult<()> {
    log::debug!("built without rayon, parallel fill runs on the calling thread");
    scaler.scale(source, destination)
}
