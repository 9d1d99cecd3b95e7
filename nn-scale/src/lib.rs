// SPDX-License-Identifier: MIT
//! # nn-scale: Division-Free Nearest-Neighbor Scaling
//!
//! This crate maps every destination pixel to exactly one source pixel by
//! proportional position, `floor(x * S / D)` on each axis, without a division
//! or a float in the per-pixel loop.
//!
//! ## Architecture Overview
//!
//! The kernel is built leaf-first:
//! 1. **Precision selection** ([`select_shift`]): how many fractional bits the
//!    `u64` fixed-point ratio can carry for a destination extent
//! 2. **Ratio encoding** ([`encode_increment`]): `ceil((S << shift) / D)`
//! 3. **Index sequencing** ([`IndexSequence`]): per-axis accumulator walk,
//!    clamped to `S - 1`
//! 4. **Scale engine** ([`scale`], [`Scaler`]): row index hoisted, column
//!    indices from a table or a restarted walk
//!
//! ## Key Components
//!
//! - [`fixed`]: precision selection, ratio encoding, [`AxisMap`]
//! - [`sequencer`]: lazy restartable index iterator
//! - [`engine`]: buffer fill, sequential and row-parallel
//! - [`buffer`]: owned row-major [`ImageBuf`]
//! - [`methods`]: alternative fill strategies with identical output, for
//!   benchmarking
//!
//! ## Performance Characteristics
//!
//! - **Setup**: one division per axis plus an optional `destination_width`
//!   column table
//! - **Per pixel**: one table lookup and one copy
//! - **Zero allocation in the fill**: buffers are borrowed from the caller
//! - **Parallel**: rows are independent; the `rayon` feature (default) adds
//!   [`scale_par`]
//!
//! ## Usage Example
//!
//! ```rust
//! use nn_scale::{scale, Scaler};
//!
//! let source = [1u32, 2, 3, 4];
//! let mut destination = vec![0u32; 16];
//! scale(&source, 2, 2, &mut destination, 4, 4)?;
//! assert_eq!(&destination[..4], &[1, 1, 2, 2]);
//!
//! // Reuse the mapping across frames of the same geometry
//! let scaler = Scaler::new(2, 2, 4, 4)?;
//! scaler.scale(&source, &mut destination)?;
//! # Ok::<(), nn_scale::ScaleError>(())
//! ```
//!
//! ## Future Optimizations
//!
//! TODO: Specialize `copy_row` for runs of equal column indices when magnifying
//! (memset-style fills instead of per-sample lookups).

pub mod buffer;
pub mod engine;
pub mod error;
pub mod fixed;
pub mod methods;
pub mod sequencer;

pub use buffer::ImageBuf;
#[cfg(feature = "rayon")]
pub use engine::scale_par;
pub use engine::{scale, ColumnMode, Scaler};
pub use error::{Axis, BufferRole, ScaleError, ScaleResult};
pub use fixed::{encode_increment, narrow_shift, select_shift, AxisMap, MAX_EXTENT};
pub use methods::Method;
pub use sequencer::IndexSequence;
