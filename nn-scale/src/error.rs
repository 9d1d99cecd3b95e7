// SPDX-License-Identifier: MIT
//! Error types for nn-scale.
//!
//! Both variants are caller contract violations. They are detected before the
//! destination is touched, so a failed call never leaves a half-written buffer.

use std::fmt;

use thiserror::Error;

/// Which axis (or which dimension of a buffer) an extent belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    SourceWidth,
    SourceHeight,
    DestinationWidth,
    DestinationHeight,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::SourceWidth => "source width",
            Axis::SourceHeight => "source height",
            Axis::DestinationWidth => "destination width",
            Axis::DestinationHeight => "destination height",
        };
        f.write_str(name)
    }
}

/// Which buffer failed the `width * height` length check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferRole {
    Source,
    Destination,
    Image,
}

impl fmt::Display for BufferRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferRole::Source => f.write_str("source"),
            BufferRole::Destination => f.write_str("destination"),
            BufferRole::Image => f.write_str("image"),
        }
    }
}

/// Errors returned by the scaling kernel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScaleError {
    /// An extent is zero or larger than [`crate::MAX_EXTENT`].
    #[error("invalid {axis}: {extent} (must be between 1 and {max})", max = crate::MAX_EXTENT)]
    InvalidExtent { axis: Axis, extent: usize },

    /// A buffer's length does not match `width * height` for its dimensions.
    #[error("{buffer} buffer holds {actual} samples, expected {expected}")]
    BufferSizeMismatch {
        buffer: BufferRole,
        expected: usize,
        actual: usize,
    },
}

/// Result type for scaling operations
pub type ScaleResult<T> = Result<T, ScaleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        let err = ScaleError::InvalidExtent {
            axis: Axis::DestinationWidth,
            extent: 0,
        };
        assert!(err.to_string().starts_with("invalid destination width: 0"));

        let err = ScaleError::BufferSizeMismatch {
            buffer: BufferRole::Destination,
            expected: 16,
            actual: 5,
        };
        assert_eq!(
            err.to_string(),
            "destination buffer holds 5 samples, expected 16"
        );
    }
}
