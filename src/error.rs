//! # Harness Error Handling
//!
//! Error type for the benchmark harness. Kernel failures come through
//! unchanged as [`HarnessError::Scale`]; everything else is I/O around the
//! kernel: dumps, the thread pool and the `fast_image_resize` baseline.
//!
//! None of these are retryable. The binary reports them through `anyhow` and
//! exits.
//!
//! ## Usage
//!
//! ```rust
//! use intscale::error::HarnessError;
//! use nn_scale::Method;
//!
//! let error = HarnessError::Mismatch { method: Method::Tables, index: 42 };
//! assert!(error.to_string().contains("tables"));
//! ```

use std::path::PathBuf;

use nn_scale::{Method, ScaleError};
use thiserror::Error;

/// Errors raised while running a benchmark suite.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The scaling kernel rejected the geometry or a buffer.
    #[error(transparent)]
    Scale(#[from] ScaleError),

    /// The configuration failed validation.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A method produced output different from the division reference.
    #[error("{method} output differs from the division reference at sample {index}")]
    Mismatch { method: Method, index: usize },

    /// Writing an image dump failed.
    #[error("failed to write {}: {source}", path.display())]
    Dump {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The rayon pool for the `parallel` method could not be built.
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("baseline resize failed: {0}")]
    BaselineResize(#[from] fast_image_resize::ResizeError),

    #[error("baseline buffer rejected: {0}")]
    BaselineBuffer(#[from] fast_image_resize::ImageBufferError),
}

/// Result type for harness operations
pub type HarnessResult<T> = Result<T, HarnessError>;
