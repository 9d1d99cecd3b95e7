//! # Processing Module
//!
//! This module contains the benchmark suite runner and the third-party baseline.

pub mod baseline;
pub mod suite;

// Re-export commonly used types for convenience
pub use baseline::{BASELINE_LABEL, FirBaseline};
pub use suite::{render_reference, run_suite, verify_output};
