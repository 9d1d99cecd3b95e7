//! # intscale: Integer Scaling Benchmark
//!
//! Benchmark harness around the [`nn_scale`] kernel. It renders a synthetic
//! source image, scales it with each fill strategy a number of times, and
//! reports how long each one took.
//!
//! ## Architecture
//!
//! The library is organized into several key modules:
//! - `config`: run configuration and validation
//! - `pattern`: synthetic source images
//! - `processing`: the suite runner and the `fast_image_resize` baseline
//! - `core`: timing and report generation
//! - `dump`: PPM/PNG output of source and scaled images
//! - `error`: harness error type
//!
//! ## Features
//!
//! - **Division-free kernel**: fixed-point index walk from `nn-scale`
//! - **Method comparison**: every historical fill strategy behind one contract
//! - **Verification**: optional byte-for-byte check against the division reference
//! - **Row-parallel fill**: the `parallel` feature (default) enables rayon in the kernel
//!
//! ## Example
//!
//! ```rust,no_run
//! use intscale::config::HarnessConfig;
//! use intscale::processing::run_suite;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut config = HarnessConfig::default();
//! config.iterations = 10;
//! config.verify = true;
//!
//! let report = run_suite(&config)?;
//! println!("{}", report.generate_report());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod dump;
pub mod error;
pub mod pattern;
pub mod processing;

/// Re-export error types for convenience
pub use error::{HarnessError, HarnessResult};

/// Re-export the kernel so binaries only need this crate
pub use nn_scale;
