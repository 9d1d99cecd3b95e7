//! # Core Infrastructure Module
//!
//! Timing and reporting utilities shared by the CLI and the sweep tool.

pub mod performance_analysis;
pub mod timing;

pub use performance_analysis::SuiteReport;
pub use timing::{MethodTiming, time_iterations};
