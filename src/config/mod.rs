//! # Configuration Module
//!
//! This module provides the configuration structure and validation for benchmark runs.

pub mod config;

pub use config::{HarnessConfig, Size};
