//! # Harness Configuration
//!
//! This module provides the configuration structure and validation for a
//! benchmark run. It is the common interface between the CLI and the suite
//! runner in [`crate::processing`].
//!
//! ## Configuration Parameters
//!
//! | Parameter | Type | Range | Description |
//! |-----------|------|-------|-------------|
//! | `iterations` | `u32` | ≥ 1 | Fills per method |
//! | `input` | `Size` | 1..=2^24 per side | Synthetic source size |
//! | `output` | `Size` | 1..=2^24 per side | Destination size |
//! | `methods` | `Vec<Method>` | non-empty | Strategies to time, in order |
//! | `pattern` | `TestPattern` | any | Synthetic source content |
//! | `dump_dir` | `Option<PathBuf>` | writable dir | Where to write PPM dumps |
//! | `verify` | `bool` | true/false | Compare every method to `division` |
//! | `baseline` | `bool` | true/false | Also time `fast_image_resize` nearest |
//! | `threads` | `Option<usize>` | ≥ 1 | Rayon pool size for `parallel` |
//!
//! ## Size Formats
//!
//! Sizes are written `WIDTHxHEIGHT`, e.g. `640x480` or `1920X1080`.
//!
//! ## Examples
//!
//! ```rust
//! use intscale::config::config::{HarnessConfig, Size};
//!
//! let mut config = HarnessConfig::default();
//! assert_eq!(config.input, Size { w: 640, h: 480 });
//!
//! config.output = "320x240".parse().unwrap();
//! assert!(config.validate().is_ok());
//! ```

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use nn_scale::{MAX_EXTENT, Method};

use crate::pattern::TestPattern;

/// Represents a 2D size with width and height in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Size {
    pub w: usize,
    pub h: usize,
}

impl Size {
    pub fn pixels(&self) -> usize {
        self.w * self.h
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.w, self.h)
    }
}

impl FromStr for Size {
    type Err = String;

    /// Parses `WIDTHxHEIGHT`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(['x', 'X'])
            .ok_or_else(|| format!("Invalid size: {}. Use WIDTHxHEIGHT, e.g. 640x480", s))?;
        let w = w
            .trim()
            .parse()
            .map_err(|_| format!("Invalid width in size: {}", s))?;
        let h = h
            .trim()
            .parse()
            .map_err(|_| format!("Invalid height in size: {}", s))?;
        Ok(Size { w, h })
    }
}

/// Configuration structure for one benchmark run.
///
/// Defaults reproduce the classic setup: a 640x480 striped source scaled to
/// 1920x1080, 500 fills per method, every method, nothing written to disk.
#[derive(Clone, Debug)]
pub struct HarnessConfig {
    /// Number of fills timed per method.
    pub iterations: u32,

    /// Size of the synthetic source image.
    pub input: Size,

    /// Size of the destination image.
    pub output: Size,

    /// Methods to time, run in this order.
    pub methods: Vec<Method>,

    /// Content of the synthetic source.
    pub pattern: TestPattern,

    /// Directory for `image_in.ppm` and one `<method>.ppm` per method.
    pub dump_dir: Option<PathBuf>,

    /// Compare every method's output against the `division` reference.
    pub verify: bool,

    /// Also time `fast_image_resize`'s nearest filter for comparison.
    pub baseline: bool,

    /// Rayon worker count for the `parallel` method. `None` uses rayon's default.
    pub threads: Option<usize>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            iterations: 500,
            input: Size { w: 640, h: 480 },
            output: Size { w: 1920, h: 1080 },
            methods: Method::ALL.to_vec(),
            pattern: TestPattern::Stripes,
            dump_dir: None,
            verify: false,
            baseline: false,
            threads: None,
        }
    }
}

impl HarnessConfig {
    /// Creates a configuration for the given geometry, keeping the other defaults.
    ///
    /// Iteration counts below 1 are raised to 1.
    pub fn new(iterations: u32, input: Size, output: Size, methods: Vec<Method>) -> Self {
        Self {
            iterations: iterations.max(1),
            input,
            output,
            methods,
            ..Self::default()
        }
    }

    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), String> {
        if self.iterations == 0 {
            return Err("Iterations must be greater than 0".to_string());
        }
        for (name, size) in [("Input", self.input), ("Output", self.output)] {
            if size.w == 0 || size.h == 0 {
                return Err(format!("{} size must be non-zero, got {}", name, size));
            }
            if size.w > MAX_EXTENT || size.h > MAX_EXTENT {
                return Err(format!(
                    "{} size {} exceeds the maximum extent of {}",
                    name, size, MAX_EXTENT
                ));
            }
        }
        if self.methods.is_empty() {
            return Err("At least one method must be selected".to_string());
        }
        if self.threads == Some(0) {
            return Err("Thread count must be greater than 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HarnessConfig::default();
        assert_eq!(config.iterations, 500);
        assert_eq!(config.input, Size { w: 640, h: 480 });
        assert_eq!(config.output, Size { w: 1920, h: 1080 });
        assert_eq!(config.methods.len(), Method::ALL.len());
        assert!(config.dump_dir.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_new_raises_iterations() {
        let config = HarnessConfig::new(0, Size { w: 2, h: 2 }, Size { w: 4, h: 4 }, vec![Method::Best]);
        assert_eq!(config.iterations, 1);
    }

    #[test]
    fn test_config_validation() {
        let mut config = HarnessConfig::default();

        config.iterations = 0;
        assert!(config.validate().is_err());
        config.iterations = 1; // Reset

        config.output.w = 0;
        assert!(config.validate().is_err());
        config.output.w = 1920; // Reset

        config.input.h = MAX_EXTENT + 1;
        assert!(config.validate().is_err());
        config.input.h = 480; // Reset

        config.methods.clear();
        assert!(config.validate().is_err());
        config.methods.push(Method::Division); // Reset

        config.threads = Some(0);
        assert!(config.validate().is_err());
        config.threads = Some(2);

        // Valid again
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_size_parsing() {
        assert_eq!("640x480".parse(), Ok(Size { w: 640, h: 480 }));
        assert_eq!("1920X1080".parse(), Ok(Size { w: 1920, h: 1080 }));
        assert!("640".parse::<Size>().is_err());
        assert!("x480".parse::<Size>().is_err());
        assert!("640x-1".parse::<Size>().is_err());
        assert_eq!(Size { w: 3, h: 7 }.to_string(), "3x7");
    }
}
