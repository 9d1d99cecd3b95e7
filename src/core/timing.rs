//! Wall-clock timing of repeated fills.

use std::time::{Duration, Instant};

use crate::error::HarnessResult;

/// Timing result for one method (or the baseline) over a number of fills.
#[derive(Clone, Debug, PartialEq)]
pub struct MethodTiming {
    /// Method name as printed in the report.
    pub label: String,
    pub iterations: u32,
    pub elapsed: Duration,
}

impl MethodTiming {
    pub fn seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    pub fn ms_per_iteration(&self) -> f64 {
        self.seconds() * 1000.0 / self.iterations.max(1) as f64
    }

    /// Destination megapixels written per second.
    pub fn megapixels_per_second(&self, pixels_per_iteration: usize) -> f64 {
        let secs = self.seconds();
        if secs == 0.0 {
            return f64::INFINITY;
        }
        pixels_per_iteration as f64 * self.iterations as f64 / secs / 1_000_000.0
    }
}

/// Runs `fill` `iterations` times and measures the total wall-clock time.
///
/// Stops at the first error.
pub fn time_iterations<F>(label: impl Into<String>, iterations: u32, mut fill: F) -> HarnessResult<MethodTiming>
where
    F: FnMut() -> HarnessResult<()>,
{
    let start = Instant::now();
    for _ in 0..iterations {
        fill()?;
    }
    Ok(MethodTiming {
        label: label.into(),
        iterations,
        elapsed: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HarnessError;

    #[test]
    fn test_runs_exact_iteration_count() {
        let mut calls = 0;
        let timing = time_iterations("count", 7, || {
            calls += 1;
            Ok(())
        })
        .unwrap();
        assert_eq!(calls, 7);
        assert_eq!(timing.iterations, 7);
        assert_eq!(timing.label, "count");
    }

    #[test]
    fn test_stops_on_first_error() {
        let mut calls = 0;
        let result = time_iterations("fail", 5, || {
            calls += 1;
            Err(HarnessError::Config("boom".to_string()))
        });
        assert!(result.is_err());
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_derived_rates() {
        let timing = MethodTiming {
            label: "x".to_string(),
            iterations: 4,
            elapsed: Duration::from_secs(2),
        };
        assert_eq!(timing.ms_per_iteration(), 500.0);
        assert_eq!(timing.megapixels_per_second(1_000_000), 2.0);
    }
}
