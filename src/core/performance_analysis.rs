// # Performance Analysis Module
//
// Summarizes a benchmark suite: per-method totals, per-fill latency,
// throughput in destination megapixels per second and speed relative to the
// slowest method.
//
// ## Key Performance Metrics
//
// - **Total time**: wall clock for all iterations of one method
// - **Latency**: milliseconds per fill
// - **Throughput**: destination megapixels written per second
// - **Speedup**: slowest method's total divided by this method's total

use crate::config::Size;
use crate::core::timing::MethodTiming;

/// Results of one suite run.
///
/// # Fields
///
/// - `input`: source image size
/// - `output`: destination image size
/// - `timings`: one entry per method, in run order (baseline last, if any)
#[derive(Clone, Debug)]
pub struct SuiteReport {
    pub input: Size,
    pub output: Size,
    pub timings: Vec<MethodTiming>,
}

impl SuiteReport {
    pub fn new(input: Size, output: Size, timings: Vec<MethodTiming>) -> Self {
        Self {
            input,
            output,
            timings,
        }
    }

    /// Fastest entry by total elapsed time.
    pub fn fastest(&self) -> Option<&MethodTiming> {
        self.timings.iter().min_by_key(|t| t.elapsed)
    }

    /// Slowest entry by total elapsed time.
    pub fn slowest(&self) -> Option<&MethodTiming> {
        self.timings.iter().max_by_key(|t| t.elapsed)
    }

    /// How many times faster `timing` is than the slowest entry.
    pub fn speedup(&self, timing: &MethodTiming) -> f64 {
        match self.slowest() {
            Some(slowest) if timing.seconds() > 0.0 => slowest.seconds() / timing.seconds(),
            _ => 1.0,
        }
    }

    /// Generates the textual report printed by the CLI.
    ///
    /// # Report Sections
    ///
    /// 1. **Configuration**: sizes and iteration count
    /// 2. **Results**: one row per method
    /// 3. **Fastest**: the winning method
    pub fn generate_report(&self) -> String {
        let pixels = self.output.pixels();
        let iterations = self.timings.first().map_or(0, |t| t.iterations);

        let mut report = format!(
            "Nearest-Neighbor Scaling Benchmark\n\
             ══════════════════════════════════\n\
             \n\
             Configuration: {} -> {}, {} iterations\n\
             Destination pixels per fill: {}\n\
             \n\
             {:<18} {:>12} {:>12} {:>12} {:>9}\n\
             ──────────────────────────────────────────────────────────────────\n",
            self.input, self.output, iterations, pixels, "method", "total s", "ms/fill", "Mpx/s", "speedup"
        );
        for timing in &self.timings {
            report.push_str(&format!(
                "{:<18} {:>12.6} {:>12.3} {:>12.1} {:>8.2}x\n",
                timing.label,
                timing.seconds(),
                timing.ms_per_iteration(),
                timing.megapixels_per_second(pixels),
                self.speedup(timing)
            ));
        }
        if let Some(fastest) = self.fastest() {
            report.push_str(&format!("\nFastest: {}\n", fastest.label));
        }
        report
    }
}
