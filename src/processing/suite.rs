//! # Benchmark Suite Runner
//!
//! Renders the synthetic source once, then for every configured method:
//! 1. **Time**: `iterations` fills into one reused destination buffer
//! 2. **Verify** (optional): compare against the `division` reference
//! 3. **Dump** (optional): write `<method>.ppm` into the dump directory
//!
//! The `fast_image_resize` baseline, when enabled, runs last and is dumped
//! but never verified.

use std::fs;
use std::path::Path;

use nn_scale::{ImageBuf, Method};

use crate::config::{HarnessConfig, Size};
use crate::core::{SuiteReport, time_iterations};
use crate::dump::dump_image;
use crate::error::{HarnessError, HarnessResult};
use crate::processing::baseline::{BASELINE_LABEL, FirBaseline};

/// Runs every configured method and collects the timings.
///
/// # Errors
/// Invalid configuration, a kernel error, a verification mismatch, a failed
/// dump, or a thread pool that cannot be built.
pub fn run_suite(config: &HarnessConfig) -> HarnessResult<SuiteReport> {
    config.validate().map_err(HarnessError::Config)?;
    match config.threads {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()?;
            log::debug!("running on a {}-thread pool", threads);
            pool.install(|| run_methods(config))
        }
        None => run_methods(config),
    }
}

fn run_methods(config: &HarnessConfig) -> HarnessResult<SuiteReport> {
    let input = config.pattern.render(config.input.w, config.input.h);
    let dump_dir = config.dump_dir.as_deref();
    if let Some(dir) = dump_dir {
        fs::create_dir_all(dir)?;
        dump_image(&dir.join("image_in.ppm"), &input)?;
    }

    let reference = if config.verify {
        Some(render_reference(&input, config.output)?)
    } else {
        None
    };

    let mut output = ImageBuf::new(config.output.w, config.output.h, 0u32);
    let mut timings = Vec::with_capacity(config.methods.len() + 1);

    for &method in &config.methods {
        log::info!("Begin test {}", method);
        output.pixels_mut().fill(0);
        let timing = time_iterations(method.name(), config.iterations, || {
            method.apply(
                input.pixels(),
                input.width(),
                input.height(),
                output.pixels_mut(),
                config.output.w,
                config.output.h,
            )?;
            Ok(())
        })?;
        log::info!("Complete: {:.6} seconds", timing.seconds());

        if let Some(reference) = &reference {
            verify_output(method, reference, &output)?;
        }
        if let Some(dir) = dump_dir {
            dump_method(dir, method.name(), &output)?;
        }
        timings.push(timing);
    }

    if config.baseline {
        log::info!("Begin test {}", BASELINE_LABEL);
        let mut baseline = FirBaseline::new(&input, config.output.w, config.output.h)?;
        let timing = time_iterations(BASELINE_LABEL, config.iterations, || baseline.run())?;
        log::info!("Complete: {:.6} seconds", timing.seconds());
        if let Some(dir) = dump_dir {
            dump_method(dir, BASELINE_LABEL, &baseline.output())?;
        }
        timings.push(timing);
    }

    Ok(SuiteReport::new(config.input, config.output, timings))
}

/// Scales `input` to `output` with [`Method::Division`], the reference mapping.
pub fn render_reference(input: &ImageBuf<u32>, output: Size) -> HarnessResult<ImageBuf<u32>> {
    let mut reference = ImageBuf::new(output.w, output.h, 0u32);
    Method::Division.apply(
        input.pixels(),
        input.width(),
        input.height(),
        reference.pixels_mut(),
        output.w,
        output.h,
    )?;
    Ok(reference)
}

/// Fails with [`HarnessError::Mismatch`] at the first sample where `output`
/// differs from `reference`.
pub fn verify_output(
    method: Method,
    reference: &ImageBuf<u32>,
    output: &ImageBuf<u32>,
) -> HarnessResult<()> {
    let mismatch = reference
        .pixels()
        .iter()
        .zip(output.pixels())
        .position(|(a, b)| a != b);
    match mismatch {
        Some(index) => Err(HarnessError::Mismatch { method, index }),
        None if reference.pixels().len() != output.pixels().len() => Err(HarnessError::Mismatch {
            method,
            index: reference.pixels().len().min(output.pixels().len()),
        }),
        None => {
            log::debug!("{} matches the division reference", method);
            Ok(())
        }
    }
}

fn dump_method(dir: &Path, label: &str, image: &ImageBuf<u32>) -> HarnessResult<()> {
    dump_image(&dir.join(format!("{}.ppm", label)), image)
}
