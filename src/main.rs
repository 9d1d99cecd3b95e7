use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use intscale::config::{HarnessConfig, Size};
use intscale::nn_scale::Method;
use intscale::pattern::TestPattern;
use intscale::processing::run_suite;

/// Integer nearest-neighbor scaling benchmark:
/// - renders a synthetic source image
/// - times every fill strategy over the same source and destination sizes
/// - optionally verifies each result and dumps it as PPM
#[derive(Parser, Debug)]
#[command(name = "intscale")]
#[command(about = "Benchmark division-free nearest-neighbor scaling strategies")]
#[command(long_about = "Scale a synthetic image with each nearest-neighbor fill strategy a number of times and report the timings.
All strategies compute the same mapping, floor(x * S / D), and produce identical output.")]
struct Args {
    /// Fills per method
    #[arg(default_value_t = 500, help = "Number of fills per method (values below 1 run once)")]
    iterations: u32,

    /// Source size
    #[arg(long, default_value = "640x480", help = "Synthetic source size, WIDTHxHEIGHT")]
    in_size: Size,

    /// Destination size
    #[arg(long, default_value = "1920x1080", help = "Destination size, WIDTHxHEIGHT")]
    out_size: Size,

    /// Methods to time
    #[arg(short, long, value_enum,
          help = "Method to time; repeat to select several (default: all)")]
    method: Vec<Method>,

    /// Source pattern
    #[arg(short, long, value_enum, default_value_t = TestPattern::Stripes)]
    pattern: TestPattern,

    /// Dump directory
    #[arg(long, help = "Write image_in.ppm and <method>.ppm into this directory")]
    dump_dir: Option<PathBuf>,

    /// Verify outputs
    #[arg(long, help = "Check every method's output against the division reference")]
    verify: bool,

    /// Time fast_image_resize too
    #[arg(long, help = "Also time fast_image_resize's nearest filter (not verified)")]
    baseline: bool,

    /// Worker threads
    #[arg(short = 'j', long, help = "Rayon worker threads for the parallel method")]
    threads: Option<usize>,

    /// Verbose logging
    #[arg(short, long, help = "Log debug messages (RUST_LOG overrides)")]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    println!("Integer scaling test");
    println!("\tIterations: {}", args.iterations.max(1));

    let methods = if args.method.is_empty() {
        Method::ALL.to_vec()
    } else {
        args.method
    };

    let mut config = HarnessConfig::new(args.iterations, args.in_size, args.out_size, methods);
    config.pattern = args.pattern;
    config.dump_dir = args.dump_dir;
    config.verify = args.verify;
    config.baseline = args.baseline;
    config.threads = args.threads;

    config.validate().map_err(anyhow::Error::msg)?;
    let report = run_suite(&config)?;
    println!();
    print!("{}", report.generate_report());
    Ok(())
}
