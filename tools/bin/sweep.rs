/// Size sweep over common magnification and decimation ratios
///
/// Runs the fixed-point method against the division reference for each size
/// pair and prints how much faster it is. Every output is verified first.
///
/// Time complexity: O(iterations * output pixels) per pair and method.
use intscale::config::{HarnessConfig, Size};
use intscale::nn_scale::Method;
use intscale::processing::run_suite;

const ITERATIONS: u32 = 50;

const PAIRS: [(Size, Size); 6] = [
    (Size { w: 320, h: 240 }, Size { w: 640, h: 480 }),
    (Size { w: 640, h: 480 }, Size { w: 1920, h: 1080 }),
    (Size { w: 1280, h: 720 }, Size { w: 3840, h: 2160 }),
    (Size { w: 1920, h: 1080 }, Size { w: 640, h: 360 }),
    (Size { w: 3840, h: 2160 }, Size { w: 1280, h: 720 }),
    (Size { w: 333, h: 257 }, Size { w: 1001, h: 769 }),
];

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    println!("Nearest-Neighbor Size Sweep");
    println!("═══════════════════════════");
    println!("{} fills per method, output verified", ITERATIONS);
    println!();
    println!(
        "{:<24} {:>14} {:>14} {:>14} {:>9}",
        "Geometry", "division ms", "fixed ms", "best ms", "Speedup"
    );
    println!("{}", "─".repeat(79));

    for (input, output) in PAIRS {
        let mut config = HarnessConfig::new(
            ITERATIONS,
            input,
            output,
            vec![Method::Division, Method::FixedPoint, Method::Best],
        );
        config.verify = true;

        let report = run_suite(&config)?;
        let ms = |label: &str| {
            report
                .timings
                .iter()
                .find(|t| t.label == label)
                .map(|t| t.ms_per_iteration())
                .unwrap_or(f64::NAN)
        };
        let division = ms(Method::Division.name());
        let best = ms(Method::Best.name());
        println!(
            "{:<24} {:>14.3} {:>14.3} {:>14.3} {:>8.1}x",
            format!("{} -> {}", input, output),
            division,
            ms(Method::FixedPoint.name()),
            best,
            division / best
        );
    }

    Ok(())
}
