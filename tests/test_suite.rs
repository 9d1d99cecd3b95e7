//! Suite runs with verification and dumps.

mod common;

use std::fs;

use common::{parse_p6_header, small_config};
use intscale::config::Size;
use intscale::nn_scale::Method;
use intscale::pattern::TestPattern;
use intscale::processing::BASELINE_LABEL;
use intscale::processing::run_suite;
use intscale::HarnessError;

#[test]
fn test_verified_suite_report() {
    let mut config = small_config();
    config.verify = true;
    config.pattern = TestPattern::Checkerboard;

    let report = run_suite(&config).unwrap();
    assert_eq!(report.timings.len(), Method::ALL.len());
    assert!(report.fastest().is_some());

    let text = report.generate_report();
    assert!(text.contains("12x9 -> 31x20"));
    for method in Method::ALL {
        assert!(text.contains(method.name()), "missing {}", method);
    }
}

#[test]
fn test_dump_writes_input_and_every_method() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = small_config();
    config.methods = vec![Method::Division, Method::Best];
    config.baseline = true;
    config.dump_dir = Some(dir.path().join("dumps"));

    run_suite(&config).unwrap();

    let dumps = dir.path().join("dumps");
    let input = fs::read(dumps.join("image_in.ppm")).unwrap();
    let (w, h, maxval, header) = parse_p6_header(&input).unwrap();
    assert_eq!((w, h, maxval), (12, 9, 255));
    assert_eq!(input.len(), header + 12 * 9 * 3);

    for label in ["division", "best", BASELINE_LABEL] {
        let bytes = fs::read(dumps.join(format!("{}.ppm", label))).unwrap();
        let (w, h, _, header) = parse_p6_header(&bytes).unwrap();
        assert_eq!((w, h), (31, 20), "{}", label);
        assert_eq!(bytes.len(), header + 31 * 20 * 3);
    }

    // division and best compute the same mapping
    assert_eq!(
        fs::read(dumps.join("division.ppm")).unwrap(),
        fs::read(dumps.join("best.ppm")).unwrap()
    );
}

#[test]
fn test_zero_output_is_rejected() {
    let mut config = small_config();
    config.output = Size { w: 0, h: 20 };
    assert!(matches!(run_suite(&config), Err(HarnessError::Config(_))));
}
