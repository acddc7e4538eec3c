//! Global thresholding regression test
//!
//! Fixed, mean, isodata, Otsu and median thresholds over the whole image.

use bilevel_core::{Gray, ImageFormat};
use bilevel_test::{RegParams, synthetic};
use bilevel_threshold::{
    Method, Selector, WHITE, midrange, threshold_fixed, threshold_global,
    threshold_global_iterative, threshold_global_mean,
};

fn count_value(gray: &Gray, value: u8) -> usize {
    gray.data().iter().filter(|&&v| v == value).count()
}

#[test]
fn global_reg() {
    let mut rp = RegParams::new("global");

    // --- Test 1: mean of a two-column image ---
    eprintln!("=== Global mean ===");
    let gray = Gray::from_rows(&[[10u8, 200], [10, 200]]).expect("two columns");
    let result = threshold_global(&gray, &Selector::Mean).expect("global mean");
    rp.compare_values(105.0, result.threshold as f64, 0.0);
    let expected = Gray::from_rows(&[[0u8, 255], [0, 255]]).expect("expected");
    rp.compare_gray(&expected, &result.image);

    // --- Test 2: fixed threshold ---
    eprintln!("=== Fixed threshold ===");
    let gray = Gray::from_rows(&[[100u8, 150]]).expect("pair");
    let out = threshold_fixed(&gray, 127);
    rp.compare_values(0.0, out.data()[0] as f64, 0.0);
    rp.compare_values(255.0, out.data()[1] as f64, 0.0);

    // --- Test 3: two-tone image ---
    eprintln!("=== Two-tone ===");
    let tt = synthetic::two_tone(64, 64, 20, 220);
    let mean = threshold_global(&tt, &Selector::Mean).expect("mean");
    rp.compare_values(120.0, mean.threshold as f64, 0.0);
    rp.compare_values(2048.0, count_value(&mean.image, 0) as f64, 0.0);
    rp.write_gray_and_check(&mean.image, ImageFormat::Png)
        .expect("write two-tone mean");

    let iter = threshold_global(
        &tt,
        &Selector::IterativeMean {
            initial: midrange(&tt),
            iterations: 10,
        },
    )
    .expect("isodata");
    rp.compare_values(120.0, iter.threshold as f64, 0.0);

    // Otsu and median land on the dark mode itself, so it maps to white
    for selector in [Selector::Otsu, Selector::Median] {
        let result = threshold_global(&tt, &selector).expect("histogram selector");
        eprintln!("  {}: t = {}", selector.name(), result.threshold);
        rp.compare_values(20.0, result.threshold as f64, 0.0);
        rp.compare_values(4096.0, count_value(&result.image, WHITE) as f64, 0.0);
    }

    // --- Test 4: gradient ---
    eprintln!("=== Gradient ===");
    let grad = synthetic::horizontal_gradient(256, 16);
    for selector in [Selector::Mean, Selector::Otsu, Selector::Median] {
        let result = threshold_global(&grad, &selector).expect("gradient");
        eprintln!("  {}: t = {}", selector.name(), result.threshold);
        rp.compare_values(127.0, result.threshold as f64, 0.0);
        // columns 0..127 black
        rp.compare_values(127.0 * 16.0, count_value(&result.image, 0) as f64, 0.0);
    }
    let out = threshold_global_iterative(&grad, 10).expect("gradient isodata");
    rp.write_gray_and_check(&out, ImageFormat::Png)
        .expect("write gradient isodata");

    // --- Test 5: uniform image, every method ---
    eprintln!("=== Uniform ===");
    let uniform = synthetic::uniform(40, 30, 128);
    for name in Method::NAMES {
        let method: Method = name.parse().expect("method name");
        let out = method.apply(&uniform, true).expect("apply");
        rp.compare_values(1200.0, count_value(&out, WHITE) as f64, 0.0);
    }
    let out = threshold_global_mean(&uniform).expect("uniform mean");
    rp.compare_gray(&synthetic::uniform(40, 30, WHITE), &out);

    assert!(rp.cleanup(), "global regression test failed");
}
