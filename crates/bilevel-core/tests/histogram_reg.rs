//! Histogram and region regression test
//!
//! Histograms over whole images and over tiling blocks that overhang the
//! image edge.

use bilevel_core::{Histogram, Rect, Region};
use bilevel_test::{RegParams, synthetic};

#[test]
fn histogram_reg() {
    let mut rp = RegParams::new("histogram");

    // --- Test 1: gradient ---
    eprintln!("=== Gradient histogram ===");
    let grad = synthetic::horizontal_gradient(256, 4);
    let hist = Histogram::from_gray(&grad);
    rp.compare_values(1024.0, hist.total() as f64, 0.0);
    rp.compare_values(4.0, hist.count(0) as f64, 0.0);
    rp.compare_values(4.0, hist.count(255) as f64, 0.0);
    rp.compare_values(127.0, hist.mean().unwrap_or(0) as f64, 0.0);

    // --- Test 2: block overhanging the image ---
    eprintln!("=== Edge block ===");
    let board = synthetic::checkerboard(10, 10, 5, 30, 200);
    let block = Region::block(&board, Rect::new(8, 8, 4, 4));
    rp.compare_values(4.0, block.width() as f64, 0.0);
    rp.compare_values(4.0, block.height() as f64, 0.0);
    rp.compare_values(4.0, block.samples().len() as f64, 0.0);
    rp.compare_values(4.0, block.present_count() as f64, 0.0);
    let hist = Histogram::from_region(&block);
    rp.compare_values(4.0, hist.total() as f64, 0.0);
    rp.compare_values(4.0, hist.count(30) as f64, 0.0);

    // --- Test 3: blocks partition the image histogram ---
    eprintln!("=== Block partition ===");
    let text = synthetic::uneven_text(45, 29, 6);
    let whole = Histogram::from_gray(&text);
    let mut summed = [0u64; 256];
    let size = 8;
    for by in (0..29).step_by(size) {
        for bx in (0..45).step_by(size) {
            let rect = Rect::new(bx, by, size as u32, size as u32);
            let hist = Histogram::from_region(&Region::block(&text, rect));
            for (acc, &c) in summed.iter_mut().zip(hist.counts()) {
                *acc += c as u64;
            }
        }
    }
    let matches = whole
        .counts()
        .iter()
        .zip(summed.iter())
        .all(|(&a, &b)| a as u64 == b);
    rp.compare_values(1.0, if matches { 1.0 } else { 0.0 }, 0.0);

    // --- Test 4: block entirely outside ---
    eprintln!("=== Outside block ===");
    let outside = Region::block(&board, Rect::new(20, 20, 4, 4));
    rp.compare_values(0.0, outside.present_count() as f64, 0.0);
    rp.compare_values(0.0, Histogram::from_region(&outside).total() as f64, 0.0);

    // --- Test 5: block far larger than the image ---
    eprintln!("=== Oversized block ===");
    for size in [100_000u32, u32::MAX] {
        let block = Region::block(&board, Rect::new(0, 0, size, size));
        rp.compare_values(size as f64, block.width() as f64, 0.0);
        rp.compare_values(100.0, block.samples().len() as f64, 0.0);
        let hist = Histogram::from_region(&block);
        rp.compare_values(100.0, hist.total() as f64, 0.0);
        rp.compare_values(50.0, hist.count(200) as f64, 0.0);
    }

    assert!(rp.cleanup(), "histogram regression test failed");
}
