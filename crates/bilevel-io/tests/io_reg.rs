//! Image I/O regression test
//!
//! Write and read back grayscale images in every supported format, both
//! through memory buffers and through files.

use bilevel_core::ImageFormat;
use bilevel_io::{detect_format_from_bytes, read_image, read_image_mem, write_image, write_image_mem};
use bilevel_test::{RegParams, regout_dir, synthetic};

#[test]
fn io_reg() {
    let mut rp = RegParams::new("io");

    let text = synthetic::uneven_text(64, 48, 8);

    for format in [ImageFormat::Png, ImageFormat::Pnm] {
        eprintln!("=== {:?} ===", format);

        // memory
        let bytes = write_image_mem(&text, format).expect("encode");
        let detected = detect_format_from_bytes(&bytes).expect("detect");
        rp.compare_values(1.0, if detected == format { 1.0 } else { 0.0 }, 0.0);
        let back = read_image_mem(&bytes).expect("decode");
        rp.compare_gray(&text, &back);

        // file
        let path = format!("{}/io_roundtrip.{}", regout_dir(), format.extension());
        write_image(&text, &path, format).expect("write file");
        let back = read_image(&path).expect("read file");
        rp.compare_gray(&text, &back);

        rp.write_gray_and_check(&text, format).expect("write and check");
    }

    // --- PGM with comments and a small maxval ---
    eprintln!("=== PGM header ===");
    let mut pgm = b"P5\n# scanned\n2 1\n# depth\n15\n".to_vec();
    pgm.extend_from_slice(&[0, 15]);
    let gray = read_image_mem(&pgm).expect("pgm with comments");
    rp.compare_values(2.0, gray.width() as f64, 0.0);
    rp.compare_values(0.0, gray.data()[0] as f64, 0.0);
    rp.compare_values(255.0, gray.data()[1] as f64, 0.0);

    // --- Unknown data ---
    eprintln!("=== Unknown data ===");
    let unknown = read_image_mem(b"not an image");
    rp.compare_values(1.0, if unknown.is_err() { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup(), "io regression test failed");
}
