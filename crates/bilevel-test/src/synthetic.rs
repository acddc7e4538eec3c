//! Deterministic synthetic test images
//!
//! The regression tests build their inputs here instead of shipping image
//! files, so every run sees exactly the same pixels.

use bilevel_core::Gray;

fn build<F: Fn(u32, u32) -> u8>(width: u32, height: u32, f: F) -> Gray {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let mut data = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            data.push(f(x, y));
        }
    }
    Gray::from_vec(width, height, data).expect("dimensions checked above")
}

/// Every pixel set to `value`.
pub fn uniform(width: u32, height: u32, value: u8) -> Gray {
    build(width, height, |_, _| value)
}

/// Left half `dark`, right half `light`.
pub fn two_tone(width: u32, height: u32, dark: u8, light: u8) -> Gray {
    build(width, height, |x, _| if x < width / 2 { dark } else { light })
}

/// Horizontal ramp from 0 at the left edge to 255 at the right edge.
pub fn horizontal_gradient(width: u32, height: u32) -> Gray {
    let span = (width - 1).max(1);
    build(width, height, |x, _| ((x * 255 + span / 2) / span) as u8)
}

/// High-contrast checkerboard with square cells of side `cell`.
pub fn checkerboard(width: u32, height: u32, cell: u32, dark: u8, light: u8) -> Gray {
    assert!(cell > 0, "cell size must be positive");
    build(width, height, |x, y| {
        if ((x / cell) + (y / cell)) % 2 == 0 {
            dark
        } else {
            light
        }
    })
}

/// Dark strokes on paper whose brightness falls off from left to right.
///
/// Every `period`-th column and row band is "ink" 60 grey levels below the
/// local paper level. A single global threshold cannot separate ink from
/// paper over the whole width, local ones can.
pub fn uneven_text(width: u32, height: u32, period: u32) -> Gray {
    assert!(period > 1, "period must be at least 2");
    let span = (width - 1).max(1);
    build(width, height, |x, y| {
        let paper = 230 - (x * 150 / span) as i32;
        let ink = x % period == 0 || y % period == 0;
        let noise = ((x.wrapping_mul(7919) ^ y.wrapping_mul(104_729)) % 5) as i32 - 2;
        let v = if ink { paper - 60 } else { paper } + noise;
        v.clamp(0, 255) as u8
    })
}
