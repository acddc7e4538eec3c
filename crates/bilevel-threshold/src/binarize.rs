//! Binarization with a single threshold
//!
//! Samples below the threshold become [`BLACK`], all others [`WHITE`].
//! Absent region samples stay absent.

use bilevel_core::{Gray, GrayMut, Region};

/// Output value for samples below the threshold
pub const BLACK: u8 = 0;

/// Output value for samples at or above the threshold
pub const WHITE: u8 = 255;

/// Map one sample to black or white.
#[inline]
pub fn binarize_value(value: u8, threshold: u8) -> u8 {
    if value < threshold { BLACK } else { WHITE }
}

/// Binarize a region; the result has the same shape and the same absent
/// positions.
pub fn binarize_region(region: &Region, threshold: u8) -> Region {
    region.map_present(|v| binarize_value(v, threshold))
}

/// Binarize a whole image.
pub fn binarize_gray(gray: &Gray, threshold: u8) -> Gray {
    let mut out = gray.to_mut();
    binarize_in_place(&mut out, threshold);
    out.into()
}

/// Binarize an image buffer in place.
pub fn binarize_in_place(gray: &mut GrayMut, threshold: u8) {
    for v in gray.data_mut() {
        *v = binarize_value(*v, threshold);
    }
}
