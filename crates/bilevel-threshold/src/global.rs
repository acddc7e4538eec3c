//! Global thresholding
//!
//! One threshold for the whole image: a selector runs once over the full
//! image and the image is binarized once with its result.

use crate::binarize::binarize_gray;
use crate::select::{self, Selector};
use crate::ThresholdResult;
use bilevel_core::{Gray, Histogram, Region};
use log::debug;

/// Result of a global thresholding run
#[derive(Debug, Clone)]
pub struct Binarized {
    /// Black/white image with the input's dimensions
    pub image: Gray,
    /// Threshold that produced it
    pub threshold: u8,
}

/// Threshold the whole image with one selector.
///
/// # Errors
///
/// Propagates selector errors. A `Gray` always has pixels, so
/// [`Selector::Mean`] cannot see an empty region here.
pub fn threshold_global(gray: &Gray, selector: &Selector) -> ThresholdResult<Binarized> {
    let threshold = match selector {
        // histogram selectors do not need a per-pixel region copy
        Selector::Otsu => select::otsu(&Histogram::from_gray(gray)),
        Selector::Median => select::median(&Histogram::from_gray(gray)),
        _ => selector.select(&Region::from_gray(gray))?,
    };
    debug!(
        "global {} threshold for {}x{}: {}",
        selector.name(),
        gray.width(),
        gray.height(),
        threshold
    );
    Ok(Binarized {
        image: binarize_gray(gray, threshold),
        threshold,
    })
}

/// Binarize with a constant threshold.
pub fn threshold_fixed(gray: &Gray, threshold: u8) -> Gray {
    debug!("global fixed threshold: {}", threshold);
    binarize_gray(gray, select::fixed(threshold))
}

/// Binarize with the image mean as threshold.
///
/// # Errors
///
/// See [`select::global_mean`].
pub fn threshold_global_mean(gray: &Gray) -> ThresholdResult<Gray> {
    Ok(threshold_global(gray, &Selector::Mean)?.image)
}

/// Binarize with the isodata threshold, starting from the image's
/// [`select::midrange`].
pub fn threshold_global_iterative(gray: &Gray, iterations: u32) -> ThresholdResult<Gray> {
    let selector = Selector::IterativeMean {
        initial: select::midrange(gray),
        iterations,
    };
    Ok(threshold_global(gray, &selector)?.image)
}

/// Binarize with the Otsu threshold of the whole image.
pub fn threshold_global_otsu(gray: &Gray) -> ThresholdResult<Gray> {
    Ok(threshold_global(gray, &Selector::Otsu)?.image)
}

/// Binarize with the median intensity of the whole image.
pub fn threshold_global_median(gray: &Gray) -> ThresholdResult<Gray> {
    Ok(threshold_global(gray, &Selector::Median)?.image)
}
