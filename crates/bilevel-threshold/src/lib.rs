//! bilevel-threshold - Threshold selection and binarization
//!
//! This crate turns grayscale images into black/white images:
//!
//! - **Selectors**: fixed, mean, isodata, Otsu and median thresholds
//! - **Global thresholding**: one threshold for the whole image
//! - **Adaptive thresholding**: one threshold per square block
//! - **Methods**: named, parameterised strategies ([`Method`])
//!
//! Output pixels are 0 where the input is below the threshold and 255
//! elsewhere.

pub mod binarize;
pub mod error;
pub mod global;
pub mod method;
pub mod select;
pub mod tile;

pub use error::{ThresholdError, ThresholdResult};

pub use binarize::{BLACK, WHITE, binarize_gray, binarize_in_place, binarize_region, binarize_value};
pub use global::{
    Binarized, threshold_fixed, threshold_global, threshold_global_iterative,
    threshold_global_mean, threshold_global_median, threshold_global_otsu,
};
pub use method::Method;
pub use select::{
    DEFAULT_FIXED_THRESHOLD, DEFAULT_ITERATIONS, Selector, fixed, global_mean, iterative_mean,
    median, midrange, otsu,
};
pub use tile::{
    BlockThreshold, DEFAULT_MEAN_BLOCK_SIZE, DEFAULT_MEDIAN_BLOCK_SIZE, DEFAULT_OTSU_BLOCK_SIZE,
    TileOptions, Tiled, block_grid, threshold_adaptive_mean, threshold_adaptive_median,
    threshold_adaptive_otsu, threshold_tiled,
};
