//! Named thresholding methods
//!
//! [`Method`] bundles a thresholding strategy with its parameters. It can be
//! built in code or parsed from its short name:
//!
//! | Name | Method | Defaults |
//! |------|--------|----------|
//! | `global` | [`Method::Global`] | threshold 127 |
//! | `gmean` | [`Method::GlobalMean`] | - |
//! | `giter` | [`Method::GlobalIterative`] | 10 iterations |
//! | `amean` | [`Method::AdaptiveMean`] | 24 px blocks, 10 iterations |
//! | `otsu` | [`Method::AdaptiveOtsu`] | 32 px blocks |
//! | `amedian` | [`Method::AdaptiveMedian`] | 16 px blocks |

use crate::global::{
    threshold_fixed, threshold_global_iterative, threshold_global_mean,
};
use crate::select::{DEFAULT_FIXED_THRESHOLD, DEFAULT_ITERATIONS};
use crate::tile::{
    DEFAULT_MEAN_BLOCK_SIZE, DEFAULT_MEDIAN_BLOCK_SIZE, DEFAULT_OTSU_BLOCK_SIZE,
    threshold_adaptive_mean, threshold_adaptive_median, threshold_adaptive_otsu,
};
use crate::{ThresholdError, ThresholdResult};
use bilevel_core::Gray;
use std::fmt;
use std::str::FromStr;

/// A thresholding method and its parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// Constant threshold
    Global { threshold: u8 },
    /// Mean intensity of the whole image
    GlobalMean,
    /// Isodata over the whole image
    GlobalIterative { iterations: u32 },
    /// Isodata per block
    AdaptiveMean { block_size: u32, iterations: u32 },
    /// Otsu per block
    AdaptiveOtsu { block_size: u32 },
    /// Median per block
    AdaptiveMedian { block_size: u32 },
}

impl Method {
    /// All short names accepted by [`Method::from_str`]
    pub const NAMES: [&'static str; 6] = ["global", "gmean", "giter", "amean", "otsu", "amedian"];

    /// Short name of the method
    pub fn name(&self) -> &'static str {
        match self {
            Method::Global { .. } => "global",
            Method::GlobalMean => "gmean",
            Method::GlobalIterative { .. } => "giter",
            Method::AdaptiveMean { .. } => "amean",
            Method::AdaptiveOtsu { .. } => "otsu",
            Method::AdaptiveMedian { .. } => "amedian",
        }
    }

    /// Replace the block size of an adaptive method. Global methods are
    /// returned unchanged.
    pub fn with_block_size(self, size: u32) -> Self {
        match self {
            Method::AdaptiveMean { iterations, .. } => Method::AdaptiveMean {
                block_size: size,
                iterations,
            },
            Method::AdaptiveOtsu { .. } => Method::AdaptiveOtsu { block_size: size },
            Method::AdaptiveMedian { .. } => Method::AdaptiveMedian { block_size: size },
            other => other,
        }
    }

    /// Replace the iteration count of an isodata method.
    pub fn with_iterations(self, count: u32) -> Self {
        match self {
            Method::GlobalIterative { .. } => Method::GlobalIterative { iterations: count },
            Method::AdaptiveMean { block_size, .. } => Method::AdaptiveMean {
                block_size,
                iterations: count,
            },
            other => other,
        }
    }

    /// Replace the constant of [`Method::Global`].
    pub fn with_threshold(self, value: u8) -> Self {
        match self {
            Method::Global { .. } => Method::Global { threshold: value },
            other => other,
        }
    }

    /// Run the method on `gray`.
    ///
    /// # Arguments
    ///
    /// * `gray` - Input image
    /// * `parallel` - Process blocks of adaptive methods on the rayon pool
    ///
    /// # Errors
    ///
    /// Returns [`ThresholdError::InvalidBlockSize`] for an adaptive method
    /// with a zero block size.
    pub fn apply(&self, gray: &Gray, parallel: bool) -> ThresholdResult<Gray> {
        match *self {
            Method::Global { threshold } => Ok(threshold_fixed(gray, threshold)),
            Method::GlobalMean => threshold_global_mean(gray),
            Method::GlobalIterative { iterations } => threshold_global_iterative(gray, iterations),
            Method::AdaptiveMean {
                block_size,
                iterations,
            } => threshold_adaptive_mean(gray, block_size, iterations, parallel),
            Method::AdaptiveOtsu { block_size } => {
                threshold_adaptive_otsu(gray, block_size, parallel)
            }
            Method::AdaptiveMedian { block_size } => {
                threshold_adaptive_median(gray, block_size, parallel)
            }
        }
    }
}

impl FromStr for Method {
    type Err = ThresholdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "global" => Ok(Method::Global {
                threshold: DEFAULT_FIXED_THRESHOLD,
            }),
            "gmean" => Ok(Method::GlobalMean),
            "giter" => Ok(Method::GlobalIterative {
                iterations: DEFAULT_ITERATIONS,
            }),
            "amean" => Ok(Method::AdaptiveMean {
                block_size: DEFAULT_MEAN_BLOCK_SIZE,
                iterations: DEFAULT_ITERATIONS,
            }),
            "otsu" => Ok(Method::AdaptiveOtsu {
                block_size: DEFAULT_OTSU_BLOCK_SIZE,
            }),
            "amedian" => Ok(Method::AdaptiveMedian {
                block_size: DEFAULT_MEDIAN_BLOCK_SIZE,
            }),
            other => Err(ThresholdError::UnknownMethod(other.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Global { threshold } => write!(f, "global(t={})", threshold),
            Method::GlobalMean => write!(f, "gmean"),
            Method::GlobalIterative { iterations } => write!(f, "giter(n={})", iterations),
            Method::AdaptiveMean {
                block_size,
                iterations,
            } => write!(f, "amean(L={}, n={})", block_size, iterations),
            Method::AdaptiveOtsu { block_size } => write!(f, "otsu(L={})", block_size),
            Method::AdaptiveMedian { block_size } => write!(f, "amedian(L={})", block_size),
        }
    }
}
