//! Error types for bilevel-threshold

use thiserror::Error;

/// Errors that can occur while selecting thresholds or binarizing
#[derive(Debug, Error)]
pub enum ThresholdError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] bilevel_core::Error),

    /// A statistic was requested over a region with no present sample
    #[error("empty region: no pixels to compute a threshold from")]
    EmptyRegion,

    /// Tiling block side must be at least one pixel
    #[error("invalid block size: {0}")]
    InvalidBlockSize(u32),

    /// Method name not recognised
    #[error("unknown method: {0:?} (expected one of global, gmean, giter, amean, otsu, amedian)")]
    UnknownMethod(String),
}

/// Result type for threshold operations
pub type ThresholdResult<T> = Result<T, ThresholdError>;
