//! Error types for bilevel-core
//!
//! Provides a unified error type for the image, region and histogram
//! containers. Each variant captures enough context for diagnostics without
//! exposing internal layout details.

use thiserror::Error;

/// bilevel-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for bilevel-core operations
pub type Result<T> = std::result::Result<T, Error>;
