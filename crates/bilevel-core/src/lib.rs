//! bilevel-core - Basic data structures for image thresholding
//!
//! This crate provides the containers shared by the rest of the workspace:
//!
//! - [`Gray`] / [`GrayMut`] - 8-bit grayscale image (immutable / mutable)
//! - [`Rect`] - Rectangle, used for tiling blocks
//! - [`Region`] - Block of samples where out-of-image positions are absent
//! - [`Histogram`] - 256-bin intensity histogram of a region or image

pub mod error;
pub mod gray;
pub mod histogram;
pub mod rect;
pub mod region;

pub use error::{Error, Result};
pub use gray::{Gray, GrayMut};
pub use histogram::{HISTOGRAM_BINS, Histogram};
pub use rect::Rect;
pub use region::Region;

/// Image file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    /// Unknown format
    #[default]
    Unknown,
    /// PNG format
    Png,
    /// PNM format (binary PGM)
    Pnm,
}

impl ImageFormat {
    /// Get the file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Unknown => "dat",
            Self::Png => "png",
            Self::Pnm => "pgm",
        }
    }

    /// Guess the format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Self::Png,
            "pgm" | "pnm" => Self::Pnm,
            _ => Self::Unknown,
        }
    }
}
