//! Bilevel - Image thresholding for Rust
//!
//! Converts grayscale images to black/white using either one threshold for
//! the whole image or one threshold per square block.
//!
//! # Overview
//!
//! - Image I/O (PNG, binary PGM)
//! - Global thresholds: fixed, mean, isodata, Otsu, median
//! - Block-adaptive thresholds: isodata, Otsu, median, optionally parallel
//!
//! # Example
//!
//! ```
//! use bilevel::{Gray, threshold::Method};
//!
//! let gray = Gray::from_rows(&[[100u8, 150]]).unwrap();
//! let method: Method = "global".parse().unwrap();
//! let out = method.apply(&gray, false).unwrap();
//! assert_eq!(out.data(), &[0, 255]);
//! ```

pub mod cli;

// Re-export core types (primary data structures used everywhere)
pub use bilevel_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use bilevel_io as io;
pub use bilevel_threshold as threshold;
