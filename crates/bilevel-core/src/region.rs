//! Region - A rectangular grid of optional samples
//!
//! A `Region` is either a copy of a whole image or of one block of the
//! tiling grid. Blocks that overhang the image keep the full block size as
//! their logical shape, but only the part inside the image is stored; every
//! position past the stored window is an absent sample (`None`). Absent
//! samples take no part in statistics and are never written back.

use crate::error::{Error, Result};
use crate::{Gray, Rect};

/// Rectangular grid of samples where `None` marks an absent pixel
///
/// Samples are stored for the top-left `stored_width x stored_height`
/// window of the `width x height` grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    width: u32,
    height: u32,
    stored_width: u32,
    stored_height: u32,
    samples: Vec<Option<u8>>,
}

impl Region {
    /// Copy a whole image into a region. Every sample is present.
    pub fn from_gray(gray: &Gray) -> Self {
        Region {
            width: gray.width(),
            height: gray.height(),
            stored_width: gray.width(),
            stored_height: gray.height(),
            samples: gray.data().iter().map(|&v| Some(v)).collect(),
        }
    }

    /// Copy the block `rect` out of `gray`.
    ///
    /// The region is `rect.w x rect.h`. Only the part of `rect` inside the
    /// image is copied, so the cost does not depend on how far the block
    /// overhangs; positions outside the image are `None`.
    pub fn block(gray: &Gray, rect: Rect) -> Self {
        let Some(visible) = rect.clip_to(gray.width(), gray.height()) else {
            return Region {
                width: rect.w,
                height: rect.h,
                stored_width: 0,
                stored_height: 0,
                samples: Vec::new(),
            };
        };
        let mut samples = Vec::with_capacity(visible.w as usize * visible.h as usize);
        for y in visible.y..visible.bottom() {
            let row = gray.row(y);
            samples.extend(
                row[visible.x as usize..visible.right() as usize]
                    .iter()
                    .map(|&v| Some(v)),
            );
        }
        Region {
            width: rect.w,
            height: rect.h,
            stored_width: visible.w,
            stored_height: visible.h,
            samples,
        }
    }

    /// Build a region from row-major samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `samples.len() != width * height`.
    pub fn from_samples(width: u32, height: u32, samples: Vec<Option<u8>>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if samples.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "expected {} samples for {}x{} region, got {}",
                expected,
                width,
                height,
                samples.len()
            )));
        }
        Ok(Region {
            width,
            height,
            stored_width: width,
            stored_height: height,
            samples,
        })
    }

    /// Region width
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Region height
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Size of the stored window; positions past it are absent.
    #[inline]
    pub fn stored_dimensions(&self) -> (u32, u32) {
        (self.stored_width, self.stored_height)
    }

    /// Row-major samples of the stored window, including absent ones.
    #[inline]
    pub fn samples(&self) -> &[Option<u8>] {
        &self.samples
    }

    /// Sample at (x, y) in region coordinates.
    ///
    /// The outer `Option` is `None` out of bounds; the inner one is the
    /// sample itself.
    pub fn get(&self, x: u32, y: u32) -> Option<Option<u8>> {
        if x >= self.width || y >= self.height {
            return None;
        }
        if x >= self.stored_width || y >= self.stored_height {
            return Some(None);
        }
        Some(self.samples[y as usize * self.stored_width as usize + x as usize])
    }

    /// Iterate over the present samples in row-major order.
    pub fn present(&self) -> impl Iterator<Item = u8> + '_ {
        self.samples.iter().filter_map(|s| *s)
    }

    /// Number of present (non-sentinel) samples.
    pub fn present_count(&self) -> usize {
        self.samples.iter().filter(|s| s.is_some()).count()
    }

    /// Minimum and maximum of the present samples, `None` if there are none.
    pub fn min_max(&self) -> Option<(u8, u8)> {
        self.present().fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }

    /// Map every present sample, keeping absent ones absent.
    pub fn map_present<F>(&self, mut f: F) -> Region
    where
        F: FnMut(u8) -> u8,
    {
        Region {
            width: self.width,
            height: self.height,
            stored_width: self.stored_width,
            stored_height: self.stored_height,
            samples: self.samples.iter().map(|s| s.map(&mut f)).collect(),
        }
    }
}
