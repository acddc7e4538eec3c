//! Gray - The 8-bit grayscale image container
//!
//! `Gray` is the image type every thresholding operation reads from and
//! writes to. Samples are stored row-major, one byte per pixel, with no
//! row padding.
//!
//! # Ownership model
//!
//! `Gray` uses `Arc` for efficient cloning (shared ownership).
//! To modify pixel data, convert to `GrayMut` via [`Gray::to_mut`], then
//! convert back with `Into<Gray>`.

use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal image data
#[derive(Debug, PartialEq, Eq)]
struct GrayData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Row-major samples, `width * height` bytes
    data: Vec<u8>,
}

impl GrayData {
    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Immutable 8-bit grayscale image
///
/// # Examples
///
/// ```
/// use bilevel_core::Gray;
///
/// let gray = Gray::new(640, 480).unwrap();
/// assert_eq!(gray.width(), 640);
/// assert_eq!(gray.height(), 480);
/// assert_eq!(gray.get_pixel(0, 0), Some(0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gray {
    inner: Arc<GrayData>,
}

impl Gray {
    /// Create a new image with every sample set to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_filled(width, height, 0)
    }

    /// Create a new image with every sample set to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new_filled(width: u32, height: u32, value: u8) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = width as usize * height as usize;
        Ok(Self::from_parts(width, height, vec![value; len]))
    }

    /// Create an image from row-major samples.
    ///
    /// # Arguments
    ///
    /// * `width` - Width in pixels (must be > 0)
    /// * `height` - Height in pixels (must be > 0)
    /// * `data` - Exactly `width * height` samples
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero dimension and
    /// [`Error::InvalidParameter`] if `data` has the wrong length.
    pub fn from_vec(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "expected {} samples for {}x{}, got {}",
                expected,
                width,
                height,
                data.len()
            )));
        }
        Ok(Self::from_parts(width, height, data))
    }

    /// Create an image from a slice of equally long rows.
    ///
    /// Convenient for small literal images in tests and examples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if there are no rows or the rows
    /// are empty, and [`Error::InvalidParameter`] for ragged rows.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.as_ref().len()) as u32;
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != width as usize {
                return Err(Error::InvalidParameter(format!(
                    "row {} has {} samples, expected {}",
                    y,
                    row.len(),
                    width
                )));
            }
            data.extend_from_slice(row);
        }
        Ok(Self::from_parts(width, height, data))
    }

    fn from_parts(width: u32, height: u32, data: Vec<u8>) -> Self {
        Gray {
            inner: Arc::new(GrayData {
                width,
                height,
                data,
            }),
        }
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.inner.width, self.inner.height)
    }

    /// Total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.inner.data.len()
    }

    /// Get raw access to the row-major samples.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get the samples of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let start = self.inner.index(0, y);
        &self.inner.data[start..start + self.inner.width as usize]
    }

    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.inner.data[self.inner.index(x, y)])
    }

    /// Minimum and maximum sample values.
    pub fn min_max(&self) -> (u8, u8) {
        self.inner
            .data
            .iter()
            .fold((u8::MAX, u8::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }

    /// Create a mutable copy of this image.
    pub fn to_mut(&self) -> GrayMut {
        GrayMut {
            inner: GrayData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            },
        }
    }
}

/// Mutable 8-bit grayscale image
///
/// Obtained from [`GrayMut::new`] or [`Gray::to_mut`] and converted back
/// with `Into<Gray>`.
#[derive(Debug)]
pub struct GrayMut {
    inner: GrayData,
}

impl GrayMut {
    /// Create a new zero-filled mutable image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(GrayMut {
            inner: GrayData {
                width,
                height,
                data: vec![0; width as usize * height as usize],
            },
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Set a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the computed index is past the end of the data.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u8) {
        let idx = self.inner.index(x, y);
        self.inner.data[idx] = val;
    }

    /// Raw mutable access to the row-major samples.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }
}

impl From<GrayMut> for Gray {
    fn from(gray: GrayMut) -> Self {
        Gray {
            inner: Arc::new(gray.inner),
        }
    }
}
