//! Rect - Rectangular image regions
//!
//! A block in the tiling grid is described by a `Rect` that may extend past
//! the image; [`Rect::clip_to`] gives the part that actually has pixels.

/// A rectangle region
///
/// Small `Copy` type with unsigned coordinates. The origin is always inside
/// the image for rectangles produced by the tiling grid, but the far edges
/// may overhang.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left x coordinate
    pub x: u32,
    /// Top y coordinate
    pub y: u32,
    /// Width
    pub w: u32,
    /// Height
    pub h: u32,
}

impl Rect {
    /// Create a new rectangle
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Get the right x coordinate (exclusive)
    ///
    /// Saturates at `u32::MAX` for blocks that overhang the coordinate range.
    #[inline]
    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.w)
    }

    /// Get the bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.h)
    }

    /// Check if the rectangle is empty (zero area)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Intersect with the image area `[0, width) x [0, height)`.
    ///
    /// Returns `None` when nothing of the rectangle lies inside the image.
    pub fn clip_to(&self, width: u32, height: u32) -> Option<Rect> {
        if self.x >= width || self.y >= height || self.is_empty() {
            return None;
        }
        let right = self.right().min(width);
        let bottom = self.bottom().min(height);
        Some(Rect::new(self.x, self.y, right - self.x, bottom - self.y))
    }
}
