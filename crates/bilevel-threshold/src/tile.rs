//! Block-adaptive thresholding
//!
//! The image is cut into non-overlapping `L x L` blocks starting at (0, 0).
//! The last block row and column may overhang the image; their missing
//! pixels are absent samples of an `L x L` region that stores only the
//! in-image part, so the work per block is bounded by the image size even
//! for very large `L`. Each block gets its own threshold and only its
//! in-image pixels are written back.
//!
//! Blocks share nothing but the read-only source image, so with
//! [`TileOptions::parallel`] they are processed on the rayon thread pool.
//! The results are written into the output sequentially afterwards; serial
//! and parallel runs give identical images.

use crate::binarize::binarize_region;
use crate::select::{self, Selector};
use crate::{ThresholdError, ThresholdResult};
use bilevel_core::{Gray, GrayMut, Rect, Region};
use log::{debug, trace};
use rayon::prelude::*;

/// Block side used by [`threshold_adaptive_mean`] by default
pub const DEFAULT_MEAN_BLOCK_SIZE: u32 = 24;

/// Block side used by [`threshold_adaptive_otsu`] by default
pub const DEFAULT_OTSU_BLOCK_SIZE: u32 = 32;

/// Block side used by [`threshold_adaptive_median`] by default
pub const DEFAULT_MEDIAN_BLOCK_SIZE: u32 = 16;

/// Options for block-adaptive thresholding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileOptions {
    /// Side length of the square blocks (must be > 0)
    pub block_size: u32,
    /// Process blocks on the rayon thread pool
    pub parallel: bool,
}

impl Default for TileOptions {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_OTSU_BLOCK_SIZE,
            parallel: true,
        }
    }
}

impl TileOptions {
    /// Options with the given block size, processed in parallel.
    pub fn with_block_size(block_size: u32) -> Self {
        Self {
            block_size,
            ..Self::default()
        }
    }

    /// Enable or disable parallel block processing.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Threshold chosen for one block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockThreshold {
    /// Block rectangle; may extend past the image
    pub rect: Rect,
    /// Threshold applied inside the block
    pub threshold: u8,
}

/// Result of a block-adaptive run
#[derive(Debug, Clone)]
pub struct Tiled {
    /// Black/white image with the input's dimensions
    pub image: Gray,
    /// Per-block thresholds in row-major grid order
    pub blocks: Vec<BlockThreshold>,
}

/// Lay out the block grid for a `width x height` image.
///
/// Returns `ceil(height / L) * ceil(width / L)` rectangles of size `L x L`
/// in row-major order.
///
/// # Errors
///
/// Returns [`ThresholdError::InvalidBlockSize`] if `block_size` is 0.
pub fn block_grid(width: u32, height: u32, block_size: u32) -> ThresholdResult<Vec<Rect>> {
    if block_size == 0 {
        return Err(ThresholdError::InvalidBlockSize(block_size));
    }
    let cols = width.div_ceil(block_size);
    let rows = height.div_ceil(block_size);
    let mut grid = Vec::with_capacity(rows as usize * cols as usize);
    for by in 0..rows {
        for bx in 0..cols {
            grid.push(Rect::new(
                bx * block_size,
                by * block_size,
                block_size,
                block_size,
            ));
        }
    }
    Ok(grid)
}

/// Threshold every block of `gray` independently with `selector`.
///
/// # Errors
///
/// Returns [`ThresholdError::InvalidBlockSize`] for a zero block size and
/// propagates selector errors.
pub fn threshold_tiled(
    gray: &Gray,
    selector: &Selector,
    options: &TileOptions,
) -> ThresholdResult<Tiled> {
    let (width, height) = gray.dimensions();
    let grid = block_grid(width, height, options.block_size)?;

    let process = |rect: &Rect| -> ThresholdResult<(BlockThreshold, Region)> {
        let region = Region::block(gray, *rect);
        let threshold = selector.select(&region)?;
        trace!(
            "block ({}, {}): {} threshold {}",
            rect.x,
            rect.y,
            selector.name(),
            threshold
        );
        Ok((
            BlockThreshold {
                rect: *rect,
                threshold,
            },
            binarize_region(&region, threshold),
        ))
    };

    let results: Vec<(BlockThreshold, Region)> = if options.parallel {
        grid.par_iter().map(process).collect::<ThresholdResult<_>>()?
    } else {
        grid.iter().map(process).collect::<ThresholdResult<_>>()?
    };

    let mut out = GrayMut::new(width, height)?;
    let mut blocks = Vec::with_capacity(results.len());
    for (block, region) in results {
        write_block(&mut out, block.rect, &region);
        blocks.push(block);
    }

    debug!(
        "tiled {} threshold for {}x{}: {} blocks of {}",
        selector.name(),
        width,
        height,
        blocks.len(),
        options.block_size
    );

    Ok(Tiled {
        image: out.into(),
        blocks,
    })
}

/// Copy the present samples of a block region into the output at the
/// block's offset. Absent samples are never written.
fn write_block(out: &mut GrayMut, rect: Rect, region: &Region) {
    let Some(visible) = rect.clip_to(out.width(), out.height()) else {
        return;
    };
    for dy in 0..visible.h {
        for dx in 0..visible.w {
            if let Some(Some(v)) = region.get(dx, dy) {
                out.set_pixel_unchecked(rect.x + dx, rect.y + dy, v);
            }
        }
    }
}

/// Block-adaptive isodata.
///
/// The starting estimate is the [`select::midrange`] of the whole image,
/// computed once and shared by every block.
pub fn threshold_adaptive_mean(
    gray: &Gray,
    block_size: u32,
    iterations: u32,
    parallel: bool,
) -> ThresholdResult<Gray> {
    let selector = Selector::IterativeMean {
        initial: select::midrange(gray),
        iterations,
    };
    let options = TileOptions::with_block_size(block_size).parallel(parallel);
    Ok(threshold_tiled(gray, &selector, &options)?.image)
}

/// Block-adaptive Otsu, each block using its own histogram.
pub fn threshold_adaptive_otsu(
    gray: &Gray,
    block_size: u32,
    parallel: bool,
) -> ThresholdResult<Gray> {
    let options = TileOptions::with_block_size(block_size).parallel(parallel);
    Ok(threshold_tiled(gray, &Selector::Otsu, &options)?.image)
}

/// Block-adaptive median, each block using its own histogram.
pub fn threshold_adaptive_median(
    gray: &Gray,
    block_size: u32,
    parallel: bool,
) -> ThresholdResult<Gray> {
    let options = TileOptions::with_block_size(block_size).parallel(parallel);
    Ok(threshold_tiled(gray, &Selector::Median, &options)?.image)
}
