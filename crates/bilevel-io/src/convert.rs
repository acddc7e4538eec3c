//! Colour to grayscale conversion
//!
//! Decoders that meet colour data reduce it to luma here, so everything
//! downstream only ever sees 8-bit gray.

/// Luma of an RGB triple with weights 0.299 / 0.587 / 0.114, rounded.
#[inline]
pub fn rgb_to_gray(r: u8, g: u8, b: u8) -> u8 {
    let luma = 299 * r as u32 + 587 * g as u32 + 114 * b as u32;
    ((luma + 500) / 1000) as u8
}

/// Reduce interleaved samples with `channels` components per pixel to gray.
///
/// 1 = gray, 2 = gray + alpha, 3 = RGB, 4 = RGBA. Alpha is ignored.
pub(crate) fn interleaved_to_gray(row: &[u8], channels: usize, out: &mut Vec<u8>) {
    match channels {
        1 => out.extend_from_slice(row),
        2 => out.extend(row.chunks_exact(2).map(|p| p[0])),
        _ => out.extend(
            row.chunks_exact(channels)
                .map(|p| rgb_to_gray(p[0], p[1], p[2])),
        ),
    }
}
