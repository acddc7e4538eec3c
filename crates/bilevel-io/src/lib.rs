//! bilevel-io - Image I/O for the bilevel thresholding library
//!
//! Decodes images into 8-bit [`Gray`] (colour input is reduced to luma) and
//! encodes thresholded results.
//!
//! | Format | Read | Write | Feature |
//! |--------|------|-------|---------|
//! | PNG    | any colour type / depth | 8-bit gray | `png-format` |
//! | PGM    | P5, maxval <= 255 | P5 | `pnm` |

mod convert;
mod error;
pub mod format;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use bilevel_core::ImageFormat;
pub use convert::rgb_to_gray;
pub use error::{IoError, IoResult};
pub use format::{detect_format, detect_format_from_bytes, format_for_path};

use bilevel_core::Gray;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor};
use std::path::Path;

/// Read an image from a file path, detecting the format from its header.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Gray> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    let file = File::open(path)?;
    let gray = read_image_format(BufReader::new(file), format)?;
    log::debug!(
        "read {} as {:?}: {}x{}",
        path.display(),
        format,
        gray.width(),
        gray.height()
    );
    Ok(gray)
}

/// Read an image from memory, detecting the format from its header.
pub fn read_image_mem(data: &[u8]) -> IoResult<Gray> {
    let format = detect_format_from_bytes(data)?;
    read_image_format(Cursor::new(data), format)
}

fn read_image_format<R: std::io::BufRead + std::io::Seek>(
    reader: R,
    format: ImageFormat,
) -> IoResult<Gray> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm(reader),
        _ => Err(IoError::UnsupportedFormat(format!(
            "reading {:?} is not supported",
            format
        ))),
    }
}

/// Write an image to a file path in the given format.
pub fn write_image<P: AsRef<Path>>(gray: &Gray, path: P, format: ImageFormat) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_image_format(gray, BufWriter::new(file), format)?;
    log::debug!("wrote {} as {:?}", path.display(), format);
    Ok(())
}

/// Encode an image into memory in the given format.
pub fn write_image_mem(gray: &Gray, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_image_format(gray, &mut buffer, format)?;
    Ok(buffer)
}

fn write_image_format<W: std::io::Write>(
    gray: &Gray,
    writer: W,
    format: ImageFormat,
) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(gray, writer),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::write_pnm(gray, writer),
        _ => Err(IoError::UnsupportedFormat(format!(
            "writing {:?} is not supported",
            format
        ))),
    }
}
