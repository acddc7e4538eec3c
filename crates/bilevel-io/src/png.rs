//! PNG image format support
//!
//! Any PNG colour type and bit depth is accepted on read: the decoder is
//! asked to expand palettes and low bit depths and to strip 16-bit samples,
//! then colour is reduced to luma. Output is always 8-bit grayscale.

use crate::convert::interleaved_to_gray;
use crate::{IoError, IoResult};
use bilevel_core::Gray;
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image as 8-bit gray
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Gray> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let (color_type, bit_depth) = reader.output_color_type();
    if bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG output depth: {:?}",
            bit_depth
        )));
    }
    let channels = match color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::UnsupportedFormat(
                "indexed PNG was not expanded".to_string(),
            ));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let width = output_info.width;
    let height = output_info.height;
    let bytes_per_row = output_info.line_size;
    let row_len = width as usize * channels;
    let data = &buf[..output_info.buffer_size()];

    let mut gray = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height as usize {
        let row_start = y * bytes_per_row;
        let row = data
            .get(row_start..row_start + row_len)
            .ok_or_else(|| IoError::InvalidData(format!("PNG row {} is truncated", y)))?;
        interleaved_to_gray(row, channels, &mut gray);
    }

    Ok(Gray::from_vec(width, height, gray)?)
}

/// Write an 8-bit grayscale PNG image
pub fn write_png<W: Write>(gray: &Gray, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, gray.width(), gray.height());
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    writer
        .write_image_data(gray.data())
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_png_roundtrip_grayscale() {
        let data: Vec<u8> = (0..100u32).map(|i| ((i % 10 + i / 10) * 10) as u8).collect();
        let gray = Gray::from_vec(10, 10, data).unwrap();

        let mut buffer = Vec::new();
        write_png(&gray, &mut buffer).unwrap();

        let gray2 = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(gray2, gray);
    }

    #[test]
    fn test_png_rgb_reduced_to_luma() {
        let mut buffer = Vec::new();
        {
            let mut encoder = Encoder::new(&mut buffer, 2, 1);
            encoder.set_color(ColorType::Rgb);
            encoder.set_depth(BitDepth::Eight);
            let mut writer = encoder.write_header().unwrap();
            writer
                .write_image_data(&[255, 255, 255, 255, 0, 0])
                .unwrap();
        }

        let gray = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(gray.dimensions(), (2, 1));
        assert_eq!(gray.data(), &[255, 76]);
    }

    #[test]
    fn test_png_garbage() {
        let result = read_png(Cursor::new(vec![0u8; 16]));
        assert!(matches!(result, Err(IoError::DecodeError(_))));
    }
}
