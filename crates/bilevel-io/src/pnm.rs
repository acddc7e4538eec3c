//! PNM (Portable Any Map) format support
//!
//! Reads and writes binary PGM (P5) with a maxval of at most 255.
//! Header comments (`#` to end of line) are skipped.

use crate::{IoError, IoResult};
use bilevel_core::Gray;
use std::io::{BufRead, Read, Write};

/// Read a binary PGM image.
///
/// # Arguments
/// * `reader` - A buffered reader positioned at the `P5` magic
pub fn read_pnm<R: BufRead>(mut reader: R) -> IoResult<Gray> {
    let magic = next_token(&mut reader)?;
    if magic != "P5" {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNM variant: {}",
            magic
        )));
    }
    let width = parse_header_value(&mut reader, "width")?;
    let height = parse_header_value(&mut reader, "height")?;
    let maxval = parse_header_value(&mut reader, "maxval")?;
    if maxval == 0 || maxval > 255 {
        return Err(IoError::UnsupportedFormat(format!(
            "PGM maxval {} is not 8-bit",
            maxval
        )));
    }

    // the header is untrusted; only buffer what the stream actually holds
    let expected = width as u64 * height as u64;
    let mut data = Vec::new();
    reader
        .take(expected)
        .read_to_end(&mut data)
        .map_err(|e| IoError::DecodeError(format!("PGM pixel data: {}", e)))?;
    if (data.len() as u64) < expected {
        return Err(IoError::DecodeError(format!(
            "PGM pixel data truncated: expected {} bytes for {}x{}, got {}",
            expected,
            width,
            height,
            data.len()
        )));
    }

    if maxval != 255 {
        for v in data.iter_mut() {
            *v = ((*v as u32 * 255 + maxval / 2) / maxval).min(255) as u8;
        }
    }

    Ok(Gray::from_vec(width, height, data)?)
}

/// Write a `Gray` as binary PGM.
pub fn write_pnm<W: Write>(gray: &Gray, mut writer: W) -> IoResult<()> {
    write!(writer, "P5\n{} {}\n255\n", gray.width(), gray.height())?;
    writer.write_all(gray.data())?;
    writer.flush()?;
    Ok(())
}

fn parse_header_value<R: BufRead>(reader: &mut R, what: &str) -> IoResult<u32> {
    let token = next_token(reader)?;
    token
        .parse()
        .map_err(|_| IoError::InvalidData(format!("invalid PGM {}: {:?}", what, token)))
}

/// Read one whitespace-delimited header token, skipping comments.
///
/// Consumes exactly one whitespace byte after the token, so after the
/// maxval the reader sits at the first pixel byte.
fn next_token<R: BufRead>(reader: &mut R) -> IoResult<String> {
    let mut token = String::new();
    let mut in_comment = false;
    let mut byte = [0u8; 1];
    loop {
        if reader.read(&mut byte)? == 0 {
            if token.is_empty() {
                return Err(IoError::InvalidData("truncated PGM header".to_string()));
            }
            return Ok(token);
        }
        let c = byte[0];
        if in_comment {
            in_comment = c != b'\n';
            continue;
        }
        if c == b'#' {
            in_comment = true;
        } else if c.is_ascii_whitespace() {
            if !token.is_empty() {
                return Ok(token);
            }
        } else {
            token.push(c as char);
        }
    }
}
