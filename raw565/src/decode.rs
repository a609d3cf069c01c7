//! Blob → raster direction.

use crate::header::{Header, HEADER_LEN};
use byteorder::ByteOrder;
use snafu::{OptionExt, Snafu};

#[cfg(feature = "alloc")]
use crate::{header::BYTES_PER_PIXEL, pixel::unpack_rgb565, raster::Rgb888Image};
#[cfg(feature = "alloc")]
use snafu::ensure;

#[derive(Debug, Snafu)]
pub enum DecodeError {
    /// The input holds fewer bytes than the header declares (or is too short
    /// for the header itself).
    #[snafu(display("input truncated: expected {expected} bytes, got {actual}"))]
    TruncatedInput { expected: usize, actual: usize },

    /// The declared width×height doesn't fit the platform's size type.
    #[snafu(display("declared dimensions {width}x{height} overflow the pixel count"))]
    DimensionOutOfRange { width: u16, height: u16 },
}

/// Reads just the dimensions header off the front of a blob.
pub fn decode_header<B: ByteOrder>(data: &[u8]) -> Result<Header, DecodeError> {
    let (header, _) = Header::decode::<B>(data).context(TruncatedInputSnafu {
        expected: HEADER_LEN,
        actual: data.len(),
    })?;

    Ok(header)
}

/// Decodes a raw RGB565 blob into an RGB888 raster.
///
/// Reads the header and exactly `width * height` pixel words, row-major from
/// the top left, widening each back to 8 bits per channel. Trailing bytes
/// beyond the declared size are ignored.
#[cfg(feature = "alloc")]
pub fn decode<B: ByteOrder>(data: &[u8]) -> Result<Rgb888Image, DecodeError> {
    let (header, rest) = Header::decode::<B>(data).context(TruncatedInputSnafu {
        expected: HEADER_LEN,
        actual: data.len(),
    })?;

    let Header { width, height } = header;
    let expected = header
        .byte_len()
        .context(DimensionOutOfRangeSnafu { width, height })?;
    ensure!(
        data.len() >= expected,
        TruncatedInputSnafu {
            expected,
            actual: data.len(),
        }
    );

    // byte_len fit in usize, so width * height does too
    let width = usize::from(width);
    let pixel_count = width * usize::from(height);

    let mut image = Rgb888Image::new(width, usize::from(height));
    for (i, word) in rest
        .chunks_exact(BYTES_PER_PIXEL)
        .take(pixel_count)
        .enumerate()
    {
        let pixel = unpack_rgb565(B::read_u16(word));
        image.set(i % width, i / width, pixel);
    }

    Ok(image)
}
