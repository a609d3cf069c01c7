//! Raster → blob direction.

use crate::{
    header::Header,
    pixel::pack_rgb565,
    raster::Rgb888Image,
};
use alloc::vec::Vec;
use byteorder::ByteOrder;
use snafu::{ensure, Snafu};

#[cfg(feature = "std")]
mod std_api;
#[cfg(feature = "std")]
pub use std_api::*;

#[derive(Debug, Snafu)]
pub enum EncodeError {
    /// Width or height doesn't fit the 16-bit header fields. Raised before
    /// any output byte is produced.
    #[snafu(display(
        "image dimensions {width}x{height} don't fit the header's 16-bit fields (max 65535)"
    ))]
    DimensionOutOfRange { width: usize, height: usize },

    #[cfg(feature = "std")]
    #[snafu(display("failed to write RGB565 blob to sink"))]
    UnwritableSink { source: std::io::Error },
}

/// Validates the raster's dimensions against the header's 16-bit fields.
fn checked_header(image: &Rgb888Image) -> Result<Header, EncodeError> {
    let (width, height) = (image.width(), image.height());
    ensure!(
        width <= usize::from(u16::MAX) && height <= usize::from(u16::MAX),
        DimensionOutOfRangeSnafu { width, height }
    );

    Ok(Header {
        width: width as u16,
        height: height as u16,
    })
}

/// Encodes `image` as a raw RGB565 blob, appending to `out`.
///
/// The output is always exactly `4 + 2 * width * height` bytes: the
/// dimensions header followed by one word per pixel, row-major from the top
/// left, everything in byte order `B`.
pub fn encode_to_vec<B: ByteOrder>(
    image: &Rgb888Image,
    out: &mut Vec<u8>,
) -> Result<(), EncodeError> {
    let header = checked_header(image)?;

    // u16 dimensions, can't overflow usize here
    out.reserve(header.byte_len().unwrap_or(0));
    out.extend_from_slice(&header.encode::<B>());

    for &rgb in image.pixels() {
        let mut word = [0; 2];
        B::write_u16(&mut word, pack_rgb565(rgb));
        out.extend_from_slice(&word);
    }

    Ok(())
}
