use crate::{
    encode::{checked_header, EncodeError, UnwritableSinkSnafu},
    pixel::pack_rgb565,
    raster::Rgb888Image,
};
use byteorder::ByteOrder;
use snafu::ResultExt;
use std::io::Write;

/// Encodes `image` as a raw RGB565 blob into any [`Write`] sink.
///
/// Same stream as [`encode_to_vec`](crate::encode::encode_to_vec); sink I/O
/// failures are surfaced as [`EncodeError::UnwritableSink`].
pub fn encode<B: ByteOrder, W: Write>(image: &Rgb888Image, mut w: W) -> Result<(), EncodeError> {
    let header = checked_header(image)?;
    w.write_all(&header.encode::<B>())
        .context(UnwritableSinkSnafu)?;

    for &rgb in image.pixels() {
        let mut word = [0; 2];
        B::write_u16(&mut word, pack_rgb565(rgb));
        w.write_all(&word).context(UnwritableSinkSnafu)?;
    }

    Ok(())
}
