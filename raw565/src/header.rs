//! Dimensions header: width then height, each a `u16` in the blob's byte
//! order.

use byteorder::ByteOrder;

/// Size of the serialized header in bytes.
pub const HEADER_LEN: usize = 4;

/// Bytes per serialized pixel word.
pub const BYTES_PER_PIXEL: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub width: u16,
    pub height: u16,
}

impl Header {
    /// Serializes the header, width first, in the selected byte order.
    #[inline]
    pub fn encode<B: ByteOrder>(&self) -> [u8; HEADER_LEN] {
        let mut bytes = [0; HEADER_LEN];
        B::write_u16(&mut bytes[..2], self.width);
        B::write_u16(&mut bytes[2..], self.height);
        bytes
    }

    /// Parses a header off the front of `data`, returning it together with
    /// the remaining bytes. `None` if fewer than [`HEADER_LEN`] bytes are
    /// available.
    #[inline]
    pub fn decode<B: ByteOrder>(data: &[u8]) -> Option<(Self, &[u8])> {
        if data.len() < HEADER_LEN {
            return None;
        }

        let (header, rest) = data.split_at(HEADER_LEN);
        let width = B::read_u16(&header[..2]);
        let height = B::read_u16(&header[2..]);

        Some((Self { width, height }, rest))
    }

    /// Number of pixels the header declares. `None` if width×height
    /// overflows `usize`.
    #[inline]
    pub fn pixel_count(&self) -> Option<usize> {
        usize::from(self.width).checked_mul(usize::from(self.height))
    }

    /// Total blob size in bytes for these dimensions. `None` on overflow.
    #[inline]
    pub fn byte_len(&self) -> Option<usize> {
        self.pixel_count()?
            .checked_mul(BYTES_PER_PIXEL)?
            .checked_add(HEADER_LEN)
    }
}
