//! RGB888 ↔ RGB565 per-pixel conversion.

/// Packs an 8-bit-per-channel pixel into a RGB565 `u16` word.
///
/// Quantizes by truncation (`r >> 3`, `g >> 2`, `b >> 3`), discarding the
/// low bits of each channel.
#[inline]
pub const fn pack_rgb565([r, g, b]: [u8; 3]) -> u16 {
    let r5 = (r >> 3) as u16;
    let g6 = (g >> 2) as u16;
    let b5 = (b >> 3) as u16;

    (r5 << 11) | (g6 << 5) | b5
}

/// Unpacks a RGB565 `u16` word into an 8-bit-per-channel pixel.
///
/// Widens each channel by left shift only (`r5 << 3`, `g6 << 2`, `b5 << 3`),
/// so the low bits of the result are always zero. This does not invert
/// [`pack_rgb565`] bit-for-bit, but `pack_rgb565(unpack_rgb565(p)) == p`
/// holds for every word.
#[inline]
pub const fn unpack_rgb565(p: u16) -> [u8; 3] {
    let r5 = (p >> 11) & 0b1_1111;
    let g6 = (p >> 5) & 0b11_1111;
    let b5 = p & 0b1_1111;

    [(r5 << 3) as u8, (g6 << 2) as u8, (b5 << 3) as u8]
}
