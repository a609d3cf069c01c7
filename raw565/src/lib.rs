//! Codec for the raw RGB565 binary image container.
//!
//! The container is a plain dump of an RGB565 image with a fixed layout and
//! no compression:
//!
//! | Offset | Size            | Field        |
//! |--------|-----------------|--------------|
//! | 0      | 2 bytes         | width (u16)  |
//! | 2      | 2 bytes         | height (u16) |
//! | 4      | 2×width×height  | pixel words  |
//!
//! Pixels are stored row-major with the origin at the top left, one `u16`
//! RGB565 word per pixel (5 bits red, 6 bits green, 5 bits blue, red in the
//! most significant bits).
//!
//! # Byte order
//!
//! The byte order of the file is picked once per blob and applies to the
//! width and height fields as well as every pixel word. The encode and
//! decode APIs are generic over [`byteorder::ByteOrder`], so the order is
//! fixed at the type level ([`byteorder::LittleEndian`] or
//! [`byteorder::BigEndian`]) and cannot be mixed within one blob.
//!
//! # Quantization
//!
//! Going from 8-bit channels to RGB565 truncates the low bits of each
//! channel (`r >> 3`, `g >> 2`, `b >> 3`); going back widens by left shift
//! only, leaving the low bits zero. [`pixel::pack_rgb565`] after
//! [`pixel::unpack_rgb565`] reproduces any `u16` word exactly, but the
//! 888→565→888 round trip is lossy by design.
#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "alloc")]
pub mod encode;

pub mod decode;
pub mod header;
pub mod pixel;
#[cfg(feature = "alloc")]
pub mod raster;

pub use header::Header;
#[cfg(feature = "alloc")]
pub use raster::Rgb888Image;
