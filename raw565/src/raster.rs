//! Owned RGB888 raster buffer.

use alloc::{vec, vec::Vec};

/// A 2D grid of 8-bit-per-channel RGB pixels, stored row-major with the
/// origin at the top left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rgb888Image {
    width: usize,
    height: usize,
    data: Vec<[u8; 3]>,
}

impl Rgb888Image {
    /// Creates a black image of the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![[0; 3]; width * height],
        }
    }

    /// Wraps an existing row-major pixel buffer. `None` if the buffer length
    /// doesn't match `width * height`.
    pub fn from_raw(width: usize, height: usize, data: Vec<[u8; 3]>) -> Option<Self> {
        (data.len() == width.checked_mul(height)?).then_some(Self {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Pixel at `(x, y)`, `x` left-to-right, `y` top-to-bottom.
    ///
    /// Panics if the coordinate is out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> [u8; 3] {
        assert!(x < self.width && y < self.height);
        self.data[y * self.width + x]
    }

    /// Replaces the pixel at `(x, y)`.
    ///
    /// Panics if the coordinate is out of bounds.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, pixel: [u8; 3]) {
        assert!(x < self.width && y < self.height);
        self.data[y * self.width + x] = pixel;
    }

    /// Iterates over all pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> impl Iterator<Item = &[u8; 3]> {
        self.data.iter()
    }

    /// Consumes the image, returning the row-major pixel buffer.
    #[inline]
    pub fn into_raw(self) -> Vec<[u8; 3]> {
        self.data
    }
}
