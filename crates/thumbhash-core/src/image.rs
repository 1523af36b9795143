//! Image data structures

use crate::{Dimensions, ThumbHashError, ThumbHashResult};

/// Number of bytes per RGBA8 pixel
pub const RGBA_CHANNELS: usize = 4;

/// An 8-bit RGBA pixel buffer, row-major, straight (non-premultiplied) alpha
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    dimensions: Dimensions,
    data: Vec<u8>,
}

impl RgbaImage {
    /// Create a fully transparent black image
    pub fn new(width: u32, height: u32) -> ThumbHashResult<Self> {
        let dimensions = validate_dimensions(width, height)?;
        let data = vec![0; rgba_len(dimensions)?];
        Ok(Self { dimensions, data })
    }

    /// Wrap an existing RGBA8 buffer
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> ThumbHashResult<Self> {
        let dimensions = check_rgba_buffer(width, height, data.len())?;
        Ok(Self { dimensions, data })
    }

    /// Build an image by evaluating `f(x, y)` for every pixel
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> ThumbHashResult<Self>
    where
        F: FnMut(u32, u32) -> [u8; 4],
    {
        let mut image = Self::new(width, height)?;
        for y in 0..height {
            for x in 0..width {
                let idx = image.index(x, y);
                image.data[idx..idx + RGBA_CHANNELS].copy_from_slice(&f(x, y));
            }
        }
        Ok(image)
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    pub fn pixel_count(&self) -> usize {
        self.dimensions.pixel_count()
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let idx = self.index(x, y);
        [
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
            self.data[idx + 3],
        ]
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.dimensions.width as usize + x as usize) * RGBA_CHANNELS
    }
}

/// Check that a buffer of `len` bytes holds exactly `width` x `height`
/// RGBA8 pixels
pub fn check_rgba_buffer(width: u32, height: u32, len: usize) -> ThumbHashResult<Dimensions> {
    let dimensions = validate_dimensions(width, height)?;
    let expected = rgba_len(dimensions)?;
    if len != expected {
        return Err(ThumbHashError::BufferSizeMismatch {
            expected,
            actual: len,
        });
    }
    Ok(dimensions)
}

fn validate_dimensions(width: u32, height: u32) -> ThumbHashResult<Dimensions> {
    if width == 0 || height == 0 {
        return Err(ThumbHashError::InvalidDimensions { width, height });
    }
    Ok(Dimensions::new(width, height))
}

/// Byte length of an RGBA8 buffer, or `InvalidDimensions` if it does not fit in memory
fn rgba_len(dimensions: Dimensions) -> ThumbHashResult<usize> {
    (dimensions.width as usize)
        .checked_mul(dimensions.height as usize)
        .and_then(|pixels| pixels.checked_mul(RGBA_CHANNELS))
        .ok_or(ThumbHashError::InvalidDimensions {
            width: dimensions.width,
            height: dimensions.height,
        })
}
