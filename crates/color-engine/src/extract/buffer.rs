//! Borrowed RGBA pixel buffer.

use super::ExtractError;

/// Bytes per RGBA pixel.
pub const CHANNELS: usize = 4;

/// A decoded raster image: RGBA, one byte per channel, row-major.
///
/// # Example
///
/// ```
/// use color_engine::PixelBuffer;
///
/// let data = [0x33, 0x66, 0x99, 0xFF].repeat(4);
/// let buffer = PixelBuffer::new(&data, 2, 2).unwrap();
/// assert_eq!(buffer.pixel_count(), 4);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PixelBuffer<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
}

impl<'a> PixelBuffer<'a> {
    /// Wrap raw RGBA bytes.
    ///
    /// # Errors
    ///
    /// [`ExtractError::BufferSize`] if `data.len() != width * height * 4`.
    pub fn new(data: &'a [u8], width: u32, height: u32) -> Result<Self, ExtractError> {
        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(ExtractError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.data.len() / CHANNELS
    }

    /// Every `stride`-th pixel as `[r, g, b, a]`, starting at the first.
    pub fn sampled(&self, stride: usize) -> impl Iterator<Item = [u8; 4]> + 'a {
        let data: &'a [u8] = self.data;
        data.chunks_exact(CHANNELS)
            .step_by(stride.max(1))
            .map(|px| [px[0], px[1], px[2], px[3]])
    }
}
