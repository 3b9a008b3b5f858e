//! Extraction options and configuration.
//!
//! This module provides the [`ExtractOptions`] struct for tuning sampling,
//! filtering and quantization in the dominant color extractor.

use serde::{Deserialize, Serialize};

/// Configuration options for dominant color extraction.
///
/// # Defaults
///
/// - Stride: every 4th pixel is sampled
/// - Alpha floor: 128 (anything more transparent is skipped)
/// - Dark floor: 50 (`R+G+B` below this is too close to black)
/// - Light ceiling: 700 (`R+G+B` above this is too close to white)
/// - Bucket size: 15 (channels are rounded to multiples of 15)
/// - Max colors: 6
///
/// # Example
///
/// ```
/// use color_engine::ExtractOptions;
///
/// let options = ExtractOptions::new()
///     .stride(1)
///     .bucket_size(32)
///     .max_colors(4);
/// assert_eq!(options.stride, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    /// Sample every n-th pixel in row-major order. Zero is treated as one.
    pub stride: usize,

    /// Pixels with alpha below this are treated as transparent.
    pub min_alpha: u8,

    /// Pixels whose channel sum is below this are skipped as near-black.
    pub dark_floor: u16,

    /// Pixels whose channel sum is above this are skipped as near-white.
    pub light_ceiling: u16,

    /// Quantization step per channel. Zero is treated as one (no merging).
    pub bucket_size: u8,

    /// Number of top buckets to keep.
    pub max_colors: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            stride: 4,
            min_alpha: 128,
            dark_floor: 50,
            light_ceiling: 700,
            bucket_size: 15,
            max_colors: 6,
        }
    }
}

impl ExtractOptions {
    /// Create new extraction options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn stride(mut self, stride: usize) -> Self {
        self.stride = stride;
        self
    }

    #[inline]
    pub fn min_alpha(mut self, alpha: u8) -> Self {
        self.min_alpha = alpha;
        self
    }

    /// Set the near-black and near-white channel-sum bounds.
    #[inline]
    pub fn brightness_bounds(mut self, dark_floor: u16, light_ceiling: u16) -> Self {
        self.dark_floor = dark_floor;
        self.light_ceiling = light_ceiling;
        self
    }

    #[inline]
    pub fn bucket_size(mut self, size: u8) -> Self {
        self.bucket_size = size;
        self
    }

    #[inline]
    pub fn max_colors(mut self, n: usize) -> Self {
        self.max_colors = n;
        self
    }

    pub(crate) fn effective_stride(&self) -> usize {
        self.stride.max(1)
    }

    /// Round one channel to the nearest multiple of the bucket size.
    ///
    /// Halves round up. Results above 255 (possible when 255 is not a
    /// multiple of the bucket size) clamp to 255.
    pub fn quantize(&self, channel: u8) -> u8 {
        let size = u16::from(self.bucket_size.max(1));
        let rounded = (u16::from(channel) + size / 2) / size * size;
        rounded.min(255) as u8
    }
}
