//! Frequency-based dominant color extraction.
//!
//! The extractor walks an RGBA buffer with a fixed stride, drops transparent
//! and near-black/near-white pixels, quantizes the rest into buckets and
//! ranks the buckets by occurrence count.
//!
//! ```text
//! Idle ──begin_decode──> Decoding ──decode_failed──> Failed
//!   │                       │
//!   └───────extract─────────┴──> Sampling ──> Ranking ──> Done
//!                                   │
//!                                   └── no usable pixels ──> Failed
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use super::{ExtractError, ExtractOptions, PixelBuffer};
use crate::color::{color_name, Color, Rgb};

/// Where an extractor is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExtractionStage {
    #[default]
    Idle,
    Decoding,
    Sampling,
    Ranking,
    Done,
    Failed,
}

impl ExtractionStage {
    pub fn is_terminal(self) -> bool {
        matches!(self, ExtractionStage::Done | ExtractionStage::Failed)
    }
}

impl fmt::Display for ExtractionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExtractionStage::Idle => "idle",
            ExtractionStage::Decoding => "decoding",
            ExtractionStage::Sampling => "sampling",
            ExtractionStage::Ranking => "ranking",
            ExtractionStage::Done => "done",
            ExtractionStage::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// One ranked, named bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DominantColor {
    pub color: Color,
    /// Number of sampled pixels that fell into this bucket.
    pub count: u32,
    pub name: String,
}

/// Result of a successful extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Ranked colors, most frequent first.
    pub colors: Vec<DominantColor>,
    /// Pixels visited by the stride walk.
    pub sampled: usize,
    /// Sampled pixels that passed the filters.
    pub kept: usize,
    /// Distinct buckets before truncation.
    pub buckets: usize,
}

/// Occurrence counts per quantized color, in first-seen order.
#[derive(Debug, Default)]
struct ColorSample {
    index: HashMap<u32, usize>,
    buckets: Vec<(Rgb, u32)>,
}

impl ColorSample {
    fn record(&mut self, rgb: Rgb) {
        let key = (u32::from(rgb.r) << 16) | (u32::from(rgb.g) << 8) | u32::from(rgb.b);
        match self.index.get(&key) {
            Some(&slot) => self.buckets[slot].1 += 1,
            None => {
                self.index.insert(key, self.buckets.len());
                self.buckets.push((rgb, 1));
            }
        }
    }

    fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Top `n` buckets by count. The sort is stable, so ties keep
    /// first-seen order.
    fn into_ranked(mut self, n: usize) -> Vec<(Rgb, u32)> {
        self.buckets.sort_by(|a, b| b.1.cmp(&a.1));
        self.buckets.truncate(n);
        self.buckets
    }
}

/// Stateful dominant color extractor.
///
/// # Example
///
/// ```
/// use color_engine::{DominantColorExtractor, ExtractOptions, ExtractionStage, PixelBuffer};
///
/// let data = [0x33, 0x66, 0x99, 0xFF].repeat(64);
/// let buffer = PixelBuffer::new(&data, 8, 8).unwrap();
///
/// let mut extractor = DominantColorExtractor::new(ExtractOptions::default());
/// let result = extractor.extract(&buffer).unwrap();
///
/// assert_eq!(extractor.stage(), ExtractionStage::Done);
/// assert_eq!(result.colors.len(), 1);
/// assert_eq!(result.colors[0].name, "Blue");
/// ```
#[derive(Debug, Clone)]
pub struct DominantColorExtractor {
    options: ExtractOptions,
    stage: ExtractionStage,
}

impl DominantColorExtractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self {
            options,
            stage: ExtractionStage::Idle,
        }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    pub fn stage(&self) -> ExtractionStage {
        self.stage
    }

    /// Mark that the caller started decoding the source image.
    pub fn begin_decode(&mut self) -> Result<(), ExtractError> {
        self.transition(ExtractionStage::Idle, ExtractionStage::Decoding, "begin decode")
    }

    /// Mark that decoding the source image failed.
    pub fn decode_failed(&mut self) -> Result<(), ExtractError> {
        self.transition(ExtractionStage::Decoding, ExtractionStage::Failed, "fail decode")
    }

    /// Return to `Idle` so the extractor can be reused.
    pub fn reset(&mut self) {
        self.stage = ExtractionStage::Idle;
    }

    /// Sample, rank and name the dominant colors of `buffer`.
    ///
    /// Allowed from `Idle` (pixels decoded elsewhere) or `Decoding`. Ends in
    /// `Done` on success and `Failed` on [`ExtractError::EmptyPalette`].
    pub fn extract(&mut self, buffer: &PixelBuffer<'_>) -> Result<Extraction, ExtractError> {
        if !matches!(self.stage, ExtractionStage::Idle | ExtractionStage::Decoding) {
            return Err(ExtractError::InvalidStage {
                stage: self.stage,
                operation: "extract",
            });
        }

        self.stage = ExtractionStage::Sampling;
        let (sample, sampled, kept) = self.sample(buffer);
        if kept == 0 {
            self.stage = ExtractionStage::Failed;
            return Err(ExtractError::EmptyPalette);
        }

        self.stage = ExtractionStage::Ranking;
        let buckets = sample.len();
        let colors = sample
            .into_ranked(self.options.max_colors)
            .into_iter()
            .map(|(rgb, count)| {
                let color = Color::from(rgb);
                DominantColor {
                    color,
                    count,
                    name: color_name(color).to_string(),
                }
            })
            .collect();

        self.stage = ExtractionStage::Done;
        Ok(Extraction {
            colors,
            sampled,
            kept,
            buckets,
        })
    }

    fn sample(&self, buffer: &PixelBuffer<'_>) -> (ColorSample, usize, usize) {
        let opts = &self.options;
        let mut sample = ColorSample::default();
        let mut sampled = 0;
        let mut kept = 0;

        for [r, g, b, a] in buffer.sampled(opts.effective_stride()) {
            sampled += 1;
            if a < opts.min_alpha {
                continue;
            }
            let sum = Rgb::new(r, g, b).channel_sum();
            if sum < opts.dark_floor || sum > opts.light_ceiling {
                continue;
            }
            kept += 1;
            sample.record(Rgb::new(
                opts.quantize(r),
                opts.quantize(g),
                opts.quantize(b),
            ));
        }

        (sample, sampled, kept)
    }

    fn transition(
        &mut self,
        from: ExtractionStage,
        to: ExtractionStage,
        operation: &'static str,
    ) -> Result<(), ExtractError> {
        if self.stage != from {
            return Err(ExtractError::InvalidStage {
                stage: self.stage,
                operation,
            });
        }
        self.stage = to;
        Ok(())
    }
}

/// Run a fresh extractor over `buffer`.
pub fn extract_dominant_colors(
    buffer: &PixelBuffer<'_>,
    options: &ExtractOptions,
) -> Result<Extraction, ExtractError> {
    DominantColorExtractor::new(options.clone()).extract(buffer)
}
