//! Average saturation scan
//!
//! Saturation is the mean of per-pixel `(max-min)/max` over the color
//! channels of every pixel that is not fully transparent. The per-pixel
//! value is already a ratio in [0,1], so no further normalization applies.

use crate::errors::MetricsError;
use crate::types::PixelBuffer;
use crate::assert_invariant;
use serde::{Deserialize, Serialize};

/// Compute average saturation in [0,1].
///
/// Shares the transparency exclusion and degenerate-image policy of the
/// brightness scan: packed-zero pixels are skipped, and an image with no
/// remaining pixels fails with `DegenerateImage`.
pub fn saturation(buffer: &PixelBuffer) -> Result<f64, MetricsError> {
    if buffer.is_empty() {
        return Err(MetricsError::InvalidImage(format!(
            "cannot scan a {}x{} image",
            buffer.width(),
            buffer.height()
        )));
    }

    let mut sum = 0.0f64;
    let mut transparent = 0usize;
    for pixel in buffer.pixels() {
        if pixel.is_transparent() {
            transparent += 1;
            continue;
        }
        sum += pixel.saturation();
    }

    let opaque = buffer.pixel_count() - transparent;
    if opaque == 0 {
        return Err(MetricsError::DegenerateImage(
            "every pixel is fully transparent".to_string(),
        ));
    }

    let value = sum / opaque as f64;
    assert_invariant!(
        (0.0..=1.0).contains(&value),
        "saturation stays within [0,1]",
        "metrics::saturation"
    );
    Ok(value)
}

/// Coarse saturation band for a whole image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaturationLevel {
    Grayscale,
    Muted,
    Balanced,
    Vivid,
}

impl SaturationLevel {
    /// Map a saturation ratio to its band.
    pub fn from_saturation(value: f64) -> Self {
        match value {
            v if v < 0.05 => SaturationLevel::Grayscale,
            v if v < 0.3 => SaturationLevel::Muted,
            v if v < 0.7 => SaturationLevel::Balanced,
            _ => SaturationLevel::Vivid,
        }
    }

    pub fn quality_score(&self) -> f64 {
        match self {
            SaturationLevel::Balanced => 1.0,
            SaturationLevel::Muted | SaturationLevel::Vivid => 0.8,
            SaturationLevel::Grayscale => 0.5,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SaturationLevel::Grayscale => "grayscale",
            SaturationLevel::Muted => "muted",
            SaturationLevel::Balanced => "balanced",
            SaturationLevel::Vivid => "vivid",
        }
    }
}
