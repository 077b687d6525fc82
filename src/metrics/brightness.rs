//! Average brightness scan
//!
//! Brightness is the mean of per-pixel `(r+g+b)/3` over every pixel that is
//! not fully transparent, normalized to [0,1] by dividing by 255.

use crate::errors::MetricsError;
use crate::types::PixelBuffer;
use crate::assert_invariant;
use serde::{Deserialize, Serialize};

/// Compute average brightness in [0,1].
///
/// Fully transparent pixels (packed RGBA value exactly zero) are excluded
/// from both the sum and the denominator. An image whose pixels are all
/// transparent has no defined brightness and fails with `DegenerateImage`;
/// a zero-area image fails with `InvalidImage` before any scan.
pub fn brightness(buffer: &PixelBuffer) -> Result<f64, MetricsError> {
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
        sum += pixel.brightness();
    }

    let opaque = buffer.pixel_count() - transparent;
    if opaque == 0 {
        return Err(MetricsError::DegenerateImage(
            "every pixel is fully transparent".to_string(),
        ));
    }

    let value = sum / opaque as f64 / 255.0;
    assert_invariant!(
        value.is_finite(),
        "brightness is finite",
        "metrics::brightness"
    );
    Ok(value)
}

/// Coarse brightness band for a whole image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrightnessLevel {
    VeryDark,
    Dark,
    Balanced,
    Bright,
    VeryBright,
}

impl BrightnessLevel {
    /// Map a normalized brightness value to its band.
    pub fn from_brightness(value: f64) -> Self {
        match value {
            v if v < 0.15 => BrightnessLevel::VeryDark,
            v if v < 0.35 => BrightnessLevel::Dark,
            v if v < 0.65 => BrightnessLevel::Balanced,
            v if v < 0.85 => BrightnessLevel::Bright,
            _ => BrightnessLevel::VeryBright,
        }
    }

    pub fn quality_score(&self) -> f64 {
        match self {
            BrightnessLevel::Balanced => 1.0,
            BrightnessLevel::Dark | BrightnessLevel::Bright => 0.8,
            BrightnessLevel::VeryDark | BrightnessLevel::VeryBright => 0.3,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BrightnessLevel::VeryDark => "very dark",
            BrightnessLevel::Dark => "dark",
            BrightnessLevel::Balanced => "balanced",
            BrightnessLevel::Bright => "bright",
            BrightnessLevel::VeryBright => "very bright",
        }
    }
}
