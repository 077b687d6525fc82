//! Contrast scan
//!
//! Contrast is the standard deviation of per-pixel brightness across the
//! whole image, scaled down by a fixed factor of 100 to land in a small
//! human-friendly range. Two passes: the mean must be known before the
//! variance pass.

use crate::errors::MetricsError;
use crate::types::PixelBuffer;
use crate::assert_invariant;
use serde::{Deserialize, Serialize};

/// Empirical divisor applied to the raw standard deviation.
const CONTRAST_SCALE: f64 = 100.0;

/// Compute normalized contrast, typically in [0,~2.55].
///
/// Unlike the brightness and saturation scans, transparent pixels are NOT
/// excluded here: every pixel, packed-zero ones included, contributes to
/// both passes. The only failure mode is a zero-area buffer.
pub fn contrast(buffer: &PixelBuffer) -> Result<f64, MetricsError> {
    if buffer.is_empty() {
        return Err(MetricsError::InvalidImage(format!(
            "cannot scan a {}x{} image",
            buffer.width(),
            buffer.height()
        )));
    }

    let num_pixels = buffer.pixel_count() as f64;

    let mut sum = 0.0f64;
    for pixel in buffer.pixels() {
        sum += pixel.brightness();
    }
    let mean = sum / num_pixels;

    let mut sum_sq = 0.0f64;
    for pixel in buffer.pixels() {
        let deviation = pixel.brightness() - mean;
        sum_sq += deviation * deviation;
    }

    let value = (sum_sq / num_pixels).sqrt() / CONTRAST_SCALE;
    assert_invariant!(
        value.is_finite() && value >= 0.0,
        "contrast is finite and non-negative",
        "metrics::contrast"
    );
    Ok(value)
}

/// Coarse contrast band for a whole image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContrastLevel {
    Flat,
    Low,
    Moderate,
    High,
}

impl ContrastLevel {
    /// Map a normalized contrast value to its band.
    pub fn from_contrast(value: f64) -> Self {
        match value {
            v if v < 0.05 => ContrastLevel::Flat,
            v if v < 0.25 => ContrastLevel::Low,
            v if v < 0.6 => ContrastLevel::Moderate,
            _ => ContrastLevel::High,
        }
    }

    pub fn quality_score(&self) -> f64 {
        match self {
            ContrastLevel::Moderate => 1.0,
            ContrastLevel::Low | ContrastLevel::High => 0.8,
            ContrastLevel::Flat => 0.3,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ContrastLevel::Flat => "flat",
            ContrastLevel::Low => "low contrast",
            ContrastLevel::Moderate => "moderate contrast",
            ContrastLevel::High => "high contrast",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::synthetic_data::{transparent, uniform};

    #[test]
    fn test_uniform_image_has_zero_contrast() {
        let buffer = uniform(8, 8, 90, 140, 30, 255);
        assert_eq!(contrast(&buffer).unwrap(), 0.0);
    }

    #[test]
    fn test_black_white_pair() {
        // Pixels at brightness 255 and 0: mean 127.5, per-pixel deviation
        // 127.5, stddev 127.5, scaled to 1.275.
        let data = vec![255, 255, 255, 255, 0, 0, 0, 255];
        let buffer = PixelBuffer::new(2, 1, data).unwrap();
        let value = contrast(&buffer).unwrap();
        assert!((value - 1.275).abs() < 1e-12);
    }

    #[test]
    fn test_transparent_pixels_are_included() {
        // A packed-zero pixel contributes brightness 0 here, so pairing it
        // with a white pixel yields the same contrast as opaque black would.
        let with_transparent = PixelBuffer::new(
            2,
            1,
            vec![255, 255, 255, 255, 0, 0, 0, 0],
        )
        .unwrap();
        let with_black = PixelBuffer::new(
            2,
            1,
            vec![255, 255, 255, 255, 0, 0, 0, 255],
        )
        .unwrap();
        assert_eq!(
            contrast(&with_transparent).unwrap(),
            contrast(&with_black).unwrap()
        );
    }

    #[test]
    fn test_all_transparent_still_computes() {
        // No degenerate case: the denominator is the full pixel count.
        let buffer = transparent(4, 4);
        assert_eq!(contrast(&buffer).unwrap(), 0.0);
    }

    #[test]
    fn test_zero_area_is_invalid() {
        let buffer = PixelBuffer::new(0, 0, Vec::new()).unwrap();
        assert!(matches!(
            contrast(&buffer),
            Err(MetricsError::InvalidImage(_))
        ));
    }

    #[test]
    fn test_level_boundaries() {
        assert_eq!(ContrastLevel::from_contrast(0.0), ContrastLevel::Flat);
        assert_eq!(ContrastLevel::from_contrast(0.1), ContrastLevel::Low);
        assert_eq!(ContrastLevel::from_contrast(0.4), ContrastLevel::Moderate);
        assert_eq!(ContrastLevel::from_contrast(1.0), ContrastLevel::High);
    }
}
