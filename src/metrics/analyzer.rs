//! Whole-image analysis
//!
//! Bundles the three metric scans into one report per explicit request.
//! Metrics are computed independently: a scan that fails leaves its field
//! absent in the report instead of carrying a placeholder value, so the
//! caller never displays a corrupted number.

use crate::errors::MetricsError;
use crate::metrics::brightness::{brightness, BrightnessLevel};
use crate::metrics::contrast::{contrast, ContrastLevel};
use crate::metrics::saturation::{saturation, SaturationLevel};
use crate::types::{FormattedMetrics, ImageMetrics, PixelBuffer};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Analyzer behavior knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Minimum combined quality score for a report to count as acceptable
    /// (0.0-1.0).
    pub min_quality_score: f64,
    /// Decimal places used for the formatted metric strings.
    pub precision: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            min_quality_score: 0.5,
            precision: 3,
        }
    }
}

/// One analysis request: an id plus the buffer to scan. The buffer is
/// created once per request from a decoded source image and discarded
/// afterwards; the analyzer holds no state between requests.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub id: Uuid,
    pub buffer: PixelBuffer,
}

impl AnalysisRequest {
    pub fn new(buffer: PixelBuffer) -> Self {
        Self {
            id: Uuid::new_v4(),
            buffer,
        }
    }
}

/// Response object for one analysis request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Identifier of the request this report answers.
    pub request_id: Uuid,
    pub width: u32,
    pub height: u32,
    /// Full-precision metric values; absent where the scan failed.
    pub metrics: ImageMetrics,
    /// Fixed-precision display strings for the same values.
    pub formatted: FormattedMetrics,
    pub brightness_level: Option<BrightnessLevel>,
    pub saturation_level: Option<SaturationLevel>,
    pub contrast_level: Option<ContrastLevel>,
    /// Mean quality score over the levels that were computed; 0.0 when
    /// nothing could be computed.
    pub quality_score: f64,
    pub is_acceptable: bool,
    pub analyzed_at: DateTime<Utc>,
}

/// Stateless analyzer over decoded RGBA buffers.
#[derive(Debug, Clone, Default)]
pub struct ImageAnalyzer {
    config: AnalyzerConfig,
}

impl ImageAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Analyze an explicit request, answering with its id.
    pub fn run(&self, request: &AnalysisRequest) -> Result<AnalysisReport, MetricsError> {
        self.analyze_with_id(request.id, &request.buffer)
    }

    /// Analyze a bare buffer under a fresh request id.
    pub fn analyze(&self, buffer: &PixelBuffer) -> Result<AnalysisReport, MetricsError> {
        self.analyze_with_id(Uuid::new_v4(), buffer)
    }

    fn analyze_with_id(
        &self,
        request_id: Uuid,
        buffer: &PixelBuffer,
    ) -> Result<AnalysisReport, MetricsError> {
        // A zero-area buffer fails the whole call; no partial report.
        if buffer.is_empty() {
            return Err(MetricsError::InvalidImage(format!(
                "cannot analyze a {}x{} image",
                buffer.width(),
                buffer.height()
            )));
        }

        let mut metrics = ImageMetrics::default();

        match brightness(buffer) {
            Ok(value) => metrics.brightness = Some(value),
            Err(e) => log::warn!("brightness scan failed: {}", e),
        }
        match saturation(buffer) {
            Ok(value) => metrics.saturation = Some(value),
            Err(e) => log::warn!("saturation scan failed: {}", e),
        }
        match contrast(buffer) {
            Ok(value) => metrics.contrast = Some(value),
            Err(e) => log::warn!("contrast scan failed: {}", e),
        }

        let brightness_level = metrics.brightness.map(BrightnessLevel::from_brightness);
        let saturation_level = metrics.saturation.map(SaturationLevel::from_saturation);
        let contrast_level = metrics.contrast.map(ContrastLevel::from_contrast);

        let scores: Vec<f64> = [
            brightness_level.map(|l| l.quality_score()),
            saturation_level.map(|l| l.quality_score()),
            contrast_level.map(|l| l.quality_score()),
        ]
        .into_iter()
        .flatten()
        .collect();
        let quality_score = if scores.is_empty() {
            0.0
        } else {
            scores.iter().sum::<f64>() / scores.len() as f64
        };

        log::debug!(
            "analyzed {}x{} buffer (request {}): brightness={:?} saturation={:?} contrast={:?}",
            buffer.width(),
            buffer.height(),
            request_id,
            metrics.brightness,
            metrics.saturation,
            metrics.contrast
        );

        Ok(AnalysisReport {
            request_id,
            width: buffer.width(),
            height: buffer.height(),
            formatted: metrics.formatted(self.config.precision),
            metrics,
            brightness_level,
            saturation_level,
            contrast_level,
            quality_score,
            is_acceptable: quality_score >= self.config.min_quality_score,
            analyzed_at: Utc::now(),
        })
    }
}
