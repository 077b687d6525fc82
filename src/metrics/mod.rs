/// Perceptual image metrics module
///
/// Provides the three full-image scans (brightness, saturation, contrast)
/// and the analyzer that bundles them into a single report per request.
pub mod analyzer;
pub mod brightness;
pub mod contrast;
pub mod saturation;

pub use analyzer::{AnalysisReport, AnalysisRequest, AnalyzerConfig, ImageAnalyzer};
pub use brightness::{brightness, BrightnessLevel};
pub use contrast::{contrast, ContrastLevel};
pub use saturation::{saturation, SaturationLevel};
