//! PixelGauge: perceptual image metrics for decoded raster images
//!
//! This crate computes three scalar perceptual metrics over an in-memory
//! RGBA buffer: average brightness, average saturation, and contrast (the
//! standard deviation of per-pixel brightness), each normalized to a
//! bounded range.
//!
//! # Features
//! - Three independent, pure, full-image scans
//! - Per-metric failure isolation: a failed scan leaves its field absent
//! - Classification bands with quality scores per metric
//! - File/byte decoding boundary via the `image` crate
//! - TOML configuration and fixed-precision display formatting
//!
//! # Usage
//! ```rust,ignore
//! use pixelgauge::loader;
//! use pixelgauge::metrics::ImageAnalyzer;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let buffer = loader::load_from_path("photo.jpg")?;
//!     let report = ImageAnalyzer::default().analyze(&buffer)?;
//!     println!("brightness: {:?}", report.formatted.brightness);
//!     Ok(())
//! }
//! ```
pub mod config;
pub mod errors;
pub mod invariant_ppt;
pub mod loader;
pub mod metrics;
pub mod types;

// Testing utilities - synthetic buffers for offline testing
pub mod testing;

// Re-exports for convenience
pub use config::PixelGaugeConfig;
pub use errors::MetricsError;
pub use metrics::{
    AnalysisReport, AnalysisRequest, AnalyzerConfig, BrightnessLevel, ContrastLevel,
    ImageAnalyzer, SaturationLevel,
};
pub use types::{FormattedMetrics, ImageMetrics, Pixel, PixelBuffer};

/// Initialize logging for the metrics engine
pub fn init_logging() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "pixelgauge=info");
    }
    let _ = env_logger::try_init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Get crate information
pub fn get_info() -> CrateInfo {
    CrateInfo {
        name: NAME.to_string(),
        version: VERSION.to_string(),
        description: DESCRIPTION.to_string(),
    }
}

/// Crate information structure
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CrateInfo {
    pub name: String,
    pub version: String,
    pub description: String,
}
