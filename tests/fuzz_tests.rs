//! Fuzz-style tests using proptest
//!
//! These provide fuzz-like testing without requiring nightly Rust or
//! cargo-fuzz. Run with: cargo test --test fuzz_tests

use pixelgauge::errors::MetricsError;
use pixelgauge::metrics::{brightness, contrast, saturation, ImageAnalyzer};
use pixelgauge::types::{PixelBuffer, CHANNELS};
use proptest::prelude::*;

/// Valid buffers with arbitrary pixel content, dimensions up to `max_dim`.
fn buffer_strategy(max_dim: u32) -> impl Strategy<Value = PixelBuffer> {
    (0..=max_dim, 0..=max_dim).prop_flat_map(|(width, height)| {
        let len = width as usize * height as usize * CHANNELS;
        prop::collection::vec(any::<u8>(), len)
            .prop_map(move |data| PixelBuffer::new(width, height, data).unwrap())
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Buffer construction never panics, regardless of length mismatch
    #[test]
    fn fuzz_buffer_construction(
        width in 0u32..128,
        height in 0u32..128,
        len in 0usize..70000,
    ) {
        // Should not panic - may return InvalidImage
        let _ = PixelBuffer::new(width, height, vec![0u8; len]);
    }

    /// The scans never panic on any valid buffer
    #[test]
    fn fuzz_scans_never_panic(buffer in buffer_strategy(24)) {
        let _ = brightness(&buffer);
        let _ = saturation(&buffer);
        let _ = contrast(&buffer);
    }

    /// Successful scans always return bounded, finite values
    #[test]
    fn fuzz_ok_results_are_bounded(buffer in buffer_strategy(24)) {
        if let Ok(value) = brightness(&buffer) {
            prop_assert!((0.0..=1.0).contains(&value));
        }
        if let Ok(value) = saturation(&buffer) {
            prop_assert!((0.0..=1.0).contains(&value));
        }
        if let Ok(value) = contrast(&buffer) {
            // Maximum possible stddev of 0-255 brightness is 127.5,
            // scaled down to 1.275; allow a little float slack.
            prop_assert!(value.is_finite());
            prop_assert!(value >= 0.0 && value < 1.276);
        }
    }

    /// Scan failures are always the defined error taxonomy
    #[test]
    fn fuzz_failures_are_classified(buffer in buffer_strategy(16)) {
        for result in [brightness(&buffer), saturation(&buffer)] {
            if let Err(e) = result {
                prop_assert!(matches!(
                    e,
                    MetricsError::InvalidImage(_) | MetricsError::DegenerateImage(_)
                ));
            }
        }
        if let Err(e) = contrast(&buffer) {
            prop_assert!(matches!(e, MetricsError::InvalidImage(_)));
        }
    }

    /// The analyzer never emits NaN or out-of-range scores
    #[test]
    fn fuzz_analyzer_report_sanity(buffer in buffer_strategy(16)) {
        match ImageAnalyzer::default().analyze(&buffer) {
            Ok(report) => {
                if let Some(v) = report.metrics.brightness {
                    prop_assert!(v.is_finite());
                }
                if let Some(v) = report.metrics.saturation {
                    prop_assert!(v.is_finite());
                }
                if let Some(v) = report.metrics.contrast {
                    prop_assert!(v.is_finite());
                }
                prop_assert!((0.0..=1.0).contains(&report.quality_score));
                prop_assert_eq!(report.width, buffer.width());
                prop_assert_eq!(report.height, buffer.height());
            }
            Err(e) => {
                prop_assert!(matches!(e, MetricsError::InvalidImage(_)));
                prop_assert!(buffer.is_empty());
            }
        }
    }

    /// Scans are deterministic: same buffer, same bits
    #[test]
    fn fuzz_scan_determinism(buffer in buffer_strategy(12)) {
        if let (Ok(a), Ok(b)) = (brightness(&buffer), brightness(&buffer)) {
            prop_assert_eq!(a.to_bits(), b.to_bits());
        }
        if let (Ok(a), Ok(b)) = (contrast(&buffer), contrast(&buffer)) {
            prop_assert_eq!(a.to_bits(), b.to_bits());
        }
    }
}
