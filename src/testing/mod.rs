//! Testing utilities for PixelGauge
//!
//! Provides synthetic RGBA buffers with known metric values, enabling
//! reliable offline testing without real photographs.

pub mod synthetic_data;

pub use synthetic_data::{checkerboard, horizontal_gradient, noisy, transparent, uniform};
