//! Synthetic image buffers for offline testing
//!
//! Pattern generators covering the cases the metric scans care about:
//! uniform colors, gradients, checkerboards, transparency, and
//! deterministic noise. Every generator is pure, so test inputs are
//! reproducible across runs.

use crate::types::{PixelBuffer, CHANNELS};

/// A buffer filled with one RGBA color.
pub fn uniform(width: u32, height: u32, r: u8, g: u8, b: u8, a: u8) -> PixelBuffer {
    let mut data = vec![0u8; width as usize * height as usize * CHANNELS];
    for pixel in data.chunks_exact_mut(CHANNELS) {
        pixel[0] = r;
        pixel[1] = g;
        pixel[2] = b;
        pixel[3] = a;
    }
    PixelBuffer::new(width, height, data).expect("uniform pattern has matching dimensions")
}

/// A buffer whose every pixel has the exact packed value zero. The metric
/// scans classify all of it as fully transparent.
pub fn transparent(width: u32, height: u32) -> PixelBuffer {
    uniform(width, height, 0, 0, 0, 0)
}

/// Opaque grayscale ramp from 0 on the left edge towards 255 on the right.
pub fn horizontal_gradient(width: u32, height: u32) -> PixelBuffer {
    let mut data = vec![0u8; width as usize * height as usize * CHANNELS];
    for y in 0..height {
        for x in 0..width {
            let intensity = if width > 1 {
                ((x as u64 * 255) / (width as u64 - 1)) as u8
            } else {
                0
            };
            let idx = (y as usize * width as usize + x as usize) * CHANNELS;
            data[idx] = intensity;
            data[idx + 1] = intensity;
            data[idx + 2] = intensity;
            data[idx + 3] = 255;
        }
    }
    PixelBuffer::new(width, height, data).expect("gradient pattern has matching dimensions")
}

/// Opaque black/white checkerboard with square cells of `cell` pixels.
pub fn checkerboard(width: u32, height: u32, cell: u32) -> PixelBuffer {
    let cell = cell.max(1);
    let mut data = vec![0u8; width as usize * height as usize * CHANNELS];
    for y in 0..height {
        for x in 0..width {
            let is_white = ((x / cell) + (y / cell)) % 2 == 0;
            let color = if is_white { 255 } else { 0 };
            let idx = (y as usize * width as usize + x as usize) * CHANNELS;
            data[idx] = color;
            data[idx + 1] = color;
            data[idx + 2] = color;
            data[idx + 3] = 255;
        }
    }
    PixelBuffer::new(width, height, data).expect("checkerboard pattern has matching dimensions")
}

/// Opaque mid-gray buffer with deterministic position-based noise.
pub fn noisy(width: u32, height: u32) -> PixelBuffer {
    let mut data = vec![0u8; width as usize * height as usize * CHANNELS];
    for (i, pixel) in data.chunks_exact_mut(CHANNELS).enumerate() {
        let noise = (i % 50) as u8;
        pixel[0] = 100 + noise;
        pixel[1] = 110 + noise;
        pixel[2] = 90 + noise;
        pixel[3] = 255;
    }
    PixelBuffer::new(width, height, data).expect("noisy pattern has matching dimensions")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_correct_size() {
        let buffer = uniform(320, 240, 1, 2, 3, 4);
        assert_eq!(buffer.width(), 320);
        assert_eq!(buffer.height(), 240);
        assert_eq!(buffer.as_bytes().len(), 320 * 240 * CHANNELS);
        assert_eq!(buffer.pixel(319, 239).g, 2);
    }

    #[test]
    fn test_transparent_is_packed_zero() {
        let buffer = transparent(5, 5);
        assert!(buffer.pixels().all(|p| p.is_transparent()));
    }

    #[test]
    fn test_gradient_spans_full_range() {
        let buffer = horizontal_gradient(256, 2);
        assert_eq!(buffer.pixel(0, 0).r, 0);
        assert_eq!(buffer.pixel(255, 1).r, 255);
    }

    #[test]
    fn test_checkerboard_alternates() {
        let buffer = checkerboard(4, 4, 2);
        assert_eq!(buffer.pixel(0, 0).r, 255);
        assert_eq!(buffer.pixel(2, 0).r, 0);
        assert_eq!(buffer.pixel(2, 2).r, 255);
    }

    #[test]
    fn test_noisy_is_deterministic() {
        let a = noisy(16, 16);
        let b = noisy(16, 16);
        assert_eq!(a, b);
    }
}
