//! Input boundary: decoding image files into pixel buffers
//!
//! Decoding is delegated to the `image` crate; the engine contract starts
//! once width, height, and per-pixel RGBA bytes are available. Whatever the
//! source format, decoded images are converted to RGBA8 before analysis.

use crate::errors::MetricsError;
use crate::types::PixelBuffer;
use std::path::Path;

/// File extensions the CLI advertises. The decoder itself accepts anything
/// the `image` crate understands.
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "bmp"];

/// Decode an image file into an RGBA pixel buffer.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<PixelBuffer, MetricsError> {
    let path = path.as_ref();
    let decoded = image::open(path).map_err(|e| {
        MetricsError::DecodeError(format!("failed to decode {}: {}", path.display(), e))
    })?;
    let buffer = buffer_from_decoded(decoded)?;
    log::info!(
        "decoded {} as {}x{} RGBA",
        path.display(),
        buffer.width(),
        buffer.height()
    );
    Ok(buffer)
}

/// Decode an in-memory encoded image (PNG bytes, JPEG bytes, ...) into an
/// RGBA pixel buffer.
pub fn load_from_bytes(bytes: &[u8]) -> Result<PixelBuffer, MetricsError> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|e| MetricsError::DecodeError(format!("failed to decode image bytes: {}", e)))?;
    buffer_from_decoded(decoded)
}

fn buffer_from_decoded(decoded: image::DynamicImage) -> Result<PixelBuffer, MetricsError> {
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    PixelBuffer::new(width, height, rgba.into_raw())
}
