//! # Logo Loading
//!
//! Loads the document-header logo from a file path, data URI, or raw base64
//! string and validates it for placement. The raw bytes are kept as-is for
//! the sink (a PDF canvas embeds JPEG directly and decodes PNG itself); the
//! `image` crate is used to verify the data and read pixel dimensions.
//!
//! Logo failure is absorbed by design: a document with a missing or broken
//! logo renders with a plain header rather than failing generation.

use crate::error::RencanaError;

/// A validated logo image ready to hand to the sink.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    /// The original encoded bytes (PNG or JPEG).
    pub data: Vec<u8>,
    pub format: ImageFormat,
    pub width_px: u32,
    pub height_px: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Png,
    Jpeg,
}

/// Load and validate an image, reporting failures to the caller.
///
/// Supported `src` formats:
/// - `data:image/...;base64,...` data URI
/// - a file path starting with `/`, `./` or `../`
/// - raw base64-encoded image data
pub fn load_image(src: &str) -> Result<LoadedImage, RencanaError> {
    let raw = read_source_bytes(src)?;
    decode_image_bytes(raw)
}

/// Load a logo, absorbing any failure into "no logo".
pub fn load_logo(src: &str) -> Option<LoadedImage> {
    match load_image(src) {
        Ok(img) => Some(img),
        Err(err) => {
            tracing::warn!(%err, "logo unavailable, rendering header without it");
            None
        }
    }
}

/// Validate already-fetched logo bytes, absorbing failure. For callers that
/// retrieve the asset themselves (the fetch is outside this crate).
pub fn load_logo_bytes(bytes: &[u8]) -> Option<LoadedImage> {
    match decode_image_bytes(bytes.to_vec()) {
        Ok(img) => Some(img),
        Err(err) => {
            tracing::warn!(%err, "logo bytes invalid, rendering header without it");
            None
        }
    }
}

fn read_source_bytes(src: &str) -> Result<Vec<u8>, RencanaError> {
    if src.starts_with("data:image/") {
        let comma = src
            .find(',')
            .ok_or_else(|| RencanaError::Image("invalid data URI: missing comma".to_string()))?;
        return base64_decode(&src[comma + 1..]);
    }

    // Only explicit path prefixes are treated as files, so base64 payloads
    // (which contain '/') are not mistaken for paths.
    if src.starts_with('/') || src.starts_with("./") || src.starts_with("../") {
        return std::fs::read(src)
            .map_err(|e| RencanaError::Image(format!("failed to read '{src}': {e}")));
    }

    base64_decode(src)
}

fn base64_decode(input: &str) -> Result<Vec<u8>, RencanaError> {
    use base64::Engine;
    base64::engine::general_purpose::STANDARD
        .decode(input)
        .map_err(|e| RencanaError::Image(format!("base64 decode error: {e}")))
}

fn decode_image_bytes(data: Vec<u8>) -> Result<LoadedImage, RencanaError> {
    let format = if is_jpeg(&data) {
        ImageFormat::Jpeg
    } else if is_png(&data) {
        ImageFormat::Png
    } else {
        return Err(RencanaError::Image(
            "unsupported image format (expected JPEG or PNG)".to_string(),
        ));
    };

    use image::GenericImageView;
    let decoded = image::load_from_memory(&data)
        .map_err(|e| RencanaError::Image(format!("failed to decode image: {e}")))?;
    let (width_px, height_px) = decoded.dimensions();

    Ok(LoadedImage {
        width_px,
        height_px,
        format,
        data,
    })
}

fn is_jpeg(data: &[u8]) -> bool {
    data.len() >= 2 && data[0] == 0xFF && data[1] == 0xD8
}

fn is_png(data: &[u8]) -> bool {
    data.len() >= 4 && data[0] == 0x89 && data[1] == 0x50 && data[2] == 0x4E && data[3] == 0x47
}
