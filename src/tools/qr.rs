//! QR code generation
//!
//! Codes use error-correction level M with the smallest version that fits.
//! Rasterization draws onto an exact `size`×`size` white canvas; module edges
//! may be fractional, so each pixel samples the module it falls into.

use std::path::Path;

use image::{GrayImage, ImageFormat, Luma};
use qrcode::render::unicode;
use qrcode::{Color, EcLevel, QrCode, Version};
use serde::Serialize;

use crate::error::AppError;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub(crate) struct QrSummary {
    pub(crate) text: String,
    pub(crate) version: i16,
    pub(crate) modules: usize,
    pub(crate) size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) path: Option<String>,
}

pub(crate) fn encode(text: &str) -> Result<QrCode, AppError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::EmptyInput {
            what: "text or URL",
        });
    }
    QrCode::with_error_correction_level(text.as_bytes(), EcLevel::M)
        .map_err(|e| AppError::Qr(e.to_string()))
}

pub(crate) fn summarize(code: &QrCode, text: &str, size: u32, path: Option<&Path>) -> QrSummary {
    let version = match code.version() {
        Version::Normal(v) | Version::Micro(v) => v,
    };
    QrSummary {
        text: text.trim().to_string(),
        version,
        modules: code.width(),
        size: canvas_size(code, size),
        path: path.map(|p| p.display().to_string()),
    }
}

/// Canvas edge in pixels; never smaller than one pixel per module
fn canvas_size(code: &QrCode, size: u32) -> u32 {
    size.max(code.width() as u32)
}

pub(crate) fn rasterize(code: &QrCode, size: u32) -> GrayImage {
    let size = canvas_size(code, size);
    let count = code.width();
    let mut img = GrayImage::from_pixel(size, size, Luma([255u8]));
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let col = x as usize * count / size as usize;
        let row = y as usize * count / size as usize;
        if code[(col, row)] == Color::Dark {
            *pixel = Luma([0u8]);
        }
    }
    img
}

pub(crate) fn save_png(code: &QrCode, size: u32, path: &Path) -> Result<(), AppError> {
    rasterize(code, size)
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| AppError::Image {
            path: path.display().to_string(),
            source,
        })
}

/// Half-block rendering for terminals; `invert` swaps colors for dark backgrounds
pub(crate) fn render_terminal(code: &QrCode, invert: bool) -> String {
    let mut renderer = code.render::<unicode::Dense1x2>();
    renderer.quiet_zone(true);
    if invert {
        renderer
            .dark_color(unicode::Dense1x2::Light)
            .light_color(unicode::Dense1x2::Dark);
    }
    renderer.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_rejected() {
        let err = encode("   ").err().unwrap();
        assert_eq!(err.to_string(), "Please enter text or URL");
    }

    #[test]
    fn short_url_fits_small_version() {
        let code = encode("https://example.com").unwrap();
        let summary = summarize(&code, " https://example.com ", 300, None);
        assert_eq!(summary.text, "https://example.com");
        assert_eq!(summary.modules, 17 + 4 * summary.version as usize);
        assert!(summary.version <= 3);
        assert_eq!(summary.size, 300);
    }

    #[test]
    fn rasterize_has_exact_size_and_dark_finder_corner() {
        let code = encode("hello").unwrap();
        let img = rasterize(&code, 300);
        assert_eq!(img.dimensions(), (300, 300));
        // Finder patterns put a dark module in the top-left corner
        assert_eq!(img.get_pixel(0, 0), &Luma([0u8]));
        // Separator row after the 7-module finder pattern is light
        let module = 300 / code.width() as u32;
        assert_eq!(img.get_pixel(7 * module + module / 2 + 1, module / 2), &Luma([255u8]));
    }

    #[test]
    fn tiny_size_is_raised_to_module_count() {
        let code = encode("hello").unwrap();
        let img = rasterize(&code, 5);
        assert_eq!(img.width() as usize, code.width());
    }

    #[test]
    fn terminal_rendering_is_multiline() {
        let code = encode("hello").unwrap();
        let text = render_terminal(&code, false);
        assert!(text.lines().count() > 10);
        assert_ne!(text, render_terminal(&code, true));
    }
}
