//! Badge font discovery and glyph rendering.
//!
//! The font file is looked up once: the path in `DUAL_IMAGE_VIEWER_FONT` wins,
//! otherwise a list of common system locations is probed.

use super::badge::BadgeFont;
use crate::config::{FONT_CANDIDATES, FONT_DPI, FONT_PATH_ENV};
use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};
use log::{info, warn};
use once_cell::sync::Lazy;
use std::path::Path;

static SYSTEM_FONT: Lazy<Option<FontArc>> = Lazy::new(discover_font);

fn discover_font() -> Option<FontArc> {
    if let Some(path) = std::env::var_os(FONT_PATH_ENV) {
        match load_font_file(Path::new(&path)) {
            Some(font) => return Some(font),
            None => warn!("Ignoring {}: {:?} is not a usable font", FONT_PATH_ENV, path),
        }
    }

    let font = FONT_CANDIDATES
        .iter()
        .find_map(|candidate| load_font_file(Path::new(candidate)));
    if font.is_none() {
        warn!("No badge font found; labels will not be drawn");
    }
    font
}

/// Reads and parses a TrueType/OpenType file.
pub fn load_font_file(path: &Path) -> Option<FontArc> {
    let bytes = std::fs::read(path).ok()?;
    match FontArc::try_from_vec(bytes) {
        Ok(font) => {
            info!("Using badge font {}", path.display());
            Some(font)
        }
        Err(e) => {
            warn!("Failed to parse font {}: {}", path.display(), e);
            None
        }
    }
}

/// A font at a fixed point size.
#[derive(Clone)]
pub struct LabelFont {
    font: FontArc,
    scale: PxScale,
}

impl LabelFont {
    pub fn new(font: FontArc, point_size: u32) -> Self {
        Self {
            font,
            scale: PxScale::from(point_size as f32 * FONT_DPI / 72.0),
        }
    }

    /// The discovered system font at `point_size`, if any.
    pub fn system(point_size: u32) -> Option<Self> {
        SYSTEM_FONT
            .as_ref()
            .map(|font| Self::new(font.clone(), point_size))
    }
}

fn advance_width(font: &FontArc, scale: PxScale, text: &str) -> f32 {
    let scaled = font.as_scaled(scale);
    let mut width = 0.0;
    let mut previous = None;
    for c in text.chars() {
        let id = scaled.glyph_id(c);
        if let Some(prev) = previous {
            width += scaled.kern(prev, id);
        }
        width += scaled.h_advance(id);
        previous = Some(id);
    }
    width
}

impl BadgeFont for LabelFont {
    /// Summed glyph advances with kerning, rounded up to whole pixels.
    fn text_width(&self, text: &str) -> u32 {
        advance_width(&self.font, self.scale, text).ceil() as u32
    }

    fn line_height(&self) -> u32 {
        let scaled = self.font.as_scaled(self.scale);
        (scaled.ascent() - scaled.descent()).ceil() as u32
    }

    fn ascent(&self) -> u32 {
        self.font.as_scaled(self.scale).ascent().ceil() as u32
    }

    fn draw_text(&self, canvas: &mut RgbaImage, x: i32, baseline: i32, color: Rgba<u8>, text: &str) {
        // imageproc places the baseline one ascent below the given y
        let top = baseline - self.ascent() as i32;
        imageproc::drawing::draw_text_mut(canvas, color, x, top, self.scale, &self.font, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_font_file_is_rejected() {
        assert!(load_font_file(Path::new("/no/such/font.ttf")).is_none());
    }

    #[test]
    fn garbage_font_file_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("broken.ttf");
        std::fs::write(&path, b"definitely not a font").expect("failed to write test file");

        assert!(load_font_file(&path).is_none());
    }

    #[test]
    fn system_font_metrics_are_consistent() {
        // Only meaningful where a system font is installed.
        let Some(font) = LabelFont::system(16) else {
            return;
        };
        assert!((font.scale.y - 16.0 * 96.0 / 72.0).abs() < f32::EPSILON);
        assert!(font.line_height() >= font.ascent());
        assert!(font.text_width("wide text") > font.text_width("w"));
        assert_eq!(font.text_width(""), 0);
    }

    #[test]
    fn text_width_rounds_advance_up() {
        let Some(font) = LabelFont::system(16) else {
            return;
        };
        let advance = advance_width(&font.font, font.scale, "ab");
        assert_eq!(font.text_width("ab"), advance.ceil() as u32);
        assert!(font.text_width("ab") as f32 >= advance);
    }
}
