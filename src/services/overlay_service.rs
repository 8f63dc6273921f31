//! Decides which badges go where, for both the live previews and the export.

use crate::error::{AppError, Result};
use crate::file_utils;
use crate::image_loader;
use crate::render::badge::{self, BadgeFont, Painter, Placement};
use crate::render::{compose, Composite, Orientation};
use crate::state::OverlayConfig;
use image::RgbaImage;
use imageproc::rect::Rect;
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Draws the filename badge (bottom-left) and the label stack (top-right)
/// of one image region.
pub fn apply_overlay(
    painter: &mut Painter<'_>,
    region: Rect,
    font: &dyn BadgeFont,
    filename: &str,
    overlay: &OverlayConfig,
) {
    if overlay.show_filename {
        badge::draw_badge(painter, region, font, filename, Placement::BottomLeft);
    }
    badge::draw_badge_stack(painter, region, font, &overlay.labels);
}

/// Returns an annotated copy of a scaled preview; `base` stays untouched.
///
/// Without a font the copy is returned without badges.
pub fn render_preview(
    base: &RgbaImage,
    filename: &str,
    overlay: &OverlayConfig,
    font: Option<&dyn BadgeFont>,
) -> RgbaImage {
    let mut annotated = base.clone();
    if overlay.is_empty() || base.width() == 0 || base.height() == 0 {
        return annotated;
    }
    let Some(font) = font else {
        warn!("Skipping preview badges for {}: no font", filename);
        return annotated;
    };

    let region = Rect::at(0, 0).of_size(base.width(), base.height());
    let mut painter = Painter::begin(&mut annotated);
    apply_overlay(&mut painter, region, font, filename, overlay);
    drop(painter);

    annotated
}

/// Snapshot of the panels and overlay settings taken when export starts.
#[derive(Debug, Clone)]
pub struct ExportRequest {
    pub paths: [PathBuf; 2],
    pub orientation: Orientation,
    pub embed_filenames: bool,
    pub labels: [Vec<String>; 2],
    pub font_size: u32,
}

impl ExportRequest {
    fn overlay(&self, index: usize) -> OverlayConfig {
        OverlayConfig {
            show_filename: self.embed_filenames,
            labels: self.labels[index].clone(),
        }
    }

    /// Whether any badge will be drawn.
    pub fn needs_font(&self) -> bool {
        self.embed_filenames || self.labels.iter().any(|labels| !labels.is_empty())
    }
}

fn decode_pair(paths: &[PathBuf; 2]) -> Result<(image::DynamicImage, image::DynamicImage)> {
    let (first, second) = rayon::join(
        || image_loader::decode(&paths[0]),
        || image_loader::decode(&paths[1]),
    );
    Ok((first?, second?))
}

/// Decodes both selected images, composes them and burns in the badges.
pub fn render_export(request: &ExportRequest, font: Option<&dyn BadgeFont>) -> Result<RgbaImage> {
    let font = match (request.needs_font(), font) {
        (false, _) => None,
        (true, Some(font)) => Some(font),
        (true, None) => return Err(AppError::FontUnavailable),
    };

    let start = std::time::Instant::now();
    let (first, second) = decode_pair(&request.paths)?;
    let Composite {
        mut canvas,
        regions,
    } = compose(&first, &second, request.orientation);

    if let Some(font) = font {
        let mut painter = Painter::begin(&mut canvas);
        for (index, (path, region)) in request.paths.iter().zip(regions).enumerate() {
            apply_overlay(
                &mut painter,
                region,
                font,
                &filename_of(path),
                &request.overlay(index),
            );
        }
    }

    debug!(
        "Rendered {}x{} composite in {:?}",
        canvas.width(),
        canvas.height(),
        start.elapsed()
    );
    Ok(canvas)
}

fn filename_of(path: &Path) -> String {
    file_utils::file_name(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::badge::BlockFont;
    use image::Rgba;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);

    fn fixture(dir: &TempDir, name: &str, width: u32, height: u32, color: Rgba<u8>) -> PathBuf {
        let path = dir.path().join(name);
        RgbaImage::from_pixel(width, height, color)
            .save(&path)
            .expect("failed to write fixture");
        path
    }

    fn request(paths: [PathBuf; 2]) -> ExportRequest {
        ExportRequest {
            paths,
            orientation: Orientation::Horizontal,
            embed_filenames: false,
            labels: [Vec::new(), Vec::new()],
            font_size: 16,
        }
    }

    fn is_shaded(pixel: &Rgba<u8>) -> bool {
        pixel[0] < 120 && pixel[0] == pixel[1] && pixel[1] == pixel[2]
    }

    #[test]
    fn preview_leaves_base_untouched() {
        let base = RgbaImage::from_pixel(200, 100, WHITE);
        let overlay = OverlayConfig {
            show_filename: true,
            labels: vec!["label".to_string()],
        };
        let font = BlockFont::new();

        let annotated = render_preview(&base, "a.png", &overlay, Some(&font as &dyn BadgeFont));

        assert!(base.pixels().all(|p| *p == WHITE));
        assert!(is_shaded(annotated.get_pixel(6, 100 - 6 - 1)));
        assert!(is_shaded(annotated.get_pixel(200 - 6 - 1, 6)));
    }

    #[test]
    fn preview_without_font_is_plain_copy() {
        let base = RgbaImage::from_pixel(20, 20, GREEN);
        let overlay = OverlayConfig {
            show_filename: true,
            labels: Vec::new(),
        };

        let annotated = render_preview(&base, "a.png", &overlay, None);
        assert_eq!(annotated, base);
    }

    #[test]
    fn export_places_badges_on_each_half() {
        let dir = tempdir().expect("failed to create temp dir");
        let cat = fixture(&dir, "cat.png", 100, 200, WHITE);
        let dog = fixture(&dir, "dog.png", 300, 200, WHITE);
        let mut req = request([cat, dog]);
        req.embed_filenames = true;
        req.labels[1] = vec!["dog label".to_string()];
        let font = BlockFont::new();

        let canvas = render_export(&req, Some(&font as &dyn BadgeFont)).expect("export should succeed");

        assert_eq!(canvas.dimensions(), (400, 200));
        // filename badges: bottom-left of each half
        assert!(is_shaded(canvas.get_pixel(6, 200 - 6 - 1)));
        assert!(is_shaded(canvas.get_pixel(100 + 6, 200 - 6 - 1)));
        assert_eq!(*canvas.get_pixel(100 + 5, 200 - 6 - 1), WHITE);
        // label only on the right half
        assert!(is_shaded(canvas.get_pixel(400 - 6 - 1, 6)));
        assert_eq!(*canvas.get_pixel(100 - 6 - 1, 6), WHITE);
    }

    #[test]
    fn export_without_badges_needs_no_font() {
        let dir = tempdir().expect("failed to create temp dir");
        let a = fixture(&dir, "a.png", 10, 10, GREEN);
        let b = fixture(&dir, "b.png", 10, 20, GREEN);
        let req = request([a, b]);

        let canvas = render_export(&req, None).expect("export should succeed");
        assert_eq!(canvas.dimensions(), (15, 10));
    }

    #[test]
    fn export_with_badges_requires_font() {
        let dir = tempdir().expect("failed to create temp dir");
        let a = fixture(&dir, "a.png", 10, 10, GREEN);
        let mut req = request([a.clone(), a]);
        req.labels[0] = vec!["x".to_string()];

        assert!(matches!(
            render_export(&req, None),
            Err(AppError::FontUnavailable)
        ));
    }

    #[test]
    fn export_reports_undecodable_source() {
        let dir = tempdir().expect("failed to create temp dir");
        let good = fixture(&dir, "good.png", 10, 10, GREEN);
        let bad = dir.path().join("bad.png");
        fs::write(&bad, b"garbage").expect("failed to write test file");

        let result = render_export(&request([good, bad.clone()]), None);
        match result {
            Err(AppError::DecodeFailure { path, .. }) => assert_eq!(path, bad),
            other => panic!("expected decode failure, got {:?}", other.map(|c| c.dimensions())),
        }
    }
}
