//! Preview rendering and panel display.
//!
//! Previews are recomputed from the current state after every change: the
//! cached unannotated preview is copied and the badges for the current
//! overlay settings are drawn on the copy.

use crate::file_utils;
use crate::image_cache::{CachedPreview, ImageCache};
use crate::image_loader;
use crate::render::{BadgeFont, LabelFont};
use crate::services::render_preview;
use crate::state::{AppState, PanelSide};
use crate::ui::state_helpers::{set_error_with_prefix, set_panel_view};
use chrono::{DateTime, Local};
use slint::{ModelRc, SharedString, StandardListViewItem, VecModel};
use std::path::Path;
use std::time::SystemTime;

/// Looks the preview up in the cache, decoding and caching it on a miss.
fn cached_preview(cache: &mut ImageCache, path: &Path) -> crate::error::Result<CachedPreview> {
    if let Some(preview) = cache.get(path) {
        return Ok(preview);
    }
    let preview = image_loader::load_preview_base(path)?;
    cache.put(path.to_path_buf(), preview.clone());
    Ok(preview)
}

fn format_timestamp(time: SystemTime) -> String {
    if time == SystemTime::UNIX_EPOCH {
        return "-".to_string();
    }
    DateTime::<Local>::from(time)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

fn file_info(path: &Path, preview: &CachedPreview) -> String {
    format!(
        "{} x {} px, modified {}",
        preview.source_width,
        preview.source_height,
        format_timestamp(file_utils::modified_time(path))
    )
}

fn file_list(names: Vec<String>) -> ModelRc<StandardListViewItem> {
    let items: Vec<StandardListViewItem> = names
        .iter()
        .map(|name| StandardListViewItem::from(name.as_str()))
        .collect();
    ModelRc::new(VecModel::from(items))
}

/// Rebuilds the preview, caption and file list of one panel.
pub fn refresh_panel(ui: &crate::AppWindow, state: &mut AppState, side: PanelSide) {
    let panel = state.panel(side);
    let files = file_list(panel.file_names());
    let row = panel.current_index().map(|i| i as i32).unwrap_or(-1);
    let current = panel.current_path().map(Path::to_path_buf);

    let Some(path) = current else {
        let view = crate::PanelView {
            image: slint::Image::default(),
            has_image: false,
            filename: SharedString::new(),
            file_info: SharedString::new(),
            files,
        };
        set_panel_view(ui, side, view, row);
        return;
    };

    let filename = file_utils::file_name(&path);
    let (image, info) = match cached_preview(&mut state.preview_cache, &path) {
        Ok(preview) => {
            let overlay = state.overlay.overlay_for(side);
            let font = LabelFont::system(state.overlay.font_size());
            let annotated = render_preview(
                &preview.image,
                &filename,
                &overlay,
                font.as_ref().map(|f| f as &dyn BadgeFont),
            );
            (
                Some(image_loader::create_slint_image(&annotated)),
                file_info(&path, &preview),
            )
        }
        Err(e) => {
            set_error_with_prefix(ui, "Failed to load image", e.to_string());
            (None, String::new())
        }
    };

    let view = crate::PanelView {
        has_image: image.is_some(),
        image: image.unwrap_or_default(),
        filename: filename.into(),
        file_info: info.into(),
        files,
    };
    set_panel_view(ui, side, view, row);
}

/// Re-renders both previews, e.g. after an overlay setting changed.
pub fn refresh_previews(ui: &crate::AppWindow, state: &mut AppState) {
    for side in PanelSide::BOTH {
        refresh_panel(ui, state, side);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn unknown_timestamp_is_dashed() {
        assert_eq!(format_timestamp(SystemTime::UNIX_EPOCH), "-");
        assert_eq!(format_timestamp(SystemTime::now()).len(), "2024-01-01 00:00".len());
    }

    #[test]
    fn preview_is_decoded_once() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("a.png");
        RgbaImage::from_pixel(10, 10, Rgba([1, 2, 3, 255]))
            .save(&path)
            .expect("failed to write fixture");
        let mut cache = ImageCache::new(4);

        let first = cached_preview(&mut cache, &path).expect("failed to load preview");
        std::fs::remove_file(&path).expect("failed to remove fixture");
        let second = cached_preview(&mut cache, &path).expect("cached preview expected");

        assert!(std::rc::Rc::ptr_eq(&first.image, &second.image));
    }
}
