//! State management for the image viewer application.

use crate::config::PREVIEW_CACHE_CAPACITY;
use crate::error::{AppError, Result};
use crate::image_cache::ImageCache;
use crate::services::ExportRequest;

pub mod navigation;
pub mod overlay;

pub use navigation::ImageSequence;
pub use overlay::{LabelSlot, OverlayConfig, OverlaySettings};

/// One of the two browsing panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelSide {
    Left,
    Right,
}

impl PanelSide {
    pub const BOTH: [PanelSide; 2] = [PanelSide::Left, PanelSide::Right];

    pub fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(PanelSide::Left),
            1 => Some(PanelSide::Right),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            PanelSide::Left => 0,
            PanelSide::Right => 1,
        }
    }
}

/// Application-wide state container, owned by the UI thread.
pub struct AppState {
    panels: [ImageSequence; 2],
    pub overlay: OverlaySettings,
    /// LRU cache for unannotated previews.
    pub preview_cache: ImageCache,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            panels: [ImageSequence::new(), ImageSequence::new()],
            overlay: OverlaySettings::new(),
            preview_cache: ImageCache::new(PREVIEW_CACHE_CAPACITY),
        }
    }

    pub fn panel(&self, side: PanelSide) -> &ImageSequence {
        &self.panels[side.index()]
    }

    pub fn panel_mut(&mut self, side: PanelSide) -> &mut ImageSequence {
        &mut self.panels[side.index()]
    }

    /// Snapshot of everything an export needs.
    ///
    /// Fails with [`AppError::MissingSelection`] unless both panels have a
    /// current image.
    pub fn export_request(&self) -> Result<ExportRequest> {
        let (Some(left), Some(right)) = (
            self.panel(PanelSide::Left).current_path(),
            self.panel(PanelSide::Right).current_path(),
        ) else {
            return Err(AppError::MissingSelection);
        };

        Ok(ExportRequest {
            paths: [left.to_path_buf(), right.to_path_buf()],
            orientation: self.overlay.orientation(),
            embed_filenames: self.overlay.embed_filenames(),
            labels: [
                self.overlay.active_labels(PanelSide::Left),
                self.overlay.active_labels(PanelSide::Right),
            ],
            font_size: self.overlay.font_size(),
        })
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn export_requires_both_selections() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join("cat.jpg"), b"x").expect("failed to write test file");

        let mut state = AppState::new();
        state
            .panel_mut(PanelSide::Left)
            .load_folder(temp_dir.path())
            .expect("failed to load folder");

        assert!(matches!(
            state.export_request(),
            Err(AppError::MissingSelection)
        ));
        assert_eq!(state.panel(PanelSide::Left).current_index(), Some(0));
        assert!(state.panel(PanelSide::Right).is_empty());
    }

    #[test]
    fn export_request_snapshots_configuration() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join("cat.jpg"), b"x").expect("failed to write test file");

        let mut state = AppState::new();
        for side in PanelSide::BOTH {
            state
                .panel_mut(side)
                .load_folder(temp_dir.path())
                .expect("failed to load folder");
        }
        state.overlay.set_embed_filenames(true);
        state
            .overlay
            .set_label(PanelSide::Right, 0, LabelSlot::new(true, " after "));

        let request = state.export_request().expect("both panels selected");
        assert!(request.embed_filenames);
        assert!(request.labels[0].is_empty());
        assert_eq!(request.labels[1], vec!["after"]);
        assert_eq!(request.paths[0], temp_dir.path().join("cat.jpg"));
    }

    #[test]
    fn side_index_round_trips() {
        for side in PanelSide::BOTH {
            assert_eq!(PanelSide::from_index(side.index() as i32), Some(side));
        }
        assert_eq!(PanelSide::from_index(2), None);
    }
}
