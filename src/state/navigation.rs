//! Navigation state for one panel: its image file list and current position.

use crate::error::{AppError, Result};
use crate::file_utils::{self, SortKey};
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Direction for navigation through images.
#[derive(Debug, Clone, Copy)]
enum Direction {
    Next,
    Previous,
}

/// Ordered image files of a folder plus a cursor on the current one.
///
/// The cursor is `None` exactly when the sequence is empty.
#[derive(Debug, Default)]
pub struct ImageSequence {
    image_files: Vec<PathBuf>,
    cursor: Option<usize>,
    sort_key: SortKey,
}

impl ImageSequence {
    /// Creates a new empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the sequence with the images found in `dir`.
    ///
    /// The files are ordered by the current sort key and the cursor is reset to
    /// the first one. A folder without images leaves the sequence empty and
    /// reports [`AppError::NoImagesFound`].
    pub fn load_folder(&mut self, dir: &Path) -> Result<usize> {
        let start = std::time::Instant::now();
        debug!("Starting folder load for: {:?}", dir);

        let files = file_utils::scan_directory(dir)?;
        self.replace_files(files);

        debug!(
            "Completed folder load for {:?} in {:?} ({} images)",
            dir,
            start.elapsed(),
            self.len()
        );

        if self.is_empty() {
            return Err(AppError::NoImagesFound(dir.to_path_buf()));
        }
        Ok(self.len())
    }

    fn replace_files(&mut self, files: Vec<PathBuf>) {
        self.image_files = files;
        file_utils::sort_paths(&mut self.image_files, self.sort_key);
        self.cursor = if self.image_files.is_empty() {
            None
        } else {
            Some(0)
        };
    }

    /// Changes the ordering and re-sorts, keeping the current file selected.
    pub fn set_sort_key(&mut self, key: SortKey) {
        self.sort_key = key;
        if self.image_files.is_empty() {
            return;
        }

        let previous = self.current_path().map(Path::to_path_buf);
        file_utils::sort_paths(&mut self.image_files, key);
        let index = previous
            .and_then(|prev| self.image_files.iter().position(|p| *p == prev))
            .unwrap_or(0);
        self.cursor = Some(index);
    }

    fn navigate_to(&mut self, direction: Direction) -> Option<&Path> {
        if self.image_files.is_empty() {
            warn!("No images available for navigation");
            return None;
        }

        let current_index = self.cursor?;
        let new_index = match direction {
            Direction::Next => {
                if current_index + 1 < self.image_files.len() {
                    current_index + 1
                } else {
                    warn!("No next image available");
                    return None;
                }
            }
            Direction::Previous => {
                if current_index > 0 {
                    current_index - 1
                } else {
                    warn!("No previous image available");
                    return None;
                }
            }
        };

        self.cursor = Some(new_index);
        self.current_path()
    }

    /// Moves to the next image and returns it, or `None` at the end.
    pub fn next(&mut self) -> Option<&Path> {
        self.navigate_to(Direction::Next)
    }

    /// Moves to the previous image and returns it, or `None` at the start.
    pub fn previous(&mut self) -> Option<&Path> {
        self.navigate_to(Direction::Previous)
    }

    /// Makes the image at `index` current. Returns whether the cursor moved.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.image_files.len() || self.cursor == Some(index) {
            return false;
        }
        self.cursor = Some(index);
        true
    }

    pub fn current_path(&self) -> Option<&Path> {
        self.cursor
            .and_then(|idx| self.image_files.get(idx))
            .map(PathBuf::as_path)
    }

    pub fn current_index(&self) -> Option<usize> {
        self.cursor
    }

    /// Base names of all files, in sequence order.
    pub fn file_names(&self) -> Vec<String> {
        self.image_files
            .iter()
            .map(|p| file_utils::file_name(p))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.image_files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.image_files.is_empty()
    }
}
