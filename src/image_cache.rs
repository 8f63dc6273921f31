//! Preview cache for fast redraws.
//!
//! Keeps the unannotated, box-scaled preview of recently shown files using an
//! LRU policy, so overlay edits redraw badges without decoding the source again.

use image::RgbaImage;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Scaled preview plus the size of the source it came from.
#[derive(Clone)]
pub struct CachedPreview {
    pub image: Rc<RgbaImage>,
    pub source_width: u32,
    pub source_height: u32,
}

impl CachedPreview {
    pub fn new(image: RgbaImage, source_width: u32, source_height: u32) -> Self {
        Self {
            image: Rc::new(image),
            source_width,
            source_height,
        }
    }
}

/// LRU cache for storing scaled previews.
pub struct ImageCache {
    cache: LruCache<PathBuf, CachedPreview>,
}

impl ImageCache {
    /// Creates a new cache; a zero capacity is raised to one.
    pub fn new(capacity: usize) -> Self {
        Self {
            cache: LruCache::new(NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN)),
        }
    }

    /// Retrieves a preview from the cache if it exists.
    pub fn get(&mut self, path: &Path) -> Option<CachedPreview> {
        let result = self.cache.get(path).cloned();
        if result.is_some() {
            log::debug!("Cache HIT: {}", path.display());
        } else {
            log::debug!("Cache MISS: {}", path.display());
        }
        result
    }

    /// Stores a preview in the cache.
    pub fn put(&mut self, path: PathBuf, preview: CachedPreview) {
        log::debug!(
            "Cache PUT: {} ({}x{})",
            path.display(),
            preview.image.width(),
            preview.image.height()
        );
        self.cache.put(path, preview);
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.cache.len()
    }
}
