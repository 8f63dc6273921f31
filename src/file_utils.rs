use crate::config::SUPPORTED_IMAGE_EXTENSIONS;
use crate::error::Result;
use std::cmp::Reverse;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Ordering applied to a panel's file list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    NameAscending,
    NameDescending,
    ModifiedNewestFirst,
    ModifiedOldestFirst,
    CreatedNewestFirst,
    CreatedOldestFirst,
}

impl SortKey {
    /// All keys, in the order the sort selector lists them.
    pub const ALL: [SortKey; 6] = [
        SortKey::NameAscending,
        SortKey::NameDescending,
        SortKey::ModifiedNewestFirst,
        SortKey::ModifiedOldestFirst,
        SortKey::CreatedNewestFirst,
        SortKey::CreatedOldestFirst,
    ];

    pub fn from_index(index: i32) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }
}

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext_str| SUPPORTED_IMAGE_EXTENSIONS.contains(&ext_str.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Lists the supported images directly inside `dir`, without recursing.
pub fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut image_files: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_supported_image(path))
        .collect();

    image_files.sort();
    Ok(image_files)
}

/// Sorts `paths` in place. Equal keys keep their previous relative order.
pub fn sort_paths(paths: &mut [PathBuf], key: SortKey) {
    match key {
        SortKey::NameAscending => paths.sort_by_cached_key(|p| name_key(p)),
        SortKey::NameDescending => paths.sort_by_cached_key(|p| Reverse(name_key(p))),
        SortKey::ModifiedNewestFirst => paths.sort_by_cached_key(|p| Reverse(modified_time(p))),
        SortKey::ModifiedOldestFirst => paths.sort_by_cached_key(|p| modified_time(p)),
        SortKey::CreatedNewestFirst => paths.sort_by_cached_key(|p| Reverse(created_time(p))),
        SortKey::CreatedOldestFirst => paths.sort_by_cached_key(|p| created_time(p)),
    }
}

fn name_key(path: &Path) -> String {
    file_name(path).to_lowercase()
}

/// Base name of `path` as displayed in lists and badges.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Modification time, or the epoch when it cannot be read.
pub fn modified_time(path: &Path) -> SystemTime {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .unwrap_or(SystemTime::UNIX_EPOCH)
}

/// Creation time, or the epoch when it cannot be read or the platform lacks it.
pub fn created_time(path: &Path) -> SystemTime {
    fs::metadata(path)
        .and_then(|m| m.created())
        .unwrap_or(SystemTime::UNIX_EPOCH)
}
