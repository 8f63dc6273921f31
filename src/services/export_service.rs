//! Saving the combined image.

use crate::config::DEFAULT_EXPORT_STEM;
use crate::error::Result;
use crate::image_loader;
use image::RgbaImage;
use log::info;
use std::path::{Path, PathBuf};

const JPEG_EXTENSIONS: [&str; 2] = ["jpg", "jpeg"];

/// File name offered in the save dialog: the stem of the left image, or a
/// generic fallback.
pub fn default_export_name(left: Option<&Path>) -> String {
    left.and_then(|p| p.file_stem())
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
        .unwrap_or_else(|| DEFAULT_EXPORT_STEM.to_string())
}

/// Appends `.jpg` unless the path already ends in a JPEG extension.
pub fn normalize_save_path(path: PathBuf) -> PathBuf {
    let has_jpeg_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| JPEG_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false);

    if has_jpeg_extension {
        path
    } else {
        let mut name = path.into_os_string();
        name.push(".jpg");
        PathBuf::from(name)
    }
}

/// Encodes the composite as JPEG at `path`.
pub fn save_composite(canvas: RgbaImage, path: &Path) -> Result<()> {
    let start = std::time::Instant::now();
    let (width, height) = canvas.dimensions();
    image_loader::encode_jpeg(canvas, path)?;
    info!(
        "Saved {}x{} composite to {} in {:?}",
        width,
        height,
        path.display(),
        start.elapsed()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use tempfile::tempdir;

    #[test]
    fn default_name_uses_left_stem() {
        assert_eq!(default_export_name(Some(Path::new("/pics/cat.large.jpg"))), "cat.large");
        assert_eq!(default_export_name(None), "combined");
    }

    #[test]
    fn jpeg_extensions_are_kept() {
        assert_eq!(normalize_save_path(PathBuf::from("out.jpg")), PathBuf::from("out.jpg"));
        assert_eq!(normalize_save_path(PathBuf::from("out.JPEG")), PathBuf::from("out.JPEG"));
    }

    #[test]
    fn other_names_get_jpg_appended() {
        assert_eq!(normalize_save_path(PathBuf::from("out")), PathBuf::from("out.jpg"));
        assert_eq!(normalize_save_path(PathBuf::from("out.png")), PathBuf::from("out.png.jpg"));
    }

    #[test]
    fn save_writes_decodable_jpeg() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("combined.jpg");

        save_composite(RgbaImage::new(8, 6), &path).expect("failed to save");

        let decoded = image_loader::decode(&path).expect("failed to decode");
        assert_eq!((decoded.width(), decoded.height()), (8, 6));
    }

    #[test]
    fn save_to_unwritable_location_fails() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = save_composite(RgbaImage::new(2, 2), temp_dir.path());
        assert!(matches!(result, Err(AppError::EncodeFailure(_))));
    }
}
