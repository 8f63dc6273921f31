//! Unified error types for the image viewer application.

use std::fmt;
use std::path::PathBuf;

/// Application-specific errors.
#[derive(Debug)]
pub enum AppError {
    /// The chosen folder holds no file with a supported extension
    NoImagesFound(PathBuf),
    /// Export requested while a panel has no current image
    MissingSelection,
    /// A source image could not be read or decoded
    DecodeFailure { path: PathBuf, reason: String },
    /// The composite could not be encoded or written
    EncodeFailure(String),
    /// Error scanning directory for image files
    DirectoryScan(String),
    /// No usable font was found for drawing badges
    FontUnavailable,
}

impl AppError {
    pub fn decode(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        AppError::DecodeFailure {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NoImagesFound(dir) => {
                write!(f, "No images found in {}", dir.display())
            }
            AppError::MissingSelection => {
                write!(f, "Both panels must show a current image")
            }
            AppError::DecodeFailure { path, reason } => {
                write!(f, "Could not load {}: {}", path.display(), reason)
            }
            AppError::EncodeFailure(msg) => write!(f, "Saving failed: {}", msg),
            AppError::DirectoryScan(msg) => write!(f, "Directory scan error: {}", msg),
            AppError::FontUnavailable => write!(
                f,
                "No font available for drawing labels (set {})",
                crate::config::FONT_PATH_ENV
            ),
        }
    }
}

impl std::error::Error for AppError {}

impl From<image::ImageError> for AppError {
    fn from(err: image::ImageError) -> Self {
        AppError::EncodeFailure(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::DirectoryScan(err.to_string())
    }
}

/// Type alias for Results in this application.
pub type Result<T> = std::result::Result<T, AppError>;
