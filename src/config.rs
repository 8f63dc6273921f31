//! Application configuration constants.

use image::Rgba;

/// Supported image file extensions for scanning directories.
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

/// Bounding box every panel preview is scaled into.
pub const PREVIEW_MAX_WIDTH: u32 = 700;
pub const PREVIEW_MAX_HEIGHT: u32 = 450;

/// Shared badge font size in points.
pub const MIN_FONT_SIZE: u32 = 6;
pub const MAX_FONT_SIZE: u32 = 72;
pub const DEFAULT_FONT_SIZE: u32 = 16;

/// Screen resolution assumed when converting points to pixels.
pub const FONT_DPI: f32 = 96.0;

/// Distance between a badge and the edge of its image region.
pub const BADGE_MARGIN: u32 = 6;
/// Space between the text and the badge border.
pub const BADGE_PADDING: u32 = 6;
/// Vertical space between stacked badges.
pub const BADGE_GAP: u32 = 2;

pub const BADGE_BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 160]);
pub const BADGE_TEXT_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Number of label lines configurable per panel.
pub const LABEL_SLOTS: usize = 3;

pub const JPEG_QUALITY: u8 = 100;

/// Stem offered in the save dialog when no file name can be derived.
pub const DEFAULT_EXPORT_STEM: &str = "combined";

/// Number of unannotated previews kept in memory.
pub const PREVIEW_CACHE_CAPACITY: usize = 16;

/// Environment variable pointing at a TrueType/OpenType font for badges.
pub const FONT_PATH_ENV: &str = "DUAL_IMAGE_VIEWER_FONT";

/// Fonts probed in order when no override is set.
pub const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];
