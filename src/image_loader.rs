use crate::config::{JPEG_QUALITY, PREVIEW_MAX_HEIGHT, PREVIEW_MAX_WIDTH};
use crate::error::{AppError, Result};
use crate::image_cache::CachedPreview;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};
use slint::{Image, Rgba8Pixel, SharedPixelBuffer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Decodes an image file, guessing the format from its content.
pub fn decode(path: &Path) -> Result<DynamicImage> {
    let img = image::ImageReader::open(path)
        .map_err(|e| AppError::decode(path, e))?
        .with_guessed_format()
        .map_err(|e| AppError::decode(path, e))?
        .decode()
        .map_err(|e| AppError::decode(path, e))?;

    if img.width() == 0 || img.height() == 0 {
        return Err(AppError::decode(path, "image has no pixels"));
    }
    Ok(img)
}

/// Decodes `path` and scales it into the preview box, keeping its aspect ratio.
pub fn load_preview_base(path: &Path) -> Result<CachedPreview> {
    let img = decode(path)?;
    let preview = img
        .resize(PREVIEW_MAX_WIDTH, PREVIEW_MAX_HEIGHT, FilterType::Triangle)
        .to_rgba8();
    Ok(CachedPreview::new(preview, img.width(), img.height()))
}

pub fn create_slint_image(image: &RgbaImage) -> Image {
    let buffer = SharedPixelBuffer::<Rgba8Pixel>::clone_from_slice(
        image.as_raw(),
        image.width(),
        image.height(),
    );
    Image::from_rgba8(buffer)
}

/// Writes `canvas` as a JPEG at maximum quality. Alpha is dropped.
pub fn encode_jpeg(canvas: RgbaImage, path: &Path) -> Result<()> {
    let rgb = DynamicImage::ImageRgba8(canvas).into_rgb8();

    let file = File::create(path).map_err(|e| AppError::EncodeFailure(e.to_string()))?;
    let mut writer = BufWriter::new(file);
    JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY).encode_image(&rgb)?;
    writer
        .flush()
        .map_err(|e| AppError::EncodeFailure(e.to_string()))?;
    Ok(())
}
