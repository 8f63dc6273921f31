//! Joins two images into one canvas, side by side or one above the other.

use super::badge::Painter;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};
use imageproc::rect::Rect;

const CANVAS_BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// How the two images are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Left and right, sharing the smaller height.
    #[default]
    Horizontal,
    /// Top and bottom, sharing the smaller width.
    Vertical,
}

impl Orientation {
    pub fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(Orientation::Horizontal),
            1 => Some(Orientation::Vertical),
            _ => None,
        }
    }
}

/// Combined canvas plus the area each source ended up in.
pub struct Composite {
    pub canvas: RgbaImage,
    pub regions: [Rect; 2],
}

/// Length of the free side when scaling `(fixed, free)` so that `fixed`
/// becomes `target`, keeping the aspect ratio.
fn scaled_length(fixed: u32, free: u32, target: u32) -> u32 {
    let scaled = (free as f64 * target as f64 / fixed as f64).round() as u32;
    scaled.max(1)
}

fn scale_to(image: &DynamicImage, width: u32, height: u32) -> RgbaImage {
    if image.dimensions() == (width, height) {
        image.to_rgba8()
    } else {
        image.resize_exact(width, height, FilterType::Lanczos3).to_rgba8()
    }
}

/// Scales both images to a shared height (horizontal) or width (vertical),
/// the smaller of the two, and draws them onto an opaque white canvas.
///
/// Both images must have non-zero dimensions.
pub fn compose(first: &DynamicImage, second: &DynamicImage, orientation: Orientation) -> Composite {
    let (scaled_first, scaled_second, second_origin) = match orientation {
        Orientation::Horizontal => {
            let target = first.height().min(second.height());
            let a = scale_to(first, scaled_length(first.height(), first.width(), target), target);
            let b = scale_to(second, scaled_length(second.height(), second.width(), target), target);
            let origin = (a.width(), 0);
            (a, b, origin)
        }
        Orientation::Vertical => {
            let target = first.width().min(second.width());
            let a = scale_to(first, target, scaled_length(first.width(), first.height(), target));
            let b = scale_to(second, target, scaled_length(second.width(), second.height(), target));
            let origin = (0, a.height());
            (a, b, origin)
        }
    };

    let (width, height) = match orientation {
        Orientation::Horizontal => (
            scaled_first.width() + scaled_second.width(),
            scaled_first.height(),
        ),
        Orientation::Vertical => (
            scaled_first.width(),
            scaled_first.height() + scaled_second.height(),
        ),
    };

    let mut canvas = RgbaImage::from_pixel(width, height, CANVAS_BACKGROUND);
    {
        let mut painter = Painter::begin(&mut canvas);
        painter.draw_image(&scaled_first, 0, 0);
        painter.draw_image(
            &scaled_second,
            second_origin.0 as i64,
            second_origin.1 as i64,
        );
    }

    let regions = [
        Rect::at(0, 0).of_size(scaled_first.width(), scaled_first.height()),
        Rect::at(second_origin.0 as i32, second_origin.1 as i32)
            .of_size(scaled_second.width(), scaled_second.height()),
    ];

    Composite { canvas, regions }
}
