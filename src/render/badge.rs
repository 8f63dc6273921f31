//! Text badges: a padded, semi-transparent box with one line of white text.
//!
//! Two placements exist. A single badge in the bottom-left corner of a region
//! carries the file name; labels stack downwards from the top-right corner.

use crate::config::{BADGE_BACKGROUND, BADGE_GAP, BADGE_MARGIN, BADGE_PADDING, BADGE_TEXT_COLOR};
use image::{Rgba, RgbaImage};
use imageproc::rect::Rect;

/// Measures and paints single lines of text.
pub trait BadgeFont {
    /// Horizontal advance of `text`.
    fn text_width(&self, text: &str) -> u32;
    /// Height of one line (ascent plus descent).
    fn line_height(&self) -> u32;
    /// Distance from the top of a line to its baseline.
    fn ascent(&self) -> u32;
    /// Paints `text` starting at `x` with its baseline on row `baseline`.
    fn draw_text(&self, canvas: &mut RgbaImage, x: i32, baseline: i32, color: Rgba<u8>, text: &str);
}

/// Where a badge sits inside its region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    BottomLeft,
    /// Position within the top-right stack, 0 being the topmost badge.
    TopRightStack(usize),
}

/// Scoped drawing context over a canvas.
///
/// Holding the painter keeps the canvas mutably borrowed; the context ends
/// when the painter goes out of scope.
pub struct Painter<'a> {
    canvas: &'a mut RgbaImage,
}

impl<'a> Painter<'a> {
    pub fn begin(canvas: &'a mut RgbaImage) -> Self {
        Self { canvas }
    }

    fn bounds(&self) -> Option<Rect> {
        let (width, height) = self.canvas.dimensions();
        (width > 0 && height > 0).then(|| Rect::at(0, 0).of_size(width, height))
    }

    /// Alpha-blends `color` over every canvas pixel inside `rect`.
    pub fn fill_rect(&mut self, rect: Rect, color: Rgba<u8>) {
        let Some(visible) = self.bounds().and_then(|b| b.intersect(rect)) else {
            return;
        };
        for y in visible.top()..=visible.bottom() {
            for x in visible.left()..=visible.right() {
                blend_over(self.canvas.get_pixel_mut(x as u32, y as u32), color);
            }
        }
    }

    /// Draws `image` with its top-left corner at (`x`, `y`), blending alpha.
    pub fn draw_image(&mut self, image: &RgbaImage, x: i64, y: i64) {
        image::imageops::overlay(&mut *self.canvas, image, x, y);
    }

    pub fn draw_text(
        &mut self,
        font: &dyn BadgeFont,
        x: i32,
        baseline: i32,
        color: Rgba<u8>,
        text: &str,
    ) {
        font.draw_text(&mut *self.canvas, x, baseline, color, text);
    }
}

/// Source-over compositing in integer math, so an opaque pixel stays opaque.
fn blend_over(dst: &mut Rgba<u8>, src: Rgba<u8>) {
    let src_a = u32::from(src[3]);
    let dst_a = u32::from(dst[3]);
    let inv_a = 255 - src_a;
    let out_a = src_a * 255 + dst_a * inv_a;
    if out_a == 0 {
        *dst = Rgba([0, 0, 0, 0]);
        return;
    }
    for c in 0..3 {
        let num = u32::from(src[c]) * src_a * 255 + u32::from(dst[c]) * dst_a * inv_a;
        dst[c] = ((num + out_a / 2) / out_a) as u8;
    }
    dst[3] = ((out_a + 127) / 255) as u8;
}

/// Outer rectangle of the badge for `text` in `region`.
pub fn badge_rect(region: Rect, font: &dyn BadgeFont, text: &str, placement: Placement) -> Rect {
    let width = font.text_width(text) + 2 * BADGE_PADDING;
    let height = font.line_height() + 2 * BADGE_PADDING;
    let margin = BADGE_MARGIN as i32;

    let (x, y) = match placement {
        Placement::BottomLeft => (
            region.left() + margin,
            region.top() + region.height() as i32 - margin - height as i32,
        ),
        Placement::TopRightStack(index) => (
            region.left() + region.width() as i32 - margin - width as i32,
            region.top() + margin + (index as i32) * (height + BADGE_GAP) as i32,
        ),
    };

    Rect::at(x, y).of_size(width, height)
}

/// Draws one badge. Empty text draws nothing.
pub fn draw_badge(
    painter: &mut Painter<'_>,
    region: Rect,
    font: &dyn BadgeFont,
    text: &str,
    placement: Placement,
) {
    if text.is_empty() {
        return;
    }

    paint_badge(painter, badge_rect(region, font, text, placement), font, text);
}

fn paint_badge(painter: &mut Painter<'_>, rect: Rect, font: &dyn BadgeFont, text: &str) {
    painter.fill_rect(rect, BADGE_BACKGROUND);

    let pad = BADGE_PADDING as i32;
    let baseline = rect.top() + pad + font.ascent() as i32;
    painter.draw_text(font, rect.left() + pad, baseline, BADGE_TEXT_COLOR, text);
}

/// Rectangles of the top-right stack for `texts`, skipping empty entries.
pub fn stack_rects(region: Rect, font: &dyn BadgeFont, texts: &[String]) -> Vec<Rect> {
    texts
        .iter()
        .filter(|t| !t.is_empty())
        .enumerate()
        .map(|(index, text)| badge_rect(region, font, text, Placement::TopRightStack(index)))
        .collect()
}

/// Draws `texts` as a stack anchored at the top-right corner of `region`,
/// first entry on top.
pub fn draw_badge_stack(
    painter: &mut Painter<'_>,
    region: Rect,
    font: &dyn BadgeFont,
    texts: &[String],
) {
    let rects = stack_rects(region, font, texts);
    for (rect, text) in rects.into_iter().zip(texts.iter().filter(|t| !t.is_empty())) {
        paint_badge(painter, rect, font, text);
    }
}

/// Fixed-size font that paints every line as a solid block.
#[cfg(test)]
pub(crate) struct BlockFont {
    pub advance: u32,
    pub height: u32,
    pub ascent: u32,
}

#[cfg(test)]
impl BlockFont {
    pub fn new() -> Self {
        Self {
            advance: 7,
            height: 12,
            ascent: 9,
        }
    }
}

#[cfg(test)]
impl BadgeFont for BlockFont {
    fn text_width(&self, text: &str) -> u32 {
        self.advance * text.chars().count() as u32
    }

    fn line_height(&self) -> u32 {
        self.height
    }

    fn ascent(&self) -> u32 {
        self.ascent
    }

    fn draw_text(&self, canvas: &mut RgbaImage, x: i32, baseline: i32, color: Rgba<u8>, text: &str) {
        let top = baseline - self.ascent as i32;
        imageproc::drawing::draw_filled_rect_mut(
            canvas,
            Rect::at(x, top).of_size(self.text_width(text).max(1), self.height),
            color,
        );
    }
}
