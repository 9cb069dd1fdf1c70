//! Drop-shadow post-processing: a blurred dark rectangle behind the frame.

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

/// Shadow offset relative to the frame, in pixels.
const OFFSET: (u32, u32) = (5, 5);
const SHADOW_COLOR: Rgba<u8> = Rgba([0, 0, 0, 100]);

/// Composites `frame` over an offset, blurred shadow rectangle. The output
/// canvas is expanded by the offset plus a blur margin so the shadow is
/// never clipped, and the frame itself lands at (0, 0) untouched: the
/// original region stays pixel-identical to the non-shadow render.
pub fn drop_shadow(frame: &RgbaImage, blur_radius: f32) -> RgbaImage {
    let (w, h) = frame.dimensions();
    let margin = blur_radius.max(0.0).ceil() as u32 * 2;
    let mut shadow = RgbaImage::new(w + OFFSET.0 + margin, h + OFFSET.1 + margin);

    draw_filled_rect_mut(
        &mut shadow,
        Rect::at(OFFSET.0 as i32, OFFSET.1 as i32).of_size(w, h),
        SHADOW_COLOR,
    );

    let mut out = if blur_radius > 0.0 {
        image::imageops::blur(&shadow, blur_radius)
    } else {
        shadow
    };
    image::imageops::overlay(&mut out, frame, 0, 0);
    out
}
