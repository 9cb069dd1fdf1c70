//! Draws the padded, highlighted lines onto a canvas, either bare or
//! wrapped in window chrome (border, title bar, traffic-light buttons).

use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut};
use imageproc::pixelops::weighted_sum;
use imageproc::rect::Rect;

use crate::font::TextFont;
use crate::highlight::Span;
use crate::layout::Padding;
use crate::theme::{
    Theme, BORDER_COLOR, BUTTON_AMBER, BUTTON_GREEN, BUTTON_RED, TITLE_BAR_COLOR, TITLE_TEXT_COLOR,
};

pub const BORDER_WIDTH: u32 = 25;
pub const TITLE_BAR_HEIGHT: u32 = 30;
const BUTTON_RADIUS: i32 = 10;
/// Distance between button centers.
const BUTTON_SPACING: i32 = 30;
/// Vertical gap between drawn lines.
const LINE_SPACING: f32 = 1.0;

pub struct FrameStyle {
    pub theme: Theme,
    /// Window chrome on, or bare background.
    pub chrome: bool,
    pub title: String,
}

/// Renders every line onto a freshly allocated canvas. `content_size` is
/// the padded-content size from the layout step; chrome is additive on top
/// of it so the border and title bar never eat into the text area.
pub fn render_frame(
    lines: &[Vec<Span>],
    font: &TextFont,
    title_font: &TextFont,
    style: &FrameStyle,
    pad: &Padding,
    content_size: (u32, u32),
) -> RgbaImage {
    let (cw, ch) = content_size;
    let (width, height, origin_x, origin_y) = if style.chrome {
        (
            cw + 2 * BORDER_WIDTH,
            ch + 2 * BORDER_WIDTH + TITLE_BAR_HEIGHT,
            BORDER_WIDTH + pad.left,
            BORDER_WIDTH + TITLE_BAR_HEIGHT + pad.top,
        )
    } else {
        (cw, ch, pad.left, pad.top)
    };

    let bg = style.theme.bg_color();
    let mut img = RgbaImage::from_pixel(
        width,
        height,
        if style.chrome { BORDER_COLOR } else { bg },
    );

    if style.chrome {
        let inner_x = BORDER_WIDTH as i32;
        draw_filled_rect_mut(
            &mut img,
            Rect::at(inner_x, (BORDER_WIDTH + TITLE_BAR_HEIGHT) as i32).of_size(cw, ch),
            bg,
        );
        draw_filled_rect_mut(
            &mut img,
            Rect::at(inner_x, BORDER_WIDTH as i32).of_size(cw, TITLE_BAR_HEIGHT),
            TITLE_BAR_COLOR,
        );

        // Title label, vertically centered in the bar.
        let bar_top = BORDER_WIDTH as f32;
        let slack = TITLE_BAR_HEIGHT as f32 - title_font.line_height();
        let baseline = bar_top + slack / 2.0 + title_font.ascent();
        draw_text(
            &mut img,
            title_font,
            (BORDER_WIDTH + 10) as f32,
            baseline,
            TITLE_TEXT_COLOR,
            &style.title,
        );

        // Minimize, resize, close buttons, right-aligned in the bar.
        let right = (BORDER_WIDTH + cw) as i32;
        let cy = BORDER_WIDTH as i32 + TITLE_BAR_HEIGHT as i32 / 2;
        for (i, color) in [BUTTON_AMBER, BUTTON_GREEN, BUTTON_RED].iter().enumerate() {
            let cx = right - BUTTON_RADIUS - BUTTON_SPACING * (2 - i as i32);
            draw_filled_circle_mut(&mut img, (cx, cy), BUTTON_RADIUS, *color);
        }
    }

    // Left-flush draw: the horizontal pen resets to origin_x for every
    // line; each line advances the pen by its own ink height plus the
    // inter-line gap. Lines with no ink keep the full line height so
    // blank lines still take up space.
    let mut y = origin_y as f32;
    for spans in lines {
        // Integral baselines keep glyph pixel bounds consistent with the
        // ink heights measured at baseline zero.
        let baseline = (y + font.ascent()).round();
        let mut pen = origin_x as f32;
        let mut full_line = String::new();
        for span in spans {
            pen = draw_text(
                &mut img,
                font,
                pen,
                baseline,
                style.theme.token_color(span.kind),
                &span.text,
            );
            full_line.push_str(&span.text);
        }
        y += match font.ink_height(&full_line) {
            Some(ink) => ink + LINE_SPACING,
            None => font.line_height().ceil(),
        };
    }

    img
}

/// Draws one run of text at the given baseline and returns the advanced
/// pen position. Glyph coverage is alpha-blended onto the canvas; missing
/// glyphs render as the font's notdef box.
fn draw_text(
    img: &mut RgbaImage,
    font: &TextFont,
    x: f32,
    baseline: f32,
    color: Rgba<u8>,
    text: &str,
) -> f32 {
    let mut pen = x;
    let mut prev = None;
    for c in text.chars() {
        if let Some(p) = prev {
            pen += font.kern(p, c);
        }
        if let Some(og) = font.outline(c, pen, baseline) {
            let bounds = og.px_bounds();
            og.draw(|gx, gy, cov| {
                let px = bounds.min.x as i32 + gx as i32;
                let py = bounds.min.y as i32 + gy as i32;
                if cov > 0.0
                    && px >= 0
                    && py >= 0
                    && (px as u32) < img.width()
                    && (py as u32) < img.height()
                {
                    let dst = img.get_pixel_mut(px as u32, py as u32);
                    *dst = weighted_sum(color, *dst, cov, 1.0 - cov);
                }
            });
        }
        pen += font.advance(c);
        prev = Some(c);
    }
    pen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::test_font;
    use crate::highlight::Lexer;
    use crate::layout::{canvas_size, pad_lines, Alignment};

    fn render(text: &str, chrome: bool) -> RgbaImage {
        let font = test_font(16.0);
        let title_font = test_font(14.0);
        let pad = Padding::default();
        let padded = pad_lines(text, Alignment::Centered, &pad);
        let size = canvas_size(&font, &padded, &pad);
        let lines: Vec<Vec<Span>> = padded
            .iter()
            .map(|l| Lexer::Shell.tokenize_line(l))
            .collect();
        let style = FrameStyle {
            theme: Theme::Monokai,
            chrome,
            title: "Terminal".to_string(),
        };
        render_frame(&lines, &font, &title_font, &style, &pad, size)
    }

    #[test]
    fn plain_mode_corner_is_background() {
        let img = render("$ ls", false);
        assert_eq!(*img.get_pixel(0, 0), Theme::Monokai.bg_color());
    }

    #[test]
    fn chrome_mode_grows_the_canvas() {
        let plain = render("$ ls\nfile1.txt", false);
        let chrome = render("$ ls\nfile1.txt", true);
        assert_eq!(chrome.width(), plain.width() + 2 * BORDER_WIDTH);
        assert_eq!(
            chrome.height(),
            plain.height() + 2 * BORDER_WIDTH + TITLE_BAR_HEIGHT
        );
    }

    #[test]
    fn chrome_corner_is_border_and_bar_is_drawn() {
        let img = render("$ ls", true);
        assert_eq!(*img.get_pixel(0, 0), BORDER_COLOR);
        // Sample inside the title bar, clear of label and buttons.
        let bar_y = BORDER_WIDTH + TITLE_BAR_HEIGHT / 2;
        let probe = *img.get_pixel(img.width() / 2, bar_y);
        assert!(probe == TITLE_BAR_COLOR || probe == BUTTON_AMBER || probe == BUTTON_GREEN);
    }

    #[test]
    fn rendering_is_deterministic() {
        let a = render("$ ls -la\nfile1.txt\n# done", true);
        let b = render("$ ls -la\nfile1.txt\n# done", true);
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn three_lines_produce_three_ink_rows() {
        let img = render("$ ls\nfile1.txt\nfile2.txt", false);
        let bg = Theme::Monokai.bg_color();
        // Count rows containing at least one non-background pixel, then
        // count the distinct runs of such rows.
        let mut runs = 0;
        let mut in_run = false;
        for y in 0..img.height() {
            let has_ink = (0..img.width()).any(|x| *img.get_pixel(x, y) != bg);
            if has_ink && !in_run {
                runs += 1;
            }
            in_run = has_ink;
        }
        assert_eq!(runs, 3);
    }

    #[test]
    fn empty_input_renders_background_only() {
        let img = render("", false);
        let bg = Theme::Monokai.bg_color();
        assert!(img.pixels().all(|p| *p == bg));
    }
}
