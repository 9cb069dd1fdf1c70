//! Character padding and canvas sizing.
//!
//! Left/right padding is applied twice, matching the reference behavior:
//! once as space characters inserted into each line and once as pixel
//! insets in the canvas size. Top/bottom are pixel insets only.

use clap::ValueEnum;
use unicode_width::UnicodeWidthStr;

use crate::font::TextFont;

/// Four-sided inset around the text content.
#[derive(Clone, Copy, Debug)]
pub struct Padding {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Default for Padding {
    fn default() -> Self {
        Padding {
            left: 20,
            top: 20,
            right: 10,
            bottom: 40,
        }
    }
}

/// How content sits within the padded block. The source variants disagree
/// on this, so both policies are first-class.
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
pub enum Alignment {
    /// Each line centered within the widest line, then margins added.
    Centered,
    /// Fixed margins only; stripping them recovers the line exactly.
    Left,
}

/// Splits the text into lines and inserts left/right space padding.
/// A trailing blank spacer line is appended below the content.
pub fn pad_lines(text: &str, align: Alignment, pad: &Padding) -> Vec<String> {
    let lines: Vec<&str> = text.split('\n').collect();
    let max_width = lines.iter().map(|l| l.width()).max().unwrap_or(0);

    let mut padded = Vec::with_capacity(lines.len() + 1);
    for line in &lines {
        let (fill_left, fill_right) = match align {
            Alignment::Left => (0, 0),
            Alignment::Centered => {
                let slack = max_width - line.width();
                (slack / 2, slack.div_ceil(2))
            }
        };
        let mut out = String::with_capacity(line.len() + max_width);
        out.push_str(&" ".repeat(pad.left as usize + fill_left));
        out.push_str(line);
        out.push_str(&" ".repeat(fill_right + pad.right as usize));
        padded.push(out);
    }
    padded.push(" ".repeat(pad.left as usize));
    padded
}

/// Pixel dimensions needed to hold every padded line at the font's line
/// height, plus the pixel insets. Computed before the canvas is allocated
/// so content is never clipped.
pub fn canvas_size(font: &TextFont, lines: &[String], pad: &Padding) -> (u32, u32) {
    let text_width = lines
        .iter()
        .map(|l| font.line_width(l))
        .fold(0.0_f32, f32::max);
    let width = text_width.ceil() as u32 + pad.left + pad.right;
    let height = (font.line_height().ceil() as u32) * lines.len() as u32 + pad.top + pad.bottom;
    (width.max(1), height.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::test_font;

    #[test]
    fn left_aligned_padding_round_trips() {
        let pad = Padding::default();
        let text = "$ ls\nfile1.txt\nfile2.txt";
        let padded = pad_lines(text, Alignment::Left, &pad);
        for (orig, got) in text.split('\n').zip(&padded) {
            let stripped = &got[pad.left as usize..got.len() - pad.right as usize];
            assert_eq!(stripped, orig);
        }
    }

    #[test]
    fn centered_lines_have_uniform_display_width() {
        let pad = Padding::default();
        let padded = pad_lines("a\nlonger line\nmid", Alignment::Centered, &pad);
        let expect = "longer line".width() + (pad.left + pad.right) as usize;
        // All but the trailing spacer line.
        for line in &padded[..padded.len() - 1] {
            assert_eq!(line.width(), expect, "line {line:?}");
        }
    }

    #[test]
    fn centered_keeps_content_intact() {
        let padded = pad_lines("ab\ncdef", Alignment::Centered, &Padding::default());
        assert!(padded[0].trim() == "ab");
        assert!(padded[1].trim() == "cdef");
    }

    #[test]
    fn empty_input_does_not_crash() {
        let pad = Padding::default();
        let padded = pad_lines("", Alignment::Centered, &pad);
        let font = test_font(16.0);
        let (w, h) = canvas_size(&font, &padded, &pad);
        assert!(w >= pad.left + pad.right);
        assert!(h >= pad.top + pad.bottom);
    }

    #[test]
    fn canvas_contains_widest_line_and_all_rows() {
        let pad = Padding::default();
        let font = test_font(16.0);
        let padded = pad_lines("$ ls\nfile1.txt\nfile2.txt\n", Alignment::Centered, &pad);
        let (w, h) = canvas_size(&font, &padded, &pad);

        let max_px = padded
            .iter()
            .map(|l| font.line_width(l))
            .fold(0.0_f32, f32::max);
        assert!(w as f32 >= max_px + (pad.left + pad.right) as f32);
        assert!(h as f32 >= font.line_height() * padded.len() as f32);
    }

    #[test]
    fn trailing_newline_keeps_its_blank_line() {
        let padded = pad_lines("a\n", Alignment::Left, &Padding::default());
        // "a", the empty line from the trailing newline, and the spacer.
        assert_eq!(padded.len(), 3);
    }
}
