//! Font loading and text measurement.
//!
//! Fonts are resolved from an explicit, ordered list of candidate paths so
//! the search strategy is testable and does not depend on the process
//! working directory beyond whatever relative paths the caller puts in the
//! list.

use std::fs;
use std::path::PathBuf;

use ab_glyph::{point, Font, FontVec, OutlinedGlyph, PxScale, ScaleFont};

use crate::error::Error;

/// Default search order for the monospace content font: alongside the
/// binary, in the `support` subdirectory, then the common system install.
pub fn default_font_candidates() -> Vec<PathBuf> {
    vec![
        PathBuf::from("DejaVuSansMono.ttf"),
        PathBuf::from("support/DejaVuSansMono.ttf"),
        PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf"),
    ]
}

/// Candidates for the title-bar label font. Purely decorative, so callers
/// fall back to the content font when none of these load.
pub fn title_font_candidates() -> Vec<PathBuf> {
    vec![
        PathBuf::from("support/DejaVuSans.ttf"),
        PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf"),
        PathBuf::from("/System/Library/Fonts/Menlo.ttc"),
    ]
}

/// A loaded font at a fixed pixel size.
pub struct TextFont {
    font: FontVec,
    scale: PxScale,
}

impl TextFont {
    /// Loads the first candidate that exists and parses as a font.
    /// Collections (.ttc) use their first face.
    pub fn load(candidates: &[PathBuf], size: f32) -> Result<Self, Error> {
        for path in candidates {
            let Ok(data) = fs::read(path) else { continue };
            if let Ok(font) = FontVec::try_from_vec_and_index(data, 0) {
                return Ok(TextFont {
                    font,
                    scale: PxScale::from(size),
                });
            }
        }
        Err(Error::FontLoad {
            searched: candidates
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", "),
        })
    }

    /// Vertical distance between successive baselines.
    pub fn line_height(&self) -> f32 {
        let s = self.font.as_scaled(self.scale);
        s.height() + s.line_gap()
    }

    pub fn ascent(&self) -> f32 {
        self.font.as_scaled(self.scale).ascent()
    }

    /// Horizontal advance of one character.
    pub fn advance(&self, c: char) -> f32 {
        let s = self.font.as_scaled(self.scale);
        s.h_advance(self.font.glyph_id(c))
    }

    /// Kerning adjustment between two adjacent characters.
    pub fn kern(&self, prev: char, c: char) -> f32 {
        let s = self.font.as_scaled(self.scale);
        s.kern(self.font.glyph_id(prev), self.font.glyph_id(c))
    }

    /// Rendered pixel width of a whole line.
    pub fn line_width(&self, text: &str) -> f32 {
        let mut width = 0.0;
        let mut prev = None;
        for c in text.chars() {
            if let Some(p) = prev {
                width += self.kern(p, c);
            }
            width += self.advance(c);
            prev = Some(c);
        }
        width
    }

    /// Height of the ink bounding box of a line drawn on one baseline, or
    /// `None` when the line leaves no ink (blank or whitespace only).
    pub fn ink_height(&self, text: &str) -> Option<f32> {
        let mut min_y = f32::MAX;
        let mut max_y = f32::MIN;
        let mut pen = 0.0;
        let mut prev = None;
        for c in text.chars() {
            if let Some(p) = prev {
                pen += self.kern(p, c);
            }
            if let Some(og) = self.outline(c, pen, 0.0) {
                let b = og.px_bounds();
                min_y = min_y.min(b.min.y);
                max_y = max_y.max(b.max.y);
            }
            pen += self.advance(c);
            prev = Some(c);
        }
        (max_y > min_y).then(|| max_y - min_y)
    }

    /// Outlined glyph for `c` positioned with its baseline origin at
    /// `(x, baseline)`. `None` for whitespace and empty outlines.
    pub fn outline(&self, c: char, x: f32, baseline: f32) -> Option<OutlinedGlyph> {
        let glyph = self
            .font
            .glyph_id(c)
            .with_scale_and_position(self.scale, point(x, baseline));
        self.font.outline_glyph(glyph)
    }
}

#[cfg(test)]
pub(crate) fn test_font(size: f32) -> TextFont {
    let path = PathBuf::from(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/support/DejaVuSansMono.ttf"
    ));
    TextFont::load(&[path], size).unwrap()
}
