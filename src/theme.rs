use clap::ValueEnum;
use image::Rgba;

use crate::highlight::TokenKind;

/// Named color themes for the generated image.
///
/// `Monokai` matches the dark-gray editor background of the highlighted
/// variant; `Black` is the plain terminal-on-black look.
#[derive(Clone, Copy, PartialEq, Eq, Debug, ValueEnum)]
pub enum Theme {
    Monokai,
    Black,
}

/// Window chrome colors are shared by both themes.
pub const BORDER_COLOR: Rgba<u8> = Rgba([60, 60, 60, 255]);
pub const TITLE_BAR_COLOR: Rgba<u8> = Rgba([67, 73, 81, 255]);
pub const TITLE_TEXT_COLOR: Rgba<u8> = Rgba([180, 180, 180, 255]);

/// Traffic-light buttons: minimize, resize, close.
pub const BUTTON_AMBER: Rgba<u8> = Rgba([239, 184, 56, 255]);
pub const BUTTON_GREEN: Rgba<u8> = Rgba([122, 189, 83, 255]);
pub const BUTTON_RED: Rgba<u8> = Rgba([226, 56, 62, 255]);

impl Theme {
    pub fn bg_color(&self) -> Rgba<u8> {
        match self {
            Theme::Monokai => Rgba([39, 40, 34, 255]),
            Theme::Black => Rgba([0, 0, 0, 255]),
        }
    }

    pub fn default_fg(&self) -> Rgba<u8> {
        match self {
            Theme::Monokai => Rgba([187, 187, 187, 255]),
            Theme::Black => Rgba([255, 255, 255, 255]),
        }
    }

    pub fn token_color(&self, kind: TokenKind) -> Rgba<u8> {
        match self {
            Theme::Monokai => match kind {
                TokenKind::Prompt => Rgba([166, 226, 46, 255]),
                TokenKind::Comment => Rgba([117, 113, 94, 255]),
                TokenKind::String => Rgba([230, 219, 116, 255]),
                TokenKind::Flag => Rgba([249, 38, 114, 255]),
                TokenKind::Number => Rgba([174, 129, 255, 255]),
                TokenKind::Text => self.default_fg(),
            },
            Theme::Black => match kind {
                TokenKind::Prompt => Rgba([35, 209, 139, 255]),
                TokenKind::Comment => Rgba([102, 102, 102, 255]),
                TokenKind::String => Rgba([229, 229, 16, 255]),
                TokenKind::Flag => Rgba([241, 76, 76, 255]),
                TokenKind::Number => Rgba([188, 63, 188, 255]),
                TokenKind::Text => self.default_fg(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backgrounds_differ_between_themes() {
        assert_ne!(Theme::Monokai.bg_color(), Theme::Black.bg_color());
        assert_eq!(Theme::Black.bg_color(), Rgba([0, 0, 0, 255]));
    }

    #[test]
    fn text_token_uses_default_foreground() {
        for theme in [Theme::Monokai, Theme::Black] {
            assert_eq!(theme.token_color(TokenKind::Text), theme.default_fg());
        }
    }
}
