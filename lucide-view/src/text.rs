//! Declarative text element for a single icon glyph.

use serde::{Deserialize, Serialize};

use lucide_core::{
    Color, FontProvider, Icon, IconFont, StyleAttributes, StyledString, DEFAULT_BASELINE_OFFSET,
};

/// A glyph text node: what a declarative view's body evaluates to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GlyphText {
    pub text: String,
    pub font: IconFont,
    pub baseline_offset: f32,
    /// `None` inherits the surrounding foreground color.
    pub foreground: Option<Color>,
}

impl GlyphText {
    pub fn new(icon: Icon, font: IconFont) -> Self {
        Self {
            text: icon.as_str().to_string(),
            font,
            baseline_offset: 0.0,
            foreground: None,
        }
    }

    pub fn baseline_offset(mut self, offset: f32) -> Self {
        self.baseline_offset = offset;
        self
    }

    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn to_styled_string(&self) -> StyledString {
        StyledString::new(
            self.text.clone(),
            StyleAttributes {
                font: self.font.clone(),
                baseline_offset: self.baseline_offset,
                foreground: self.foreground,
            },
        )
    }
}

/// Glyph text constructors on [`Icon`].
pub trait IconText {
    /// Text node at `size` with the default baseline offset.
    fn text(self, fonts: &mut dyn FontProvider, size: f32) -> GlyphText;

    fn text_with_offset(
        self,
        fonts: &mut dyn FontProvider,
        size: f32,
        baseline_offset: f32,
    ) -> GlyphText;
}

impl IconText for Icon {
    fn text(self, fonts: &mut dyn FontProvider, size: f32) -> GlyphText {
        self.text_with_offset(fonts, size, DEFAULT_BASELINE_OFFSET)
    }

    fn text_with_offset(
        self,
        fonts: &mut dyn FontProvider,
        size: f32,
        baseline_offset: f32,
    ) -> GlyphText {
        GlyphText::new(self, fonts.font(size)).baseline_offset(baseline_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::CountingFonts;

    #[test]
    fn test_icon_text_defaults() {
        let mut fonts = CountingFonts::new();
        let text = Icon::Activity.text(&mut fonts, 20.0);
        assert_eq!(text.text, Icon::Activity.as_str());
        assert_eq!(text.font.size, 20.0);
        assert_eq!(text.baseline_offset, -2.0);
        assert_eq!(text.foreground, None);
    }

    #[test]
    fn test_text_with_offset_and_color() {
        let mut fonts = CountingFonts::new();
        let text = Icon::Sun
            .text_with_offset(&mut fonts, 14.0, 1.0)
            .foreground(Color::WHITE);
        let styled = text.to_styled_string();
        assert_eq!(styled.attributes.baseline_offset, 1.0);
        assert_eq!(styled.attributes.foreground, Some(Color::WHITE));
        assert_eq!(styled.text, Icon::Sun.as_str());
    }
}
