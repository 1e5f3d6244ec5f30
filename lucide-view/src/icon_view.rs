//! Declarative icon view.
//!
//! Holds only an icon and a size; the body is evaluated from those on
//! every render, so changing either shows up on the next pass.

use lucide_core::{Color, FontProvider, Icon, DEFAULT_ICON_SIZE};

use crate::binding::ViewBinding;
use crate::text::GlyphText;

#[derive(Clone, Debug, PartialEq)]
pub struct IconView {
    icon: Icon,
    size: f32,
    foreground: Option<Color>,
}

impl IconView {
    pub fn new(icon: Icon) -> Self {
        Self {
            icon,
            size: DEFAULT_ICON_SIZE,
            foreground: None,
        }
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn with_foreground(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    pub fn icon(&self) -> Icon {
        self.icon
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn set_icon(&mut self, icon: Icon) {
        self.icon = icon;
    }

    pub fn set_size(&mut self, size: f32) {
        self.size = size;
    }

    /// The view's content: the glyph in the icon font at `size`.
    pub fn body(&self, fonts: &mut dyn FontProvider) -> GlyphText {
        let text = GlyphText::new(self.icon, fonts.font(self.size));
        match self.foreground {
            Some(color) => text.foreground(color),
            None => text,
        }
    }
}

impl ViewBinding for IconView {
    type Output = GlyphText;

    fn render(&mut self, fonts: &mut dyn FontProvider) -> GlyphText {
        self.body(fonts)
    }
}
