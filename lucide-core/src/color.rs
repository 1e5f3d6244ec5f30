//! RGBA color used for glyph foregrounds and tints.

use serde::{Deserialize, Serialize};

/// 8-bit RGBA color (non-premultiplied).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_black() {
        assert_eq!(Color::default(), Color::BLACK);
        assert_eq!(Color::BLACK.a, 255);
    }

    #[test]
    fn test_to_array_matches_channels() {
        assert_eq!(Color::rgba(1, 2, 3, 4).to_array(), [1, 2, 3, 4]);
        assert_eq!(Color::TRANSPARENT.to_array(), [0; 4]);
    }
}
