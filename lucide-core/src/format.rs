//! Icon → styled string formatting.
//!
//! Pure functions of their inputs; the only side effect is the one-time
//! font registration the [`FontProvider`] performs on first use.
//!
//! ```text
//! Icon ──► glyph string ──┐
//!                          ├──► StyledString { text, StyleAttributes }
//! FontProvider.font(size) ─┘
//! ```

use crate::icon::Icon;
use crate::provider::FontProvider;
use crate::style::{FontStyle, HostFont, StyleAttributes, StyledString};

/// Baseline shift applied when none is given; sits icons on the text
/// baseline of a same-size Latin font.
pub const DEFAULT_BASELINE_OFFSET: f32 = -2.0;

/// Icon size used by views when none is given.
pub const DEFAULT_ICON_SIZE: f32 = 24.0;

/// Icons set next to host text are drawn one point larger.
pub const HARMONIZE_SIZE_DELTA: f32 = 1.0;

/// Icon size matching a host font of `point_size`.
pub fn harmonized_size(point_size: f32) -> f32 {
    point_size + HARMONIZE_SIZE_DELTA
}

/// Attributes for an icon drawn at `size`.
pub fn attributes(
    fonts: &mut dyn FontProvider,
    size: f32,
    baseline_offset: f32,
) -> StyleAttributes {
    StyleAttributes {
        font: fonts.font(size),
        baseline_offset,
        foreground: None,
    }
}

/// Attributes for an icon set inline with `host` text: one point larger,
/// italic when the icon font has an italic face.
pub fn attributes_for(
    fonts: &mut dyn FontProvider,
    host: &HostFont,
    baseline_offset: f32,
) -> StyleAttributes {
    let target_size = harmonized_size(host.point_size);
    StyleAttributes {
        font: fonts.font_with_style(target_size, FontStyle::Italic),
        baseline_offset,
        foreground: None,
    }
}

/// Styled glyph string for `icon` at `size`.
pub fn styled_string(
    fonts: &mut dyn FontProvider,
    icon: Icon,
    size: f32,
    baseline_offset: f32,
) -> StyledString {
    StyledString::new(icon.as_str(), attributes(fonts, size, baseline_offset))
}

/// Styled glyph string for `icon` harmonized with `host`.
pub fn styled_string_for(
    fonts: &mut dyn FontProvider,
    icon: Icon,
    host: &HostFont,
    baseline_offset: f32,
) -> StyledString {
    StyledString::new(icon.as_str(), attributes_for(fonts, host, baseline_offset))
}

impl Icon {
    /// Styled glyph string at `size` with the default baseline offset.
    pub fn styled(self, fonts: &mut dyn FontProvider, size: f32) -> StyledString {
        styled_string(fonts, self, size, DEFAULT_BASELINE_OFFSET)
    }

    /// Styled glyph string harmonized with `host`.
    pub fn styled_for(self, fonts: &mut dyn FontProvider, host: &HostFont) -> StyledString {
        styled_string_for(fonts, self, host, DEFAULT_BASELINE_OFFSET)
    }
}

// ===================================================================
// Tests
// ===================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::provider::tests::MockFonts;

    #[test]
    fn test_harmonized_size() {
        assert_eq!(harmonized_size(17.0), 18.0);
        assert_eq!(harmonized_size(0.0), 1.0);
    }

    #[test]
    fn test_styled_string_contents() {
        let mut fonts = MockFonts::new();
        let s = styled_string(&mut fonts, Icon::ShieldCheck, 22.0, DEFAULT_BASELINE_OFFSET);
        assert_eq!(s.text, Icon::ShieldCheck.as_str());
        assert_eq!(s.attributes.font.size, 22.0);
        assert_eq!(s.attributes.baseline_offset, -2.0);
        assert_eq!(s.attributes.foreground, None);
    }

    #[test]
    fn test_styled_string_deterministic() {
        let mut fonts = MockFonts::new();
        let a = Icon::LogOut.styled(&mut fonts, 18.0);
        let b = Icon::LogOut.styled(&mut fonts, 18.0);
        assert_eq!(a, b);
        assert_eq!(fonts.attempts, 1);
    }

    #[test]
    fn test_custom_baseline_offset() {
        let mut fonts = MockFonts::new();
        let s = styled_string(&mut fonts, Icon::Activity, 24.0, 3.5);
        assert_eq!(s.attributes.baseline_offset, 3.5);
    }

    #[test]
    fn test_host_font_size_plus_one() {
        let mut fonts = MockFonts::new();
        let host = HostFont::new("Inter", 17.0);
        let s = Icon::Bell.styled_for(&mut fonts, &host);
        assert_eq!(s.attributes.font.size, 18.0);
        assert_eq!(s.text, Icon::Bell.as_str());
    }

    #[test]
    fn test_host_font_italic_fallback() {
        let mut fonts = MockFonts::new();
        let attrs = attributes_for(&mut fonts, &HostFont::new("Inter", 12.0), -1.0);
        assert!(attrs.font.is_resolved());
        assert_eq!(attrs.font.style, FontStyle::Normal);
        assert_eq!(attrs.baseline_offset, -1.0);
    }

    #[test]
    fn test_host_font_uses_italic_face() {
        let mut fonts = MockFonts::new();
        fonts.styles.push(FontStyle::Italic);
        let attrs = attributes_for(&mut fonts, &HostFont::new("Inter", 12.0), -1.0);
        assert_eq!(attrs.font.style, FontStyle::Italic);
        assert_eq!(attrs.font.size, 13.0);
    }

    #[test]
    fn test_unregistered_font_still_formats() {
        let mut fonts = MockFonts::new();
        fonts.fail_registrations = 1;
        let s = Icon::Heart.styled(&mut fonts, 16.0).with_foreground(Color::WHITE);
        assert_eq!(s.text, Icon::Heart.as_str());
        assert!(!s.font().is_resolved());
        assert_eq!(s.attributes.foreground, Some(Color::WHITE));
    }
}
