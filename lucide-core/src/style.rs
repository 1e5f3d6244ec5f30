//! Font handles and styled strings handed to the host text renderer.

use serde::{Deserialize, Serialize};

use crate::color::Color;

// ── Font style enum ─────────────────────────────────────────────────

/// Font style (normal, italic, or oblique).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
    Oblique,
}

// ── Icon font handle ────────────────────────────────────────────────

/// Handle to the icon typeface at a given point size.
///
/// `resolved` is false when the host could not back the handle with a
/// registered face; text drawn with such a handle shows a missing glyph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IconFont {
    /// Family name the face was registered under.
    pub family: String,
    /// Point size.
    pub size: f32,
    /// Face style.
    pub style: FontStyle,
    /// Whether a registered face backs this handle.
    pub resolved: bool,
}

impl IconFont {
    pub fn new(family: impl Into<String>, size: f32, style: FontStyle) -> Self {
        Self {
            family: family.into(),
            size,
            style,
            resolved: true,
        }
    }

    /// Placeholder handle for a font the host could not provide.
    pub fn unresolved(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            style: FontStyle::Normal,
            resolved: false,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }
}

// ── Host font ───────────────────────────────────────────────────────

/// An application text font an icon should sit next to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HostFont {
    pub family: String,
    pub point_size: f32,
}

impl HostFont {
    pub fn new(family: impl Into<String>, point_size: f32) -> Self {
        Self {
            family: family.into(),
            point_size,
        }
    }
}

// ── Styled string ───────────────────────────────────────────────────

/// Rendering attributes for a glyph run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StyleAttributes {
    pub font: IconFont,
    /// Vertical shift in points; negative values move the glyph down.
    pub baseline_offset: f32,
    /// Foreground color; `None` inherits the host's current color.
    pub foreground: Option<Color>,
}

/// A glyph string paired with its rendering attributes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StyledString {
    pub text: String,
    pub attributes: StyleAttributes,
}

impl StyledString {
    pub fn new(text: impl Into<String>, attributes: StyleAttributes) -> Self {
        Self {
            text: text.into(),
            attributes,
        }
    }

    pub fn with_foreground(mut self, color: Color) -> Self {
        self.attributes.foreground = Some(color);
        self
    }

    pub fn font(&self) -> &IconFont {
        &self.attributes.font
    }
}
