//! Capability traits a host implements to render icons.
//!
//! The host (a text stack, a GUI toolkit) owns font registration and
//! glyph drawing. Everything above these traits (icon mapping, styled
//! strings, views) stays host-independent.

use crate::bitmap::Bitmap;
use crate::color::Color;
use crate::error::IconError;
use crate::icon::Icon;
use crate::style::{FontStyle, IconFont};

/// Supplies handles to the icon font, registering it on first use.
pub trait FontProvider {
    /// Family name the icon font is registered under.
    fn family(&self) -> &str;

    /// Register the font asset with the host unless that already
    /// succeeded. Failures are logged and retried on the next call.
    fn ensure_registered(&mut self) -> bool;

    /// Look up a registered face with exactly `style`.
    fn lookup(&self, size: f32, style: FontStyle) -> Option<IconFont>;

    /// Handle at `size`, or the reason none is available.
    ///
    /// A lookup miss after successful registration is reported as
    /// [`IconError::FontUnavailable`] rather than treated as fatal.
    fn try_font(&mut self, size: f32) -> Result<IconFont, IconError> {
        if !self.ensure_registered() {
            return Err(IconError::NotRegistered {
                family: self.family().to_string(),
            });
        }
        self.lookup(size, FontStyle::Normal)
            .ok_or_else(|| IconError::FontUnavailable {
                family: self.family().to_string(),
                size,
            })
    }

    /// Handle at `size`. Never fails: when the font is unavailable the
    /// handle comes back unresolved and the glyph renders as missing.
    fn font(&mut self, size: f32) -> IconFont {
        match self.try_font(size) {
            Ok(font) => font,
            Err(err) => {
                match &err {
                    IconError::FontUnavailable { .. } => log::error!("{err}"),
                    _ => log::warn!("Icon font unavailable: {err}"),
                }
                IconFont::unresolved(self.family(), size)
            }
        }
    }

    /// Handle with `style` if the host exposes such a face, otherwise
    /// the normal face.
    fn font_with_style(&mut self, size: f32, style: FontStyle) -> IconFont {
        let base = self.font(size);
        if style == FontStyle::Normal || !base.is_resolved() {
            return base;
        }
        match self.lookup(size, style) {
            Some(styled) => styled,
            None => {
                log::debug!("No {style:?} face for '{}', using normal", self.family());
                base
            }
        }
    }
}

/// Draws icons into offscreen bitmaps.
pub trait Rasterizer {
    /// Rasterize `icon` into a `size × size` bitmap, or `None` when no
    /// surface could be produced.
    fn rasterize(&mut self, icon: Icon, size: f32, color: Color) -> Option<Bitmap>;
}

// ===================================================================
// Tests
// ===================================================================
