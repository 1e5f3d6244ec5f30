//! Reactive binding between view properties and rendered glyph output.

use lucide_core::FontProvider;

/// A view whose rendered output is recomputed from its current
/// properties on every render pass.
///
/// Property setters never need a font provider; anything that depends
/// on the font is resolved in `render`.
pub trait ViewBinding {
    type Output;

    fn render(&mut self, fonts: &mut dyn FontProvider) -> Self::Output;
}
