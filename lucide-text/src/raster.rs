//! Icon rasterization into offscreen bitmaps.
//!
//! The styled glyph string is laid out by `cosmic-text` in a
//! `size × size` box (line height = size), drawn through the swash
//! cache and blended into a fresh [`Bitmap`]. Results are memoized in an
//! LRU keyed by (icon, size, color).

use cosmic_text::{Attrs, Buffer, Color as CColor, FontSystem, Metrics, Shaping, SwashCache};

use lucide_core::{styled_string, Bitmap, Color, Icon, Rasterizer, StyledString};

use crate::engine::{BitmapKey, IconEngine};

impl Rasterizer for IconEngine {
    fn rasterize(&mut self, icon: Icon, size: f32, color: Color) -> Option<Bitmap> {
        if !size.is_finite() || size <= 0.0 {
            log::warn!("Refusing to rasterize '{}' at size {size}", icon.name());
            return None;
        }

        let key: BitmapKey = (icon, size.to_bits(), color);
        if let Some(cached) = self.bitmaps.as_mut().and_then(|cache| cache.get(&key)) {
            log::debug!("Bitmap cache hit for '{}' @ {size}", icon.name());
            return Some(cached.clone());
        }

        let edge = size.ceil() as u32;
        let Some(mut bitmap) = Bitmap::new(edge, edge) else {
            log::warn!("Cannot allocate a {edge}x{edge} surface for '{}'", icon.name());
            return None;
        };

        let baseline_offset = self.config().baseline_offset;
        let styled = styled_string(self, icon, size, baseline_offset);
        if !styled.font().is_resolved() {
            log::warn!("Cannot rasterize '{}': icon font unavailable", icon.name());
            return None;
        }

        let attrs = self.attrs_for(styled.font());
        draw_styled(
            &mut self.font_system,
            &mut self.swash_cache,
            &styled,
            attrs,
            size,
            color,
            &mut bitmap,
        );

        if let Some(cache) = self.bitmaps.as_mut() {
            cache.put(key, bitmap.clone());
        }
        Some(bitmap)
    }
}

/// Lay out `styled` in a `size × size` box and blend it into `bitmap`.
fn draw_styled(
    font_system: &mut FontSystem,
    swash_cache: &mut SwashCache,
    styled: &StyledString,
    attrs: Attrs<'_>,
    size: f32,
    color: Color,
    bitmap: &mut Bitmap,
) {
    let mut buffer = Buffer::new(font_system, Metrics::new(size, size));
    buffer.set_size(font_system, Some(size), Some(size));
    buffer.set_text(font_system, &styled.text, attrs, Shaping::Advanced);
    buffer.shape_until_scroll(font_system, false);

    // Positive offsets raise the glyph; bitmap rows grow downward.
    let shift = (-styled.attributes.baseline_offset).round() as i32;
    let foreground = CColor::rgba(color.r, color.g, color.b, color.a);

    buffer.draw(font_system, swash_cache, foreground, |x, y, w, h, c| {
        bitmap.blend_rect(x, y + shift, w, h, Color::rgba(c.r(), c.g(), c.b(), c.a()));
    });
}

// ===================================================================
// Tests
// ===================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::tests::system_engine;
    use lucide_core::{FontProvider, IconFontConfig};

    #[test]
    fn test_rejects_non_positive_size() {
        let mut engine = IconEngine::new(IconFontConfig::default());
        assert!(engine.rasterize(Icon::Activity, 0.0, Color::BLACK).is_none());
        assert!(engine.rasterize(Icon::Activity, -4.0, Color::BLACK).is_none());
        assert!(engine.rasterize(Icon::Activity, f32::NAN, Color::BLACK).is_none());
        // Size checks happen before any registration attempt.
        assert_eq!(engine.registration_attempts(), 0);
    }

    #[test]
    fn test_rejects_oversized_surface() {
        let mut engine = IconEngine::new(IconFontConfig::default());
        assert!(engine.rasterize(Icon::Activity, 100_000.0, Color::BLACK).is_none());
    }

    #[test]
    fn test_unregistered_font_gives_none() {
        let config = IconFontConfig::with_file("/no/such/lucide.ttf");
        let mut engine = IconEngine::new(config);
        assert!(engine.rasterize(Icon::Star, 24.0, Color::BLACK).is_none());
        assert_eq!(engine.registration_attempts(), 1);
        assert_eq!(engine.cached_bitmaps(), 0);
    }

    #[test]
    fn test_bitmap_is_size_by_size() {
        let mut engine = system_engine();
        for size in [16.0, 24.0, 48.0] {
            let bitmap = engine.rasterize(Icon::Activity, size, Color::BLACK).unwrap();
            assert_eq!(bitmap.width(), size as u32);
            assert_eq!(bitmap.height(), size as u32);
        }
    }

    #[test]
    fn test_fractional_size_rounds_up() {
        let mut engine = system_engine();
        let bitmap = engine.rasterize(Icon::Activity, 20.5, Color::BLACK).unwrap();
        assert_eq!((bitmap.width(), bitmap.height()), (21, 21));
    }

    #[test]
    fn test_rasterize_is_deterministic() {
        let mut engine = system_engine();
        let first = engine.rasterize(Icon::Heart, 32.0, Color::BLACK).unwrap();
        engine.clear_cache();
        let second = engine.rasterize(Icon::Heart, 32.0, Color::BLACK).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_cache_reuses_bitmaps() {
        let mut engine = system_engine();
        engine.rasterize(Icon::Heart, 32.0, Color::BLACK).unwrap();
        engine.rasterize(Icon::Heart, 32.0, Color::BLACK).unwrap();
        assert_eq!(engine.cached_bitmaps(), 1);

        engine.rasterize(Icon::Heart, 32.0, Color::WHITE).unwrap();
        assert_eq!(engine.cached_bitmaps(), 2);
        assert_eq!(engine.registration_attempts(), 1);
    }

    #[test]
    fn test_draws_with_requested_color() {
        let mut engine = system_engine();
        // Ensure the family is registered so the fallback glyph draws.
        assert!(engine.ensure_registered());
        let red = Color::rgb(255, 0, 0);
        let bitmap = engine.rasterize(Icon::Heart, 48.0, red).unwrap();
        for px in bitmap.pixels().iter().filter(|p| p[3] == 255) {
            assert_eq!(&px[..3], &[255, 0, 0]);
        }
    }
}
