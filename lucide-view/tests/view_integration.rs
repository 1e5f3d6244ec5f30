//! Views driven by the real cosmic-text host.
//!
//! The configured asset does not exist, so every render exercises the
//! degraded path: glyph text is still produced, the font is unresolved,
//! and each render retries registration.

use lucide_core::IconFontConfig;
use lucide_text::IconEngine;
use lucide_view::{GlyphText, Icon, IconLayerView, IconView, ViewBinding};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn missing_font_engine() -> IconEngine {
    IconEngine::new(IconFontConfig::with_file("/no/such/dir/lucide.ttf"))
}

#[test]
fn test_icon_view_renders_without_font() {
    init_logging();
    let mut engine = missing_font_engine();
    let mut view = IconView::new(Icon::AirVent).with_size(32.0);

    let text: GlyphText = view.render(&mut engine);
    assert_eq!(text.text, Icon::AirVent.as_str());
    assert_eq!(text.font.size, 32.0);
    assert!(!text.font.is_resolved());

    view.render(&mut engine);
    assert_eq!(engine.registration_attempts(), 2);
}

#[test]
fn test_layer_view_keeps_retrying() {
    init_logging();
    let mut engine = missing_font_engine();
    let mut view = IconLayerView::new(Icon::ShieldCheck, 20.0);

    view.render(&mut engine);
    view.render(&mut engine);
    assert!(view.is_font_stale());
    assert_eq!(engine.registration_attempts(), 2);
    assert_eq!(view.layer().string, Icon::ShieldCheck.as_str());
}
