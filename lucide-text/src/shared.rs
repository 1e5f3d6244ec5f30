//! Process-wide icon engine.
//!
//! Static convenience API over one
//! engine built from [`IconFontConfig::default()`] (the bundled font),
//! created on first use and guarded by a mutex. A poisoned lock is
//! recovered rather than propagated.

use std::sync::{LazyLock, Mutex, PoisonError};

use lucide_core::{
    Bitmap, Color, FontProvider, HostFont, Icon, IconFont, IconFontConfig, Rasterizer,
    StyledString,
};

use crate::engine::IconEngine;

static SHARED: LazyLock<Mutex<IconEngine>> =
    LazyLock::new(|| Mutex::new(IconEngine::new(IconFontConfig::default())));

/// Run `f` with exclusive access to the shared engine.
pub fn with_engine<R>(f: impl FnOnce(&mut IconEngine) -> R) -> R {
    let mut engine = SHARED.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut *engine)
}

/// Icon font handle at `size`.
pub fn font(size: f32) -> IconFont {
    with_engine(|engine| engine.font(size))
}

/// Styled glyph string for `icon` at `size`.
pub fn styled_string(icon: Icon, size: f32) -> StyledString {
    with_engine(|engine| {
        let offset = engine.config().baseline_offset;
        lucide_core::styled_string(engine, icon, size, offset)
    })
}

/// Styled glyph string for `icon` harmonized with `host`.
pub fn styled_string_for(icon: Icon, host: &HostFont) -> StyledString {
    with_engine(|engine| {
        let offset = engine.config().baseline_offset;
        lucide_core::styled_string_for(engine, icon, host, offset)
    })
}

/// `size × size` bitmap of `icon` drawn in `color`.
pub fn image(icon: Icon, size: f32, color: Color) -> Option<Bitmap> {
    with_engine(|engine| engine.rasterize(icon, size, color))
}
