//! Icon engine — registers the icon font with `cosmic-text` and hands
//! out font handles.
//!
//! The engine owns a `FontSystem` (font database + shaping) and a
//! `SwashCache` (glyph rasterization). The icon font asset is loaded
//! into the font database lazily, on the first font request, behind a
//! [`RegistrationGuard`]; a failed load is logged and retried on the
//! next request.
//!
//! ## Registration
//!
//! ```text
//! font(size) ──► ensure_registered()
//!                   │ first success only
//!                   ▼
//!      AssetSource::load() ──► fontdb::Database::load_font_source()
//!                   │
//!                   ▼
//!      family check (faces not named `config.family` are removed)
//! ```

use cosmic_text::fontdb::{self, FaceInfo, Source};
use cosmic_text::{Attrs, Family, FontSystem, Style as CStyle, SwashCache};
use lru::LruCache;
use std::fmt;
use std::num::NonZeroUsize;
use std::sync::Arc;

use lucide_core::{
    Bitmap, Color, FontProvider, FontStyle, Icon, IconError, IconFont, IconFontConfig,
    RegistrationGuard,
};

/// Locale handed to the private font system; icon glyphs are
/// locale-independent.
const ENGINE_LOCALE: &str = "en-US";

/// Rasterized bitmap cache key: icon, size bits, color.
pub(crate) type BitmapKey = (Icon, u32, Color);

/// Icon font host backed by `cosmic-text`.
pub struct IconEngine {
    pub(crate) font_system: FontSystem,
    pub(crate) swash_cache: SwashCache,
    config: IconFontConfig,
    registration: RegistrationGuard,
    /// LRU of rasterized icons; `None` when caching is disabled.
    pub(crate) bitmaps: Option<LruCache<BitmapKey, Bitmap>>,
}

impl IconEngine {
    /// Create an engine with a private, empty font database.
    ///
    /// No system fonts are scanned; only the icon font is ever loaded.
    pub fn new(config: IconFontConfig) -> Self {
        let font_system =
            FontSystem::new_with_locale_and_db(ENGINE_LOCALE.to_string(), fontdb::Database::new());
        Self::with_font_system(config, font_system)
    }

    /// Create an engine that registers the icon font into an existing
    /// font system (e.g. the application's text engine).
    pub fn with_font_system(config: IconFontConfig, font_system: FontSystem) -> Self {
        let bitmaps = NonZeroUsize::new(config.raster_cache_capacity).map(LruCache::new);
        Self {
            font_system,
            swash_cache: SwashCache::new(),
            config,
            registration: RegistrationGuard::new(),
            bitmaps,
        }
    }

    pub fn config(&self) -> &IconFontConfig {
        &self.config
    }

    pub fn is_registered(&self) -> bool {
        self.registration.is_registered()
    }

    /// Number of times the font asset has been loaded so far.
    pub fn registration_attempts(&self) -> usize {
        self.registration.attempts()
    }

    pub fn font_system(&self) -> &FontSystem {
        &self.font_system
    }

    pub fn font_system_mut(&mut self) -> &mut FontSystem {
        &mut self.font_system
    }

    /// Give the font system back, e.g. to hand it to a text engine.
    pub fn into_font_system(self) -> FontSystem {
        self.font_system
    }

    /// Number of rasterized icons currently cached.
    pub fn cached_bitmaps(&self) -> usize {
        self.bitmaps.as_ref().map_or(0, |cache| cache.len())
    }

    pub fn clear_cache(&mut self) {
        if let Some(cache) = self.bitmaps.as_mut() {
            cache.clear();
        }
    }

    /// Icons whose code point has no glyph in the registered icon face.
    ///
    /// `None` until registration succeeds.
    pub fn unmapped_icons(&mut self) -> Option<Vec<Icon>> {
        if !self.is_registered() {
            return None;
        }
        unmapped_in(&mut self.font_system, &self.config.family)
    }

    /// `cosmic-text` attributes selecting the face behind `font`.
    pub fn attrs_for<'a>(&self, font: &'a IconFont) -> Attrs<'a> {
        Attrs::new()
            .family(Family::Name(&font.family))
            .style(to_cosmic_style(font.style))
    }
}

impl FontProvider for IconEngine {
    fn family(&self) -> &str {
        &self.config.family
    }

    fn ensure_registered(&mut self) -> bool {
        let Self {
            registration,
            font_system,
            config,
            ..
        } = self;
        registration.ensure(|| register_asset(font_system, config))
    }

    fn lookup(&self, size: f32, style: FontStyle) -> Option<IconFont> {
        let wanted = to_cosmic_style(style);
        self.font_system
            .db()
            .faces()
            .find(|face| face.style == wanted && has_family(face, &self.config.family))
            .map(|_| IconFont::new(self.config.family.clone(), size, style))
    }
}

impl fmt::Display for IconEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IconEngine('{}', registered={}, attempts={}, cached={})",
            self.config.family,
            self.is_registered(),
            self.registration_attempts(),
            self.cached_bitmaps(),
        )
    }
}

// ── Registration internals ──────────────────────────────────────────

/// Load the configured asset into the font database.
fn register_asset(font_system: &mut FontSystem, config: &IconFontConfig) -> Result<(), IconError> {
    let data = config.asset.load()?;
    let ids = font_system
        .db_mut()
        .load_font_source(Source::Binary(Arc::new(data)));

    if ids.is_empty() {
        return Err(IconError::RegistrationRejected {
            reason: format!("no font faces in {}", config.asset.describe()),
        });
    }

    let db = font_system.db();
    let matching = ids
        .iter()
        .filter(|id| db.face(**id).is_some_and(|face| has_family(face, &config.family)))
        .count();

    if matching == 0 {
        let found = ids
            .first()
            .and_then(|id| db.face(*id))
            .and_then(|face| face.families.first())
            .map(|(name, _)| name.clone())
            .unwrap_or_default();
        // Don't leave stray faces behind for the next attempt.
        for id in ids {
            font_system.db_mut().remove_face(id);
        }
        return Err(IconError::RegistrationRejected {
            reason: format!(
                "asset provides family '{found}', expected '{}'",
                config.family
            ),
        });
    }

    log::info!(
        "Registered icon font '{}' ({} face(s)) from {}",
        config.family,
        matching,
        config.asset.describe(),
    );
    if let Some(missing) = unmapped_in(font_system, &config.family) {
        if !missing.is_empty() {
            log::warn!(
                "Icon font '{}' has no glyph for {} of {} icons",
                config.family,
                missing.len(),
                Icon::ALL.len(),
            );
        }
    }
    Ok(())
}

/// Icons the normal face of `family` has no cmap entry for.
fn unmapped_in(font_system: &mut FontSystem, family: &str) -> Option<Vec<Icon>> {
    let id = font_system
        .db()
        .faces()
        .find(|face| face.style == CStyle::Normal && has_family(face, family))
        .map(|face| face.id)?;
    let font = font_system.get_font(id)?;
    let charmap = font.as_swash().charmap();
    let missing = Icon::ALL
        .iter()
        .copied()
        .filter(|icon| charmap.map(icon.codepoint()) == 0)
        .collect();
    Some(missing)
}

fn has_family(face: &FaceInfo, family: &str) -> bool {
    face.families.iter().any(|(name, _)| name == family)
}

/// Convert our style enum to cosmic-text's.
fn to_cosmic_style(style: FontStyle) -> CStyle {
    match style {
        FontStyle::Normal => CStyle::Normal,
        FontStyle::Italic => CStyle::Italic,
        FontStyle::Oblique => CStyle::Oblique,
    }
}

// ===================================================================
// Tests
// ===================================================================
