//! Icon font configuration.
//!
//! Plain data with serde defaults so a partial JSON document only needs
//! to name the fields it overrides:
//!
//! ```json
//! { "family": "lucide", "asset": { "file": "/opt/app/fonts/lucide.ttf" } }
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::IconError;
use crate::format::{DEFAULT_BASELINE_OFFSET, DEFAULT_ICON_SIZE};

/// File name of the font shipped with the library.
pub const BUNDLED_FONT_FILE: &str = "lucide.ttf";

/// Family name the bundled font registers under.
pub const DEFAULT_FAMILY: &str = "lucide";

/// Font data compiled into the library.
#[cfg(feature = "bundled")]
static BUNDLED_FONT: &[u8] =
    include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/lucide.ttf"));

/// Where the icon font's bytes come from.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetSource {
    /// The font shipped with the library: compiled in with the `bundled`
    /// feature, otherwise `lucide.ttf` next to the running executable.
    #[default]
    Bundled,
    /// A font file on disk.
    File(PathBuf),
    /// In-memory font data, typically from `include_bytes!`.
    #[serde(skip)]
    Bytes(Arc<[u8]>),
}

impl AssetSource {
    /// Where an unembedded bundled font is looked up: beside the
    /// running executable.
    pub fn bundled_path() -> Result<PathBuf, IconError> {
        let exe = std::env::current_exe()?;
        let dir = exe.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(dir.join(BUNDLED_FONT_FILE))
    }

    /// Whether the bundled font is compiled into this build.
    pub const fn is_embedded() -> bool {
        cfg!(feature = "bundled")
    }

    pub fn from_static(bytes: &'static [u8]) -> Self {
        Self::Bytes(Arc::from(bytes))
    }

    /// Read the font data.
    pub fn load(&self) -> Result<Vec<u8>, IconError> {
        let data = match self {
            AssetSource::Bundled => load_bundled()?,
            AssetSource::File(path) => read_file(path.clone())?,
            AssetSource::Bytes(bytes) => bytes.to_vec(),
        };
        if data.is_empty() {
            return Err(IconError::EmptyAsset);
        }
        Ok(data)
    }

    /// Short description for diagnostics.
    pub fn describe(&self) -> String {
        match self {
            AssetSource::Bundled if Self::is_embedded() => "<embedded lucide.ttf>".to_string(),
            AssetSource::Bundled => match Self::bundled_path() {
                Ok(path) => path.display().to_string(),
                Err(_) => format!("<{BUNDLED_FONT_FILE} beside executable>"),
            },
            AssetSource::File(path) => path.display().to_string(),
            AssetSource::Bytes(bytes) => format!("<{} bytes in memory>", bytes.len()),
        }
    }
}

#[cfg(feature = "bundled")]
fn load_bundled() -> Result<Vec<u8>, IconError> {
    Ok(BUNDLED_FONT.to_vec())
}

#[cfg(not(feature = "bundled"))]
fn load_bundled() -> Result<Vec<u8>, IconError> {
    read_file(AssetSource::bundled_path()?)
}

fn read_file(path: PathBuf) -> Result<Vec<u8>, IconError> {
    std::fs::read(&path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => IconError::AssetMissing { path },
        _ => IconError::Io(err),
    })
}

/// Configuration of the icon font and its helpers.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct IconFontConfig {
    /// Family name the font asset must register under.
    pub family: String,
    /// Font data source.
    pub asset: AssetSource,
    /// Icon size used by views when none is given.
    pub default_size: f32,
    /// Baseline offset applied to styled strings.
    pub baseline_offset: f32,
    /// Number of rasterized bitmaps kept in the LRU cache (0 disables it).
    pub raster_cache_capacity: usize,
}

impl Default for IconFontConfig {
    fn default() -> Self {
        Self {
            family: DEFAULT_FAMILY.to_string(),
            asset: AssetSource::Bundled,
            default_size: DEFAULT_ICON_SIZE,
            baseline_offset: DEFAULT_BASELINE_OFFSET,
            raster_cache_capacity: 256,
        }
    }
}

impl IconFontConfig {
    pub fn from_json_str(json: &str) -> Result<Self, IconError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Default configuration reading the font from `path`.
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self {
            asset: AssetSource::File(path.into()),
            ..Default::default()
        }
    }
}

// ===================================================================
// Tests
// ===================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = IconFontConfig::default();
        assert_eq!(config.family, "lucide");
        assert!(matches!(config.asset, AssetSource::Bundled));
        assert_eq!(config.default_size, 24.0);
        assert_eq!(config.baseline_offset, -2.0);
        assert_eq!(config.raster_cache_capacity, 256);
    }

    #[test]
    fn test_partial_json() {
        let config = IconFontConfig::from_json_str(
            r#"{ "family": "icons", "asset": { "file": "/opt/fonts/icons.ttf" } }"#,
        )
        .unwrap();
        assert_eq!(config.family, "icons");
        assert!(matches!(&config.asset, AssetSource::File(p) if p.ends_with("icons.ttf")));
        assert_eq!(config.default_size, 24.0);
    }

    #[test]
    fn test_bundled_json() {
        let config = IconFontConfig::from_json_str(r#"{ "asset": "bundled" }"#).unwrap();
        assert!(matches!(config.asset, AssetSource::Bundled));
    }

    #[test]
    fn test_invalid_json() {
        let err = IconFontConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, IconError::Config(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let source = AssetSource::File(PathBuf::from("/definitely/not/here/lucide.ttf"));
        let err = source.load().unwrap_err();
        assert!(matches!(err, IconError::AssetMissing { .. }));
    }

    #[test]
    fn test_load_bytes() {
        let source = AssetSource::from_static(b"font");
        assert_eq!(source.load().unwrap(), b"font");
        assert!(source.describe().contains("4 bytes"));
    }

    #[test]
    fn test_load_empty_bytes() {
        let source = AssetSource::from_static(b"");
        assert!(matches!(source.load(), Err(IconError::EmptyAsset)));
    }

    #[test]
    fn test_bundled_font_sits_beside_executable() {
        let exe = std::env::current_exe().unwrap();
        let expected = exe.parent().unwrap().join("lucide.ttf");
        assert_eq!(AssetSource::bundled_path().unwrap(), expected);
    }

    #[cfg(not(feature = "bundled"))]
    #[test]
    fn test_unembedded_bundled_font_reads_from_executable_dir() {
        assert!(!AssetSource::is_embedded());
        let expected = AssetSource::bundled_path().unwrap();
        assert_eq!(AssetSource::Bundled.describe(), expected.display().to_string());
        if !expected.exists() {
            let err = AssetSource::Bundled.load().unwrap_err();
            assert!(matches!(err, IconError::AssetMissing { path } if path == expected));
        }
    }

    #[cfg(feature = "bundled")]
    #[test]
    fn test_embedded_bundled_font_loads() {
        assert!(AssetSource::is_embedded());
        assert!(!AssetSource::Bundled.load().unwrap().is_empty());
    }
}
